//! Mock implementations for testing
//!
//! Hand-written doubles for the transport and auth seams so services can be
//! exercised without HTTP.

mod mock_auth;
mod mock_transport;

pub use mock_auth::MockAuthManager;
pub use mock_transport::{MockHttpTransport, MockRequest};
