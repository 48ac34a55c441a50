//! Retry handling for remote image requests.

mod retry;

pub use retry::{RetryConfig, RetryPolicy, DEFAULT_MAX_RETRIES, DEFAULT_RETRY_INTERVAL};
