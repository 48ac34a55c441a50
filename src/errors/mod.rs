mod categories;
mod error;
mod mapping;

pub use categories::{
    AuthenticationError, ConfigurationError, NetworkError, RateLimitError, ServerError,
    ValidationError,
};
pub use error::{ImagesError, ImagesResult};
pub use mapping::{ApiErrorDetail, ApiErrorResponse, ErrorMapper};
