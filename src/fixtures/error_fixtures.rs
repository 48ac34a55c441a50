//! Error fixtures

use crate::errors::{ImagesError, RateLimitError, ServerError};

pub fn service_unavailable() -> ImagesError {
    ImagesError::Server(ServerError::ServiceUnavailable(
        "The server is overloaded".to_string(),
    ))
}

pub fn rate_limited() -> ImagesError {
    ImagesError::RateLimit(RateLimitError::RateLimitExceeded {
        message: "Rate limit reached for images per minute".to_string(),
    })
}

pub fn content_policy_violation() -> ImagesError {
    ImagesError::Request {
        status_code: 400,
        message: "Your request was rejected as a result of our safety system.".to_string(),
        error_type: Some("invalid_request_error".to_string()),
        error_code: Some("content_policy_violation".to_string()),
    }
}
