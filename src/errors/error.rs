use crate::errors::categories::{
    AuthenticationError, ConfigurationError, NetworkError, RateLimitError, ServerError,
    ValidationError,
};
use thiserror::Error;

pub type ImagesResult<T> = Result<T, ImagesError>;

#[derive(Error, Debug)]
pub enum ImagesError {
    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    #[error("Authentication error: {0}")]
    Authentication(#[from] AuthenticationError),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Rate limit error: {0}")]
    RateLimit(#[from] RateLimitError),

    #[error("Network error: {0}")]
    Network(#[from] NetworkError),

    #[error("Server error: {0}")]
    Server(#[from] ServerError),

    #[error("Request error: {status_code} - {message}")]
    Request {
        status_code: u16,
        message: String,
        error_type: Option<String>,
        error_code: Option<String>,
    },

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),

    #[error("Malformed image response: {0}")]
    MalformedResponse(String),

    #[error("Request timed out: {0}")]
    Timeout(String),
}

impl ImagesError {
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            ImagesError::RateLimit(RateLimitError::RateLimitExceeded { .. })
                | ImagesError::RateLimit(RateLimitError::TooManyRequests { .. })
                | ImagesError::Network(_)
                | ImagesError::Server(_)
                | ImagesError::Timeout(_)
        )
    }

    /// True for failures that originate on the remote side of the request,
    /// as opposed to local configuration or argument validation.
    pub fn is_remote(&self) -> bool {
        !matches!(
            self,
            ImagesError::Configuration(_)
                | ImagesError::Validation(_)
                | ImagesError::Serialization(_)
        )
    }

    pub fn is_invalid_size(&self) -> bool {
        matches!(
            self,
            ImagesError::Validation(ValidationError::InvalidSize { .. })
        )
    }

    pub fn is_authentication_error(&self) -> bool {
        matches!(self, ImagesError::Authentication(_))
    }

    pub fn is_rate_limit_error(&self) -> bool {
        matches!(self, ImagesError::RateLimit(_))
    }

    pub fn retry_after_secs(&self) -> Option<u64> {
        match self {
            ImagesError::RateLimit(err) => err.retry_after(),
            _ => None,
        }
    }

    pub fn error_code(&self) -> Option<&str> {
        match self {
            ImagesError::Request { error_code, .. } => error_code.as_deref(),
            _ => None,
        }
    }

    pub fn status_code(&self) -> Option<u16> {
        match self {
            ImagesError::Request { status_code, .. } => Some(*status_code),
            ImagesError::Authentication(_) => Some(401),
            ImagesError::RateLimit(_) => Some(429),
            ImagesError::Server(ServerError::InternalError(_)) => Some(500),
            ImagesError::Server(ServerError::BadGateway(_)) => Some(502),
            ImagesError::Server(ServerError::ServiceUnavailable(_)) => Some(503),
            ImagesError::Server(ServerError::GatewayTimeout(_)) => Some(504),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ImagesError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ImagesError::Timeout(err.to_string())
        } else if err.is_connect() {
            ImagesError::Network(NetworkError::ConnectionFailed(err.to_string()))
        } else {
            ImagesError::Network(NetworkError::RequestFailed(err.to_string()))
        }
    }
}

impl From<serde_json::Error> for ImagesError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_io() {
            ImagesError::Serialization(err.to_string())
        } else {
            ImagesError::Deserialization(err.to_string())
        }
    }
}

impl From<url::ParseError> for ImagesError {
    fn from(err: url::ParseError) -> Self {
        ImagesError::Configuration(ConfigurationError::InvalidBaseUrl(err.to_string()))
    }
}
