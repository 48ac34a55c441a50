use crate::errors::{AuthenticationError, ImagesError, RateLimitError, ServerError};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorDetail,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct ApiErrorDetail {
    pub message: String,
    #[serde(rename = "type")]
    pub error_type: Option<String>,
    pub code: Option<String>,
    pub param: Option<String>,
}

pub struct ErrorMapper;

impl ErrorMapper {
    /// Maps an HTTP status code and optional error body to an `ImagesError`
    pub fn map_status_code(
        status_code: u16,
        error_response: Option<ApiErrorResponse>,
    ) -> ImagesError {
        let error_detail = error_response.map(|r| r.error);
        let message = error_detail
            .as_ref()
            .map(|d| d.message.clone())
            .unwrap_or_else(|| format!("HTTP error: {}", status_code));
        let error_type = error_detail.as_ref().and_then(|d| d.error_type.clone());
        let error_code = error_detail.as_ref().and_then(|d| d.code.clone());

        match status_code {
            401 => {
                if message.contains("expired") {
                    ImagesError::Authentication(AuthenticationError::ExpiredApiKey(message))
                } else {
                    ImagesError::Authentication(AuthenticationError::InvalidApiKey(message))
                }
            }
            403 => {
                if message.contains("permission") {
                    ImagesError::Authentication(AuthenticationError::InsufficientPermissions(
                        message,
                    ))
                } else {
                    ImagesError::Authentication(AuthenticationError::Unauthorized(message))
                }
            }
            429 => {
                if error_code.as_deref() == Some("insufficient_quota") {
                    ImagesError::RateLimit(RateLimitError::QuotaExceeded(message))
                } else {
                    ImagesError::RateLimit(RateLimitError::RateLimitExceeded { message })
                }
            }
            500 => ImagesError::Server(ServerError::InternalError(message)),
            502 => ImagesError::Server(ServerError::BadGateway(message)),
            503 => ImagesError::Server(ServerError::ServiceUnavailable(message)),
            504 => ImagesError::Server(ServerError::GatewayTimeout(message)),
            _ => ImagesError::Request {
                status_code,
                message,
                error_type,
                error_code,
            },
        }
    }

    /// Maps a non-success response, upgrading rate limits with `Retry-After`
    pub fn from_response(status_code: u16, headers: &http::HeaderMap, body: &[u8]) -> ImagesError {
        let error_response = Self::parse_error_response(body);
        let error = Self::map_status_code(status_code, error_response);

        match (error, Self::extract_retry_after(headers)) {
            (
                ImagesError::RateLimit(RateLimitError::RateLimitExceeded { message }),
                Some(retry_after),
            ) => ImagesError::RateLimit(RateLimitError::TooManyRequests {
                message,
                retry_after_secs: Some(retry_after),
            }),
            (error, _) => error,
        }
    }

    /// Extracts the `retry-after` header value in seconds
    pub fn extract_retry_after(headers: &http::HeaderMap) -> Option<u64> {
        headers
            .get(http::header::RETRY_AFTER)
            .and_then(|v| v.to_str().ok())
            .and_then(|s| s.trim().parse().ok())
    }

    pub fn parse_error_response(body: &[u8]) -> Option<ApiErrorResponse> {
        serde_json::from_slice(body).ok()
    }
}
