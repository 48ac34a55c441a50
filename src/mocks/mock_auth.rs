//! Mock auth manager for testing

use crate::auth::AuthManager;
use crate::errors::{AuthenticationError, ImagesError, ImagesResult};
use async_trait::async_trait;
use http::HeaderMap;

#[derive(Clone, Default)]
pub struct MockAuthManager {
    error: Option<String>,
}

impl MockAuthManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every `apply_auth` call fail with an invalid-key error
    pub fn with_error(mut self, message: impl Into<String>) -> Self {
        self.error = Some(message.into());
        self
    }
}

#[async_trait]
impl AuthManager for MockAuthManager {
    async fn apply_auth(&self, headers: &mut HeaderMap) -> ImagesResult<()> {
        if let Some(message) = &self.error {
            return Err(ImagesError::Authentication(
                AuthenticationError::InvalidApiKey(message.clone()),
            ));
        }
        headers.insert(
            http::header::AUTHORIZATION,
            http::HeaderValue::from_static("Bearer sk-mock"),
        );
        Ok(())
    }
}
