use crate::auth::AuthManager;
use crate::client::ImageClientConfig;
use crate::errors::{AuthenticationError, ImagesError, ImagesResult};
use async_trait::async_trait;
use http::{HeaderMap, HeaderValue};
use secrecy::{ExposeSecret, SecretString};

/// Bearer-token authentication with an optional organization header
pub struct ApiKeyAuthManager {
    api_key: SecretString,
    organization_id: Option<String>,
}

impl ApiKeyAuthManager {
    pub fn new(api_key: SecretString) -> Self {
        if !api_key.expose_secret().starts_with("sk-") {
            tracing::warn!("API key does not match expected OpenAI format (sk-*)");
        }

        Self {
            api_key,
            organization_id: None,
        }
    }

    pub fn from_config(config: &ImageClientConfig) -> Self {
        let manager = Self::new(config.api_key.clone());
        match &config.organization_id {
            Some(org_id) => manager.with_organization(org_id.clone()),
            None => manager,
        }
    }

    pub fn with_organization(mut self, org_id: impl Into<String>) -> Self {
        self.organization_id = Some(org_id.into());
        self
    }
}

#[async_trait]
impl AuthManager for ApiKeyAuthManager {
    async fn apply_auth(&self, headers: &mut HeaderMap) -> ImagesResult<()> {
        let auth_value = format!("Bearer {}", self.api_key.expose_secret());
        let mut auth_header = HeaderValue::from_str(&auth_value).map_err(|_| {
            ImagesError::Authentication(AuthenticationError::InvalidApiKey(
                "API key contains characters not allowed in a header".to_string(),
            ))
        })?;
        auth_header.set_sensitive(true);
        headers.insert(http::header::AUTHORIZATION, auth_header);

        if let Some(org_id) = &self.organization_id {
            headers.insert(
                "OpenAI-Organization",
                HeaderValue::from_str(org_id).map_err(|_| {
                    ImagesError::Authentication(AuthenticationError::InvalidOrganizationId(
                        "Invalid organization ID format".to_string(),
                    ))
                })?,
            );
        }

        Ok(())
    }
}
