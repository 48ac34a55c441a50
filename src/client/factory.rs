use crate::auth::{ApiKeyAuthManager, AuthManager};
use crate::client::{ImageClientConfig, ImageClientConfigBuilder, ImageRequestClient};
use crate::errors::ImagesResult;
use crate::resilience::RetryPolicy;
use crate::services::images::{ImageResponseFormat, ImageService, ImageServiceImpl, ImageSize};
use crate::transport::{HttpTransport, ReqwestTransport};
use std::sync::Arc;
use std::time::Duration;

/// Assembles an `ImageRequestClient` from configuration and optional collaborators.
///
/// Unset collaborators default to `ReqwestTransport`, `ApiKeyAuthManager` and a
/// `RetryPolicy` built from the resolved retry settings.
pub struct ImageClientBuilder {
    config_builder: ImageClientConfigBuilder,
    config: Option<ImageClientConfig>,
    transport: Option<Arc<dyn HttpTransport>>,
    auth_manager: Option<Arc<dyn AuthManager>>,
    service: Option<Arc<dyn ImageService>>,
}

impl ImageClientBuilder {
    pub fn new() -> Self {
        Self {
            config_builder: ImageClientConfigBuilder::new(),
            config: None,
            transport: None,
            auth_manager: None,
            service: None,
        }
    }

    /// Uses an already-resolved configuration, ignoring builder settings.
    pub fn with_config(mut self, config: ImageClientConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.config_builder = self.config_builder.api_key(api_key);
        self
    }

    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.config_builder = self.config_builder.base_url(base_url);
        self
    }

    pub fn organization_id(mut self, org_id: impl Into<String>) -> Self {
        self.config_builder = self.config_builder.organization_id(org_id);
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config_builder = self.config_builder.timeout(timeout);
        self
    }

    pub fn max_retries(mut self, max_retries: u32) -> Self {
        self.config_builder = self.config_builder.max_retries(max_retries);
        self
    }

    pub fn ms_between_retries(mut self, ms: u64) -> Self {
        self.config_builder = self.config_builder.ms_between_retries(ms);
        self
    }

    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.config_builder = self.config_builder.model(model);
        self
    }

    pub fn user(mut self, user: impl Into<String>) -> Self {
        self.config_builder = self.config_builder.user(user);
        self
    }

    pub fn default_size(mut self, size: ImageSize) -> Self {
        self.config_builder = self.config_builder.default_size(size);
        self
    }

    pub fn default_number_of_images(mut self, n: u32) -> Self {
        self.config_builder = self.config_builder.default_number_of_images(n);
        self
    }

    pub fn default_response_format(mut self, format: ImageResponseFormat) -> Self {
        self.config_builder = self.config_builder.default_response_format(format);
        self
    }

    pub fn with_transport(mut self, transport: Arc<dyn HttpTransport>) -> Self {
        self.transport = Some(transport);
        self
    }

    pub fn with_auth_manager(mut self, auth_manager: Arc<dyn AuthManager>) -> Self {
        self.auth_manager = Some(auth_manager);
        self
    }

    /// Replaces the whole request stack; transport and auth settings are then unused.
    pub fn with_service(mut self, service: Arc<dyn ImageService>) -> Self {
        self.service = Some(service);
        self
    }

    /// Builds the client, resolving unset defaults from the process environment.
    pub fn build(self) -> ImagesResult<ImageRequestClient> {
        self.build_with_env(|name| std::env::var(name).ok())
    }

    /// Builds the client, resolving unset defaults through `lookup`.
    pub fn build_with_env<F>(self, lookup: F) -> ImagesResult<ImageRequestClient>
    where
        F: Fn(&str) -> Option<String>,
    {
        let config = match self.config {
            Some(config) => config,
            None => self.config_builder.build_with_env(lookup)?,
        };

        let service: Arc<dyn ImageService> = match self.service {
            Some(service) => service,
            None => {
                let transport: Arc<dyn HttpTransport> = match self.transport {
                    Some(transport) => transport,
                    None => Arc::new(ReqwestTransport::new(&config)?),
                };
                let auth_manager: Arc<dyn AuthManager> = self
                    .auth_manager
                    .unwrap_or_else(|| Arc::new(ApiKeyAuthManager::from_config(&config)));
                let retry_policy = RetryPolicy::new(config.retry_config());

                Arc::new(ImageServiceImpl::new(transport, auth_manager, retry_policy))
            }
        };

        Ok(ImageRequestClient::new(config, service))
    }
}

impl Default for ImageClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
