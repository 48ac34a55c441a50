//! Client configuration.
//!
//! Every image default is resolved once, at build time, in priority order:
//! the value set on the builder, then the environment, then the hardcoded default.

use secrecy::{ExposeSecret, SecretString};
use std::time::Duration;
use url::Url;

use crate::errors::{ConfigurationError, ImagesError, ImagesResult};
use crate::resilience::{RetryConfig, DEFAULT_MAX_RETRIES, DEFAULT_RETRY_INTERVAL};
use crate::services::images::{
    validate_size, ImageRequestValidator, ImageResponseFormat, ImageSize,
};

/// Default base URL for the OpenAI API.
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Default request timeout (60 seconds).
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Default number of images per request.
pub const DEFAULT_NUMBER_OF_IMAGES: u32 = 1;

pub const ENV_API_KEY: &str = "OPENAI_API_KEY";
pub const ENV_BASE_URL: &str = "OPENAI_BASE_URL";
pub const ENV_ORGANIZATION_ID: &str = "OPENAI_ORGANIZATION_ID";
pub const ENV_MAX_RETRIES: &str = "OPENAI_MAX_RETRIES";
pub const ENV_MS_BETWEEN_RETRIES: &str = "OPENAI_MS_BETWEEN_RETRIES";
pub const ENV_DEFAULT_IMAGE_SIZE: &str = "OPENAI_DEFAULT_IMAGE_SIZE";
pub const ENV_DEFAULT_NUMBER_OF_IMAGES: &str = "OPENAI_DEFAULT_NUMBER_OF_IMAGES";
pub const ENV_DEFAULT_IMAGE_RESPONSE_FORMAT: &str = "OPENAI_DEFAULT_IMAGE_RESPONSE_FORMAT";

/// Resolved, immutable configuration for an image client.
#[derive(Clone)]
pub struct ImageClientConfig {
    pub(crate) api_key: SecretString,
    pub base_url: Url,
    pub organization_id: Option<String>,
    pub timeout: Duration,
    pub max_retries: u32,
    pub retry_interval: Duration,
    pub user_agent: String,
    pub model: Option<String>,
    pub user: Option<String>,
    pub default_size: ImageSize,
    pub default_number_of_images: u32,
    pub default_response_format: ImageResponseFormat,
}

impl ImageClientConfig {
    pub fn builder() -> ImageClientConfigBuilder {
        ImageClientConfigBuilder::new()
    }

    /// Creates a configuration from environment variables alone.
    ///
    /// # Environment Variables
    ///
    /// - `OPENAI_API_KEY` (required)
    /// - `OPENAI_BASE_URL`, `OPENAI_ORGANIZATION_ID`
    /// - `OPENAI_MAX_RETRIES`, `OPENAI_MS_BETWEEN_RETRIES`
    /// - `OPENAI_DEFAULT_IMAGE_SIZE`, `OPENAI_DEFAULT_NUMBER_OF_IMAGES`,
    ///   `OPENAI_DEFAULT_IMAGE_RESPONSE_FORMAT`
    pub fn from_env() -> ImagesResult<Self> {
        ImageClientConfigBuilder::new().build()
    }

    pub fn api_key(&self) -> &str {
        self.api_key.expose_secret()
    }

    /// Last four characters of the key, for diagnostics.
    pub fn api_key_hint(&self) -> String {
        let key = self.api_key.expose_secret();
        match key.char_indices().rev().nth(3) {
            Some((start, _)) if start > 0 => format!("...{}", &key[start..]),
            _ => "****".to_string(),
        }
    }

    pub fn retry_config(&self) -> RetryConfig {
        RetryConfig::new(self.max_retries, self.retry_interval)
    }
}

impl std::fmt::Debug for ImageClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImageClientConfig")
            .field("api_key", &"[REDACTED]")
            .field("base_url", &self.base_url.as_str())
            .field("organization_id", &self.organization_id)
            .field("timeout", &self.timeout)
            .field("max_retries", &self.max_retries)
            .field("retry_interval", &self.retry_interval)
            .field("model", &self.model)
            .field("user", &self.user)
            .field("default_size", &self.default_size)
            .field("default_number_of_images", &self.default_number_of_images)
            .field("default_response_format", &self.default_response_format)
            .finish()
    }
}

/// Builder for `ImageClientConfig`.
#[derive(Default, Clone)]
pub struct ImageClientConfigBuilder {
    api_key: Option<String>,
    base_url: Option<String>,
    organization_id: Option<String>,
    timeout: Option<Duration>,
    max_retries: Option<u32>,
    retry_interval: Option<Duration>,
    model: Option<String>,
    user: Option<String>,
    default_size: Option<ImageSize>,
    default_number_of_images: Option<u32>,
    default_response_format: Option<ImageResponseFormat>,
}

impl ImageClientConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn organization_id(mut self, org_id: impl Into<String>) -> Self {
        self.organization_id = Some(org_id.into());
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = Some(max_retries);
        self
    }

    pub fn retry_interval(mut self, interval: Duration) -> Self {
        self.retry_interval = Some(interval);
        self
    }

    pub fn ms_between_retries(self, ms: u64) -> Self {
        self.retry_interval(Duration::from_millis(ms))
    }

    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// End-user identifier sent with every request.
    pub fn user(mut self, user: impl Into<String>) -> Self {
        self.user = Some(user.into());
        self
    }

    pub fn default_size(mut self, size: ImageSize) -> Self {
        self.default_size = Some(size);
        self
    }

    pub fn default_number_of_images(mut self, n: u32) -> Self {
        self.default_number_of_images = Some(n);
        self
    }

    pub fn default_response_format(mut self, format: ImageResponseFormat) -> Self {
        self.default_response_format = Some(format);
        self
    }

    /// Builds the configuration, falling back to the process environment.
    pub fn build(self) -> ImagesResult<ImageClientConfig> {
        self.build_with_env(|name| std::env::var(name).ok())
    }

    /// Builds the configuration, falling back to `lookup` for environment values.
    ///
    /// Empty environment values count as unset.
    pub fn build_with_env<F>(self, lookup: F) -> ImagesResult<ImageClientConfig>
    where
        F: Fn(&str) -> Option<String>,
    {
        let env = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let api_key = self.api_key.or_else(|| env(ENV_API_KEY)).ok_or_else(|| {
            ConfigurationError::MissingApiKey(format!(
                "API key must be provided or set in {}",
                ENV_API_KEY
            ))
        })?;
        if api_key.is_empty() {
            return Err(ConfigurationError::MissingApiKey("API key is empty".to_string()).into());
        }

        let base_url = self
            .base_url
            .or_else(|| env(ENV_BASE_URL))
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let base_url = Url::parse(&base_url).map_err(|e| {
            ConfigurationError::InvalidBaseUrl(format!("{}: {}", base_url, e))
        })?;

        let timeout = self.timeout.unwrap_or(DEFAULT_TIMEOUT);
        if timeout.is_zero() {
            return Err(ConfigurationError::InvalidTimeout(
                "Timeout must be greater than 0".to_string(),
            )
            .into());
        }

        let max_retries = match self.max_retries {
            Some(retries) => retries,
            None => match env(ENV_MAX_RETRIES) {
                Some(raw) => parse_env_number(ENV_MAX_RETRIES, &raw)?,
                None => DEFAULT_MAX_RETRIES,
            },
        };

        let retry_interval = match self.retry_interval {
            Some(interval) => interval,
            None => match env(ENV_MS_BETWEEN_RETRIES) {
                Some(raw) => Duration::from_millis(parse_env_number(ENV_MS_BETWEEN_RETRIES, &raw)?),
                None => DEFAULT_RETRY_INTERVAL,
            },
        };

        let default_size = match self.default_size {
            Some(size) => size,
            None => match env(ENV_DEFAULT_IMAGE_SIZE) {
                Some(raw) => validate_size(raw.trim())?,
                None => ImageSize::default(),
            },
        };

        // A count of zero counts as unset at every level.
        let default_number_of_images = match self.default_number_of_images.filter(|n| *n != 0) {
            Some(n) => n,
            None => match env(ENV_DEFAULT_NUMBER_OF_IMAGES) {
                Some(raw) => match parse_env_number::<u32>(ENV_DEFAULT_NUMBER_OF_IMAGES, &raw)? {
                    0 => DEFAULT_NUMBER_OF_IMAGES,
                    n => n,
                },
                None => DEFAULT_NUMBER_OF_IMAGES,
            },
        };
        ImageRequestValidator::validate_count(default_number_of_images)?;

        let default_response_format = match self.default_response_format {
            Some(format) => format,
            None => match env(ENV_DEFAULT_IMAGE_RESPONSE_FORMAT) {
                Some(raw) => raw.trim().parse::<ImageResponseFormat>()?,
                None => ImageResponseFormat::default(),
            },
        };

        let config = ImageClientConfig {
            api_key: SecretString::new(api_key),
            base_url,
            organization_id: self.organization_id.or_else(|| env(ENV_ORGANIZATION_ID)),
            timeout,
            max_retries,
            retry_interval,
            user_agent: default_user_agent(),
            model: self.model,
            user: self.user,
            default_size,
            default_number_of_images,
            default_response_format,
        };

        tracing::debug!(
            api_key = %config.api_key_hint(),
            size = %config.default_size,
            number_of_images = config.default_number_of_images,
            response_format = %config.default_response_format,
            max_retries = config.max_retries,
            retry_interval_ms = config.retry_interval.as_millis() as u64,
            "Resolved image client configuration"
        );

        Ok(config)
    }
}

fn parse_env_number<T: std::str::FromStr>(name: &str, raw: &str) -> ImagesResult<T> {
    raw.trim().parse::<T>().map_err(|_| {
        ImagesError::Configuration(ConfigurationError::InvalidDefault {
            name: name.to_string(),
            value: raw.to_string(),
            reason: "expected a non-negative integer".to_string(),
        })
    })
}

fn default_user_agent() -> String {
    format!("integrations-openai-images/{}", env!("CARGO_PKG_VERSION"))
}
