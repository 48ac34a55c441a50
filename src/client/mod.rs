mod client_impl;
mod config;
mod factory;

pub use client_impl::{normalize_response, ImageRequestClient};
pub use config::{
    ImageClientConfig, ImageClientConfigBuilder, DEFAULT_BASE_URL, DEFAULT_NUMBER_OF_IMAGES,
    DEFAULT_TIMEOUT, ENV_API_KEY, ENV_BASE_URL, ENV_DEFAULT_IMAGE_RESPONSE_FORMAT,
    ENV_DEFAULT_IMAGE_SIZE, ENV_DEFAULT_NUMBER_OF_IMAGES, ENV_MAX_RETRIES,
    ENV_MS_BETWEEN_RETRIES, ENV_ORGANIZATION_ID,
};
pub use factory::ImageClientBuilder;
