//! OpenAI image generation client.
//!
//! Wraps `POST /images/generations` behind [`ImageRequestClient`], which resolves
//! image size, count and response format from explicit arguments, the environment
//! and built-in defaults, validates the size locally, and returns either a single
//! URL/base64 string or a list of them.
//!
//! ```rust,no_run
//! use integrations_openai_images::{ImageRequestClient, ImageResult, ImageSize};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = ImageRequestClient::builder()
//!         .api_key("sk-...")
//!         .max_retries(3)
//!         .ms_between_retries(500)
//!         .build()?;
//!
//!     let result = client
//!         .generate_images("a lighthouse at dusk", Some(2), Some(ImageSize::Size512))
//!         .await?;
//!     match result {
//!         ImageResult::Single(url) => println!("{}", url),
//!         ImageResult::Multiple(urls) => urls.iter().for_each(|url| println!("{}", url)),
//!     }
//!     Ok(())
//! }
//! ```

pub mod auth;
pub mod client;
pub mod errors;
pub mod resilience;
pub mod services;
pub mod transport;

#[cfg(test)]
pub mod mocks;

pub use client::{
    normalize_response, ImageClientBuilder, ImageClientConfig, ImageClientConfigBuilder,
    ImageRequestClient,
};
pub use errors::{ImagesError, ImagesResult, ValidationError};
pub use services::images::{
    validate_size, ImageData, ImageGenerationRequest, ImageGenerationResponse,
    ImageResponseFormat, ImageResult, ImageService, ImageServiceImpl, ImageSize,
};

pub mod prelude {
    pub use crate::client::{ImageClientBuilder, ImageClientConfig, ImageRequestClient};
    pub use crate::errors::{ImagesError, ImagesResult};
    pub use crate::services::images::{ImageResponseFormat, ImageResult, ImageSize};
}
