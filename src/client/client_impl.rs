use crate::client::{ImageClientBuilder, ImageClientConfig};
use crate::errors::{ImagesError, ImagesResult};
use crate::services::images::{
    validate_size, ImageGenerationRequest, ImageGenerationResponse, ImageRequestValidator,
    ImageResponseFormat, ImageResult, ImageService, ImageSize,
};
use std::sync::Arc;
use tracing::instrument;

/// Generates images with the defaults resolved at construction.
///
/// Per-call arguments override the stored count and size for that call only;
/// the configuration itself never changes after the client is built.
pub struct ImageRequestClient {
    config: ImageClientConfig,
    service: Arc<dyn ImageService>,
}

impl ImageRequestClient {
    pub fn builder() -> ImageClientBuilder {
        ImageClientBuilder::new()
    }

    /// Creates a client over an already-built image service.
    pub fn new(config: ImageClientConfig, service: Arc<dyn ImageService>) -> Self {
        Self { config, service }
    }

    /// Creates a client configured entirely from the environment.
    pub fn from_env() -> ImagesResult<Self> {
        ImageClientBuilder::new().build()
    }

    pub fn config(&self) -> &ImageClientConfig {
        &self.config
    }

    /// Checks a dynamically supplied size against the legal sizes.
    pub fn validate_size(candidate: &str) -> ImagesResult<ImageSize> {
        validate_size(candidate)
    }

    /// Sends `prompt` to the generations endpoint.
    ///
    /// `count` and `size` fall back to the stored defaults; a count of zero
    /// counts as unset. Returns a single
    /// string when the effective count is 1 and a list otherwise; see
    /// [`normalize_response`] for how the list is populated.
    #[instrument(skip(self, prompt))]
    pub async fn generate_images(
        &self,
        prompt: &str,
        count: Option<u32>,
        size: Option<ImageSize>,
    ) -> ImagesResult<ImageResult> {
        let count = count
            .filter(|n| *n != 0)
            .unwrap_or(self.config.default_number_of_images);
        let size = size.unwrap_or(self.config.default_size);
        ImageRequestValidator::validate_count(count)?;

        let mut request = ImageGenerationRequest::new(prompt)
            .with_n(count)
            .with_size(size)
            .with_response_format(self.config.default_response_format);
        if let Some(model) = &self.config.model {
            request = request.with_model(model.clone());
        }
        if let Some(user) = &self.config.user {
            request = request.with_user(user.clone());
        }

        let response = self.service.create(request).await?;
        self.normalize_response(count, &response)
    }

    /// Like [`generate_images`](Self::generate_images), for sizes that arrive as
    /// strings. The size is validated before anything is sent.
    pub async fn generate_images_raw(
        &self,
        prompt: &str,
        count: Option<u32>,
        size: Option<&str>,
    ) -> ImagesResult<ImageResult> {
        let size = size.map(validate_size).transpose()?;
        self.generate_images(prompt, count, size).await
    }

    /// Normalizes a response using the stored response format.
    pub fn normalize_response(
        &self,
        requested_count: u32,
        response: &ImageGenerationResponse,
    ) -> ImagesResult<ImageResult> {
        normalize_response(requested_count, self.config.default_response_format, response)
    }
}

/// Reshapes a raw response according to the requested image count.
///
/// With `requested_count == 1` only the first record is used and a scalar is
/// returned. Otherwise every returned record is included in order, whether or
/// not the API returned exactly `requested_count` records.
pub fn normalize_response(
    requested_count: u32,
    format: ImageResponseFormat,
    response: &ImageGenerationResponse,
) -> ImagesResult<ImageResult> {
    let extract = |index: usize| -> ImagesResult<String> {
        response
            .data
            .get(index)
            .ok_or_else(|| {
                ImagesError::MalformedResponse("response contained no image records".to_string())
            })?
            .value(format)
            .map(str::to_string)
            .ok_or_else(|| {
                ImagesError::MalformedResponse(format!(
                    "image record {} has no {} field",
                    index, format
                ))
            })
    };

    if requested_count == 1 {
        return extract(0).map(ImageResult::Single);
    }

    if response.data.len() != requested_count as usize {
        tracing::warn!(
            requested = requested_count,
            returned = response.data.len(),
            "Image count differs from request"
        );
    }

    (0..response.data.len())
        .map(extract)
        .collect::<ImagesResult<Vec<_>>>()
        .map(ImageResult::Multiple)
}
