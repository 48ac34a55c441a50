use crate::errors::{ImagesError, ImagesResult, ValidationError};
use crate::services::images::{ImageGenerationRequest, ImageSize};

/// Upper bound the generations endpoint accepts for `n`.
pub const MAX_IMAGES_PER_REQUEST: u32 = 10;

/// Checks a dynamically supplied size against the closed set of sizes.
///
/// Returns the matching `ImageSize` unchanged, or `ValidationError::InvalidSize`
/// naming the rejected value and every legal one.
pub fn validate_size(candidate: &str) -> ImagesResult<ImageSize> {
    candidate.parse::<ImageSize>().map_err(ImagesError::from)
}

pub struct ImageRequestValidator;

impl ImageRequestValidator {
    pub fn validate(request: &ImageGenerationRequest) -> ImagesResult<()> {
        if request.prompt.trim().is_empty() {
            return Err(ImagesError::Validation(
                ValidationError::MissingRequiredField("prompt".to_string()),
            ));
        }

        if let Some(n) = request.n {
            Self::validate_count(n)?;
        }

        Ok(())
    }

    pub fn validate_count(n: u32) -> ImagesResult<()> {
        if n == 0 || n > MAX_IMAGES_PER_REQUEST {
            return Err(ImagesError::Validation(ValidationError::ValueOutOfRange {
                field: "n".to_string(),
                min: "1".to_string(),
                max: MAX_IMAGES_PER_REQUEST.to_string(),
                value: n.to_string(),
            }));
        }
        Ok(())
    }
}
