mod service;
mod types;
mod validation;


pub use service::{ImageService, ImageServiceImpl};
#[cfg(test)]
pub use service::MockImageService;
pub use types::{
    ImageData, ImageGenerationRequest, ImageGenerationResponse, ImageResponseFormat,
    ImageResult, ImageSize,
};
pub use validation::{validate_size, ImageRequestValidator, MAX_IMAGES_PER_REQUEST};
