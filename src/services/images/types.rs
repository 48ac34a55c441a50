use crate::errors::{ImagesError, ImagesResult, ValidationError};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Image dimensions accepted by the generations endpoint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ImageSize {
    #[serde(rename = "256x256")]
    Size256,
    #[serde(rename = "512x512")]
    Size512,
    #[default]
    #[serde(rename = "1024x1024")]
    Size1024,
}

impl ImageSize {
    pub const ALL: [ImageSize; 3] = [ImageSize::Size256, ImageSize::Size512, ImageSize::Size1024];

    pub fn as_str(&self) -> &'static str {
        match self {
            ImageSize::Size256 => "256x256",
            ImageSize::Size512 => "512x512",
            ImageSize::Size1024 => "1024x1024",
        }
    }

    pub fn allowed_values() -> Vec<String> {
        Self::ALL.iter().map(|s| s.as_str().to_string()).collect()
    }
}

impl fmt::Display for ImageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ImageSize {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|size| size.as_str() == s)
            .ok_or_else(|| ValidationError::InvalidSize {
                value: s.to_string(),
                allowed: Self::allowed_values(),
            })
    }
}

/// Which representation of each generated image the API returns.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImageResponseFormat {
    #[default]
    Url,
    B64Json,
}

impl ImageResponseFormat {
    pub const ALL: [ImageResponseFormat; 2] =
        [ImageResponseFormat::Url, ImageResponseFormat::B64Json];

    /// Wire name, which is also the key of the field holding the image in each record.
    pub fn as_str(&self) -> &'static str {
        match self {
            ImageResponseFormat::Url => "url",
            ImageResponseFormat::B64Json => "b64_json",
        }
    }
}

impl fmt::Display for ImageResponseFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ImageResponseFormat {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|format| format.as_str() == s)
            .ok_or_else(|| ValidationError::InvalidResponseFormat {
                value: s.to_string(),
                allowed: Self::ALL.iter().map(|f| f.as_str().to_string()).collect(),
            })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImageGenerationRequest {
    pub prompt: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub n: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_format: Option<ImageResponseFormat>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<ImageSize>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
}

impl ImageGenerationRequest {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            model: None,
            n: None,
            response_format: None,
            size: None,
            user: None,
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    pub fn with_n(mut self, n: u32) -> Self {
        self.n = Some(n);
        self
    }

    pub fn with_size(mut self, size: ImageSize) -> Self {
        self.size = Some(size);
        self
    }

    pub fn with_response_format(mut self, format: ImageResponseFormat) -> Self {
        self.response_format = Some(format);
        self
    }

    pub fn with_user(mut self, user: impl Into<String>) -> Self {
        self.user = Some(user.into());
        self
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ImageGenerationResponse {
    pub created: i64,
    pub data: Vec<ImageData>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ImageData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub b64_json: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub revised_prompt: Option<String>,
}

impl ImageData {
    /// Returns the field selected by `format`, if the record carries it.
    pub fn value(&self, format: ImageResponseFormat) -> Option<&str> {
        match format {
            ImageResponseFormat::Url => self.url.as_deref(),
            ImageResponseFormat::B64Json => self.b64_json.as_deref(),
        }
    }

    pub fn decode_b64_json(&self) -> ImagesResult<Vec<u8>> {
        let encoded = self.b64_json.as_deref().ok_or_else(|| {
            ImagesError::MalformedResponse("image record has no b64_json field".to_string())
        })?;

        STANDARD
            .decode(encoded)
            .map_err(|e| ImagesError::MalformedResponse(format!("invalid base64 payload: {}", e)))
    }
}

/// Images returned to the caller: a scalar when one image was requested,
/// otherwise every returned image in response order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ImageResult {
    Single(String),
    Multiple(Vec<String>),
}

impl ImageResult {
    pub fn len(&self) -> usize {
        match self {
            ImageResult::Single(_) => 1,
            ImageResult::Multiple(items) => items.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn first(&self) -> Option<&str> {
        match self {
            ImageResult::Single(item) => Some(item.as_str()),
            ImageResult::Multiple(items) => items.first().map(String::as_str),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        let items: &[String] = match self {
            ImageResult::Single(item) => std::slice::from_ref(item),
            ImageResult::Multiple(items) => items,
        };
        items.iter().map(String::as_str)
    }

    pub fn into_vec(self) -> Vec<String> {
        match self {
            ImageResult::Single(item) => vec![item],
            ImageResult::Multiple(items) => items,
        }
    }
}
