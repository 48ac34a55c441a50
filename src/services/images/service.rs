use crate::auth::AuthManager;
use crate::errors::{ImagesError, ImagesResult};
use crate::resilience::RetryPolicy;
use crate::services::images::{ImageGenerationRequest, ImageGenerationResponse, ImageRequestValidator};
use crate::transport::{HttpTransport, ResponseParser};
use async_trait::async_trait;
use bytes::Bytes;
use std::sync::Arc;
use tracing::instrument;

const GENERATIONS_PATH: &str = "/images/generations";

/// The remote `create(prompt, n, size, response_format)` capability.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ImageService: Send + Sync {
    async fn create(&self, request: ImageGenerationRequest)
        -> ImagesResult<ImageGenerationResponse>;
}

pub struct ImageServiceImpl {
    transport: Arc<dyn HttpTransport>,
    auth_manager: Arc<dyn AuthManager>,
    retry_policy: RetryPolicy,
}

impl ImageServiceImpl {
    pub fn new(
        transport: Arc<dyn HttpTransport>,
        auth_manager: Arc<dyn AuthManager>,
        retry_policy: RetryPolicy,
    ) -> Self {
        Self {
            transport,
            auth_manager,
            retry_policy,
        }
    }
}

#[async_trait]
impl ImageService for ImageServiceImpl {
    #[instrument(
        skip(self, request),
        fields(n = ?request.n, size = ?request.size, response_format = ?request.response_format)
    )]
    async fn create(
        &self,
        request: ImageGenerationRequest,
    ) -> ImagesResult<ImageGenerationResponse> {
        ImageRequestValidator::validate(&request)?;

        let mut headers = http::HeaderMap::new();
        self.auth_manager.apply_auth(&mut headers).await?;

        let body = serde_json::to_vec(&request)
            .map(Bytes::from)
            .map_err(|e| ImagesError::Serialization(e.to_string()))?;

        let raw = self
            .retry_policy
            .execute(|| {
                self.transport
                    .post_json(GENERATIONS_PATH, body.clone(), headers.clone())
            })
            .await?;

        ResponseParser::parse_json(&raw)
    }
}
