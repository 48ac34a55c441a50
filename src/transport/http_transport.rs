use crate::client::ImageClientConfig;
use crate::errors::{ConfigurationError, ImagesResult};
use crate::transport::{HttpTransport, ResponseParser};
use async_trait::async_trait;
use bytes::Bytes;
use http::HeaderMap;
use reqwest::Client;
use url::Url;

/// HTTP transport implementation using reqwest
pub struct ReqwestTransport {
    client: Client,
    base_url: Url,
}

impl ReqwestTransport {
    /// Creates a new ReqwestTransport from configuration
    pub fn new(config: &ImageClientConfig) -> ImagesResult<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()
            .map_err(|e| ConfigurationError::HttpClient(e.to_string()))?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
        })
    }

    /// Builds a full URL from a path
    fn build_url(&self, path: &str) -> String {
        let path = path.trim_start_matches('/');
        format!("{}/{}", self.base_url.as_str().trim_end_matches('/'), path)
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    #[tracing::instrument(skip(self, body, headers), fields(bytes = body.len()))]
    async fn post_json(&self, path: &str, body: Bytes, headers: HeaderMap) -> ImagesResult<Bytes> {
        let url = self.build_url(path);

        let response = self
            .client
            .post(&url)
            .headers(headers)
            .header(http::header::CONTENT_TYPE, mime::APPLICATION_JSON.as_ref())
            .body(body)
            .send()
            .await?;

        tracing::debug!(status = response.status().as_u16(), "Received response");
        ResponseParser::parse_bytes(response).await
    }
}
