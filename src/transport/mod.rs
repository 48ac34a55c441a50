mod http_transport;
mod response_parser;

pub use http_transport::ReqwestTransport;
pub use response_parser::ResponseParser;

use crate::errors::ImagesResult;
use async_trait::async_trait;
use bytes::Bytes;
use http::HeaderMap;

/// Sends a JSON body to an API path and returns the raw success body.
///
/// Non-success statuses are mapped to `ImagesError` by the implementation.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn post_json(&self, path: &str, body: Bytes, headers: HeaderMap) -> ImagesResult<Bytes>;
}
