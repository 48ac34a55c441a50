use crate::errors::{ErrorMapper, ImagesError, ImagesResult};
use bytes::Bytes;
use reqwest::Response;
use serde::de::DeserializeOwned;

pub struct ResponseParser;

impl ResponseParser {
    pub async fn parse_bytes(response: Response) -> ImagesResult<Bytes> {
        let status = response.status();

        if status.is_success() {
            Ok(response.bytes().await?)
        } else {
            let headers = response.headers().clone();
            let body = response.bytes().await.unwrap_or_default();
            Err(ErrorMapper::from_response(status.as_u16(), &headers, &body))
        }
    }

    pub fn parse_json<T: DeserializeOwned>(data: &[u8]) -> ImagesResult<T> {
        serde_json::from_slice(data).map_err(|e| {
            ImagesError::Deserialization(format!(
                "Failed to deserialize JSON: {}. Data: {}",
                e,
                String::from_utf8_lossy(data)
            ))
        })
    }
}
