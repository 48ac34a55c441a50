//! Mock HTTP transport for testing

use crate::errors::{ImagesError, ImagesResult};
use crate::transport::HttpTransport;
use async_trait::async_trait;
use bytes::Bytes;
use http::HeaderMap;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// Replays queued responses in order and records every request
#[derive(Clone, Default)]
pub struct MockHttpTransport {
    inner: Arc<Mutex<MockHttpTransportInner>>,
}

#[derive(Default)]
struct MockHttpTransportInner {
    responses: VecDeque<ImagesResult<serde_json::Value>>,
    requests: Vec<MockRequest>,
}

#[derive(Debug, Clone)]
pub struct MockRequest {
    pub path: String,
    pub body: serde_json::Value,
    pub headers: HeaderMap,
}

impl MockHttpTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_json_response(self, response: serde_json::Value) -> Self {
        self.inner.lock().unwrap().responses.push_back(Ok(response));
        self
    }

    pub fn with_error_response(self, error: ImagesError) -> Self {
        self.inner.lock().unwrap().responses.push_back(Err(error));
        self
    }

    pub fn requests(&self) -> Vec<MockRequest> {
        self.inner.lock().unwrap().requests.clone()
    }

    pub fn request_count(&self) -> usize {
        self.inner.lock().unwrap().requests.len()
    }

    pub fn verify_request(&self, path: &str) -> bool {
        self.inner
            .lock()
            .unwrap()
            .requests
            .iter()
            .any(|r| r.path == path)
    }
}

#[async_trait]
impl HttpTransport for MockHttpTransport {
    async fn post_json(&self, path: &str, body: Bytes, headers: HeaderMap) -> ImagesResult<Bytes> {
        let next = {
            let mut inner = self.inner.lock().unwrap();
            inner.requests.push(MockRequest {
                path: path.to_string(),
                body: serde_json::from_slice(&body).unwrap_or(serde_json::Value::Null),
                headers,
            });
            inner.responses.pop_front()
        };

        match next {
            Some(Ok(value)) => Ok(Bytes::from(serde_json::to_vec(&value)?)),
            Some(Err(error)) => Err(error),
            None => Err(ImagesError::MalformedResponse(
                "no mock response configured".to_string(),
            )),
        }
    }
}
