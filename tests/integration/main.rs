//! Integration tests using WireMock
//!
//! These tests drive the image client against a mock HTTP server, covering
//! serialization, authentication headers, retries and error mapping.

mod images;

use integrations_openai_images::prelude::*;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const TEST_API_KEY: &str = "sk-test-api-key";

/// Helper to create a mock server
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Helper to match an authenticated image generation request
pub fn generations_mock() -> wiremock::MockBuilder {
    Mock::given(method("POST"))
        .and(path("/images/generations"))
        .and(header("Authorization", format!("Bearer {}", TEST_API_KEY).as_str()))
}

/// Helper to create success response templates
pub fn success_response(body: serde_json::Value) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(body)
}

/// Helper to create error response templates
pub fn error_response(status: u16, error_body: serde_json::Value) -> ResponseTemplate {
    ResponseTemplate::new(status).set_body_json(error_body)
}

/// Client pointed at the mock server, isolated from the process environment
pub fn client_for(server: &MockServer, builder: ImageClientBuilder) -> ImageRequestClient {
    builder
        .api_key(TEST_API_KEY)
        .base_url(server.uri())
        .ms_between_retries(10)
        .build_with_env(|_| None)
        .expect("Failed to build client")
}
