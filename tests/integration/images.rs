//! Integration tests for image generation

use super::*;
use integrations_openai_images::ValidationError;
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::body_partial_json;

fn urls_body(count: usize) -> serde_json::Value {
    let data: Vec<serde_json::Value> = (1..=count)
        .map(|i| json!({ "url": format!("https://images.example.com/{}.png", i) }))
        .collect();
    json!({ "created": 1700000000, "data": data })
}

#[tokio::test]
async fn test_generate_multiple_images() {
    let mock_server = setup_mock_server().await;

    generations_mock()
        .and(body_partial_json(json!({
            "prompt": "a cat",
            "n": 3,
            "size": "1024x1024",
            "response_format": "url"
        })))
        .respond_with(success_response(urls_body(3)))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server, ImageRequestClient::builder());
    let result = client
        .generate_images("a cat", Some(3), Some(ImageSize::Size1024))
        .await
        .expect("request should succeed");

    assert_eq!(
        result,
        ImageResult::Multiple(vec![
            "https://images.example.com/1.png".to_string(),
            "https://images.example.com/2.png".to_string(),
            "https://images.example.com/3.png".to_string(),
        ])
    );
}

#[tokio::test]
async fn test_generate_single_image_returns_scalar() {
    let mock_server = setup_mock_server().await;

    generations_mock()
        .and(body_partial_json(json!({ "n": 1, "size": "1024x1024" })))
        .respond_with(success_response(urls_body(1)))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server, ImageRequestClient::builder());
    let result = client.generate_images("a cat", None, None).await.unwrap();

    assert_eq!(
        result,
        ImageResult::Single("https://images.example.com/1.png".to_string())
    );
}

#[tokio::test]
async fn test_b64_json_default_format() {
    let mock_server = setup_mock_server().await;

    generations_mock()
        .and(body_partial_json(json!({ "response_format": "b64_json", "size": "256x256" })))
        .respond_with(success_response(json!({
            "created": 1700000000,
            "data": [{ "b64_json": "aGVsbG8=" }]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(
        &mock_server,
        ImageRequestClient::builder()
            .default_response_format(ImageResponseFormat::B64Json)
            .default_size(ImageSize::Size256),
    );
    let result = client.generate_images("a cat", None, None).await.unwrap();

    assert_eq!(result, ImageResult::Single("aGVsbG8=".to_string()));
}

#[tokio::test]
async fn test_retries_server_errors_then_succeeds() {
    let mock_server = setup_mock_server().await;

    generations_mock()
        .respond_with(error_response(
            503,
            json!({ "error": { "message": "overloaded", "type": "server_error", "code": null, "param": null } }),
        ))
        .up_to_n_times(2)
        .with_priority(1)
        .expect(2)
        .mount(&mock_server)
        .await;

    generations_mock()
        .respond_with(success_response(urls_body(1)))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server, ImageRequestClient::builder().max_retries(3));
    let result = client.generate_images("a cat", None, None).await.unwrap();

    assert_eq!(result.len(), 1);
}

#[tokio::test]
async fn test_retry_budget_exhausted_surfaces_remote_error() {
    let mock_server = setup_mock_server().await;

    generations_mock()
        .respond_with(error_response(
            500,
            json!({ "error": { "message": "boom", "type": "server_error", "code": null, "param": null } }),
        ))
        .expect(2)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server, ImageRequestClient::builder().max_retries(1));
    let err = client.generate_images("a cat", None, None).await.unwrap_err();

    assert!(err.is_remote());
    assert_eq!(err.status_code(), Some(500));
}

#[tokio::test]
async fn test_authentication_error_is_not_retried() {
    let mock_server = setup_mock_server().await;

    generations_mock()
        .respond_with(error_response(
            401,
            json!({ "error": { "message": "Incorrect API key provided", "type": "invalid_request_error", "code": "invalid_api_key", "param": null } }),
        ))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server, ImageRequestClient::builder().max_retries(3));
    let err = client.generate_images("a cat", None, None).await.unwrap_err();

    assert!(err.is_authentication_error());
}

#[tokio::test]
async fn test_invalid_size_never_reaches_server() {
    let mock_server = setup_mock_server().await;

    generations_mock()
        .respond_with(success_response(urls_body(1)))
        .expect(0)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server, ImageRequestClient::builder());
    let err = client
        .generate_images_raw("a cat", None, Some("800x600"))
        .await
        .unwrap_err();

    match err {
        ImagesError::Validation(ValidationError::InvalidSize { value, allowed }) => {
            assert_eq!(value, "800x600");
            assert_eq!(allowed, vec!["256x256", "512x512", "1024x1024"]);
        }
        other => panic!("expected InvalidSize, got {:?}", other),
    }
}

#[tokio::test]
async fn test_environment_defaults_drive_request() {
    let mock_server = setup_mock_server().await;

    generations_mock()
        .and(body_partial_json(json!({ "n": 2, "size": "512x512" })))
        .respond_with(success_response(urls_body(2)))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = ImageRequestClient::builder()
        .api_key(TEST_API_KEY)
        .base_url(mock_server.uri())
        .build_with_env(|name| match name {
            "OPENAI_DEFAULT_IMAGE_SIZE" => Some("512x512".to_string()),
            "OPENAI_DEFAULT_NUMBER_OF_IMAGES" => Some("2".to_string()),
            _ => None,
        })
        .unwrap();

    let result = client.generate_images("a cat", None, None).await.unwrap();
    assert_eq!(result.len(), 2);
}

#[tokio::test]
async fn test_configured_model_and_user_are_sent() {
    let mock_server = setup_mock_server().await;

    generations_mock()
        .and(body_partial_json(json!({ "model": "dall-e-2", "user": "user-1234" })))
        .respond_with(success_response(urls_body(1)))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(
        &mock_server,
        ImageRequestClient::builder().model("dall-e-2").user("user-1234"),
    );
    let result = client.generate_images("a cat", None, None).await.unwrap();

    assert_eq!(
        result,
        ImageResult::Single("https://images.example.com/1.png".to_string())
    );
}

#[tokio::test]
async fn test_zero_count_uses_environment_default() {
    let mock_server = setup_mock_server().await;

    generations_mock()
        .and(body_partial_json(json!({ "n": 2 })))
        .respond_with(success_response(urls_body(2)))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = ImageRequestClient::builder()
        .api_key(TEST_API_KEY)
        .base_url(mock_server.uri())
        .default_number_of_images(0)
        .build_with_env(|name| match name {
            "OPENAI_DEFAULT_NUMBER_OF_IMAGES" => Some("2".to_string()),
            _ => None,
        })
        .unwrap();

    let result = client.generate_images("a cat", Some(0), None).await.unwrap();
    assert_eq!(result.len(), 2);
}
