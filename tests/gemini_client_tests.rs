use gemini_proxy::services::gemini::{GEMINI_MODEL, GeminiClient, ProviderError, TextModel};

use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn generate_path() -> String {
    format!("/models/{}:generateContent", GEMINI_MODEL)
}

#[tokio::test]
async fn test_sends_prompt_and_returns_text() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(generate_path()))
        .and(header("x-goog-api-key", "test-key"))
        .and(body_json(json!({
            "contents": [{ "role": "user", "parts": [{ "text": "Hello" }] }]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [{
                "content": { "role": "model", "parts": [{ "text": "Hi there!" }] },
                "finishReason": "STOP"
            }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = GeminiClient::with_base_url("test-key", server.uri()).unwrap();
    let text = client.generate("Hello").await.unwrap();

    assert_eq!(text, "Hi there!");
}

#[tokio::test]
async fn test_empty_candidates_yield_empty_text() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(generate_path()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "candidates": [] })))
        .mount(&server)
        .await;

    let client = GeminiClient::with_base_url("test-key", server.uri()).unwrap();
    assert_eq!(client.generate("Test").await.unwrap(), "");
}

#[tokio::test]
async fn test_error_status_is_reported() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(generate_path()))
        .respond_with(ResponseTemplate::new(403).set_body_string("API key not valid"))
        .mount(&server)
        .await;

    let client = GeminiClient::with_base_url("bad-key", server.uri()).unwrap();
    let err = client.generate("Test").await.unwrap_err();

    match err {
        ProviderError::Status { status, body } => {
            assert_eq!(status.as_u16(), 403);
            assert_eq!(body, "API key not valid");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn test_blocked_prompt_is_an_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(generate_path()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "promptFeedback": { "blockReason": "SAFETY" }
        })))
        .mount(&server)
        .await;

    let client = GeminiClient::with_base_url("test-key", server.uri()).unwrap();
    let err = client.generate("Test").await.unwrap_err();

    assert!(matches!(err, ProviderError::Blocked(_)));
}

#[tokio::test]
async fn test_garbage_body_is_an_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(generate_path()))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let client = GeminiClient::with_base_url("test-key", server.uri()).unwrap();
    let err = client.generate("Test").await.unwrap_err();

    assert!(matches!(err, ProviderError::Http(_)));
}

#[tokio::test]
async fn test_unreachable_provider_is_an_error() {
    // Nothing listens on port 1.
    let client = GeminiClient::with_base_url("test-key", "http://127.0.0.1:1").unwrap();
    let err = client.generate("Test").await.unwrap_err();

    assert!(matches!(err, ProviderError::Http(_)));
}
