use serde_json::json;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use lector::application::ports::{LlmClient, LlmClientError};
use lector::infrastructure::llm::TogetherClient;

#[tokio::test]
async fn given_successful_completion_when_completing_then_returns_trimmed_content() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .and(header("Authorization", "Bearer test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "choices": [
                { "message": { "content": "  Paris is the capital.  " } }
            ]
        })))
        .mount(&server)
        .await;

    let client = TogetherClient::new(&server.uri(), "test-key", "test-model");

    let result = client.complete("What is the capital of France?").await;

    assert_eq!(result.unwrap(), "Paris is the capital.");
}

#[tokio::test]
async fn given_response_without_choices_when_completing_then_returns_invalid_response() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "choices": [] })))
        .mount(&server)
        .await;

    let client = TogetherClient::new(&server.uri(), "test-key", "test-model");

    let result = client.complete("A question").await;

    assert!(matches!(result, Err(LlmClientError::InvalidResponse(_))));
}

#[tokio::test]
async fn given_response_without_content_when_completing_then_returns_invalid_response() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "choices": [ { "message": {} } ]
        })))
        .mount(&server)
        .await;

    let client = TogetherClient::new(&server.uri(), "test-key", "test-model");

    let result = client.complete("A question").await;

    assert!(matches!(result, Err(LlmClientError::InvalidResponse(_))));
}

#[tokio::test]
async fn given_rate_limited_endpoint_when_completing_then_returns_rate_limited() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(429))
        .mount(&server)
        .await;

    let client = TogetherClient::new(&server.uri(), "test-key", "test-model");

    let result = client.complete("A question").await;

    assert!(matches!(result, Err(LlmClientError::RateLimited)));
}

#[tokio::test]
async fn given_server_error_when_completing_then_returns_api_request_failed() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(500).set_body_string("internal error"))
        .mount(&server)
        .await;

    let client = TogetherClient::new(&server.uri(), "test-key", "test-model");

    let result = client.complete("A question").await;

    assert!(matches!(result, Err(LlmClientError::ApiRequestFailed(_))));
}

#[tokio::test]
async fn given_unreachable_endpoint_when_completing_then_returns_api_request_failed() {
    let client = TogetherClient::new("http://127.0.0.1:1", "test-key", "test-model");

    let result = client.complete("A question").await;

    assert!(matches!(result, Err(LlmClientError::ApiRequestFailed(_))));
}
