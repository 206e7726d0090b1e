use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use lector::application::ports::{EmotionClassifier, EmotionClassifierError};
use lector::infrastructure::emotion::HuggingFaceClassifier;

const MODEL: &str = "j-hartmann/emotion-english-distilroberta-base";

#[tokio::test]
async fn given_nested_label_shape_when_classifying_then_returns_top_label() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(format!("/models/{MODEL}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([[
            { "label": "joy", "score": 0.91 },
            { "label": "surprise", "score": 0.06 }
        ]])))
        .mount(&server)
        .await;

    let classifier = HuggingFaceClassifier::new(&server.uri(), MODEL, None);

    let result = classifier.classify("What a great day!").await;

    assert_eq!(result.unwrap(), "joy");
}

#[tokio::test]
async fn given_flat_label_shape_when_classifying_then_returns_top_label() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(format!("/models/{MODEL}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "label": "sadness", "score": 0.2 },
            { "label": "anger", "score": 0.7 }
        ])))
        .mount(&server)
        .await;

    let classifier = HuggingFaceClassifier::new(&server.uri(), MODEL, None);

    let result = classifier.classify("This is infuriating.").await;

    assert_eq!(result.unwrap(), "anger");
}

#[tokio::test]
async fn given_empty_label_list_when_classifying_then_returns_invalid_response() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(format!("/models/{MODEL}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let classifier = HuggingFaceClassifier::new(&server.uri(), MODEL, None);

    let result = classifier.classify("Anything").await;

    assert!(matches!(
        result,
        Err(EmotionClassifierError::InvalidResponse(_))
    ));
}

#[tokio::test]
async fn given_server_error_when_classifying_then_returns_api_request_failed() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(format!("/models/{MODEL}")))
        .respond_with(ResponseTemplate::new(503).set_body_string("model loading"))
        .mount(&server)
        .await;

    let classifier = HuggingFaceClassifier::new(&server.uri(), MODEL, None);

    let result = classifier.classify("Anything").await;

    assert!(matches!(
        result,
        Err(EmotionClassifierError::ApiRequestFailed(_))
    ));
}
