use std::path::Path;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

use crate::application::ports::{EmotionClassifier, LlmClient, Translator};
use crate::domain::{Document, DocumentFormat, TargetLanguage};
use crate::infrastructure::observability::sanitize_prompt;
use crate::presentation::state::AppState;

use super::models::{answer_error_status, AnswerResponse, ErrorResponse};

#[derive(Deserialize)]
pub struct AskPredefinedRequest {
    pub question: String,
    pub language: Option<String>,
}

/// Answers a question against the pre-provisioned document configured at
/// startup instead of an uploaded one.
#[tracing::instrument(skip(state, request))]
pub async fn ask_predefined_handler<L, E, T>(
    State(state): State<AppState<L, E, T>>,
    Json(request): Json<AskPredefinedRequest>,
) -> impl IntoResponse
where
    L: LlmClient + 'static,
    E: EmotionClassifier + 'static,
    T: Translator + 'static,
{
    if request.question.trim().is_empty() {
        tracing::warn!("Predefined ask request with no question");
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "Question is required".to_string(),
            }),
        )
            .into_response();
    }

    let target_language = request
        .language
        .as_deref()
        .map(TargetLanguage::new)
        .unwrap_or_default();

    tracing::debug!(
        question = %sanitize_prompt(&request.question),
        target_language = %target_language,
        "Processing predefined ask request"
    );

    let path = state.settings.predefined_document.path.clone();

    let data = match tokio::fs::read(&path).await {
        Ok(data) => data,
        Err(e) => {
            tracing::error!(path = %path, error = %e, "Predefined document unavailable");
            return (
                StatusCode::NOT_FOUND,
                Json(ErrorResponse {
                    error: "Predefined document not found".to_string(),
                }),
            )
                .into_response();
        }
    };

    let filename = Path::new(&path)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or(&path)
        .to_string();

    let format = match DocumentFormat::from_filename(&filename) {
        Some(f) => f,
        None => {
            tracing::error!(path = %path, "Predefined document has unsupported format");
            return (
                StatusCode::UNSUPPORTED_MEDIA_TYPE,
                Json(ErrorResponse {
                    error: format!("Unsupported file format: {}", filename),
                }),
            )
                .into_response();
        }
    };

    let document = Document::new(filename, format, data.len() as u64);

    match state
        .answer_service
        .answer(&data, &document, &request.question, &target_language)
        .await
    {
        Ok(answer) => {
            tracing::info!(document_id = %document.id.as_uuid(), "Question answered");
            (StatusCode::OK, Json(AnswerResponse { answer })).into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "Pipeline failed");
            (
                answer_error_status(&e),
                Json(ErrorResponse {
                    error: e.to_string(),
                }),
            )
                .into_response()
        }
    }
}
