use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use crate::application::ports::{EmotionClassifier, LlmClient, Translator};
use crate::domain::{Document, DocumentFormat, TargetLanguage};
use crate::infrastructure::observability::sanitize_prompt;
use crate::presentation::state::AppState;

use super::models::{answer_error_status, AnswerResponse, ErrorResponse};

#[tracing::instrument(skip(state, multipart))]
pub async fn ask_handler<L, E, T>(
    State(state): State<AppState<L, E, T>>,
    mut multipart: Multipart,
) -> impl IntoResponse
where
    L: LlmClient + 'static,
    E: EmotionClassifier + 'static,
    T: Translator + 'static,
{
    let mut file_bytes: Option<Vec<u8>> = None;
    let mut filename: Option<String> = None;
    let mut question: Option<String> = None;
    let mut language: Option<String> = None;

    loop {
        let field = match multipart.next_field().await {
            Ok(Some(f)) => f,
            Ok(None) => break,
            Err(e) => {
                tracing::error!(error = %e, "Failed to read multipart");
                return (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorResponse {
                        error: format!("Failed to read multipart: {}", e),
                    }),
                )
                    .into_response();
            }
        };

        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("file") => {
                filename = field.file_name().map(str::to_string);
                match field.bytes().await {
                    Ok(bytes) => file_bytes = Some(bytes.to_vec()),
                    Err(e) => {
                        tracing::error!(error = %e, "Failed to read file bytes");
                        return (
                            StatusCode::BAD_REQUEST,
                            Json(ErrorResponse {
                                error: format!("Failed to read file: {}", e),
                            }),
                        )
                            .into_response();
                    }
                }
            }
            Some("question") => question = field.text().await.ok(),
            Some("language") => language = field.text().await.ok(),
            _ => {}
        }
    }

    let (Some(data), Some(filename)) = (file_bytes, filename) else {
        tracing::warn!("Ask request with no file");
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "File and question are required".to_string(),
            }),
        )
            .into_response();
    };

    let question = match question {
        Some(q) if !q.trim().is_empty() => q,
        _ => {
            tracing::warn!("Ask request with no question");
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: "File and question are required".to_string(),
                }),
            )
                .into_response();
        }
    };

    let target_language = language
        .as_deref()
        .map(TargetLanguage::new)
        .unwrap_or_default();

    tracing::debug!(
        filename = %filename,
        question = %sanitize_prompt(&question),
        target_language = %target_language,
        "Processing ask request"
    );

    // Rejected before any parsing is attempted.
    let format = match DocumentFormat::from_filename(&filename) {
        Some(f) => f,
        None => {
            tracing::warn!(filename = %filename, "Unsupported file format");
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
        .answer(&data, &document, &question, &target_language)
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
