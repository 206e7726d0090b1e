use axum::http::StatusCode;
use serde::Serialize;

use crate::application::services::AnswerError;

#[derive(Serialize)]
pub struct AnswerResponse {
    pub answer: String,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Maps pipeline failures to HTTP status: client faults (missing question,
/// unsupported format, undecodable file) stay in the 4xx range, dependency
/// faults map to 502.
pub fn answer_error_status(error: &AnswerError) -> StatusCode {
    match error {
        AnswerError::MissingQuestion => StatusCode::BAD_REQUEST,
        AnswerError::UnsupportedFormat(_) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
        AnswerError::Extraction(_) => StatusCode::UNPROCESSABLE_ENTITY,
        AnswerError::Completion(_) | AnswerError::Translation(_) => StatusCode::BAD_GATEWAY,
    }
}
