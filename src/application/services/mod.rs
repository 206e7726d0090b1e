mod answer_service;
mod prompt_builder;
mod response_sanitizer;

pub use answer_service::{AnswerError, AnswerService, TranslationFailurePolicy};
pub use prompt_builder::build_prompt;
pub use response_sanitizer::clean_response;
