mod document;
mod emotion;
mod language;

pub use document::{Document, DocumentFormat, DocumentId};
pub use emotion::Emotion;
pub use language::TargetLanguage;
