pub mod emotion;
pub mod llm;
pub mod observability;
pub mod text_processing;
pub mod translation;
