mod emotion_classifier;
mod file_loader;
mod llm_client;
mod translator;

pub use emotion_classifier::{EmotionClassifier, EmotionClassifierError};
pub use file_loader::{FileLoader, FileLoaderError};
pub use llm_client::{LlmClient, LlmClientError};
pub use translator::{Translator, TranslatorError};
