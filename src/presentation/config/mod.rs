mod environment;
mod settings;

pub use environment::Environment;
pub use settings::{
    EmotionSettings, ExtractionSettings, LlmSettings, LoggingSettings,
    PredefinedDocumentSettings, ServerSettings, Settings, SettingsError, TranslationSettings,
};
