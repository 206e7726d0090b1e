use crate::application::services::TranslationFailurePolicy;

use super::Environment;

/// Process-wide configuration, read once at startup. Per-request code
/// never touches the environment.
#[derive(Debug, Clone)]
pub struct Settings {
    pub environment: Environment,
    pub server: ServerSettings,
    pub llm: LlmSettings,
    pub emotion: EmotionSettings,
    pub translation: TranslationSettings,
    pub extraction: ExtractionSettings,
    pub predefined_document: PredefinedDocumentSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone)]
pub struct LlmSettings {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
}

#[derive(Debug, Clone)]
pub struct EmotionSettings {
    pub base_url: String,
    pub model: String,
    pub api_key: Option<String>,
}

#[derive(Debug, Clone)]
pub struct TranslationSettings {
    pub base_url: String,
    pub api_key: Option<String>,
    pub failure_policy: TranslationFailurePolicy,
}

#[derive(Debug, Clone)]
pub struct ExtractionSettings {
    pub max_file_size_mb: usize,
}

#[derive(Debug, Clone)]
pub struct PredefinedDocumentSettings {
    pub path: String,
}

#[derive(Debug, Clone)]
pub struct LoggingSettings {
    pub enable_json: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("{0} is not set in the environment")]
    MissingVar(&'static str),
    #[error("invalid value for {name}: {reason}")]
    InvalidVar { name: &'static str, reason: String },
}

impl Settings {
    /// Reads settings from the environment. The completion credential is
    /// required: without it the process must not boot.
    pub fn from_env() -> Result<Self, SettingsError> {
        let api_key = std::env::var("TOGETHER_API_KEY")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .ok_or(SettingsError::MissingVar("TOGETHER_API_KEY"))?;

        let environment = Environment::try_from(env_or("APP_ENV", "local"))
            .map_err(|reason| SettingsError::InvalidVar {
                name: "APP_ENV",
                reason,
            })?;

        let port: u16 = env_or("SERVER_PORT", "3000")
            .parse()
            .map_err(|e| SettingsError::InvalidVar {
                name: "SERVER_PORT",
                reason: format!("{e}"),
            })?;

        let max_file_size_mb: usize = env_or("MAX_FILE_SIZE_MB", "25")
            .parse()
            .map_err(|e| SettingsError::InvalidVar {
                name: "MAX_FILE_SIZE_MB",
                reason: format!("{e}"),
            })?;

        let failure_policy = match env_or("TRANSLATION_FAILURE_POLICY", "fail").as_str() {
            "fail" => TranslationFailurePolicy::Fail,
            "degrade" => TranslationFailurePolicy::Degrade,
            other => {
                return Err(SettingsError::InvalidVar {
                    name: "TRANSLATION_FAILURE_POLICY",
                    reason: format!("{other} (expected: fail or degrade)"),
                });
            }
        };

        Ok(Self {
            environment,
            server: ServerSettings {
                host: env_or("SERVER_HOST", "0.0.0.0"),
                port,
            },
            llm: LlmSettings {
                api_key,
                base_url: env_or("TOGETHER_BASE_URL", "https://api.together.xyz"),
                model: env_or("LLM_MODEL", "meta-llama/Llama-3.3-70B-Instruct-Turbo-Free"),
            },
            emotion: EmotionSettings {
                base_url: env_or("EMOTION_API_URL", "https://api-inference.huggingface.co"),
                model: env_or(
                    "EMOTION_MODEL",
                    "j-hartmann/emotion-english-distilroberta-base",
                ),
                api_key: env_opt("EMOTION_API_KEY"),
            },
            translation: TranslationSettings {
                base_url: env_or("TRANSLATE_API_URL", "http://localhost:5000"),
                api_key: env_opt("TRANSLATE_API_KEY"),
                failure_policy,
            },
            extraction: ExtractionSettings { max_file_size_mb },
            predefined_document: PredefinedDocumentSettings {
                path: env_or("PREDEFINED_DOCUMENT_PATH", "uploads/sample_document.pdf"),
            },
            logging: LoggingSettings {
                enable_json: env_or("LOG_FORMAT", "plain").to_lowercase() == "json",
            },
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn env_opt(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}
