use async_trait::async_trait;

/// Single-label text-emotion classifier. Returns the service's raw top
/// label; mapping into the closed [`crate::domain::Emotion`] set is the
/// orchestrator's concern.
#[async_trait]
pub trait EmotionClassifier: Send + Sync {
    async fn classify(&self, text: &str) -> Result<String, EmotionClassifierError>;
}

#[derive(Debug, thiserror::Error)]
pub enum EmotionClassifierError {
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}
