use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::application::ports::{EmotionClassifier, EmotionClassifierError};

/// Text-classification client for the Hugging Face inference API.
///
/// The API answers with either `[[{label, score}, ...]]` or
/// `[{label, score}, ...]` depending on the model pipeline; both shapes
/// are accepted and the highest-scoring label wins.
pub struct HuggingFaceClassifier {
    client: Client,
    base_url: String,
    model: String,
    api_key: Option<String>,
}

#[derive(Debug, Deserialize)]
struct LabelScore {
    label: String,
    score: f64,
}

impl HuggingFaceClassifier {
    pub const CLASSIFICATION_TIMEOUT: Duration = Duration::from_secs(30);

    pub fn new(base_url: &str, model: &str, api_key: Option<&str>) -> Self {
        let client = Client::builder()
            .timeout(Self::CLASSIFICATION_TIMEOUT)
            .build()
            .expect("reqwest client build never fails with valid TLS config");
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            model: model.to_string(),
            api_key: api_key.map(str::to_string),
        }
    }

    fn top_label(scores: Vec<LabelScore>) -> Result<String, EmotionClassifierError> {
        scores
            .into_iter()
            .max_by(|a, b| a.score.total_cmp(&b.score))
            .map(|s| s.label)
            .ok_or_else(|| {
                EmotionClassifierError::InvalidResponse("empty label list".to_string())
            })
    }
}

#[async_trait]
impl EmotionClassifier for HuggingFaceClassifier {
    #[tracing::instrument(skip(self, text), fields(model = %self.model))]
    async fn classify(&self, text: &str) -> Result<String, EmotionClassifierError> {
        let url = format!("{}/models/{}", self.base_url, self.model);

        let mut request = self
            .client
            .post(&url)
            .json(&serde_json::json!({ "inputs": text }));

        if let Some(key) = &self.api_key {
            request = request.header("Authorization", format!("Bearer {key}"));
        }

        let response = request
            .send()
            .await
            .map_err(|e| EmotionClassifierError::ApiRequestFailed(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(EmotionClassifierError::ApiRequestFailed(format!(
                "classifier endpoint returned {status}: {body}"
            )));
        }

        let value: serde_json::Value = response
            .json()
            .await
            .map_err(|e| EmotionClassifierError::InvalidResponse(e.to_string()))?;

        // Nested shape first, flat shape as fallback.
        let scores: Vec<LabelScore> = match value.get(0) {
            Some(first) if first.is_array() => serde_json::from_value(first.clone()),
            _ => serde_json::from_value(value),
        }
        .map_err(|e| {
            EmotionClassifierError::InvalidResponse(format!("unexpected label shape: {e}"))
        })?;

        Self::top_label(scores)
    }
}
