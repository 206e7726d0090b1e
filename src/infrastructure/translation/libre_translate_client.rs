use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::application::ports::{Translator, TranslatorError};
use crate::domain::TargetLanguage;

/// Translation client for a LibreTranslate-compatible endpoint. Answers
/// are produced in English, so the source language is fixed and an
/// English target short-circuits without touching the network.
pub struct LibreTranslateClient {
    client: Client,
    base_url: String,
    api_key: Option<String>,
}

#[derive(Deserialize)]
struct TranslateResponse {
    #[serde(rename = "translatedText")]
    translated_text: String,
}

impl LibreTranslateClient {
    pub const TRANSLATION_TIMEOUT: Duration = Duration::from_secs(30);

    pub fn new(base_url: &str, api_key: Option<&str>) -> Self {
        let client = Client::builder()
            .timeout(Self::TRANSLATION_TIMEOUT)
            .build()
            .expect("reqwest client build never fails with valid TLS config");
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.map(str::to_string),
        }
    }
}

#[async_trait]
impl Translator for LibreTranslateClient {
    #[tracing::instrument(skip(self, text), fields(target = %target))]
    async fn translate(
        &self,
        text: &str,
        target: &TargetLanguage,
    ) -> Result<String, TranslatorError> {
        if target.is_english() {
            return Ok(text.to_string());
        }

        let mut body = serde_json::json!({
            "q": text,
            "source": "en",
            "target": target.as_str(),
            "format": "text",
        });
        if let Some(key) = &self.api_key {
            body["api_key"] = serde_json::Value::String(key.clone());
        }

        let url = format!("{}/translate", self.base_url);

        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| TranslatorError::ApiRequestFailed(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(TranslatorError::ApiRequestFailed(format!(
                "translation endpoint returned {status}: {body}"
            )));
        }

        let translated: TranslateResponse = response
            .json()
            .await
            .map_err(|e| TranslatorError::InvalidResponse(e.to_string()))?;

        tracing::debug!(target = %target, "Translation complete");

        Ok(translated.translated_text)
    }
}
