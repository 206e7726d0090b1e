use std::sync::Arc;

use crate::application::ports::{
    EmotionClassifier, FileLoader, FileLoaderError, LlmClient, LlmClientError, Translator,
    TranslatorError,
};
use crate::domain::{Document, Emotion, TargetLanguage};

use super::prompt_builder::build_prompt;
use super::response_sanitizer::clean_response;

/// What to do when the caller asked for a translation and the translation
/// service fails. `Fail` surfaces the error; `Degrade` logs a warning and
/// returns the untranslated answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TranslationFailurePolicy {
    Fail,
    Degrade,
}

/// Runs the full question-answering pipeline for one request:
/// extract → prompt → complete → sanitize → annotate → translate.
///
/// Stages are strictly sequential and fail fast, with one exception:
/// emotion classification degrades to the neutral glyph instead of
/// aborting the request.
pub struct AnswerService<L, E, T>
where
    L: LlmClient,
    E: EmotionClassifier,
    T: Translator,
{
    file_loader: Arc<dyn FileLoader>,
    llm_client: Arc<L>,
    emotion_classifier: Arc<E>,
    translator: Arc<T>,
    translation_failure_policy: TranslationFailurePolicy,
}

impl<L, E, T> AnswerService<L, E, T>
where
    L: LlmClient,
    E: EmotionClassifier,
    T: Translator,
{
    pub fn new(
        file_loader: Arc<dyn FileLoader>,
        llm_client: Arc<L>,
        emotion_classifier: Arc<E>,
        translator: Arc<T>,
        translation_failure_policy: TranslationFailurePolicy,
    ) -> Self {
        Self {
            file_loader,
            llm_client,
            emotion_classifier,
            translator,
            translation_failure_policy,
        }
    }

    #[tracing::instrument(
        skip(self, data, question),
        fields(
            document_id = %document.id.as_uuid(),
            filename = %document.filename,
            format = document.format.as_str(),
            target_language = %target_language,
        )
    )]
    pub async fn answer(
        &self,
        data: &[u8],
        document: &Document,
        question: &str,
        target_language: &TargetLanguage,
    ) -> Result<String, AnswerError> {
        if question.trim().is_empty() {
            return Err(AnswerError::MissingQuestion);
        }

        let content = self.file_loader.extract_text(data, document).await?;
        tracing::debug!(content_chars = content.len(), "Text extraction complete");

        let prompt = build_prompt(&content, question);

        let raw_answer = self.llm_client.complete(&prompt).await?;
        tracing::debug!(answer_chars = raw_answer.len(), "Completion received");

        let cleaned = clean_response(&raw_answer);

        // Classification runs on the cleaned English answer, before any
        // translation.
        let emotion = self.classify_or_default(&cleaned).await;

        let answer = self.translate(cleaned, target_language).await?;

        Ok(format!("{} {}", emotion.emoji(), answer))
    }

    /// Default-on-failure sub-step: classifier errors and unknown labels
    /// both resolve to [`Emotion::Neutral`]. Never aborts the request.
    async fn classify_or_default(&self, text: &str) -> Emotion {
        match self.emotion_classifier.classify(text).await {
            Ok(label) => match Emotion::from_label(&label) {
                Some(emotion) => emotion,
                None => {
                    tracing::warn!(label = %label, "Unrecognized emotion label, using neutral");
                    Emotion::default()
                }
            },
            Err(e) => {
                tracing::warn!(error = %e, "Emotion classification failed, using neutral");
                Emotion::default()
            }
        }
    }

    async fn translate(
        &self,
        text: String,
        target: &TargetLanguage,
    ) -> Result<String, AnswerError> {
        if target.is_english() {
            return Ok(text);
        }

        match self.translator.translate(&text, target).await {
            Ok(translated) => Ok(translated),
            Err(e) => match self.translation_failure_policy {
                TranslationFailurePolicy::Fail => Err(AnswerError::Translation(e)),
                TranslationFailurePolicy::Degrade => {
                    tracing::warn!(
                        error = %e,
                        target = %target,
                        "Translation failed, returning untranslated answer"
                    );
                    Ok(text)
                }
            },
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AnswerError {
    #[error("question is required")]
    MissingQuestion,
    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),
    #[error("extraction failed: {0}")]
    Extraction(String),
    #[error("completion: {0}")]
    Completion(#[from] LlmClientError),
    #[error("translation: {0}")]
    Translation(TranslatorError),
}

impl From<FileLoaderError> for AnswerError {
    fn from(e: FileLoaderError) -> Self {
        match e {
            FileLoaderError::UnsupportedFormat(format) => Self::UnsupportedFormat(format),
            FileLoaderError::ExtractionFailed(reason) => Self::Extraction(reason),
            FileLoaderError::NoTextFound(filename) => Self::Extraction(format!(
                "no text found in {filename}"
            )),
        }
    }
}
