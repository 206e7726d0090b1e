use crate::application::ports::{Translator, TranslatorError};
use crate::domain::TargetLanguage;

pub struct MockTranslator;

#[async_trait::async_trait]
impl Translator for MockTranslator {
    async fn translate(
        &self,
        text: &str,
        target: &TargetLanguage,
    ) -> Result<String, TranslatorError> {
        if target.is_english() {
            return Ok(text.to_string());
        }
        Ok(format!("[{}] {}", target.as_str(), text))
    }
}
