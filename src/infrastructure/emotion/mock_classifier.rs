use crate::application::ports::{EmotionClassifier, EmotionClassifierError};

pub struct MockEmotionClassifier;

#[async_trait::async_trait]
impl EmotionClassifier for MockEmotionClassifier {
    async fn classify(&self, _text: &str) -> Result<String, EmotionClassifierError> {
        Ok("neutral".to_string())
    }
}
