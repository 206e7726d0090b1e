use std::sync::Arc;

use crate::application::ports::{EmotionClassifier, LlmClient, Translator};
use crate::application::services::AnswerService;
use crate::presentation::config::Settings;

pub struct AppState<L, E, T>
where
    L: LlmClient,
    E: EmotionClassifier,
    T: Translator,
{
    pub answer_service: Arc<AnswerService<L, E, T>>,
    pub settings: Settings,
}

impl<L, E, T> Clone for AppState<L, E, T>
where
    L: LlmClient,
    E: EmotionClassifier,
    T: Translator,
{
    fn clone(&self) -> Self {
        Self {
            answer_service: Arc::clone(&self.answer_service),
            settings: self.settings.clone(),
        }
    }
}
