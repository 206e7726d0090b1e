mod hugging_face_classifier;
mod mock_classifier;

pub use hugging_face_classifier::HuggingFaceClassifier;
pub use mock_classifier::MockEmotionClassifier;
