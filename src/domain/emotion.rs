/// Closed set of emotions the external classifier can label an answer with.
/// Each maps 1:1 to the emoji prefixed to the final answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Emotion {
    Joy,
    Anger,
    Sadness,
    Fear,
    Surprise,
    Disgust,
    Neutral,
    Confusion,
    Love,
}

impl Emotion {
    /// Maps a classifier label to an emotion. Labels are case-normalized;
    /// anything outside the closed set returns `None` and callers fall
    /// back to [`Emotion::Neutral`].
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_lowercase().as_str() {
            "joy" => Some(Self::Joy),
            "anger" => Some(Self::Anger),
            "sadness" => Some(Self::Sadness),
            "fear" => Some(Self::Fear),
            "surprise" => Some(Self::Surprise),
            "disgust" => Some(Self::Disgust),
            "neutral" => Some(Self::Neutral),
            "confusion" => Some(Self::Confusion),
            "love" => Some(Self::Love),
            _ => None,
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Self::Joy => "😊",
            Self::Anger => "😠",
            Self::Sadness => "😢",
            Self::Fear => "😨",
            Self::Surprise => "😲",
            Self::Disgust => "🤢",
            Self::Neutral => "💬",
            Self::Confusion => "🤔",
            Self::Love => "❤️",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Joy => "joy",
            Self::Anger => "anger",
            Self::Sadness => "sadness",
            Self::Fear => "fear",
            Self::Surprise => "surprise",
            Self::Disgust => "disgust",
            Self::Neutral => "neutral",
            Self::Confusion => "confusion",
            Self::Love => "love",
        }
    }
}

impl Default for Emotion {
    fn default() -> Self {
        Self::Neutral
    }
}
