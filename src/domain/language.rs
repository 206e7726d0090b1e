const ENGLISH: &str = "en";

/// Target language for the final answer, as a lowercase ISO-639-1-like
/// code. English is the identity case: no translation call is made.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetLanguage(String);

impl TargetLanguage {
    pub fn new(code: &str) -> Self {
        let normalized = code.trim().to_lowercase();
        if normalized.is_empty() {
            Self::english()
        } else {
            Self(normalized)
        }
    }

    pub fn english() -> Self {
        Self(ENGLISH.to_string())
    }

    pub fn is_english(&self) -> bool {
        self.0 == ENGLISH
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for TargetLanguage {
    fn default() -> Self {
        Self::english()
    }
}

impl std::fmt::Display for TargetLanguage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
