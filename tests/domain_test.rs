use lector::domain::{DocumentFormat, Emotion, TargetLanguage};

#[test]
fn given_supported_extensions_when_detecting_format_then_maps_each() {
    assert_eq!(
        DocumentFormat::from_filename("report.pdf"),
        Some(DocumentFormat::Pdf)
    );
    assert_eq!(
        DocumentFormat::from_filename("notes.docx"),
        Some(DocumentFormat::Docx)
    );
    assert_eq!(
        DocumentFormat::from_filename("readme.txt"),
        Some(DocumentFormat::Txt)
    );
}

#[test]
fn given_uppercase_extension_when_detecting_format_then_matches_case_insensitively() {
    assert_eq!(
        DocumentFormat::from_filename("REPORT.PDF"),
        Some(DocumentFormat::Pdf)
    );
}

#[test]
fn given_unsupported_extension_when_detecting_format_then_returns_none() {
    assert_eq!(DocumentFormat::from_filename("report.xlsx"), None);
    assert_eq!(DocumentFormat::from_filename("image.png"), None);
    assert_eq!(DocumentFormat::from_filename("noextension"), None);
}

#[test]
fn given_known_labels_when_parsing_emotion_then_maps_full_table() {
    let table = [
        ("joy", Emotion::Joy, "😊"),
        ("anger", Emotion::Anger, "😠"),
        ("sadness", Emotion::Sadness, "😢"),
        ("fear", Emotion::Fear, "😨"),
        ("surprise", Emotion::Surprise, "😲"),
        ("disgust", Emotion::Disgust, "🤢"),
        ("neutral", Emotion::Neutral, "💬"),
        ("confusion", Emotion::Confusion, "🤔"),
        ("love", Emotion::Love, "❤️"),
    ];

    for (label, expected, emoji) in table {
        let emotion = Emotion::from_label(label).unwrap();
        assert_eq!(emotion, expected);
        assert_eq!(emotion.emoji(), emoji);
        assert_eq!(emotion.as_str(), label);
    }
}

#[test]
fn given_mixed_case_label_when_parsing_emotion_then_normalizes() {
    assert_eq!(Emotion::from_label("JOY"), Some(Emotion::Joy));
    assert_eq!(Emotion::from_label(" Sadness "), Some(Emotion::Sadness));
}

#[test]
fn given_unknown_label_when_parsing_emotion_then_returns_none() {
    assert_eq!(Emotion::from_label("ecstatic"), None);
    assert_eq!(Emotion::from_label(""), None);
}

#[test]
fn given_no_emotion_when_defaulting_then_neutral_glyph() {
    assert_eq!(Emotion::default(), Emotion::Neutral);
    assert_eq!(Emotion::default().emoji(), "💬");
}

#[test]
fn given_language_codes_when_constructing_then_normalizes_and_detects_english() {
    assert!(TargetLanguage::new("en").is_english());
    assert!(TargetLanguage::new(" EN ").is_english());
    assert!(!TargetLanguage::new("fr").is_english());
    assert_eq!(TargetLanguage::new("FR").as_str(), "fr");
}

#[test]
fn given_blank_language_when_constructing_then_falls_back_to_english() {
    assert!(TargetLanguage::new("").is_english());
    assert!(TargetLanguage::new("   ").is_english());
    assert!(TargetLanguage::default().is_english());
}
