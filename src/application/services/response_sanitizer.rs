use std::sync::LazyLock;

use regex::Regex;

static PAREN_NOTE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)\(note:.*?\)").unwrap());

static DISCLAIMER_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(note|translation)\b:").unwrap());

/// Strips model meta-commentary from a raw answer.
///
/// Parenthesized `(Note: ...)` spans are removed first so their inner
/// `Note:` token cannot truncate the answer mid-parenthesis; the remainder
/// is then cut at the first standalone `Note:` or `Translation:` token and
/// trimmed. Pure and idempotent; the output is never longer than the input.
pub fn clean_response(answer: &str) -> String {
    let without_notes = PAREN_NOTE.replace_all(answer, "");
    let without_notes: &str = &without_notes;

    let truncated = match DISCLAIMER_TOKEN.find(without_notes) {
        Some(m) => &without_notes[..m.start()],
        None => without_notes,
    };

    truncated.trim().to_string()
}
