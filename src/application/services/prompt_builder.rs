/// Builds the single instruction payload sent to the completion service.
///
/// The wording is a contract, not just a string: it is the only mechanism
/// steering the model away from disclaimers and section references, and
/// [`super::response_sanitizer::clean_response`] assumes answers produced
/// under it. Change the two together.
pub fn build_prompt(content: &str, question: &str) -> String {
    format!(
        "\
You are an intelligent assistant helping the user understand an uploaded document.

The user may ask questions related to the document, and you should answer based on \
the content provided. Avoid adding any translation disclaimers, notes, or similar \
metadata in your response. Just give the direct answer.

--- BEGIN CONTENT ---
{content}
--- END CONTENT ---

User Question: {question}"
    )
}
