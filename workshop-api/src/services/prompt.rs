/// Build the instruction sent to the provider for a style rewrite.
///
/// The source text is embedded literally; the model is asked to answer with
/// the rewritten text only.
pub fn build_style_prompt(text: &str, style: &str) -> String {
    format!(
        "Transform the following text to match this style: \"{style}\".\n\
         Only return the transformed text, nothing else.\n\
         \n\
         Text: \"{text}\""
    )
}
