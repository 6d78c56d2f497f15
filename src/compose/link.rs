//! Chat links embedding a composed prompt.

/// Build a link that opens the chat assistant with `prompt` prefilled.
///
/// The prompt is percent-encoded into the `q` query parameter. When `embed`
/// is set, `&embed=true` is appended.
pub fn chat_link(base_url: &str, prompt: &str, embed: bool) -> String {
    let separator = if base_url.contains('?') { '&' } else { '?' };
    let mut link = format!("{}{}q={}", base_url, separator, urlencoding::encode(prompt));
    if embed {
        link.push_str("&embed=true");
    }
    link
}
