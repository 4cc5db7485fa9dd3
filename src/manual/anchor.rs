use regex::Regex;
use std::sync::LazyLock;

static NON_ANCHOR_CHARS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^ \-0-9a-z]").expect("NON_ANCHOR_CHARS_RE should compile"));

/// Turns heading text into the fragment the published docs use for it,
/// e.g. `"Server Requirements"` -> `"#server-requirements"`.
///
/// Only ASCII letters survive; accented and other non-ASCII letters are
/// dropped rather than transliterated.
pub fn heading_anchor(text: &str) -> String {
    format!("#{}", slug(text))
}

pub fn slug(text: &str) -> String {
    let lowered = text.to_ascii_lowercase();
    let cleaned = NON_ANCHOR_CHARS_RE.replace_all(&lowered, "");
    cleaned.trim().replace(' ', "-")
}
