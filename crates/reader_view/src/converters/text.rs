//! HTML-to-text flattening.

use std::sync::LazyLock;

use regex::Regex;

use super::strip_tags;

static WHITESPACE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("WHITESPACE_RE should compile"));

/// Strip all markup and collapse whitespace runs to single spaces
pub fn to_text(html: &str) -> String {
    WHITESPACE_RE
        .replace_all(&strip_tags(html), " ")
        .trim()
        .to_string()
}
