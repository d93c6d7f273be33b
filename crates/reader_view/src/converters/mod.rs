//! # Format Conversion
//!
//! Renders an extracted fragment as Markdown or plain text. Both converters
//! are pattern based and operate on the serialized fragment, not on a tree.

use std::sync::LazyLock;

use regex::Regex;

mod markdown;
mod text;

pub use markdown::to_markdown;
pub use text::to_text;

use crate::models::OutputFormat;

static ANY_TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]*>").expect("ANY_TAG_RE should compile"));

/// Remove every tag, keeping only the text between them
pub(crate) fn strip_tags(html: &str) -> String {
    ANY_TAG_RE.replace_all(html, "").into_owned()
}

/// Render a fragment in the requested format; HTML passes through untouched
pub fn convert(fragment: &str, format: OutputFormat) -> String {
    match format {
        OutputFormat::Html => fragment.to_string(),
        OutputFormat::Markdown => to_markdown(fragment),
        OutputFormat::Text => to_text(fragment),
    }
}
