use std::fmt;
use std::str::FromStr;

use derive_getters::Getters;
use serde::{Deserialize, Serialize};

use crate::errors::ReaderError;

/// Title used when a page has no usable `<title>`
pub const NO_TITLE: &str = "No title";

/// Target representation of the extracted content
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Sanitized fragment HTML, passed through unchanged
    #[default]
    Html,
    Markdown,
    Text,
}

impl OutputFormat {
    pub const ALL: [OutputFormat; 3] = [OutputFormat::Html, OutputFormat::Markdown, OutputFormat::Text];

    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Html => "html",
            OutputFormat::Markdown => "markdown",
            OutputFormat::Text => "text",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = ReaderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|format| format.as_str() == wanted)
            .ok_or_else(|| ReaderError::InvalidFormat {
                format: s.to_string(),
            })
    }
}

/// Raw page markup together with the URL it was served from
#[derive(Debug, Clone, Getters)]
pub struct Document {
    html: String,
    /// Base URL for resolving relative references
    source_url: String,
}

impl Document {
    pub fn new(html: impl Into<String>, source_url: impl Into<String>) -> Self {
        Self {
            html: html.into(),
            source_url: source_url.into(),
        }
    }

    pub(crate) fn into_parts(self) -> (String, String) {
        (self.html, self.source_url)
    }
}

/// Title and main-content fragment of a retrieved page
#[derive(Debug, Clone, Serialize, Getters)]
pub struct ExtractedPage {
    title: String,
    /// Main-content HTML with absolute image and link URLs
    fragment: String,
    source_url: String,
}

impl ExtractedPage {
    pub fn new(
        title: impl Into<String>,
        fragment: impl Into<String>,
        source_url: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            fragment: fragment.into(),
            source_url: source_url.into(),
        }
    }

    pub(crate) fn into_parts(self) -> (String, String, String) {
        (self.title, self.fragment, self.source_url)
    }
}

/// A page rendered in the requested output format
#[derive(Debug, Clone, Serialize, Getters)]
pub struct ConversionResult {
    title: String,
    body: String,
    format: OutputFormat,
    source_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    site_name: Option<String>,
}

impl ConversionResult {
    pub fn new(
        title: String,
        body: String,
        format: OutputFormat,
        source_url: String,
        site_name: Option<String>,
    ) -> Self {
        Self {
            title,
            body,
            format,
            source_url,
            site_name,
        }
    }
}
