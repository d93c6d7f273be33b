//! # Reader View
//!
//! Extracts the readable main content of a web page and renders it as
//! sanitized HTML, Markdown or plain text.
//!
//! ## Pipeline
//! 1. [`PageRetriever`] fetches the page with one HTTP GET and reads its title
//! 2. [`extract_fragment`] drops noise nodes, picks the main-content element and
//!    makes image and link URLs absolute
//! 3. [`to_markdown`] or [`to_text`] converts the fragment (HTML passes through)
//!
//! ```rust
//! use reader_view::{extract_fragment, to_markdown, to_text};
//!
//! let html = r#"<html><body><nav>Menu</nav>
//! <article><h1>Hi</h1><p>See <a href="/more">more</a></p></article></body></html>"#;
//!
//! let fragment = extract_fragment(html, "https://example.com/post/");
//! assert_eq!(to_markdown(&fragment), "# Hi\n\nSee [more](https://example.com/more)");
//! assert_eq!(to_text(&fragment), "HiSee more");
//! ```

pub mod cli;
pub mod config;
pub mod converters;
pub mod errors;
pub mod extractor;
pub mod handlers;
pub mod models;
pub mod services;
pub mod utils;

pub use config::RetrieverConfig;
pub use converters::{convert, to_markdown, to_text};
pub use errors::{FetchCause, FetchError, ReaderError, ReaderResult};
pub use extractor::{extract_fragment, extract_title, site_name};
pub use models::{ConversionResult, Document, ExtractedPage, OutputFormat};
pub use services::{HttpFetcher, PageFetcher, PageRetriever, ReaderService};
pub use utils::resolve_url;

/// Fetch `url` with the default settings and extract its title and main content
pub async fn retrieve_and_extract(url: &str) -> Result<ExtractedPage, FetchError> {
    PageRetriever::new(RetrieverConfig::default())
        .retrieve(url)
        .await
}
