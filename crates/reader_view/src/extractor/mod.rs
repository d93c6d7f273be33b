//! # Content Extraction
//!
//! Locates the readable part of a page and prepares it for conversion.
//!
//! ## Modules
//! - `content`: noise removal, main-content selection and URL absolutization
//! - `metadata`: page title and site name

mod content;
mod metadata;

pub use content::extract_fragment;
pub use metadata::{extract_title, site_name};

use content::fragment_from_document;
use metadata::title_from_document;

use crate::models::{Document, ExtractedPage};

/// Turn a retrieved document into its title and main-content fragment.
///
/// The page is parsed once; the title is read before noise removal touches
/// the tree. The document's source URL is the base for relative references.
pub fn extract_document(document: Document) -> ExtractedPage {
    let (html, source_url) = document.into_parts();
    let dom = dom_query::Document::from(html.as_str());
    let title = title_from_document(&dom);
    let fragment = fragment_from_document(&dom, &source_url);
    ExtractedPage::new(title, fragment, source_url)
}
