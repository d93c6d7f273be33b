use crate::config::RetrieverConfig;
use crate::converters::convert;
use crate::errors::FetchError;
use crate::extractor::site_name;
use crate::models::{ConversionResult, OutputFormat};

use super::page_retriever::{HttpFetcher, PageFetcher, PageRetriever};

/// Retrieves pages and renders them in one of the output formats
#[derive(Debug, Clone)]
pub struct ReaderService<F = HttpFetcher> {
    retriever: PageRetriever<F>,
}

impl ReaderService {
    pub fn new(config: RetrieverConfig) -> Self {
        Self {
            retriever: PageRetriever::new(config),
        }
    }
}

impl<F: PageFetcher> ReaderService<F> {
    pub fn with_fetcher(fetcher: F) -> Self {
        Self {
            retriever: PageRetriever::with_fetcher(fetcher),
        }
    }

    /// Retrieve `url` and convert its main content to `format`
    pub async fn read(&self, url: &str, format: OutputFormat) -> Result<ConversionResult, FetchError> {
        let (title, fragment, source_url) = self.retriever.retrieve(url).await?.into_parts();

        let body = convert(&fragment, format);
        let site_name = site_name(&title, &source_url);
        tracing::debug!("Converted {} to {}", source_url, format);

        Ok(ConversionResult::new(title, body, format, source_url, site_name))
    }
}
