use async_trait::async_trait;
use url::Url;

use crate::config::RetrieverConfig;
use crate::errors::{FetchCause, FetchError};
use crate::extractor::extract_document;
use crate::models::{Document, ExtractedPage};
use crate::utils::build_client;

/// Source of raw page markup
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Fetch `url` once, returning its HTML and the URL it was served from
    async fn fetch(&self, url: &str) -> Result<Document, FetchError>;
}

/// Fetches pages with a single HTTP GET
#[derive(Debug, Clone, Default)]
pub struct HttpFetcher {
    config: RetrieverConfig,
}

impl HttpFetcher {
    pub fn new(config: RetrieverConfig) -> Self {
        Self { config }
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<Document, FetchError> {
        let target = parse_http_url(url).map_err(|cause| FetchError::new(url, cause))?;
        let client = build_client(&self.config).map_err(|cause| FetchError::new(url, cause))?;
        let timeout_seconds = self.config.timeout.as_secs();

        let response = client
            .get(target)
            .send()
            .await
            .map_err(|e| FetchError::new(url, FetchCause::from_reqwest(&e, timeout_seconds)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::new(
                url,
                FetchCause::HttpStatus {
                    status: status.as_u16(),
                    reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
                },
            ));
        }

        let source_url = response.url().to_string();
        let html = response.text().await.map_err(|e| {
            let cause = if e.is_timeout() {
                FetchCause::Timeout {
                    seconds: timeout_seconds,
                }
            } else {
                FetchCause::Body {
                    message: e.to_string(),
                }
            };
            FetchError::new(url, cause)
        })?;

        Ok(Document::new(html, source_url))
    }
}

/// Only absolute `http`/`https` URLs are fetched
fn parse_http_url(url: &str) -> Result<Url, FetchCause> {
    let parsed = Url::parse(url.trim()).map_err(|e| FetchCause::InvalidUrl {
        message: e.to_string(),
    })?;

    match parsed.scheme() {
        "http" | "https" => Ok(parsed),
        scheme => Err(FetchCause::InvalidUrl {
            message: format!("unsupported scheme '{}'", scheme),
        }),
    }
}

/// Retrieves a page and extracts its title and main-content fragment
#[derive(Debug, Clone)]
pub struct PageRetriever<F = HttpFetcher> {
    fetcher: F,
}

impl PageRetriever {
    pub fn new(config: RetrieverConfig) -> Self {
        Self::with_fetcher(HttpFetcher::new(config))
    }
}

impl Default for PageRetriever {
    fn default() -> Self {
        Self::new(RetrieverConfig::default())
    }
}

impl<F: PageFetcher> PageRetriever<F> {
    pub fn with_fetcher(fetcher: F) -> Self {
        Self { fetcher }
    }

    /// Fetch `url` once and extract it.
    ///
    /// The final response URL (after any redirects) is the base for relative
    /// references. Every failure is reported as a [`FetchError`] for `url`.
    pub async fn retrieve(&self, url: &str) -> Result<ExtractedPage, FetchError> {
        tracing::info!("Retrieving {}", url);

        let document = self.fetcher.fetch(url).await.inspect_err(|e| {
            tracing::warn!("Retrieval failed: {}", e);
        })?;

        let page = extract_document(document);
        tracing::info!(
            "Extracted \"{}\" ({} bytes of content) from {}",
            page.title(),
            page.fragment().len(),
            page.source_url()
        );
        Ok(page)
    }
}
