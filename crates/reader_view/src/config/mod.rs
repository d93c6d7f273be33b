use std::time::Duration;

use crate::errors::ReaderError;
use crate::models::OutputFormat;
use crate::services::Validate;

/// User-Agent sent with every page request
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36";

/// Upper bound for one page request, connect through body
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Settings for the HTTP retrieval step
#[derive(Debug, Clone)]
pub struct RetrieverConfig {
    pub user_agent: String,
    pub timeout: Duration,
    pub proxy_url: Option<String>,
}

impl Default for RetrieverConfig {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: DEFAULT_TIMEOUT,
            proxy_url: None,
        }
    }
}

/// Configuration derived from CLI arguments
#[derive(Debug, Clone)]
pub struct Config {
    pub url: String,
    pub format: OutputFormat,
    pub json: bool,
    pub retriever: RetrieverConfig,
}

impl Validate for Config {
    fn validate(&self) -> Result<(), ReaderError> {
        if self.url.trim().is_empty() {
            return Err(ReaderError::InvalidParams {
                message: "URL is required".to_string(),
            });
        }

        Ok(())
    }
}
