use clap::Parser;

use crate::config::{Config, RetrieverConfig};
use crate::errors::ReaderResult;
use crate::services::Validate;

/// Reader View
///
/// Fetches a web page, strips navigation, ads and boilerplate, and prints the
/// main content as clean HTML, Markdown or plain text.
///
/// ## Usage
/// ```bash
/// reader-view https://example.com/article --format markdown
/// reader-view https://example.com/article --format text --json
/// ```
///
/// ## Environment Variables
/// - `RUST_LOG`: Controls logging verbosity (trace, debug, info, warn, error)
/// - `LOG_FORMAT`: Set to `json` for structured log lines
#[derive(Parser, Debug, Clone)]
#[command(name = "reader-view")]
#[command(about = "Extract the readable content of a web page")]
#[command(version)]
#[command(
    long_about = "Fetches a web page with a single HTTP GET, keeps only its main content \nand prints it as HTML, Markdown or plain text. Relative links and images are made absolute."
)]
pub struct Cli {
    /// URL of the page to read
    #[arg(value_name = "URL")]
    pub url: String,

    /// Output format
    #[arg(
        short,
        long,
        default_value = "html",
        value_name = "FORMAT",
        help = "Output format: html, markdown or text"
    )]
    pub format: String,

    /// Print the result as a JSON object instead of title and body
    #[arg(long)]
    pub json: bool,

    /// Proxy URL to use for requests (e.g., http://proxy:8080)
    #[arg(long)]
    pub proxy_url: Option<String>,
}

impl Cli {
    /// Parse CLI arguments and convert to configuration
    pub fn parse_config() -> ReaderResult<Config> {
        Self::parse().into_config()
    }

    pub fn into_config(self) -> ReaderResult<Config> {
        let config = Config {
            url: self.url.trim().to_string(),
            format: self.format.parse()?,
            json: self.json,
            retriever: RetrieverConfig {
                proxy_url: self.proxy_url,
                ..RetrieverConfig::default()
            },
        };
        config.validate()?;
        Ok(config)
    }
}
