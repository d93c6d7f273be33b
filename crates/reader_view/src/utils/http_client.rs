use crate::config::RetrieverConfig;
use crate::errors::FetchCause;
use reqwest::{Client, Proxy};

/// Build a reqwest client for a single retrieval
///
/// Proxies are only used when one is configured explicitly.
pub fn build_client(config: &RetrieverConfig) -> Result<Client, FetchCause> {
    let mut builder = reqwest::Client::builder()
        .user_agent(config.user_agent.as_str())
        .timeout(config.timeout);

    builder = match config.proxy_url.as_deref() {
        Some(proxy_url) => {
            let proxy = Proxy::all(proxy_url).map_err(|e| FetchCause::Client {
                message: format!("invalid proxy URL {}: {}", proxy_url, e),
            })?;
            builder.proxy(proxy)
        }
        None => builder.no_proxy(),
    };

    builder.build().map_err(|e| FetchCause::Client {
        message: e.to_string(),
    })
}
