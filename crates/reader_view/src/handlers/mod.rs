use crate::config::Config;
use crate::errors::{ReaderError, ReaderResult};
use crate::models::{ConversionResult, OutputFormat};
use crate::services::ReaderService;

/// Read the configured page and print it to stdout
pub async fn run(config: Config) -> ReaderResult<()> {
    let service = ReaderService::new(config.retriever.clone());

    match service.read(&config.url, config.format).await {
        Ok(result) => {
            println!("{}", render(&result, config.json)?);
            Ok(())
        }
        Err(e) => {
            if config.json {
                println!("{}", serde_json::to_string_pretty(&e.details())?);
            }
            Err(ReaderError::Fetch(e))
        }
    }
}

/// Format a conversion result for printing
pub fn render(result: &ConversionResult, json: bool) -> ReaderResult<String> {
    if json {
        return Ok(serde_json::to_string_pretty(result)?);
    }

    Ok(match result.format() {
        OutputFormat::Markdown => format!("# {}\n\n{}", result.title(), result.body()),
        OutputFormat::Html | OutputFormat::Text => format!("{}\n\n{}", result.title(), result.body()),
    })
}
