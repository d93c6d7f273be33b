use std::process::ExitCode;

use reader_view::cli::Cli;
use reader_view::errors::ReaderResult;
use reader_view::handlers::run;
use reader_view::utils::logging;

#[tokio::main]
async fn main() -> ExitCode {
    match try_main().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("Failed to read page: {}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn try_main() -> ReaderResult<()> {
    // Parse CLI arguments
    let config = Cli::parse_config()?;

    // Initialize logging based on environment
    logging::init_logging()?;

    if let Some(ref proxy) = config.retriever.proxy_url {
        tracing::info!("Using proxy: {}", proxy);
    }

    run(config).await
}
