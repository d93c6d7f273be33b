use tracing_subscriber::{EnvFilter, prelude::*};

use crate::errors::{ReaderError, ReaderResult};

/// Initialize logging based on environment configuration
///
/// Output goes to stderr so that stdout only carries the converted page.
///
/// # Environment Variables
/// - `RUST_LOG`: Controls logging verbosity (trace, debug, info, warn, error)
/// - `LOG_FORMAT`: `json` for one JSON object per event, anything else for plain text
///
/// # Returns
/// - `Ok(())` if logging is successfully initialized or skipped
/// - `Err(ReaderError::LoggingInitialization)` if initialization fails
pub fn init_logging() -> ReaderResult<()> {
    // Check if RUST_LOG is set, skip logging if not
    if std::env::var("RUST_LOG").is_err() {
        return Ok(());
    }

    let env_filter = EnvFilter::from_default_env();
    let json = std::env::var("LOG_FORMAT").is_ok_and(|format| format.eq_ignore_ascii_case("json"));

    let result = if json {
        let fmt_layer = tracing_subscriber::fmt::layer()
            .json()
            .with_writer(std::io::stderr);
        tracing_subscriber::registry()
            .with(fmt_layer)
            .with(env_filter)
            .try_init()
    } else {
        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_ansi(false)
            .with_writer(std::io::stderr);
        tracing_subscriber::registry()
            .with(fmt_layer)
            .with(env_filter)
            .try_init()
    };

    result.map_err(|e| ReaderError::LoggingInitialization(e.to_string()))
}
