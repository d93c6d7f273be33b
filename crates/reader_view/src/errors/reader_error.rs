use super::FetchError;

/// Result type for command-line operations
pub type ReaderResult<T> = Result<T, ReaderError>;

/// Errors surfaced by the command-line front end
#[derive(thiserror::Error, Debug)]
pub enum ReaderError {
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error("Invalid output format '{format}'. Output format must be one of: html, markdown, text")]
    InvalidFormat { format: String },
    #[error("Invalid parameters: {message}")]
    InvalidParams { message: String },
    /// Logging initialization failed
    #[error("Logging initialization failed: {0}")]
    LoggingInitialization(String),
    #[error("Failed to serialize result: {0}")]
    Serialization(#[from] serde_json::Error),
}
