use serde_json::{Value, json};

// Error codes
const ERROR_INVALID_URL: &str = "invalid_url";
const ERROR_TIMEOUT: &str = "timeout";
const ERROR_HTTP_ERROR: &str = "http_error";
const ERROR_BODY_ERROR: &str = "body_error";
const ERROR_CLIENT_ERROR: &str = "client_error";
const ERROR_FETCH_ERROR: &str = "fetch_error";

/// The single caller-visible failure of a page retrieval.
///
/// Whatever went wrong on the way to the page body, the caller gets the
/// requested URL plus the cause, never a transport-specific error type.
#[derive(Debug, thiserror::Error)]
#[error("Failed to fetch {url}: {cause}")]
pub struct FetchError {
    url: String,
    cause: FetchCause,
}

/// What made a retrieval fail
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchCause {
    #[error("Please provide a valid URL ({message})")]
    InvalidUrl { message: String },
    #[error("Request timed out after {seconds}s")]
    Timeout { seconds: u64 },
    #[error("Failed to fetch URL: {status} {reason}")]
    HttpStatus { status: u16, reason: String },
    #[error("Failed to read response body: {message}")]
    Body { message: String },
    #[error("HTTP client error: {message}")]
    Client { message: String },
    #[error("{message}")]
    Transport { message: String },
}

impl FetchError {
    pub fn new(url: impl Into<String>, cause: FetchCause) -> Self {
        Self {
            url: url.into(),
            cause,
        }
    }

    /// URL the caller asked for (not the post-redirect one)
    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn cause(&self) -> &FetchCause {
        &self.cause
    }

    /// Structured form of the error for machine-readable output
    pub fn details(&self) -> Value {
        let mut details = json!({
            "error": self.cause.code(),
            "url": self.url,
            "message": self.cause.to_string(),
        });
        if let FetchCause::HttpStatus { status, .. } = &self.cause {
            details["status"] = json!(status);
        }
        details
    }
}

impl FetchCause {
    /// Classify a reqwest error raised while sending a request.
    ///
    /// Status failures never arrive here; the retriever checks the status
    /// of every response itself.
    pub(crate) fn from_reqwest(err: &reqwest::Error, timeout_seconds: u64) -> Self {
        if err.is_timeout() {
            FetchCause::Timeout {
                seconds: timeout_seconds,
            }
        } else {
            FetchCause::Transport {
                message: err.to_string(),
            }
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            FetchCause::InvalidUrl { .. } => ERROR_INVALID_URL,
            FetchCause::Timeout { .. } => ERROR_TIMEOUT,
            FetchCause::HttpStatus { .. } => ERROR_HTTP_ERROR,
            FetchCause::Body { .. } => ERROR_BODY_ERROR,
            FetchCause::Client { .. } => ERROR_CLIENT_ERROR,
            FetchCause::Transport { .. } => ERROR_FETCH_ERROR,
        }
    }
}
