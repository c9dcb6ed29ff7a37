//! Error types for tweet-harvest.
//!
//! Each pipeline stage has its own failure variant. Only initialization and
//! configuration errors are allowed to reach the process boundary; the others
//! are converted into an empty outcome by the stage that produced them.

use thiserror::Error;

/// Result type alias for tweet-harvest operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for tweet-harvest
#[derive(Debug, Error)]
pub enum Error {
    /// The API client could not be constructed (bad credential or transport)
    #[error("client initialization failed: {0}")]
    Initialization(String),

    /// Configuration error with context about which setting is invalid
    #[error("configuration error: {message}")]
    Config {
        /// Human-readable error message describing the configuration issue
        message: String,
        /// The environment variable that caused the error
        key: Option<String>,
    },

    /// The API reported that the request quota is exhausted
    #[error("rate limit reached, retry after {wait_secs} seconds")]
    RateLimited {
        /// Seconds until the quota window resets
        wait_secs: u64,
    },

    /// The API answered with a non-success status
    #[error("search API error ({status}): {message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Sanitized response body
        message: String,
    },

    /// Network error
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Response body could not be decoded
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A post or author is missing a field required to build its row
    #[error("malformed record: {0}")]
    Transform(String),

    /// CSV serialization error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Returns true for errors that must stop the process with a failure status.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Error::Initialization(_) | Error::Config { .. })
    }
}
