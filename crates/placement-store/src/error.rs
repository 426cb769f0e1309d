//! Record store error types.

use thiserror::Error;

/// Errors from record store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// HTTP transport error (connection refused, DNS, TLS, body decode).
    #[error("HTTP error: {0}")]
    Http(reqwest::Error),

    /// The request exceeded the configured timeout.
    #[error("request timed out")]
    Timeout,

    /// The table API returned a non-success status code.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code returned by the backend.
        status: u16,
        /// Error message or response body.
        message: String,
    },

    /// No row with the given id exists.
    #[error("{table} record '{id}' not found")]
    NotFound { table: &'static str, id: String },

    /// A row could not be translated into a domain record.
    #[error("decode error: {0}")]
    Decode(String),

    /// Expected a returned row but none came back.
    #[error("No result returned")]
    NoResult,

    /// Invalid state encountered (e.g., bad configuration).
    #[error("Invalid state: {0}")]
    InvalidState(String),
}

impl From<reqwest::Error> for StoreError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            Self::Timeout
        } else {
            Self::Http(error)
        }
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(error: serde_json::Error) -> Self {
        Self::Decode(error.to_string())
    }
}
