//! Error types for the Kuwo web API client.

use thiserror::Error;

/// Main error type for all Kuwo operations.
///
/// Timeouts, connection-level failures, bad HTTP statuses and undecodable
/// bodies are distinct variants so callers can tell them apart.
#[derive(Debug, Error)]
pub enum KuwoError {
    /// Missing or implausible credentials (secret token / cookie string).
    #[error("Bad credentials: {0}")]
    BadCredentials(String),

    /// The underlying HTTP client could not be constructed.
    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(reqwest::Error),

    /// The request did not complete within the fixed timeout.
    #[error("Request timed out")]
    Timeout,

    /// Connection-level failure (DNS, TLS, refused connection, ...).
    #[error("Transport error: {0}")]
    Transport(reqwest::Error),

    /// The service answered with a non-200 HTTP status.
    #[error("Unexpected HTTP status {0}")]
    HttpStatus(u16),

    /// The response body was not valid JSON.
    #[error("Malformed response: {0}")]
    Decode(reqwest::Error),
}

impl KuwoError {
    /// Classify a reqwest failure into the matching variant.
    pub(crate) fn from_request(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            KuwoError::Timeout
        } else if err.is_decode() {
            KuwoError::Decode(err)
        } else {
            KuwoError::Transport(err)
        }
    }
}

/// Result type alias for Kuwo operations.
pub type Result<T> = std::result::Result<T, KuwoError>;
