//! Error types for catalog API clients.

use thiserror::Error;

/// Result type alias for client operations.
pub type ClientResult<T> = Result<T, ClientError>;

/// Errors produced while talking to the catalog API.
///
/// `NotFound` is deliberately its own variant: views render a missing item
/// differently from a transient failure, which gets a retry affordance.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The requested item does not exist on the server.
    #[error("Item not found")]
    NotFound,

    /// The server answered with a non-success status.
    #[error("Server returned status {status}: {message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Error message from the response body, or the status reason
        message: String,
    },

    /// Network or HTTP transport error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The configured server URL could not be parsed.
    #[error("Invalid server URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The response body was not the expected JSON shape.
    #[error("Malformed response body: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ClientError {
    /// Whether retrying the same request could plausibly succeed.
    ///
    /// A missing item stays missing; everything else (server hiccup,
    /// network failure, garbled body) is worth offering a retry for.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        !matches!(self, Self::NotFound)
    }
}
