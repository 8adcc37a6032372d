//! The adapter's HTTP error type and status mappings.
//!
//! `CoreError` and `RepositoryError` fold into [`HttpError`] here, which
//! renders as `{"error": <message>}`. The message is a fixed client-safe
//! string per class; the underlying detail goes to the log instead of
//! the wire.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;
use wares_core::{CoreError, RepositoryError};

/// Everything a handler can answer with besides a success body.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Invalid request input (query params, path params, or body).
    #[error("Validation failed")]
    Validation,

    /// No resource at the requested path.
    #[error("{0}")]
    NotFound(String),

    /// Request rejected by the rate limiter.
    #[error("Too many requests, please try again later.")]
    RateLimited,

    /// Unexpected failure; the message is already client-safe.
    #[error("{0}")]
    Internal(String),
}

/// The one body shape every error response uses.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            HttpError::Validation => (StatusCode::BAD_REQUEST, self.to_string()),
            HttpError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            HttpError::RateLimited => (StatusCode::TOO_MANY_REQUESTS, self.to_string()),
            HttpError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg.clone()),
        };

        let body = ErrorBody { error: message };

        (status, axum::Json(body)).into_response()
    }
}

impl From<CoreError> for HttpError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Repository(repo_err) => repo_err.into(),
            CoreError::InvalidItem(invalid) => {
                tracing::debug!(reason = %invalid, "rejected item payload");
                HttpError::Validation
            }
            CoreError::Validation(msg) => {
                tracing::debug!(reason = %msg, "rejected request input");
                HttpError::Validation
            }
            CoreError::Internal(msg) => {
                tracing::error!(error = %msg, "core failure");
                HttpError::Internal("Internal server error".to_string())
            }
        }
    }
}

impl From<RepositoryError> for HttpError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound(_) => HttpError::NotFound("Item not found".to_string()),
            RepositoryError::Io(msg) | RepositoryError::Format(msg) => {
                tracing::error!(error = %msg, "item store failure");
                HttpError::Internal("Failed to read data".to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repository_errors_map_to_generic_read_failure() {
        let err: HttpError = RepositoryError::Io("stat data/items.json: denied".to_string()).into();
        assert!(matches!(err, HttpError::Internal(ref msg) if msg == "Failed to read data"));

        let err: HttpError = RepositoryError::Format("not an array".to_string()).into();
        assert!(matches!(err, HttpError::Internal(ref msg) if msg == "Failed to read data"));
    }

    #[test]
    fn test_not_found_hides_store_detail() {
        let err: HttpError = RepositoryError::NotFound("Item with ID 42".to_string()).into();
        assert!(matches!(err, HttpError::NotFound(ref msg) if msg == "Item not found"));
    }

    #[test]
    fn test_invalid_item_maps_to_validation() {
        let draft = wares_core::ItemDraft {
            name: String::new(),
            category: "Tools".to_string(),
            price: 1.0,
        };
        let core_err = CoreError::from(draft.validate().unwrap_err());
        assert!(matches!(HttpError::from(core_err), HttpError::Validation));
    }
}
