//! Error types for the cache server
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::cache::EntryId;
use crate::models::ErrorResponse;

// == Cache Error Enum ==
/// Unified error type for the cache and its backing store.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CacheError {
    /// Missing or malformed identity/content, caller error
    #[error("{0}")]
    InvalidArgument(String),

    /// The backing store holds no record for this identity
    #[error("Cache item not found: {0}")]
    NotFound(EntryId),

    /// A backing store call failed or timed out
    #[error("Backing store unavailable: {0}")]
    StoreUnavailable(String),

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl CacheError {
    /// Shorthand for building an `InvalidArgument` from anything string-like.
    pub fn invalid(msg: impl Into<String>) -> Self {
        CacheError::InvalidArgument(msg.into())
    }

    /// Returns true when the error is the caller's fault.
    pub fn is_client_error(&self) -> bool {
        matches!(self, CacheError::InvalidArgument(_) | CacheError::NotFound(_))
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for CacheError {
    fn into_response(self) -> Response {
        let status = match &self {
            CacheError::InvalidArgument(_) => StatusCode::BAD_REQUEST,
            CacheError::NotFound(_) => StatusCode::NOT_FOUND,
            CacheError::StoreUnavailable(_) | CacheError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        if self.is_client_error() {
            tracing::warn!("Bad request: {}", self);
        } else {
            tracing::error!("Server error: {}", self);
        }

        let message = if self.is_client_error() {
            self.to_string()
        } else {
            format!("An error occurred: {}", self)
        };

        (status, Json(ErrorResponse::new(message))).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the cache server.
pub type Result<T> = std::result::Result<T, CacheError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let cases = [
            (CacheError::invalid("Id is required"), StatusCode::BAD_REQUEST),
            (CacheError::NotFound(7), StatusCode::NOT_FOUND),
            (
                CacheError::StoreUnavailable("down".to_string()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (
                CacheError::Internal("boom".to_string()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (err, expected) in cases {
            assert_eq!(err.into_response().status(), expected);
        }
    }

    #[test]
    fn test_invalid_argument_message_is_verbatim() {
        let err = CacheError::invalid("Cache item cannot be null");
        assert_eq!(err.to_string(), "Cache item cannot be null");
    }

    #[test]
    fn test_not_found_message_names_id() {
        assert_eq!(
            CacheError::NotFound(42).to_string(),
            "Cache item not found: 42"
        );
    }
}
