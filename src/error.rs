//! Error types for the bbm service
//!
//! Provides unified error handling using thiserror. Every request-level
//! failure becomes a JSON error response; none of them stop the server.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

// == Store Error Enum ==
/// Errors raised by the data-access layer.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Query or connection failure reported by the database driver
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Any other storage failure
    #[error("storage error: {0}")]
    Internal(String),
}

// == Api Error Enum ==
/// Error type returned by the HTTP handlers.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Malformed body or path parameter
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// No record with the given id
    #[error("bbm '{0}' not found")]
    NotFound(i64),

    /// Storage failure, details are logged and never sent to the client
    #[error(transparent)]
    Store(#[from] StoreError),
}

// == IntoResponse Implementation ==
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, kind, message) = match &self {
            ApiError::InvalidRequest(msg) => {
                (StatusCode::BAD_REQUEST, "invalid_request", msg.clone())
            }
            ApiError::NotFound(_) => (StatusCode::NOT_FOUND, "not_found", self.to_string()),
            ApiError::Store(e) => {
                tracing::error!("Storage failure: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal_error",
                    "an internal error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": kind,
            "message": message
        }));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the HTTP layer.
pub type Result<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let cases = [
            (ApiError::InvalidRequest("bad".into()), StatusCode::BAD_REQUEST),
            (ApiError::NotFound(7), StatusCode::NOT_FOUND),
            (
                ApiError::Store(StoreError::Internal("boom".into())),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (err, expected) in cases {
            assert_eq!(err.into_response().status(), expected);
        }
    }

    #[tokio::test]
    async fn test_store_error_hides_details() {
        let response = ApiError::Store(StoreError::Internal("password=hunter2".into()))
            .into_response();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let text = String::from_utf8(bytes.to_vec()).unwrap();
        assert!(text.contains("internal_error"));
        assert!(!text.contains("hunter2"));
    }

    #[test]
    fn test_not_found_message() {
        assert_eq!(ApiError::NotFound(999).to_string(), "bbm '999' not found");
    }
}
