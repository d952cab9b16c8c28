use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde_json::json;
use thiserror::Error;

use gardi_store::StoreError;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("internal error: {0}")]
    Internal(String),
}

pub type ServerResult<T> = Result<T, ServerError>;

impl ServerError {
    /// Transport-level translation of the store's error taxonomy.
    fn status(&self) -> StatusCode {
        match self {
            // A missing document is a normal negative result.
            Self::Store(StoreError::NotFound(_)) => StatusCode::NOT_FOUND,
            // The caller supplied a segment that cannot address a document.
            Self::Store(StoreError::InvalidSegment { .. }) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gardi_store::{Collection, DocumentKey};

    #[test]
    fn not_found_maps_to_404() {
        let key = DocumentKey::new(Collection::Schemas, "alice", "s1").unwrap();
        let err = ServerError::from(StoreError::NotFound(key));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn invalid_segment_maps_to_400() {
        let err = ServerError::from(StoreError::InvalidSegment {
            segment: "a/b".into(),
            reason: "must not contain a path separator".into(),
        });
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn io_maps_to_500() {
        let err = ServerError::from(std::io::Error::other("disk on fire"));
        assert_eq!(
            err.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
