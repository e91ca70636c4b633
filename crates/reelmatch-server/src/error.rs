//! API error taxonomy and HTTP status mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde_json::json;

use reelmatch::RecsError;

/// Errors surfaced to HTTP clients as `{ "error": <message> }` bodies.
#[derive(thiserror::Error, Debug)]
pub enum ApiError {
    /// Unknown user id. A client error, not a system fault.
    #[error("{0}")]
    NotFound(String),

    /// Malformed request body.
    #[error("{0}")]
    BadRequest(String),

    /// Dataset inconsistency or other server-side failure.
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<RecsError> for ApiError {
    fn from(e: RecsError) -> Self {
        match e {
            RecsError::UserNotFound(_) => ApiError::NotFound("User not found".to_string()),
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Not-found and bad-request are client errors; only server-side
        // failures are logged as faults.
        if matches!(self, ApiError::Internal(_)) {
            tracing::error!("Request failed: {self}");
        }
        (self.status(), Json(json!({ "error": self.to_string() }))).into_response()
    }
}

/// Convenience result type for handlers.
pub type ApiResult<T> = Result<T, ApiError>;
