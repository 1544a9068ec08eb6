//! Maps domain `AppError` to HTTP responses.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::Value;

use sharedrop_core::error::{AppError, ErrorKind};

use crate::dto::response::ApiEnvelope;

/// HTTP-facing wrapper around [`AppError`].
///
/// Missing shares and rejected input answer `400`; every backend failure
/// answers `500` with a generic message so no internal detail leaks.
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl ApiError {
    /// Status code and envelope payload for this error.
    fn parts(&self) -> (StatusCode, Value) {
        let err = &self.0;
        match err.kind {
            ErrorKind::NotFound | ErrorKind::DataIntegrity => (StatusCode::BAD_REQUEST, Value::Null),
            ErrorKind::Validation => (
                StatusCode::BAD_REQUEST,
                Value::String(err.public_message()),
            ),
            _ => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Value::String(err.public_message()),
            ),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, payload) = self.parts();

        match self.0.kind {
            ErrorKind::Internal | ErrorKind::Configuration => {
                tracing::error!(kind = %self.0.kind, error = %self.0, "Unhandled request error");
            }
            _ => tracing::debug!(kind = %self.0.kind, status = status.as_u16(), "Request failed"),
        }

        (status, Json(ApiEnvelope::failed(payload))).into_response()
    }
}
