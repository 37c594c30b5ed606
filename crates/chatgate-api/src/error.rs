//! Maps domain `AppError` to HTTP responses.

use axum::http::StatusCode;
use axum::{BoxError, Json};
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use chatgate_core::error::{AppError, ErrorKind};

/// Standard API error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    /// Machine-readable error code.
    pub error: String,
    /// Human-readable message.
    pub message: String,
}

/// HTTP-facing wrapper around [`AppError`].
///
/// Handlers return [`ApiResult`]; `?` on an `AppResult` converts.
#[derive(Debug)]
pub struct ApiError(pub AppError);

/// Result type returned by handlers and extractors.
pub type ApiResult<T> = Result<T, ApiError>;

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

/// HTTP status for each error kind.
pub fn status_for(kind: ErrorKind) -> StatusCode {
    match kind {
        ErrorKind::InvalidInput => StatusCode::BAD_REQUEST,
        ErrorKind::DuplicateEmail => StatusCode::CONFLICT,
        ErrorKind::InvalidCredentials | ErrorKind::Unauthenticated => StatusCode::UNAUTHORIZED,
        ErrorKind::Forbidden => StatusCode::FORBIDDEN,
        ErrorKind::NotFound => StatusCode::NOT_FOUND,
        ErrorKind::UpstreamFailure => StatusCode::SERVICE_UNAVAILABLE,
        ErrorKind::Configuration | ErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let err = self.0;
        let status = status_for(err.kind);

        match err.kind {
            ErrorKind::UpstreamFailure | ErrorKind::Configuration | ErrorKind::Internal => {
                tracing::error!(
                    kind = err.kind.code(),
                    error = %err.message,
                    detail = err.detail().as_deref().unwrap_or(""),
                    "Request failed"
                );
            }
            _ => {
                tracing::debug!(kind = err.kind.code(), error = %err.message, "Request rejected");
            }
        }

        let body = ApiErrorResponse {
            error: err.kind.code().to_string(),
            message: err.message,
        };

        (status, Json(body)).into_response()
    }
}

/// Response for an error raised by a tower layer rather than a handler.
/// Only the timeout layer produces these today.
pub fn layer_error_response(err: BoxError) -> Response {
    if err.is::<tower::timeout::error::Elapsed>() {
        tracing::warn!("Request timed out");
        let body = ApiErrorResponse {
            error: "REQUEST_TIMEOUT".to_string(),
            message: "Request timed out".to_string(),
        };
        return (StatusCode::REQUEST_TIMEOUT, Json(body)).into_response();
    }
    ApiError(AppError::internal(format!("Unhandled middleware error: {err}"))).into_response()
}
