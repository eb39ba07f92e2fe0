//! Maps domain `AppError` to HTTP responses.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use dropcode_core::error::{AppError, ErrorKind};

/// Message returned for server-side failures that have no route-specific wording.
const GENERIC_FAILURE: &str = "Internal server error";

/// Standard API error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    /// Always `false`.
    pub success: bool,
    /// Human-readable message.
    pub error: String,
    /// Machine-readable error code.
    pub code: String,
}

/// An error on its way out of a handler.
///
/// Client errors carry their own message. Server errors are logged in full
/// and reach the client only as a fixed, route-specific message.
#[derive(Debug)]
pub struct ApiError {
    /// HTTP status.
    pub status: StatusCode,
    /// Machine-readable error code.
    pub code: &'static str,
    /// Message sent to the client.
    pub message: String,
}

impl ApiError {
    /// Convert a domain error, using `public_message` in place of server-side detail.
    pub fn from_app(err: AppError, public_message: &str) -> Self {
        let (status, code) = status_for(err.kind);

        let message = if err.kind.is_server_side() {
            tracing::error!(
                kind = %err.kind,
                error = %err.message,
                source = ?err.source,
                "Request failed"
            );
            public_message.to_string()
        } else {
            err.message
        };

        Self {
            status,
            code,
            message,
        }
    }
}

fn status_for(kind: ErrorKind) -> (StatusCode, &'static str) {
    match kind {
        ErrorKind::Validation => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR"),
        ErrorKind::Unauthorized => (StatusCode::UNAUTHORIZED, "UNAUTHORIZED"),
        ErrorKind::NotFound => (StatusCode::NOT_FOUND, "NOT_FOUND"),
        ErrorKind::Expired => (StatusCode::GONE, "EXPIRED"),
        ErrorKind::Conflict => (StatusCode::SERVICE_UNAVAILABLE, "CODE_SPACE_EXHAUSTED"),
        ErrorKind::Storage
        | ErrorKind::Serialization
        | ErrorKind::Configuration
        | ErrorKind::Internal => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
    }
}

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self::from_app(err, GENERIC_FAILURE)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ApiErrorResponse {
            success: false,
            error: self.message,
            code: self.code.to_string(),
        };

        (self.status, Json(body)).into_response()
    }
}

/// Attach a route-specific public message to server-side failures.
pub trait ResultExt<T> {
    /// Map the error into an [`ApiError`], hiding server-side detail behind `public_message`.
    fn or_fail(self, public_message: &str) -> Result<T, ApiError>;
}

impl<T> ResultExt<T> for Result<T, AppError> {
    fn or_fail(self, public_message: &str) -> Result<T, ApiError> {
        self.map_err(|e| ApiError::from_app(e, public_message))
    }
}
