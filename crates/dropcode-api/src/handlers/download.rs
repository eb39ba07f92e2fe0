//! File download handler.

use axum::body::Body;
use axum::extract::{Path, State};
use axum::http::{StatusCode, header};
use axum::response::Response;

use dropcode_core::error::AppError;

use crate::error::{ApiError, ResultExt};
use crate::state::AppState;

/// GET /api/download/{code}
pub async fn download_file(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Response, ApiError> {
    let resolved = state
        .resolver
        .resolve_file(&code)
        .await
        .or_fail("Failed to download file")?;

    let response = Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, resolved.content_type)
        .header(
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", resolved.file_name),
        )
        .header(header::CONTENT_LENGTH, resolved.entry.size_bytes)
        .body(Body::from_stream(resolved.stream))
        .map_err(|e| AppError::internal(format!("Response build failed: {e}")))
        .or_fail("Failed to download file")?;

    Ok(response)
}
