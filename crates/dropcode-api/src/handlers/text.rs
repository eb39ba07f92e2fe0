//! Text share and retrieval handlers.

use axum::Json;
use axum::extract::{Path, State};
use bytes::Bytes;
use validator::Validate;

use dropcode_core::error::AppError;

use crate::dto::request::TextShareRequest;
use crate::dto::response::{TextContentResponse, TextShareResponse, iso_timestamp};
use crate::error::{ApiError, ResultExt};
use crate::state::AppState;

/// POST /api/text: JSON `{text, language?}`
///
/// The body is parsed by hand so that every malformed shape is reported
/// with the same 400 as an empty text.
pub async fn share_text(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<TextShareResponse>, ApiError> {
    let req: TextShareRequest = serde_json::from_slice(&body).map_err(|e| {
        tracing::debug!(error = %e, "Unreadable text share body");
        AppError::validation("No text content received")
    })?;
    req.validate()
        .map_err(|_| AppError::validation("No text content received"))?;

    let receipt = state
        .share_service
        .share_text(req.text, req.language)
        .await
        .or_fail("Failed to save text")?;

    let share_code = receipt.code.to_string();
    Ok(Json(TextShareResponse {
        success: true,
        access_url: format!("/t/{share_code}"),
        share_code,
        text_length: receipt.text_length,
        language: receipt.language,
        expires_at: iso_timestamp(receipt.expires_at),
    }))
}

/// GET /api/text/{code}
pub async fn get_text(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<TextContentResponse>, ApiError> {
    let text = state
        .resolver
        .resolve_text(&code)
        .await
        .or_fail("Failed to access text")?;

    Ok(Json(TextContentResponse {
        success: true,
        content: text.content,
        language: text.language,
        created_at: iso_timestamp(text.created_at),
        expires_at: iso_timestamp(text.expires_at),
    }))
}
