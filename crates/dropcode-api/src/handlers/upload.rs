//! File share handler.

use axum::Json;
use axum::extract::multipart::MultipartRejection;
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use bytes::Bytes;

use dropcode_core::error::AppError;
use dropcode_entity::share::mime::FALLBACK_CONTENT_TYPE;
use dropcode_service::share::service::file_too_large;

use crate::dto::response::{FileShareResponse, iso_timestamp};
use crate::error::{ApiError, ResultExt};
use crate::state::AppState;

/// A file part pulled out of the multipart body.
struct UploadedFile {
    file_name: Option<String>,
    content_type: Option<String>,
    data: Bytes,
}

/// POST /api/upload: multipart upload, field `file`
pub async fn upload_file(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<FileShareResponse>, ApiError> {
    let max_bytes = state.config.share.max_file_size_bytes;

    let mut multipart = multipart.map_err(|e| {
        tracing::debug!(error = %e, "Upload is not a multipart body");
        AppError::validation("No file received")
    })?;

    let upload = read_file_field(&mut multipart, max_bytes)
        .await?
        .ok_or_else(|| AppError::validation("No file received"))?;

    let mime_type = upload
        .content_type
        .filter(|t| !t.is_empty())
        .unwrap_or_else(|| FALLBACK_CONTENT_TYPE.to_string());

    let receipt = state
        .share_service
        .share_file(upload.data, &mime_type)
        .await
        .or_fail("Failed to upload file")?;

    let share_code = receipt.code.to_string();
    Ok(Json(FileShareResponse {
        success: true,
        download_url: format!(
            "{}/api/download/{share_code}",
            state.config.server.public_base_path.trim_end_matches('/')
        ),
        file_name: upload
            .file_name
            .filter(|n| !n.is_empty())
            .unwrap_or(receipt.path),
        share_code,
        size: receipt.size_bytes,
        mime_type,
        expires_at: iso_timestamp(receipt.expires_at),
    }))
}

/// Read the first `file` field, skipping any others.
async fn read_file_field(
    multipart: &mut Multipart,
    max_bytes: u64,
) -> Result<Option<UploadedFile>, ApiError> {
    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => return Ok(None),
            Err(e) if e.status() == StatusCode::PAYLOAD_TOO_LARGE => {
                return Err(file_too_large(max_bytes).into());
            }
            Err(e) => {
                tracing::debug!(error = %e, "Malformed multipart body");
                return Err(AppError::validation("No file received").into());
            }
        };

        if field.name() != Some("file") {
            continue;
        }

        let file_name = field.file_name().map(String::from);
        let content_type = field.content_type().map(String::from);
        let data = field.bytes().await.map_err(|e| {
            if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
                file_too_large(max_bytes)
            } else {
                AppError::validation(format!("Failed to read upload: {}", e.body_text()))
            }
        })?;

        return Ok(Some(UploadedFile {
            file_name,
            content_type,
            data,
        }));
    }
}
