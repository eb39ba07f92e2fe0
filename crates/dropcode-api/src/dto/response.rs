//! Response DTOs.
//!
//! Share and retrieval bodies are flat objects with camelCase keys and a
//! leading `success` flag; timestamps are ISO-8601 with millisecond precision.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// Standard success response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T: Serialize> {
    /// Whether the request was successful.
    pub success: bool,
    /// Response data.
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Creates a successful response.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Render a timestamp as `2024-01-01T00:00:00.000Z`.
pub fn iso_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Response to `POST /api/upload`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileShareResponse {
    pub success: bool,
    pub share_code: String,
    /// Client-supplied file name, or the stored artifact name when none was sent.
    pub file_name: String,
    pub size: u64,
    pub mime_type: String,
    pub expires_at: String,
    pub download_url: String,
}

/// Response to `POST /api/text`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextShareResponse {
    pub success: bool,
    pub share_code: String,
    /// Length in characters.
    pub text_length: usize,
    pub language: String,
    pub expires_at: String,
    pub access_url: String,
}

/// Response to `GET /api/text/{code}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextContentResponse {
    pub success: bool,
    pub content: String,
    pub language: String,
    pub created_at: String,
    pub expires_at: String,
}

/// Response to `POST /api/cleanup`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CleanupResponse {
    pub success: bool,
    pub message: String,
    pub deleted_files: u64,
    pub total_files: u64,
    /// Entries the sweep could not process; they are retried on the next run.
    pub failed_files: u64,
    pub timestamp: String,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// `"ok"` or `"degraded"`.
    pub status: String,
    /// Crate version.
    pub version: String,
}
