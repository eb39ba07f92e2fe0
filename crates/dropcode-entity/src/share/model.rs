//! Share entry models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use dropcode_core::types::ShareCode;

use crate::share::kind::EntryKind;

/// A located share artifact and its derived timing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredEntry {
    /// The share code.
    pub code: ShareCode,
    /// The kind the entry was resolved as.
    pub kind: EntryKind,
    /// Path of the artifact relative to the uploads directory (`<CODE><.ext>`).
    pub path: String,
    /// Artifact size in bytes.
    pub size_bytes: u64,
    /// Authoritative creation time.
    pub created_at: DateTime<Utc>,
    /// `created_at` plus the time-to-live.
    pub expires_at: DateTime<Utc>,
}

/// Result of a successful file share.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileShareReceipt {
    /// Assigned code.
    pub code: ShareCode,
    /// Artifact path under the uploads directory.
    pub path: String,
    /// Payload size in bytes.
    pub size_bytes: u64,
    /// Creation time.
    pub created_at: DateTime<Utc>,
    /// Expiry time.
    pub expires_at: DateTime<Utc>,
}

/// Result of a successful text share.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextShareReceipt {
    /// Assigned code.
    pub code: ShareCode,
    /// Artifact path under the uploads directory.
    pub path: String,
    /// Text length in characters.
    pub text_length: usize,
    /// Stored language label.
    pub language: String,
    /// Creation time.
    pub created_at: DateTime<Utc>,
    /// Expiry time.
    pub expires_at: DateTime<Utc>,
}
