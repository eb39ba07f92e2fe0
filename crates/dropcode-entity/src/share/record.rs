//! Serialized form of a text share.

use chrono::{DateTime, Utc};
use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};

/// Default language label for text shares.
pub const DEFAULT_LANGUAGE: &str = "text";

/// The JSON document stored in a text share artifact.
///
/// `created_at` is authoritative for the entry's age; `expires_at` is kept
/// for readers of the raw file and is recomputed on every access.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextRecord {
    /// The shared text.
    pub content: String,
    /// Free-form language label (presentation hint only).
    #[serde(default = "default_language")]
    pub language: String,
    /// When the share was created. `None` when absent or unreadable.
    #[serde(default, deserialize_with = "lenient_timestamp")]
    pub created_at: Option<DateTime<Utc>>,
    /// When the share stops being served.
    #[serde(default, deserialize_with = "lenient_timestamp")]
    pub expires_at: Option<DateTime<Utc>>,
}

impl TextRecord {
    /// Build a record stamped at `created_at` with the given time-to-live.
    pub fn new(
        content: String,
        language: Option<String>,
        created_at: DateTime<Utc>,
        expires_at: DateTime<Utc>,
    ) -> Self {
        Self {
            content,
            language: language
                .filter(|l| !l.is_empty())
                .unwrap_or_else(default_language),
            created_at: Some(created_at),
            expires_at: Some(expires_at),
        }
    }
}

fn default_language() -> String {
    DEFAULT_LANGUAGE.to_string()
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawTimestamp {
    Parsed(DateTime<Utc>),
    Unreadable(#[allow(dead_code)] IgnoredAny),
}

/// A timestamp that does not parse reads as missing, so the caller can fall
/// back to the artifact's modification time.
fn lenient_timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<RawTimestamp>::deserialize(deserializer)? {
        Some(RawTimestamp::Parsed(at)) => Some(at),
        Some(RawTimestamp::Unreadable(_)) | None => None,
    })
}
