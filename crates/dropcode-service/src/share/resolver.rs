//! Code → live entry resolution.
//!
//! Each lookup runs validate → locate → check expiry → emit. An expired
//! entry is reported as such and left on disk; deleting it is the sweeper's
//! job alone.

use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::debug;

use dropcode_core::error::AppError;
use dropcode_core::result::AppResult;
use dropcode_core::traits::clock::Clock;
use dropcode_core::traits::storage::ByteStream;
use dropcode_core::types::ShareCode;
use dropcode_entity::share::mime::content_type_for_path;
use dropcode_entity::share::{EntryKind, StoredEntry};

use super::expiry::ExpiryPolicy;
use super::store::EntryStore;

/// A live file entry ready to be streamed.
pub struct ResolvedFile {
    /// The located entry.
    pub entry: StoredEntry,
    /// Content type derived from the stored extension.
    pub content_type: &'static str,
    /// Suggested download file name (`<CODE><.ext>`).
    pub file_name: String,
    /// Artifact contents.
    pub stream: ByteStream,
}

impl fmt::Debug for ResolvedFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResolvedFile")
            .field("entry", &self.entry)
            .field("content_type", &self.content_type)
            .field("file_name", &self.file_name)
            .finish_non_exhaustive()
    }
}

/// A live text entry.
#[derive(Debug, Clone)]
pub struct ResolvedText {
    /// The share code.
    pub code: ShareCode,
    /// The shared text.
    pub content: String,
    /// Language label.
    pub language: String,
    /// Authoritative creation time.
    pub created_at: DateTime<Utc>,
    /// Recomputed expiry time.
    pub expires_at: DateTime<Utc>,
}

/// Resolves share codes to live entries.
#[derive(Debug, Clone)]
pub struct RetrievalResolver {
    /// Entry persistence.
    store: Arc<EntryStore>,
    /// Liveness rule.
    policy: ExpiryPolicy,
    /// Time source.
    clock: Arc<dyn Clock>,
}

impl RetrievalResolver {
    /// Creates a new resolver.
    pub fn new(store: Arc<EntryStore>, policy: ExpiryPolicy, clock: Arc<dyn Clock>) -> Self {
        Self {
            store,
            policy,
            clock,
        }
    }

    /// Resolve a file entry and open it for streaming.
    ///
    /// File age comes from the artifact's modification time.
    pub async fn resolve_file(&self, raw_code: &str) -> AppResult<ResolvedFile> {
        let code = ShareCode::parse(raw_code)?;

        let meta = self.store.locate_file(&code).await?.ok_or_else(|| {
            debug!(code = %code, "File entry not found");
            AppError::not_found("File not found or expired")
        })?;

        let created_at = meta
            .last_modified
            .ok_or_else(|| AppError::storage(format!("No modification time for {}", meta.path)))?;

        if self.policy.is_expired(created_at, self.clock.now()) {
            debug!(code = %code, %created_at, "File entry expired");
            return Err(AppError::expired("File has expired"));
        }

        // The sweeper may have removed it since the probe.
        let stream = self.store.open(&meta.path).await.map_err(|e| {
            if e.is_not_found() {
                AppError::not_found("File not found or expired")
            } else {
                e
            }
        })?;

        let content_type = content_type_for_path(&meta.path);
        let file_name = meta.path.clone();
        Ok(ResolvedFile {
            entry: StoredEntry {
                code,
                kind: EntryKind::File,
                path: meta.path,
                size_bytes: meta.size_bytes,
                created_at,
                expires_at: self.policy.expires_at(created_at),
            },
            content_type,
            file_name,
            stream,
        })
    }

    /// Resolve a text entry.
    ///
    /// Age comes from the record's embedded `createdAt`, falling back to the
    /// artifact's modification time for records written without one.
    pub async fn resolve_text(&self, raw_code: &str) -> AppResult<ResolvedText> {
        let code = ShareCode::parse(raw_code)?;

        let (record, meta) = self.store.load_text(&code).await?.ok_or_else(|| {
            debug!(code = %code, "Text entry not found");
            AppError::not_found("Text not found or expired")
        })?;

        let created_at = record
            .created_at
            .or(meta.last_modified)
            .ok_or_else(|| AppError::storage(format!("No creation time for {}", meta.path)))?;

        if self.policy.is_expired(created_at, self.clock.now()) {
            debug!(code = %code, %created_at, "Text entry expired");
            return Err(AppError::expired("Text has expired"));
        }

        Ok(ResolvedText {
            code,
            content: record.content,
            language: record.language,
            created_at,
            expires_at: self.policy.expires_at(created_at),
        })
    }
}
