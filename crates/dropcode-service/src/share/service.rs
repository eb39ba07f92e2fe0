//! Write side of the share store.

use std::sync::Arc;

use bytes::Bytes;
use tracing::{info, warn};

use dropcode_core::config::ShareConfig;
use dropcode_core::error::AppError;
use dropcode_core::result::AppResult;
use dropcode_core::traits::clock::Clock;
use dropcode_core::types::ShareCode;
use dropcode_entity::share::{EntryKind, FileShareReceipt, TextRecord, TextShareReceipt};

use super::code::CodeSource;
use super::expiry::ExpiryPolicy;
use super::store::EntryStore;

/// Render a byte or character limit the way users read it (`100MB`, `64KB`).
pub fn size_label(limit: u64) -> String {
    const KIB: u64 = 1024;
    const MIB: u64 = 1024 * KIB;
    match limit {
        l if l >= MIB && l % MIB == 0 => format!("{}MB", l / MIB),
        l if l >= KIB && l % KIB == 0 => format!("{}KB", l / KIB),
        l => format!("{l}B"),
    }
}

/// The error returned for a file payload above `max_bytes`.
pub fn file_too_large(max_bytes: u64) -> AppError {
    AppError::validation(format!("File too large (max {})", size_label(max_bytes)))
}

/// The error returned for a text payload above `max_chars`.
pub fn text_too_long(max_chars: usize) -> AppError {
    AppError::validation(format!("Text too long (max {})", size_label(max_chars as u64)))
}

/// Accepts new shares and assigns their codes.
#[derive(Debug, Clone)]
pub struct ShareService {
    /// Entry persistence.
    store: Arc<EntryStore>,
    /// Candidate code source.
    codes: Arc<dyn CodeSource>,
    /// Liveness rule, used to stamp expiry times.
    policy: ExpiryPolicy,
    /// Time source.
    clock: Arc<dyn Clock>,
    /// Size limits and retry budget.
    config: ShareConfig,
}

impl ShareService {
    /// Creates a new share service.
    pub fn new(
        store: Arc<EntryStore>,
        codes: Arc<dyn CodeSource>,
        policy: ExpiryPolicy,
        clock: Arc<dyn Clock>,
        config: ShareConfig,
    ) -> Self {
        Self {
            store,
            codes,
            policy,
            clock,
            config,
        }
    }

    /// The active share limits.
    pub fn config(&self) -> &ShareConfig {
        &self.config
    }

    /// Store a file payload and return its receipt.
    ///
    /// The size limit is checked before anything touches storage.
    pub async fn share_file(&self, data: Bytes, mime_type: &str) -> AppResult<FileShareReceipt> {
        let size_bytes = data.len() as u64;
        if size_bytes > self.config.max_file_size_bytes {
            return Err(file_too_large(self.config.max_file_size_bytes));
        }

        let code = self.allocate_code().await?;
        let path = self.store.put_file(&code, data, mime_type).await?;
        let created_at = self.clock.now();

        info!(
            code = %code,
            kind = %EntryKind::File,
            path = %path,
            size_bytes,
            mime_type,
            "File shared"
        );

        Ok(FileShareReceipt {
            code,
            path,
            size_bytes,
            created_at,
            expires_at: self.policy.expires_at(created_at),
        })
    }

    /// Store a text snippet and return its receipt.
    pub async fn share_text(
        &self,
        text: String,
        language: Option<String>,
    ) -> AppResult<TextShareReceipt> {
        if text.is_empty() {
            return Err(AppError::validation("No text content received"));
        }
        // UTF-16 code units, the unit browser clients measure text in.
        let text_length = text.encode_utf16().count();
        if text_length > self.config.max_text_length {
            return Err(text_too_long(self.config.max_text_length));
        }

        let code = self.allocate_code().await?;
        let created_at = self.clock.now();
        let record = TextRecord::new(
            text,
            language,
            created_at,
            self.policy.expires_at(created_at),
        );
        let path = self.store.put_text(&code, &record).await?;

        info!(
            code = %code,
            kind = %EntryKind::Text,
            path = %path,
            text_length,
            language = %record.language,
            "Text shared"
        );

        Ok(TextShareReceipt {
            code,
            path,
            text_length,
            language: record.language,
            created_at,
            expires_at: self.policy.expires_at(created_at),
        })
    }

    /// Draw a code no stored artifact is using.
    ///
    /// A colliding draw is retried up to `code_retry_limit` times.
    async fn allocate_code(&self) -> AppResult<ShareCode> {
        let attempts = self.config.code_retry_limit.saturating_add(1);
        for attempt in 1..=attempts {
            let code = self.codes.next_code();
            if !self.store.is_code_taken(&code).await? {
                return Ok(code);
            }
            warn!(code = %code, attempt, "Share code already in use, drawing again");
        }
        Err(AppError::conflict(format!(
            "No free share code after {attempts} attempts"
        )))
    }
}
