//! Entry persistence on top of a [`StorageProvider`].
//!
//! Every entry is one artifact named `<CODE><.ext>` in the provider root.
//! There is no in-memory index: each call goes back to storage.

use std::sync::Arc;

use bytes::Bytes;
use tracing::debug;

use dropcode_core::error::AppError;
use dropcode_core::result::AppResult;
use dropcode_core::traits::storage::{ByteStream, StorageObjectMeta, StorageProvider};
use dropcode_core::types::ShareCode;
use dropcode_entity::share::TextRecord;
use dropcode_entity::share::mime::{PROBE_ORDER, TEXT_EXTENSION, extension_for_mime};

/// Reads and writes share artifacts.
#[derive(Debug, Clone)]
pub struct EntryStore {
    /// Backing storage.
    provider: Arc<dyn StorageProvider>,
}

impl EntryStore {
    /// Creates a new entry store.
    pub fn new(provider: Arc<dyn StorageProvider>) -> Self {
        Self { provider }
    }

    /// The backing provider.
    pub fn provider(&self) -> &Arc<dyn StorageProvider> {
        &self.provider
    }

    /// Write a file payload under `<code><ext>`, the extension coming from `type_hint`.
    ///
    /// Returns the artifact path.
    pub async fn put_file(&self, code: &ShareCode, data: Bytes, type_hint: &str) -> AppResult<String> {
        let path = code.file_name(extension_for_mime(type_hint));
        self.provider.write(&path, data).await?;
        Ok(path)
    }

    /// Serialize a text record under `<code>.txt`.
    ///
    /// Returns the artifact path.
    pub async fn put_text(&self, code: &ShareCode, record: &TextRecord) -> AppResult<String> {
        let path = code.file_name(TEXT_EXTENSION);
        let body = serde_json::to_vec_pretty(record)?;
        self.provider.write(&path, Bytes::from(body)).await?;
        Ok(path)
    }

    /// Find the file artifact for `code`, probing extensions in a fixed order.
    pub async fn locate_file(&self, code: &ShareCode) -> AppResult<Option<StorageObjectMeta>> {
        for ext in PROBE_ORDER {
            if let Some(meta) = self.stat(&code.file_name(ext)).await? {
                return Ok(Some(meta));
            }
        }
        Ok(None)
    }

    /// Load the text record stored under `<code>.txt`.
    ///
    /// A `.txt` artifact that does not hold a text record (a plain-text file
    /// upload) is reported as absent.
    pub async fn load_text(
        &self,
        code: &ShareCode,
    ) -> AppResult<Option<(TextRecord, StorageObjectMeta)>> {
        let path = code.file_name(TEXT_EXTENSION);
        let Some(meta) = self.stat(&path).await? else {
            return Ok(None);
        };

        let raw = match self.provider.read_bytes(&path).await {
            Ok(raw) => raw,
            Err(e) if e.is_not_found() => return Ok(None),
            Err(e) => return Err(e),
        };

        match serde_json::from_slice::<TextRecord>(&raw) {
            Ok(record) => Ok(Some((record, meta))),
            Err(e) => {
                debug!(code = %code, error = %e, "Artifact is not a text record");
                Ok(None)
            }
        }
    }

    /// Whether any artifact, of either kind, is stored under `code`.
    pub async fn is_code_taken(&self, code: &ShareCode) -> AppResult<bool> {
        for ext in PROBE_ORDER {
            if self.provider.exists(&code.file_name(ext)).await? {
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// Open an artifact for streaming.
    pub async fn open(&self, path: &str) -> AppResult<ByteStream> {
        self.provider.read(path).await
    }

    /// Enumerate every stored artifact.
    pub async fn list(&self) -> AppResult<Vec<StorageObjectMeta>> {
        self.provider.list("").await
    }

    /// Remove one artifact. An already-removed artifact is not an error.
    pub async fn delete(&self, path: &str) -> AppResult<()> {
        self.provider.delete(path).await
    }

    /// Metadata for a regular file, `None` when it does not exist.
    async fn stat(&self, path: &str) -> AppResult<Option<StorageObjectMeta>> {
        match self.provider.metadata(path).await {
            Ok(meta) if meta.is_directory => Ok(None),
            Ok(meta) => Ok(Some(meta)),
            Err(e) if e.is_not_found() => Ok(None),
            Err(e) => Err(AppError::with_source(
                e.kind,
                format!("Failed to probe {path}"),
                e,
            )),
        }
    }
}
