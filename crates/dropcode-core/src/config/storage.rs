//! Backing storage configuration.

use serde::{Deserialize, Serialize};

/// Storage configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Directory holding one artifact per share entry. Created lazily on first write.
    #[serde(default = "default_uploads_dir")]
    pub uploads_dir: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            uploads_dir: default_uploads_dir(),
        }
    }
}

fn default_uploads_dir() -> String {
    "./uploads".to_string()
}
