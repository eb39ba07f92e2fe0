//! Share limits and code generation settings.

use serde::{Deserialize, Serialize};

/// Default maximum file upload size (100 MiB).
pub const DEFAULT_MAX_FILE_SIZE: u64 = 100 * 1024 * 1024;

/// Default maximum text share length in UTF-16 code units.
pub const DEFAULT_MAX_TEXT_LENGTH: usize = 1024 * 1024;

/// Share configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShareConfig {
    /// Maximum accepted file payload in bytes.
    #[serde(default = "default_max_file_size")]
    pub max_file_size_bytes: u64,
    /// Maximum accepted text length in UTF-16 code units.
    #[serde(default = "default_max_text_length")]
    pub max_text_length: usize,
    /// How many times a colliding code is redrawn before giving up.
    #[serde(default = "default_code_retry_limit")]
    pub code_retry_limit: u32,
}

impl Default for ShareConfig {
    fn default() -> Self {
        Self {
            max_file_size_bytes: default_max_file_size(),
            max_text_length: default_max_text_length(),
            code_retry_limit: default_code_retry_limit(),
        }
    }
}

fn default_max_file_size() -> u64 {
    DEFAULT_MAX_FILE_SIZE
}

fn default_max_text_length() -> usize {
    DEFAULT_MAX_TEXT_LENGTH
}

fn default_code_retry_limit() -> u32 {
    8
}
