//! Reclamation sweep configuration.

use serde::{Deserialize, Serialize};

/// Secret shipped as the default maintenance credential.
pub const DEFAULT_CLEANUP_SECRET: &str = "cleanup-secret-key";

/// Cleanup endpoint and scheduler configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CleanupConfig {
    /// Shared bearer secret required by `POST /api/cleanup`.
    #[serde(default = "default_secret")]
    pub secret: String,
    /// Whether the server runs the sweep on an internal schedule.
    #[serde(default)]
    pub schedule_enabled: bool,
    /// Six-field cron expression for the internal sweep.
    #[serde(default = "default_schedule")]
    pub schedule: String,
}

impl CleanupConfig {
    /// Whether the shipped default secret is still in use.
    pub fn uses_default_secret(&self) -> bool {
        self.secret == DEFAULT_CLEANUP_SECRET
    }
}

impl Default for CleanupConfig {
    fn default() -> Self {
        Self {
            secret: default_secret(),
            schedule_enabled: false,
            schedule: default_schedule(),
        }
    }
}

fn default_secret() -> String {
    DEFAULT_CLEANUP_SECRET.to_string()
}

fn default_schedule() -> String {
    "0 0 * * * *".to_string()
}
