//! Reclamation sweep job.

use std::sync::Arc;

use serde_json::Value;
use tokio::sync::Mutex;
use tracing;

use dropcode_core::result::AppResult;
use dropcode_service::ReclamationSweeper;

/// Runs the reclamation sweep on behalf of the scheduler.
///
/// Overlapping ticks are skipped rather than queued: a slow sweep over a
/// large directory must not pile up behind itself.
#[derive(Debug)]
pub struct SweepJob {
    /// The sweeper shared with the HTTP endpoint.
    sweeper: Arc<ReclamationSweeper>,
    /// Held for the duration of a run.
    running: Mutex<()>,
}

impl SweepJob {
    /// Create a new sweep job
    pub fn new(sweeper: Arc<ReclamationSweeper>) -> Self {
        Self {
            sweeper,
            running: Mutex::new(()),
        }
    }

    /// Run one sweep. Returns `None` when a previous run is still in progress.
    pub async fn run(&self) -> AppResult<Option<Value>> {
        let Ok(_guard) = self.running.try_lock() else {
            tracing::warn!("Previous sweep still running, skipping this tick");
            return Ok(None);
        };

        tracing::info!("Running scheduled share sweep");
        let report = self.sweeper.sweep().await?;

        Ok(Some(serde_json::json!({
            "task": "share_sweep",
            "deleted": report.deleted,
            "total": report.total,
            "failed": report.failed,
        })))
    }
}
