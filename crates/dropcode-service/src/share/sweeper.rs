//! Reclamation of expired artifacts.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use dropcode_core::result::AppResult;
use dropcode_core::traits::clock::Clock;

use super::expiry::ExpiryPolicy;
use super::store::EntryStore;

/// Outcome of one sweep.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SweepReport {
    /// Artifacts removed by this run.
    pub deleted: u64,
    /// Artifacts examined by this run.
    pub total: u64,
    /// Artifacts that could not be examined or removed.
    pub failed: u64,
}

/// Deletes every artifact older than the time-to-live.
///
/// The sweep is best-effort: a failure on one artifact is logged and
/// counted, and the run moves on to the next one.
#[derive(Debug, Clone)]
pub struct ReclamationSweeper {
    /// Entry persistence.
    store: Arc<EntryStore>,
    /// Liveness rule.
    policy: ExpiryPolicy,
    /// Time source.
    clock: Arc<dyn Clock>,
}

impl ReclamationSweeper {
    /// Creates a new sweeper.
    pub fn new(store: Arc<EntryStore>, policy: ExpiryPolicy, clock: Arc<dyn Clock>) -> Self {
        Self {
            store,
            policy,
            clock,
        }
    }

    /// Run one sweep over the whole store.
    ///
    /// A store whose directory does not exist yet sweeps as `0 of 0`.
    pub async fn sweep(&self) -> AppResult<SweepReport> {
        let entries = self.store.list().await?;
        let now = self.clock.now();
        let mut report = SweepReport::default();

        for entry in entries.into_iter().filter(|e| !e.is_directory) {
            report.total += 1;

            let Some(modified) = entry.last_modified else {
                warn!(path = %entry.path, "Skipping entry without modification time");
                report.failed += 1;
                continue;
            };

            if !self.policy.is_expired(modified, now) {
                continue;
            }

            match self.store.delete(&entry.path).await {
                Ok(()) => {
                    debug!(path = %entry.path, %modified, "Reclaimed expired entry");
                    report.deleted += 1;
                }
                Err(e) => {
                    warn!(path = %entry.path, error = %e, "Failed to reclaim entry");
                    report.failed += 1;
                }
            }
        }

        info!(
            deleted = report.deleted,
            total = report.total,
            failed = report.failed,
            "Sweep completed"
        );
        Ok(report)
    }
}
