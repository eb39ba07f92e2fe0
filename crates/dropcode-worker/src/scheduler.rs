//! Cron scheduler for the periodic sweep.

use std::sync::Arc;

use tokio_cron_scheduler::{Job as CronJob, JobScheduler};

use dropcode_core::error::AppError;

use crate::jobs::SweepJob;

/// Cron-based scheduler for background maintenance
pub struct CronScheduler {
    /// The underlying job scheduler
    scheduler: JobScheduler,
    /// The sweep to run on each tick
    sweep: Arc<SweepJob>,
}

impl std::fmt::Debug for CronScheduler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CronScheduler").finish()
    }
}

impl CronScheduler {
    /// Create a new cron scheduler
    pub async fn new(sweep: Arc<SweepJob>) -> Result<Self, AppError> {
        let scheduler = JobScheduler::new()
            .await
            .map_err(|e| AppError::internal(format!("Failed to create scheduler: {e}")))?;

        Ok(Self { scheduler, sweep })
    }

    /// Register the share sweep on a six-field cron expression
    /// (`sec min hour day month weekday`).
    pub async fn register_sweep(&self, schedule: &str) -> Result<(), AppError> {
        let sweep = Arc::clone(&self.sweep);
        let job = CronJob::new_async(schedule, move |_uuid, _lock| {
            let sweep = Arc::clone(&sweep);
            Box::pin(async move {
                match sweep.run().await {
                    Ok(Some(summary)) => tracing::debug!(%summary, "Scheduled sweep finished"),
                    Ok(None) => {}
                    Err(e) => tracing::error!("Scheduled sweep failed: {}", e),
                }
            })
        })
        .map_err(|e| {
            AppError::configuration(format!("Invalid cleanup schedule '{schedule}': {e}"))
        })?;

        self.scheduler
            .add(job)
            .await
            .map_err(|e| AppError::internal(format!("Failed to add sweep schedule: {e}")))?;

        tracing::info!(schedule, "Registered: share_sweep");
        Ok(())
    }

    /// Start the scheduler
    pub async fn start(&self) -> Result<(), AppError> {
        self.scheduler
            .start()
            .await
            .map_err(|e| AppError::internal(format!("Failed to start scheduler: {e}")))?;

        tracing::info!("Cron scheduler started");
        Ok(())
    }

    /// Shutdown the scheduler
    pub async fn shutdown(&mut self) -> Result<(), AppError> {
        self.scheduler
            .shutdown()
            .await
            .map_err(|e| AppError::internal(format!("Failed to shutdown scheduler: {e}")))?;

        tracing::info!("Cron scheduler shut down");
        Ok(())
    }
}
