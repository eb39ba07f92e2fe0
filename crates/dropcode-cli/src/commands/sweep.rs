//! One-shot reclamation sweep, for host cron jobs.

use serde::Serialize;
use tabled::Tabled;

use dropcode_api::AppState;
use dropcode_core::error::AppError;

use crate::output::{self, OutputFormat};

/// One row of sweep output.
#[derive(Debug, Serialize, Tabled)]
struct SweepRow {
    #[tabled(rename = "Uploads directory")]
    uploads_dir: String,
    #[tabled(rename = "Deleted")]
    deleted: u64,
    #[tabled(rename = "Total")]
    total: u64,
    #[tabled(rename = "Failed")]
    failed: u64,
}

/// Execute the sweep command
pub async fn execute(config_path: &str, format: OutputFormat) -> Result<(), AppError> {
    let config = super::load_config(config_path)?;
    let uploads_dir = config.storage.uploads_dir.clone();
    let state = AppState::from_config(config);

    let report = state.sweeper.sweep().await?;

    output::print_list(
        &[SweepRow {
            uploads_dir,
            deleted: report.deleted,
            total: report.total,
            failed: report.failed,
        }],
        format,
    );

    if format == OutputFormat::Table {
        output::print_success(&format!(
            "Deleted {} of {} files",
            report.deleted, report.total
        ));
        if report.failed > 0 {
            output::print_warning(&format!(
                "{} entries could not be processed; see the log",
                report.failed
            ));
        }
    }
    Ok(())
}
