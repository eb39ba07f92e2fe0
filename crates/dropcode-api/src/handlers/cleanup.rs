//! Maintenance sweep handler.

use axum::Json;
use axum::extract::State;

use crate::dto::response::{CleanupResponse, iso_timestamp};
use crate::error::{ApiError, ResultExt};
use crate::extractors::MaintenanceAuth;
use crate::state::AppState;

/// POST /api/cleanup: requires `Authorization: Bearer <cleanup secret>`
pub async fn run_cleanup(
    State(state): State<AppState>,
    _auth: MaintenanceAuth,
) -> Result<Json<CleanupResponse>, ApiError> {
    let report = state.sweeper.sweep().await.or_fail("Failed to run cleanup")?;

    Ok(Json(CleanupResponse {
        success: true,
        message: format!(
            "Cleanup completed. Deleted {} of {} files.",
            report.deleted, report.total
        ),
        deleted_files: report.deleted,
        total_files: report.total,
        failed_files: report.failed,
        timestamp: iso_timestamp(state.clock.now()),
    }))
}
