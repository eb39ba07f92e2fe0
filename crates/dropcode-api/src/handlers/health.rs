//! Health check handler.

use axum::Json;
use axum::extract::State;

use crate::dto::response::{ApiResponse, HealthResponse};
use crate::state::AppState;

/// GET /api/health
pub async fn health(State(state): State<AppState>) -> Json<ApiResponse<HealthResponse>> {
    let status = match state.storage.health_check().await {
        Ok(true) => "ok",
        Ok(false) => "degraded",
        Err(e) => {
            tracing::warn!(error = %e, "Storage health check failed");
            "degraded"
        }
    };

    Json(ApiResponse::ok(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    }))
}
