//! Route definitions for the Dropcode HTTP API.
//!
//! All routes are mounted under `/api`. The router receives `AppState` and
//! passes it to every handler via Axum's `State` extractor.

use axum::{
    Router,
    extract::DefaultBodyLimit,
    middleware as axum_middleware,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Room for multipart boundaries and part headers on top of the payload limit.
pub const MULTIPART_OVERHEAD_BYTES: usize = 64 * 1024;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let body_limit = usize::try_from(state.config.share.max_file_size_bytes)
        .unwrap_or(usize::MAX)
        .saturating_add(MULTIPART_OVERHEAD_BYTES);

    let json_routes = Router::new()
        .merge(share_routes())
        .merge(text_routes())
        .merge(maintenance_routes())
        .merge(health_routes())
        .layer(middleware::compression::build_compression_layer());

    let api_routes = json_routes.merge(download_routes());

    Router::new()
        .nest("/api", api_routes)
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(TraceLayer::new_for_http())
        .layer(middleware::cors::build_cors_layer(&state.config.server.cors))
        .layer(axum_middleware::from_fn(middleware::logging::request_logging))
        .with_state(state)
}

/// Creating shares
fn share_routes() -> Router<AppState> {
    Router::new()
        .route("/upload", post(handlers::upload::upload_file))
        .route("/text", post(handlers::text::share_text))
}

/// Fetching text shares by code
fn text_routes() -> Router<AppState> {
    Router::new().route("/text/{code}", get(handlers::text::get_text))
}

/// Raw file downloads, never compressed
fn download_routes() -> Router<AppState> {
    Router::new().route("/download/{code}", get(handlers::download::download_file))
}

/// Reclamation trigger
fn maintenance_routes() -> Router<AppState> {
    Router::new().route("/cleanup", post(handlers::cleanup::run_cleanup))
}

/// Health check
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}
