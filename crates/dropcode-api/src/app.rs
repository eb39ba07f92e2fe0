//! Application builder: wires router, middleware, and state into an Axum app.

use std::future::IntoFuture;
use std::sync::Arc;
use std::time::Duration;

use axum::Router;

use dropcode_core::config::AppConfig;
use dropcode_core::error::AppError;
use dropcode_worker::{CronScheduler, SweepJob};

use crate::router::build_router;
use crate::state::AppState;

/// Builds the complete Axum application with all routes and middleware.
pub fn build_app(state: AppState) -> Router {
    build_router(state)
}

/// Runs the Dropcode server until Ctrl+C or SIGTERM.
pub async fn run_server(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting Dropcode server...");

    if config.cleanup.uses_default_secret() {
        tracing::warn!(
            "cleanup.secret is the shipped default; anyone can trigger a sweep. \
             Set DROPCODE__CLEANUP__SECRET in production."
        );
    }

    let state = AppState::from_config(config.clone());
    tracing::info!(
        uploads_dir = %config.storage.uploads_dir,
        provider = state.storage.provider_type(),
        "Share store ready"
    );

    // ── Optional in-process sweep ────────────────────────────────
    let mut scheduler = if config.cleanup.schedule_enabled {
        let job = Arc::new(SweepJob::new(Arc::clone(&state.sweeper)));
        let scheduler = CronScheduler::new(job).await?;
        scheduler.register_sweep(&config.cleanup.schedule).await?;
        scheduler.start().await?;
        Some(scheduler)
    } else {
        tracing::info!("Internal sweep schedule disabled; use POST /api/cleanup");
        None
    };

    // ── HTTP server ──────────────────────────────────────────────
    let app = build_app(state);
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    tracing::info!("Dropcode server listening on {}", addr);

    let grace = Duration::from_secs(config.server.shutdown_grace_seconds);
    let (drained_tx, drained_rx) = tokio::sync::oneshot::channel::<()>();
    let server = axum::serve(listener, app).with_graceful_shutdown(async move {
        shutdown_signal().await;
        let _ = drained_tx.send(());
    })
    .into_future();

    tokio::select! {
        result = server => {
            result.map_err(|e| AppError::internal(format!("Server error: {e}")))?;
        }
        _ = async {
            let _ = drained_rx.await;
            tokio::time::sleep(grace).await;
        } => {
            tracing::warn!(grace_seconds = grace.as_secs(), "Graceful shutdown timed out");
        }
    }

    if let Some(scheduler) = scheduler.as_mut() {
        scheduler.shutdown().await?;
    }

    tracing::info!("Dropcode server stopped");
    Ok(())
}

/// Resolves on Ctrl+C, or on SIGTERM where available.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("Received Ctrl+C, shutting down"),
        _ = terminate => tracing::info!("Received SIGTERM, shutting down"),
    }
}
