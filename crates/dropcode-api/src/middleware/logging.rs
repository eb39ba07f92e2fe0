//! Per-request access log.

use std::time::Instant;

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;

/// Logs method, path, status, and duration of every request.
///
/// Server errors log at `warn` so they stand out from routine traffic.
/// Share codes appear in paths, so the path is logged but never the body.
pub async fn request_logging(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_owned();
    let start = Instant::now();

    let response = next.run(request).await;

    let status = response.status().as_u16();
    let duration_ms = start.elapsed().as_millis() as u64;

    if response.status().is_server_error() {
        tracing::warn!(%method, %path, status, duration_ms, "Request failed");
    } else {
        tracing::info!(%method, %path, status, duration_ms, "Request served");
    }

    response
}
