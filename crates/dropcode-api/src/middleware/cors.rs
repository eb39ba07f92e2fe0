//! CORS layer for browser clients of the share API.

use std::time::Duration;

use axum::http::{HeaderName, HeaderValue, Method, header};
use tower_http::cors::{AllowHeaders, AllowOrigin, CorsLayer};

use dropcode_core::config::CorsConfig;

/// Builds the CORS layer from configuration.
///
/// `Content-Disposition` and `Content-Length` are exposed so a browser can
/// name and size a download without a second request.
pub fn build_cors_layer(config: &CorsConfig) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(origins(&config.allowed_origins))
        .allow_methods(parse_all::<Method>(&config.allowed_methods))
        .allow_headers(headers(&config.allowed_headers))
        .expose_headers([header::CONTENT_DISPOSITION, header::CONTENT_LENGTH])
        .max_age(Duration::from_secs(config.max_age_seconds))
}

fn origins(configured: &[String]) -> AllowOrigin {
    if is_wildcard(configured) {
        AllowOrigin::any()
    } else {
        AllowOrigin::list(parse_all::<HeaderValue>(configured))
    }
}

fn headers(configured: &[String]) -> AllowHeaders {
    if is_wildcard(configured) {
        AllowHeaders::any()
    } else {
        AllowHeaders::list(parse_all::<HeaderName>(configured))
    }
}

fn is_wildcard(values: &[String]) -> bool {
    values.iter().any(|v| v == "*")
}

/// Parse every entry, dropping (and logging) the ones that are not valid.
fn parse_all<T: std::str::FromStr>(values: &[String]) -> Vec<T> {
    values
        .iter()
        .filter_map(|v| match v.parse() {
            Ok(parsed) => Some(parsed),
            Err(_) => {
                tracing::warn!(value = %v, "Ignoring invalid CORS setting");
                None
            }
        })
        .collect()
}
