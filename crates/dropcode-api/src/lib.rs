//! # dropcode-api
//!
//! HTTP API layer for Dropcode built on Axum.
//!
//! Provides the share, retrieval, cleanup and health endpoints, the
//! middleware stack (CORS, compression, logging), the maintenance-secret
//! extractor, DTOs, and error mapping.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::{build_app, run_server};
pub use error::ApiError;
pub use state::AppState;
