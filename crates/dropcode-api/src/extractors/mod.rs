//! Custom Axum extractors.

pub mod maintenance;

pub use maintenance::MaintenanceAuth;
