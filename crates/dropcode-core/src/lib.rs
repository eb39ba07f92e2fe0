//! # dropcode-core
//!
//! Core crate for Dropcode. Contains configuration schemas, the storage and
//! clock traits, the typed share code, and the unified error system.
//!
//! This crate has **no** internal dependencies on other Dropcode crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
