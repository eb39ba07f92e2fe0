//! # dropcode-storage
//!
//! Storage provider implementations for Dropcode. The only backend is a
//! single local directory whose listing doubles as the entry index.

pub mod providers;

pub use providers::local::LocalStorageProvider;
