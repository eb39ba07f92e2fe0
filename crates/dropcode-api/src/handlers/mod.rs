//! HTTP request handlers.

pub mod cleanup;
pub mod download;
pub mod health;
pub mod text;
pub mod upload;
