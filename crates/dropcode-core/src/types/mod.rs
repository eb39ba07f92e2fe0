//! Core type definitions used across the Dropcode workspace.

pub mod code;

pub use code::{CODE_LENGTH, ShareCode};
