//! # dropcode-entity
//!
//! Domain models for Dropcode share entries. Every struct in this crate is a
//! value object: the persisted artifact itself is the source of truth, there
//! is no database row behind any of them.

pub mod share;
