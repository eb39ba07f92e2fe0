//! # dropcode-service
//!
//! The share-store subsystem. Requests flow through these pieces:
//!
//! - [`share::code::CodeGenerator`] draws a fresh six-character code,
//! - [`share::store::EntryStore`] persists artifacts named `<CODE><.ext>`,
//! - [`share::expiry::ExpiryPolicy`] decides liveness from the creation time,
//! - [`share::resolver::RetrievalResolver`] maps a code to a live entry,
//! - [`share::sweeper::ReclamationSweeper`] deletes expired artifacts.
//!
//! [`share::service::ShareService`] is the write-side façade used by the API.

pub mod share;

pub use share::resolver::RetrievalResolver;
pub use share::service::ShareService;
pub use share::sweeper::{ReclamationSweeper, SweepReport};
