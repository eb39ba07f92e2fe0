//! Share store components.

pub mod code;
pub mod expiry;
pub mod resolver;
pub mod service;
pub mod store;
pub mod sweeper;

pub use code::{CodeGenerator, CodeSource};
pub use expiry::ExpiryPolicy;
pub use resolver::{ResolvedFile, ResolvedText, RetrievalResolver};
pub use service::ShareService;
pub use store::EntryStore;
pub use sweeper::{ReclamationSweeper, SweepReport};
