//! Share domain entities.

pub mod kind;
pub mod mime;
pub mod model;
pub mod record;

pub use kind::EntryKind;
pub use model::{FileShareReceipt, StoredEntry, TextShareReceipt};
pub use record::TextRecord;
