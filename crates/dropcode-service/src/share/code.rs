//! Share code generation.

use dropcode_core::types::ShareCode;

/// Anything that can hand out candidate share codes.
pub trait CodeSource: Send + Sync + std::fmt::Debug + 'static {
    /// Produce the next candidate code.
    fn next_code(&self) -> ShareCode;
}

/// Draws random share codes.
///
/// Each code is three bytes from the thread-local CSPRNG, hex-encoded and
/// upper-cased: 16^6 (about 16.7 million) possible values. The generator does
/// not know what is stored; collision checks belong to
/// [`ShareService`](super::service::ShareService).
#[derive(Debug, Clone, Copy, Default)]
pub struct CodeGenerator;

impl CodeGenerator {
    /// Creates a new code generator.
    pub fn new() -> Self {
        Self
    }

    /// Draws a fresh code.
    pub fn generate(&self) -> ShareCode {
        ShareCode::from_bytes(rand::random::<[u8; 3]>())
    }
}

impl CodeSource for CodeGenerator {
    fn next_code(&self) -> ShareCode {
        self.generate()
    }
}
