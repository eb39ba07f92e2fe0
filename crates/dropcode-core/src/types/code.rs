//! The six-character share code that names every stored entry.
//!
//! A [`ShareCode`] can only be built through [`ShareCode::parse`] or
//! [`ShareCode::from_bytes`], so holding one proves the value is exactly
//! six uppercase ASCII alphanumerics and is safe to splice into a file name.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::AppError;

/// Number of characters in a share code.
pub const CODE_LENGTH: usize = 6;

/// A validated share code.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ShareCode(String);

impl ShareCode {
    /// Validate user input and normalize it to uppercase.
    ///
    /// Any input that is not exactly six ASCII letters or digits is rejected
    /// with a validation error before it can reach storage.
    pub fn parse(input: &str) -> Result<Self, AppError> {
        if input.len() != CODE_LENGTH || !input.bytes().all(|b| b.is_ascii_alphanumeric()) {
            return Err(AppError::validation("Invalid share code"));
        }
        Ok(Self(input.to_ascii_uppercase()))
    }

    /// Hex-encode three raw bytes into a code (uppercase).
    pub fn from_bytes(bytes: [u8; 3]) -> Self {
        Self(bytes.iter().map(|b| format!("{b:02X}")).collect())
    }

    /// Borrow the code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Storage file name for this code with the given extension (including the dot).
    pub fn file_name(&self, extension: &str) -> String {
        format!("{}{}", self.0, extension)
    }
}

impl fmt::Display for ShareCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for ShareCode {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for ShareCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl<'de> Deserialize<'de> for ShareCode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(|e| serde::de::Error::custom(e.message))
    }
}
