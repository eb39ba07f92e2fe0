//! Entry kind discriminator.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// What a share entry holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    /// An opaque uploaded file.
    File,
    /// A text snippet with a language label.
    Text,
}

impl EntryKind {
    /// Return the kind as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::File => "file",
            Self::Text => "text",
        }
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for EntryKind {
    type Err = dropcode_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "file" => Ok(Self::File),
            "text" => Ok(Self::Text),
            _ => Err(dropcode_core::AppError::validation(format!(
                "Invalid entry kind: '{s}'. Expected one of: file, text"
            ))),
        }
    }
}
