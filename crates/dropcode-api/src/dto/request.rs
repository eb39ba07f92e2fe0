//! Request DTOs with validation.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Text share request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct TextShareRequest {
    /// The text to share.
    #[validate(length(min = 1, message = "No text content received"))]
    pub text: String,
    /// Optional language label; `"text"` when absent or empty.
    #[serde(default)]
    pub language: Option<String>,
}
