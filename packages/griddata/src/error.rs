//! Error types for grid parsing.
//!
//! Only structural problems surface as errors. Unknown editors, missing
//! optional arrays and malformed optional fields degrade to fallbacks instead.

use thiserror::Error;

/// Main error type for the griddata library.
#[derive(Debug, Error)]
pub enum GridError {
    /// The input is not valid JSON.
    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    /// A node has the wrong JSON shape.
    #[error("Invalid grid node at {path}: expected {expected}")]
    InvalidNode { path: String, expected: &'static str },

    /// A required field is absent or not a string.
    #[error("Missing required field '{field}' at {path}")]
    MissingField { field: &'static str, path: String },

    /// Culture name does not look like a language tag.
    #[error("Invalid culture: '{0}'. Expected a language tag (e.g., en-US)")]
    InvalidCulture(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML serialization error.
    #[error("YAML serialization failed: {0}")]
    YamlSerialization(#[from] serde_yaml_ng::Error),
}

/// Result type alias for grid operations.
pub type Result<T> = std::result::Result<T, GridError>;
