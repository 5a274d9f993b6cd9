//! Domain error types.
//!
//! Adapters map `ModelError` to their own error types (CLI exit codes,
//! serialized errors) rather than matching on message text.

use std::path::PathBuf;
use thiserror::Error;

/// Errors produced while turning catalog input into model descriptions.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    /// A required field is absent (or `null`) in the input record.
    #[error("Missing required field `{field}`")]
    MissingField { field: &'static str },

    /// The input document is not valid record JSON.
    #[error("Invalid model record: {0}")]
    Parse(String),

    /// An input file could not be read.
    #[error("Failed to read {path}: {reason}")]
    Read { path: PathBuf, reason: String },

    /// A configuration value could not be interpreted.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl ModelError {
    /// Name of the missing field, if this is a `MissingField` error.
    pub const fn missing_field(&self) -> Option<&'static str> {
        match self {
            Self::MissingField { field } => Some(*field),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for ModelError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}
