//! CLI-specific error types and mappings.
//!
//! This module provides the error type for the CLI adapter and the
//! mapping from `ModelError` to exit codes and user-facing messages.

use modelcard_core::ModelError;
use thiserror::Error;

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Core domain error.
    #[error(transparent)]
    Model(#[from] ModelError),

    /// Argument error.
    #[error("Invalid arguments: {0}")]
    Arguments(String),

    /// IO error (stdin unreadable, stdout closed, etc.).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// No record matched the requested model name.
    #[error("No model named '{0}'")]
    NotFound(String),

    /// One or more records failed validation.
    #[error("{0} of {1} record(s) are invalid")]
    Invalid(usize, usize),
}

impl CliError {
    /// Map error to appropriate exit code.
    ///
    /// Exit codes follow Unix conventions:
    /// - 0: Success
    /// - 1: General error
    /// - 2: Misuse of shell command (invalid arguments)
    /// - 64-78: Reserved for specific error categories (see sysexits.h)
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Model(ModelError::MissingField { .. } | ModelError::Parse(_))
            | Self::Invalid(..) => 65, // EX_DATAERR
            Self::Model(ModelError::Read { .. }) | Self::Io(_) => 74, // EX_IOERR
            Self::Model(ModelError::Config(_)) => 78,                 // EX_CONFIG
            Self::Arguments(_) => 2,                                  // EX_USAGE
            Self::NotFound(_) => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        let missing = CliError::from(ModelError::MissingField {
            field: "description",
        });
        assert_eq!(missing.exit_code(), 65);
        assert_eq!(CliError::from(ModelError::Parse("x".into())).exit_code(), 65);
        assert_eq!(CliError::Invalid(1, 2).exit_code(), 65);
        assert_eq!(CliError::from(ModelError::Config("x".into())).exit_code(), 78);
        assert_eq!(
            CliError::from(std::io::Error::other("closed")).exit_code(),
            74
        );
        assert_eq!(CliError::Arguments("x".into()).exit_code(), 2);
        assert_eq!(CliError::NotFound("x".into()).exit_code(), 1);
    }

    #[test]
    fn test_model_error_message_is_transparent() {
        let err = CliError::from(ModelError::MissingField { field: "name" });
        assert_eq!(err.to_string(), "Missing required field `name`");
    }
}
