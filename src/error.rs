//! Error types for scanopt.
//!
//! Uses `thiserror` for ergonomic error definitions. Parsing errors for the
//! individual value types live next to those types.

use crate::types::NumericValue;
use std::path::PathBuf;
use thiserror::Error;

/// Errors from building and querying option sets.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum OptionError {
    #[error("duplicate option name: {0}")]
    DuplicateName(String),

    #[error("option not found: {0}")]
    NotFound(String),

    #[error("option name cannot be empty")]
    EmptyName,
}

/// Result type alias for option set operations.
pub type OptionResult<T> = Result<T, OptionError>;

/// A value rejected by an option's constraints.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConstraintError {
    #[error("{option}: {value} is not one of {allowed}")]
    NotAllowed {
        option: String,
        value: NumericValue,
        allowed: String,
    },

    #[error("{option}: {value} is outside {range}")]
    OutOfRange {
        option: String,
        value: NumericValue,
        range: String,
    },

    #[error("{option}: {value} is not a multiple of {quant} from {min}")]
    NotQuantized {
        option: String,
        value: NumericValue,
        min: NumericValue,
        quant: NumericValue,
    },
}

/// Result type alias for constraint checks.
pub type ConstraintResult<T> = Result<T, ConstraintError>;

/// Configuration errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("could not determine configuration directory")]
    DirectoryNotFound,

    #[error("failed to read {}: {reason}", path.display())]
    ReadFailed { path: PathBuf, reason: String },

    #[error("failed to write {}: {reason}", path.display())]
    WriteFailed { path: PathBuf, reason: String },

    #[error("invalid settings format: {0}")]
    InvalidFormat(String),

    #[error("invalid setting: {0}")]
    InvalidValue(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Result type alias for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Top-level error for CLI commands.
#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Option(#[from] OptionError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("{0} value(s) rejected")]
    Rejected(usize),

    #[error("output error: {0}")]
    Output(#[from] std::io::Error),
}

impl CliError {
    /// Process exit status for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Rejected(_) => 2,
            _ => 1,
        }
    }
}

/// Result type alias for CLI commands.
pub type CliResult<T> = Result<T, CliError>;
