//! CLI-level errors (wraps core and ambient errors)

use thiserror::Error;

use crate::errors::TreeError;
use crate::exitcode;

/// Top-level error type: what gets displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Tree(#[from] TreeError),

    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid arguments: {0}")]
    InvalidArgs(String),
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::InvalidArgs(_) => exitcode::USAGE,
            CliError::Tree(_) => exitcode::DATAERR,
            CliError::Config(_) => exitcode::CONFIG,
            CliError::Io(_) => exitcode::IOERR,
            CliError::Serialize(_) => exitcode::SOFTWARE,
        }
    }
}
