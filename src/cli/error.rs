//! CLI-level errors (wraps domain and configuration errors)

use thiserror::Error;

use crate::config::SettingsError;
use crate::domain::TreeError;

/// CLI errors are the top-level error type.
/// These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Tree(#[from] TreeError),

    #[error("{0}")]
    Settings(#[from] SettingsError),

    #[error("invalid arguments: {0}")]
    InvalidArgs(String),

    #[error("element not found in tree: {0}")]
    NotFound(String),
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::InvalidArgs(_) => crate::exitcode::USAGE,
            CliError::NotFound(_) => crate::exitcode::DATAERR,
            CliError::Settings(_) => crate::exitcode::CONFIG,
            CliError::Tree(TreeError::InvalidArgument(_)) => crate::exitcode::USAGE,
            CliError::Tree(_) => crate::exitcode::SOFTWARE,
        }
    }
}
