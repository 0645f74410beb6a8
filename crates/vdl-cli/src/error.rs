//! CLI-specific error types and exit code mapping.

use thiserror::Error;
use vdl_api::ApiError;

/// Result alias for command handlers.
pub type CliResult<T> = Result<T, CliError>;

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// The backend call failed.
    #[error("{0}")]
    Api(#[from] ApiError),

    /// Argument validation error.
    #[error("Invalid arguments: {0}")]
    Arguments(String),

    /// IO error (writing output, saving a file).
    #[error("IO error: {0}")]
    Io(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl CliError {
    /// Map error to appropriate exit code.
    ///
    /// Exit codes follow sysexits.h where one fits:
    /// - 1: Backend rejected the request
    /// - 2: Invalid arguments
    /// - 69: Backend unreachable or timed out (`EX_UNAVAILABLE`)
    /// - 74: IO error (`EX_IOERR`)
    /// - 78: Configuration error (`EX_CONFIG`)
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Api(ApiError::Network(_)) => 69,
            Self::Api(_) => 1,
            Self::Arguments(_) => 2,
            Self::Io(_) => 74,
            Self::Config(_) => 78,
        }
    }

    /// Backend response body to show under the error line, if any.
    pub fn detail(&self) -> Option<&str> {
        match self {
            Self::Api(err) => err.body().filter(|body| !body.trim().is_empty()),
            _ => None,
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}
