//! CLI error types
//!
//! Every variant maps to a stable `SHELF_CLI_*` code, printed alongside the
//! message in error responses and on stderr.

use thiserror::Error;

use crate::store::{RecordId, StoreError};

/// CLI result type
pub type CliResult<T> = Result<T, CliError>;

/// Failures surfaced by CLI commands
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration file missing, unreadable or invalid
    #[error("{0}")]
    Config(String),

    /// Runtime or stdout failure
    #[error("{0}")]
    Io(String),

    /// Payload argument is not a JSON object
    #[error("{0}")]
    InvalidInput(String),

    /// Store operation failed
    #[error(transparent)]
    Store(#[from] StoreError),

    /// No product with the given id
    #[error("Product {0} not found")]
    NotFound(RecordId),

    /// HTTP server could not start or stopped with an error
    #[error("HTTP server failed: {0}")]
    ServeFailed(String),
}

impl CliError {
    /// Stable error code for machine-readable output
    pub fn code(&self) -> &'static str {
        match self {
            CliError::Config(_) => "SHELF_CLI_CONFIG_ERROR",
            CliError::Io(_) => "SHELF_CLI_IO_ERROR",
            CliError::InvalidInput(_) => "SHELF_CLI_INVALID_INPUT",
            CliError::Store(_) => "SHELF_CLI_STORE_ERROR",
            CliError::NotFound(_) => "SHELF_CLI_NOT_FOUND",
            CliError::ServeFailed(_) => "SHELF_CLI_SERVE_FAILED",
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        CliError::Io(e.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Io(format!("JSON error: {}", e))
    }
}
