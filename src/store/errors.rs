//! Record store error types
//!
//! Error codes:
//! - SHELF_STORE_READ_FAILED (ERROR severity)
//! - SHELF_STORE_WRITE_FAILED (ERROR severity)
//! - SHELF_DATA_CORRUPTION (ERROR severity)
//!
//! All three are persistence failures. A missing products file is not an
//! error and never produces one of these. Nothing here is fatal: a failed
//! operation affects only the caller that triggered it.

use std::error::Error as StdError;
use std::fmt;
use std::io;
use std::path::Path;

/// Store-specific error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreErrorCode {
    /// Products file exists but could not be read
    ShelfStoreReadFailed,
    /// Products file could not be encoded or written
    ShelfStoreWriteFailed,
    /// Products file contents are not a JSON array of records
    ShelfDataCorruption,
}

impl StoreErrorCode {
    /// Returns the string code
    pub fn code(&self) -> &'static str {
        match self {
            StoreErrorCode::ShelfStoreReadFailed => "SHELF_STORE_READ_FAILED",
            StoreErrorCode::ShelfStoreWriteFailed => "SHELF_STORE_WRITE_FAILED",
            StoreErrorCode::ShelfDataCorruption => "SHELF_DATA_CORRUPTION",
        }
    }
}

impl fmt::Display for StoreErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Underlying cause of a store error
#[derive(Debug)]
enum Cause {
    Io(io::Error),
    Json(serde_json::Error),
}

/// Persistence error raised by every store operation
#[derive(Debug)]
pub struct StoreError {
    /// Error code
    code: StoreErrorCode,
    /// Human-readable message
    message: String,
    /// Optional context (usually the products file path)
    details: Option<String>,
    /// Underlying error if applicable
    source: Option<Cause>,
}

impl StoreError {
    /// Products file exists but reading it failed
    pub fn read_failed(path: &Path, source: io::Error) -> Self {
        Self {
            code: StoreErrorCode::ShelfStoreReadFailed,
            message: "Failed to read products file".to_string(),
            details: Some(format!("path: {}", path.display())),
            source: Some(Cause::Io(source)),
        }
    }

    /// Writing the products file failed
    pub fn write_failed(path: &Path, source: io::Error) -> Self {
        Self {
            code: StoreErrorCode::ShelfStoreWriteFailed,
            message: "Failed to write products file".to_string(),
            details: Some(format!("path: {}", path.display())),
            source: Some(Cause::Io(source)),
        }
    }

    /// Encoding the collection failed
    pub fn encode_failed(path: &Path, source: serde_json::Error) -> Self {
        Self {
            code: StoreErrorCode::ShelfStoreWriteFailed,
            message: "Failed to encode products".to_string(),
            details: Some(format!("path: {}", path.display())),
            source: Some(Cause::Json(source)),
        }
    }

    /// Products file could not be decoded
    pub fn decode_failed(path: &Path, source: serde_json::Error) -> Self {
        Self {
            code: StoreErrorCode::ShelfDataCorruption,
            message: "Products file is not a JSON array of objects".to_string(),
            details: Some(format!("path: {}", path.display())),
            source: Some(Cause::Json(source)),
        }
    }

    /// Decoded collection violates a record invariant
    pub fn data_corruption(path: &Path, reason: impl Into<String>) -> Self {
        Self {
            code: StoreErrorCode::ShelfDataCorruption,
            message: reason.into(),
            details: Some(format!("path: {}", path.display())),
            source: None,
        }
    }

    /// Returns the error code
    pub fn code(&self) -> StoreErrorCode {
        self.code
    }

    /// Returns the error message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns additional error details
    pub fn details(&self) -> Option<&str> {
        self.details.as_deref()
    }

    /// Whether the stored data itself is malformed
    pub fn is_corruption(&self) -> bool {
        self.code == StoreErrorCode::ShelfDataCorruption
    }
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.code(), self.message)?;
        if let Some(ref details) = self.details {
            write!(f, " ({})", details)?;
        }
        match self.source {
            Some(Cause::Io(ref e)) => write!(f, ": {}", e),
            Some(Cause::Json(ref e)) => write!(f, ": {}", e),
            None => Ok(()),
        }
    }
}

impl StdError for StoreError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self.source {
            Some(Cause::Io(ref e)) => Some(e),
            Some(Cause::Json(ref e)) => Some(e),
            None => None,
        }
    }
}

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;
