//! Custom error types for the budget tracker
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for ledger operations
#[derive(Error, Debug)]
pub enum LedgerError {
    /// Entry amount is non-positive or not a valid number
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    /// Delete referenced an index outside the ledger
    #[error("Transaction index {index} is out of range (ledger has {len} entries)")]
    IndexOutOfRange { index: usize, len: usize },

    /// Import payload is not a well-formed array of transaction records
    #[error("Invalid import format: {0}")]
    InvalidImportFormat(String),

    /// Conversion referenced a code absent from the rate table
    #[error("Unknown currency: {0}")]
    UnknownCurrency(String),

    /// The underlying storage read/write failed
    #[error("Storage error: {0}")]
    Storage(String),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),
}

impl LedgerError {
    /// Create an `InvalidAmount` error from the rejected input
    pub fn invalid_amount(input: impl Into<String>) -> Self {
        Self::InvalidAmount(input.into())
    }

    /// Check if this is a stale-index error (treated as a no-op by callers)
    pub fn is_out_of_range(&self) -> bool {
        matches!(self, Self::IndexOutOfRange { .. })
    }

    /// Check if this is a validation-class error (rejected input, no state change)
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::InvalidAmount(_) | Self::InvalidImportFormat(_) | Self::UnknownCurrency(_)
        )
    }
}

impl From<std::io::Error> for LedgerError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for LedgerError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for ledger operations
pub type LedgerResult<T> = Result<T, LedgerError>;
