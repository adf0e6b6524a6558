//! # Item Store Errors

use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Failures reading or persisting the collection file
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    #[error("Failed to read data file: {0}")]
    ReadFailed(String),

    #[error("Data file is not a valid item collection: {0}")]
    Corrupt(String),

    #[error("Failed to write data file: {0}")]
    WriteFailed(String),

    #[error("Store writer lock poisoned")]
    LockPoisoned,
}
