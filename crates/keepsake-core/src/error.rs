//! Error types for Keepsake

use thiserror::Error;

/// Main error type for Keepsake operations
#[derive(Error, Debug)]
pub enum KeepsakeError {
    /// Error during storage operations (redb)
    #[error("Storage error: {0}")]
    Storage(String),

    /// Database creation/opening error
    #[error("Database error: {0}")]
    Database(#[from] redb::DatabaseError),

    /// Transaction error
    #[error("Transaction error: {0}")]
    Transaction(#[from] redb::TransactionError),

    /// Table error
    #[error("Table error: {0}")]
    Table(#[from] redb::TableError),

    /// Storage operation error
    #[error("Storage operation error: {0}")]
    StorageOp(#[from] redb::StorageError),

    /// Commit error
    #[error("Commit error: {0}")]
    Commit(#[from] redb::CommitError),

    /// Error during serialization/deserialization
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid operation for current state
    #[error("Invalid operation: {0}")]
    InvalidOperation(String),
}

impl From<serde_json::Error> for KeepsakeError {
    fn from(err: serde_json::Error) -> Self {
        KeepsakeError::Serialization(err.to_string())
    }
}

/// Result type alias using KeepsakeError
pub type KeepsakeResult<T> = Result<T, KeepsakeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = KeepsakeError::InvalidOperation("letter index 9".to_string());
        assert_eq!(format!("{}", err), "Invalid operation: letter index 9");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: KeepsakeError = io_err.into();
        assert!(matches!(err, KeepsakeError::Io(_)));
    }
}
