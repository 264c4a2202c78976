//! Error types for Cosmic Bio

use thiserror::Error;

/// Main error type for Cosmic Bio operations
#[derive(Error, Debug)]
pub enum BioError {
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

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The platform clipboard refused the write
    #[error("Clipboard error: {0}")]
    Clipboard(String),

    /// Badge index outside the fixed badge list
    #[error("Badge index {index} out of range (have {len})")]
    BadgeOutOfRange { index: usize, len: usize },
}

/// Result type alias using BioError
pub type BioResult<T> = Result<T, BioError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = BioError::BadgeOutOfRange { index: 7, len: 5 };
        assert_eq!(format!("{}", err), "Badge index 7 out of range (have 5)");

        let err = BioError::Clipboard("no display".to_string());
        assert_eq!(format!("{}", err), "Clipboard error: no display");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only");
        let bio_err: BioError = io_err.into();
        assert!(matches!(bio_err, BioError::Io(_)));
    }
}
