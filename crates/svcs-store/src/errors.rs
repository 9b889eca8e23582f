//! Error handling for svcs-store
//!
//! Wraps svcs-core ExError with store-specific helpers

use std::path::Path;
use svcs_core::errors::{ExError, ExErrorKind};

/// Result type alias using ExError
pub type Result<T> = std::result::Result<T, ExError>;

/// Create an IO error for a durable or working-tree path
pub fn io_error(operation: &str, path: &Path, err: std::io::Error) -> ExError {
    ExError::new(ExErrorKind::Io)
        .with_op(operation)
        .with_path(path.display().to_string())
        .with_message(err.to_string())
}

/// Create a missing snapshot error
pub fn snapshot_missing(fingerprint: &str) -> ExError {
    ExError::new(ExErrorKind::CommitNotFound)
        .with_op("snapshot_resolve")
        .with_fingerprint(fingerprint)
        .with_message("Commit does not exist")
}

/// Create an error for a durable file whose content cannot be understood
pub fn corrupted(operation: &str, path: &Path, reason: impl Into<String>) -> ExError {
    ExError::new(ExErrorKind::Corrupted)
        .with_op(operation)
        .with_path(path.display().to_string())
        .with_message(reason)
}

/// Create a serialization error
pub fn serialization(operation: &str, reason: impl Into<String>) -> ExError {
    ExError::new(ExErrorKind::Serialization)
        .with_op(operation)
        .with_message(reason)
}
