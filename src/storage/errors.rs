//! Storage-specific error types.
//!
//! These errors cover data persistence and retrieval failures only; they
//! know nothing about commands or the model's business rules. The façade
//! uses [`StorageError::is_permission_denied`] to pick between its two
//! user-facing save-failure messages.

use std::io;
use std::path::{Path, PathBuf};

/// Errors that can occur during storage operations.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// The underlying file could not be read or written.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The file exists but does not hold valid directory JSON.
    #[error("Malformed restaurant data at {path}: {source}")]
    Serialization {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The JSON decoded, but a record violates the domain constraints
    /// (a bad phone, a duplicate identity, ...).
    #[error("Invalid restaurant record: {detail}")]
    InvalidRecord { detail: String },
}

impl StorageError {
    /// Create an I/O error carrying the file path.
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create a serialization error carrying the file path.
    pub fn serialization(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::Serialization {
            path: path.into(),
            source,
        }
    }

    /// Create an invalid-record error.
    pub fn invalid_record(detail: impl Into<String>) -> Self {
        Self::InvalidRecord {
            detail: detail.into(),
        }
    }

    /// Whether this failure is a permission problem rather than a generic
    /// I/O fault.
    pub fn is_permission_denied(&self) -> bool {
        matches!(
            self,
            StorageError::Io { source, .. } if source.kind() == io::ErrorKind::PermissionDenied
        )
    }

    /// The file path involved, if the failure came from a file.
    pub fn path(&self) -> Option<&Path> {
        match self {
            StorageError::Io { path, .. } | StorageError::Serialization { path, .. } => {
                Some(path)
            }
            StorageError::InvalidRecord { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_permission_denied_classification() {
        let denied = StorageError::io(
            "/data/makanlist.json",
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        );
        assert!(denied.is_permission_denied());

        let other = StorageError::io(
            "/data/makanlist.json",
            io::Error::new(io::ErrorKind::UnexpectedEof, "eof"),
        );
        assert!(!other.is_permission_denied());

        let record = StorageError::invalid_record("bad phone");
        assert!(!record.is_permission_denied());
    }

    #[test]
    fn test_display_carries_path() {
        let error = StorageError::io(
            "/data/makanlist.json",
            io::Error::new(io::ErrorKind::Other, "disk on fire"),
        );
        let text = error.to_string();
        assert!(text.contains("/data/makanlist.json"));
        assert!(error.path().is_some());
    }
}
