use std::fmt::{Display, Formatter};
use std::sync::Arc;
use thiserror::Error;

/// Result type for repository operations.
pub type Result<T> = std::result::Result<T, StorageError>;

/// The backend error behind an infrastructure failure.
pub type Cause = Arc<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("invalid alias: {0}")]
    InvalidAlias(String),
}

/// The storage operation an error originated from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Open,
    Insert,
    GetByAlias,
    DeleteByAlias,
}

impl Operation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::Open => "storage.open",
            Operation::Insert => "storage.insert",
            Operation::GetByAlias => "storage.get_by_alias",
            Operation::DeleteByAlias => "storage.delete_by_alias",
        }
    }
}

impl Display for Operation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors returned by a [`Repository`](crate::Repository).
///
/// `AliasExists` and `NotFound` are expected outcomes callers branch on.
/// Every other variant is an infrastructure failure and carries the backend
/// error as its `source()`.
#[derive(Debug, Clone, Error)]
pub enum StorageError {
    #[error("{op}: failed to open store")]
    Open { op: Operation, source: Cause },
    #[error("{op}: failed to initialize schema")]
    Schema { op: Operation, source: Cause },
    #[error("{op}: alias already exists: {alias}")]
    AliasExists { op: Operation, alias: String },
    #[error("{op}: url not found for alias: {alias}")]
    NotFound { op: Operation, alias: String },
    #[error("{op}: write failed")]
    Write { op: Operation, source: Cause },
    #[error("{op}: read failed")]
    Read { op: Operation, source: Cause },
}

impl StorageError {
    /// Returns the operation that failed.
    pub fn op(&self) -> Operation {
        match self {
            StorageError::Open { op, .. }
            | StorageError::Schema { op, .. }
            | StorageError::AliasExists { op, .. }
            | StorageError::NotFound { op, .. }
            | StorageError::Write { op, .. }
            | StorageError::Read { op, .. } => *op,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, StorageError::NotFound { .. })
    }

    pub fn is_alias_exists(&self) -> bool {
        matches!(self, StorageError::AliasExists { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::error::Error as _;

    #[test]
    fn message_is_prefixed_with_operation() {
        let err = StorageError::Write {
            op: Operation::Insert,
            source: Arc::new(std::io::Error::other("disk I/O error")),
        };
        assert_eq!(err.to_string(), "storage.insert: write failed");
        assert_eq!(err.op(), Operation::Insert);
    }

    #[test]
    fn backend_error_is_kept_as_source() {
        let err = StorageError::Open {
            op: Operation::Open,
            source: Arc::new(std::io::Error::other("unable to open database file")),
        };

        let source = err.source().unwrap();
        assert_eq!(source.to_string(), "unable to open database file");
    }

    #[test]
    fn semantic_variants_are_distinguishable() {
        let exists = StorageError::AliasExists {
            op: Operation::Insert,
            alias: "abc123".to_string(),
        };
        let missing = StorageError::NotFound {
            op: Operation::GetByAlias,
            alias: "abc123".to_string(),
        };
        let read = StorageError::Read {
            op: Operation::GetByAlias,
            source: Arc::new(std::io::Error::other("pool closed")),
        };

        assert!(exists.is_alias_exists() && !exists.is_not_found());
        assert!(missing.is_not_found() && !missing.is_alias_exists());
        assert!(!read.is_not_found() && !read.is_alias_exists());
        assert_eq!(
            missing.to_string(),
            "storage.get_by_alias: url not found for alias: abc123"
        );
    }
}
