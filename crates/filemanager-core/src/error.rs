//! Error types for file operations.

use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString, IntoStaticStr};
use thiserror::Error;

/// The operation that failed.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, IntoStaticStr, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum OperationKind {
    List,
    Create,
    Delete,
    Copy,
    Move,
}

/// Why an operation failed.
#[derive(Debug, Error)]
pub enum ErrorCause {
    /// The target itself does not exist.
    #[error("file not found: {source}")]
    FileNotFound {
        #[source]
        source: io::Error,
    },

    /// A directory leading to the target does not exist.
    #[error("path not found: {source}")]
    PathNotFound {
        #[source]
        source: io::Error,
    },

    /// The request was rejected without touching the filesystem.
    #[error("invalid operation: {reason}")]
    InvalidOperation { reason: String },

    /// Any other I/O failure.
    #[error("{source}")]
    Io {
        #[source]
        source: io::Error,
    },
}

impl ErrorCause {
    /// Classify an I/O error raised while working on `resolved`.
    ///
    /// A missing target whose parent exists is `FileNotFound`; a missing
    /// target whose parent is also missing is `PathNotFound`.
    pub fn io(resolved: &Path, source: io::Error) -> Self {
        if source.kind() != io::ErrorKind::NotFound {
            return Self::Io { source };
        }
        let parent_exists = resolved
            .parent()
            .is_none_or(|p| p.as_os_str().is_empty() || p.exists());
        if parent_exists {
            Self::FileNotFound { source }
        } else {
            Self::PathNotFound { source }
        }
    }

    /// Create an invalid-operation cause.
    pub fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidOperation {
            reason: reason.into(),
        }
    }

    /// The underlying I/O error, if the cause carries one.
    pub fn io_error(&self) -> Option<&io::Error> {
        match self {
            Self::FileNotFound { source } | Self::PathNotFound { source } | Self::Io { source } => {
                Some(source)
            }
            Self::InvalidOperation { .. } => None,
        }
    }

    /// Whether the cause is one of the not-found categories.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::FileNotFound { .. } | Self::PathNotFound { .. })
    }
}

/// A failed file operation.
///
/// `path` is the logical path exactly as the caller supplied it, before it
/// was joined with the base directory.
#[derive(Debug, Error)]
#[error("operation {op} failed for path {path}: {cause}")]
pub struct OperationError {
    /// The operation that failed.
    pub op: OperationKind,
    /// The logical path involved.
    pub path: String,
    /// The underlying cause.
    #[source]
    pub cause: ErrorCause,
}

impl OperationError {
    /// Create a new operation error.
    pub fn new(op: OperationKind, path: impl Into<String>, cause: ErrorCause) -> Self {
        Self {
            op,
            path: path.into(),
            cause,
        }
    }

    /// Wrap an I/O error raised while working on `resolved`.
    pub fn io(
        op: OperationKind,
        path: impl Into<String>,
        resolved: &Path,
        source: io::Error,
    ) -> Self {
        Self::new(op, path, ErrorCause::io(resolved, source))
    }

    /// The underlying I/O error, if any.
    pub fn io_error(&self) -> Option<&io::Error> {
        self.cause.io_error()
    }
}
