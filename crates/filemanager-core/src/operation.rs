//! File operation requests.

use serde::{Deserialize, Serialize};

use crate::OperationKind;

/// A file operation to be executed against the base directory.
///
/// All paths are logical paths, relative to the base directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum FileOperation {
    /// List the entries of a directory.
    List { path: String },
    /// Create an empty file, truncating an existing one.
    Create { path: String },
    /// Delete a file or an empty directory.
    Delete { path: String },
    /// Copy a file to a destination.
    Copy { source: String, destination: String },
    /// Move a file to a destination.
    Move { source: String, destination: String },
}

impl FileOperation {
    /// Create a list operation.
    pub fn list(path: impl Into<String>) -> Self {
        Self::List { path: path.into() }
    }

    /// Create a file creation operation.
    pub fn create(path: impl Into<String>) -> Self {
        Self::Create { path: path.into() }
    }

    /// Create a delete operation.
    pub fn delete(path: impl Into<String>) -> Self {
        Self::Delete { path: path.into() }
    }

    /// Create a copy operation.
    pub fn copy(source: impl Into<String>, destination: impl Into<String>) -> Self {
        Self::Copy {
            source: source.into(),
            destination: destination.into(),
        }
    }

    /// Create a move operation.
    pub fn move_to(source: impl Into<String>, destination: impl Into<String>) -> Self {
        Self::Move {
            source: source.into(),
            destination: destination.into(),
        }
    }

    /// The kind of this operation.
    pub fn kind(&self) -> OperationKind {
        match self {
            Self::List { .. } => OperationKind::List,
            Self::Create { .. } => OperationKind::Create,
            Self::Delete { .. } => OperationKind::Delete,
            Self::Copy { .. } => OperationKind::Copy,
            Self::Move { .. } => OperationKind::Move,
        }
    }

    /// The primary logical path this operation works on.
    pub fn path(&self) -> &str {
        match self {
            Self::List { path } | Self::Create { path } | Self::Delete { path } => path,
            Self::Copy { source, .. } | Self::Move { source, .. } => source,
        }
    }
}
