//! Dispatch of operation requests with a unified result.

use filemanager_core::{FileOperation, FileRecord, OperationError, OperationKind};

use crate::service::FileService;

/// What a successful operation produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OperationOutcome {
    /// Directory entries, in directory-read order.
    Listed(Vec<FileRecord>),
    /// A file was created or truncated.
    Created,
    /// A file or empty directory was removed.
    Deleted,
    /// A file was copied.
    Copied { bytes: u64 },
    /// A file was moved.
    Moved { bytes: u64 },
}

impl OperationOutcome {
    /// The kind of operation that produced this outcome.
    pub fn kind(&self) -> OperationKind {
        match self {
            Self::Listed(_) => OperationKind::List,
            Self::Created => OperationKind::Create,
            Self::Deleted => OperationKind::Delete,
            Self::Copied { .. } => OperationKind::Copy,
            Self::Moved { .. } => OperationKind::Move,
        }
    }

    /// Get a human-readable summary of the outcome.
    pub fn summary(&self) -> String {
        match self {
            Self::Listed(records) => format!("Listed {} entries", records.len()),
            Self::Created => "Created 1 file".to_string(),
            Self::Deleted => "Deleted 1 entry".to_string(),
            Self::Copied { bytes } => format!("Copied {bytes} bytes"),
            Self::Moved { bytes } => format!("Moved {bytes} bytes"),
        }
    }
}

impl FileService {
    /// Execute an operation request.
    pub fn execute(&self, operation: &FileOperation) -> Result<OperationOutcome, OperationError> {
        tracing::debug!(op = %operation.kind(), path = operation.path(), "executing operation");

        match operation {
            FileOperation::List { path } => self.list(path).map(OperationOutcome::Listed),
            FileOperation::Create { path } => self.create(path).map(|()| OperationOutcome::Created),
            FileOperation::Delete { path } => self.delete(path).map(|()| OperationOutcome::Deleted),
            FileOperation::Copy {
                source,
                destination,
            } => self
                .copy(source, destination)
                .map(|bytes| OperationOutcome::Copied { bytes }),
            FileOperation::Move {
                source,
                destination,
            } => self
                .move_file(source, destination)
                .map(|bytes| OperationOutcome::Moved { bytes }),
        }
    }
}
