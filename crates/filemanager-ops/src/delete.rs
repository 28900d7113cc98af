//! Deletion.

use std::fs;

use filemanager_core::{OperationError, OperationKind};

use crate::service::FileService;

impl FileService {
    /// Delete the file or empty directory at `path`.
    ///
    /// Directories are never removed recursively.
    pub fn delete(&self, path: &str) -> Result<(), OperationError> {
        let resolved = self.resolve(OperationKind::Delete, path)?;

        let result = match fs::symlink_metadata(&resolved) {
            Ok(metadata) if metadata.is_dir() => fs::remove_dir(&resolved),
            Ok(_) => fs::remove_file(&resolved),
            Err(e) => Err(e),
        };

        result.map_err(|e| OperationError::io(OperationKind::Delete, path, &resolved, e))
    }
}
