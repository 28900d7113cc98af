//! File creation.

use std::fs::File;

use filemanager_core::{OperationError, OperationKind};

use crate::service::{FileService, create_parent_dirs};

impl FileService {
    /// Create an empty file at `path`, creating missing parent directories.
    ///
    /// An existing file is truncated.
    pub fn create(&self, path: &str) -> Result<(), OperationError> {
        let resolved = self.resolve(OperationKind::Create, path)?;

        create_parent_dirs(&resolved)
            .map_err(|e| OperationError::io(OperationKind::Create, path, &resolved, e))?;

        File::create(&resolved)
            .map_err(|e| OperationError::io(OperationKind::Create, path, &resolved, e))?;

        Ok(())
    }
}
