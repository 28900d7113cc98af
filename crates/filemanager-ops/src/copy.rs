//! File copy.

use std::fs::File;
use std::io;

use filemanager_core::{ErrorCause, OperationError, OperationKind};

use crate::service::{FileService, create_parent_dirs};

impl FileService {
    /// Copy the file at `src` to `dst`, returning the number of bytes copied.
    ///
    /// Missing parent directories of `dst` are created and an existing `dst`
    /// is truncated. Failures to open or read the source, and failures while
    /// streaming, are reported against `src`; failures to prepare the
    /// destination are reported against `dst`. A destination left behind by
    /// a failed stream is not cleaned up.
    pub fn copy(&self, src: &str, dst: &str) -> Result<u64, OperationError> {
        let src_path = self.resolve(OperationKind::Copy, src)?;
        let dst_path = self.resolve(OperationKind::Copy, dst)?;

        // Truncating the destination would wipe the source.
        if src_path == dst_path {
            return Err(OperationError::new(
                OperationKind::Copy,
                src,
                ErrorCause::invalid("source and destination are the same file"),
            ));
        }

        let mut source = File::open(&src_path)
            .map_err(|e| OperationError::io(OperationKind::Copy, src, &src_path, e))?;

        create_parent_dirs(&dst_path)
            .map_err(|e| OperationError::io(OperationKind::Copy, dst, &dst_path, e))?;

        let mut dest = File::create(&dst_path)
            .map_err(|e| OperationError::io(OperationKind::Copy, dst, &dst_path, e))?;

        let bytes = io::copy(&mut source, &mut dest)
            .map_err(|e| OperationError::io(OperationKind::Copy, src, &src_path, e))?;

        tracing::debug!(src, dst, bytes, "copied file");
        Ok(bytes)
    }
}
