//! Move, composed as copy followed by delete.

use filemanager_core::OperationError;

use crate::service::FileService;

impl FileService {
    /// Move the file at `src` to `dst`, returning the number of bytes moved.
    ///
    /// This is a copy followed by a delete of the source, never a rename,
    /// and it is not atomic. A failed copy is returned unchanged and leaves
    /// the source in place. A failed delete is returned unchanged and leaves
    /// both the source and the complete copy at `dst`. Nothing is retried or
    /// rolled back.
    pub fn move_file(&self, src: &str, dst: &str) -> Result<u64, OperationError> {
        let bytes = self.copy(src, dst)?;
        self.delete(src)?;
        Ok(bytes)
    }
}
