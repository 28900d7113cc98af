//! The file service.

use std::fs::DirBuilder;
use std::io;
use std::path::{Path, PathBuf};

use filemanager_core::{Config, OperationError, OperationKind};

use crate::logger::Logger;
use crate::resolve::resolve;

/// Mode for directories created on demand.
#[cfg_attr(not(unix), allow(dead_code))]
const DIR_MODE: u32 = 0o755;

/// Performs file operations sandboxed under a fixed base directory.
///
/// Apart from the filesystem itself nothing changes between calls; the base
/// directory and logger are fixed at construction.
pub struct FileService {
    base_dir: PathBuf,
    logger: Box<dyn Logger>,
}

impl FileService {
    /// Create a service rooted at `base_dir`.
    pub fn new(base_dir: impl Into<PathBuf>, logger: impl Logger + 'static) -> Self {
        Self {
            base_dir: base_dir.into(),
            logger: Box::new(logger),
        }
    }

    /// Create a service from loaded configuration.
    pub fn from_config(config: &Config, logger: impl Logger + 'static) -> Self {
        Self::new(config.base_dir.clone(), logger)
    }

    /// The base directory every logical path is resolved against.
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    pub(crate) fn logger(&self) -> &dyn Logger {
        self.logger.as_ref()
    }

    /// Resolve a logical path, tagging a rejection with `op`.
    pub(crate) fn resolve(&self, op: OperationKind, path: &str) -> Result<PathBuf, OperationError> {
        let resolved =
            resolve(&self.base_dir, path).map_err(|cause| OperationError::new(op, path, cause))?;
        tracing::debug!(%op, path, resolved = %resolved.display(), "resolved path");
        Ok(resolved)
    }
}

impl std::fmt::Debug for FileService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileService")
            .field("base_dir", &self.base_dir)
            .finish_non_exhaustive()
    }
}

/// Create every missing directory above `path`.
pub(crate) fn create_parent_dirs(path: &Path) -> io::Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => dir_builder().create(parent),
        _ => Ok(()),
    }
}

fn dir_builder() -> DirBuilder {
    let mut builder = DirBuilder::new();
    builder.recursive(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(DIR_MODE);
    }
    builder
}
