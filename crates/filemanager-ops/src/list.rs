//! Directory listing.

use std::ffi::OsString;
use std::fs::{self, DirEntry, Metadata};
use std::io;

use filemanager_core::{FileRecord, OperationError, OperationKind};

use crate::logger::Logger;
use crate::service::FileService;

impl FileService {
    /// List the entries of the directory at `path`, non-recursively.
    ///
    /// Entries whose metadata cannot be read are skipped and reported to the
    /// logger; only a failure to open the directory itself is an error.
    /// Records come back in the order the directory read yields them.
    pub fn list(&self, path: &str) -> Result<Vec<FileRecord>, OperationError> {
        let resolved = self.resolve(OperationKind::List, path)?;

        let entries = fs::read_dir(&resolved)
            .map_err(|e| OperationError::io(OperationKind::List, path, &resolved, e))?;

        Ok(collect_records(entries, self.logger()))
    }
}

/// A directory entry whose metadata can be read.
pub(crate) trait ListEntry {
    fn name(&self) -> OsString;
    fn metadata(&self) -> io::Result<Metadata>;
}

impl ListEntry for DirEntry {
    fn name(&self) -> OsString {
        self.file_name()
    }

    fn metadata(&self) -> io::Result<Metadata> {
        DirEntry::metadata(self)
    }
}

/// Turn directory entries into records, skipping the unreadable ones.
pub(crate) fn collect_records<I, E>(entries: I, logger: &dyn Logger) -> Vec<FileRecord>
where
    I: IntoIterator<Item = io::Result<E>>,
    E: ListEntry,
{
    let mut records = Vec::new();

    for entry in entries {
        let entry = match entry {
            Ok(e) => e,
            Err(err) => {
                logger.error("Failed to read directory entry", &[("error", &err)]);
                continue;
            }
        };

        let name = entry.name().to_string_lossy().into_owned();
        match entry.metadata() {
            Ok(metadata) => records.push(FileRecord::from_metadata(name, &metadata)),
            Err(err) => {
                logger.error("Failed to get file info", &[("file", &name), ("error", &err)]);
            }
        }
    }

    records
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use std::sync::Mutex;

    use crate::logger::Field;

    #[derive(Default)]
    struct RecordingLogger {
        errors: Mutex<Vec<String>>,
    }

    impl Logger for RecordingLogger {
        fn info(&self, _msg: &str, _fields: &[Field<'_>]) {}

        fn error(&self, msg: &str, fields: &[Field<'_>]) {
            let rendered: Vec<String> = fields.iter().map(|(k, v)| format!("{k}={v}")).collect();
            self.errors
                .lock()
                .unwrap()
                .push(format!("{msg} {}", rendered.join(" ")));
        }
    }

    /// An entry backed by a real path, or by nothing at all.
    struct FakeEntry {
        name: &'static str,
        path: Option<PathBuf>,
    }

    impl ListEntry for FakeEntry {
        fn name(&self) -> OsString {
            self.name.into()
        }

        fn metadata(&self) -> io::Result<Metadata> {
            match &self.path {
                Some(p) => fs::symlink_metadata(p),
                None => Err(io::Error::new(io::ErrorKind::PermissionDenied, "denied")),
            }
        }
    }

    #[test]
    fn test_collect_records_skips_unreadable_metadata() {
        let dir = tempfile::tempdir().unwrap();
        let a = dir.path().join("a.txt");
        let c = dir.path().join("c.txt");
        fs::write(&a, b"aaa").unwrap();
        fs::write(&c, b"c").unwrap();

        let entries = vec![
            Ok(FakeEntry { name: "a.txt", path: Some(a) }),
            Ok(FakeEntry { name: "b.txt", path: None }),
            Ok(FakeEntry { name: "c.txt", path: Some(c) }),
        ];

        let logger = RecordingLogger::default();
        let records = collect_records(entries, &logger);

        let names: Vec<&str> = records.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["a.txt", "c.txt"]);
        assert_eq!(records[0].size, 3);

        let errors = logger.errors.lock().unwrap();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("file=b.txt"));
        assert!(errors[0].contains("error=denied"));
    }

    #[test]
    fn test_collect_records_skips_failed_entries() {
        let entries: Vec<io::Result<FakeEntry>> =
            vec![Err(io::Error::new(io::ErrorKind::Other, "bad entry"))];

        let logger = RecordingLogger::default();
        let records = collect_records(entries, &logger);

        assert!(records.is_empty());
        assert_eq!(logger.errors.lock().unwrap().len(), 1);
    }
}
