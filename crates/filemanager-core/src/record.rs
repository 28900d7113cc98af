//! Directory entry records.

use std::fs::Metadata;
use std::time::SystemTime;

use compact_str::CompactString;
use serde::{Deserialize, Serialize};

/// Bits of `mode` that carry the file type on unix.
const TYPE_MASK: u32 = 0o170000;
const TYPE_DIR: u32 = 0o040000;
const TYPE_SYMLINK: u32 = 0o120000;

/// A snapshot of one directory entry, taken when the directory was listed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRecord {
    /// Entry name (not the full path).
    pub name: CompactString,

    /// Size in bytes.
    pub size: u64,

    /// Permission and type bits, as reported by the platform.
    pub mode: u32,

    /// Last modification time.
    pub modified: SystemTime,

    /// Whether the entry is a directory.
    pub is_dir: bool,
}

impl FileRecord {
    /// Create a record from its parts.
    pub fn new(
        name: impl Into<CompactString>,
        size: u64,
        mode: u32,
        modified: SystemTime,
        is_dir: bool,
    ) -> Self {
        Self {
            name: name.into(),
            size,
            mode,
            modified,
            is_dir,
        }
    }

    /// Build a record from an entry name and its (non-followed) metadata.
    pub fn from_metadata(name: impl Into<CompactString>, metadata: &Metadata) -> Self {
        Self {
            name: name.into(),
            size: metadata.len(),
            mode: mode_bits(metadata),
            modified: metadata.modified().unwrap_or(std::time::UNIX_EPOCH),
            is_dir: metadata.is_dir(),
        }
    }

    /// Check if this is a regular (non-directory) entry.
    pub fn is_file(&self) -> bool {
        !self.is_dir
    }

    /// Render the mode the way `ls -l` does, e.g. `drwxr-xr-x`.
    pub fn mode_string(&self) -> String {
        let kind = if self.is_dir || self.mode & TYPE_MASK == TYPE_DIR {
            'd'
        } else if self.mode & TYPE_MASK == TYPE_SYMLINK {
            'l'
        } else {
            '-'
        };

        let mut out = String::with_capacity(10);
        out.push(kind);
        for shift in [6u32, 3, 0] {
            let bits = (self.mode >> shift) & 0o7;
            out.push(if bits & 0o4 != 0 { 'r' } else { '-' });
            out.push(if bits & 0o2 != 0 { 'w' } else { '-' });
            out.push(if bits & 0o1 != 0 { 'x' } else { '-' });
        }
        out
    }
}

#[cfg(unix)]
fn mode_bits(metadata: &Metadata) -> u32 {
    use std::os::unix::fs::MetadataExt;
    metadata.mode()
}

#[cfg(not(unix))]
fn mode_bits(metadata: &Metadata) -> u32 {
    let perms = if metadata.permissions().readonly() {
        0o444
    } else {
        0o666
    };
    if metadata.is_dir() {
        TYPE_DIR | perms | 0o111
    } else {
        perms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_string_file() {
        let record = FileRecord::new("a.txt", 3, 0o100644, SystemTime::now(), false);
        assert_eq!(record.mode_string(), "-rw-r--r--");
        assert!(record.is_file());
    }

    #[test]
    fn test_mode_string_dir() {
        let record = FileRecord::new("dir", 0, 0o040755, SystemTime::now(), true);
        assert_eq!(record.mode_string(), "drwxr-xr-x");
        assert!(!record.is_file());
    }

    #[test]
    fn test_mode_string_symlink() {
        let record = FileRecord::new("link", 0, 0o120777, SystemTime::now(), false);
        assert_eq!(record.mode_string(), "lrwxrwxrwx");
    }

    #[test]
    fn test_from_metadata() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.bin");
        std::fs::write(&path, b"12345").unwrap();

        let metadata = std::fs::symlink_metadata(&path).unwrap();
        let record = FileRecord::from_metadata("data.bin", &metadata);

        assert_eq!(record.name, "data.bin");
        assert_eq!(record.size, 5);
        assert!(!record.is_dir);
    }
}
