//! Logical path resolution against the base directory.

use std::ffi::OsStr;
use std::path::{Component, Path, PathBuf};

use filemanager_core::ErrorCause;

/// Join `logical` onto `base` lexically.
///
/// Root and prefix components are dropped, so an absolute logical path is
/// still taken relative to `base`. `.` is ignored and `..` pops the previous
/// component; a `..` that would leave `base` is rejected. The filesystem is
/// never consulted and symlinks are not followed.
pub fn resolve(base: &Path, logical: &str) -> Result<PathBuf, ErrorCause> {
    let mut parts: Vec<&OsStr> = Vec::new();

    for component in Path::new(logical).components() {
        match component {
            Component::Prefix(_) | Component::RootDir | Component::CurDir => {}
            Component::ParentDir => {
                if parts.pop().is_none() {
                    return Err(ErrorCause::invalid(format!(
                        "'{logical}' escapes the base directory"
                    )));
                }
            }
            Component::Normal(part) => parts.push(part),
        }
    }

    let mut resolved = base.to_path_buf();
    resolved.extend(parts);
    Ok(resolved)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> PathBuf {
        PathBuf::from("/srv/files")
    }

    #[test]
    fn test_resolve_relative() {
        assert_eq!(
            resolve(&base(), "a/b.txt").unwrap(),
            PathBuf::from("/srv/files/a/b.txt")
        );
    }

    #[test]
    fn test_resolve_base_itself() {
        assert_eq!(resolve(&base(), "").unwrap(), base());
        assert_eq!(resolve(&base(), ".").unwrap(), base());
        assert_eq!(resolve(&base(), "./").unwrap(), base());
    }

    #[test]
    fn test_resolve_absolute_stays_under_base() {
        assert_eq!(
            resolve(&base(), "/etc/passwd").unwrap(),
            PathBuf::from("/srv/files/etc/passwd")
        );
    }

    #[test]
    fn test_resolve_parent_within_base() {
        assert_eq!(
            resolve(&base(), "a/./b/../c.txt").unwrap(),
            PathBuf::from("/srv/files/a/c.txt")
        );
        assert_eq!(resolve(&base(), "a/..").unwrap(), base());
    }

    #[test]
    fn test_resolve_rejects_escape() {
        assert!(matches!(
            resolve(&base(), "../outside"),
            Err(ErrorCause::InvalidOperation { .. })
        ));
        assert!(resolve(&base(), "a/../../b").is_err());
        assert!(resolve(&base(), "/..").is_err());
    }

    #[test]
    fn test_resolve_relative_base() {
        assert_eq!(
            resolve(Path::new("."), "notes/todo.md").unwrap(),
            PathBuf::from("./notes/todo.md")
        );
    }
}
