// StatusBoard - platform/fs.rs
//
// Filesystem helpers shared by the dataset store, session persistence and
// the sample generator.

use crate::util::constants::TEMP_FILE_SUFFIX;
use std::io;
use std::path::{Path, PathBuf};

/// Sibling temp path used while `path` is being replaced:
/// `project_data.csv` -> `project_data.csv.tmp`.
pub fn temp_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    name.push(".");
    name.push(TEMP_FILE_SUFFIX);
    path.with_file_name(name)
}

/// Replace `path` with `bytes` atomically (write temp, rename over target).
///
/// Parent directories are created as needed. A crash between write and
/// rename leaves the previous file intact. On rename failure the temp file
/// is removed.
pub fn write_atomic(path: &Path, bytes: &[u8]) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let tmp = temp_path(path);
    std::fs::write(&tmp, bytes)?;

    if let Err(e) = std::fs::rename(&tmp, path) {
        let _ = std::fs::remove_file(&tmp);
        return Err(e);
    }

    tracing::debug!(path = %path.display(), bytes = bytes.len(), "File written atomically");
    Ok(())
}

/// Remove a file, treating "already gone" as success.
///
/// Returns true if a file was actually removed.
pub fn remove_if_exists(path: &Path) -> io::Result<bool> {
    match std::fs::remove_file(path) {
        Ok(()) => Ok(true),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_temp_path_is_sibling() {
        let p = Path::new("/data/project_data.csv");
        assert_eq!(temp_path(p), PathBuf::from("/data/project_data.csv.tmp"));
    }

    #[test]
    fn test_write_atomic_creates_parents_and_replaces() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("deeper").join("file.csv");

        write_atomic(&path, b"first").unwrap();
        assert_eq!(std::fs::read(&path).unwrap(), b"first");

        write_atomic(&path, b"second").unwrap();
        assert_eq!(std::fs::read(&path).unwrap(), b"second");
        assert!(!temp_path(&path).exists(), "temp file must not linger");
    }

    #[test]
    fn test_stale_temp_file_is_overwritten() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("file.csv");
        std::fs::write(temp_path(&path), b"garbage").unwrap();
        write_atomic(&path, b"good").unwrap();
        assert_eq!(std::fs::read(&path).unwrap(), b"good");
    }

    #[test]
    fn test_remove_if_exists() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("gone.csv");
        assert!(!remove_if_exists(&path).unwrap());
        std::fs::write(&path, b"x").unwrap();
        assert!(remove_if_exists(&path).unwrap());
        assert!(!path.exists());
    }
}
