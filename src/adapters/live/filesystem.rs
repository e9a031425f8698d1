//! Live filesystem adapter using `std::fs` and `walkdir`.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::ports::filesystem::FileSystem;
use crate::ports::PortError;

/// Live filesystem adapter backed by real disk I/O.
pub struct LiveFileSystem;

impl FileSystem for LiveFileSystem {
    fn read_to_string(&self, path: &Path) -> Result<String, PortError> {
        Ok(std::fs::read_to_string(path)?)
    }

    fn read_bytes(&self, path: &Path) -> Result<Vec<u8>, PortError> {
        Ok(std::fs::read(path)?)
    }

    fn write(&self, path: &Path, contents: &str) -> Result<(), PortError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        Ok(std::fs::write(path, contents)?)
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn walk_files(&self, root: &Path) -> Result<Vec<PathBuf>, PortError> {
        let mut files = Vec::new();
        for entry in WalkDir::new(root).follow_links(true).sort_by_file_name() {
            let entry = entry?;
            if entry.file_type().is_file() {
                files.push(entry.into_path());
            }
        }
        files.sort();
        Ok(files)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a/b/c.txt");

        LiveFileSystem.write(&path, "hello").unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "hello");
        assert!(LiveFileSystem.is_file(&path));
        assert!(LiveFileSystem.exists(&dir.path().join("a/b")));
        assert!(!LiveFileSystem.is_file(&dir.path().join("a/b")));
    }

    #[test]
    fn walk_files_lists_nested_files_sorted() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        LiveFileSystem.write(&root.join("z.map"), "").unwrap();
        LiveFileSystem.write(&root.join("a/y.map"), "").unwrap();
        LiveFileSystem.write(&root.join("a/b/x.map"), "").unwrap();

        let files = LiveFileSystem.walk_files(root).unwrap();

        assert_eq!(
            files,
            vec![
                dir.path().join("a/b/x.map"),
                dir.path().join("a/y.map"),
                dir.path().join("z.map"),
            ]
        );
    }

    #[test]
    fn read_bytes_accepts_invalid_utf8() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("vendor.js");
        std::fs::write(&path, b"\xff\xfe").unwrap();

        assert_eq!(LiveFileSystem.read_bytes(&path).unwrap(), vec![0xff, 0xfe]);
        assert!(LiveFileSystem.read_to_string(&path).is_err());
    }

    #[test]
    fn walk_files_errors_on_missing_root() {
        let dir = tempfile::tempdir().unwrap();
        assert!(LiveFileSystem.walk_files(&dir.path().join("nope")).is_err());
    }
}
