//! In-memory filesystem adapter.

use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::ports::filesystem::FileSystem;
use crate::ports::PortError;

/// Filesystem kept entirely in memory.
///
/// Directories exist implicitly for every ancestor of a stored file and can
/// also be created empty with [`MemoryFileSystem::create_dir`].
#[derive(Default)]
pub struct MemoryFileSystem {
    files: Mutex<BTreeMap<PathBuf, Vec<u8>>>,
    dirs: Mutex<BTreeSet<PathBuf>>,
}

impl MemoryFileSystem {
    /// Creates an empty filesystem.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style helper that stores a text file and returns `self`.
    #[must_use]
    pub fn with_file(self, path: impl AsRef<Path>, contents: &str) -> Self {
        self.with_bytes(path, contents.as_bytes())
    }

    /// Builder-style helper that stores raw bytes, which need not be UTF-8.
    #[must_use]
    pub fn with_bytes(self, path: impl AsRef<Path>, contents: &[u8]) -> Self {
        self.insert(path.as_ref(), contents);
        self
    }

    /// Records an empty directory.
    pub fn create_dir(&self, path: impl AsRef<Path>) {
        self.lock_dirs().insert(path.as_ref().to_path_buf());
    }

    fn insert(&self, path: &Path, contents: &[u8]) {
        self.lock_files()
            .insert(path.to_path_buf(), contents.to_vec());
    }

    fn lock_files(&self) -> MutexGuard<'_, BTreeMap<PathBuf, Vec<u8>>> {
        self.files.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn lock_dirs(&self) -> MutexGuard<'_, BTreeSet<PathBuf>> {
        self.dirs.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn is_dir(&self, path: &Path) -> bool {
        let in_dirs = self.lock_dirs().iter().any(|d| d.starts_with(path));
        let files = self.lock_files();
        in_dirs || files.keys().any(|k| k.starts_with(path) && k != path)
    }
}

impl FileSystem for MemoryFileSystem {
    fn read_to_string(&self, path: &Path) -> Result<String, PortError> {
        let bytes = self.read_bytes(path)?;
        Ok(String::from_utf8(bytes)?)
    }

    fn read_bytes(&self, path: &Path) -> Result<Vec<u8>, PortError> {
        self.lock_files()
            .get(path)
            .cloned()
            .ok_or_else(|| format!("File not found: {}", path.display()).into())
    }

    fn write(&self, path: &Path, contents: &str) -> Result<(), PortError> {
        if self.is_dir(path) {
            return Err(format!("Is a directory: {}", path.display()).into());
        }
        self.insert(path, contents.as_bytes());
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        let is_file = self.is_file(path);
        is_file || self.is_dir(path)
    }

    fn is_file(&self, path: &Path) -> bool {
        self.lock_files().contains_key(path)
    }

    fn walk_files(&self, root: &Path) -> Result<Vec<PathBuf>, PortError> {
        if !self.is_dir(root) {
            return Err(format!("No such directory: {}", root.display()).into());
        }
        let files = self.lock_files();
        let under_root = files.keys().filter(|k| k.starts_with(root));
        Ok(under_root.cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ancestors_of_files_are_directories() {
        let fs = MemoryFileSystem::new().with_file("/out/src/a.js", "x");

        assert!(fs.exists(Path::new("/out/src")));
        assert!(fs.exists(Path::new("/out/src/a.js")));
        assert!(fs.is_file(Path::new("/out/src/a.js")));
        assert!(!fs.is_file(Path::new("/out/src")));
        assert!(!fs.exists(Path::new("/out/src/a")));
    }

    #[test]
    fn walk_files_is_scoped_to_root() {
        let fs = MemoryFileSystem::new()
            .with_file("/out/a/2.js", "")
            .with_file("/out/a/1.js", "")
            .with_file("/other/3.js", "");

        let files = fs.walk_files(Path::new("/out")).unwrap();
        assert_eq!(
            files,
            vec![PathBuf::from("/out/a/1.js"), PathBuf::from("/out/a/2.js")]
        );
    }

    #[test]
    fn walk_files_errors_on_missing_root() {
        let fs = MemoryFileSystem::new();
        assert!(fs.walk_files(Path::new("/missing")).is_err());
    }

    #[test]
    fn writing_over_a_directory_fails() {
        let fs = MemoryFileSystem::new();
        fs.create_dir("/out/pkg");
        assert!(fs.write(Path::new("/out/pkg"), "x").is_err());
        assert!(fs.write(Path::new("/out/pkg/index.js"), "x").is_ok());
    }

    #[test]
    fn invalid_utf8_is_readable_only_as_bytes() {
        let fs = MemoryFileSystem::new().with_bytes("/vendor.js", b"\xff\xfe");

        let path = Path::new("/vendor.js");
        assert_eq!(fs.read_bytes(path).unwrap(), vec![0xff, 0xfe]);
        assert!(fs.read_to_string(path).is_err());
    }
}
