//! Filesystem port for file I/O operations.

use std::path::{Path, PathBuf};

use super::PortError;

/// Provides filesystem access for reading, writing, and walking trees.
///
/// The three stages never touch `std::fs` directly, so the whole pipeline
/// can run against the in-memory adapter in tests.
pub trait FileSystem: Send + Sync {
    /// Reads the entire contents of a file as a UTF-8 string.
    ///
    /// # Errors
    ///
    /// Returns an error if the file does not exist or is not valid UTF-8.
    fn read_to_string(&self, path: &Path) -> Result<String, PortError>;

    /// Reads the entire contents of a file as raw bytes.
    ///
    /// # Errors
    ///
    /// Returns an error if the file does not exist or cannot be read.
    fn read_bytes(&self, path: &Path) -> Result<Vec<u8>, PortError>;

    /// Writes the given contents to a file, creating or overwriting it.
    ///
    /// Missing parent directories are created first.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails (permissions, disk full, etc.).
    fn write(&self, path: &Path, contents: &str) -> Result<(), PortError>;

    /// Returns `true` if the path exists, whether file or directory.
    fn exists(&self, path: &Path) -> bool;

    /// Returns `true` if the path exists and is a regular file.
    fn is_file(&self, path: &Path) -> bool;

    /// Recursively lists every regular file under `root`, sorted by path.
    ///
    /// # Errors
    ///
    /// Returns an error if `root` or any directory below it cannot be read.
    fn walk_files(&self, root: &Path) -> Result<Vec<PathBuf>, PortError>;
}
