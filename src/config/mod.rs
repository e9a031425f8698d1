//! Configuration records.
//!
//! One record describes one site to reconstruct: where the compiled bundles
//! live, where their map documents can be fetched from, and where the maps
//! and the reconstructed tree go. Records are JSON or YAML files kept in a
//! sources directory:
//!
//! ```text
//! sources/
//!   ├── shop.json
//!   └── blog.yaml
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::ports::FileSystem;

/// Module-bundle prefix used when a record does not set `webpackPrefix`.
pub const DEFAULT_BUNDLE_PREFIX: &str = "_N_E";

/// Scheme under which the bundler exposes its virtual module paths.
pub const BUNDLE_SCHEME: &str = "webpack";

/// Default directory holding configuration records.
pub const DEFAULT_SOURCES_DIR: &str = "sources";

const RECORD_EXTENSIONS: [&str; 3] = ["json", "yaml", "yml"];

/// A single configuration record. Read-only once loaded.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Directory holding the compiled bundle artifacts.
    pub input_dir: PathBuf,
    /// Base URL that map document names are appended to.
    pub base_url: String,
    /// Root under which maps and the reconstructed tree are written.
    pub base_output_dir: PathBuf,
    /// Maps subdirectory, relative to `base_output_dir`.
    pub maps_dir: PathBuf,
    /// Reconstructed-tree subdirectory, relative to `base_output_dir`.
    pub decompiled_dir: PathBuf,
    /// Recognized source extensions, each with its leading dot, in
    /// resolution priority order.
    pub exts: Vec<String>,
    /// Module-bundle prefix, see [`DEFAULT_BUNDLE_PREFIX`].
    #[serde(default)]
    pub webpack_prefix: Option<String>,
}

impl Config {
    /// Reads, parses and validates the record at `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, does not parse, or fails
    /// [`Config::validate`].
    pub fn load(fs: &dyn FileSystem, path: &Path) -> Result<Self> {
        let text = fs.read_to_string(path).map_err(|e| Error::read(path, e))?;
        let config = Self::parse(path, &text)?;
        config
            .validate()
            .map_err(|message| Error::config(path, message))?;
        Ok(config)
    }

    fn parse(path: &Path, text: &str) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or_default();
        if ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml") {
            serde_yaml::from_str(text).map_err(|e| Error::config(path, e.to_string()))
        } else {
            serde_json::from_str(text).map_err(|e| Error::config(path, e.to_string()))
        }
    }

    /// Checks the extension list.
    ///
    /// An empty list would mean no reference could ever be flagged missing,
    /// so it is rejected rather than silently producing no stubs.
    ///
    /// # Errors
    ///
    /// Returns a message describing the first problem found.
    pub fn validate(&self) -> std::result::Result<(), String> {
        if self.exts.is_empty() {
            return Err("exts must list at least one extension".to_string());
        }
        if let Some(bad) = self.exts.iter().find(|ext| !is_extension(ext)) {
            return Err(format!("extension {bad:?} must start with '.'"));
        }
        Ok(())
    }

    /// Directory holding downloaded map documents.
    #[must_use]
    pub fn maps_dir(&self) -> PathBuf {
        self.base_output_dir.join(&self.maps_dir)
    }

    /// Root of the reconstructed tree.
    #[must_use]
    pub fn decompiled_dir(&self) -> PathBuf {
        self.base_output_dir.join(&self.decompiled_dir)
    }

    /// The configured module-bundle prefix, or the default.
    #[must_use]
    pub fn bundle_prefix(&self) -> &str {
        self.webpack_prefix
            .as_deref()
            .unwrap_or(DEFAULT_BUNDLE_PREFIX)
    }
}

fn is_extension(ext: &str) -> bool {
    ext.len() > 1 && ext.starts_with('.')
}

/// Lists the configuration files to process, in processing order.
///
/// Explicit names are taken relative to `sources_dir` unless absolute. With
/// no explicit names, every record file directly inside `sources_dir` is
/// returned, sorted by name.
///
/// # Errors
///
/// Returns an error if `sources_dir` has to be scanned and cannot be read.
pub fn discover(
    fs: &dyn FileSystem,
    sources_dir: &Path,
    explicit: &[PathBuf],
) -> Result<Vec<PathBuf>> {
    if !explicit.is_empty() {
        // Joining keeps absolute names unchanged.
        return Ok(explicit.iter().map(|f| sources_dir.join(f)).collect());
    }

    let files = fs
        .walk_files(sources_dir)
        .map_err(|e| Error::walk(sources_dir, e))?;
    Ok(files
        .into_iter()
        .filter(|f| f.parent() == Some(sources_dir))
        .filter(|f| {
            f.extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| RECORD_EXTENSIONS.contains(&ext))
        })
        .collect())
}
