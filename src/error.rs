//! Error types shared by the reconstruction stages.

use std::path::PathBuf;

use thiserror::Error;

use crate::ports::PortError;

/// Fatal failures. Anything reported through this type aborts processing of
/// the current configuration record.
#[derive(Debug, Error)]
pub enum Error {
    /// A file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Read {
        /// The file that was being read.
        path: PathBuf,
        /// Adapter error.
        #[source]
        source: PortError,
    },

    /// A file could not be written.
    #[error("failed to write {}: {source}", path.display())]
    Write {
        /// The file that was being written.
        path: PathBuf,
        /// Adapter error.
        #[source]
        source: PortError,
    },

    /// A directory tree could not be enumerated.
    #[error("failed to scan {}: {source}", path.display())]
    Walk {
        /// Root of the walk.
        path: PathBuf,
        /// Adapter error.
        #[source]
        source: PortError,
    },

    /// A configuration record is missing, unparsable, or invalid.
    #[error("invalid configuration {}: {message}", path.display())]
    Config {
        /// The configuration file.
        path: PathBuf,
        /// What is wrong with it.
        message: String,
    },
}

impl Error {
    pub(crate) fn read(path: impl Into<PathBuf>, source: PortError) -> Self {
        Self::Read {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn write(path: impl Into<PathBuf>, source: PortError) -> Self {
        Self::Write {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn walk(path: impl Into<PathBuf>, source: PortError) -> Self {
        Self::Walk {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn config(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Config {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// Result alias using the crate [`enum@Error`].
pub type Result<T> = std::result::Result<T, Error>;
