//! Mapping documents: the parallel `sources` / `sourcesContent` lists of a
//! source map.

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::ports::{FileSystem, PortError};

/// File-name suffix identifying mapping documents.
pub const MAP_SUFFIX: &str = ".map";

/// Why a mapping document was skipped. Never fatal.
#[derive(Debug, Error)]
pub enum DocumentError {
    /// The file could not be read.
    #[error("unreadable mapping document: {0}")]
    Unreadable(#[source] PortError),
    /// The file is not a mapping document.
    #[error("malformed mapping document: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Original paths and contents embedded in a source map.
///
/// Only the two fields used for reconstruction are read; everything else in
/// the document (`mappings`, `names`, ...) is ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MappingDocument {
    #[serde(default)]
    sources: Option<Vec<String>>,
    #[serde(default)]
    sources_content: Option<Vec<Option<String>>>,
}

impl MappingDocument {
    /// Parses a document from its JSON text.
    ///
    /// Missing or `null` lists read as empty, `null` content entries as
    /// empty strings.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentError::Malformed`] when the text is not a JSON object
    /// of that shape.
    pub fn parse(text: &str) -> Result<Self, DocumentError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Reads and parses the document at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentError::Unreadable`] if the read fails, otherwise
    /// whatever [`MappingDocument::parse`] returns.
    pub fn load(fs: &dyn FileSystem, path: &Path) -> Result<Self, DocumentError> {
        let text = fs.read_to_string(path).map_err(DocumentError::Unreadable)?;
        Self::parse(&text)
    }

    /// The original-path list.
    #[must_use]
    pub fn sources(&self) -> &[String] {
        self.sources.as_deref().unwrap_or_default()
    }

    /// Content for the source at `index`, or `""` when absent.
    #[must_use]
    pub fn content(&self, index: usize) -> &str {
        self.sources_content
            .as_deref()
            .and_then(|contents| contents.get(index))
            .and_then(Option::as_deref)
            .unwrap_or_default()
    }

    /// Pairs every original path with its content.
    ///
    /// Driven by the `sources` list; surplus content entries are ignored.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.sources()
            .iter()
            .enumerate()
            .map(|(i, source)| (source.as_str(), self.content(i)))
    }
}

/// Returns `true` for files named like mapping documents.
#[must_use]
pub fn is_map_document(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.ends_with(MAP_SUFFIX))
}
