//! Tree writer: turns the mapping documents under the maps directory into a
//! file tree under the decompiled directory.
//!
//! Documents are processed in sorted path order. When two documents name
//! the same sanitized path, the later one wins.

pub mod document;
pub mod sanitize;

use std::path::PathBuf;

use tracing::{debug, info, warn};

pub use document::{is_map_document, DocumentError, MappingDocument, MAP_SUFFIX};
pub use sanitize::{sanitize, SanitizedPath};

use crate::config::Config;
use crate::context::ServiceContext;
use crate::error::{Error, Result};

/// Outcome of one tree-writer pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DecompileReport {
    /// Documents that parsed and were written out.
    pub documents: usize,
    /// Documents skipped because they could not be read or parsed.
    pub skipped_documents: Vec<PathBuf>,
    /// Files written, counting overwrites.
    pub files_written: usize,
    /// Sources skipped because their path sanitized to nothing.
    pub empty_paths: usize,
}

/// Writes every source embedded in the configured maps directory to the
/// decompiled directory.
///
/// # Errors
///
/// Returns an error if the maps directory cannot be scanned or a file cannot
/// be written. Documents that fail to read or parse are skipped and listed
/// in the report instead.
pub fn decompile(ctx: &ServiceContext, config: &Config) -> Result<DecompileReport> {
    let maps_dir = config.maps_dir();
    let decompiled_dir = config.decompiled_dir();
    let prefix = config.bundle_prefix();

    let files = ctx
        .fs
        .walk_files(&maps_dir)
        .map_err(|e| Error::walk(&maps_dir, e))?;

    let mut report = DecompileReport::default();
    for map_path in files.iter().filter(|p| is_map_document(p)) {
        let document = match MappingDocument::load(ctx.fs.as_ref(), map_path) {
            Ok(document) => document,
            Err(e) => {
                warn!("Skipping {}: {e}", map_path.display());
                report.skipped_documents.push(map_path.clone());
                continue;
            }
        };

        for (original, content) in document.entries() {
            let sanitized = sanitize(original, prefix);
            if sanitized.is_empty() {
                warn!(
                    "Skipping source {original:?} in {}: empty path",
                    map_path.display()
                );
                report.empty_paths += 1;
                continue;
            }
            let out_path = decompiled_dir.join(sanitized.as_path());
            ctx.fs
                .write(&out_path, content)
                .map_err(|e| Error::write(&out_path, e))?;
            debug!("Wrote {}", out_path.display());
            report.files_written += 1;
        }
        report.documents += 1;
    }

    info!(
        "Decompiled {} map documents into {}: {} files written, {} malformed documents skipped",
        report.documents,
        decompiled_dir.display(),
        report.files_written,
        report.skipped_documents.len(),
    );
    Ok(report)
}
