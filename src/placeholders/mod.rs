//! Stub generator: finds relative references in the reconstructed tree that
//! point at nothing and writes placeholder modules for them.
//!
//! Must run after the tree writer has finished, since a reference can be
//! satisfied by a file written from any map document.

pub mod references;
pub mod resolve;
pub mod stub;

use std::path::PathBuf;

use indexmap::IndexSet;
use tracing::{debug, info};

pub use references::{extract_references, is_source_file, REFERENCE_PATTERN};
pub use resolve::{resolve, Resolution};

use resolve::normalize;
pub use stub::stub_source;

use crate::config::Config;
use crate::context::ServiceContext;
use crate::error::{Error, Result};

/// Outcome of one stub-generator pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StubReport {
    /// Source files scanned for references.
    pub scanned_files: usize,
    /// Relative references seen, duplicates included.
    pub references: usize,
    /// Distinct missing candidates found during the scan.
    pub missing: usize,
    /// References whose candidate lies outside the decompiled directory.
    /// These never get a stub.
    pub outside_root: usize,
    /// Stubs written, in the order their references were first seen.
    pub created: Vec<PathBuf>,
}

/// Scans the decompiled directory and writes a stub for every distinct
/// missing reference candidate.
///
/// A decompiled directory that does not exist is not an error; there is
/// nothing to do. Source files are decoded lossily, so stray bytes that are
/// not UTF-8 never stop the scan. Stubs are only ever written inside the
/// decompiled directory.
///
/// # Errors
///
/// Returns an error if the tree cannot be scanned, a source file cannot be
/// read, or a stub cannot be written.
pub fn write_placeholders(ctx: &ServiceContext, config: &Config) -> Result<StubReport> {
    let root = config.decompiled_dir();
    if !ctx.fs.exists(&root) {
        info!("No decompiled tree at {}, nothing to stub", root.display());
        return Ok(StubReport::default());
    }

    let files = ctx.fs.walk_files(&root).map_err(|e| Error::walk(&root, e))?;
    let bound = normalize(&root);

    let mut report = StubReport::default();
    let mut missing: IndexSet<PathBuf> = IndexSet::new();
    for file in files.iter().filter(|f| is_source_file(f)) {
        let bytes = ctx.fs.read_bytes(file).map_err(|e| Error::read(file, e))?;
        let text = String::from_utf8_lossy(&bytes);
        report.scanned_files += 1;

        for specifier in extract_references(&text) {
            report.references += 1;
            match resolve(ctx.fs.as_ref(), file, specifier, &config.exts) {
                Resolution::Found(path) => {
                    debug!("{}: {specifier} -> {}", file.display(), path.display());
                }
                Resolution::Missing(candidate) if candidate.starts_with(&bound) => {
                    missing.insert(candidate);
                }
                Resolution::Missing(candidate) => {
                    report.outside_root += 1;
                    debug!(
                        "{}: {specifier} -> {} is outside {}, not stubbed",
                        file.display(),
                        candidate.display(),
                        root.display()
                    );
                }
                Resolution::Unresolvable => {
                    debug!("{}: {specifier} has no candidate", file.display());
                }
            }
        }
    }
    report.missing = missing.len();

    for candidate in missing {
        // An earlier stub in this pass may already occupy the path.
        if ctx.fs.exists(&candidate) {
            continue;
        }
        let source = stub_source(&candidate);
        ctx.fs
            .write(&candidate, &source)
            .map_err(|e| Error::write(&candidate, e))?;
        info!("Created placeholder: {}", candidate.display());
        report.created.push(candidate);
    }

    info!(
        "Scanned {} files, {} relative references: {} placeholders created",
        report.scanned_files,
        report.references,
        report.created.len(),
    );
    Ok(report)
}
