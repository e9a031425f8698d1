//! Map acquisition: finds the `sourceMappingURL` trailer of every compiled
//! bundle and downloads the referenced map document if it is not already in
//! the maps directory.
//!
//! Download failures are reported and skipped. The tree writer simply never
//! sees a document that was not fetched.

use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::context::ServiceContext;
use crate::error::{Error, Result};

/// Only the tail of a bundle is searched for the trailer.
const TRAILER_LINES: usize = 5;

static SOURCE_MAPPING_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"sourceMappingURL\s*=\s*(\S+)").expect("trailer pattern is valid")
});

static UNSAFE_NAME_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"[\\:*?"<>|]+"#).expect("name pattern is valid"));

/// Outcome of one acquisition pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AcquireReport {
    /// Bundle files inspected.
    pub bundles: usize,
    /// Bundles carrying a usable map reference.
    pub references: usize,
    /// Referenced maps already present locally.
    pub present: usize,
    /// Maps downloaded in this pass.
    pub downloaded: Vec<PathBuf>,
    /// URLs that could not be fetched.
    pub failed: Vec<String>,
    /// Maps that would have been downloaded (dry run only).
    pub missing: Vec<PathBuf>,
}

/// Fetches every referenced map document that is missing locally.
///
/// With `dry_run` set nothing is downloaded; missing maps are only logged
/// and listed in the report.
///
/// # Errors
///
/// Returns an error if the input directory cannot be scanned, a bundle
/// cannot be read, or a downloaded document cannot be written. Failed
/// downloads are not errors. Bundles that are not valid UTF-8 are decoded
/// lossily.
pub async fn acquire(
    ctx: &ServiceContext,
    config: &Config,
    dry_run: bool,
) -> Result<AcquireReport> {
    let input_dir = &config.input_dir;
    let maps_dir = config.maps_dir();

    let files = ctx
        .fs
        .walk_files(input_dir)
        .map_err(|e| Error::walk(input_dir, e))?;

    let mut report = AcquireReport::default();
    for bundle in files.iter().filter(|f| is_bundle(f, &config.exts)) {
        report.bundles += 1;
        let bytes = ctx
            .fs
            .read_bytes(bundle)
            .map_err(|e| Error::read(bundle, e))?;
        let text = String::from_utf8_lossy(&bytes);
        let Some(name) = map_reference(&text) else {
            debug!("{}: no sourceMappingURL", bundle.display());
            continue;
        };
        report.references += 1;

        let target = local_map_path(&maps_dir, &name);
        if ctx.fs.exists(&target) {
            report.present += 1;
            continue;
        }

        let url = format!("{}{}", config.base_url, name.trim_start_matches('/'));
        if dry_run {
            info!("Missing: {} (would download from {url})", target.display());
            report.missing.push(target);
            continue;
        }

        info!("Downloading {url} ...");
        match ctx.http.get_text(&url).await {
            Ok(body) => {
                ctx.fs
                    .write(&target, &body)
                    .map_err(|e| Error::write(&target, e))?;
                info!("Downloaded: {}", target.display());
                report.downloaded.push(target);
            }
            Err(e) => {
                warn!("Failed: {url} -> {e}");
                report.failed.push(url);
            }
        }
    }

    info!(
        "Inspected {} bundles: {} map references, {} already present, {} downloaded, {} failed",
        report.bundles,
        report.references,
        report.present,
        report.downloaded.len(),
        report.failed.len(),
    );
    Ok(report)
}

fn is_bundle(path: &Path, exts: &[String]) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| exts.iter().any(|ext| name.ends_with(ext.as_str())))
}

/// Extracts the cleaned map document name from a bundle's trailer.
///
/// Inline `data:` maps have nothing to download and yield `None`.
#[must_use]
pub fn map_reference(bundle_text: &str) -> Option<String> {
    let lines: Vec<&str> = bundle_text.split('\n').collect();
    let start = lines.len().saturating_sub(TRAILER_LINES);
    let tail = lines[start..].join("\n");

    let raw = SOURCE_MAPPING_URL.captures(&tail)?.get(1)?.as_str();
    if raw.starts_with("data:") {
        return None;
    }
    let cleaned = UNSAFE_NAME_CHARS.replace_all(raw, "");
    let cleaned = cleaned.trim_end_matches('*').trim_end_matches('/');
    (!cleaned.is_empty()).then(|| cleaned.to_string())
}

/// Local path for a map document name. Leading slashes and `..` segments are
/// dropped so the result stays inside `maps_dir`.
fn local_map_path(maps_dir: &Path, name: &str) -> PathBuf {
    name.split('/')
        .filter(|segment| !segment.is_empty() && *segment != "..")
        .fold(maps_dir.to_path_buf(), |path, segment| path.join(segment))
}
