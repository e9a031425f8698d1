//! Original-path sanitization.
//!
//! Map documents name their sources with bundler URLs such as
//! `webpack://_N_E/./src/app/page.tsx` or `webpack:///../node_modules/x.js`.
//! [`sanitize`] turns those into relative paths that are safe to join onto
//! the output root.
//!
//! `..` segments are dropped, never resolved: `a/../b` becomes `a/b`. This
//! keeps every result inside the output root without any containment check
//! after the fact, at the price of not matching ordinary path semantics.

use std::fmt;
use std::path::Path;

use crate::config::BUNDLE_SCHEME;

/// A relative, escape-safe path derived from an original source path.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SanitizedPath(String);

impl SanitizedPath {
    /// The path as text, `/`-separated.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The path as a relative filesystem path.
    #[must_use]
    pub fn as_path(&self) -> &Path {
        Path::new(&self.0)
    }

    /// `true` when nothing is left after sanitization, i.e. the path would
    /// name the output root itself.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for SanitizedPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Derives the [`SanitizedPath`] for `original`.
///
/// Steps, each applied once to the whole string:
/// 1. strip `webpack://<bundle_prefix>/`
/// 2. strip a bare `webpack://`
/// 3. strip `file://`
/// 4. strip leading `/`s
/// 5. drop every `..` segment
/// 6. percent-decode
///
/// Decoding can surface new separators (`%2F`) or parent segments
/// (`%2E%2E`), so steps 4 and 5 run once more on the decoded text.
///
/// Each call decodes once and strips each scheme once, so applying it to its
/// own output is not always a no-op: double-encoded text loses one layer per
/// call (`%2525x.js` gives `%25x.js`, then `%x.js`), as do stacked schemes
/// (`webpack://webpack://x.js` gives `webpack://x.js`, then `x.js`). Every
/// result is still safe to join onto the output root.
#[must_use]
pub fn sanitize(original: &str, bundle_prefix: &str) -> SanitizedPath {
    let bundled = format!("{BUNDLE_SCHEME}://{bundle_prefix}/");
    let bare = format!("{BUNDLE_SCHEME}://");

    let mut rest = original;
    rest = rest.strip_prefix(bundled.as_str()).unwrap_or(rest);
    rest = rest.strip_prefix(bare.as_str()).unwrap_or(rest);
    rest = rest.strip_prefix("file://").unwrap_or(rest);

    let joined = drop_parent_segments(rest);
    let decoded = match urlencoding::decode(&joined) {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => joined,
    };
    SanitizedPath(drop_parent_segments(&decoded))
}

/// Strips leading slashes and removes `..` segments. Removing a segment can
/// expose a new leading slash (`..//x`), so the strip runs on both sides.
fn drop_parent_segments(path: &str) -> String {
    let kept: Vec<&str> = path
        .trim_start_matches('/')
        .split('/')
        .filter(|segment| *segment != "..")
        .collect();
    kept.join("/").trim_start_matches('/').to_string()
}
