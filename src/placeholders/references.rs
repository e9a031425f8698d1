//! Relative module reference extraction.
//!
//! This is a lexical scan, not a parser. It misses specifiers built at run
//! time (`require("./" + name)`) and will pick up matching text inside
//! comments or strings. Both are accepted.

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

/// Static `import ... from "./x"`, bare `import "./x"`, and `require("./x")`.
/// Group 1 is the specifier, which must start with `./` or `../`.
pub const REFERENCE_PATTERN: &str =
    r#"(?:import\s+(?:.+?\s+from\s+)?|require\()\s*['"](\.\.?/[^'"]+)['"]"#;

static REFERENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(REFERENCE_PATTERN).expect("reference pattern is valid"));

const SOURCE_EXTENSIONS: [&str; 4] = ["js", "jsx", "ts", "tsx"];

/// Returns every relative specifier referenced from `text`, in order of
/// appearance. Duplicates are kept.
#[must_use]
pub fn extract_references(text: &str) -> Vec<&str> {
    REFERENCE
        .captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str())
        .collect()
}

/// Returns `true` for files scanned for references (`.js`, `.jsx`, `.ts`,
/// `.tsx`).
#[must_use]
pub fn is_source_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| SOURCE_EXTENSIONS.contains(&ext))
}
