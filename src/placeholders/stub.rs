//! Stub module synthesis.

use std::fmt::Write as _;
use std::path::Path;

/// Source text for a placeholder module at `path`.
///
/// A lowercase name suggests a utility module, so it gets a named function
/// and a named constant. Anything else (components, classes) gets a default
/// export.
#[must_use]
pub fn stub_source(path: &Path) -> String {
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy())
        .unwrap_or_default();
    let name = path
        .file_stem()
        .map(|n| n.to_string_lossy())
        .unwrap_or_default();

    let mut stub = format!("// Placeholder for missing module: {file_name}\n");
    if name.starts_with(|c: char| c.is_ascii_lowercase()) {
        let _ = writeln!(stub, "export function {name}() {{}}");
        let _ = writeln!(stub, "export const {name}Var = undefined;");
    } else {
        stub.push_str("export default {};\n");
    }
    stub
}
