//! Resolution of relative references against the reconstructed tree.

use std::ffi::OsString;
use std::path::{Component, Path, PathBuf};

use crate::ports::FileSystem;

/// What a reference resolved to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// An existing path satisfies the reference.
    Found(PathBuf),
    /// Nothing satisfies it; this is where a stub should go.
    Missing(PathBuf),
    /// No candidate can be formed (empty extension list).
    Unresolvable,
}

/// Resolves `specifier` as referenced from `from_file`.
///
/// With `base` the specifier joined onto the referencing file's directory,
/// the first of these that exists wins:
/// 1. `base + ext` for each extension, in order
/// 2. `base` itself, only if it is a regular file
/// 3. `base/index + ext` for each extension, in order
///
/// Otherwise the missing candidate is `base + exts[0]`.
#[must_use]
pub fn resolve(
    fs: &dyn FileSystem,
    from_file: &Path,
    specifier: &str,
    exts: &[String],
) -> Resolution {
    let dir = from_file.parent().unwrap_or_else(|| Path::new(""));
    let base = normalize(&dir.join(specifier));

    let with_ext: Vec<PathBuf> = exts.iter().map(|ext| with_suffix(&base, ext)).collect();
    if let Some(found) = with_ext.iter().find(|candidate| fs.exists(candidate)) {
        return Resolution::Found(found.clone());
    }

    if fs.is_file(&base) {
        return Resolution::Found(base);
    }

    if let Some(found) = exts
        .iter()
        .map(|ext| base.join(format!("index{ext}")))
        .find(|candidate| fs.exists(candidate))
    {
        return Resolution::Found(found);
    }

    match with_ext.into_iter().next() {
        Some(candidate) => Resolution::Missing(candidate),
        None => Resolution::Unresolvable,
    }
}

/// Appends `suffix` to the final component without treating it as a
/// replacement extension (`util.client` + `.js` is `util.client.js`).
fn with_suffix(base: &Path, suffix: &str) -> PathBuf {
    let mut joined: OsString = base.as_os_str().to_owned();
    joined.push(suffix);
    PathBuf::from(joined)
}

/// Lexically removes `.` and folds `..` into the preceding component.
pub(crate) fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                let last = out.components().next_back();
                let at_root = matches!(last, Some(Component::RootDir | Component::Prefix(_)));
                let can_pop = matches!(last, Some(Component::Normal(_)));
                if can_pop {
                    out.pop();
                } else if !at_root {
                    out.push("..");
                }
            }
            other => out.push(other),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::MemoryFileSystem;

    fn exts() -> Vec<String> {
        vec![".js".into(), ".ts".into()]
    }

    fn resolve_from(fs: &MemoryFileSystem, specifier: &str) -> Resolution {
        resolve(fs, Path::new("/out/src/app/a.js"), specifier, &exts())
    }

    #[test]
    fn normalizes_lexically() {
        assert_eq!(
            normalize(Path::new("/out/src/./b/../c")),
            PathBuf::from("/out/src/c")
        );
        assert_eq!(normalize(Path::new("/out/../../x")), PathBuf::from("/x"));
        assert_eq!(normalize(Path::new("out/../../x")), PathBuf::from("../x"));
        assert_eq!(normalize(Path::new("/out/dir/")), PathBuf::from("/out/dir"));
    }

    #[test]
    fn first_missing_extension_is_the_candidate() {
        let fs = MemoryFileSystem::new();
        assert_eq!(
            resolve_from(&fs, "./b"),
            Resolution::Missing(PathBuf::from("/out/src/app/b.js"))
        );
    }

    #[test]
    fn later_extension_satisfies_reference() {
        let fs = MemoryFileSystem::new().with_file("/out/src/app/b.ts", "");
        assert_eq!(
            resolve_from(&fs, "./b"),
            Resolution::Found(PathBuf::from("/out/src/app/b.ts"))
        );
    }

    #[test]
    fn exact_file_satisfies_reference() {
        let fs = MemoryFileSystem::new().with_file("/out/src/styles.css", "");
        assert_eq!(
            resolve_from(&fs, "../styles.css"),
            Resolution::Found(PathBuf::from("/out/src/styles.css"))
        );
    }

    #[test]
    fn directory_alone_does_not_satisfy_reference() {
        let fs = MemoryFileSystem::new();
        fs.create_dir("/out/src/app/widgets");
        assert_eq!(
            resolve_from(&fs, "./widgets"),
            Resolution::Missing(PathBuf::from("/out/src/app/widgets.js"))
        );
    }

    #[test]
    fn index_file_satisfies_reference() {
        let fs = MemoryFileSystem::new().with_file("/out/src/lib/index.ts", "");
        assert_eq!(
            resolve_from(&fs, "../lib"),
            Resolution::Found(PathBuf::from("/out/src/lib/index.ts"))
        );
    }

    #[test]
    fn extension_is_appended_not_replaced() {
        let fs = MemoryFileSystem::new();
        assert_eq!(
            resolve_from(&fs, "./util.client"),
            Resolution::Missing(PathBuf::from("/out/src/app/util.client.js"))
        );
    }

    #[test]
    fn trailing_slash_resolves_like_the_directory_name() {
        let fs = MemoryFileSystem::new().with_file("/out/src/app/pkg/index.js", "");
        assert_eq!(
            resolve_from(&fs, "./pkg/"),
            Resolution::Found(PathBuf::from("/out/src/app/pkg/index.js"))
        );
    }

    #[test]
    fn empty_extension_list_is_unresolvable() {
        let fs = MemoryFileSystem::new();
        let resolution = resolve(&fs, Path::new("/out/a.js"), "./b", &[]);
        assert_eq!(resolution, Resolution::Unresolvable);
    }

    #[test]
    fn empty_extension_list_still_accepts_exact_file() {
        let fs = MemoryFileSystem::new().with_file("/out/b", "");
        assert_eq!(
            resolve(&fs, Path::new("/out/a.js"), "./b", &[]),
            Resolution::Found(PathBuf::from("/out/b"))
        );
    }
}
