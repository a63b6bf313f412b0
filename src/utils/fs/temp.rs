//! Intermediate stylesheet files.
//!
//! Compiled stylesheets are written next to their source so that relative
//! `url()` and `@import` references keep working for the bundler. These
//! helpers name those files and remove them once the build is over.

use std::path::{Path, PathBuf};

/// Returns the path of the intermediate file for `source`.
///
/// The source's extension is replaced by `suffix` while the directory and
/// file stem are kept, so `/app/src/styles.css` with `.tmp.css` becomes
/// `/app/src/styles.tmp.css`. A source without an extension simply gains the
/// suffix.
///
/// # Examples
///
/// ```rust
/// use tailwind_hook::utils::fs::temp_output_path;
/// use std::path::{Path, PathBuf};
///
/// let tmp = temp_output_path(Path::new("/app/src/styles.css"), ".tmp.css");
/// assert_eq!(tmp, PathBuf::from("/app/src/styles.tmp.css"));
/// ```
#[must_use]
pub fn temp_output_path(source: &Path, suffix: &str) -> PathBuf {
    let stem = source.file_stem().unwrap_or_default();
    let mut name = stem.to_os_string();
    name.push(suffix);
    source.with_file_name(name)
}

/// Removes a file, ignoring every error.
///
/// Intended for end-of-build cleanup only. The file may never have been
/// created (the compiler failed before writing it) or may already be gone;
/// neither case is a fault, and no failure here should reach the build.
///
/// Returns `true` when the file was actually removed.
pub fn remove_file_quietly(path: &Path) -> bool {
    match std::fs::remove_file(path) {
        Ok(()) => true,
        Err(err) => {
            tracing::trace!("ignoring failure to remove {}: {err}", path.display());
            false
        }
    }
}
