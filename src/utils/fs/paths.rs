//! Path utilities for normalization and upward discovery.
//!
//! The ancestor search here backs both compiler lookup and configuration
//! lookup. It walks from a file's directory towards the filesystem root and
//! returns the first directory containing the requested entry.

use std::path::{Component, Path, PathBuf};

/// Normalizes a path by resolving `.` and `..` components.
///
/// This is purely lexical: symbolic links are not resolved and nothing is
/// read from disk. A `..` directly under the root or a drive prefix is
/// dropped, the same way the operating system treats `/..` as `/`.
///
/// # Examples
///
/// ```rust
/// use tailwind_hook::utils::fs::normalize_path;
/// use std::path::{Path, PathBuf};
///
/// let path = Path::new("/foo/./bar/../baz");
/// assert_eq!(normalize_path(path), PathBuf::from("/foo/baz"));
///
/// let relative = Path::new("../src/./lib.rs");
/// assert_eq!(normalize_path(relative), PathBuf::from("../src/lib.rs"));
/// ```
#[must_use]
pub fn normalize_path(path: &Path) -> PathBuf {
    let mut components: Vec<Component<'_>> = Vec::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match components.last() {
                Some(Component::Normal(_)) => {
                    components.pop();
                }
                Some(Component::RootDir | Component::Prefix(_)) => {}
                _ => components.push(component),
            },
            c => components.push(c),
        }
    }

    components.iter().collect()
}

/// Iterates over `dir` and its ancestors, stopping before the filesystem root.
///
/// The root is whatever directory has no parent (`/` on Unix, `C:\` or a UNC
/// share on Windows), so no string comparison against `/` is involved. A
/// relative `dir` ends with its first component.
///
/// # Examples
///
/// ```rust
/// # #[cfg(unix)]
/// # {
/// use tailwind_hook::utils::fs::ancestor_dirs;
/// use std::path::Path;
///
/// let dirs: Vec<_> = ancestor_dirs(Path::new("/srv/app/styles")).collect();
/// assert_eq!(dirs, [Path::new("/srv/app/styles"), Path::new("/srv/app"), Path::new("/srv")]);
/// # }
/// ```
pub fn ancestor_dirs(dir: &Path) -> impl Iterator<Item = &Path> {
    dir.ancestors().take_while(|candidate| {
        candidate.parent().is_some_and(|parent| parent != *candidate)
            && !candidate.as_os_str().is_empty()
    })
}

/// Searches upward from a file for `target`, returning the first match.
///
/// The search starts in the directory *containing* `starting_path` (never at
/// `starting_path` itself) and moves up one parent at a time. Each step joins
/// `target` onto the directory and checks whether anything exists there. The
/// filesystem root is never checked.
///
/// `target` may be a bare name (`tailwind.config.js`) or a relative path
/// (`node_modules/.bin/tailwindcss`). Relative starting paths are resolved
/// against the current working directory first.
///
/// # Returns
///
/// The first existing `<ancestor>/<target>`, or `None` when no ancestor below
/// the root contains it. Stat failures of any kind count as "not there".
///
/// # Examples
///
/// ```rust,no_run
/// use tailwind_hook::utils::fs::find_file;
/// use std::path::Path;
///
/// let config = find_file(Path::new("/srv/app/src/styles.css"), "tailwind.config.js");
/// if let Some(path) = config {
///     println!("using {}", path.display());
/// }
/// ```
#[must_use]
pub fn find_file(starting_path: &Path, target: impl AsRef<Path>) -> Option<PathBuf> {
    let target = target.as_ref();
    let absolute = if starting_path.is_absolute() {
        starting_path.to_path_buf()
    } else {
        std::path::absolute(starting_path).ok()?
    };
    let absolute = normalize_path(&absolute);
    let start_dir = absolute.parent()?;

    ancestor_dirs(start_dir).map(|dir| dir.join(target)).find(|candidate| candidate.exists())
}
