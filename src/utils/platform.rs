//! Platform-specific helpers for locating executables
//!
//! Executable lookup differs per platform (`PATHEXT` on Windows, the
//! executable bit on Unix). The `which` crate handles those differences; this
//! module adds the option of searching an explicit path list instead of the
//! process `PATH`, which keeps lookups testable without touching the
//! environment.

use std::ffi::OsStr;
use std::path::PathBuf;

/// Resolves `cmd` through a search path, like a shell would.
///
/// With `search_path` set to `None` the process `PATH` is used. Otherwise
/// `search_path` is parsed the same way `PATH` is (`:`-separated on Unix,
/// `;`-separated on Windows) and searched relative to the current directory.
///
/// # Errors
///
/// Returns the [`which::Error`] from the lookup, typically
/// [`which::Error::CannotFindBinaryPath`].
///
/// # Examples
///
/// ```rust,no_run
/// use tailwind_hook::utils::platform::find_on_path;
///
/// match find_on_path("tailwindcss", None) {
///     Ok(path) => println!("found {}", path.display()),
///     Err(err) => eprintln!("not on PATH: {err}"),
/// }
/// ```
pub fn find_on_path(cmd: &str, search_path: Option<&OsStr>) -> Result<PathBuf, which::Error> {
    match search_path {
        None => which::which(cmd),
        Some(paths) => {
            // Only relative entries in `paths` depend on the working directory
            let cwd = std::env::current_dir().unwrap_or_default();
            which::which_in(cmd, Some(paths), cwd)
        }
    }
}
