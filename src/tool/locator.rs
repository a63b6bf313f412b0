//! Discovery of the compiler binary and its configuration file.
//!
//! Lookup always starts from the stylesheet being compiled, so that a
//! monorepo with several `node_modules` directories or several
//! `tailwind.config.js` files uses the one nearest to each stylesheet.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::constants::{COMPILER_NAME, CONFIG_FILE_NAME, LOCAL_BINARY_PATH};
use crate::core::HookError;
use crate::utils::fs::find_file;
use crate::utils::platform::find_on_path;

/// Finds the compiler and its configuration for a given stylesheet.
///
/// The default locator looks for `node_modules/.bin/tailwindcss`, then a
/// bare `tailwindcss`, then `tailwindcss` on `PATH`, and for
/// `tailwind.config.js`. Every name can be overridden.
///
/// # Examples
///
/// ```rust,no_run
/// use tailwind_hook::tool::ToolLocator;
/// use std::path::Path;
///
/// # fn example() -> Result<(), tailwind_hook::core::HookError> {
/// let locator = ToolLocator::default();
/// let stylesheet = Path::new("/srv/app/src/styles.css");
/// let binary = locator.locate_compiler(stylesheet)?;
/// let config = locator.locate_config(stylesheet);
/// # let _ = (binary, config);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolLocator {
    compiler: String,
    local_binary: PathBuf,
    config_file: String,
    search_path: Option<OsString>,
}

impl Default for ToolLocator {
    fn default() -> Self {
        Self {
            compiler: COMPILER_NAME.to_string(),
            local_binary: PathBuf::from(LOCAL_BINARY_PATH),
            config_file: CONFIG_FILE_NAME.to_string(),
            search_path: None,
        }
    }
}

impl ToolLocator {
    /// Creates a locator using the default names.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the compiler executable name.
    #[must_use]
    pub fn with_compiler(mut self, name: impl Into<String>) -> Self {
        self.compiler = name.into();
        self
    }

    /// Overrides the project-local binary path, relative to an ancestor directory.
    #[must_use]
    pub fn with_local_binary(mut self, path: impl Into<PathBuf>) -> Self {
        self.local_binary = path.into();
        self
    }

    /// Overrides the configuration file name.
    #[must_use]
    pub fn with_config_file(mut self, name: impl Into<String>) -> Self {
        self.config_file = name.into();
        self
    }

    /// Searches `paths` instead of the process `PATH` in the last lookup step.
    #[must_use]
    pub fn with_search_path(mut self, paths: impl Into<OsString>) -> Self {
        self.search_path = Some(paths.into());
        self
    }

    /// Executable name being searched for.
    #[must_use]
    pub fn compiler(&self) -> &str {
        &self.compiler
    }

    /// Configuration file name being searched for.
    #[must_use]
    pub fn config_file(&self) -> &str {
        &self.config_file
    }

    /// Finds the compiler binary for `reference`.
    ///
    /// First hit wins:
    /// 1. the project-local binary in an ancestor of `reference`
    /// 2. a file named like the compiler in an ancestor of `reference`
    /// 3. the compiler on the search path
    ///
    /// # Errors
    ///
    /// [`HookError::CompilerNotFound`] if all three fail, carrying the error
    /// of the search-path lookup.
    pub fn locate_compiler(&self, reference: &Path) -> Result<PathBuf, HookError> {
        if let Some(path) = find_file(reference, &self.local_binary) {
            tracing::debug!("Using project-local {} at {}", self.compiler, path.display());
            return Ok(path);
        }

        if let Some(path) = find_file(reference, &self.compiler) {
            tracing::debug!("Using {} found at {}", self.compiler, path.display());
            return Ok(path);
        }

        let path = find_on_path(&self.compiler, self.search_path.as_deref()).map_err(|source| {
            HookError::CompilerNotFound {
                name: self.compiler.clone(),
                source,
            }
        })?;
        tracing::debug!("Using {} from PATH at {}", self.compiler, path.display());
        Ok(path)
    }

    /// Finds the nearest configuration file for `reference`.
    ///
    /// `None` is a normal outcome: the compiler then runs with its built-in
    /// defaults.
    #[must_use]
    pub fn locate_config(&self, reference: &Path) -> Option<PathBuf> {
        let config = find_file(reference, &self.config_file);
        match &config {
            Some(path) => tracing::debug!("Using configuration {}", path.display()),
            None => tracing::trace!("No {} above {}", self.config_file, reference.display()),
        }
        config
    }
}

/// Finds the compiler for `reference` with the default locator.
///
/// # Errors
///
/// See [`ToolLocator::locate_compiler`].
pub fn locate_compiler(reference: &Path) -> Result<PathBuf, HookError> {
    ToolLocator::default().locate_compiler(reference)
}

/// Finds `tailwind.config.js` for `reference` with the default locator.
#[must_use]
pub fn locate_config(reference: &Path) -> Option<PathBuf> {
    ToolLocator::default().locate_config(reference)
}
