//! Plugin configuration (`twhook.toml`).
//!
//! Every key is optional; a missing file behaves like an empty one.
//!
//! ```toml
//! minify = true
//! compiler = "tailwindcss"
//! local_binary = "node_modules/.bin/tailwindcss"
//! config_file = "tailwind.config.js"
//! marker = "@tailwind"
//! ```

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::constants::{COMPILER_NAME, CONFIG_FILE_NAME, LOCAL_BINARY_PATH, TAILWIND_MARKER};
use crate::core::HookError;
use crate::tool::ToolLocator;

/// Settings for the tailwind plugin.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PluginConfig {
    /// Pass `-m` to the compiler
    pub minify: bool,

    /// Executable name looked up in ancestor directories and on `PATH`
    pub compiler: String,

    /// Project-local compiler location, relative to an ancestor directory
    pub local_binary: PathBuf,

    /// Compiler configuration file looked up in ancestor directories
    pub config_file: String,

    /// Substring that marks a stylesheet for compilation
    pub marker: String,
}

impl Default for PluginConfig {
    fn default() -> Self {
        Self {
            minify: false,
            compiler: COMPILER_NAME.to_string(),
            local_binary: PathBuf::from(LOCAL_BINARY_PATH),
            config_file: CONFIG_FILE_NAME.to_string(),
            marker: TAILWIND_MARKER.to_string(),
        }
    }
}

impl PluginConfig {
    /// Loads configuration from `path`, or the defaults if `path` does not exist.
    ///
    /// # Errors
    ///
    /// Fails if an existing file cannot be read or parsed.
    pub async fn load_with_optional(path: Option<PathBuf>) -> Result<Self> {
        let path = path.unwrap_or_else(|| PathBuf::from(crate::constants::DEFAULT_CONFIG_FILE));
        if fs::try_exists(&path).await.unwrap_or(false) {
            Self::load_from(&path).await
        } else {
            tracing::debug!("No configuration at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Loads configuration from `path`.
    ///
    /// # Errors
    ///
    /// Fails if the file cannot be read, or with [`HookError::Config`] if it
    /// is not valid configuration.
    pub async fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read configuration from {}", path.display()))?;

        Ok(Self::parse(&content, path)?)
    }

    /// Parses configuration text; `origin` is only used in errors.
    ///
    /// # Errors
    ///
    /// [`HookError::Config`] describing the first problem found.
    pub fn parse(content: &str, origin: &Path) -> Result<Self, HookError> {
        let config: Self = toml::from_str(content).map_err(|err| HookError::Config {
            path: origin.to_path_buf(),
            message: err.message().to_string(),
        })?;

        if config.compiler.trim().is_empty() {
            return Err(HookError::Config {
                path: origin.to_path_buf(),
                message: "compiler must not be empty".to_string(),
            });
        }
        if config.marker.is_empty() {
            return Err(HookError::Config {
                path: origin.to_path_buf(),
                message: "marker must not be empty".to_string(),
            });
        }

        Ok(config)
    }

    /// Returns the configuration with minification forced on when `minify` is set.
    #[must_use]
    pub fn with_minify(mut self, minify: bool) -> Self {
        self.minify |= minify;
        self
    }

    /// A locator searching for the configured names.
    #[must_use]
    pub fn locator(&self) -> ToolLocator {
        ToolLocator::new()
            .with_compiler(self.compiler.clone())
            .with_local_binary(self.local_binary.clone())
            .with_config_file(self.config_file.clone())
    }
}
