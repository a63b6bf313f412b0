//! Show which compiler and configuration file a stylesheet would use.
//!
//! Runs the same lookups as the resolve hook without compiling anything,
//! which helps to debug "not found" errors and monorepo layouts.

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

use crate::config::PluginConfig;

/// Command to print the compiler and configuration file for a stylesheet.
#[derive(Args, Debug)]
pub struct LocateCommand {
    /// Stylesheet (or any file) whose directory the lookup starts from
    file: PathBuf,
}

impl LocateCommand {
    #[must_use]
    pub fn new(file: PathBuf) -> Self {
        Self {
            file,
        }
    }

    /// Prints the located paths.
    ///
    /// # Errors
    ///
    /// Fails if no compiler can be found.
    pub fn execute(self, config: &PluginConfig) -> Result<()> {
        let (compiler, config_file) = self.locate(config)?;

        println!("compiler: {}", compiler.display());
        match config_file {
            Some(path) => println!("config:   {}", path.display()),
            None => println!("config:   none"),
        }
        Ok(())
    }

    /// Returns the compiler and, if any, the configuration file.
    ///
    /// # Errors
    ///
    /// Fails if no compiler can be found.
    pub fn locate(&self, config: &PluginConfig) -> Result<(PathBuf, Option<PathBuf>)> {
        let file = std::path::absolute(&self.file)
            .with_context(|| format!("Failed to make {} absolute", self.file.display()))?;
        let locator = config.locator();

        let compiler = locator.locate_compiler(&file)?;
        let config_file = locator.locate_config(&file);
        tracing::debug!("Located {} and {:?} for {}", compiler.display(), config_file, file.display());

        Ok((compiler, config_file))
    }
}
