//! Command-line interface for tailwind-hook
//!
//! The `twhook` binary drives the tailwind plugin through the in-process
//! build host, which makes it usable both as a small stand-alone Tailwind
//! build step and as a way to check what the plugin would do inside a
//! bundler.
//!
//! # Commands
//!
//! - `build` - Resolve stylesheets through the plugin and write the results to an output directory
//! - `locate` - Show which compiler and configuration file a stylesheet would use
//!
//! # Global Options
//!
//! - `--verbose` - Enable debug output
//! - `--quiet` - Only report errors
//! - `--config` - Use a specific `twhook.toml`
//!
//! # Examples
//!
//! ```bash
//! twhook build src/app.css src/print.css --outdir dist
//! twhook --verbose build src/app.css --minify
//! twhook locate src/app.css
//! ```

mod build;
mod locate;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::PluginConfig;

pub use build::{BuildCommand, BuildReport};
pub use locate::LocateCommand;

/// Runtime settings derived from the global CLI flags.
///
/// Kept separate from [`Cli`] so tests can run commands with explicit
/// settings instead of parsed arguments.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    /// Log level for `tailwind_hook` and `tool` targets, `None` for errors only.
    ///
    /// Ignored when `RUST_LOG` is set.
    pub log_level: Option<String>,

    /// Configuration file; `twhook.toml` in the working directory when unset.
    pub config_path: Option<PathBuf>,
}

impl CliConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Installs the global `tracing` subscriber, writing to stderr.
    ///
    /// Only the first call in a process has an effect.
    pub fn init_logging(&self) {
        use std::sync::Once;
        use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

        static INIT: Once = Once::new();

        INIT.call_once(|| {
            let filter = if std::env::var("RUST_LOG").is_ok() {
                EnvFilter::from_default_env()
            } else {
                let level = self.log_level.as_deref().unwrap_or("error");
                EnvFilter::new(format!("warn,tailwind_hook={level},tool={level}"))
            };

            let _ = tracing_subscriber::registry()
                .with(filter)
                .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
                .try_init();
        });
    }
}

/// Tailwind build hook: compile `@tailwind` stylesheets during module resolution.
#[derive(Parser)]
#[command(
    name = "twhook",
    about = "Compile Tailwind stylesheets the way the bundler plugin does",
    version,
    long_about = "twhook resolves stylesheets through the tailwind build plugin. Stylesheets containing \
                  @tailwind directives are compiled with the nearest tailwindcss binary; everything else \
                  passes through unchanged."
)]
pub struct Cli {
    /// The subcommand to execute.
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output for debugging.
    ///
    /// Shows compiler lookups and the exact command lines being run.
    /// Equivalent to `RUST_LOG=tailwind_hook=debug`.
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,

    /// Suppress all output except errors.
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Path to the configuration file.
    ///
    /// Defaults to `twhook.toml` in the current directory. A missing file
    /// means default settings.
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve stylesheets through the plugin and write the bundled results.
    ///
    /// See [`BuildCommand`] for options.
    Build(BuildCommand),

    /// Show the compiler and configuration file used for a stylesheet.
    ///
    /// See [`LocateCommand`] for options.
    Locate(LocateCommand),
}

impl Cli {
    /// Execute the CLI with settings taken from the parsed flags.
    ///
    /// # Errors
    ///
    /// Whatever the subcommand reports.
    pub async fn execute(self) -> Result<()> {
        let config = self.build_config();
        config.init_logging();
        self.execute_with_config(config).await
    }

    /// Translate global flags into a [`CliConfig`].
    #[must_use]
    pub fn build_config(&self) -> CliConfig {
        let log_level = if self.verbose {
            Some("debug".to_string())
        } else if self.quiet {
            None
        } else {
            Some("info".to_string())
        };

        CliConfig {
            log_level,
            config_path: self.config.clone(),
        }
    }

    /// Execute the CLI with explicit settings.
    ///
    /// # Errors
    ///
    /// Fails if the configuration cannot be loaded or the subcommand fails.
    pub async fn execute_with_config(self, config: CliConfig) -> Result<()> {
        let plugin_config = PluginConfig::load_with_optional(config.config_path).await?;

        match self.command {
            Commands::Build(cmd) => cmd.execute(plugin_config, self.quiet).await,
            Commands::Locate(cmd) => cmd.execute(&plugin_config),
        }
    }
}
