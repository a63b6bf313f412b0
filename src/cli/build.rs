//! Resolve stylesheets through the tailwind plugin and write the results.
//!
//! Each stylesheet is resolved the way a bundler would resolve an entry
//! point: the plugin compiles marked stylesheets into intermediate files,
//! the resolved file is copied into the output directory under the entry's
//! own name, and the build is finished so the plugin can remove its
//! intermediate files again.
//!
//! Resolutions run concurrently on the blocking thread pool since the
//! compiler is run synchronously.
//!
//! # Examples
//!
//! ```bash
//! twhook build src/app.css
//! twhook build src/app.css src/admin.css --outdir public/css --minify
//! ```

use anyhow::{Context, Result, anyhow};
use clap::Args;
use colored::Colorize;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::config::PluginConfig;
use crate::plugin::session::BuildSession;
use crate::plugin::{BuildResult, Message, OnResolveArgs, tailwind_plugin};

/// Command to bundle stylesheets through the tailwind plugin.
#[derive(Args, Debug)]
pub struct BuildCommand {
    /// Stylesheets to bundle
    #[arg(required = true)]
    stylesheets: Vec<PathBuf>,

    /// Directory the bundled stylesheets are written to
    #[arg(short, long, default_value = "dist")]
    outdir: PathBuf,

    /// Minify compiled stylesheets (overrides the configuration file)
    #[arg(long)]
    minify: bool,
}

/// One stylesheet written to the output directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BundledFile {
    /// Stylesheet named on the command line
    pub input: PathBuf,
    /// File the plugin resolved it to
    pub resolved: PathBuf,
    /// Where it was written
    pub output: PathBuf,
}

/// Outcome of a build.
#[derive(Debug, Default)]
pub struct BuildReport {
    /// Stylesheets written to the output directory
    pub bundled: Vec<BundledFile>,
    /// Errors and warnings after end hooks ran
    pub result: BuildResult,
}

impl BuildReport {
    /// Whether the build finished without errors.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.result.errors.is_empty()
    }
}

impl BuildCommand {
    /// Creates a command for `stylesheets`, writing to `outdir`.
    #[must_use]
    pub fn new(stylesheets: Vec<PathBuf>, outdir: PathBuf) -> Self {
        Self {
            stylesheets,
            outdir,
            minify: false,
        }
    }

    /// Forces minification on.
    #[must_use]
    pub fn with_minify(mut self, minify: bool) -> Self {
        self.minify = minify;
        self
    }

    /// Runs the build and prints a summary.
    ///
    /// # Errors
    ///
    /// Fails if the build could not be set up or reported any errors.
    pub async fn execute(self, config: PluginConfig, quiet: bool) -> Result<()> {
        let report = self.run(config).await?;

        if !quiet {
            for file in &report.bundled {
                println!("{} {} -> {}", "Bundled".green().bold(), file.input.display(), file.output.display());
            }
        }
        for warning in &report.result.warnings {
            eprintln!("{}: {warning}", "warning".yellow().bold());
        }
        for error in &report.result.errors {
            eprintln!("{}: {error}", "error".red().bold());
        }

        if report.is_success() {
            if !quiet {
                println!("{} {} stylesheet(s) into {}", "Finished".green().bold(), report.bundled.len(), self.outdir.display());
            }
            Ok(())
        } else {
            Err(anyhow!("build failed with {} error(s)", report.result.errors.len()))
        }
    }

    /// Runs the build without printing anything.
    ///
    /// Failures of individual stylesheets are collected in the report rather
    /// than returned, so every stylesheet gets its chance and the end hooks
    /// always run.
    ///
    /// # Errors
    ///
    /// Fails if the plugin cannot be registered or the output directory cannot
    /// be created.
    pub async fn run(&self, config: PluginConfig) -> Result<BuildReport> {
        let config = config.with_minify(self.minify);
        let session = Arc::new(BuildSession::new().with_plugin(&tailwind_plugin(config))?);

        tokio::fs::create_dir_all(&self.outdir)
            .await
            .with_context(|| format!("Failed to create output directory {}", self.outdir.display()))?;

        let mut result = BuildResult::default();
        let mut outputs = HashSet::new();
        let mut tasks = Vec::with_capacity(self.stylesheets.len());

        for input in &self.stylesheets {
            let args = match entry_point(input) {
                Ok(args) => args,
                Err(err) => {
                    result.errors.push(Message {
                        text: format!("{err:#}"),
                        plugin_name: None,
                        file: Some(input.clone()),
                    });
                    continue;
                }
            };

            let output = self.outdir.join(&args.path);
            if !outputs.insert(output.clone()) {
                result.warnings.push(Message {
                    text: format!("overwrites {} written by an earlier stylesheet", output.display()),
                    plugin_name: None,
                    file: Some(input.clone()),
                });
            }

            let session = Arc::clone(&session);
            let task = tokio::task::spawn_blocking(move || session.resolve(&args));
            tasks.push((input.clone(), output, task));
        }

        let (meta, handles): (Vec<_>, Vec<_>) =
            tasks.into_iter().map(|(input, output, task)| ((input, output), task)).unzip();
        let resolutions = futures::future::join_all(handles).await;

        let mut bundled = Vec::new();
        for ((input, output), resolution) in meta.into_iter().zip(resolutions) {
            let resolved = match resolution {
                Ok(Ok(resolved)) => resolved,
                Ok(Err(failure)) => {
                    tracing::debug!("Resolving {} failed: {failure}", input.display());
                    result.errors.push(failure.to_message(Some(input)));
                    continue;
                }
                Err(join_error) => {
                    result.errors.push(Message {
                        text: format!("resolution task failed: {join_error}"),
                        plugin_name: None,
                        file: Some(input),
                    });
                    continue;
                }
            };

            if let Err(err) = tokio::fs::copy(&resolved.path, &output).await {
                result.errors.push(Message {
                    text: format!("failed to write {}: {err}", output.display()),
                    plugin_name: None,
                    file: Some(input),
                });
                continue;
            }

            tracing::info!("Bundled {} from {}", output.display(), resolved.path.display());
            bundled.push(BundledFile {
                input,
                resolved: resolved.path,
                output,
            });
        }

        let result = session.finish(result);
        Ok(BuildReport {
            bundled,
            result,
        })
    }
}

/// Turns a stylesheet path into the request a bundler makes for an entry
/// point: its file name, resolved against its directory.
fn entry_point(input: &Path) -> Result<OnResolveArgs> {
    let absolute =
        std::path::absolute(input).with_context(|| format!("Failed to make {} absolute", input.display()))?;
    let name = absolute
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| anyhow!("{} does not name a file", input.display()))?;
    let dir = absolute.parent().ok_or_else(|| anyhow!("{} has no parent directory", input.display()))?;

    Ok(OnResolveArgs::new(name, dir))
}
