//! Stylesheet interception and intermediate-file lifecycle.
//!
//! One [`InterceptionPipeline`] serves one build pass:
//!
//! ```text
//! Idle -> Intercepting (0..n) -> Finalizing -> Idle
//! ```
//!
//! Each stylesheet resolution reads the file. If it contains the
//! `@tailwind` marker, the file is compiled into `<stem>.tmp.css` next to
//! the source and that path is returned instead. Every intermediate path is
//! remembered. When the build ends all of them are deleted, whether or not
//! compilation succeeded, and the list starts over empty.

use std::path::PathBuf;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::config::PluginConfig;
use crate::constants::{FILE_NAMESPACE, PLUGIN_NAME, STYLESHEET_FILTER, TAILWIND_MARKER, TEMP_SUFFIX};
use crate::core::HookError;
use crate::plugin::{BuildResult, OnEndResult, OnResolveArgs, OnResolveOptions, OnResolveResult, Plugin};
use crate::tool::{ToolInvocation, ToolLocator};
use crate::utils::fs::{normalize_path, remove_file_quietly, temp_output_path};

/// Per-build state of the tailwind plugin.
///
/// Shared between the resolve hook and the end hook through an [`Arc`]. The
/// list of intermediate files is behind a mutex because the bundler may
/// resolve several stylesheets at once.
#[derive(Debug)]
pub struct InterceptionPipeline {
    locator: ToolLocator,
    marker: String,
    minify: bool,
    pending: Mutex<Vec<PathBuf>>,
}

impl InterceptionPipeline {
    /// Creates a pipeline with the default locator and marker.
    #[must_use]
    pub fn new(minify: bool) -> Self {
        Self {
            locator: ToolLocator::default(),
            marker: TAILWIND_MARKER.to_string(),
            minify,
            pending: Mutex::new(Vec::new()),
        }
    }

    /// Creates a pipeline from loaded configuration.
    #[must_use]
    pub fn from_config(config: &PluginConfig) -> Self {
        Self::new(config.minify).with_locator(config.locator()).with_marker(config.marker.clone())
    }

    #[must_use]
    pub fn with_locator(mut self, locator: ToolLocator) -> Self {
        self.locator = locator;
        self
    }

    #[must_use]
    pub fn with_marker(mut self, marker: impl Into<String>) -> Self {
        self.marker = marker.into();
        self
    }

    /// Whether compiled output is minified.
    #[must_use]
    pub const fn minify(&self) -> bool {
        self.minify
    }

    /// Resolves one stylesheet request.
    ///
    /// Stylesheets without the marker resolve to themselves and nothing else
    /// happens. Marked stylesheets are compiled and resolve to the
    /// intermediate file.
    ///
    /// # Errors
    ///
    /// - [`HookError::ReadFailure`] if the stylesheet cannot be read
    /// - [`HookError::CompilerNotFound`] if no compiler exists; nothing is tracked
    /// - [`HookError::Compile`] if the compiler could not run or failed; the
    ///   intermediate path is tracked and removed at the end of the build
    pub fn resolve(&self, args: &OnResolveArgs) -> Result<OnResolveResult, HookError> {
        let source = normalize_path(&args.resolve_dir.join(&args.path));

        let contents = std::fs::read(&source).map_err(|source_err| HookError::ReadFailure {
            path: source.clone(),
            source: source_err,
        })?;

        if !String::from_utf8_lossy(&contents).contains(&self.marker) {
            tracing::trace!("{} has no {} directives", source.display(), self.marker);
            return Ok(OnResolveResult::file(source));
        }

        let binary = self.locator.locate_compiler(&source)?;
        let config = self.locator.locate_config(&source);
        let output = temp_output_path(&source, TEMP_SUFFIX);
        self.track(output.clone());

        let invocation =
            ToolInvocation::new(binary, &source, &output).config(config).minify(self.minify);

        match invocation.execute() {
            Ok(_) => {
                tracing::debug!("Compiled {} into {}", source.display(), output.display());
                Ok(OnResolveResult::file(output))
            }
            Err(err) => {
                tracing::warn!("Failed to compile {}: {err}", source.display());
                Err(HookError::Compile {
                    output,
                    source: Box::new(err),
                })
            }
        }
    }

    /// Ends the build pass.
    ///
    /// Removes every tracked intermediate file, ignoring removal failures,
    /// and leaves the pipeline with nothing tracked. The build's own errors
    /// and warnings are handed back untouched.
    pub fn finalize(&self, result: &BuildResult) -> OnEndResult {
        let artifacts = std::mem::take(&mut *self.lock_pending());
        let removed = artifacts.iter().filter(|path| remove_file_quietly(path)).count();

        if !artifacts.is_empty() {
            tracing::debug!("Removed {removed} of {} intermediate stylesheet(s)", artifacts.len());
        }

        OnEndResult {
            errors: result.errors.clone(),
            warnings: result.warnings.clone(),
        }
    }

    /// Intermediate files tracked so far, in the order they were produced.
    #[must_use]
    pub fn pending(&self) -> Vec<PathBuf> {
        self.lock_pending().clone()
    }

    /// Forgets every tracked file without deleting anything.
    ///
    /// Returns what was tracked.
    pub fn reset(&self) -> Vec<PathBuf> {
        std::mem::take(&mut *self.lock_pending())
    }

    fn track(&self, path: PathBuf) {
        self.lock_pending().push(path);
    }

    // A panic while holding the lock cannot leave the Vec half-updated
    fn lock_pending(&self) -> MutexGuard<'_, Vec<PathBuf>> {
        self.pending.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Creates the `tailwind` plugin.
///
/// Every call to the plugin's setup creates a fresh pipeline, so a plugin
/// value registered with several builds keeps their intermediate files
/// apart.
#[must_use]
pub fn tailwind_plugin(config: PluginConfig) -> Plugin {
    Plugin::new(PLUGIN_NAME, move |build| {
        let pipeline = Arc::new(InterceptionPipeline::from_config(&config));

        let resolver = Arc::clone(&pipeline);
        build.on_resolve(
            OnResolveOptions::new(STYLESHEET_FILTER, FILE_NAMESPACE)?,
            Arc::new(move |args: &OnResolveArgs| resolver.resolve(args)),
        );

        build.on_end(Arc::new(move |result: &BuildResult| pipeline.finalize(result)));
        Ok(())
    })
}
