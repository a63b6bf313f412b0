//! Build-engine plugin contract
//!
//! A bundler drives plugins through two hooks:
//!
//! - **resolve hooks** turn a module reference (`./styles.css` imported from
//!   some directory) into a concrete path. A hook is registered with a path
//!   filter and a namespace and only sees matching requests.
//! - **end hooks** run once after the build, receive its accumulated errors
//!   and warnings, and hand back the (possibly changed) lists.
//!
//! The bundler owns scheduling: resolve hooks may run concurrently on
//! several threads, so callbacks are `Send + Sync`.
//!
//! [`session::BuildSession`] is an in-process host for these hooks and
//! [`pipeline::tailwind_plugin`] is the plugin this crate provides.
//!
//! # Examples
//!
//! ```rust,no_run
//! use tailwind_hook::config::PluginConfig;
//! use tailwind_hook::plugin::{BuildResult, OnResolveArgs, session::BuildSession, tailwind_plugin};
//!
//! # fn example() -> anyhow::Result<()> {
//! let session = BuildSession::new().with_plugin(&tailwind_plugin(PluginConfig::default()))?;
//! let resolved = session.resolve(&OnResolveArgs::new("./styles.css", "/srv/app/src"))?;
//! println!("bundling {}", resolved.path.display());
//! let result = session.finish(BuildResult::default());
//! assert!(result.errors.is_empty());
//! # Ok(())
//! # }
//! ```

pub mod pipeline;
pub mod session;

use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use regex::Regex;

use crate::constants::FILE_NAMESPACE;
use crate::core::HookError;

pub use pipeline::{InterceptionPipeline, tailwind_plugin};

/// Callback invoked for matching resolution requests.
pub type ResolveCallback = Arc<dyn Fn(&OnResolveArgs) -> Result<OnResolveResult, HookError> + Send + Sync>;

/// Callback invoked once when the build ends.
pub type EndCallback = Arc<dyn Fn(&BuildResult) -> OnEndResult + Send + Sync>;

/// Which resolution requests a resolve hook receives.
#[derive(Debug, Clone)]
pub struct OnResolveOptions {
    /// Pattern matched against the requested path
    pub filter: Regex,
    /// Namespace the request must belong to
    pub namespace: String,
}

impl OnResolveOptions {
    /// Compiles `filter` and pairs it with `namespace`.
    ///
    /// # Errors
    ///
    /// [`HookError::InvalidFilter`] if `filter` is not a valid regex.
    pub fn new(filter: &str, namespace: impl Into<String>) -> Result<Self, HookError> {
        Ok(Self {
            filter: Regex::new(filter)?,
            namespace: namespace.into(),
        })
    }

    /// Whether a request falls under these options.
    #[must_use]
    pub fn matches(&self, args: &OnResolveArgs) -> bool {
        args.namespace == self.namespace && self.filter.is_match(&args.path)
    }
}

/// A resolution request as the bundler sees it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OnResolveArgs {
    /// The path as written in the import statement
    pub path: String,
    /// Directory the import is resolved against
    pub resolve_dir: PathBuf,
    /// Module containing the import, if any
    pub importer: Option<PathBuf>,
    /// Namespace of the importing module
    pub namespace: String,
}

impl OnResolveArgs {
    /// Creates a request in the `file` namespace without an importer.
    pub fn new(path: impl Into<String>, resolve_dir: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            resolve_dir: resolve_dir.into(),
            importer: None,
            namespace: FILE_NAMESPACE.to_string(),
        }
    }

    #[must_use]
    pub fn with_importer(mut self, importer: impl Into<PathBuf>) -> Self {
        self.importer = Some(importer.into());
        self
    }

    #[must_use]
    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = namespace.into();
        self
    }
}

/// Where a request was resolved to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OnResolveResult {
    /// Absolute path of the module to load
    pub path: PathBuf,
    /// Namespace of the resolved module
    pub namespace: String,
}

impl OnResolveResult {
    /// A result in the `file` namespace.
    pub fn file(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            namespace: FILE_NAMESPACE.to_string(),
        }
    }
}

/// An error or warning attached to a build.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Message {
    /// Human-readable description
    pub text: String,
    /// Plugin that produced the message, if any
    pub plugin_name: Option<String>,
    /// File the message is about, if any
    pub file: Option<PathBuf>,
}

impl Message {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(plugin) = &self.plugin_name {
            write!(f, "[plugin {plugin}] ")?;
        }
        if let Some(file) = &self.file {
            write!(f, "{}: ", file.display())?;
        }
        f.write_str(&self.text)
    }
}

/// Errors and warnings accumulated over a build.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BuildResult {
    pub errors: Vec<Message>,
    pub warnings: Vec<Message>,
}

/// What an end hook hands back to the bundler.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct OnEndResult {
    pub errors: Vec<Message>,
    pub warnings: Vec<Message>,
}

/// Registration surface a bundler offers to plugins during setup.
pub trait PluginBuild {
    /// Registers a resolve hook for requests matching `options`.
    fn on_resolve(&mut self, options: OnResolveOptions, callback: ResolveCallback);

    /// Registers a hook to run when the build ends.
    fn on_end(&mut self, callback: EndCallback);
}

type SetupFn = dyn Fn(&mut dyn PluginBuild) -> Result<(), HookError> + Send + Sync;

/// A named plugin with its setup routine.
pub struct Plugin {
    name: String,
    setup: Box<SetupFn>,
}

impl Plugin {
    pub fn new(
        name: impl Into<String>,
        setup: impl Fn(&mut dyn PluginBuild) -> Result<(), HookError> + Send + Sync + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            setup: Box::new(setup),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Runs the setup routine, letting the plugin register its hooks.
    ///
    /// # Errors
    ///
    /// Whatever the setup routine reports, typically an invalid filter.
    pub fn setup(&self, build: &mut dyn PluginBuild) -> Result<(), HookError> {
        (self.setup)(build)
    }
}

impl fmt::Debug for Plugin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Plugin").field("name", &self.name).finish_non_exhaustive()
    }
}
