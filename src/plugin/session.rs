//! In-process build host.
//!
//! [`BuildSession`] implements [`PluginBuild`] and plays the bundler's part:
//! it dispatches resolution requests to the first matching plugin hook and
//! runs end hooks when the build is finished. The `twhook build` command and
//! the integration tests drive plugins through it.

use std::path::PathBuf;

use thiserror::Error;

use crate::core::HookError;
use crate::plugin::{
    BuildResult, EndCallback, Message, OnResolveArgs, OnResolveOptions, OnResolveResult, Plugin, PluginBuild,
    ResolveCallback,
};
use crate::utils::fs::normalize_path;

/// A resolve hook failed for one request.
#[derive(Debug, Error)]
#[error("[plugin {plugin}] {error}")]
pub struct ResolveFailure {
    /// Plugin whose hook failed
    pub plugin: String,
    /// What went wrong
    #[source]
    pub error: HookError,
}

impl ResolveFailure {
    /// Converts the failure into a build error message about `file`.
    ///
    /// The message text carries the whole error chain, since a build message
    /// has no room for nested causes.
    #[must_use]
    pub fn to_message(&self, file: Option<PathBuf>) -> Message {
        let mut text = self.error.to_string();
        let mut cause = std::error::Error::source(&self.error);
        while let Some(err) = cause {
            text.push_str(": ");
            text.push_str(&err.to_string());
            cause = err.source();
        }
        if let HookError::CompilerFailed {
            stderr, ..
        } = self.error.root()
            && !stderr.trim().is_empty()
        {
            text.push('\n');
            text.push_str(stderr.trim());
        }

        Message {
            text,
            plugin_name: Some(self.plugin.clone()),
            file,
        }
    }
}

struct RegisteredResolver {
    plugin: String,
    options: OnResolveOptions,
    callback: ResolveCallback,
}

struct RegisteredEnd {
    plugin: String,
    callback: EndCallback,
}

/// Hooks registered by the plugins of one build.
///
/// Resolution takes `&self`, so a session shared across threads (directly or
/// in an `Arc`) can resolve many modules concurrently.
///
/// # Examples
///
/// ```rust,no_run
/// use tailwind_hook::config::PluginConfig;
/// use tailwind_hook::plugin::{BuildResult, OnResolveArgs, session::BuildSession, tailwind_plugin};
///
/// # fn example() -> anyhow::Result<()> {
/// let session = BuildSession::new().with_plugin(&tailwind_plugin(PluginConfig::default()))?;
///
/// let mut result = BuildResult::default();
/// match session.resolve(&OnResolveArgs::new("./app.css", "/srv/app/src")) {
///     Ok(resolved) => println!("bundling {}", resolved.path.display()),
///     Err(failure) => result.errors.push(failure.to_message(None)),
/// }
///
/// let result = session.finish(result);
/// # let _ = result;
/// # Ok(())
/// # }
/// ```
#[derive(Default)]
pub struct BuildSession {
    resolvers: Vec<RegisteredResolver>,
    end_hooks: Vec<RegisteredEnd>,
    current_plugin: String,
}

impl BuildSession {
    /// Creates a session without plugins.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `plugin` and returns the session.
    ///
    /// # Errors
    ///
    /// Fails when the plugin's setup does.
    pub fn with_plugin(mut self, plugin: &Plugin) -> Result<Self, HookError> {
        self.register(plugin)?;
        Ok(self)
    }

    /// Runs `plugin`'s setup against this session.
    ///
    /// # Errors
    ///
    /// Fails when the plugin's setup does. Hooks registered before the
    /// failure stay registered.
    pub fn register(&mut self, plugin: &Plugin) -> Result<(), HookError> {
        tracing::debug!("Registering plugin {}", plugin.name());
        self.current_plugin = plugin.name().to_string();
        let outcome = plugin.setup(self);
        self.current_plugin.clear();
        outcome
    }

    /// Names of the plugins with a registered resolve hook, in registration order.
    #[must_use]
    pub fn resolver_plugins(&self) -> Vec<&str> {
        self.resolvers.iter().map(|resolver| resolver.plugin.as_str()).collect()
    }

    /// Resolves one request.
    ///
    /// The first resolve hook whose options match handles the request.
    /// Without a match the path is joined onto the resolve directory.
    ///
    /// # Errors
    ///
    /// [`ResolveFailure`] when the handling hook fails.
    pub fn resolve(&self, args: &OnResolveArgs) -> Result<OnResolveResult, ResolveFailure> {
        let Some(resolver) = self.resolvers.iter().find(|resolver| resolver.options.matches(args)) else {
            tracing::trace!("No plugin handles {} in namespace {}", args.path, args.namespace);
            return Ok(OnResolveResult {
                path: normalize_path(&args.resolve_dir.join(&args.path)),
                namespace: args.namespace.clone(),
            });
        };

        (resolver.callback)(args).map_err(|error| ResolveFailure {
            plugin: resolver.plugin.clone(),
            error,
        })
    }

    /// Ends the build, running every end hook in registration order.
    ///
    /// Each hook sees the errors and warnings returned by the previous one.
    pub fn finish(&self, mut result: BuildResult) -> BuildResult {
        for hook in &self.end_hooks {
            tracing::trace!("Running end hook of plugin {}", hook.plugin);
            let end = (hook.callback)(&result);
            result.errors = end.errors;
            result.warnings = end.warnings;
        }
        result
    }
}

impl PluginBuild for BuildSession {
    fn on_resolve(&mut self, options: OnResolveOptions, callback: ResolveCallback) {
        self.resolvers.push(RegisteredResolver {
            plugin: self.current_plugin.clone(),
            options,
            callback,
        });
    }

    fn on_end(&mut self, callback: EndCallback) {
        self.end_hooks.push(RegisteredEnd {
            plugin: self.current_plugin.clone(),
            callback,
        });
    }
}
