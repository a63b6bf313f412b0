//! Global constants used throughout the tailwind-hook codebase.
//!
//! Names of the external compiler, its configuration file and the markers
//! the resolution hook looks for. Configuration can override most of these
//! (see [`crate::config::PluginConfig`]); the values here are the defaults.

/// Name under which the plugin registers with the build engine.
pub const PLUGIN_NAME: &str = "tailwind";

/// Executable name of the external CSS compiler.
pub const COMPILER_NAME: &str = "tailwindcss";

/// Project-local installation of the compiler, relative to a package root.
///
/// This is where `npm install tailwindcss` drops the launcher script.
pub const LOCAL_BINARY_PATH: &str = "node_modules/.bin/tailwindcss";

/// Configuration file the compiler is pointed at when one is found.
pub const CONFIG_FILE_NAME: &str = "tailwind.config.js";

/// Substring that marks a stylesheet as needing compilation.
pub const TAILWIND_MARKER: &str = "@tailwind";

/// Replaces the source extension on generated intermediate files.
pub const TEMP_SUFFIX: &str = ".tmp.css";

/// Resolve filter: any path with at least one character before `.css`.
pub const STYLESHEET_FILTER: &str = r".\.(css)$";

/// Build-engine namespace for on-disk files.
pub const FILE_NAMESPACE: &str = "file";

/// Default location of the CLI configuration file.
pub const DEFAULT_CONFIG_FILE: &str = "twhook.toml";
