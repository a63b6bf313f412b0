//! tailwind-hook - Tailwind CSS compilation as a bundler resolve hook
//!
//! A build plugin that intercepts stylesheet resolution. Stylesheets that
//! contain `@tailwind` directives are compiled with the `tailwindcss`
//! executable into an intermediate `<stem>.tmp.css` next to the source, and
//! the bundler is redirected to that file. All other stylesheets resolve to
//! themselves. Intermediate files are deleted when the build ends.
//!
//! # Architecture Overview
//!
//! - The bundler calls the plugin's setup with its registration surface
//!   ([`plugin::PluginBuild`]); the plugin registers a resolve hook for
//!   paths ending in `.css` and an end hook.
//! - The resolve hook ([`plugin::InterceptionPipeline::resolve`]) reads the
//!   stylesheet, locates the compiler and an optional `tailwind.config.js` by
//!   walking up from the stylesheet's directory, and runs the compiler.
//! - Every intermediate path handed to the compiler is recorded, whether or
//!   not compilation succeeded; the end hook removes them all.
//!
//! # Core Modules
//!
//! - [`plugin`] - Plugin contract, the interception pipeline and an in-process build host
//! - [`tool`] - Locating and running the compiler
//! - [`config`] - Optional `twhook.toml` settings
//! - [`core`] - Error types and user-facing error reporting
//! - [`utils`] - Ancestor-directory search, intermediate paths and `PATH` lookup
//! - [`cli`] - The `twhook` command-line interface
//!
//! # Usage
//!
//! ```rust,no_run
//! use tailwind_hook::config::PluginConfig;
//! use tailwind_hook::plugin::session::BuildSession;
//! use tailwind_hook::plugin::{BuildResult, OnResolveArgs, tailwind_plugin};
//!
//! # fn main() -> anyhow::Result<()> {
//! let session = BuildSession::new().with_plugin(&tailwind_plugin(PluginConfig::default()))?;
//!
//! let resolved = session.resolve(&OnResolveArgs::new("app.css", "/project/src"))?;
//! println!("bundling {}", resolved.path.display());
//!
//! let result = session.finish(BuildResult::default());
//! assert!(result.errors.is_empty());
//! # Ok(())
//! # }
//! ```
//!
//! ## Command line
//!
//! ```bash
//! # Compile and bundle stylesheets into dist/
//! twhook build src/app.css
//!
//! # Check which compiler would be used
//! twhook locate src/app.css
//! ```

pub mod cli;
pub mod config;
pub mod constants;
pub mod core;
pub mod plugin;
pub mod tool;
pub mod utils;

// test_utils is available for both unit tests and integration tests
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
