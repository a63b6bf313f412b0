//! Configuration management for tailwind-hook
//!
//! The plugin reads a single optional TOML file, `twhook.toml` by default,
//! with the names the tool locator searches for and the minify switch. See
//! [`PluginConfig`] for the keys and their defaults.
//!
//! # Examples
//!
//! ```rust,no_run
//! use tailwind_hook::config::PluginConfig;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let config = PluginConfig::load_with_optional(None).await?.with_minify(true);
//! let locator = config.locator();
//! # let _ = locator;
//! # Ok(())
//! # }
//! ```

mod plugin;

pub use plugin::PluginConfig;
