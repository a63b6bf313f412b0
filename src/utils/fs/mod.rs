//! File system utilities for cross-platform file operations
//!
//! # Modules
//!
//! - [`paths`] - Lexical normalization and the upward ancestor search
//! - [`temp`] - Naming and best-effort removal of intermediate stylesheets
//!
//! # Examples
//!
//! ```rust,no_run
//! use tailwind_hook::utils::fs::{find_file, remove_file_quietly, temp_output_path};
//! use std::path::Path;
//!
//! let source = Path::new("/srv/app/src/styles.css");
//! let config = find_file(source, "tailwind.config.js");
//! let tmp = temp_output_path(source, ".tmp.css");
//! // ... compile into `tmp`, bundle it ...
//! remove_file_quietly(&tmp);
//! # let _ = config;
//! ```

pub mod paths;
pub mod temp;

pub use paths::{ancestor_dirs, find_file, normalize_path};
pub use temp::{remove_file_quietly, temp_output_path};
