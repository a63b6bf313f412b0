//! Cross-platform utilities and helpers
//!
//! # Modules
//!
//! - [`fs`] - Ancestor search, path normalization and intermediate-file helpers
//! - [`platform`] - Executable lookup on the search path
//!
//! # Example
//!
//! ```rust,no_run
//! use tailwind_hook::utils::{find_file, find_on_path};
//! use std::path::Path;
//!
//! let local = find_file(Path::new("/srv/app/src/app.css"), "node_modules/.bin/tailwindcss");
//! let global = find_on_path("tailwindcss", None);
//! # let _ = (local, global);
//! ```

pub mod fs;
pub mod platform;

pub use fs::{find_file, normalize_path, remove_file_quietly, temp_output_path};
pub use platform::find_on_path;
