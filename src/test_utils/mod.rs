//! Test utilities for tailwind-hook
//!
//! Shared by unit tests and, through the `test-utils` feature, by the
//! integration tests:
//! - [`init_test_logging`] to see `tracing` output from tests
//! - [`fixtures`] with sample stylesheets and a fake compiler script
//!
//! # Example
//!
//! ```rust,no_run
//! use tailwind_hook::test_utils::fixtures::{FakeCompiler, MARKED_STYLESHEET, write_stylesheet};
//!
//! let temp = tempfile::tempdir().unwrap();
//! write_stylesheet(temp.path(), "app.css", MARKED_STYLESHEET);
//! let compiler = FakeCompiler::succeeding(&temp.path().join("bin"));
//! assert_eq!(compiler.invocations(), 0);
//! ```

pub mod fixtures;

use std::sync::Once;
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Global flag to ensure logging is only initialized once in tests
static INIT_LOGGING: Once = Once::new();

/// Initialize logging for tests.
///
/// Only the first call has an effect. Uses `level` if given, otherwise
/// `RUST_LOG`; with neither, tests run without a subscriber.
///
/// ```bash
/// RUST_LOG=tailwind_hook=trace cargo test
/// ```
pub fn init_test_logging(level: Option<Level>) {
    INIT_LOGGING.call_once(|| {
        let filter = if let Some(level) = level {
            EnvFilter::new(level.to_string())
        } else if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else {
            return;
        };

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .with_target(true)
            .with_thread_ids(false)
            .try_init();
    });
}
