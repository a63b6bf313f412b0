//! External compiler orchestration
//!
//! Everything the hook needs to know about the CSS compiler lives here:
//!
//! - [`locator`] - Finding the binary and the nearest configuration file
//! - [`invocation`] - Building the command line and running it
//!
//! The compiler itself is opaque. Only its command line and its exit status
//! matter.

pub mod invocation;
pub mod locator;

pub use invocation::{ToolInvocation, ToolOutput};
pub use locator::{ToolLocator, locate_compiler, locate_config};
