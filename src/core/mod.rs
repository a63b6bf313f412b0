//! Core types for tailwind-hook
//!
//! Currently this is the error layer shared by every other module:
//! - [`HookError`] - Enumerated failures of the resolution hook and its collaborators
//! - [`ErrorContext`] - User-friendly error wrapper with suggestions and details
//! - [`user_friendly_error`] - Convert any error to the user-friendly format

pub mod error;

pub use error::{ErrorContext, HookError, user_friendly_error};
