//! Error handling for tailwind-hook
//!
//! Two layers, mirroring how the crate is used:
//!
//! - [`HookError`] is the strongly-typed error returned by the resolution hook,
//!   the tool locator and the compiler invocation. Every variant is scoped to a
//!   single resolution request; none of them leave the pipeline in a bad state.
//! - [`ErrorContext`] wraps any [`anyhow::Error`] reaching the CLI with
//!   details and a suggestion, printed in color by [`ErrorContext::display`].
//!
//! Cleanup failures never appear here. Deleting intermediate files is
//! best-effort and its errors are swallowed at the call site.
//!
//! # Examples
//!
//! ```rust,no_run
//! use tailwind_hook::core::{HookError, user_friendly_error};
//!
//! let err = HookError::Config {
//!     path: "twhook.toml".into(),
//!     message: "expected a boolean".to_string(),
//! };
//! user_friendly_error(anyhow::Error::from(err)).display();
//! ```

use colored::Colorize;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// The main error type for resolution-hook operations.
///
/// # Error Categories
///
/// - **Lookup**: [`HookError::CompilerNotFound`]
/// - **Source access**: [`HookError::ReadFailure`]
/// - **Invocation**: [`HookError::Spawn`], [`HookError::CompilerFailed`],
///   wrapped by [`HookError::Compile`] once an output path is tracked
/// - **Setup**: [`HookError::InvalidFilter`], [`HookError::Config`]
#[derive(Error, Debug)]
pub enum HookError {
    /// The compiler was found neither in a project-local install, nor as a
    /// bare file in an ancestor directory, nor on the search path.
    #[error("{name} not found in node_modules, ancestor directories or PATH")]
    CompilerNotFound {
        /// Executable name that was searched for
        name: String,
        /// Error from the final search-path lookup
        #[source]
        source: which::Error,
    },

    /// A stylesheet selected by the resolve filter could not be read.
    #[error("failed to read stylesheet {}", path.display())]
    ReadFailure {
        /// Absolute path of the stylesheet
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The compiler process could not be started.
    #[error("failed to execute {}", binary.display())]
    Spawn {
        /// Binary that was executed
        binary: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The compiler ran but exited unsuccessfully.
    #[error("{} failed on {} ({status})", binary.display(), input.display())]
    CompilerFailed {
        /// Binary that was executed
        binary: PathBuf,
        /// Stylesheet passed with `-i`
        input: PathBuf,
        /// Exit status as reported by the OS
        status: String,
        /// Captured standard error, possibly empty
        stderr: String,
    },

    /// Compilation into a tracked output path failed.
    ///
    /// The output path is still scheduled for removal at the end of the build.
    #[error("failed to compile stylesheet into {}", output.display())]
    Compile {
        /// Intermediate file that was requested from the compiler
        output: PathBuf,
        /// The invocation failure
        #[source]
        source: Box<HookError>,
    },

    /// A resolve filter was not a valid regular expression.
    #[error("invalid resolve filter")]
    InvalidFilter(#[from] regex::Error),

    /// The plugin configuration could not be loaded.
    #[error("invalid configuration in {}: {message}", path.display())]
    Config {
        /// Configuration file
        path: PathBuf,
        /// Description of the problem
        message: String,
    },
}

impl HookError {
    /// Returns the innermost invocation error for [`HookError::Compile`],
    /// or `self` for every other variant.
    #[must_use]
    pub fn root(&self) -> &HookError {
        match self {
            HookError::Compile {
                source, ..
            } => source.root(),
            other => other,
        }
    }
}

/// Error wrapper carrying a user-facing suggestion and details.
///
/// Produced by [`user_friendly_error`] in the CLI's `main`.
pub struct ErrorContext {
    /// The error being reported
    pub error: anyhow::Error,
    /// What the user can do about it
    pub suggestion: Option<String>,
    /// Background on why it happens
    pub details: Option<String>,
}

impl ErrorContext {
    #[must_use]
    pub const fn new(error: anyhow::Error) -> Self {
        Self {
            error,
            suggestion: None,
            details: None,
        }
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Print the error to stderr with colored labels.
    pub fn display(&self) {
        eprintln!("{}: {:#}", "error".red().bold(), self.error);

        if let Some(details) = &self.details {
            eprintln!("{}: {}", "details".yellow(), details);
        }

        if let Some(suggestion) = &self.suggestion {
            eprintln!("{}: {}", "suggestion".green(), suggestion);
        }
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#}", self.error)?;

        if let Some(details) = &self.details {
            write!(f, "\nDetails: {details}")?;
        }

        if let Some(suggestion) = &self.suggestion {
            write!(f, "\nSuggestion: {suggestion}")?;
        }

        Ok(())
    }
}

impl fmt::Debug for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ErrorContext")
            .field("error", &format_args!("{:#}", self.error))
            .field("suggestion", &self.suggestion)
            .field("details", &self.details)
            .finish()
    }
}

/// Attach a suggestion and details to an error based on what caused it.
///
/// Looks through the error chain for a [`HookError`] first, then for plain
/// I/O errors. Anything else is returned without annotations.
#[must_use]
pub fn user_friendly_error(error: anyhow::Error) -> ErrorContext {
    let hook_error = error.chain().find_map(|cause| cause.downcast_ref::<HookError>());

    if let Some(hook_error) = hook_error {
        let (suggestion, details) = match hook_error.root() {
            HookError::CompilerNotFound {
                ..
            } => (
                "Install it in the project with 'npm install -D tailwindcss' or put the standalone binary on your PATH",
                "The compiler is looked up in node_modules/.bin, then in ancestor directories, then on PATH",
            ),
            HookError::ReadFailure {
                ..
            } => (
                "Check that the stylesheet exists and is readable",
                "Stylesheets are read in full to check for @tailwind directives",
            ),
            HookError::Spawn {
                ..
            } => (
                "Check that the compiler binary is executable",
                "The compiler was found but the operating system refused to start it",
            ),
            HookError::CompilerFailed {
                stderr, ..
            } if !stderr.trim().is_empty() => {
                let details = stderr.trim().to_string();
                return ErrorContext::new(error)
                    .with_suggestion("Fix the reported problem in the stylesheet or tailwind.config.js")
                    .with_details(details);
            }
            HookError::CompilerFailed {
                ..
            } => (
                "Run the compiler manually with the same arguments to see its output",
                "The compiler exited unsuccessfully without writing to stderr",
            ),
            HookError::InvalidFilter(_) => (
                "Use a valid regular expression for the resolve filter",
                "Resolve filters are compiled with the regex crate",
            ),
            HookError::Config {
                ..
            } => (
                "Check the syntax of your twhook.toml",
                "Every key is optional; unknown keys are rejected",
            ),
            HookError::Compile {
                ..
            } => unreachable!("root() never returns Compile"),
        };
        return ErrorContext::new(error).with_suggestion(suggestion).with_details(details);
    }

    if let Some(io_error) = error.downcast_ref::<std::io::Error>() {
        match io_error.kind() {
            std::io::ErrorKind::PermissionDenied => {
                return ErrorContext::new(error)
                    .with_suggestion("Check file ownership and permissions")
                    .with_details("tailwind-hook could not read or write a file");
            }
            std::io::ErrorKind::NotFound => {
                return ErrorContext::new(error)
                    .with_suggestion("Check that the file or directory exists and the path is correct");
            }
            _ => {}
        }
    }

    ErrorContext::new(error)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compile_error_root_unwraps_nested_failure() {
        let inner = HookError::CompilerFailed {
            binary: PathBuf::from("/bin/tailwindcss"),
            input: PathBuf::from("/src/app.css"),
            status: "exit status: 1".to_string(),
            stderr: String::new(),
        };
        let err = HookError::Compile {
            output: PathBuf::from("/src/app.tmp.css"),
            source: Box::new(inner),
        };

        assert!(matches!(err.root(), HookError::CompilerFailed { .. }));
        assert_eq!(err.to_string(), "failed to compile stylesheet into /src/app.tmp.css");
    }

    #[test]
    fn test_user_friendly_error_for_missing_compiler() {
        let err = HookError::CompilerNotFound {
            name: "tailwindcss".to_string(),
            source: which::Error::CannotFindBinaryPath,
        };
        let ctx = user_friendly_error(anyhow::Error::from(err));

        assert!(ctx.suggestion.as_deref().unwrap().contains("npm install"));
        assert!(ctx.to_string().contains("tailwindcss not found"));
    }

    #[test]
    fn test_user_friendly_error_uses_compiler_stderr() {
        let err = HookError::Compile {
            output: PathBuf::from("/src/app.tmp.css"),
            source: Box::new(HookError::CompilerFailed {
                binary: PathBuf::from("tailwindcss"),
                input: PathBuf::from("/src/app.css"),
                status: "exit status: 2".to_string(),
                stderr: "CssSyntaxError: Unclosed block\n".to_string(),
            }),
        };
        let ctx = user_friendly_error(anyhow::Error::from(err).context("building app.css"));

        assert_eq!(ctx.details.as_deref(), Some("CssSyntaxError: Unclosed block"));
    }

    #[test]
    fn test_user_friendly_error_passes_through_unknown_errors() {
        let ctx = user_friendly_error(anyhow::anyhow!("something else"));
        assert!(ctx.suggestion.is_none());
        assert!(ctx.details.is_none());
        assert_eq!(ctx.to_string(), "something else");
    }
}
