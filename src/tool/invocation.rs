//! Command construction and execution for the CSS compiler.
//!
//! The compiler is always called with the same argument shape:
//!
//! ```text
//! <binary> -i <input> -o <output> [-c <config>] [-m]
//! ```
//!
//! Execution is synchronous and has no timeout: the resolution hook that
//! calls it blocks until the compiler exits.

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use crate::core::HookError;

/// A single compiler run.
///
/// Built fresh for every stylesheet; nothing is shared between invocations.
///
/// # Examples
///
/// ```rust,no_run
/// use tailwind_hook::tool::ToolInvocation;
///
/// # fn example() -> Result<(), tailwind_hook::core::HookError> {
/// ToolInvocation::new("/app/node_modules/.bin/tailwindcss", "/app/src/app.css", "/app/src/app.tmp.css")
///     .config(Some("/app/tailwind.config.js".into()))
///     .minify(true)
///     .execute()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolInvocation {
    /// Compiler executable
    pub binary: PathBuf,
    /// Stylesheet passed with `-i`
    pub input: PathBuf,
    /// Destination passed with `-o`
    pub output: PathBuf,
    /// Configuration file passed with `-c`, if one was found
    pub config: Option<PathBuf>,
    /// Whether `-m` is passed
    pub minify: bool,
}

/// Captured output of a successful compiler run.
#[derive(Debug, Clone, Default)]
pub struct ToolOutput {
    /// Standard output; the pipeline does not use it
    pub stdout: String,
    /// Standard error, which the compiler uses for progress messages
    pub stderr: String,
}

impl ToolInvocation {
    /// Creates an invocation without configuration file and without minification.
    pub fn new(binary: impl Into<PathBuf>, input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            binary: binary.into(),
            input: input.into(),
            output: output.into(),
            config: None,
            minify: false,
        }
    }

    /// Sets the configuration file, or clears it with `None`.
    #[must_use]
    pub fn config(mut self, config: Option<PathBuf>) -> Self {
        self.config = config;
        self
    }

    /// Enables or disables minified output.
    #[must_use]
    pub const fn minify(mut self, minify: bool) -> Self {
        self.minify = minify;
        self
    }

    /// Returns the argument list, without the binary itself.
    #[must_use]
    pub fn args(&self) -> Vec<OsString> {
        let mut args: Vec<OsString> = vec![
            "-i".into(),
            self.input.clone().into_os_string(),
            "-o".into(),
            self.output.clone().into_os_string(),
        ];

        if let Some(config) = &self.config {
            args.push("-c".into());
            args.push(config.clone().into_os_string());
        }

        if self.minify {
            args.push("-m".into());
        }

        args
    }

    /// Runs the compiler and waits for it to exit.
    ///
    /// Both output streams are captured. Success is decided by the exit
    /// status alone; whatever the compiler printed is never inspected.
    ///
    /// # Errors
    ///
    /// - [`HookError::Spawn`] if the process could not be started
    /// - [`HookError::CompilerFailed`] if it exited unsuccessfully, including
    ///   termination by a signal
    pub fn execute(&self) -> Result<ToolOutput, HookError> {
        let args = self.args();
        let start = std::time::Instant::now();

        tracing::debug!(
            target: "tool",
            "Executing command: {} {}",
            self.binary.display(),
            display_args(&args)
        );

        let output = Command::new(&self.binary)
            .args(&args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .map_err(|source| HookError::Spawn {
                binary: self.binary.clone(),
                source,
            })?;

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();

        if !output.status.success() {
            tracing::debug!(target: "tool", "Command failed with exit code: {:?}", output.status.code());
            if !stderr.is_empty() {
                tracing::debug!(target: "tool", "Error: {}", stderr.trim());
            }

            return Err(HookError::CompilerFailed {
                binary: self.binary.clone(),
                input: self.input.clone(),
                status: output.status.to_string(),
                stderr,
            });
        }

        let elapsed = start.elapsed();
        if elapsed.as_millis() > 100 {
            tracing::debug!(
                target: "tool::perf",
                "{} took {}ms",
                file_name(&self.binary),
                elapsed.as_millis()
            );
        }

        Ok(ToolOutput {
            stdout,
            stderr,
        })
    }
}

fn display_args(args: &[OsString]) -> String {
    args.iter().map(|arg| arg.to_string_lossy()).collect::<Vec<_>>().join(" ")
}

fn file_name(path: &Path) -> String {
    path.file_name().map_or_else(|| path.display().to_string(), |name| name.to_string_lossy().into_owned())
}
