//! Common test utilities for twhook integration tests
//!
//! Every [`TestProject`] is an isolated directory tree. Commands run with
//! `PATH` pointing at an empty directory, so a `tailwindcss` installed on the
//! machine running the tests is never picked up; tests that need a compiler
//! install a fake one inside the project.

// Not every test module uses every helper
#![allow(dead_code)]

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

/// Test project with its own directory tree and an empty search path.
pub struct TestProject {
    _temp_dir: TempDir, // Keep alive for RAII cleanup
    project_dir: PathBuf,
    empty_bin: PathBuf,
}

impl TestProject {
    /// Create a new, empty test project
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        // The binary sees the canonical working directory (macOS /var -> /private/var)
        let root = temp_dir.path().canonicalize()?;
        let project_dir = root.join("project");
        let empty_bin = root.join("empty-bin");

        fs::create_dir_all(&project_dir)?;
        fs::create_dir_all(&empty_bin)?;

        Ok(Self {
            _temp_dir: temp_dir,
            project_dir,
            empty_bin,
        })
    }

    /// Get the project directory path
    pub fn project_path(&self) -> &Path {
        &self.project_dir
    }

    /// Directory used as the only `PATH` entry
    pub fn search_path(&self) -> &Path {
        &self.empty_bin
    }

    /// Write a file relative to the project directory, creating parents
    pub fn write_file(&self, path: &str, content: &str) -> Result<PathBuf> {
        let file_path = self.project_dir.join(path);
        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&file_path, content).with_context(|| format!("Failed to write {}", file_path.display()))?;
        Ok(file_path)
    }

    /// Read a file relative to the project directory
    pub fn read_file(&self, path: &str) -> Result<String> {
        let file_path = self.project_dir.join(path);
        fs::read_to_string(&file_path).with_context(|| format!("Failed to read {}", file_path.display()))
    }

    /// Files below `dir` (relative to the project) whose names end in `.tmp.css`
    pub fn intermediate_files(&self, dir: &str) -> Vec<PathBuf> {
        let Ok(entries) = fs::read_dir(self.project_dir.join(dir)) else {
            return Vec::new();
        };
        entries
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|path| path.to_string_lossy().ends_with(".tmp.css"))
            .collect()
    }

    /// A preconfigured command for the twhook binary in the project directory
    pub fn command(&self) -> assert_cmd::Command {
        let mut cmd = assert_cmd::Command::cargo_bin("twhook").expect("twhook binary is built");
        cmd.current_dir(&self.project_dir)
            .env("PATH", &self.empty_bin)
            .env("NO_COLOR", "1")
            .env_remove("RUST_LOG");
        cmd
    }

    /// Run twhook in the project directory and capture its output
    pub fn run_twhook(&self, args: &[&str]) -> Result<CommandOutput> {
        let output = Command::new(env!("CARGO_BIN_EXE_twhook"))
            .args(args)
            .current_dir(&self.project_dir)
            .env("PATH", &self.empty_bin)
            .env("NO_COLOR", "1")
            .env_remove("RUST_LOG")
            .output()
            .context("Failed to run twhook command")?;

        Ok(CommandOutput {
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
            success: output.status.success(),
            code: output.status.code(),
        })
    }
}

/// Command output helper
pub struct CommandOutput {
    pub stdout: String,
    pub stderr: String,
    pub success: bool,
    pub code: Option<i32>,
}

impl CommandOutput {
    /// Assert the command succeeded
    pub fn assert_success(&self) -> &Self {
        assert!(self.success, "Command failed with code {:?}\nStderr: {}", self.code, self.stderr);
        self
    }

    /// Assert the command failed
    pub fn assert_failure(&self) -> &Self {
        assert!(!self.success, "Command unexpectedly succeeded\nStdout: {}", self.stdout);
        self
    }

    /// Assert stdout contains the given text
    pub fn assert_stdout_contains(&self, text: &str) -> &Self {
        assert!(self.stdout.contains(text), "Expected stdout to contain '{}'\nActual stdout: {}", text, self.stdout);
        self
    }

    /// Assert stderr contains the given text
    pub fn assert_stderr_contains(&self, text: &str) -> &Self {
        assert!(self.stderr.contains(text), "Expected stderr to contain '{}'\nActual stderr: {}", text, self.stderr);
        self
    }
}

/// File assertion helpers
pub struct FileAssert;

impl FileAssert {
    /// Assert a file exists
    pub fn exists(path: impl AsRef<Path>) {
        let path = path.as_ref();
        assert!(path.exists(), "Expected file to exist: {}", path.display());
    }

    /// Assert a file does not exist
    pub fn not_exists(path: impl AsRef<Path>) {
        let path = path.as_ref();
        assert!(!path.exists(), "Expected file to not exist: {}", path.display());
    }

    /// Assert a file has exact content
    pub fn equals(path: impl AsRef<Path>, expected: &str) {
        let path = path.as_ref();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read file {}: {}", path.display(), e));
        assert_eq!(content, expected, "File {} content mismatch", path.display());
    }
}
