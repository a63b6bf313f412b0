//! Integration test suite for twhook
//!
//! End-to-end tests that run the `twhook` binary against temporary projects.
//! Tests needing a compiler install a shell-script stand-in and are therefore
//! Unix-only.
//!
//! # Running Integration Tests
//!
//! ```bash
//! cargo test --test integration
//! ```
//!
//! # Test Organization
//!
//! - **build**: Compiling, passing through and cleaning up stylesheets
//! - **config**: `twhook.toml` handling and global flags
//! - **locate**: Compiler and configuration file lookup

#[path = "../common/mod.rs"]
mod common;

mod build;
mod config;
mod locate;
