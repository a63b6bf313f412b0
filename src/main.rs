//! twhook CLI entry point
//!
//! Parses arguments, runs the command and prints failures with the
//! suggestions from [`tailwind_hook::core::user_friendly_error`].
//!
//! - `build` - Compile and bundle stylesheets through the tailwind plugin
//! - `locate` - Show the compiler and configuration file for a stylesheet

use anyhow::Result;
use clap::Parser;
use tailwind_hook::cli;
use tailwind_hook::core::user_friendly_error;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    match cli.execute().await {
        Ok(()) => Ok(()),
        Err(e) => {
            user_friendly_error(e).display();
            std::process::exit(1);
        }
    }
}
