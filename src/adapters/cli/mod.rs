//! CLI Adapter
//!
//! Command-line interface for the token scanner.
//! Uses clap derive macros for argument parsing.

mod commands;

pub use commands::{CliApp, Command, LookupCmd, RunCmd, ScanCmd};

use anyhow::Result;

/// Initialize the CLI application
pub fn init() -> CliApp {
    use clap::Parser;
    CliApp::parse()
}

/// Execute the CLI command
pub async fn execute(app: CliApp) -> Result<()> {
    commands::execute(app).await
}
