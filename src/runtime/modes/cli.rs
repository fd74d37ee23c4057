//! CLI mode
//!
//! This module contains the CLI mode startup logic.
//! It delegates to the actual CLI implementation.

use clap::{CommandFactory, Parser};

use crate::cli::Cli;
use crate::interfaces::cli::{CliError, run_cli_command};
use crate::runtime::lifetime;

/// Run CLI mode
///
/// This function:
/// 1. Performs pre-startup processing for CLI/TUI modes
/// 2. Parses the command line and dispatches the subcommand
pub async fn run_cli() -> Result<(), CliError> {
    lifetime::startup::cli_tui_pre_startup().await;

    let cli = Cli::parse();
    match cli.command {
        // Reached when flags precede the subcommand, e.g.
        // `termfolio -p me.toml tui`; bare `termfolio tui` never gets here.
        #[cfg(feature = "tui")]
        Some(crate::cli::Commands::Tui) => crate::runtime::run_tui(cli.portfolio)
            .await
            .map_err(|e| CliError::ConfigError(e.to_string())),
        Some(cmd) => run_cli_command(cmd, cli.portfolio).await,
        None => {
            // Only reachable with bare flags, e.g. `termfolio -p x.toml`.
            Cli::command()
                .print_help()
                .map_err(|e| CliError::ConfigError(e.to_string()))?;
            Ok(())
        }
    }
}
