//! CLI interface module
//!
//! This module provides command-line interface functionality for termfolio.

pub mod commands;

use std::fmt;

use crate::cli::{Commands, ConfigCommands};
use commands::{about, config_management, send_message};

#[derive(Debug)]
pub enum CliError {
    ValidationError(String),
    RelayError(String),
    ConfigError(String),
    ContentError(String),
}

impl CliError {
    /// Format as simple output
    pub fn format_simple(&self) -> String {
        match self {
            CliError::ValidationError(msg) => format!("Validation error: {}", msg),
            CliError::RelayError(msg) => format!("Relay error: {}", msg),
            CliError::ConfigError(msg) => format!("Config error: {}", msg),
            CliError::ContentError(msg) => format!("Content error: {}", msg),
        }
    }

    /// Format as colored output
    pub fn format_colored(&self) -> String {
        use colored::Colorize;
        match self {
            CliError::ValidationError(msg) => {
                format!("{} {}", "Validation error:".yellow().bold(), msg.white())
            }
            CliError::RelayError(msg) => {
                format!("{} {}", "Relay error:".red().bold(), msg.white())
            }
            CliError::ConfigError(msg) => {
                format!("{} {}", "Config error:".red().bold(), msg.white())
            }
            CliError::ContentError(msg) => {
                format!("{} {}", "Content error:".red().bold(), msg.white())
            }
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for CliError {}

impl From<crate::errors::TermfolioError> for CliError {
    fn from(err: crate::errors::TermfolioError) -> Self {
        CliError::ContentError(err.to_string())
    }
}

/// Run a CLI command from clap-parsed input
pub async fn run_cli_command(cmd: Commands, portfolio: Option<String>) -> Result<(), CliError> {
    match cmd {
        Commands::Send {
            name,
            email,
            subject,
            message,
        } => send_message(name, email, subject, message).await,

        Commands::About => about(portfolio),

        Commands::Config { action } => match action {
            ConfigCommands::Generate { output_path, force } => {
                config_management::config_generate(output_path, force)
            }
            ConfigCommands::Show => config_management::config_show(),
        },

        #[cfg(feature = "tui")]
        Commands::Tui => unreachable!("tui is dispatched before command handling"),
    }
}
