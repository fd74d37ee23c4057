//! Command-line interface definitions using clap
//!
//! This module defines the CLI structure for termfolio using clap's derive macros.

use clap::{Parser, Subcommand};

/// Termfolio - An interactive portfolio for the terminal
#[derive(Parser)]
#[command(name = "termfolio")]
#[command(version)]
#[command(about = "An interactive portfolio for the terminal", long_about = None)]
pub struct Cli {
    /// Override content file path (portfolio.toml)
    #[arg(long, short = 'p', global = true)]
    pub portfolio: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Start TUI mode (the default when no command is given)
    #[cfg(feature = "tui")]
    Tui,

    /// Send a contact message from the command line
    Send {
        /// Your name
        #[arg(long, short = 'n')]
        name: String,

        /// Your email address
        #[arg(long, short = 'e')]
        email: String,

        /// Message subject
        #[arg(long, short = 's')]
        subject: String,

        /// Message body
        #[arg(long, short = 'm')]
        message: String,
    },

    /// Print the profile without the interactive interface
    About,

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },
}

/// Configuration management commands
#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Generate example configuration file
    Generate {
        /// Output path (default: config.example.toml)
        output_path: Option<String>,

        /// Force overwrite without confirmation
        #[arg(long)]
        force: bool,
    },

    /// Show the effective configuration
    Show,
}
