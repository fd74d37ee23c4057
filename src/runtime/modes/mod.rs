//! Mode routing
//!
//! This module provides unified entry points for the execution modes:
//! - TUI mode (interactive portfolio, the default)
//! - CLI mode (subcommands: send, about, config)
//!
//! The mode selection is based on command-line arguments and feature flags.

#[cfg(feature = "cli")]
pub mod cli;

#[cfg(feature = "tui")]
pub mod tui;

// Re-export mode functions for convenience
#[cfg(feature = "cli")]
pub use cli::run_cli;

#[cfg(feature = "tui")]
pub use tui::run_tui;

/// Mode detection result
#[derive(Debug, PartialEq)]
pub enum Mode {
    #[cfg(feature = "tui")]
    Tui,
    #[cfg(feature = "cli")]
    Cli,
    Unknown,
}

/// Detect which mode to run based on command-line arguments
///
/// # Mode Detection Logic
/// 1. No arguments, or "tui" as the first argument -> TUI mode
/// 2. Any other arguments -> CLI mode
/// 3. Otherwise -> Unknown (no features enabled)
pub fn detect_mode(args: &[String]) -> Mode {
    #[cfg(feature = "tui")]
    if args.len() <= 1 || args[1] == "tui" {
        return Mode::Tui;
    }

    #[cfg(feature = "cli")]
    if args.len() > 1 {
        return Mode::Cli;
    }

    Mode::Unknown
}
