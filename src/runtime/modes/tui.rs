//! TUI mode
//!
//! This module contains the TUI (Terminal User Interface) mode startup logic.
//! It delegates to the actual TUI implementation.

use crate::runtime::lifetime;
use crate::system::app_config::get_config;

/// Run TUI mode
///
/// This function:
/// 1. Performs pre-startup processing for CLI/TUI modes
/// 2. Loads the profile, honoring a `--portfolio` override
/// 3. Delegates to the actual TUI implementation
pub async fn run_tui(portfolio: Option<String>) -> Result<(), Box<dyn std::error::Error>> {
    lifetime::startup::cli_tui_pre_startup().await;

    let config = get_config();
    let path = portfolio.unwrap_or_else(|| config.content.path.clone());
    let profile = crate::content::load_profile(&path)?;

    crate::interfaces::tui::run_tui(profile, config.relay.clone(), config.effects).await
}
