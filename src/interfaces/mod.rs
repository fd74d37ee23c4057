//! Interface 模块
//!
//! 包含 CLI 和 TUI 界面

#[cfg(feature = "cli")]
pub mod cli;
#[cfg(feature = "tui")]
pub mod tui;
