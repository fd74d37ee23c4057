//! Runtime module
//!
//! Mode routing and process lifetime management.

pub mod lifetime;
pub mod modes;

#[cfg(feature = "cli")]
pub use modes::run_cli;
#[cfg(feature = "tui")]
pub use modes::run_tui;
pub use modes::{Mode, detect_mode};
