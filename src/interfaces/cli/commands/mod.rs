//! CLI command implementations
//!
//! This module re-exports all CLI command functions.

mod about;
pub mod config_management;
mod send;

pub use about::*;
pub use send::*;
