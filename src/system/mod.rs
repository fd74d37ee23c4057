//! System-level modules
//!
//! This module contains system-level functionality:
//! - Configuration management
//! - Logging initialization
//! - Panic handling

pub mod app_config;
pub mod logging;
pub mod panic_handler;
