//! Logging system initialization
//!
//! This module provides functions to initialize the tracing/logging system
//! based on application configuration.

use super::app_config::AppConfig;
use super::panic_handler::RunMode;
use tracing_appender::rolling;
use tracing_subscriber;

/// Log file used in TUI mode when none is configured.
const DEFAULT_TUI_LOG_FILE: &str = "termfolio.log";

/// Initialize logging system based on configuration
///
/// In CLI mode, logs go to stderr unless a file is configured. The TUI owns
/// the terminal, so TUI mode always writes to a file; an empty `file` falls
/// back to `termfolio.log` in the working directory.
///
/// **Note**: This should be called only once during application startup,
/// after the configuration has been loaded.
///
/// # Returns
/// * `WorkerGuard` - Must be kept alive for the duration of the program
///   to ensure non-blocking log writes are flushed
///
/// # Panics
/// * If creating the log appender fails
/// * If setting the global subscriber fails (e.g., already initialized)
pub fn init_logging(config: &AppConfig, mode: RunMode) -> tracing_appender::non_blocking::WorkerGuard {
    let log_file = match mode {
        RunMode::Tui if config.logging.file.is_empty() => DEFAULT_TUI_LOG_FILE.to_string(),
        _ => config.logging.file.clone(),
    };

    // Create writer based on config
    let writer: Box<dyn std::io::Write + Send + Sync> = if !log_file.is_empty() {
        if config.logging.enable_rotation {
            // Use rolling log files
            let dir = std::path::Path::new(&log_file)
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or(std::path::Path::new("."));
            let filename = std::path::Path::new(&log_file)
                .file_name()
                .unwrap_or(std::ffi::OsStr::new(DEFAULT_TUI_LOG_FILE));
            let filename_str = filename.to_str().unwrap_or(DEFAULT_TUI_LOG_FILE);
            let appender = rolling::Builder::new()
                .rotation(rolling::Rotation::DAILY)
                .filename_prefix(filename_str.trim_end_matches(".log"))
                .filename_suffix("log")
                .max_log_files(config.logging.max_backups as usize)
                .build(dir)
                .expect("Failed to create rolling log appender");
            Box::new(appender)
        } else {
            // Non-rotating, append to file
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(&log_file)
                .expect("Failed to open log file");
            Box::new(file)
        }
    } else {
        // CLI without a log file: stderr, keeps stdout for command output
        Box::new(std::io::stderr())
    };

    let (non_blocking_writer, guard) = tracing_appender::non_blocking(writer);
    let filter = tracing_subscriber::EnvFilter::new(config.logging.level.clone());

    let subscriber_builder = tracing_subscriber::fmt()
        .with_writer(non_blocking_writer)
        .with_env_filter(filter)
        .with_level(true)
        .with_ansi(log_file.is_empty());

    if config.logging.format == "json" {
        subscriber_builder.json().init();
    } else {
        subscriber_builder.init();
    }

    guard
}
