//! Application configuration
//!
//! 配置优先级：环境变量 > config.toml > 默认值

use serde::{Deserialize, Serialize};

mod r#impl;

pub use r#impl::{get_config, init_config};

pub use crate::mailer::RelayConfig;

/// Top-level configuration, the shape of `config.toml`.
///
/// 包含四个部分：
/// - relay: 邮件中继端点与凭据
/// - content: 档案文件路径
/// - effects: 动画开关
/// - logging: 日志配置
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub relay: RelayConfig,
    #[serde(default)]
    pub content: ContentConfig,
    #[serde(default)]
    pub effects: EffectsConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// 内容配置
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ContentConfig {
    /// Path to a portfolio TOML file. Empty means the embedded default.
    #[serde(default)]
    pub path: String,
}

/// 动画效果开关
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct EffectsConfig {
    #[serde(default = "default_true")]
    pub cursor_trail: bool,
    #[serde(default = "default_true")]
    pub glitch: bool,
    #[serde(default = "default_true")]
    pub parallax: bool,
    #[serde(default = "default_true")]
    pub typewriter: bool,
    /// Skips every animation: counters jump, reveals show instantly.
    #[serde(default)]
    pub reduced_motion: bool,
}

impl Default for EffectsConfig {
    fn default() -> Self {
        Self {
            cursor_trail: default_true(),
            glitch: default_true(),
            parallax: default_true(),
            typewriter: default_true(),
            reduced_motion: false,
        }
    }
}

/// 日志配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
    /// Log file path. Empty means stderr in CLI mode; the TUI always logs
    /// to a file so the alternate screen stays clean.
    #[serde(default)]
    pub file: String,
    #[serde(default = "default_enable_rotation")]
    pub enable_rotation: bool,
    #[serde(default = "default_max_backups")]
    pub max_backups: u32,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            file: String::new(),
            enable_rotation: default_enable_rotation(),
            max_backups: default_max_backups(),
        }
    }
}

// ============================================================
// Default value functions
// ============================================================

fn default_true() -> bool {
    true
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "plain".to_string()
}

fn default_enable_rotation() -> bool {
    true
}

fn default_max_backups() -> u32 {
    7
}
