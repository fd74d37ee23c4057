use std::env;
use std::fs;
use std::path::Path;
use std::sync::OnceLock;
use tracing::error;
use tracing::{debug, warn};

use super::AppConfig;

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

impl AppConfig {
    /// Load configuration from TOML file with environment variable fallback
    pub fn load() -> Self {
        let mut config = Self::load_from_file();
        config.override_with_env();
        config
    }

    /// Load configuration from TOML file
    fn load_from_file() -> Self {
        let config_paths = [
            "config.toml",
            "termfolio.toml",
            "config/config.toml",
            "/etc/termfolio/config.toml",
        ];

        for path in &config_paths {
            if Path::new(path).exists() {
                debug!("Loading config from: {}", path);
                match fs::read_to_string(path) {
                    Ok(content) => match toml::from_str::<AppConfig>(&content) {
                        Ok(config) => {
                            debug!("Successfully loaded config from: {}", path);
                            return config;
                        }
                        Err(e) => {
                            warn!("Failed to parse config file {}: {}", path, e);
                        }
                    },
                    Err(e) => {
                        warn!("Failed to read config file {}: {}", path, e);
                    }
                }
            }
        }

        debug!("No config file found, using defaults");
        Self::default()
    }

    /// Override configuration with environment variables
    fn override_with_env(&mut self) {
        // Relay config
        if let Ok(endpoint) = env::var("RELAY_ENDPOINT") {
            self.relay.endpoint = endpoint;
        }
        if let Ok(service_id) = env::var("RELAY_SERVICE_ID") {
            self.relay.service_id = service_id;
        }
        if let Ok(template_id) = env::var("RELAY_TEMPLATE_ID") {
            self.relay.template_id = template_id;
        }
        if let Ok(public_key) = env::var("RELAY_PUBLIC_KEY") {
            self.relay.public_key = public_key;
        }
        if let Ok(timeout) = env::var("RELAY_TIMEOUT_SECS") {
            if let Ok(t) = timeout.parse() {
                self.relay.timeout_secs = t;
            } else {
                error!("Invalid RELAY_TIMEOUT_SECS: {}", timeout);
            }
        }

        // Content config
        if let Ok(path) = env::var("PORTFOLIO_PATH") {
            self.content.path = path;
        }

        // Effects config
        if let Ok(reduced) = env::var("REDUCED_MOTION") {
            self.effects.reduced_motion = reduced == "1" || reduced == "true";
        }

        // Logging config
        if let Ok(log_level) = env::var("RUST_LOG") {
            self.logging.level = log_level;
        }
        if let Ok(log_file) = env::var("LOG_FILE") {
            self.logging.file = log_file;
        }
    }

    /// Generate a sample TOML configuration file
    pub fn generate_sample_config() -> String {
        let sample_config = AppConfig::default();
        toml::to_string_pretty(&sample_config)
            .unwrap_or_else(|e| format!("Error generating sample config: {}", e))
    }

    /// Save current configuration to a TOML file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> crate::errors::Result<()> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content).map_err(|e| crate::errors::TermfolioError::config(e.to_string()))
    }
}

// Global configuration instance

/// Get the global configuration instance
pub fn get_config() -> &'static AppConfig {
    CONFIG.get_or_init(AppConfig::load)
}

/// Initialize the global configuration
pub fn init_config() {
    CONFIG.get_or_init(AppConfig::load);
}
