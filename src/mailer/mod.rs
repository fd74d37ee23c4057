//! Contact form mail delivery
//!
//! Messages go out through an EmailJS-compatible relay: one JSON POST
//! carrying the relay credentials and the form fields as template
//! parameters.

use serde::{Deserialize, Serialize};

mod relay;

pub use relay::{RELAY_SEND_PATH, RelayClient, RelayReceipt};

/// A filled-in contact form, exactly the fields the mail template expects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutboundMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// Relay endpoint and credentials, the `[relay]` section of config.toml.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RelayConfig {
    pub endpoint: String,
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
    pub timeout_secs: u64,
}

impl Default for RelayConfig {
    fn default() -> Self {
        RelayConfig {
            endpoint: "https://api.emailjs.com".to_string(),
            service_id: String::new(),
            template_id: String::new(),
            public_key: String::new(),
            timeout_secs: 10,
        }
    }
}

impl RelayConfig {
    /// A relay is usable once both ids are present.
    pub fn is_configured(&self) -> bool {
        !self.service_id.trim().is_empty() && !self.template_id.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_relay_unconfigured() {
        let config = RelayConfig::default();
        assert!(!config.is_configured());
        assert_eq!(config.endpoint, "https://api.emailjs.com");
    }

    #[test]
    fn test_configured_needs_both_ids() {
        let mut config = RelayConfig {
            service_id: "service_abc".to_string(),
            ..Default::default()
        };
        assert!(!config.is_configured());
        config.template_id = "template_xyz".to_string();
        assert!(config.is_configured());
    }

    #[test]
    fn test_message_serializes_flat() {
        let msg = OutboundMessage {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            subject: "Hello".to_string(),
            message: "Hi there".to_string(),
        };
        let json = serde_json::to_value(&msg).unwrap();
        assert_eq!(json["name"], "Ada");
        assert_eq!(json["message"], "Hi there");
    }
}
