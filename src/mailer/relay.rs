//! EmailJS-compatible relay client
//!
//! 同步请求在 spawn_blocking 中执行，不阻塞 TUI 事件循环

use std::sync::OnceLock;
use std::time::Duration;

use serde::Serialize;
use tracing::{debug, warn};
use ureq::Agent;

use super::{OutboundMessage, RelayConfig};
use crate::errors::{Result, TermfolioError};

/// Send path appended to the configured endpoint.
pub const RELAY_SEND_PATH: &str = "/api/v1.0/email/send";

/// 全局 HTTP Agent（ureq 的 Agent 是 Send + Sync）
static HTTP_AGENT: OnceLock<Agent> = OnceLock::new();

fn get_agent(timeout_secs: u64) -> &'static Agent {
    HTTP_AGENT.get_or_init(|| {
        Agent::config_builder()
            .timeout_global(Some(Duration::from_secs(timeout_secs)))
            // 非 2xx 也返回 Ok，由调用方读取状态码和正文
            .http_status_as_error(false)
            .build()
            .into()
    })
}

/// What the relay answered: HTTP status and raw body text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayReceipt {
    pub status: u16,
    pub text: String,
}

/// Request body in the shape the relay expects.
#[derive(Serialize)]
struct RelayPayload<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: &'a OutboundMessage,
}

#[derive(Debug, Clone)]
pub struct RelayClient {
    config: RelayConfig,
}

impl RelayClient {
    pub fn new(config: RelayConfig) -> Self {
        RelayClient { config }
    }

    pub fn send_url(&self) -> String {
        format!(
            "{}{}",
            self.config.endpoint.trim_end_matches('/'),
            RELAY_SEND_PATH
        )
    }

    /// 同步发送（在 spawn_blocking 中调用）
    ///
    /// One attempt only. No retry and no idempotency: resubmitting a form
    /// that already went through sends a second mail.
    pub fn send_sync(&self, message: &OutboundMessage) -> Result<RelayReceipt> {
        if !self.config.is_configured() {
            return Err(TermfolioError::relay_config(
                "relay service_id and template_id must be set before sending",
            ));
        }

        let url = self.send_url();
        let payload = RelayPayload {
            service_id: &self.config.service_id,
            template_id: &self.config.template_id,
            user_id: &self.config.public_key,
            template_params: message,
        };

        debug!("Posting contact message to {}", url);
        let agent = get_agent(self.config.timeout_secs);
        let response = match agent.post(&url).send_json(&payload) {
            Ok(r) => r,
            Err(e) => {
                warn!("Mail relay request to \"{}\" failed: {}", url, e);
                return Err(TermfolioError::mail_relay(e.to_string()));
            }
        };

        let status = response.status().as_u16();
        let text = response.into_body().read_to_string().unwrap_or_default();

        if (200..300).contains(&status) {
            debug!("Mail relay accepted message: {} {}", status, text);
            Ok(RelayReceipt { status, text })
        } else {
            warn!("Mail relay rejected message: {} {}", status, text);
            Err(TermfolioError::mail_relay(format!(
                "relay answered {}: {}",
                status, text
            )))
        }
    }

    /// 异步包装：spawn_blocking + ureq
    pub async fn send(&self, message: &OutboundMessage) -> Result<RelayReceipt> {
        let client = self.clone();
        let message = message.clone();
        tokio::task::spawn_blocking(move || client.send_sync(&message))
            .await
            .map_err(|e| TermfolioError::mail_relay(format!("send task failed: {}", e)))?
    }
}
