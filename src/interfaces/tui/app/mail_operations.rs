//! 联系消息发送操作
//!
//! 将表单内容交给后台任务发送,结果通过 oneshot 通道回传

use tokio::sync::oneshot;
use tracing::debug;

use crate::interfaces::tui::app::state::{App, SendState};
use crate::interfaces::tui::constants::status_text;
use crate::mailer::{OutboundMessage, RelayClient};

impl App {
    /// 提交联系表单
    ///
    /// Validates first, then hands the message to a background task so the
    /// UI keeps ticking while the relay round-trip runs. While a send is in
    /// flight further submissions are ignored.
    pub fn submit_contact_form(&mut self) {
        if self.form.is_sending() {
            return;
        }
        if !self.validate_for_submit() {
            self.set_error("Please fix the highlighted fields".to_string());
            return;
        }

        let message = OutboundMessage {
            name: self.form.name_input.trim().to_string(),
            email: self.form.email_input.trim().to_string(),
            subject: self.form.subject_input.trim().to_string(),
            message: self.form.message_input.trim().to_string(),
        };
        let client = RelayClient::new(self.relay.clone());

        debug!("Submitting contact form for \"{}\"", message.email);
        let (tx, rx) = oneshot::channel();
        tokio::spawn(async move {
            let result = client.send(&message).await;
            // The receiver may be gone if the TUI quit mid-send.
            let _ = tx.send(result);
        });

        self.mail_rx = Some(rx);
        self.form.send_state = SendState::Sending;
        self.set_status(status_text::SENDING.to_string());
    }
}

#[cfg(test)]
mod tests {
    use crate::interfaces::tui::app::state::App;
    use crate::interfaces::tui::constants::status_text;
    use crate::mailer::RelayConfig;
    use crate::system::app_config::EffectsConfig;

    fn test_app() -> App {
        let profile = crate::content::load_default_profile().unwrap();
        App::new(profile, RelayConfig::default(), EffectsConfig::default())
    }

    fn fill_form(app: &mut App) {
        app.form.name_input = "Ada".to_string();
        app.form.email_input = "ada@example.com".to_string();
        app.form.subject_input = "Hi".to_string();
        app.form.message_input = "A note".to_string();
    }

    #[tokio::test]
    async fn test_submit_with_invalid_form_does_not_spawn() {
        let mut app = test_app();
        app.submit_contact_form();
        assert!(!app.form.is_sending());
        assert!(app.mail_rx.is_none());
        assert!(app.form.has_errors());
    }

    #[tokio::test]
    async fn test_submit_moves_to_sending() {
        let mut app = test_app();
        fill_form(&mut app);
        app.submit_contact_form();
        assert!(app.form.is_sending());
        assert!(app.mail_rx.is_some());
        assert_eq!(app.status_message, status_text::SENDING);
    }

    #[tokio::test]
    async fn test_resubmit_while_sending_is_ignored() {
        let mut app = test_app();
        fill_form(&mut app);
        app.submit_contact_form();
        let first_rx = app.mail_rx.is_some();
        app.submit_contact_form();
        assert!(first_rx);
        assert!(app.form.is_sending());
    }
}
