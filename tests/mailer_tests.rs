use httpmock::prelude::*;
use termfolio::errors::TermfolioError;
use termfolio::mailer::{OutboundMessage, RELAY_SEND_PATH, RelayClient, RelayConfig};

fn relay_config(endpoint: String) -> RelayConfig {
    RelayConfig {
        endpoint,
        service_id: "service_abc".to_string(),
        template_id: "template_xyz".to_string(),
        public_key: "pk_123".to_string(),
        timeout_secs: 5,
    }
}

fn sample_message() -> OutboundMessage {
    OutboundMessage {
        name: "Ada Lovelace".to_string(),
        email: "ada@example.com".to_string(),
        subject: "Analytical engines".to_string(),
        message: "Shall we collaborate?".to_string(),
    }
}

#[cfg(test)]
mod relay_client_tests {
    use super::*;

    #[test]
    fn test_send_posts_expected_payload() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(POST)
                .path(RELAY_SEND_PATH)
                .json_body_partial(
                    r#"
                    {
                        "service_id": "service_abc",
                        "template_id": "template_xyz",
                        "user_id": "pk_123",
                        "template_params": {
                            "name": "Ada Lovelace",
                            "email": "ada@example.com",
                            "subject": "Analytical engines",
                            "message": "Shall we collaborate?"
                        }
                    }
                    "#,
                );
            then.status(200).body("OK");
        });

        let client = RelayClient::new(relay_config(server.base_url()));
        let receipt = client.send_sync(&sample_message()).unwrap();

        mock.assert();
        assert_eq!(receipt.status, 200);
        assert_eq!(receipt.text, "OK");
    }

    #[test]
    fn test_rejection_surfaces_status_and_body() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path(RELAY_SEND_PATH);
            then.status(422).body("The template ID is invalid");
        });

        let client = RelayClient::new(relay_config(server.base_url()));
        let err = client.send_sync(&sample_message()).unwrap_err();

        assert!(matches!(err, TermfolioError::MailRelay(_)));
        assert!(err.message().contains("422"));
        assert!(err.message().contains("The template ID is invalid"));
    }

    #[test]
    fn test_unconfigured_relay_never_touches_the_network() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(POST).path(RELAY_SEND_PATH);
            then.status(200);
        });

        let mut config = relay_config(server.base_url());
        config.service_id = String::new();
        let client = RelayClient::new(config);
        let err = client.send_sync(&sample_message()).unwrap_err();

        assert!(matches!(err, TermfolioError::RelayConfig(_)));
        assert_eq!(mock.hits(), 0);
    }

    #[tokio::test]
    async fn test_async_wrapper_reports_the_same_receipt() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path(RELAY_SEND_PATH);
            then.status(200).body("queued");
        });

        let client = RelayClient::new(relay_config(server.base_url()));
        let receipt = client.send(&sample_message()).await.unwrap();
        assert_eq!(receipt.status, 200);
        assert_eq!(receipt.text, "queued");
    }
}

#[cfg(test)]
mod contact_flow_tests {
    use super::*;
    use std::time::Duration;
    use termfolio::interfaces::tui::app::{App, ContactField, SendState};
    use termfolio::interfaces::tui::constants::status_text;
    use termfolio::system::app_config::EffectsConfig;

    fn app_with_relay(endpoint: String) -> App {
        let profile = termfolio::content::load_default_profile().unwrap();
        let mut app = App::new(profile, relay_config(endpoint), EffectsConfig::default());
        app.form.name_input = "Ada".to_string();
        app.form.email_input = "ada@example.com".to_string();
        app.form.subject_input = "Hello".to_string();
        app.form.message_input = "A short note.".to_string();
        app
    }

    /// Poll the send channel the way the tick loop does, until the
    /// background task reports back.
    async fn pump_until_settled(app: &mut App) {
        for _ in 0..500 {
            app.poll_mail_result();
            if !app.form.is_sending() {
                return;
            }
            tokio::time::sleep(Duration::from_millis(20)).await;
        }
        panic!("send never settled");
    }

    #[tokio::test]
    async fn test_accepted_send_clears_form_and_reenables_button() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(POST).path(RELAY_SEND_PATH);
            then.status(200).body("OK");
        });

        let mut app = app_with_relay(server.base_url());
        app.submit_contact_form();
        assert!(app.form.is_sending());
        assert_eq!(app.status_message, status_text::SENDING);

        pump_until_settled(&mut app).await;

        mock.assert();
        assert_eq!(app.form.send_state, SendState::Idle);
        assert_eq!(app.form.name_input, "");
        assert_eq!(app.form.email_input, "");
        assert_eq!(app.form.subject_input, "");
        assert_eq!(app.form.message_input, "");
        assert_eq!(app.form.currently_editing, Some(ContactField::Name));
        assert_eq!(app.status_message, status_text::SENT_OK);
        assert!(app.error_message.is_empty());
        assert!(app.alert.is_none());
    }

    #[tokio::test]
    async fn test_rejected_send_keeps_fields_and_raises_alert() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path(RELAY_SEND_PATH);
            then.status(500).body("relay exploded");
        });

        let mut app = app_with_relay(server.base_url());
        app.submit_contact_form();
        pump_until_settled(&mut app).await;

        // The typed message survives so the visitor can retry.
        assert_eq!(app.form.send_state, SendState::Idle);
        assert_eq!(app.form.name_input, "Ada");
        assert_eq!(app.form.email_input, "ada@example.com");
        assert_eq!(app.form.subject_input, "Hello");
        assert_eq!(app.form.message_input, "A short note.");
        assert_eq!(app.alert.as_deref(), Some(status_text::SEND_FAILED));
        assert!(app.error_message.contains("500"));
        assert!(app.status_message.is_empty());
    }

    #[tokio::test]
    async fn test_resubmit_during_flight_sends_one_request() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(POST).path(RELAY_SEND_PATH);
            then.status(200).body("OK").delay(Duration::from_millis(300));
        });

        let mut app = app_with_relay(server.base_url());
        app.submit_contact_form();
        assert!(app.form.is_sending());

        // Hammer the button while the first request is still in the air.
        app.submit_contact_form();
        app.submit_contact_form();

        pump_until_settled(&mut app).await;
        mock.assert();
        assert_eq!(app.status_message, status_text::SENT_OK);
    }

    #[tokio::test]
    async fn test_unreachable_relay_fails_like_a_rejection() {
        // Nothing listens here; the connection is refused outright.
        let mut app = app_with_relay("http://127.0.0.1:1".to_string());
        app.submit_contact_form();
        pump_until_settled(&mut app).await;

        assert_eq!(app.form.send_state, SendState::Idle);
        assert_eq!(app.alert.as_deref(), Some(status_text::SEND_FAILED));
        assert_eq!(app.form.name_input, "Ada");
    }
}
