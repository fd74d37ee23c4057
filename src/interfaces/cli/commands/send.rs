//! Send contact message command

use colored::Colorize;

use crate::interfaces::cli::CliError;
use crate::mailer::{OutboundMessage, RelayClient};
use crate::system::app_config::get_config;
use crate::utils::is_valid_email;

/// Send a contact message through the configured mail relay
pub async fn send_message(
    name: String,
    email: String,
    subject: String,
    message: String,
) -> Result<(), CliError> {
    if name.trim().is_empty() {
        return Err(CliError::ValidationError("name must not be empty".into()));
    }
    if !is_valid_email(&email) {
        return Err(CliError::ValidationError(format!(
            "\"{}\" is not a valid email address",
            email
        )));
    }
    if subject.trim().is_empty() {
        return Err(CliError::ValidationError(
            "subject must not be empty".into(),
        ));
    }
    if message.trim().is_empty() {
        return Err(CliError::ValidationError(
            "message must not be empty".into(),
        ));
    }

    let relay = get_config().relay.clone();
    if !relay.is_configured() {
        return Err(CliError::ConfigError(
            "mail relay is not configured; set relay.service_id and relay.template_id".into(),
        ));
    }

    let outbound = OutboundMessage {
        name: name.trim().to_string(),
        email: email.trim().to_string(),
        subject: subject.trim().to_string(),
        message: message.trim().to_string(),
    };

    println!("{}", "Sending message...".yellow());
    let client = RelayClient::new(relay);
    match client.send(&outbound).await {
        Ok(receipt) => {
            println!(
                "  {} {}",
                "Message sent successfully!".green(),
                format!("(relay answered {})", receipt.status).dimmed()
            );
            Ok(())
        }
        Err(e) => {
            println!("  {}", "Failed to send message.".red());
            Err(CliError::RelayError(e.message().to_string()))
        }
    }
}
