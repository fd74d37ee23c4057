//! 联系表单界面的键盘处理

use ratatui::crossterm::event::KeyCode;

use crate::interfaces::tui::app::{App, ContactField, CurrentScreen};
use crate::interfaces::tui::input_handler;

/// 处理联系表单按键
pub fn handle_contact_keys(app: &mut App, key_code: KeyCode) -> std::io::Result<bool> {
    match key_code {
        KeyCode::Esc => {
            // Back to the page. Whatever was typed stays for next time.
            app.current_screen = CurrentScreen::Browse;
        }
        KeyCode::Tab => {
            input_handler::handle_tab_navigation(app);
        }
        KeyCode::BackTab => {
            app.form.focus_prev();
        }
        KeyCode::Enter => match app.form.currently_editing {
            Some(ContactField::Message) => {
                input_handler::handle_text_input(app, '\n');
            }
            Some(ContactField::SendButton) => {
                app.submit_contact_form();
            }
            Some(_) => {
                app.form.focus_next();
            }
            None => {
                app.form.currently_editing = Some(ContactField::Name);
            }
        },
        KeyCode::Backspace => {
            input_handler::handle_backspace(app);
        }
        KeyCode::Char(c) => {
            input_handler::handle_text_input(app, c);
        }
        _ => {}
    }
    Ok(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mailer::RelayConfig;
    use crate::system::app_config::EffectsConfig;

    fn contact_app() -> App {
        let profile = crate::content::load_default_profile().unwrap();
        let mut app = App::new(profile, RelayConfig::default(), EffectsConfig::default());
        app.current_screen = CurrentScreen::Contact;
        app.form.currently_editing = Some(ContactField::Name);
        app
    }

    #[test]
    fn test_escape_keeps_typed_fields() {
        let mut app = contact_app();
        handle_contact_keys(&mut app, KeyCode::Char('A')).unwrap();
        handle_contact_keys(&mut app, KeyCode::Char('d')).unwrap();
        handle_contact_keys(&mut app, KeyCode::Char('a')).unwrap();
        handle_contact_keys(&mut app, KeyCode::Esc).unwrap();
        assert_eq!(app.current_screen, CurrentScreen::Browse);
        assert_eq!(app.form.name_input, "Ada");
    }

    #[test]
    fn test_tab_cycles_fields() {
        let mut app = contact_app();
        handle_contact_keys(&mut app, KeyCode::Tab).unwrap();
        assert_eq!(app.form.currently_editing, Some(ContactField::Email));
        handle_contact_keys(&mut app, KeyCode::BackTab).unwrap();
        assert_eq!(app.form.currently_editing, Some(ContactField::Name));
    }

    #[test]
    fn test_enter_advances_from_single_line_fields() {
        let mut app = contact_app();
        handle_contact_keys(&mut app, KeyCode::Enter).unwrap();
        assert_eq!(app.form.currently_editing, Some(ContactField::Email));
    }

    #[test]
    fn test_enter_inserts_newline_in_message() {
        let mut app = contact_app();
        app.form.currently_editing = Some(ContactField::Message);
        handle_contact_keys(&mut app, KeyCode::Char('h')).unwrap();
        handle_contact_keys(&mut app, KeyCode::Enter).unwrap();
        handle_contact_keys(&mut app, KeyCode::Char('i')).unwrap();
        assert_eq!(app.form.message_input, "h\ni");
        assert_eq!(app.form.currently_editing, Some(ContactField::Message));
    }

    #[test]
    fn test_typing_bad_email_flags_error_live() {
        let mut app = contact_app();
        app.form.currently_editing = Some(ContactField::Email);
        for c in "oops".chars() {
            handle_contact_keys(&mut app, KeyCode::Char(c)).unwrap();
        }
        assert!(app.form.get_error("email").is_some());
        for c in "@example.com".chars() {
            handle_contact_keys(&mut app, KeyCode::Char(c)).unwrap();
        }
        assert!(app.form.get_error("email").is_none());
    }

    #[test]
    fn test_enter_on_send_button_without_input_reports_errors() {
        let mut app = contact_app();
        app.form.currently_editing = Some(ContactField::SendButton);
        handle_contact_keys(&mut app, KeyCode::Enter).unwrap();
        assert!(!app.form.is_sending());
        assert!(app.form.has_errors());
    }
}
