//! 主页浏览界面的键盘处理

use ratatui::crossterm::event::KeyCode;

use crate::content::SectionId;
use crate::interfaces::tui::app::{App, CurrentScreen};
use crate::interfaces::tui::constants::status_text;
use crate::interfaces::tui::event_handler::{copy_to_clipboard, open_contact_form};

/// 处理浏览界面按键
pub fn handle_browse_keys(app: &mut App, key_code: KeyCode) -> std::io::Result<bool> {
    match key_code {
        KeyCode::Char('q') => {
            app.current_screen = CurrentScreen::Exiting;
        }
        KeyCode::Char('?') => {
            app.current_screen = CurrentScreen::Help;
        }
        KeyCode::Char('m') => {
            open_contact_form(app);
        }
        KeyCode::Char('c') => {
            let email = app.profile.email.clone();
            copy_to_clipboard(app, &email, status_text::EMAIL_COPIED.to_string());
        }
        KeyCode::Up | KeyCode::Char('k') => {
            app.scroll.scroll_by(-1.0);
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.scroll.scroll_by(1.0);
        }
        KeyCode::PageUp => {
            app.page_up();
        }
        KeyCode::PageDown => {
            app.page_down();
        }
        KeyCode::Home | KeyCode::Char('g') => {
            app.jump_top();
        }
        KeyCode::End | KeyCode::Char('G') => {
            app.jump_bottom();
        }
        KeyCode::Tab => {
            app.next_section();
        }
        KeyCode::BackTab => {
            app.prev_section();
        }
        KeyCode::Char(c @ '1'..='5') => {
            if let Some(id) = SectionId::from_digit(c) {
                app.jump_to_section(id);
            }
        }
        _ => {}
    }
    Ok(false)
}
