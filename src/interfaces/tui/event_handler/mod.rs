//! 事件处理模块
//!
//! 处理键盘与鼠标事件,按当前界面分发

mod browse;
mod contact_screen;
mod misc_screens;

use ratatui::crossterm::event::{
    KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use tracing::debug;

use crate::interfaces::tui::app::{App, ContactField, CurrentScreen, HoverTarget};
use crate::interfaces::tui::constants::{WHEEL_SCROLL_ROWS, status_text};

/// 键名映射
///
/// Names follow the browser KeyboardEvent convention so the cheat-code
/// sequence reads the same here as it would on a web page.
fn dom_key_name(code: KeyCode) -> String {
    match code {
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Up => "ArrowUp".to_string(),
        KeyCode::Down => "ArrowDown".to_string(),
        KeyCode::Left => "ArrowLeft".to_string(),
        KeyCode::Right => "ArrowRight".to_string(),
        KeyCode::Enter => "Enter".to_string(),
        KeyCode::Esc => "Escape".to_string(),
        KeyCode::Backspace => "Backspace".to_string(),
        KeyCode::Tab | KeyCode::BackTab => "Tab".to_string(),
        KeyCode::Home => "Home".to_string(),
        KeyCode::End => "End".to_string(),
        KeyCode::PageUp => "PageUp".to_string(),
        KeyCode::PageDown => "PageDown".to_string(),
        KeyCode::Delete => "Delete".to_string(),
        KeyCode::F(n) => format!("F{}", n),
        _ => "Unidentified".to_string(),
    }
}

/// 处理键盘事件
///
/// 返回 `Ok(true)` 表示应退出应用
pub fn handle_key_event(app: &mut App, key: KeyEvent) -> std::io::Result<bool> {
    // The cheat-code listener sees every key, whatever screen is up.
    if app.konami.feed(&dom_key_name(key.code)) {
        app.trigger_rainbow();
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Ok(true);
    }

    // An open alert swallows the next key.
    if app.alert.is_some() {
        app.alert = None;
        return Ok(false);
    }

    match app.current_screen {
        CurrentScreen::Browse => browse::handle_browse_keys(app, key.code),
        CurrentScreen::Contact => contact_screen::handle_contact_keys(app, key.code),
        CurrentScreen::Help => misc_screens::handle_help_keys(app, key.code),
        CurrentScreen::Exiting => misc_screens::handle_exiting_keys(app, key.code),
    }
}

/// 处理鼠标事件
pub fn handle_mouse_event(app: &mut App, mouse: MouseEvent) {
    match mouse.kind {
        MouseEventKind::Moved | MouseEventKind::Drag(_) => {
            app.cursor.on_mouse_move(mouse.column, mouse.row);
            app.hovered = app.target_at(mouse.column, mouse.row);
            app.cursor.set_hovering(app.hovered.is_some());
        }
        MouseEventKind::ScrollUp => {
            if app.current_screen == CurrentScreen::Browse {
                app.scroll.scroll_by(-WHEEL_SCROLL_ROWS);
            }
        }
        MouseEventKind::ScrollDown => {
            if app.current_screen == CurrentScreen::Browse {
                app.scroll.scroll_by(WHEEL_SCROLL_ROWS);
            }
        }
        MouseEventKind::Down(MouseButton::Left) => {
            if app.alert.is_some() {
                app.alert = None;
                return;
            }
            let target = app.target_at(mouse.column, mouse.row);
            handle_click(app, target);
        }
        _ => {}
    }
}

/// 处理左键点击
fn handle_click(app: &mut App, target: Option<HoverTarget>) {
    match app.current_screen {
        CurrentScreen::Browse => match target {
            Some(HoverTarget::NavLink(id)) => app.jump_to_section(id),
            Some(HoverTarget::ContactButton) => open_contact_form(app),
            Some(HoverTarget::Email) => copy_to_clipboard(
                app,
                &app.profile.email.clone(),
                status_text::EMAIL_COPIED.to_string(),
            ),
            Some(HoverTarget::ProjectLink(i)) => {
                if let Some(project) = app.profile.projects.get(i) {
                    let url = project.link.clone();
                    let label = format!("Link copied: {}", url);
                    copy_to_clipboard(app, &url, label);
                }
            }
            Some(HoverTarget::SocialLink(i)) => {
                if let Some(social) = app.profile.socials.get(i) {
                    let url = social.url.clone();
                    let label = format!("Link copied: {}", url);
                    copy_to_clipboard(app, &url, label);
                }
            }
            _ => {}
        },
        CurrentScreen::Contact => match target {
            Some(HoverTarget::FormField(ContactField::SendButton)) => app.submit_contact_form(),
            Some(HoverTarget::FormField(field)) => {
                app.form.currently_editing = Some(field);
            }
            _ => {}
        },
        CurrentScreen::Help => app.current_screen = CurrentScreen::Browse,
        CurrentScreen::Exiting => {}
    }
}

/// 打开联系表单并聚焦第一个字段
pub(super) fn open_contact_form(app: &mut App) {
    app.current_screen = CurrentScreen::Contact;
    if app.form.currently_editing.is_none() {
        app.form.currently_editing = Some(ContactField::Name);
    }
}

/// 复制文本到系统剪贴板
pub(super) fn copy_to_clipboard(app: &mut App, text: &str, success_status: String) {
    if text.is_empty() {
        return;
    }
    match arboard::Clipboard::new().and_then(|mut cb| cb.set_text(text.to_string())) {
        Ok(()) => {
            debug!("Copied {} chars to clipboard", text.len());
            app.set_status(success_status);
        }
        Err(e) => {
            app.set_error(format!("Clipboard unavailable: {}", e));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mailer::RelayConfig;
    use crate::system::app_config::EffectsConfig;

    fn test_app() -> App {
        let profile = crate::content::load_default_profile().unwrap();
        App::new(profile, RelayConfig::default(), EffectsConfig::default())
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_dom_key_names_match_browser_convention() {
        assert_eq!(dom_key_name(KeyCode::Up), "ArrowUp");
        assert_eq!(dom_key_name(KeyCode::Char('b')), "b");
        assert_eq!(dom_key_name(KeyCode::Char('B')), "B");
        assert_eq!(dom_key_name(KeyCode::Esc), "Escape");
        assert_eq!(dom_key_name(KeyCode::F(5)), "F5");
        assert_eq!(dom_key_name(KeyCode::Media(ratatui::crossterm::event::MediaKeyCode::Play)), "Unidentified");
    }

    #[test]
    fn test_konami_sequence_fires_from_key_events() {
        let mut app = test_app();
        let sequence = [
            KeyCode::Up,
            KeyCode::Up,
            KeyCode::Down,
            KeyCode::Down,
            KeyCode::Left,
            KeyCode::Right,
            KeyCode::Left,
            KeyCode::Right,
            KeyCode::Char('b'),
            KeyCode::Char('a'),
        ];
        for code in sequence {
            let quit = handle_key_event(&mut app, press(code)).unwrap();
            assert!(!quit);
        }
        assert!(app.rainbow.is_active());
    }

    #[test]
    fn test_ctrl_c_quits_from_any_screen() {
        let mut app = test_app();
        app.current_screen = CurrentScreen::Contact;
        let quit = handle_key_event(
            &mut app,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
        )
        .unwrap();
        assert!(quit);
    }

    #[test]
    fn test_any_key_dismisses_alert() {
        let mut app = test_app();
        app.alert = Some("Failed to send message. Please try again.".to_string());
        let quit = handle_key_event(&mut app, press(KeyCode::Char('q'))).unwrap();
        assert!(!quit);
        assert!(app.alert.is_none());
        // The swallowed key must not have reached the browse handler.
        assert_eq!(app.current_screen, CurrentScreen::Browse);
    }

    #[test]
    fn test_wheel_scrolls_only_on_browse() {
        let mut app = test_app();
        app.scroll.set_bounds(200, 40);
        let wheel = MouseEvent {
            kind: MouseEventKind::ScrollDown,
            column: 10,
            row: 10,
            modifiers: KeyModifiers::NONE,
        };
        handle_mouse_event(&mut app, wheel);
        assert_eq!(app.scroll.offset(), WHEEL_SCROLL_ROWS);

        app.current_screen = CurrentScreen::Contact;
        handle_mouse_event(&mut app, wheel);
        assert_eq!(app.scroll.offset(), WHEEL_SCROLL_ROWS);
    }

    #[test]
    fn test_mouse_move_updates_cursor_and_hover() {
        let mut app = test_app();
        app.hover_zones.push(crate::interfaces::tui::app::HoverZone {
            rect: ratatui::layout::Rect::new(0, 0, 10, 5),
            target: HoverTarget::Email,
        });
        let mv = MouseEvent {
            kind: MouseEventKind::Moved,
            column: 3,
            row: 2,
            modifiers: KeyModifiers::NONE,
        };
        handle_mouse_event(&mut app, mv);
        assert_eq!(app.hovered, Some(HoverTarget::Email));
        assert!(app.cursor.is_hovering());
        assert_eq!(app.cursor.dot(), Some((3, 2)));
    }

    #[test]
    fn test_click_on_form_field_moves_focus() {
        let mut app = test_app();
        app.current_screen = CurrentScreen::Contact;
        app.hover_zones.push(crate::interfaces::tui::app::HoverZone {
            rect: ratatui::layout::Rect::new(5, 5, 20, 3),
            target: HoverTarget::FormField(ContactField::Subject),
        });
        let click = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 6,
            row: 6,
            modifiers: KeyModifiers::NONE,
        };
        handle_mouse_event(&mut app, click);
        assert_eq!(app.form.currently_editing, Some(ContactField::Subject));
    }
}
