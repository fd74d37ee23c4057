//! 帮助与退出界面的键盘处理

use ratatui::crossterm::event::KeyCode;

use crate::interfaces::tui::app::{App, CurrentScreen};

/// 处理帮助界面按键:任意常用键返回浏览
pub fn handle_help_keys(app: &mut App, key_code: KeyCode) -> std::io::Result<bool> {
    match key_code {
        KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') | KeyCode::Char('?') => {
            app.current_screen = CurrentScreen::Browse;
        }
        _ => {}
    }
    Ok(false)
}

/// 处理退出确认按键
pub fn handle_exiting_keys(app: &mut App, key_code: KeyCode) -> std::io::Result<bool> {
    match key_code {
        KeyCode::Char('y') | KeyCode::Char('Y') => {
            return Ok(true);
        }
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc | KeyCode::Char('q') => {
            app.current_screen = CurrentScreen::Browse;
        }
        _ => {}
    }
    Ok(false)
}
