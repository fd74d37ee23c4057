//! 文本输入处理
//!
//! 表单字段的字符输入、删除与焦点切换

use crate::interfaces::tui::app::App;

/// 处理文本输入
pub fn handle_text_input(app: &mut App, c: char) {
    app.form.push_char(c);
    app.validate_inputs();
}

/// 处理退格删除
pub fn handle_backspace(app: &mut App) {
    app.form.pop_char();
    app.validate_inputs();
}

/// 处理 Tab 键字段切换
pub fn handle_tab_navigation(app: &mut App) {
    app.form.focus_next();
}
