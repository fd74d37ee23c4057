//! UI 渲染模块
//!
//! 页面布局:导航栏、内容区、状态栏与页脚,弹窗与全屏滤镜叠加在最后

mod common;
mod contact_form;
mod exiting;
mod fx;
mod help;
mod navbar;
mod page;
mod sections;
pub mod widgets;

pub use common::{draw_footer, draw_status_bar};

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};

use crate::interfaces::tui::app::{App, CurrentScreen};
use crate::interfaces::tui::constants::{
    FOOTER_HEIGHT, MIN_TERM_HEIGHT, MIN_TERM_WIDTH, NAVBAR_HEIGHT, STATUS_BAR_HEIGHT,
};

/// 绘制整个界面
pub fn ui(frame: &mut Frame, app: &mut App) {
    let area = frame.area();
    if area.width < MIN_TERM_WIDTH || area.height < MIN_TERM_HEIGHT {
        common::draw_too_small(frame, area);
        return;
    }

    // Zones are rebuilt from scratch every frame; stale ones would point
    // at last frame's layout.
    app.hover_zones.clear();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(NAVBAR_HEIGHT),
            Constraint::Min(10),
            Constraint::Length(STATUS_BAR_HEIGHT),
            Constraint::Length(FOOTER_HEIGHT),
        ])
        .split(area);

    navbar::draw_navbar(frame, app, chunks[0]);
    page::draw_page(frame, app, chunks[1]);
    draw_status_bar(frame, app, chunks[2]);
    draw_footer(frame, app, chunks[3]);

    match app.current_screen {
        CurrentScreen::Contact => contact_form::draw_contact_form(frame, app),
        CurrentScreen::Help => help::draw_help_screen(frame, app),
        CurrentScreen::Exiting => exiting::draw_exiting_screen(frame, app),
        CurrentScreen::Browse => {}
    }

    common::draw_alert(frame, app);

    // Full-buffer passes come last so they cover popups too.
    fx::draw_cursor_overlay(frame, app);
    fx::apply_rainbow(frame, app);
    fx::apply_intro_fade(frame, app);
}
