//! 页面区块装配
//!
//! 每个子模块负责一个区块;`build_page` 按顺序装配整页

mod about;
mod contact;
mod experience;
mod hero;
mod projects;

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use crate::interfaces::tui::app::App;
use crate::interfaces::tui::constants::colors;
use crate::interfaces::tui::ui::page::PageBuilder;

/// 装配整页
pub fn build_page(builder: &mut PageBuilder, app: &App) {
    hero::build(builder, app);
    about::build(builder, app);
    experience::build(builder, app);
    projects::build(builder, app);
    contact::build(builder, app);
}

/// 区块标题行
pub(super) fn section_heading(builder: &mut PageBuilder, title: &str) {
    builder.blank(1);
    builder.push(
        Line::from(vec![
            Span::styled("───  ", Style::default().fg(colors::MUTED)),
            Span::styled(
                title.to_string(),
                Style::default()
                    .fg(colors::PRIMARY)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("  ───", Style::default().fg(colors::MUTED)),
        ])
        .centered(),
    );
    builder.blank(1);
}

/// 居中起始列
pub(super) fn centered_start(width: u16, content_len: usize) -> u16 {
    (width.saturating_sub(content_len as u16)) / 2
}

/// 左侧补齐空格
pub(super) fn pad_left(count: u16) -> Span<'static> {
    Span::raw(" ".repeat(count as usize))
}
