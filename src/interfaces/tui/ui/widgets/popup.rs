//! 弹窗组件
//!
//! 统一的弹窗外框:阴影、双线边框与标题

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Margin, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, BorderType, Borders, Clear},
};

use crate::interfaces::tui::constants::PopupSize;

/// 居中矩形计算
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// 弹窗组件
pub struct Popup<'a> {
    title: &'a str,
    size: &'a PopupSize,
    border_color: Color,
}

impl<'a> Popup<'a> {
    pub fn new(title: &'a str, size: &'a PopupSize) -> Self {
        Self {
            title,
            size,
            border_color: Color::White,
        }
    }

    pub fn border_color(mut self, color: Color) -> Self {
        self.border_color = color;
        self
    }

    /// 渲染弹窗外框,返回内容区域
    pub fn render(self, frame: &mut Frame) -> Rect {
        let area = centered_rect(
            self.size.width_percent,
            self.size.height_percent,
            frame.area(),
        );

        // 阴影
        let shadow_area = Rect {
            x: area.x.saturating_add(1),
            y: area.y.saturating_add(1),
            width: area.width,
            height: area.height,
        }
        .intersection(frame.area());
        frame.render_widget(
            Block::default().style(Style::default().bg(Color::Black)),
            shadow_area,
        );

        frame.render_widget(Clear, area);
        let block = Block::default()
            .title(format!(" {} ", self.title))
            .title_style(
                Style::default()
                    .fg(self.border_color)
                    .add_modifier(Modifier::BOLD),
            )
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .border_style(Style::default().fg(self.border_color));
        let inner = block.inner(area).inner(Margin::new(2, 1));
        frame.render_widget(block, area);
        inner
    }
}
