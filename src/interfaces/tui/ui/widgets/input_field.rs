//! 输入框组件
//!
//! 统一的表单输入框渲染,支持焦点高亮、必填标记与错误提示

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::interfaces::tui::constants::colors;

/// 输入框组件
pub struct InputField<'a> {
    /// 字段标题
    title: &'a str,
    /// 当前值
    value: &'a str,
    /// 是否聚焦
    active: bool,
    /// 是否必填
    required: bool,
    /// 错误提示
    error: Option<&'a str>,
    /// 占位提示
    placeholder: &'a str,
    /// 是否显示字符计数
    char_count: bool,
}

impl<'a> InputField<'a> {
    pub fn new(title: &'a str, value: &'a str) -> Self {
        Self {
            title,
            value,
            active: false,
            required: false,
            error: None,
            placeholder: "",
            char_count: false,
        }
    }

    pub fn active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    pub fn error(mut self, error: Option<&'a str>) -> Self {
        self.error = error;
        self
    }

    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = placeholder;
        self
    }

    pub fn char_count(mut self, show: bool) -> Self {
        self.char_count = show;
        self
    }

    /// 渲染高度:错误时多一行
    pub fn height(&self) -> u16 {
        if self.error.is_some() { 4 } else { 3 }
    }

    fn display_title(&self) -> String {
        let marker = if self.required { "*" } else { "" };
        if self.char_count {
            format!(
                " {}{} ({}) ",
                self.title,
                marker,
                self.value.chars().count()
            )
        } else {
            format!(" {}{} ", self.title, marker)
        }
    }

    fn border_style(&self) -> Style {
        if self.error.is_some() {
            Style::default().fg(colors::ERROR)
        } else if self.active {
            Style::default()
                .fg(colors::PRIMARY)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(colors::MUTED)
        }
    }

    pub fn render(self, frame: &mut Frame, area: Rect) {
        let chunks = if self.error.is_some() {
            Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Length(3), Constraint::Length(1)])
                .split(area)
        } else {
            Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Length(3)])
                .split(area)
        };

        let content: Line = if self.value.is_empty() && !self.active {
            Line::from(Span::styled(
                self.placeholder.to_string(),
                Style::default().fg(colors::MUTED),
            ))
        } else {
            let mut spans = vec![Span::styled(
                self.value.to_string(),
                Style::default().fg(colors::TEXT),
            )];
            if self.active {
                spans.push(Span::styled(
                    "▌",
                    Style::default().fg(colors::PRIMARY),
                ));
            }
            Line::from(spans)
        };

        let input = Paragraph::new(content).block(
            Block::default()
                .borders(Borders::ALL)
                .title(self.display_title())
                .border_style(self.border_style()),
        );
        frame.render_widget(input, chunks[0]);

        if let Some(error) = self.error
            && chunks.len() > 1
        {
            let error_line = Paragraph::new(Span::styled(
                format!("  ✗ {}", error),
                Style::default().fg(colors::ERROR),
            ));
            frame.render_widget(error_line, chunks[1]);
        }
    }
}
