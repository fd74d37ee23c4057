//! 通用 UI 组件
//!
//! 状态栏、快捷键页脚与提示弹窗

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::interfaces::tui::app::{App, CurrentScreen};
use crate::interfaces::tui::constants::{colors, popup};
use crate::interfaces::tui::ui::widgets::{Popup, SendIndicator};

/// 绘制状态栏
pub fn draw_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let (text, style) = if !app.error_message.is_empty() {
        (
            format!(" [ERROR] {} ", app.error_message),
            Style::default()
                .fg(ratatui::style::Color::White)
                .bg(colors::ERROR)
                .add_modifier(Modifier::BOLD),
        )
    } else if app.form.is_sending() {
        (
            format!(
                " {} {} ",
                SendIndicator::spinner_frame(app.clock_ms),
                app.status_message
            ),
            Style::default().fg(colors::WARNING),
        )
    } else if !app.status_message.is_empty() {
        let style = if app.status_message.contains("successfully") {
            Style::default()
                .fg(ratatui::style::Color::Black)
                .bg(colors::SUCCESS)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(colors::TEXT)
        };
        (format!(" [STATUS] {} ", app.status_message), style)
    } else {
        (" Ready ".to_string(), Style::default().fg(colors::MUTED))
    };

    let position = position_indicator(app);
    let status = Paragraph::new(Line::from(vec![
        Span::styled(text, style),
        Span::raw(" "),
        Span::styled(position, Style::default().fg(colors::MUTED)),
    ]))
    .block(Block::default().borders(Borders::ALL).title(" Status "));
    frame.render_widget(status, area);
}

/// 右侧位置指示:当前区块与滚动百分比
fn position_indicator(app: &App) -> String {
    let section = app
        .active_section
        .map(|s| s.title())
        .unwrap_or("-");
    let max = app.scroll.max_offset();
    let percent = if max > 0.0 {
        ((app.scroll.offset() / max) * 100.0).round() as u16
    } else {
        0
    };
    format!("§ {} · {}%", section, percent)
}

/// 绘制快捷键页脚
pub fn draw_footer(frame: &mut Frame, app: &App, area: Rect) {
    let shortcuts: Vec<(&str, &str)> = match app.current_screen {
        CurrentScreen::Browse => vec![
            ("j/k", "scroll"),
            ("1-5", "jump"),
            ("Tab", "next section"),
            ("m", "message"),
            ("c", "copy email"),
            ("?", "help"),
            ("q", "quit"),
        ],
        CurrentScreen::Contact => vec![
            ("Tab", "next field"),
            ("Enter", "confirm"),
            ("Esc", "close"),
        ],
        CurrentScreen::Help => vec![("Esc", "close")],
        CurrentScreen::Exiting => vec![("y", "quit"), ("n", "stay")],
    };

    let mut spans: Vec<Span<'static>> = vec![Span::raw(" ")];
    for (i, (key, label)) in shortcuts.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled("  ·  ", Style::default().fg(colors::MUTED)));
        }
        spans.push(Span::styled(
            format!("[{}]", key),
            Style::default()
                .fg(colors::PRIMARY)
                .add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled(
            format!(" {}", label),
            Style::default().fg(colors::MUTED),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// 发送失败等提示弹窗,按任意键关闭
pub fn draw_alert(frame: &mut Frame, app: &App) {
    let Some(message) = &app.alert else {
        return;
    };
    let inner = Popup::new("Notice", &popup::ALERT)
        .border_color(colors::ERROR)
        .render(frame);

    let body = Paragraph::new(vec![
        Line::default(),
        Line::from(Span::styled(
            message.clone(),
            Style::default().fg(ratatui::style::Color::White),
        ))
        .centered(),
        Line::default(),
        Line::from(Span::styled(
            "press any key to dismiss",
            Style::default().fg(colors::MUTED),
        ))
        .centered(),
    ])
    .wrap(Wrap { trim: false });
    frame.render_widget(body, inner);
}

/// 终端过小提示
pub fn draw_too_small(frame: &mut Frame, area: Rect) {
    let notice = Paragraph::new(vec![
        Line::default(),
        Line::from("Terminal too small").centered(),
        Line::from(Span::styled(
            "need at least 40x15",
            Style::default().fg(colors::MUTED),
        ))
        .centered(),
    ]);
    frame.render_widget(notice, area);
}
