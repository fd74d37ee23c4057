//! 帮助弹窗

use ratatui::{
    Frame,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::interfaces::tui::app::App;
use crate::interfaces::tui::constants::{colors, popup};
use crate::interfaces::tui::ui::widgets::Popup;

pub fn draw_help_screen(frame: &mut Frame, _app: &App) {
    let inner = Popup::new("Help", &popup::HELP)
        .border_color(colors::PRIMARY)
        .render(frame);

    let key = |k: &str| {
        Span::styled(
            format!("{:>10}", k),
            Style::default()
                .fg(colors::PRIMARY)
                .add_modifier(Modifier::BOLD),
        )
    };
    let label = |t: &str| Span::styled(format!("  {}", t), Style::default().fg(colors::TEXT));
    let heading = |t: &str| {
        Line::from(Span::styled(
            t.to_string(),
            Style::default()
                .fg(colors::ACCENT)
                .add_modifier(Modifier::BOLD),
        ))
    };

    let lines = vec![
        heading("Navigation"),
        Line::from(vec![key("j / ↓"), label("scroll down")]),
        Line::from(vec![key("k / ↑"), label("scroll up")]),
        Line::from(vec![key("PgUp/PgDn"), label("scroll by page")]),
        Line::from(vec![key("g / Home"), label("top")]),
        Line::from(vec![key("G / End"), label("bottom")]),
        Line::from(vec![key("1-5"), label("jump to section")]),
        Line::from(vec![key("Tab"), label("next section")]),
        Line::default(),
        heading("Actions"),
        Line::from(vec![key("m"), label("open the contact form")]),
        Line::from(vec![key("c"), label("copy email address")]),
        Line::from(vec![key("?"), label("this help")]),
        Line::from(vec![key("q"), label("quit")]),
        Line::default(),
        heading("Mouse"),
        Line::from(vec![key("move"), label("the dot follows, the ring trails")]),
        Line::from(vec![key("wheel"), label("scroll the page")]),
        Line::from(vec![key("click"), label("nav links, buttons, links")]),
        Line::default(),
        Line::from(Span::styled(
            "Rumor has it an old console cheat code still works here...",
            Style::default().fg(colors::MUTED),
        )),
    ];

    frame.render_widget(Paragraph::new(lines), inner);
}
