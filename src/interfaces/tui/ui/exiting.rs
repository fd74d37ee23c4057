//! 退出确认弹窗

use ratatui::{
    Frame,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::interfaces::tui::app::App;
use crate::interfaces::tui::constants::{colors, popup};
use crate::interfaces::tui::ui::widgets::Popup;

pub fn draw_exiting_screen(frame: &mut Frame, _app: &App) {
    let inner = Popup::new("Leaving so soon?", &popup::EXITING)
        .border_color(colors::WARNING)
        .render(frame);

    let body = Paragraph::new(vec![
        Line::default(),
        Line::from("Quit the portfolio?").centered(),
        Line::default(),
        Line::from(vec![
            Span::styled(
                "[y]",
                Style::default()
                    .fg(colors::ERROR)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(" yes   ", Style::default().fg(colors::TEXT)),
            Span::styled(
                "[n]",
                Style::default()
                    .fg(colors::SUCCESS)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(" stay", Style::default().fg(colors::TEXT)),
        ])
        .centered(),
    ]);
    frame.render_widget(body, inner);
}
