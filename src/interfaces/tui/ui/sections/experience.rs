//! 经历区块
//!
//! 时间线条目,依次从左侧滑入

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use crate::content::SectionId;
use crate::effects::RevealKind;
use crate::interfaces::tui::app::{App, RevealId};
use crate::interfaces::tui::constants::colors;
use crate::interfaces::tui::ui::fx::apply_reveal;
use crate::interfaces::tui::ui::page::PageBuilder;
use crate::interfaces::tui::ui::sections::section_heading;
use crate::utils::text::wrap;

pub fn build(builder: &mut PageBuilder, app: &App) {
    if app.profile.timeline.is_empty() {
        return;
    }
    builder.begin_section(SectionId::Experience);
    section_heading(builder, "Experience");

    let width = builder.width();
    let margin = (width / 6).max(2) as usize;
    let text_width = (width as usize).saturating_sub(margin + 8).max(20);
    let indent = " ".repeat(margin);
    let last = app.profile.timeline.len() - 1;

    for (i, entry) in app.profile.timeline.iter().enumerate() {
        let mut lines: Vec<Line<'static>> = Vec::new();

        lines.push(Line::from(vec![
            Span::raw(indent.clone()),
            Span::styled("● ", Style::default().fg(colors::ACCENT)),
            Span::styled(
                entry.period.clone(),
                Style::default().fg(colors::MUTED),
            ),
        ]));
        lines.push(Line::from(vec![
            Span::raw(indent.clone()),
            Span::styled("│ ", Style::default().fg(colors::MUTED)),
            Span::styled(
                entry.role.clone(),
                Style::default()
                    .fg(colors::TEXT)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(" · ", Style::default().fg(colors::MUTED)),
            Span::styled(entry.company.clone(), Style::default().fg(colors::PRIMARY)),
        ]));
        for wrapped in wrap(&entry.summary, text_width) {
            lines.push(Line::from(vec![
                Span::raw(indent.clone()),
                Span::styled("│ ", Style::default().fg(colors::MUTED)),
                Span::styled(wrapped, Style::default().fg(colors::MUTED)),
            ]));
        }
        if i < last {
            lines.push(Line::from(vec![
                Span::raw(indent.clone()),
                Span::styled("│", Style::default().fg(colors::MUTED)),
            ]));
        }

        let top = builder.row();
        let height = lines.len() as u16;
        builder.reveal(RevealId::TimelineRow(i), top, height);
        let progress = app.reveals.progress(RevealId::TimelineRow(i));
        builder.push_many(apply_reveal(lines, RevealKind::SlideLeft, progress));
    }

    builder.blank(2);
    builder.end_section();
}
