//! 关于区块
//!
//! 自我介绍段落与三张统计卡片,进入视口时上浮显现、数字滚动

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use crate::content::SectionId;
use crate::effects::RevealKind;
use crate::interfaces::tui::app::{App, HoverTarget, RevealId};
use crate::interfaces::tui::constants::colors;
use crate::interfaces::tui::ui::fx::apply_reveal;
use crate::interfaces::tui::ui::page::PageBuilder;
use crate::interfaces::tui::ui::sections::section_heading;
use crate::utils::text::wrap;

/// 统计卡片高度:边框两行、数值一行、标签一行
const CARD_HEIGHT: u16 = 4;
/// 卡片间距
const CARD_GAP: u16 = 2;

pub fn build(builder: &mut PageBuilder, app: &App) {
    builder.begin_section(SectionId::About);
    section_heading(builder, "About");

    push_intro(builder, app);
    builder.blank(1);
    push_stat_cards(builder, app);

    builder.blank(2);
    builder.end_section();
}

/// 介绍段落,整块上浮显现
fn push_intro(builder: &mut PageBuilder, app: &App) {
    let width = builder.width();
    let text_width = width.saturating_sub(8).max(20) as usize;
    let indent = " ".repeat(((width as usize).saturating_sub(text_width)) / 2);

    let mut lines: Vec<Line<'static>> = Vec::new();
    for (i, paragraph) in app.profile.about.iter().enumerate() {
        if i > 0 {
            lines.push(Line::default());
        }
        for wrapped in wrap(paragraph, text_width) {
            lines.push(Line::from(vec![
                Span::raw(indent.clone()),
                Span::styled(wrapped, Style::default().fg(colors::TEXT)),
            ]));
        }
    }

    let top = builder.row();
    let height = lines.len() as u16;
    builder.reveal(RevealId::AboutIntro, top, height);
    let progress = app.reveals.progress(RevealId::AboutIntro);
    builder.push_many(apply_reveal(lines, RevealKind::FadeUp, progress));
}

/// 统计卡片行
///
/// Cards sit side by side on shared rows, so each one fades in place
/// instead of sliding. The counters themselves only run once their card
/// has started revealing.
fn push_stat_cards(builder: &mut PageBuilder, app: &App) {
    let stats = &app.profile.stats;
    if stats.is_empty() {
        return;
    }
    let width = builder.width();
    let count = stats.len() as u16;
    let card_width = ((width.saturating_sub(4) - (count - 1) * CARD_GAP) / count).min(22);
    let total = count * card_width + (count - 1) * CARD_GAP;
    let margin = (width.saturating_sub(total)) / 2;
    let inner = card_width.saturating_sub(2) as usize;

    let top = builder.row();
    for (i, _) in stats.iter().enumerate() {
        builder.reveal(RevealId::Stat(i), top, CARD_HEIGHT);
        builder.zone(
            top,
            CARD_HEIGHT,
            (
                margin + i as u16 * (card_width + CARD_GAP),
                margin + i as u16 * (card_width + CARD_GAP) + card_width,
            ),
            HoverTarget::StatCard(i),
        );
    }

    for row_idx in 0..CARD_HEIGHT {
        let mut spans: Vec<Span<'static>> = vec![Span::raw(" ".repeat(margin as usize))];
        for (i, stat) in stats.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw(" ".repeat(CARD_GAP as usize)));
            }
            let progress = app.reveals.progress(RevealId::Stat(i));
            if progress <= 0.0 {
                spans.push(Span::raw(" ".repeat(card_width as usize)));
                continue;
            }
            let hovered = app.hovered == Some(HoverTarget::StatCard(i));
            spans.extend(card_row_spans(
                row_idx,
                inner,
                &app.counters[i].display(),
                &stat.label,
                progress,
                hovered,
            ));
        }
        builder.push(Line::from(spans));
    }
}

/// 单张卡片的一行
fn card_row_spans(
    row_idx: u16,
    inner: usize,
    value: &str,
    label: &str,
    progress: f32,
    hovered: bool,
) -> Vec<Span<'static>> {
    let border_color = if hovered {
        colors::ACCENT
    } else if progress < 1.0 {
        colors::MUTED
    } else {
        colors::PRIMARY
    };
    let border = Style::default().fg(border_color);

    match row_idx {
        0 => vec![Span::styled(format!("╭{}╮", "─".repeat(inner)), border)],
        1 => vec![
            Span::styled("│", border),
            Span::styled(
                center_in(value, inner),
                Style::default()
                    .fg(colors::PRIMARY)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("│", border),
        ],
        2 => vec![
            Span::styled("│", border),
            Span::styled(center_in(label, inner), Style::default().fg(colors::MUTED)),
            Span::styled("│", border),
        ],
        _ => vec![Span::styled(format!("╰{}╯", "─".repeat(inner)), border)],
    }
}

fn center_in(text: &str, width: usize) -> String {
    let len = text.chars().count().min(width);
    let shown: String = text.chars().take(len).collect();
    let left = (width - len) / 2;
    let right = width - len - left;
    format!("{}{}{}", " ".repeat(left), shown, " ".repeat(right))
}
