//! 项目区块
//!
//! 项目卡片,悬停时边框变色并朝鼠标一角倾斜

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use crate::content::{Project, SectionId};
use crate::interfaces::tui::app::{App, HoverTarget, RevealId};
use crate::interfaces::tui::constants::colors;
use crate::effects::RevealKind;
use crate::interfaces::tui::ui::fx::apply_reveal;
use crate::interfaces::tui::ui::page::PageBuilder;
use crate::interfaces::tui::ui::sections::section_heading;
use crate::utils::text::wrap;

/// 悬停倾斜标记:按鼠标所在象限替换对应圆角
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TiltCorner {
    None,
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

pub fn build(builder: &mut PageBuilder, app: &App) {
    if app.profile.projects.is_empty() {
        return;
    }
    builder.begin_section(SectionId::Projects);
    section_heading(builder, "Projects");

    let width = builder.width();
    let card_width = width.saturating_sub(8).clamp(24, 64);
    let margin = ((width.saturating_sub(card_width)) / 2) as usize;
    let inner = card_width.saturating_sub(4) as usize;

    for (i, project) in app.profile.projects.iter().enumerate() {
        let top = builder.row();
        let hovered = matches!(
            app.hovered,
            Some(HoverTarget::ProjectCard(n) | HoverTarget::ProjectLink(n)) if n == i
        );
        let tilt = tilt_corner(app, i, hovered);
        let lines = card_lines(project, inner, margin, hovered, tilt);
        let height = lines.len() as u16;

        builder.reveal(RevealId::ProjectCard(i), top, height);
        builder.zone(
            top,
            height,
            (margin as u16, margin as u16 + card_width),
            HoverTarget::ProjectCard(i),
        );
        if !project.link.is_empty() {
            // The link sits on the second-to-last row of the card.
            builder.zone(
                top + height - 2,
                1,
                (margin as u16 + 2, margin as u16 + 2 + project.link.chars().count() as u16 + 2),
                HoverTarget::ProjectLink(i),
            );
        }

        let progress = app.reveals.progress(RevealId::ProjectCard(i));
        builder.push_many(apply_reveal(lines, RevealKind::FadeUp, progress));
        builder.blank(1);
    }

    builder.blank(1);
    builder.end_section();
}

/// 鼠标位于卡片的哪个象限
fn tilt_corner(app: &App, index: usize, hovered: bool) -> TiltCorner {
    if !hovered || app.effects.reduced_motion {
        return TiltCorner::None;
    }
    let Some((mx, my)) = app.cursor.dot() else {
        return TiltCorner::None;
    };
    let Some(zone) = app
        .hover_zones
        .iter()
        .find(|z| z.target == HoverTarget::ProjectCard(index))
    else {
        return TiltCorner::None;
    };
    let center_x = zone.rect.x + zone.rect.width / 2;
    let center_y = zone.rect.y + zone.rect.height / 2;
    match (mx < center_x, my < center_y) {
        (true, true) => TiltCorner::TopLeft,
        (false, true) => TiltCorner::TopRight,
        (true, false) => TiltCorner::BottomLeft,
        (false, false) => TiltCorner::BottomRight,
    }
}

fn card_lines(
    project: &Project,
    inner: usize,
    margin: usize,
    hovered: bool,
    tilt: TiltCorner,
) -> Vec<Line<'static>> {
    let border_color = if hovered { colors::ACCENT } else { colors::MUTED };
    let border = Style::default().fg(border_color);
    let indent = " ".repeat(margin);
    let mut lines: Vec<Line<'static>> = Vec::new();

    // Top border carries the project name.
    let name_len = project.name.chars().count().min(inner.saturating_sub(4));
    let shown_name: String = project.name.chars().take(name_len).collect();
    let dashes = inner.saturating_sub(name_len + 3);
    let tl = if tilt == TiltCorner::TopLeft { "◤" } else { "╭" };
    let tr = if tilt == TiltCorner::TopRight { "◥" } else { "╮" };
    lines.push(Line::from(vec![
        Span::raw(indent.clone()),
        Span::styled(format!("{}─ ", tl), border),
        Span::styled(
            shown_name,
            Style::default()
                .fg(colors::PRIMARY)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!(" {}{}", "─".repeat(dashes), tr), border),
    ]));

    let body_row = |content: Vec<Span<'static>>, used: usize| -> Line<'static> {
        let mut spans = vec![
            Span::raw(indent.clone()),
            Span::styled("│ ".to_string(), border),
        ];
        spans.extend(content);
        spans.push(Span::raw(" ".repeat(inner.saturating_sub(used))));
        spans.push(Span::styled(" │".to_string(), border));
        Line::from(spans)
    };

    for wrapped in wrap(&project.description, inner) {
        let used = wrapped.chars().count();
        lines.push(body_row(
            vec![Span::styled(wrapped, Style::default().fg(colors::TEXT))],
            used,
        ));
    }

    if !project.tech.is_empty() {
        let chips = project.tech.join(" · ");
        let shown: String = chips.chars().take(inner).collect();
        let used = shown.chars().count();
        lines.push(body_row(
            vec![Span::styled(shown, Style::default().fg(colors::TERTIARY))],
            used,
        ));
    }

    if !project.link.is_empty() {
        let link_style = if hovered {
            Style::default()
                .fg(colors::PRIMARY)
                .add_modifier(Modifier::UNDERLINED)
        } else {
            Style::default().fg(colors::MUTED)
        };
        let shown: String = project.link.chars().take(inner.saturating_sub(2)).collect();
        let used = shown.chars().count() + 2;
        lines.push(body_row(
            vec![
                Span::styled("↗ ", Style::default().fg(colors::PRIMARY)),
                Span::styled(shown, link_style),
            ],
            used,
        ));
    }

    let bl = if tilt == TiltCorner::BottomLeft { "◣" } else { "╰" };
    let br = if tilt == TiltCorner::BottomRight { "◢" } else { "╯" };
    lines.push(Line::from(vec![
        Span::raw(indent),
        Span::styled(format!("{}{}{}", bl, "─".repeat(inner + 2), br), border),
    ]));

    lines
}
