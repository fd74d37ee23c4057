//! 首屏区块
//!
//! 横幅、姓名(带故障抖动)、打字机副标题、漂浮徽章与滚动提示

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use crate::content::SectionId;
use crate::interfaces::tui::app::{App, HoverTarget};
use crate::interfaces::tui::constants::colors;
use crate::interfaces::tui::ui::page::PageBuilder;
use crate::interfaces::tui::ui::sections::{centered_start, pad_left};

/// 徽章上下漂浮周期
const BOB_PERIOD_MS: u64 = 3000;
/// 相邻徽章的相位差
const BOB_PHASE_MS: u64 = 500;

pub fn build(builder: &mut PageBuilder, app: &App) {
    builder.begin_section(SectionId::Home);
    let width = builder.width();

    builder.blank(2);

    for line in &app.banner {
        builder.push(
            Line::from(Span::styled(
                line.clone(),
                Style::default().fg(colors::PRIMARY),
            ))
            .centered(),
        );
    }
    builder.blank(1);

    push_glitched_name(builder, app, width);
    builder.blank(1);

    builder.push(
        Line::from(Span::styled(
            app.profile.headline.clone(),
            Style::default()
                .fg(colors::TEXT)
                .add_modifier(Modifier::BOLD),
        ))
        .centered(),
    );
    builder.blank(1);

    for typed in app.typewriter.rendered() {
        let mut spans = vec![Span::styled(
            typed.text.to_string(),
            Style::default().fg(colors::MUTED),
        )];
        if typed.typing {
            spans.push(Span::styled("▌", Style::default().fg(colors::PRIMARY)));
        }
        builder.push(Line::from(spans).centered());
    }
    builder.blank(1);

    push_badges(builder, app);
    builder.blank(1);

    push_contact_line(builder, app, width);
    builder.blank(2);

    builder.push(
        Line::from(Span::styled(
            "▼  scroll to explore",
            Style::default().fg(colors::MUTED),
        ))
        .centered(),
    );
    builder.blank(3);
    builder.end_section();
}

/// 姓名行与上下两条故障残影
///
/// The glitch offsets land in a 3-row band: one ghost above the name, one
/// below, each shifted sideways by its own offset. Between glitches both
/// ghost rows are blank, so the band never changes the page height.
fn push_glitched_name(builder: &mut PageBuilder, app: &App, width: u16) {
    let name = &app.profile.name;
    let name_len = name.chars().count();
    let start = centered_start(width, name_len);
    let shadow = if app.effects.glitch && !app.effects.reduced_motion {
        app.glitch.shadow()
    } else {
        None
    };

    let ghost_row = |dx: i16, color| -> Line<'static> {
        let shifted = (start as i16 + dx).max(0) as u16;
        Line::from(vec![
            pad_left(shifted),
            Span::styled(name.clone(), Style::default().fg(color)),
        ])
    };

    match shadow {
        Some(s) => builder.push(ghost_row(s.cells_1().0, colors::ACCENT)),
        None => builder.blank(1),
    }

    builder.push(Line::from(vec![
        pad_left(start),
        Span::styled(
            name.clone(),
            Style::default()
                .fg(ratatui::style::Color::White)
                .add_modifier(Modifier::BOLD),
        ),
    ]));

    match shadow {
        Some(s) => builder.push(ghost_row(s.cells_2().0, colors::PRIMARY)),
        None => builder.blank(1),
    }
}

/// 两行徽章带,各徽章按相位上下漂浮
fn push_badges(builder: &mut PageBuilder, app: &App) {
    if app.profile.badges.is_empty() {
        builder.blank(2);
        return;
    }

    let mut top = String::new();
    let mut bottom = String::new();
    for (i, badge) in app.profile.badges.iter().enumerate() {
        let chip = format!("⟨ {} ⟩", badge);
        let chip_len = chip.chars().count();
        if bob_up(app, i) {
            top.push_str(&chip);
            bottom.push_str(&" ".repeat(chip_len));
        } else {
            top.push_str(&" ".repeat(chip_len));
            bottom.push_str(&chip);
        }
        top.push_str("  ");
        bottom.push_str("  ");
    }

    let style = Style::default().fg(colors::TERTIARY);
    builder.push(Line::from(Span::styled(top, style)).centered());
    builder.push(Line::from(Span::styled(bottom, style)).centered());
}

fn bob_up(app: &App, index: usize) -> bool {
    if app.effects.reduced_motion {
        return false;
    }
    let phase = ((app.clock_ms + index as u64 * BOB_PHASE_MS) % BOB_PERIOD_MS) as f32
        / BOB_PERIOD_MS as f32;
    (phase * std::f32::consts::TAU).sin() > 0.0
}

/// 位置与邮箱行,邮箱可点击复制
fn push_contact_line(builder: &mut PageBuilder, app: &App, width: u16) {
    let location = app.profile.location.as_str();
    let email = app.profile.email.as_str();
    if location.is_empty() && email.is_empty() {
        builder.blank(1);
        return;
    }

    let separator = if !location.is_empty() && !email.is_empty() {
        "   ·   "
    } else {
        ""
    };
    let total = location.chars().count() + separator.chars().count() + email.chars().count();
    let start = centered_start(width, total);

    let email_style = if app.hovered == Some(HoverTarget::Email) {
        Style::default()
            .fg(colors::PRIMARY)
            .add_modifier(Modifier::UNDERLINED)
    } else {
        Style::default().fg(colors::TEXT)
    };

    let row = builder.row();
    builder.push(Line::from(vec![
        pad_left(start),
        Span::styled(location.to_string(), Style::default().fg(colors::MUTED)),
        Span::styled(separator, Style::default().fg(colors::MUTED)),
        Span::styled(email.to_string(), email_style),
    ]));

    if !email.is_empty() {
        let email_start = start + (location.chars().count() + separator.chars().count()) as u16;
        builder.zone(
            row,
            1,
            (email_start, email_start + email.chars().count() as u16),
            HoverTarget::Email,
        );
    }
}
