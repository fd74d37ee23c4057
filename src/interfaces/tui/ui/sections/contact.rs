//! 联系区块
//!
//! 邮箱、发消息按钮与社交链接

use chrono::Datelike;
use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use crate::content::SectionId;
use crate::interfaces::tui::app::{App, HoverTarget};
use crate::interfaces::tui::constants::colors;
use crate::interfaces::tui::ui::page::PageBuilder;
use crate::interfaces::tui::ui::sections::{centered_start, pad_left, section_heading};

const INVITE: &str = "Have a project in mind, or just want to say hi? My inbox is always open.";

pub fn build(builder: &mut PageBuilder, app: &App) {
    builder.begin_section(SectionId::Contact);
    section_heading(builder, "Contact");

    let width = builder.width();

    for wrapped in crate::utils::text::wrap(INVITE, width.saturating_sub(10).max(20) as usize) {
        builder.push(
            Line::from(Span::styled(wrapped, Style::default().fg(colors::TEXT))).centered(),
        );
    }
    builder.blank(1);

    push_email_line(builder, app, width);
    builder.blank(1);
    push_message_button(builder, app, width);
    builder.blank(1);
    push_social_links(builder, app, width);
    builder.blank(2);

    let year = chrono::Utc::now().year();
    builder.push(
        Line::from(Span::styled(
            format!("© {} {} · rendered in your terminal", year, app.profile.name),
            Style::default().fg(colors::MUTED),
        ))
        .centered(),
    );
    builder.blank(1);
    builder.end_section();
}

fn push_email_line(builder: &mut PageBuilder, app: &App, width: u16) {
    let email = app.profile.email.as_str();
    if email.is_empty() {
        return;
    }
    let prefix = "send mail  ";
    let total = prefix.len() + email.chars().count();
    let start = centered_start(width, total);

    let email_style = if app.hovered == Some(HoverTarget::Email) {
        Style::default()
            .fg(colors::PRIMARY)
            .add_modifier(Modifier::UNDERLINED | Modifier::BOLD)
    } else {
        Style::default().fg(colors::PRIMARY)
    };

    let row = builder.row();
    builder.push(Line::from(vec![
        pad_left(start),
        Span::styled(prefix, Style::default().fg(colors::MUTED)),
        Span::styled(email.to_string(), email_style),
    ]));
    builder.zone(
        row,
        1,
        (
            start + prefix.len() as u16,
            start + total as u16,
        ),
        HoverTarget::Email,
    );
}

/// 发消息按钮,点击或按 m 打开表单
fn push_message_button(builder: &mut PageBuilder, app: &App, width: u16) {
    let label = "Send a Message";
    let inner_width = label.len() + 4;
    let start = centered_start(width, inner_width + 2);
    let hovered = app.hovered == Some(HoverTarget::ContactButton);

    let border_color = if hovered { colors::ACCENT } else { colors::PRIMARY };
    let border = Style::default().fg(border_color);
    let label_style = if hovered {
        Style::default()
            .fg(colors::ACCENT)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
            .fg(colors::PRIMARY)
            .add_modifier(Modifier::BOLD)
    };

    let row = builder.row();
    builder.push(Line::from(vec![
        pad_left(start),
        Span::styled(format!("╭{}╮", "─".repeat(inner_width)), border),
    ]));
    builder.push(Line::from(vec![
        pad_left(start),
        Span::styled("│", border),
        Span::raw("  "),
        Span::styled(label, label_style),
        Span::raw("  "),
        Span::styled("│", border),
    ]));
    builder.push(Line::from(vec![
        pad_left(start),
        Span::styled(format!("╰{}╯", "─".repeat(inner_width)), border),
    ]));
    builder.zone(
        row,
        3,
        (start, start + inner_width as u16 + 2),
        HoverTarget::ContactButton,
    );
}

fn push_social_links(builder: &mut PageBuilder, app: &App, width: u16) {
    if app.profile.socials.is_empty() {
        return;
    }
    const GAP: &str = "    ";
    let total: usize = app
        .profile
        .socials
        .iter()
        .map(|s| s.label.chars().count() + 2)
        .sum::<usize>()
        + GAP.len() * (app.profile.socials.len() - 1);
    let start = centered_start(width, total);

    let row = builder.row();
    let mut spans: Vec<Span<'static>> = vec![pad_left(start)];
    let mut col = start;
    for (i, social) in app.profile.socials.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(GAP));
            col += GAP.len() as u16;
        }
        let text = format!("{} ↗", social.label);
        let len = text.chars().count() as u16;
        let style = if app.hovered == Some(HoverTarget::SocialLink(i)) {
            Style::default()
                .fg(colors::PRIMARY)
                .add_modifier(Modifier::UNDERLINED)
        } else {
            Style::default().fg(colors::TEXT)
        };
        builder.zone(row, 1, (col, col + len), HoverTarget::SocialLink(i));
        spans.push(Span::styled(text, style));
        col += len;
    }
    builder.push(Line::from(spans));
}
