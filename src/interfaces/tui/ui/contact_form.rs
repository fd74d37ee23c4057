//! 联系表单弹窗
//!
//! 四个输入字段加发送按钮;发送期间按钮置灰,成功后字段清空

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::interfaces::tui::app::{App, ContactField, HoverTarget, HoverZone};
use crate::interfaces::tui::constants::{colors, popup};
use crate::interfaces::tui::ui::widgets::{InputField, Popup, SendIndicator};

pub fn draw_contact_form(frame: &mut Frame, app: &mut App) {
    let inner = Popup::new("Get In Touch", &popup::CONTACT_FORM)
        .border_color(colors::PRIMARY)
        .render(frame);

    let field_height = |field: ContactField| -> u16 {
        if app.form.get_error(field.field_name()).is_some() {
            4
        } else {
            3
        }
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(field_height(ContactField::Name)),
            Constraint::Length(field_height(ContactField::Email)),
            Constraint::Length(field_height(ContactField::Subject)),
            Constraint::Min(5),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(inner);

    draw_text_field(frame, app, ContactField::Name, chunks[0]);
    draw_text_field(frame, app, ContactField::Email, chunks[1]);
    draw_text_field(frame, app, ContactField::Subject, chunks[2]);
    draw_message_field(frame, app, chunks[3]);
    draw_send_button(frame, app, chunks[4]);

    let hint = Paragraph::new(Line::from(Span::styled(
        "Tab next field · Enter confirm · Esc close",
        Style::default().fg(colors::MUTED),
    )))
    .centered();
    frame.render_widget(hint, chunks[5]);
}

fn draw_text_field(frame: &mut Frame, app: &mut App, field: ContactField, area: Rect) {
    let value = match field {
        ContactField::Name => &app.form.name_input,
        ContactField::Email => &app.form.email_input,
        ContactField::Subject => &app.form.subject_input,
        _ => return,
    };
    let error = app.form.get_error(field.field_name()).map(String::as_str);

    InputField::new(field.display_title(), value)
        .active(app.form.currently_editing == Some(field))
        .required(true)
        .placeholder(field.placeholder())
        .error(error)
        .render(frame, area);

    app.hover_zones.push(HoverZone {
        rect: area,
        target: HoverTarget::FormField(field),
    });
}

/// 多行消息字段
fn draw_message_field(frame: &mut Frame, app: &mut App, area: Rect) {
    let active = app.form.currently_editing == Some(ContactField::Message);
    let error = app.form.get_error("message");

    let border_style = if error.is_some() {
        Style::default().fg(colors::ERROR)
    } else if active {
        Style::default()
            .fg(colors::PRIMARY)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(colors::MUTED)
    };

    let title = match error {
        Some(e) => format!(" Message* · ✗ {} ", e),
        None => format!(
            " Message* ({}) ",
            app.form.message_input.chars().count()
        ),
    };

    let mut text = app.form.message_input.clone();
    if active {
        text.push('▌');
    }
    let display: Paragraph = if text == "▌" || text.is_empty() {
        let placeholder = if active { "▌" } else { ContactField::Message.placeholder() };
        Paragraph::new(Span::styled(
            placeholder.to_string(),
            if active {
                Style::default().fg(colors::PRIMARY)
            } else {
                Style::default().fg(colors::MUTED)
            },
        ))
    } else {
        Paragraph::new(Span::styled(text.clone(), Style::default().fg(colors::TEXT)))
    };

    // Keep the tail in view while typing a long message.
    let inner_height = area.height.saturating_sub(2).max(1);
    let line_count = text.split('\n').count() as u16;
    let scroll = line_count.saturating_sub(inner_height);

    frame.render_widget(
        display
            .wrap(Wrap { trim: false })
            .scroll((scroll, 0))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(title)
                    .border_style(border_style),
            ),
        area,
    );

    app.hover_zones.push(HoverZone {
        rect: area,
        target: HoverTarget::FormField(ContactField::Message),
    });
}

fn draw_send_button(frame: &mut Frame, app: &mut App, area: Rect) {
    let indicator = SendIndicator::new(app.form.send_state, app.clock_ms)
        .active(app.form.currently_editing == Some(ContactField::SendButton))
        .hovered(app.hovered == Some(HoverTarget::FormField(ContactField::SendButton)));

    let label = indicator.label();
    let style = indicator.style();
    let width = label.chars().count() as u16;
    let x = area.x + (area.width.saturating_sub(width)) / 2;

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(label, style))).centered(),
        area,
    );

    app.hover_zones.push(HoverZone {
        rect: Rect {
            x,
            y: area.y,
            width: width.min(area.width),
            height: 1,
        },
        target: HoverTarget::FormField(ContactField::SendButton),
    });
}
