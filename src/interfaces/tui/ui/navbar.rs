//! 顶部导航栏
//!
//! 品牌名与区块链接;滚动超过阈值后边框点亮,当前区块高亮下划线

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};
use strum::IntoEnumIterator;

use crate::content::SectionId;
use crate::interfaces::tui::app::{App, HoverTarget, HoverZone};
use crate::interfaces::tui::constants::colors;

pub fn draw_navbar(frame: &mut Frame, app: &mut App, area: Rect) {
    // The border brightens once the page has scrolled past the threshold,
    // standing in for the solid backdrop the bar gains on a web page.
    let border_color = if app.scroll.is_scrolled() {
        colors::PRIMARY
    } else {
        colors::MUTED
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border_color));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let brand = format!("⌁ {}", app.profile.name);
    let mut spans: Vec<Span<'static>> = vec![
        Span::styled(
            brand.clone(),
            Style::default()
                .fg(colors::PRIMARY)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("   "),
    ];
    let mut col = inner.x + brand.chars().count() as u16 + 3;

    for id in SectionId::iter() {
        let label = format!(" {} ", id.title());
        let len = label.chars().count() as u16;
        let style = if app.active_section == Some(id) {
            Style::default()
                .fg(colors::PRIMARY)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else if app.hovered == Some(HoverTarget::NavLink(id)) {
            Style::default()
                .fg(ratatui::style::Color::White)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(colors::TEXT)
        };

        if col + len <= inner.x + inner.width {
            app.hover_zones.push(HoverZone {
                rect: Rect {
                    x: col,
                    y: inner.y,
                    width: len,
                    height: 1,
                },
                target: HoverTarget::NavLink(id),
            });
        }

        spans.push(Span::styled(label, style));
        spans.push(Span::raw(" "));
        col += len + 1;
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), inner);
}
