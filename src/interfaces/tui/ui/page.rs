//! 页面装配与渲染
//!
//! 先把五个区块装配成一整页文本行,记录区块范围、入场动画位置与可点击
//! 区域,再按滚动偏移切出可见窗口渲染

use ratatui::{
    Frame,
    layout::Rect,
    text::Line,
    widgets::Paragraph,
};

use crate::content::SectionId;
use crate::effects::SectionExtent;
use crate::interfaces::tui::app::{App, HoverTarget, HoverZone, RevealId};
use crate::interfaces::tui::constants::{CONTENT_MAX_WIDTH, colors};
use crate::interfaces::tui::ui::sections;

/// 文档坐标里的可点击区域,渲染时映射到屏幕坐标
#[derive(Debug, Clone, Copy)]
pub struct DocZone {
    pub top: u16,
    pub height: u16,
    /// 列范围(起,止),相对内容区左缘
    pub cols: (u16, u16),
    pub target: HoverTarget,
}

/// 装配完成的整页
pub struct PageLayout {
    pub lines: Vec<Line<'static>>,
    pub sections: Vec<SectionExtent>,
    pub zones: Vec<DocZone>,
    pub reveal_extents: Vec<(RevealId, u16, u16)>,
}

/// 页面装配器
pub struct PageBuilder {
    width: u16,
    lines: Vec<Line<'static>>,
    sections: Vec<SectionExtent>,
    zones: Vec<DocZone>,
    reveal_extents: Vec<(RevealId, u16, u16)>,
    open_section: Option<(SectionId, u16)>,
}

impl PageBuilder {
    pub fn new(width: u16) -> Self {
        Self {
            width,
            lines: Vec::new(),
            sections: Vec::new(),
            zones: Vec::new(),
            reveal_extents: Vec::new(),
            open_section: None,
        }
    }

    /// 内容区宽度
    pub fn width(&self) -> u16 {
        self.width
    }

    /// 下一行的行号
    pub fn row(&self) -> u16 {
        self.lines.len() as u16
    }

    pub fn push(&mut self, line: Line<'static>) {
        self.lines.push(line);
    }

    pub fn push_many(&mut self, lines: Vec<Line<'static>>) {
        self.lines.extend(lines);
    }

    pub fn blank(&mut self, count: u16) {
        for _ in 0..count {
            self.lines.push(Line::default());
        }
    }

    /// 开始一个区块,记录起始行
    pub fn begin_section(&mut self, id: SectionId) {
        self.open_section = Some((id, self.row()));
    }

    /// 结束当前区块并记录范围
    pub fn end_section(&mut self) {
        if let Some((id, top)) = self.open_section.take() {
            self.sections.push(SectionExtent {
                id,
                top,
                height: self.row().saturating_sub(top),
            });
        }
    }

    /// 注册可点击区域(文档坐标)
    pub fn zone(&mut self, top: u16, height: u16, cols: (u16, u16), target: HoverTarget) {
        self.zones.push(DocZone {
            top,
            height,
            cols,
            target,
        });
    }

    /// 登记一个入场动画块的位置
    pub fn reveal(&mut self, id: RevealId, top: u16, height: u16) {
        self.reveal_extents.push((id, top, height));
    }

    pub fn finish(mut self) -> PageLayout {
        self.end_section();
        PageLayout {
            lines: self.lines,
            sections: self.sections,
            zones: self.zones,
            reveal_extents: self.reveal_extents,
        }
    }
}

/// 渲染页面内容区
pub fn draw_page(frame: &mut Frame, app: &mut App, area: Rect) {
    app.viewport = area;

    let content_width = area.width.min(CONTENT_MAX_WIDTH);
    let margin = (area.width - content_width) / 2;
    let content_area = Rect {
        x: area.x + margin,
        y: area.y,
        width: content_width,
        height: area.height,
    };

    let mut builder = PageBuilder::new(content_width);
    sections::build_page(&mut builder, app);
    let layout = builder.finish();

    app.page_height = layout.lines.len() as u16;
    app.sections = layout.sections;
    app.scroll.set_bounds(app.page_height, area.height);
    for (id, top, height) in &layout.reveal_extents {
        app.reveals.set_extent(*id, *top, *height);
    }

    let offset = app.scroll.row_offset();
    let end = offset.saturating_add(area.height).min(app.page_height);
    let visible: Vec<Line<'static>> = layout.lines[offset as usize..end as usize].to_vec();
    frame.render_widget(Paragraph::new(visible), content_area);

    if app.effects.parallax && !app.effects.reduced_motion {
        draw_orbs(frame, app, area);
    }

    for zone in &layout.zones {
        let Some(rect) = zone_to_screen(zone, offset, content_area) else {
            continue;
        };
        app.hover_zones.push(HoverZone {
            rect,
            target: zone.target,
        });
    }
}

/// 文档区域映射到屏幕矩形,完全滚出视口时返回 None
fn zone_to_screen(zone: &DocZone, offset: u16, content_area: Rect) -> Option<Rect> {
    let doc_bottom = zone.top + zone.height;
    let view_bottom = offset + content_area.height;
    if doc_bottom <= offset || zone.top >= view_bottom {
        return None;
    }
    let visible_top = zone.top.max(offset);
    let visible_bottom = doc_bottom.min(view_bottom);
    let (col_start, col_end) = zone.cols;
    let width = col_end.saturating_sub(col_start).min(
        content_area.width.saturating_sub(col_start),
    );
    if width == 0 {
        return None;
    }
    Some(Rect {
        x: content_area.x + col_start,
        y: content_area.y + (visible_top - offset),
        width,
        height: visible_bottom - visible_top,
    })
}

/// 背景视差光球,只落在空白单元格上
fn draw_orbs(frame: &mut Frame, app: &App, area: Rect) {
    const ORB_COLORS: [ratatui::style::Color; 3] =
        [colors::PRIMARY, colors::ACCENT, colors::TERTIARY];

    let offset = app.scroll.offset();
    let buf = frame.buffer_mut();

    for (i, orb) in app.parallax.orbs().iter().enumerate() {
        let Some(row) = app.parallax.screen_row(i, offset) else {
            continue;
        };
        let center_y = row.round();
        if center_y < -(orb.radius as f32) || center_y >= (area.height + orb.radius) as f32 {
            continue;
        }
        let center_x =
            (orb.col_percent as i32 * (area.width.saturating_sub(1)) as i32) / 100;
        let color = ORB_COLORS[i % ORB_COLORS.len()];
        let radius = orb.radius as i32;

        for dy in -radius..=radius {
            let span = (radius - dy.abs()) * 2;
            for dx in -span..=span {
                let x = area.x as i32 + center_x + dx;
                let y = area.y as i32 + center_y as i32 + dy;
                if x < area.x as i32
                    || y < area.y as i32
                    || x >= (area.x + area.width) as i32
                    || y >= (area.y + area.height) as i32
                {
                    continue;
                }
                if let Some(cell) = buf.cell_mut((x as u16, y as u16))
                    && cell.symbol() == " "
                {
                    cell.set_char('░');
                    cell.set_fg(color);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_tracks_rows_and_sections() {
        let mut b = PageBuilder::new(80);
        b.begin_section(SectionId::Home);
        b.blank(2);
        b.push(Line::from("hello"));
        b.end_section();
        b.begin_section(SectionId::About);
        b.blank(4);
        let layout = b.finish();

        assert_eq!(layout.lines.len(), 7);
        assert_eq!(layout.sections.len(), 2);
        assert_eq!(layout.sections[0].top, 0);
        assert_eq!(layout.sections[0].height, 3);
        assert_eq!(layout.sections[1].top, 3);
        assert_eq!(layout.sections[1].height, 4);
    }

    #[test]
    fn test_finish_closes_open_section() {
        let mut b = PageBuilder::new(80);
        b.begin_section(SectionId::Contact);
        b.blank(5);
        let layout = b.finish();
        assert_eq!(layout.sections.len(), 1);
        assert_eq!(layout.sections[0].height, 5);
    }

    #[test]
    fn test_zone_to_screen_scrolled_partially_out() {
        let content = Rect::new(10, 3, 80, 20);
        let zone = DocZone {
            top: 5,
            height: 4,
            cols: (2, 12),
            target: HoverTarget::Email,
        };
        // Viewport starts two rows into the zone.
        let rect = zone_to_screen(&zone, 7, content).unwrap();
        assert_eq!(rect.y, 3);
        assert_eq!(rect.height, 2);
        assert_eq!(rect.x, 12);
        assert_eq!(rect.width, 10);

        // Fully above the viewport.
        assert!(zone_to_screen(&zone, 9, content).is_none());
    }

    #[test]
    fn test_zone_to_screen_below_viewport() {
        let content = Rect::new(0, 0, 80, 10);
        let zone = DocZone {
            top: 50,
            height: 3,
            cols: (0, 10),
            target: HoverTarget::ContactButton,
        };
        assert!(zone_to_screen(&zone, 0, content).is_none());
        assert!(zone_to_screen(&zone, 45, content).is_some());
    }
}
