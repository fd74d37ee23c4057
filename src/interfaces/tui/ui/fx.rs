//! 视觉效果应用层
//!
//! 将 `effects` 模块计算出的纯状态落到 ratatui 的行与缓冲区上:
//! 入场动画的行变换、彩虹滤镜、启动淡入与跟随光标

use ratatui::{
    Frame,
    style::Color,
    text::{Line, Span},
};

use crate::effects::reveal::{SLIDE_COLS, SLIDE_ROWS};
use crate::effects::{RevealKind, ease, rotate_rgb};
use crate::interfaces::tui::app::App;
use crate::interfaces::tui::constants::{INTRO_FADE_MS, colors};

/// 入场动画行变换
///
/// `progress` runs 0 to 1. Fade-up slides the block up from three rows
/// below while brightening; slide-left pulls each line in from six columns
/// left of its resting place. The block never changes height, so page
/// layout stays stable while it animates.
pub fn apply_reveal(
    lines: Vec<Line<'static>>,
    kind: RevealKind,
    progress: f32,
) -> Vec<Line<'static>> {
    if progress >= 1.0 {
        return lines;
    }
    if progress <= 0.0 {
        return lines.iter().map(|_| Line::default()).collect();
    }

    match kind {
        RevealKind::FadeUp => {
            let drop = ((1.0 - progress) * SLIDE_ROWS as f32).round() as usize;
            let keep = lines.len().saturating_sub(drop);
            let mut out: Vec<Line<'static>> = Vec::with_capacity(lines.len());
            for _ in 0..drop {
                out.push(Line::default());
            }
            for line in lines.into_iter().take(keep) {
                out.push(dim_line(line, progress));
            }
            out
        }
        RevealKind::SlideLeft => {
            let cut = ((1.0 - progress) * SLIDE_COLS as f32).round() as usize;
            lines
                .into_iter()
                .map(|line| dim_line(trim_left_chars(line, cut), progress))
                .collect()
        }
    }
}

/// 去掉行首 `count` 个字符,保留样式分段
pub fn trim_left_chars(line: Line<'static>, count: usize) -> Line<'static> {
    if count == 0 {
        return line;
    }
    let alignment = line.alignment;
    let mut remaining = count;
    let mut spans: Vec<Span<'static>> = Vec::with_capacity(line.spans.len());
    for span in line.spans {
        if remaining == 0 {
            spans.push(span);
            continue;
        }
        let char_len = span.content.chars().count();
        if char_len <= remaining {
            remaining -= char_len;
            continue;
        }
        let kept: String = span.content.chars().skip(remaining).collect();
        remaining = 0;
        spans.push(Span::styled(kept, span.style));
    }
    let mut out = Line::from(spans);
    out.alignment = alignment;
    out
}

/// 按动画进度压暗一行
fn dim_line(line: Line<'static>, progress: f32) -> Line<'static> {
    let alignment = line.alignment;
    let spans = line
        .spans
        .into_iter()
        .map(|span| {
            let style = if progress < 0.45 {
                span.style.fg(colors::MUTED)
            } else if progress < 0.85 {
                match span.style.fg {
                    Some(Color::Rgb(r, g, b)) => {
                        span.style.fg(scale_rgb(r, g, b, 0.55))
                    }
                    _ => span.style.fg(Color::Gray),
                }
            } else {
                span.style
            };
            Span::styled(span.content, style)
        })
        .collect::<Vec<_>>();
    let mut out = Line::from(spans);
    out.alignment = alignment;
    out
}

fn scale_rgb(r: u8, g: u8, b: u8, factor: f32) -> Color {
    Color::Rgb(
        (r as f32 * factor) as u8,
        (g as f32 * factor) as u8,
        (b as f32 * factor) as u8,
    )
}

/// 彩虹滤镜:旋转整个缓冲区的 RGB 前景色
///
/// Grayscale cells keep their color, so plain white/gray text survives the
/// filter and only the themed accents cycle.
pub fn apply_rainbow(frame: &mut Frame, app: &App) {
    if !app.rainbow.is_active() {
        return;
    }
    let degrees = app.rainbow.hue_degrees();
    let buf = frame.buffer_mut();
    let area = buf.area;
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            if let Some(cell) = buf.cell_mut((x, y)) {
                if let Color::Rgb(r, g, b) = cell.fg {
                    let (nr, ng, nb) = rotate_rgb(r, g, b, degrees);
                    cell.set_fg(Color::Rgb(nr, ng, nb));
                }
                if let Color::Rgb(r, g, b) = cell.bg {
                    let (nr, ng, nb) = rotate_rgb(r, g, b, degrees);
                    cell.set_bg(Color::Rgb(nr, ng, nb));
                }
            }
        }
    }
}

/// 启动淡入:按进度压暗所有 RGB 前景色
pub fn apply_intro_fade(frame: &mut Frame, app: &App) {
    if app.effects.reduced_motion || app.intro_elapsed_ms >= INTRO_FADE_MS {
        return;
    }
    let progress = ease(app.intro_elapsed_ms as f32 / INTRO_FADE_MS as f32);
    let buf = frame.buffer_mut();
    let area = buf.area;
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            if let Some(cell) = buf.cell_mut((x, y))
                && let Color::Rgb(r, g, b) = cell.fg
            {
                cell.set_fg(scale_rgb(r, g, b, progress));
            }
        }
    }
}

/// 跟随光标:滞后的指示环与即时圆点
pub fn draw_cursor_overlay(frame: &mut Frame, app: &App) {
    if app.effects.reduced_motion || !app.effects.cursor_trail {
        return;
    }
    let Some((dot_x, dot_y)) = app.cursor.dot() else {
        return;
    };
    let frame_area = frame.area();
    let buf = frame.buffer_mut();

    for (x, y) in app.cursor.ring() {
        if x < frame_area.right()
            && y < frame_area.bottom()
            && let Some(cell) = buf.cell_mut((x, y))
        {
            cell.set_char(crate::effects::cursor::RING_GLYPH);
            cell.set_fg(colors::ACCENT);
        }
    }

    if dot_x < frame_area.right()
        && dot_y < frame_area.bottom()
        && let Some(cell) = buf.cell_mut((dot_x, dot_y))
    {
        cell.set_char(app.cursor.dot_glyph());
        cell.set_fg(colors::PRIMARY);
    }
}
