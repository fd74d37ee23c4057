//! Custom cursor trail
//!
//! A dot rides the pointer directly; an outline ring chases it, closing a
//! tenth of the remaining distance per frame. Both grow while hovering an
//! interactive element.

/// Fraction of the remaining distance the outline covers each frame.
pub const EASE_FACTOR: f32 = 0.1;

pub const DOT_GLYPH: char = '•';
pub const HOVER_DOT_GLYPH: char = '●';
pub const RING_GLYPH: char = '·';

/// Ring radius in columns; rows use half of it.
pub const RING_RADIUS: i32 = 2;
pub const HOVER_RING_RADIUS: i32 = 3;

#[derive(Debug)]
pub struct CursorTrail {
    pointer: Option<(f32, f32)>,
    outline: (f32, f32),
    hovering: bool,
}

impl Default for CursorTrail {
    fn default() -> Self {
        Self::new()
    }
}

impl CursorTrail {
    pub fn new() -> Self {
        CursorTrail {
            pointer: None,
            // The outline eases in from the corner on first movement.
            outline: (0.0, 0.0),
            hovering: false,
        }
    }

    pub fn on_mouse_move(&mut self, col: u16, row: u16) {
        self.pointer = Some((col as f32, row as f32));
    }

    pub fn set_hovering(&mut self, hovering: bool) {
        self.hovering = hovering;
    }

    pub fn is_hovering(&self) -> bool {
        self.hovering
    }

    /// Advance the outline one frame toward the pointer.
    pub fn on_tick(&mut self) {
        if let Some((px, py)) = self.pointer {
            self.outline.0 += (px - self.outline.0) * EASE_FACTOR;
            self.outline.1 += (py - self.outline.1) * EASE_FACTOR;
        }
    }

    /// Dot position, once the pointer has moved at least once.
    pub fn dot(&self) -> Option<(u16, u16)> {
        self.pointer.map(|(x, y)| (x.round() as u16, y.round() as u16))
    }

    pub fn dot_glyph(&self) -> char {
        if self.hovering { HOVER_DOT_GLYPH } else { DOT_GLYPH }
    }

    /// Cells forming the trailing ring, clipped to non-negative coordinates.
    pub fn ring(&self) -> Vec<(u16, u16)> {
        if self.pointer.is_none() {
            return Vec::new();
        }
        let radius = if self.hovering {
            HOVER_RING_RADIUS
        } else {
            RING_RADIUS
        };
        // 终端单元格高约为宽的两倍，纵向半径减半才接近圆形
        let v_radius = (radius / 2).max(1);
        let cx = self.outline.0.round() as i32;
        let cy = self.outline.1.round() as i32;
        [
            (cx - radius, cy),
            (cx + radius, cy),
            (cx, cy - v_radius),
            (cx, cy + v_radius),
        ]
        .into_iter()
        .filter(|&(x, y)| x >= 0 && y >= 0)
        .map(|(x, y)| (x as u16, y as u16))
        .collect()
    }

    #[cfg(test)]
    fn outline_pos(&self) -> (f32, f32) {
        self.outline
    }
}
