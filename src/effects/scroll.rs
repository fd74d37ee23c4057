//! Scroll position and section tracking
//!
//! The page is a virtual column of rows; the viewport slides over it. Offsets
//! are kept as floats so smooth scrolling can ease between rows.

use crate::content::SectionId;

/// Offsets beyond this mark the page as "scrolled" (navbar turns solid).
pub const SCROLLED_THRESHOLD: f32 = 100.0;

/// Fraction of the remaining distance covered per frame during smooth scroll.
pub const SMOOTH_FACTOR: f32 = 0.2;

/// Snap distance; closer than this ends a smooth scroll.
const SETTLE_EPSILON: f32 = 0.5;

#[derive(Debug, Default)]
pub struct ScrollState {
    offset: f32,
    target: Option<f32>,
    max: f32,
}

impl ScrollState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn offset(&self) -> f32 {
        self.offset
    }

    /// Offset rounded to whole rows for rendering.
    pub fn row_offset(&self) -> u16 {
        self.offset.round().max(0.0) as u16
    }

    pub fn max_offset(&self) -> f32 {
        self.max
    }

    /// Record page and viewport heights; clamps current position into range.
    pub fn set_bounds(&mut self, page_height: u16, viewport_height: u16) {
        self.max = page_height.saturating_sub(viewport_height) as f32;
        self.offset = self.offset.clamp(0.0, self.max);
        if let Some(t) = self.target {
            self.target = Some(t.clamp(0.0, self.max));
        }
    }

    /// Manual scroll. Cancels any smooth scroll in flight.
    pub fn scroll_by(&mut self, delta: f32) {
        self.target = None;
        self.offset = (self.offset + delta).clamp(0.0, self.max);
    }

    /// Jump without animation.
    pub fn snap_to(&mut self, offset: f32) {
        self.target = None;
        self.offset = offset.clamp(0.0, self.max);
    }

    /// Begin easing toward `offset`.
    pub fn animate_to(&mut self, offset: f32) {
        self.target = Some(offset.clamp(0.0, self.max));
    }

    pub fn is_animating(&self) -> bool {
        self.target.is_some()
    }

    /// One frame of smooth scrolling.
    pub fn on_tick(&mut self) {
        if let Some(target) = self.target {
            self.offset += (target - self.offset) * SMOOTH_FACTOR;
            if (target - self.offset).abs() < SETTLE_EPSILON {
                self.offset = target;
                self.target = None;
            }
        }
    }

    /// True once the page has moved past the threshold. Exactly at the
    /// threshold still counts as not scrolled.
    pub fn is_scrolled(&self) -> bool {
        self.offset > SCROLLED_THRESHOLD
    }
}

/// Where a section landed in the assembled page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionExtent {
    pub id: SectionId,
    pub top: u16,
    pub height: u16,
}

/// The section owning the current offset, for navbar highlighting.
///
/// A section is active while `offset` lies in `(top - probe, top - probe +
/// height]`. The probe compensates for the fixed navbar so the highlight
/// flips slightly before a section's first row reaches the viewport top.
pub fn active_section(extents: &[SectionExtent], offset: f32, probe: f32) -> Option<SectionId> {
    for extent in extents {
        let window_top = extent.top as f32 - probe;
        if offset > window_top && offset <= window_top + extent.height as f32 {
            return Some(extent.id);
        }
    }
    None
}
