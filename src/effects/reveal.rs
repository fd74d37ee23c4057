//! Scroll-triggered reveal animations
//!
//! Elements start hidden and play a one-shot entrance the first time enough
//! of them is visible. Thresholds and stagger delays mirror the section
//! observer setup: 10% visibility for cards and text, 20% for timeline rows.

use std::collections::HashMap;
use std::hash::Hash;

use super::ease;

/// Default visibility fraction that arms a reveal.
pub const REVEAL_THRESHOLD: f32 = 0.1;
/// Timeline rows wait for a fifth of their height.
pub const TIMELINE_THRESHOLD: f32 = 0.2;
/// Entrance duration.
pub const REVEAL_DURATION_MS: u64 = 600;
/// Stagger step between sibling items.
pub const STAGGER_STEP_MS: u64 = 200;
/// Rows an element rises while fading in.
pub const SLIDE_ROWS: u16 = 3;
/// Columns a timeline row slides in from the left.
pub const SLIDE_COLS: u16 = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealKind {
    /// Fade in while rising from below.
    FadeUp,
    /// Fade in while sliding from the left.
    SlideLeft,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Hidden,
    Running { elapsed_ms: u64 },
    Done,
}

#[derive(Debug, Clone)]
pub struct Reveal {
    kind: RevealKind,
    threshold: f32,
    delay_ms: u64,
    phase: Phase,
    /// Last layout placement, in page rows. Recorded during drawing.
    extent: Option<(u16, u16)>,
}

impl Reveal {
    pub fn new(kind: RevealKind, threshold: f32) -> Self {
        Reveal {
            kind,
            threshold,
            delay_ms: 0,
            phase: Phase::Hidden,
            extent: None,
        }
    }

    pub fn with_delay(mut self, delay_ms: u64) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    pub fn kind(&self) -> RevealKind {
        self.kind
    }

    pub fn set_extent(&mut self, top: u16, height: u16) {
        self.extent = Some((top, height));
    }

    /// Arm the reveal once enough of the element is visible. One-shot:
    /// scrolling away after the trigger does not reset it.
    pub fn observe(&mut self, visible_fraction: f32) {
        if self.phase == Phase::Hidden && visible_fraction >= self.threshold {
            self.phase = Phase::Running { elapsed_ms: 0 };
        }
    }

    pub fn advance(&mut self, elapsed_ms: u64) {
        if let Phase::Running { elapsed_ms: e } = &mut self.phase {
            *e += elapsed_ms;
            if *e >= self.delay_ms + REVEAL_DURATION_MS {
                self.phase = Phase::Done;
            }
        }
    }

    /// Animation progress in [0, 1]. Zero while hidden or still delayed.
    pub fn progress(&self) -> f32 {
        match self.phase {
            Phase::Hidden => 0.0,
            Phase::Done => 1.0,
            Phase::Running { elapsed_ms } => {
                if elapsed_ms <= self.delay_ms {
                    0.0
                } else {
                    ease((elapsed_ms - self.delay_ms) as f32 / REVEAL_DURATION_MS as f32)
                }
            }
        }
    }
}

/// All reveals of a page, keyed by whatever the caller uses as element ids.
#[derive(Debug, Default)]
pub struct RevealRegistry<K: Eq + Hash + Copy> {
    entries: HashMap<K, Reveal>,
}

impl<K: Eq + Hash + Copy> RevealRegistry<K> {
    pub fn new() -> Self {
        RevealRegistry {
            entries: HashMap::new(),
        }
    }

    pub fn register(&mut self, key: K, reveal: Reveal) {
        self.entries.entry(key).or_insert(reveal);
    }

    pub fn set_extent(&mut self, key: K, top: u16, height: u16) {
        if let Some(entry) = self.entries.get_mut(&key) {
            entry.set_extent(top, height);
        }
    }

    /// Check every element against the viewport and arm those in view.
    pub fn observe_viewport(&mut self, view_top: f32, view_height: u16) {
        for entry in self.entries.values_mut() {
            if let Some((top, height)) = entry.extent {
                let fraction = visible_fraction(top, height, view_top, view_height);
                entry.observe(fraction);
            }
        }
    }

    pub fn advance_all(&mut self, elapsed_ms: u64) {
        for entry in self.entries.values_mut() {
            entry.advance(elapsed_ms);
        }
    }

    /// Progress for one element; unknown keys render fully visible.
    pub fn progress(&self, key: K) -> f32 {
        self.entries.get(&key).map(Reveal::progress).unwrap_or(1.0)
    }

    pub fn kind(&self, key: K) -> Option<RevealKind> {
        self.entries.get(&key).map(Reveal::kind)
    }
}

/// How much of a row span `[top, top + height)` overlaps the viewport,
/// as a fraction of the span's height.
pub fn visible_fraction(top: u16, height: u16, view_top: f32, view_height: u16) -> f32 {
    if height == 0 {
        return 0.0;
    }
    let top = top as f32;
    let bottom = top + height as f32;
    let view_bottom = view_top + view_height as f32;
    let overlap = (bottom.min(view_bottom) - top.max(view_top)).max(0.0);
    overlap / height as f32
}
