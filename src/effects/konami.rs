//! Konami code detector and the rainbow easter egg it unlocks
//!
//! Keys are compared by their browser-style names so arrows and letters live
//! in one sequence. The buffer keeps the last ten keys only.

use std::collections::VecDeque;

/// The classic sequence. Letter keys are case-sensitive.
pub const KONAMI_SEQUENCE: [&str; 10] = [
    "ArrowUp",
    "ArrowUp",
    "ArrowDown",
    "ArrowDown",
    "ArrowLeft",
    "ArrowRight",
    "ArrowLeft",
    "ArrowRight",
    "b",
    "a",
];

#[derive(Debug, Default)]
pub struct KonamiDetector {
    buffer: VecDeque<String>,
}

impl KonamiDetector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one keypress. Returns true when the buffer now spells the
    /// sequence. The buffer is not cleared on a match; the next key shifts
    /// the window as usual.
    pub fn feed(&mut self, key_name: &str) -> bool {
        self.buffer.push_back(key_name.to_string());
        if self.buffer.len() > KONAMI_SEQUENCE.len() {
            self.buffer.pop_front();
        }
        self.buffer.len() == KONAMI_SEQUENCE.len()
            && self.buffer.iter().zip(KONAMI_SEQUENCE.iter()).all(|(a, b)| a == b)
    }

    #[cfg(test)]
    fn buffer_len(&self) -> usize {
        self.buffer.len()
    }
}

/// Rainbow mode: five seconds of hue rotation across the whole frame.
pub const RAINBOW_DURATION_MS: u64 = 5000;
/// One full trip around the color wheel takes two seconds.
pub const RAINBOW_CYCLE_MS: u64 = 2000;

#[derive(Debug, Default)]
pub struct RainbowEffect {
    remaining_ms: u64,
    elapsed_ms: u64,
}

impl RainbowEffect {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start (or restart) the five-second window.
    pub fn activate(&mut self) {
        self.remaining_ms = RAINBOW_DURATION_MS;
        self.elapsed_ms = 0;
    }

    pub fn advance(&mut self, elapsed_ms: u64) {
        if self.remaining_ms == 0 {
            return;
        }
        self.elapsed_ms += elapsed_ms;
        self.remaining_ms = self.remaining_ms.saturating_sub(elapsed_ms);
    }

    pub fn is_active(&self) -> bool {
        self.remaining_ms > 0
    }

    /// Current rotation in degrees, sweeping 0..360 every cycle.
    pub fn hue_degrees(&self) -> f32 {
        (self.elapsed_ms % RAINBOW_CYCLE_MS) as f32 / RAINBOW_CYCLE_MS as f32 * 360.0
    }
}

/// Rotate an RGB triple around the color wheel by `degrees`.
///
/// Grayscale values have no hue and come back unchanged, so plain text
/// survives the effect while the theme colors cycle.
pub fn rotate_rgb(r: u8, g: u8, b: u8, degrees: f32) -> (u8, u8, u8) {
    let (h, s, v) = rgb_to_hsv(r, g, b);
    if s == 0.0 {
        return (r, g, b);
    }
    hsv_to_rgb((h + degrees).rem_euclid(360.0), s, v)
}

pub fn rgb_to_hsv(r: u8, g: u8, b: u8) -> (f32, f32, f32) {
    let r = r as f32 / 255.0;
    let g = g as f32 / 255.0;
    let b = b as f32 / 255.0;
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let h = if delta == 0.0 {
        0.0
    } else if max == r {
        60.0 * (((g - b) / delta).rem_euclid(6.0))
    } else if max == g {
        60.0 * ((b - r) / delta + 2.0)
    } else {
        60.0 * ((r - g) / delta + 4.0)
    };
    let s = if max == 0.0 { 0.0 } else { delta / max };
    (h, s, max)
}

pub fn hsv_to_rgb(h: f32, s: f32, v: f32) -> (u8, u8, u8) {
    let c = v * s;
    let x = c * (1.0 - ((h / 60.0).rem_euclid(2.0) - 1.0).abs());
    let m = v - c;
    let (r, g, b) = match h {
        h if h < 60.0 => (c, x, 0.0),
        h if h < 120.0 => (x, c, 0.0),
        h if h < 180.0 => (0.0, c, x),
        h if h < 240.0 => (0.0, x, c),
        h if h < 300.0 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };
    (
        ((r + m) * 255.0).round() as u8,
        ((g + m) * 255.0).round() as u8,
        ((b + m) * 255.0).round() as u8,
    )
}
