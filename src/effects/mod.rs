//! Animation and interaction effects
//!
//! Pure state machines driven by elapsed milliseconds. The TUI layer feeds
//! them input events and paints whatever they report; nothing in here touches
//! the terminal, which keeps every effect unit-testable.

pub mod counter;
pub mod cursor;
pub mod glitch;
pub mod konami;
pub mod parallax;
pub mod reveal;
pub mod scroll;
pub mod typewriter;

pub use counter::CounterAnimation;
pub use cursor::CursorTrail;
pub use glitch::GlitchEffect;
pub use konami::{KonamiDetector, RainbowEffect, rotate_rgb};
pub use parallax::ParallaxField;
pub use reveal::{Reveal, RevealKind, RevealRegistry};
pub use scroll::{ScrollState, SectionExtent, active_section};
pub use typewriter::Typewriter;

/// Linear interpolation.
pub fn lerp(from: f32, to: f32, t: f32) -> f32 {
    from + (to - from) * t
}

/// Smoothstep easing, clamped to [0, 1].
pub fn ease(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lerp_endpoints() {
        assert_eq!(lerp(0.0, 10.0, 0.0), 0.0);
        assert_eq!(lerp(0.0, 10.0, 1.0), 10.0);
        assert_eq!(lerp(2.0, 4.0, 0.5), 3.0);
    }

    #[test]
    fn test_ease_monotonic_and_clamped() {
        assert_eq!(ease(-1.0), 0.0);
        assert_eq!(ease(0.0), 0.0);
        assert_eq!(ease(1.0), 1.0);
        assert_eq!(ease(2.0), 1.0);
        let mut prev = 0.0;
        for i in 1..=10 {
            let v = ease(i as f32 / 10.0);
            assert!(v >= prev);
            prev = v;
        }
    }
}
