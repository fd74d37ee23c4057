//! Parallax background orbs
//!
//! Soft gradient blobs anchored in the hero drift upward faster than the
//! page: orb `i` moves at `0.5 + i * 0.1` of the scroll speed on top of the
//! normal page motion.

pub const BASE_SPEED: f32 = 0.5;
pub const SPEED_STEP: f32 = 0.1;

/// A background blob, anchored in page rows and percentage columns.
#[derive(Debug, Clone, Copy)]
pub struct Orb {
    pub anchor_row: u16,
    pub col_percent: u16,
    pub radius: u16,
}

#[derive(Debug, Default)]
pub struct ParallaxField {
    orbs: Vec<Orb>,
}

impl ParallaxField {
    pub fn new(orbs: Vec<Orb>) -> Self {
        ParallaxField { orbs }
    }

    /// The three orbs the hero ships with.
    pub fn with_default_orbs() -> Self {
        ParallaxField::new(vec![
            Orb { anchor_row: 4, col_percent: 15, radius: 3 },
            Orb { anchor_row: 12, col_percent: 78, radius: 2 },
            Orb { anchor_row: 20, col_percent: 40, radius: 2 },
        ])
    }

    pub fn orbs(&self) -> &[Orb] {
        &self.orbs
    }

    /// Extra scroll multiplier for orb `index`.
    pub fn speed(index: usize) -> f32 {
        BASE_SPEED + index as f32 * SPEED_STEP
    }

    /// Viewport row of orb `index` at the given scroll offset. The page
    /// itself contributes `-offset`; the parallax transform stacks its own
    /// `-offset * speed` on top.
    pub fn screen_row(&self, index: usize, scroll_offset: f32) -> Option<f32> {
        let orb = self.orbs.get(index)?;
        Some(orb.anchor_row as f32 - scroll_offset * (1.0 + Self::speed(index)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_speed_ladder() {
        assert!((ParallaxField::speed(0) - 0.5).abs() < f32::EPSILON);
        assert!((ParallaxField::speed(1) - 0.6).abs() < f32::EPSILON);
        assert!((ParallaxField::speed(2) - 0.7).abs() < f32::EPSILON);
    }

    #[test]
    fn test_orbs_fixed_at_zero_scroll() {
        let field = ParallaxField::with_default_orbs();
        assert_eq!(field.screen_row(0, 0.0), Some(4.0));
        assert_eq!(field.screen_row(2, 0.0), Some(20.0));
    }

    #[test]
    fn test_orbs_outrun_the_page() {
        let field = ParallaxField::with_default_orbs();
        // After 10 rows of scroll the first orb has moved 15 rows up.
        assert_eq!(field.screen_row(0, 10.0), Some(4.0 - 15.0));
        // Later orbs move faster still.
        let second = field.screen_row(1, 10.0).unwrap();
        assert!((second - (12.0 - 16.0)).abs() < 1e-4);
    }

    #[test]
    fn test_unknown_index() {
        let field = ParallaxField::with_default_orbs();
        assert_eq!(field.screen_row(9, 0.0), None);
    }
}
