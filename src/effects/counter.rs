//! Count-up animation for stat values
//!
//! Runs once when a stat card first becomes visible: climbs from zero to the
//! target over two seconds in 16 ms steps, then locks in a trailing `+`.

pub const COUNT_UP_DURATION_MS: u64 = 2000;
pub const COUNT_UP_STEP_MS: u64 = 16;

#[derive(Debug)]
pub struct CounterAnimation {
    target: u64,
    current: f64,
    started: bool,
}

impl CounterAnimation {
    pub fn new(target: u64) -> Self {
        CounterAnimation {
            target,
            current: 0.0,
            started: false,
        }
    }

    pub fn target(&self) -> u64 {
        self.target
    }

    /// Begin counting. Later calls are ignored; the animation runs once.
    pub fn start(&mut self) {
        self.started = true;
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    pub fn is_finished(&self) -> bool {
        self.started && self.current >= self.target as f64
    }

    /// Advance by wall-clock time. Steps of 16 ms each add 1/125th of the
    /// target so the full climb takes two seconds.
    pub fn advance(&mut self, elapsed_ms: u64) {
        if !self.started || self.is_finished() {
            return;
        }
        let steps = elapsed_ms as f64 / COUNT_UP_STEP_MS as f64;
        let per_step = self.target as f64 / (COUNT_UP_DURATION_MS / COUNT_UP_STEP_MS) as f64;
        self.current = (self.current + per_step * steps).min(self.target as f64);
    }

    /// The text to render right now.
    pub fn display(&self) -> String {
        if !self.started {
            return "0".to_string();
        }
        if self.is_finished() {
            format!("{}+", self.target)
        } else {
            format!("{}", self.current.floor() as u64)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idle_before_start() {
        let mut c = CounterAnimation::new(50);
        c.advance(10_000);
        assert_eq!(c.display(), "0");
        assert!(!c.is_finished());
    }

    #[test]
    fn test_counts_up_monotonically() {
        let mut c = CounterAnimation::new(50);
        c.start();
        let mut last = 0u64;
        let mut values = Vec::new();
        for _ in 0..125 {
            c.advance(COUNT_UP_STEP_MS);
            let shown = c.display();
            let n: u64 = shown.trim_end_matches('+').parse().unwrap();
            assert!(n >= last, "display went backwards: {} -> {}", last, n);
            last = n;
            values.push(n);
        }
        assert_eq!(*values.last().unwrap(), 50);
        assert_eq!(c.display(), "50+");
    }

    #[test]
    fn test_finishes_in_two_seconds() {
        let mut c = CounterAnimation::new(1000);
        c.start();
        c.advance(COUNT_UP_DURATION_MS - COUNT_UP_STEP_MS);
        assert!(!c.is_finished());
        c.advance(COUNT_UP_STEP_MS);
        assert!(c.is_finished());
        assert_eq!(c.display(), "1000+");
    }

    #[test]
    fn test_plus_suffix_only_at_end() {
        let mut c = CounterAnimation::new(50);
        c.start();
        c.advance(1000);
        assert!(!c.display().ends_with('+'));
        assert_eq!(c.display(), "25");
        c.advance(1000);
        assert_eq!(c.display(), "50+");
    }

    #[test]
    fn test_start_is_one_shot() {
        let mut c = CounterAnimation::new(50);
        c.start();
        c.advance(COUNT_UP_DURATION_MS);
        assert_eq!(c.display(), "50+");
        // A second trigger must not restart the climb.
        c.start();
        c.advance(16);
        assert_eq!(c.display(), "50+");
    }

    #[test]
    fn test_zero_target() {
        let mut c = CounterAnimation::new(0);
        c.start();
        assert!(c.is_finished());
        assert_eq!(c.display(), "0+");
    }

    #[test]
    fn test_large_elapsed_jump_clamps() {
        let mut c = CounterAnimation::new(50);
        c.start();
        c.advance(60_000);
        assert_eq!(c.display(), "50+");
    }
}
