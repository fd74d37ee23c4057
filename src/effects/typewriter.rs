//! Typewriter intro for the hero subtitle
//!
//! Each line types out at 80 ms per character; line `i` starts one second
//! after line `i - 1`, with a one-second pause before anything types at all.

use crate::utils::text::char_prefix;

pub const TYPE_SPEED_MS: u64 = 80;
pub const LINE_STAGGER_MS: u64 = 1000;
pub const START_DELAY_MS: u64 = 1000;

/// One subtitle line in its current state.
#[derive(Debug, PartialEq, Eq)]
pub struct TypedLine<'a> {
    pub text: &'a str,
    /// The caret sits on the line currently being typed.
    pub typing: bool,
}

#[derive(Debug)]
pub struct Typewriter {
    lines: Vec<String>,
    elapsed_ms: u64,
    enabled: bool,
}

impl Typewriter {
    /// `enabled: false` shows every line immediately (reduced motion, or the
    /// effect toggled off in config).
    pub fn new(lines: Vec<String>, enabled: bool) -> Self {
        Typewriter {
            lines,
            elapsed_ms: 0,
            enabled,
        }
    }

    pub fn advance(&mut self, elapsed_ms: u64) {
        self.elapsed_ms += elapsed_ms;
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn is_complete(&self) -> bool {
        if !self.enabled {
            return true;
        }
        self.lines
            .iter()
            .enumerate()
            .all(|(i, line)| self.chars_shown(i) >= line.chars().count())
    }

    fn start_of_line(&self, index: usize) -> u64 {
        START_DELAY_MS + index as u64 * LINE_STAGGER_MS
    }

    fn chars_shown(&self, index: usize) -> usize {
        let start = self.start_of_line(index);
        if self.elapsed_ms <= start {
            return 0;
        }
        ((self.elapsed_ms - start) / TYPE_SPEED_MS) as usize
    }

    /// Every line with its visible prefix. Lines reserve their slot even
    /// before typing begins so the layout never shifts.
    pub fn rendered(&self) -> Vec<TypedLine<'_>> {
        self.lines
            .iter()
            .enumerate()
            .map(|(i, line)| {
                if !self.enabled {
                    return TypedLine { text: line, typing: false };
                }
                let total = line.chars().count();
                let shown = self.chars_shown(i).min(total);
                TypedLine {
                    text: char_prefix(line, shown),
                    typing: shown < total && self.elapsed_ms >= self.start_of_line(i),
                }
            })
            .collect()
    }
}
