//! WCAG 2.0 conformance levels for text contrast.
//!
//! | Level | Normal text | Large text | Success criterion |
//! |-------|-------------|------------|-------------------|
//! | AA    | 4.5         | 3.0        | 1.4.3 Contrast (Minimum) |
//! | AAA   | 7.0         | 4.5        | 1.4.6 Contrast (Enhanced) |
//!
//! Large text is at least 18pt, or 14pt bold.
//!
//! # Example
//!
//! ```rust
//! use wcag_contrast::level::{Conformance, Level, TextSize};
//!
//! let c = Conformance::evaluate(5.2);
//! assert!(c.passes(Level::AA, TextSize::Normal));
//! assert!(!c.passes(Level::AAA, TextSize::Normal));
//! assert_eq!(c.best(TextSize::Large), Some(Level::AAA));
//! ```

use std::fmt;

/// Conformance level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum Level {
    /// Contrast (Minimum).
    #[default]
    AA,
    /// Contrast (Enhanced).
    AAA,
}

/// Text size class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TextSize {
    /// Below 18pt (14pt bold).
    #[default]
    Normal,
    /// 18pt and up, or 14pt bold and up.
    Large,
}

impl Level {
    /// All levels, weakest first.
    pub const ALL: [Level; 2] = [Level::AA, Level::AAA];

    /// Minimum contrast ratio required at this level.
    pub const fn min_ratio(self, size: TextSize) -> f64 {
        match (self, size) {
            (Level::AA, TextSize::Normal) => 4.5,
            (Level::AA, TextSize::Large) => 3.0,
            (Level::AAA, TextSize::Normal) => 7.0,
            (Level::AAA, TextSize::Large) => 4.5,
        }
    }

    /// Returns `true` if `ratio` meets this level.
    #[inline]
    pub fn is_met(self, ratio: f64, size: TextSize) -> bool {
        ratio >= self.min_ratio(size)
    }

    /// Short name, `AA` or `AAA`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::AA => "AA",
            Level::AAA => "AAA",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Pass/fail for every level and text size at one ratio.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Conformance {
    /// The ratio that was evaluated.
    pub ratio: f64,
    /// AA, normal text.
    pub aa: bool,
    /// AA, large text.
    pub aa_large: bool,
    /// AAA, normal text.
    pub aaa: bool,
    /// AAA, large text.
    pub aaa_large: bool,
}

impl Conformance {
    /// Evaluates `ratio` against every threshold.
    pub fn evaluate(ratio: f64) -> Self {
        Self {
            ratio,
            aa: Level::AA.is_met(ratio, TextSize::Normal),
            aa_large: Level::AA.is_met(ratio, TextSize::Large),
            aaa: Level::AAA.is_met(ratio, TextSize::Normal),
            aaa_large: Level::AAA.is_met(ratio, TextSize::Large),
        }
    }

    /// Returns `true` if `level` is met for `size`.
    pub fn passes(&self, level: Level, size: TextSize) -> bool {
        match (level, size) {
            (Level::AA, TextSize::Normal) => self.aa,
            (Level::AA, TextSize::Large) => self.aa_large,
            (Level::AAA, TextSize::Normal) => self.aaa,
            (Level::AAA, TextSize::Large) => self.aaa_large,
        }
    }

    /// Highest level met for `size`, if any.
    pub fn best(&self, size: TextSize) -> Option<Level> {
        Level::ALL
            .iter()
            .rev()
            .copied()
            .find(|&level| self.passes(level, size))
    }
}
