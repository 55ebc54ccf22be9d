//! Percentage value object (0-100 scale).

use serde::{Deserialize, Serialize};
use std::fmt;

/// A whole-number value between 0 and 100 inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Percentage(u8);

impl Percentage {
    /// Zero percent.
    pub const ZERO: Self = Self(0);

    /// One hundred percent.
    pub const HUNDRED: Self = Self(100);

    /// Rounds `part / whole * 100` to the nearest whole percent.
    ///
    /// Non-finite or non-positive ratios collapse to zero; ratios above one
    /// saturate at one hundred.
    pub fn from_ratio(part: f64, whole: f64) -> Self {
        if whole == 0.0 {
            return Self::ZERO;
        }
        let percent = (part / whole * 100.0).round();
        if !percent.is_finite() || percent <= 0.0 {
            return Self::ZERO;
        }
        Self(percent.min(100.0) as u8)
    }

    /// Returns the value as u8.
    pub fn value(&self) -> u8 {
        self.0
    }
}

impl Default for Percentage {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Display for Percentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}
