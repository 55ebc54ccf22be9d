//! Severity Classifier - Maps a metric value to a priority tier.
//!
//! Each category carries its own `SeverityScale` so new categories only add
//! a table entry; the classification logic itself never changes.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Urgency tier of a recommendation. Lower is more urgent; 1 is the top.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PriorityTier(u8);

impl PriorityTier {
    /// The most urgent tier.
    pub const URGENT: Self = Self(1);

    /// Creates a tier; zero is lifted to the most urgent tier.
    pub const fn new(tier: u8) -> Self {
        if tier == 0 {
            Self(1)
        } else {
            Self(tier)
        }
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    pub fn is_urgent(&self) -> bool {
        *self == Self::URGENT
    }
}

impl fmt::Display for PriorityTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "P{}", self.0)
    }
}

/// Which side of a cutoff counts as a problem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Satisfaction-like metrics: values strictly below a cutoff are severe.
    LowerIsWorse,
    /// Risk-like metrics: values strictly above a cutoff are severe.
    HigherIsWorse,
}

/// A single threshold and the tier it assigns.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Cutoff {
    pub bound: f64,
    pub tier: PriorityTier,
}

impl Cutoff {
    pub const fn new(bound: f64, tier: u8) -> Self {
        Self {
            bound,
            tier: PriorityTier::new(tier),
        }
    }
}

/// Ordered cutoffs plus the tier used when no cutoff matches.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeverityScale {
    pub direction: Direction,
    /// Checked in order; the first matching cutoff wins.
    pub cutoffs: Vec<Cutoff>,
    /// Tier for healthy values.
    pub healthy_tier: PriorityTier,
}

impl SeverityScale {
    /// Scale shared by the 1-5 survey dimensions: `< 3.0` is tier 1,
    /// `< 3.5` is tier 2, anything else the given healthy tier.
    pub fn survey(healthy_tier: u8) -> Self {
        Self {
            direction: Direction::LowerIsWorse,
            cutoffs: vec![Cutoff::new(3.0, 1), Cutoff::new(3.5, 2)],
            healthy_tier: PriorityTier::new(healthy_tier),
        }
    }

    /// Scale for mean attrition risk on a 0-1 scale: `> 0.6` is tier 1,
    /// anything else tier 2.
    pub fn risk_score() -> Self {
        Self {
            direction: Direction::HigherIsWorse,
            cutoffs: vec![Cutoff::new(0.6, 1)],
            healthy_tier: PriorityTier::new(2),
        }
    }

    /// Classifies a value. Total: every input, including NaN, maps to a tier.
    pub fn classify(&self, value: f64) -> PriorityTier {
        self.cutoffs
            .iter()
            .find(|cutoff| match self.direction {
                Direction::LowerIsWorse => value < cutoff.bound,
                Direction::HigherIsWorse => value > cutoff.bound,
            })
            .map(|cutoff| cutoff.tier)
            .unwrap_or(self.healthy_tier)
    }
}
