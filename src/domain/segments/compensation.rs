//! Compensation brackets defined by quartile boundaries of salary.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the four quartile-defined compensation brackets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BracketName {
    /// Below the first quartile.
    BelowMarket,
    /// First quartile up to the median.
    BelowAverage,
    /// Median up to the third quartile.
    Average,
    /// Third quartile and above.
    AboveAverage,
}

impl BracketName {
    /// All brackets, lowest pay first.
    pub const ALL: [BracketName; 4] = [
        BracketName::BelowMarket,
        BracketName::BelowAverage,
        BracketName::Average,
        BracketName::AboveAverage,
    ];

    /// Returns the display label for this bracket.
    pub fn label(&self) -> &'static str {
        match self {
            BracketName::BelowMarket => "Below Market",
            BracketName::BelowAverage => "Below Average",
            BracketName::Average => "Average",
            BracketName::AboveAverage => "Above Average",
        }
    }

    /// Parses a display label back into a bracket.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|b| b.label() == label)
    }
}

impl fmt::Display for BracketName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Headcount and risk statistics for a single bracket.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompensationBracket {
    pub name: BracketName,
    pub employee_count: u64,
    pub high_risk_count: u64,
    /// Mean attrition risk score of the bracket on a 0-1 scale.
    pub average_risk_score: f64,
}

impl CompensationBracket {
    pub fn new(
        name: BracketName,
        employee_count: u64,
        high_risk_count: u64,
        average_risk_score: f64,
    ) -> Self {
        Self {
            name,
            employee_count,
            high_risk_count: high_risk_count.min(employee_count),
            average_risk_score,
        }
    }

    /// Returns true when no employees fall into the bracket.
    pub fn is_empty(&self) -> bool {
        self.employee_count == 0
    }
}

/// All compensation brackets from a single aggregated read.
///
/// Lookup is by name; the engine never assumes risk rises monotonically
/// across brackets.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CompensationBracketSnapshot {
    brackets: Vec<CompensationBracket>,
}

impl CompensationBracketSnapshot {
    /// Builds a snapshot ordered from lowest to highest pay bracket.
    ///
    /// When a bracket name appears more than once, the first occurrence wins.
    pub fn new(brackets: impl IntoIterator<Item = CompensationBracket>) -> Self {
        let mut ordered: Vec<CompensationBracket> = Vec::with_capacity(BracketName::ALL.len());
        for bracket in brackets {
            if !ordered.iter().any(|b| b.name == bracket.name) {
                ordered.push(bracket);
            }
        }
        ordered.sort_by_key(|b| b.name);
        Self { brackets: ordered }
    }

    /// Returns the bracket with the given name if present and non-empty.
    pub fn bracket(&self, name: BracketName) -> Option<&CompensationBracket> {
        self.brackets
            .iter()
            .find(|b| b.name == name)
            .filter(|b| !b.is_empty())
    }
}
