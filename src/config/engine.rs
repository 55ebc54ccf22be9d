//! Recommendation engine configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::analysis::DEFAULT_MAX_RESULTS;
use crate::domain::employee::DEFAULT_HIGH_RISK_THRESHOLD;
use crate::domain::insights::DEFAULT_WATCHLIST_SIZE;

/// Upper bound on `max_results_limit`.
const MAX_RESULTS_CEILING: usize = 50;

/// Upper bound on `watchlist_size`.
const MAX_WATCHLIST_SIZE: usize = 100;

/// Recommendation engine configuration
#[derive(Debug, Clone, Deserialize)]
pub struct EngineConfig {
    /// Recommendations returned when the caller does not ask for a count
    #[serde(default = "default_max_results")]
    pub max_results: usize,

    /// Largest count a caller may ask for
    #[serde(default = "default_max_results_limit")]
    pub max_results_limit: usize,

    /// Attrition score at or above which an employee is high-risk
    #[serde(default = "default_high_risk_threshold")]
    pub high_risk_threshold: f64,

    /// High-risk employees listed by predictive insights
    #[serde(default = "default_watchlist_size")]
    pub watchlist_size: usize,
}

impl EngineConfig {
    /// Validate engine configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.max_results_limit == 0 || self.max_results_limit > MAX_RESULTS_CEILING {
            return Err(ValidationError::InvalidMaxResultsLimit);
        }
        if self.max_results == 0 || self.max_results > self.max_results_limit {
            return Err(ValidationError::InvalidMaxResults);
        }
        if !(self.high_risk_threshold > 0.0 && self.high_risk_threshold <= 1.0) {
            return Err(ValidationError::InvalidHighRiskThreshold);
        }
        if self.watchlist_size == 0 || self.watchlist_size > MAX_WATCHLIST_SIZE {
            return Err(ValidationError::InvalidWatchlistSize);
        }
        Ok(())
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_results: default_max_results(),
            max_results_limit: default_max_results_limit(),
            high_risk_threshold: default_high_risk_threshold(),
            watchlist_size: default_watchlist_size(),
        }
    }
}

fn default_max_results() -> usize {
    DEFAULT_MAX_RESULTS
}

fn default_max_results_limit() -> usize {
    20
}

fn default_high_risk_threshold() -> f64 {
    DEFAULT_HIGH_RISK_THRESHOLD
}

fn default_watchlist_size() -> usize {
    DEFAULT_WATCHLIST_SIZE
}
