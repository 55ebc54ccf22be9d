//! Insights Module - Population-level attrition outlook.
//!
//! Complements the survey-driven recommendations with three views read
//! straight from employee records:
//!
//! - `Watchlist` - Highest-risk employees with an estimated departure horizon
//! - `DepartmentRisk` - Per-department headcount and risk, most at risk first
//! - `RetentionFactorAnalyzer` - How low- and high-attrition cohorts differ

mod departments;
mod factors;
mod report;
mod watchlist;

pub use departments::{rank_departments, DepartmentRisk};
pub use factors::{
    CohortComparison, CohortProfile, RetentionFactor, RetentionFactorAnalyzer,
    LOW_ATTRITION_CEILING,
};
pub use report::{InsightsAnalyzer, PredictiveInsights};
pub use watchlist::{
    AtRiskEmployee, Watchlist, WatchlistEntry, DEFAULT_WATCHLIST_SIZE, IMMINENT_DEPARTURE_SCORE,
};
