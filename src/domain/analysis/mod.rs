//! Analysis Module - Pure domain services for retention recommendations.
//!
//! Data flows one way through stateless functions:
//!
//! - `GapAnalyzer` - Cohort gap and relative gap percentage per survey dimension
//! - `SeverityScale` - Table-driven mapping of a metric value to a `PriorityTier`
//! - `RecommendationSynthesizer` - One record per catalogued category with input data
//! - `PriorityRanker` - Stable ordering by tier, hard-bounded result count
//! - `RecommendationEngine` - The full pipeline producing an `InterventionReport`
//!
//! No ports or adapters are needed here; fetching snapshots is the
//! application layer's job.

mod catalog;
mod engine;
mod gap_analyzer;
mod ranker;
mod severity;
mod synthesizer;

pub use catalog::{
    CategoryPolicy, RecommendationCatalog, RecommendationCategory, SignalSource,
    PERCENT_PLACEHOLDER,
};
pub use engine::{
    synthesize_recommendations, InterventionReport, RecommendationEngine, SurveyMetricsSummary,
};
pub use gap_analyzer::{GapAnalysis, GapAnalyzer};
pub use ranker::{PriorityRanker, DEFAULT_MAX_RESULTS};
pub use severity::{Cutoff, Direction, PriorityTier, SeverityScale};
pub use synthesizer::{RecommendationRecord, RecommendationSynthesizer, Synthesis};
