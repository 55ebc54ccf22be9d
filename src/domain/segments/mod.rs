//! Segments Module - Pre-aggregated workforce statistics.
//!
//! A segment snapshot is a single aggregated read of cohort and bracket
//! statistics. It is produced by a `SegmentStatisticsProvider` and treated
//! as immutable input for one synthesis call.
//!
//! # Components
//!
//! - `SurveyDimension` / `SegmentMetric` - survey averages split by risk cohort
//! - `SurveySegmentSnapshot` - all survey dimensions from one read
//! - `BracketName` / `CompensationBracket` - quartile-defined pay bands
//! - `CompensationBracketSnapshot` - all brackets from one read

mod compensation;
mod survey;

pub use compensation::{BracketName, CompensationBracket, CompensationBracketSnapshot};
pub use survey::{SegmentMetric, SurveyDimension, SurveySegmentSnapshot};
