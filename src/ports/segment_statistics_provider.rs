use async_trait::async_trait;

use crate::domain::segments::{CompensationBracketSnapshot, SurveySegmentSnapshot};

/// Read-only port for pre-aggregated segment statistics.
///
/// The two reads are independent and may be issued concurrently. Any
/// retry or timeout policy belongs to the implementation.
#[async_trait]
pub trait SegmentStatisticsProvider: Send + Sync {
    /// Survey averages overall and split by attrition-risk cohort.
    async fn survey_snapshot(&self) -> Result<SurveySegmentSnapshot, SegmentStatisticsError>;

    /// Headcount and risk statistics per quartile salary bracket.
    async fn compensation_snapshot(
        &self,
    ) -> Result<CompensationBracketSnapshot, SegmentStatisticsError>;
}

/// Errors that can occur while reading segment statistics
#[derive(Debug, thiserror::Error)]
pub enum SegmentStatisticsError {
    #[error("Segment statistics unavailable: {0}")]
    Unavailable(String),

    #[error("Database error: {0}")]
    Database(String),
}

impl From<sqlx::Error> for SegmentStatisticsError {
    fn from(err: sqlx::Error) -> Self {
        let connection_lost = matches!(
            err,
            sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_)
        );
        if connection_lost {
            SegmentStatisticsError::Unavailable(err.to_string())
        } else {
            SegmentStatisticsError::Database(err.to_string())
        }
    }
}
