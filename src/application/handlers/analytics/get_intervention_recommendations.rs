//! GetInterventionRecommendationsHandler - Query handler for ranked retention interventions.
//!
//! Fetches the survey and compensation snapshots concurrently, then runs the
//! recommendation engine over them. A failed fetch fails the whole query;
//! there is no partial result.

use std::sync::Arc;

use tracing::{debug, error};

use crate::domain::analysis::{InterventionReport, RecommendationEngine};
use crate::ports::SegmentStatisticsProvider;

/// Query for population-level retention interventions.
#[derive(Debug, Clone, Default)]
pub struct GetInterventionRecommendationsQuery {
    /// Maximum recommendations to return; the engine default when `None`.
    pub max_results: Option<usize>,
}

/// Result of a successful intervention query.
pub type GetInterventionRecommendationsResult = InterventionReport;

/// Errors surfaced by the intervention query.
#[derive(Debug, thiserror::Error)]
pub enum InterventionError {
    #[error("Upstream data unavailable: {0}")]
    UpstreamUnavailable(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Handler for retrieving ranked intervention recommendations.
pub struct GetInterventionRecommendationsHandler {
    provider: Arc<dyn SegmentStatisticsProvider>,
    engine: RecommendationEngine,
    max_results_limit: usize,
}

impl GetInterventionRecommendationsHandler {
    pub fn new(
        provider: Arc<dyn SegmentStatisticsProvider>,
        engine: RecommendationEngine,
        max_results_limit: usize,
    ) -> Self {
        Self {
            provider,
            engine,
            max_results_limit,
        }
    }

    pub async fn handle(
        &self,
        query: GetInterventionRecommendationsQuery,
    ) -> Result<GetInterventionRecommendationsResult, InterventionError> {
        let max_results = self.resolve_limit(query.max_results)?;

        let (survey, compensation) = tokio::try_join!(
            self.provider.survey_snapshot(),
            self.provider.compensation_snapshot(),
        )
        .map_err(|e| {
            error!(error = %e, "Failed to fetch segment statistics");
            InterventionError::UpstreamUnavailable(e.to_string())
        })?;

        let report = self
            .engine
            .synthesize_with_limit(&survey, &compensation, max_results);

        debug!(
            returned = report.recommendations.len(),
            urgent = report.urgent().count(),
            skipped = ?report.skipped_categories,
            "Synthesized intervention recommendations"
        );

        Ok(report)
    }

    fn resolve_limit(&self, requested: Option<usize>) -> Result<usize, InterventionError> {
        match requested {
            None => Ok(self.engine.max_results()),
            Some(n) if n == 0 || n > self.max_results_limit => {
                Err(InterventionError::InvalidInput(format!(
                    "limit must be between 1 and {}, got {}",
                    self.max_results_limit, n
                )))
            }
            Some(n) => Ok(n),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::analysis::RecommendationCategory;
    use crate::domain::segments::{
        BracketName, CompensationBracket, CompensationBracketSnapshot, SegmentMetric,
        SurveyDimension, SurveySegmentSnapshot,
    };
    use crate::ports::SegmentStatisticsError;
    use async_trait::async_trait;

    // ─────────────────────────────────────────────────────────────────────
    // Mock Implementation
    // ─────────────────────────────────────────────────────────────────────

    struct MockProvider {
        survey: Option<SurveySegmentSnapshot>,
        compensation: Option<CompensationBracketSnapshot>,
    }

    impl MockProvider {
        fn with_data() -> Self {
            Self {
                survey: Some(
                    SurveySegmentSnapshot::new(500, 120)
                        .with_metric(
                            SurveyDimension::JobSatisfaction,
                            SegmentMetric::new(2.8, 2.3, 3.9).with_counts(500, 120),
                        )
                        .with_metric(
                            SurveyDimension::WorkLifeBalance,
                            SegmentMetric::new(3.6, 3.6, 3.5).with_counts(500, 120),
                        ),
                ),
                compensation: Some(CompensationBracketSnapshot::new(vec![
                    CompensationBracket::new(BracketName::BelowMarket, 80, 52, 0.71),
                ])),
            }
        }

        fn survey_offline() -> Self {
            Self {
                survey: None,
                ..Self::with_data()
            }
        }

        fn compensation_offline() -> Self {
            Self {
                compensation: None,
                ..Self::with_data()
            }
        }
    }

    #[async_trait]
    impl SegmentStatisticsProvider for MockProvider {
        async fn survey_snapshot(&self) -> Result<SurveySegmentSnapshot, SegmentStatisticsError> {
            self.survey
                .clone()
                .ok_or_else(|| SegmentStatisticsError::Unavailable("survey offline".to_string()))
        }

        async fn compensation_snapshot(
            &self,
        ) -> Result<CompensationBracketSnapshot, SegmentStatisticsError> {
            self.compensation
                .clone()
                .ok_or_else(|| SegmentStatisticsError::Database("bracket query failed".to_string()))
        }
    }

    fn handler(provider: MockProvider) -> GetInterventionRecommendationsHandler {
        GetInterventionRecommendationsHandler::new(
            Arc::new(provider),
            RecommendationEngine::default(),
            20,
        )
    }

    // ─────────────────────────────────────────────────────────────────────
    // Tests
    // ─────────────────────────────────────────────────────────────────────

    #[tokio::test]
    async fn test_returns_ranked_report() {
        let report = handler(MockProvider::with_data())
            .handle(GetInterventionRecommendationsQuery::default())
            .await
            .unwrap();

        let order: Vec<_> = report.recommendations.iter().map(|r| r.category).collect();
        assert_eq!(
            order,
            vec![
                RecommendationCategory::JobSatisfaction,
                RecommendationCategory::Compensation,
                RecommendationCategory::WorkLifeBalance,
            ]
        );
        assert_eq!(report.survey_metrics.total_surveys, 500);
    }

    #[tokio::test]
    async fn test_explicit_limit_bounds_result() {
        let report = handler(MockProvider::with_data())
            .handle(GetInterventionRecommendationsQuery {
                max_results: Some(1),
            })
            .await
            .unwrap();

        assert_eq!(report.recommendations.len(), 1);
    }

    #[tokio::test]
    async fn test_rejects_zero_limit() {
        let result = handler(MockProvider::with_data())
            .handle(GetInterventionRecommendationsQuery {
                max_results: Some(0),
            })
            .await;

        assert!(matches!(result, Err(InterventionError::InvalidInput(_))));
    }

    #[tokio::test]
    async fn test_rejects_limit_above_ceiling() {
        let result = handler(MockProvider::with_data())
            .handle(GetInterventionRecommendationsQuery {
                max_results: Some(21),
            })
            .await;

        assert!(matches!(result, Err(InterventionError::InvalidInput(_))));
    }

    #[tokio::test]
    async fn test_survey_failure_is_terminal() {
        let result = handler(MockProvider::survey_offline())
            .handle(GetInterventionRecommendationsQuery::default())
            .await;

        assert!(matches!(result, Err(InterventionError::UpstreamUnavailable(_))));
    }

    #[tokio::test]
    async fn test_compensation_failure_is_terminal() {
        let result = handler(MockProvider::compensation_offline())
            .handle(GetInterventionRecommendationsQuery::default())
            .await;

        match result {
            Err(InterventionError::UpstreamUnavailable(msg)) => {
                assert!(msg.contains("bracket query failed"))
            }
            other => panic!("Expected UpstreamUnavailable, got {:?}", other),
        }
    }
}
