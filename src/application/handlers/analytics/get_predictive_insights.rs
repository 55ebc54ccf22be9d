//! GetPredictiveInsightsHandler - Watchlist, department risk and retention factors.

use std::sync::Arc;

use tracing::{debug, error};

use crate::domain::insights::{InsightsAnalyzer, PredictiveInsights};
use crate::ports::WorkforceInsightsProvider;

/// Errors surfaced by the predictive insights query.
#[derive(Debug, thiserror::Error)]
pub enum InsightsError {
    #[error("Upstream data unavailable: {0}")]
    UpstreamUnavailable(String),
}

pub struct GetPredictiveInsightsHandler {
    provider: Arc<dyn WorkforceInsightsProvider>,
    analyzer: InsightsAnalyzer,
}

impl GetPredictiveInsightsHandler {
    pub fn new(provider: Arc<dyn WorkforceInsightsProvider>, analyzer: InsightsAnalyzer) -> Self {
        Self { provider, analyzer }
    }

    /// All three reads must succeed; there is no partial result.
    pub async fn handle(&self) -> Result<PredictiveInsights, InsightsError> {
        let threshold = self.analyzer.high_risk_threshold();

        let (employees, departments, cohorts) = tokio::try_join!(
            self.provider
                .at_risk_employees(threshold, self.analyzer.watchlist_size()),
            self.provider.department_risks(threshold),
            self.provider.cohort_comparison(threshold),
        )
        .map_err(|e| {
            error!(error = %e, "Failed to fetch workforce insights");
            InsightsError::UpstreamUnavailable(e.to_string())
        })?;

        let insights = self.analyzer.analyze(employees, departments, &cohorts);

        debug!(
            watchlist = insights.high_risk_employees.len(),
            departments = insights.department_risks.len(),
            "Built predictive insights"
        );

        Ok(insights)
    }
}
