use async_trait::async_trait;

use super::SegmentStatisticsError;
use crate::domain::insights::{AtRiskEmployee, CohortComparison, DepartmentRisk};

/// Read-only port for employee-level attrition data.
///
/// Implementations read raw records; ranking and ratios are computed by
/// [`InsightsAnalyzer`](crate::domain::insights::InsightsAnalyzer).
#[async_trait]
pub trait WorkforceInsightsProvider: Send + Sync {
    /// Employees scored at or above `high_risk_threshold`, riskiest first,
    /// at most `limit` of them.
    async fn at_risk_employees(
        &self,
        high_risk_threshold: f64,
        limit: usize,
    ) -> Result<Vec<AtRiskEmployee>, SegmentStatisticsError>;

    /// One entry per named department.
    async fn department_risks(
        &self,
        high_risk_threshold: f64,
    ) -> Result<Vec<DepartmentRisk>, SegmentStatisticsError>;

    /// Salary and promotion averages for the low- and high-attrition cohorts.
    async fn cohort_comparison(
        &self,
        high_risk_threshold: f64,
    ) -> Result<CohortComparison, SegmentStatisticsError>;
}
