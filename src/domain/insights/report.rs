use serde::Serialize;

use super::departments::{rank_departments, DepartmentRisk};
use super::factors::{CohortComparison, RetentionFactor, RetentionFactorAnalyzer};
use super::watchlist::{AtRiskEmployee, Watchlist, WatchlistEntry};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictiveInsights {
    pub high_risk_employees: Vec<WatchlistEntry>,
    pub department_risks: Vec<DepartmentRisk>,
    pub retention_factors: Vec<RetentionFactor>,
}

/// Assembles [`PredictiveInsights`] from the three workforce reads.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InsightsAnalyzer {
    watchlist: Watchlist,
}

impl InsightsAnalyzer {
    pub fn new(high_risk_threshold: f64, watchlist_size: usize) -> Self {
        Self {
            watchlist: Watchlist::new(high_risk_threshold, watchlist_size),
        }
    }

    pub fn high_risk_threshold(&self) -> f64 {
        self.watchlist.high_risk_threshold()
    }

    /// Number of at-risk employees worth fetching.
    pub fn watchlist_size(&self) -> usize {
        self.watchlist.size()
    }

    pub fn analyze(
        &self,
        employees: Vec<AtRiskEmployee>,
        departments: Vec<DepartmentRisk>,
        cohorts: &CohortComparison,
    ) -> PredictiveInsights {
        PredictiveInsights {
            high_risk_employees: self.watchlist.build(employees),
            department_risks: rank_departments(departments),
            retention_factors: RetentionFactorAnalyzer::factors(cohorts),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_workforce_still_lists_fixed_factors() {
        let insights =
            InsightsAnalyzer::new(0.7, 20).analyze(Vec::new(), Vec::new(), &CohortComparison::default());

        assert!(insights.high_risk_employees.is_empty());
        assert!(insights.department_risks.is_empty());
        assert_eq!(insights.retention_factors.len(), 4);

        let json = serde_json::to_value(&insights).unwrap();
        assert!(json["highRiskEmployees"].is_array());
        assert!(json["departmentRisks"].is_array());
        assert_eq!(json["retentionFactors"][1]["impactScore"], 0.85);
    }
}
