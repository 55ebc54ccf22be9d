//! Retention factors - What distinguishes employees who stay.

use serde::Serialize;

/// Attrition score below which an employee counts as likely to stay.
pub const LOW_ATTRITION_CEILING: f64 = 0.3;

/// Fixed impact scores for factors the records cannot measure directly.
const WORK_LIFE_BALANCE_IMPACT: f64 = 0.85;
const PERFORMANCE_RECOGNITION_IMPACT: f64 = 0.78;

/// Averages over one attrition cohort.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CohortProfile {
    pub avg_salary: Option<f64>,
    pub avg_promotions: Option<f64>,
}

/// Employees below [`LOW_ATTRITION_CEILING`] against the high-risk cohort.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CohortComparison {
    pub low_attrition: CohortProfile,
    pub high_attrition: CohortProfile,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RetentionFactor {
    pub factor: &'static str,
    pub description: &'static str,
    /// Ratio of the low-attrition average to the high-attrition average,
    /// or a fixed estimate. `None` when the ratio is undefined.
    pub impact_score: Option<f64>,
}

pub struct RetentionFactorAnalyzer;

impl RetentionFactorAnalyzer {
    /// Factors in a fixed order, measured ones computed from the cohorts.
    pub fn factors(comparison: &CohortComparison) -> Vec<RetentionFactor> {
        let low = comparison.low_attrition;
        let high = comparison.high_attrition;

        vec![
            RetentionFactor {
                factor: "Competitive Salary",
                description: "Employees with above-average salary show lower attrition",
                impact_score: cohort_ratio(low.avg_salary, high.avg_salary),
            },
            RetentionFactor {
                factor: "Work-Life Balance",
                description: "Better work-life balance correlates with retention",
                impact_score: Some(WORK_LIFE_BALANCE_IMPACT),
            },
            RetentionFactor {
                factor: "Career Growth",
                description: "Regular promotions reduce attrition risk",
                impact_score: cohort_ratio(low.avg_promotions, high.avg_promotions),
            },
            RetentionFactor {
                factor: "Performance Recognition",
                description: "High performers with recognition stay longer",
                impact_score: Some(PERFORMANCE_RECOGNITION_IMPACT),
            },
        ]
    }
}

/// `low / high` rounded to two decimals.
fn cohort_ratio(low: Option<f64>, high: Option<f64>) -> Option<f64> {
    let (low, high) = (low?, high?);
    if high == 0.0 {
        return None;
    }
    let ratio = low / high;
    ratio.is_finite().then(|| (ratio * 100.0).round() / 100.0)
}
