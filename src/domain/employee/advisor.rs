//! Retention Advisor - Rule-based advice for one employee.

use serde::Serialize;

use super::EmployeeProfile;
use crate::domain::foundation::EmployeeId;

/// Attrition score at or above which an employee counts as high-risk.
pub const DEFAULT_HIGH_RISK_THRESHOLD: f64 = 0.7;

/// Salary under which an adjustment is suggested.
const SALARY_REVIEW_THRESHOLD: f64 = 50_000.0;

/// Years with the company after which a missing promotion is flagged.
const PROMOTION_GAP_YEARS: u32 = 2;

/// Years in one role after which stagnation is flagged.
const ROLE_STAGNATION_YEARS: u32 = 3;

/// Performance rating treated as a high performer.
const HIGH_PERFORMER_RATING: u8 = 4;

/// Area an individual piece of advice addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum AdviceCategory {
    Compensation,
    #[serde(rename = "Career Growth")]
    CareerGrowth,
    #[serde(rename = "Work-Life Balance")]
    WorkLifeBalance,
    Retention,
    #[serde(rename = "Career Development")]
    CareerDevelopment,
}

/// Urgency level for individual advice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Urgency {
    Critical,
    High,
    Medium,
    Low,
}

impl Urgency {
    /// Returns the display label for this urgency.
    pub fn label(&self) -> &'static str {
        match self {
            Urgency::Critical => "Critical",
            Urgency::High => "High",
            Urgency::Medium => "Medium",
            Urgency::Low => "Low",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeRecommendation {
    pub urgency: Urgency,
    pub category: AdviceCategory,
    pub recommendation: String,
    pub details: String,
    pub estimated_impact: String,
}

impl EmployeeRecommendation {
    fn new(
        urgency: Urgency,
        category: AdviceCategory,
        recommendation: &str,
        details: String,
        risk_reduction_percent: u8,
    ) -> Self {
        Self {
            urgency,
            category,
            recommendation: recommendation.to_string(),
            details,
            estimated_impact: format!("{}% risk reduction", risk_reduction_percent),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeRetentionPlan {
    pub employee_id: EmployeeId,
    pub full_name: String,
    pub current_risk_score: f64,
    pub recommendations: Vec<EmployeeRecommendation>,
}

/// Applies the individual retention rules.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RetentionAdvisor {
    high_risk_threshold: f64,
}

impl RetentionAdvisor {
    pub fn new(high_risk_threshold: f64) -> Self {
        Self {
            high_risk_threshold,
        }
    }

    /// Builds the plan for one employee, most urgent advice first.
    ///
    /// Advice of equal urgency keeps rule order.
    pub fn advise(&self, profile: &EmployeeProfile) -> EmployeeRetentionPlan {
        let mut recommendations = Vec::new();

        if profile.salary < SALARY_REVIEW_THRESHOLD {
            recommendations.push(EmployeeRecommendation::new(
                Urgency::High,
                AdviceCategory::Compensation,
                "Consider salary adjustment",
                format!(
                    "Current salary ({}) is below market average for {}",
                    profile.salary, profile.job_role
                ),
                25,
            ));
        }

        if profile.number_of_promotions == 0 && profile.years_with_company > PROMOTION_GAP_YEARS {
            recommendations.push(EmployeeRecommendation::new(
                Urgency::High,
                AdviceCategory::CareerGrowth,
                "Discuss promotion opportunities",
                format!(
                    "No promotions in {} years with company",
                    profile.years_with_company
                ),
                20,
            ));
        }

        if profile.overtime {
            recommendations.push(EmployeeRecommendation::new(
                Urgency::Medium,
                AdviceCategory::WorkLifeBalance,
                "Review workload and overtime",
                "Employee is working overtime regularly".to_string(),
                15,
            ));
        }

        if profile.performance_rating >= HIGH_PERFORMER_RATING
            && profile.attrition_score >= self.high_risk_threshold
        {
            recommendations.push(EmployeeRecommendation::new(
                Urgency::Critical,
                AdviceCategory::Retention,
                "Immediate retention conversation needed",
                "High performer with high attrition risk - critical to retain".to_string(),
                30,
            ));
        }

        if profile.years_in_current_role > ROLE_STAGNATION_YEARS {
            recommendations.push(EmployeeRecommendation::new(
                Urgency::Medium,
                AdviceCategory::CareerDevelopment,
                "Explore lateral moves or new challenges",
                format!(
                    "{} years in current role may indicate stagnation",
                    profile.years_in_current_role
                ),
                18,
            ));
        }

        recommendations.sort_by_key(|r| r.urgency);

        EmployeeRetentionPlan {
            employee_id: profile.employee_id.clone(),
            full_name: profile.full_name.clone(),
            current_risk_score: profile.attrition_score,
            recommendations,
        }
    }
}

impl Default for RetentionAdvisor {
    fn default() -> Self {
        Self::new(DEFAULT_HIGH_RISK_THRESHOLD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile() -> EmployeeProfile {
        EmployeeProfile {
            employee_id: EmployeeId::new("E-100").unwrap(),
            full_name: "Jordan Lee".to_string(),
            job_role: "Analyst".to_string(),
            salary: 72_000.0,
            number_of_promotions: 1,
            years_with_company: 4,
            overtime: false,
            performance_rating: 3,
            attrition_score: 0.2,
            years_in_current_role: 2,
        }
    }

    #[test]
    fn settled_employee_gets_no_advice() {
        let plan = RetentionAdvisor::default().advise(&profile());
        assert!(plan.recommendations.is_empty());
        assert_eq!(plan.full_name, "Jordan Lee");
        assert!((plan.current_risk_score - 0.2).abs() < f64::EPSILON);
    }

    #[test]
    fn every_rule_fires_sorted_by_urgency() {
        let employee = EmployeeProfile {
            salary: 42_000.0,
            number_of_promotions: 0,
            years_with_company: 5,
            overtime: true,
            performance_rating: 5,
            attrition_score: 0.82,
            years_in_current_role: 5,
            ..profile()
        };
        let plan = RetentionAdvisor::default().advise(&employee);

        let advice: Vec<_> = plan
            .recommendations
            .iter()
            .map(|r| (r.urgency, r.recommendation.as_str()))
            .collect();
        assert_eq!(
            advice,
            vec![
                (Urgency::Critical, "Immediate retention conversation needed"),
                (Urgency::High, "Consider salary adjustment"),
                (Urgency::High, "Discuss promotion opportunities"),
                (Urgency::Medium, "Review workload and overtime"),
                (Urgency::Medium, "Explore lateral moves or new challenges"),
            ]
        );
    }

    #[test]
    fn salary_rule_mentions_role() {
        let employee = EmployeeProfile {
            salary: 38_500.0,
            ..profile()
        };
        let plan = RetentionAdvisor::default().advise(&employee);

        assert_eq!(plan.recommendations.len(), 1);
        assert_eq!(
            plan.recommendations[0].details,
            "Current salary (38500) is below market average for Analyst"
        );
        assert_eq!(plan.recommendations[0].estimated_impact, "25% risk reduction");
    }

    #[test]
    fn promotion_rule_needs_more_than_two_years() {
        let employee = EmployeeProfile {
            number_of_promotions: 0,
            years_with_company: 2,
            ..profile()
        };
        assert!(RetentionAdvisor::default().advise(&employee).recommendations.is_empty());
    }

    #[test]
    fn high_performer_rule_honours_threshold() {
        let employee = EmployeeProfile {
            performance_rating: 4,
            attrition_score: 0.65,
            ..profile()
        };
        assert!(RetentionAdvisor::default().advise(&employee).recommendations.is_empty());

        let plan = RetentionAdvisor::new(0.6).advise(&employee);
        assert_eq!(plan.recommendations[0].urgency, Urgency::Critical);
        assert_eq!(plan.recommendations[0].category, AdviceCategory::Retention);
    }

    #[test]
    fn plan_serializes_with_labels() {
        let employee = EmployeeProfile {
            overtime: true,
            ..profile()
        };
        let json = serde_json::to_value(RetentionAdvisor::default().advise(&employee)).unwrap();

        assert_eq!(json["employeeId"], "E-100");
        assert_eq!(json["recommendations"][0]["urgency"], "Medium");
        assert_eq!(json["recommendations"][0]["category"], "Work-Life Balance");
        assert_eq!(json["recommendations"][0]["estimatedImpact"], "15% risk reduction");
    }

    #[test]
    fn promotion_and_lateral_move_advice_use_distinct_categories() {
        let employee = EmployeeProfile {
            number_of_promotions: 0,
            years_with_company: 6,
            years_in_current_role: 6,
            ..profile()
        };
        let plan = RetentionAdvisor::default().advise(&employee);

        let categories: Vec<_> = plan.recommendations.iter().map(|r| r.category).collect();
        assert_eq!(
            categories,
            vec![AdviceCategory::CareerGrowth, AdviceCategory::CareerDevelopment]
        );

        let json = serde_json::to_value(&plan).unwrap();
        assert_eq!(json["recommendations"][0]["category"], "Career Growth");
        assert_eq!(json["recommendations"][1]["category"], "Career Development");
    }
}
