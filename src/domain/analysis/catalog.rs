//! Recommendation catalog - Curated interventions per category.
//!
//! Actions are static content. Only the risk statement and the priority of
//! a recommendation depend on data; the suggested actions never do.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::severity::SeverityScale;
use crate::domain::segments::{BracketName, SurveyDimension};

/// Placeholder substituted with the computed percentage in risk templates.
pub const PERCENT_PLACEHOLDER: &str = "{percent}";

/// Retention intervention categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RecommendationCategory {
    #[serde(rename = "Job Satisfaction")]
    JobSatisfaction,
    #[serde(rename = "Work-Life Balance")]
    WorkLifeBalance,
    #[serde(rename = "Compensation")]
    Compensation,
    #[serde(rename = "Career Development")]
    CareerGrowth,
    #[serde(rename = "Management")]
    Management,
}

impl RecommendationCategory {
    /// Returns the display label for this category.
    pub fn label(&self) -> &'static str {
        match self {
            RecommendationCategory::JobSatisfaction => "Job Satisfaction",
            RecommendationCategory::WorkLifeBalance => "Work-Life Balance",
            RecommendationCategory::Compensation => "Compensation",
            RecommendationCategory::CareerGrowth => "Career Development",
            RecommendationCategory::Management => "Management",
        }
    }
}

impl fmt::Display for RecommendationCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The statistic a category reads from the segment snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SignalSource {
    /// Cohort gap of a survey dimension, classified on its overall average.
    Survey(SurveyDimension),
    /// High-risk share of a bracket, classified on its mean risk score.
    Bracket(BracketName),
}

/// Everything needed to turn one category's signal into a recommendation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryPolicy {
    pub category: RecommendationCategory,
    pub title: String,
    /// Risk sentence containing [`PERCENT_PLACEHOLDER`].
    pub risk_template: String,
    pub source: SignalSource,
    pub scale: SeverityScale,
    pub actions: Vec<String>,
}

impl CategoryPolicy {
    pub fn new(
        category: RecommendationCategory,
        title: impl Into<String>,
        risk_template: impl Into<String>,
        source: SignalSource,
        scale: SeverityScale,
        actions: &[&str],
    ) -> Self {
        Self {
            category,
            title: title.into(),
            risk_template: risk_template.into(),
            source,
            scale,
            actions: actions.iter().map(|a| a.to_string()).collect(),
        }
    }

    /// Renders the risk statement for a computed percentage.
    pub fn risk_statement(&self, percent: impl fmt::Display) -> String {
        self.risk_template
            .replace(PERCENT_PLACEHOLDER, &percent.to_string())
    }
}

/// Ordered set of category policies.
///
/// Order is the tie-break precedence used when ranking recommendations of
/// equal priority.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecommendationCatalog {
    policies: Vec<CategoryPolicy>,
}

impl RecommendationCatalog {
    pub fn new(policies: Vec<CategoryPolicy>) -> Self {
        Self { policies }
    }

    /// The five standard retention categories.
    ///
    /// Healthy tiers 3 through 6 keep a fixed order among categories that
    /// need no urgent attention.
    pub fn standard() -> Self {
        Self::new(vec![
            CategoryPolicy::new(
                RecommendationCategory::JobSatisfaction,
                "Enhance Job Satisfaction",
                "Low satisfaction correlates with {percent}% higher attrition risk",
                SignalSource::Survey(SurveyDimension::JobSatisfaction),
                SeverityScale::survey(3),
                &[
                    "Conduct quarterly satisfaction surveys and act on feedback",
                    "Implement recognition and rewards programs",
                    "Create clear career progression pathways",
                ],
            ),
            CategoryPolicy::new(
                RecommendationCategory::WorkLifeBalance,
                "Improve Work-Life Balance",
                "Poor balance increases attrition by {percent}%",
                SignalSource::Survey(SurveyDimension::WorkLifeBalance),
                SeverityScale::survey(4),
                &[
                    "Offer flexible working hours and remote work options",
                    "Monitor and reduce overtime hours",
                    "Promote wellness programs and mental health support",
                ],
            ),
            CategoryPolicy::new(
                RecommendationCategory::Compensation,
                "Competitive Compensation",
                "{percent}% of below-market employees are high-risk",
                SignalSource::Bracket(BracketName::BelowMarket),
                SeverityScale::risk_score(),
                &[
                    "Conduct annual market salary benchmarking",
                    "Implement performance-based bonuses",
                    "Review and enhance benefits packages",
                ],
            ),
            CategoryPolicy::new(
                RecommendationCategory::CareerGrowth,
                "Career Growth Opportunities",
                "Limited growth prospects increase risk by {percent}%",
                SignalSource::Survey(SurveyDimension::CareerGrowth),
                SeverityScale::survey(5),
                &[
                    "Create individual development plans (IDPs)",
                    "Provide training and upskilling opportunities",
                    "Establish mentorship programs",
                ],
            ),
            CategoryPolicy::new(
                RecommendationCategory::Management,
                "Strengthen Management",
                "Poor manager relationships account for {percent}% higher risk",
                SignalSource::Survey(SurveyDimension::ManagerRelationship),
                SeverityScale::survey(6),
                &[
                    "Train managers on leadership and communication",
                    "Implement 360-degree feedback systems",
                    "Conduct regular one-on-one check-ins",
                ],
            ),
        ])
    }

    pub fn policies(&self) -> &[CategoryPolicy] {
        &self.policies
    }

    pub fn len(&self) -> usize {
        self.policies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.policies.is_empty()
    }

    /// Returns the policy for a category, if catalogued.
    pub fn policy(&self, category: RecommendationCategory) -> Option<&CategoryPolicy> {
        self.policies.iter().find(|p| p.category == category)
    }
}

impl Default for RecommendationCatalog {
    fn default() -> Self {
        Self::standard()
    }
}
