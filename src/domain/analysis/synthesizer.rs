//! Recommendation Synthesizer - Builds one record per qualifying category.

use serde::Serialize;

use super::catalog::{CategoryPolicy, RecommendationCatalog, RecommendationCategory, SignalSource};
use super::gap_analyzer::GapAnalyzer;
use super::severity::PriorityTier;
use crate::domain::foundation::Percentage;
use crate::domain::segments::{CompensationBracketSnapshot, SurveySegmentSnapshot};

/// An explainable retention intervention.
///
/// Built fresh for every synthesis call and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationRecord {
    pub priority: PriorityTier,
    pub category: RecommendationCategory,
    pub title: String,
    pub risk_statement: String,
    /// The percentage embedded in `risk_statement`.
    pub risk_percent: Percentage,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_score: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub high_risk_score: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub low_risk_score: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub affected_employee_count: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub high_risk_employee_count: Option<u64>,
    pub actions: Vec<String>,
}

/// Records in catalog order plus the categories that lacked input data.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Synthesis {
    pub records: Vec<RecommendationRecord>,
    pub skipped: Vec<RecommendationCategory>,
}

/// Synthesizer for recommendation records.
pub struct RecommendationSynthesizer;

impl RecommendationSynthesizer {
    /// Synthesizes one record per catalogued category whose input exists.
    ///
    /// Categories with missing or empty inputs are skipped, never failed.
    pub fn synthesize(
        catalog: &RecommendationCatalog,
        survey: &SurveySegmentSnapshot,
        compensation: &CompensationBracketSnapshot,
    ) -> Synthesis {
        let mut synthesis = Synthesis::default();

        for policy in catalog.policies() {
            match Self::synthesize_one(policy, survey, compensation) {
                Some(record) => synthesis.records.push(record),
                None => synthesis.skipped.push(policy.category),
            }
        }

        synthesis
    }

    /// Builds the record for a single policy, or `None` if its input is absent.
    pub fn synthesize_one(
        policy: &CategoryPolicy,
        survey: &SurveySegmentSnapshot,
        compensation: &CompensationBracketSnapshot,
    ) -> Option<RecommendationRecord> {
        match policy.source {
            SignalSource::Survey(dimension) => {
                let metric = survey.metric(dimension)?;
                let overall = metric.overall_average?;
                let gap = GapAnalyzer::analyze(metric);

                Some(RecommendationRecord {
                    priority: policy.scale.classify(overall),
                    category: policy.category,
                    title: policy.title.clone(),
                    risk_statement: policy.risk_statement(gap.relative_gap_percent.value()),
                    risk_percent: gap.relative_gap_percent,
                    current_score: Some(overall),
                    high_risk_score: metric.high_risk_average,
                    low_risk_score: metric.low_risk_average,
                    affected_employee_count: None,
                    high_risk_employee_count: None,
                    actions: policy.actions.clone(),
                })
            }
            SignalSource::Bracket(name) => {
                let bracket = compensation.bracket(name)?;
                let share = Percentage::from_ratio(
                    bracket.high_risk_count as f64,
                    bracket.employee_count as f64,
                );

                Some(RecommendationRecord {
                    priority: policy.scale.classify(bracket.average_risk_score),
                    category: policy.category,
                    title: policy.title.clone(),
                    risk_statement: policy.risk_statement(share.value()),
                    risk_percent: share,
                    current_score: None,
                    high_risk_score: None,
                    low_risk_score: None,
                    affected_employee_count: Some(bracket.employee_count),
                    high_risk_employee_count: Some(bracket.high_risk_count),
                    actions: policy.actions.clone(),
                })
            }
        }
    }
}
