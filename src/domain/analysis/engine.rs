//! Recommendation Engine - Gap analysis through ranked, bounded output.
//!
//! Pure and stateless: one immutable snapshot in, one immutable report out.
//! Identical inputs always produce identical reports.

use serde::Serialize;

use super::catalog::{RecommendationCatalog, RecommendationCategory};
use super::ranker::{PriorityRanker, DEFAULT_MAX_RESULTS};
use super::synthesizer::{RecommendationRecord, RecommendationSynthesizer};
use crate::domain::segments::{CompensationBracketSnapshot, SurveyDimension, SurveySegmentSnapshot};

/// Selected survey figures echoed back for caller convenience.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SurveyMetricsSummary {
    pub total_surveys: u64,
    pub high_risk_count: u64,
    pub avg_job_satisfaction: Option<f64>,
    pub avg_work_life_balance: Option<f64>,
    pub avg_career_growth: Option<f64>,
    pub avg_management_satisfaction: Option<f64>,
}

impl SurveyMetricsSummary {
    /// Copies the summary fields straight from the snapshot.
    pub fn from_snapshot(snapshot: &SurveySegmentSnapshot) -> Self {
        let overall = |dimension| {
            snapshot
                .metrics
                .get(&dimension)
                .and_then(|m| m.overall_average)
        };

        Self {
            total_surveys: snapshot.total_surveys,
            high_risk_count: snapshot.high_risk_count,
            avg_job_satisfaction: overall(SurveyDimension::JobSatisfaction),
            avg_work_life_balance: overall(SurveyDimension::WorkLifeBalance),
            avg_career_growth: overall(SurveyDimension::CareerGrowth),
            avg_management_satisfaction: overall(SurveyDimension::ManagerRelationship),
        }
    }
}

/// Result of one synthesis call.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InterventionReport {
    pub recommendations: Vec<RecommendationRecord>,
    pub survey_metrics: SurveyMetricsSummary,
    /// Categories omitted for lack of input data. Not part of the wire format.
    #[serde(skip)]
    pub skipped_categories: Vec<RecommendationCategory>,
}

impl InterventionReport {
    /// Recommendations in the most urgent tier.
    pub fn urgent(&self) -> impl Iterator<Item = &RecommendationRecord> {
        self.recommendations.iter().filter(|r| r.priority.is_urgent())
    }
}

/// Engine combining a category catalog with a presentation bound.
#[derive(Debug, Clone, PartialEq)]
pub struct RecommendationEngine {
    catalog: RecommendationCatalog,
    max_results: usize,
}

impl RecommendationEngine {
    pub fn new(catalog: RecommendationCatalog, max_results: usize) -> Self {
        Self {
            catalog,
            max_results,
        }
    }

    /// Standard catalog with the given bound.
    pub fn with_max_results(max_results: usize) -> Self {
        Self::new(RecommendationCatalog::standard(), max_results)
    }

    pub fn max_results(&self) -> usize {
        self.max_results
    }

    /// Synthesizes, ranks, and bounds recommendations using the engine's bound.
    pub fn synthesize(
        &self,
        survey: &SurveySegmentSnapshot,
        compensation: &CompensationBracketSnapshot,
    ) -> InterventionReport {
        self.synthesize_with_limit(survey, compensation, self.max_results)
    }

    /// Same as [`synthesize`](Self::synthesize) with an explicit bound.
    pub fn synthesize_with_limit(
        &self,
        survey: &SurveySegmentSnapshot,
        compensation: &CompensationBracketSnapshot,
        max_results: usize,
    ) -> InterventionReport {
        let synthesis = RecommendationSynthesizer::synthesize(&self.catalog, survey, compensation);

        InterventionReport {
            recommendations: PriorityRanker::rank_and_bound(synthesis.records, max_results),
            survey_metrics: SurveyMetricsSummary::from_snapshot(survey),
            skipped_categories: synthesis.skipped,
        }
    }
}

impl Default for RecommendationEngine {
    fn default() -> Self {
        Self::with_max_results(DEFAULT_MAX_RESULTS)
    }
}

/// Runs the standard engine over a snapshot pair.
pub fn synthesize_recommendations(
    survey: &SurveySegmentSnapshot,
    compensation: &CompensationBracketSnapshot,
    max_results: usize,
) -> InterventionReport {
    RecommendationEngine::with_max_results(max_results).synthesize(survey, compensation)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::segments::{BracketName, CompensationBracket, SegmentMetric};

    fn full_survey() -> SurveySegmentSnapshot {
        SurveySegmentSnapshot::new(500, 120)
            .with_metric(
                SurveyDimension::JobSatisfaction,
                SegmentMetric::new(3.2, 2.9, 3.4).with_counts(500, 120),
            )
            .with_metric(
                SurveyDimension::WorkLifeBalance,
                SegmentMetric::new(2.7, 2.2, 3.0).with_counts(500, 120),
            )
            .with_metric(
                SurveyDimension::CareerGrowth,
                SegmentMetric::new(3.8, 3.5, 3.9).with_counts(500, 120),
            )
            .with_metric(
                SurveyDimension::ManagerRelationship,
                SegmentMetric::new(2.9, 2.1, 3.3).with_counts(500, 120),
            )
            .with_metric(
                SurveyDimension::StressLevel,
                SegmentMetric::new(3.1, 3.9, 2.8).with_counts(500, 120),
            )
    }

    fn brackets(average_risk_score: f64) -> CompensationBracketSnapshot {
        CompensationBracketSnapshot::new(vec![
            CompensationBracket::new(BracketName::BelowMarket, 125, 60, average_risk_score),
            CompensationBracket::new(BracketName::BelowAverage, 125, 30, 0.45),
            CompensationBracket::new(BracketName::Average, 125, 20, 0.35),
            CompensationBracket::new(BracketName::AboveAverage, 125, 10, 0.2),
        ])
    }

    #[test]
    fn mixed_priorities_rank_by_tier_then_precedence() {
        use RecommendationCategory::*;
        // Tiers: satisfaction 2, work-life 1, compensation 2, career 5, management 1.
        let report = synthesize_recommendations(&full_survey(), &brackets(0.55), 5);

        let order: Vec<_> = report.recommendations.iter().map(|r| r.category).collect();
        assert_eq!(
            order,
            vec![WorkLifeBalance, Management, JobSatisfaction, Compensation, CareerGrowth]
        );
        let tiers: Vec<_> = report.recommendations.iter().map(|r| r.priority.value()).collect();
        assert_eq!(tiers, vec![1, 1, 2, 2, 5]);
    }

    #[test]
    fn bound_truncates_after_ranking() {
        let report = synthesize_recommendations(&full_survey(), &brackets(0.7), 2);
        assert_eq!(report.recommendations.len(), 2);
        assert!(report.recommendations.iter().all(|r| r.priority.is_urgent()));
        assert_eq!(report.urgent().count(), 2);
    }

    #[test]
    fn empty_snapshots_yield_empty_report() {
        let report = RecommendationEngine::default().synthesize(
            &SurveySegmentSnapshot::default(),
            &CompensationBracketSnapshot::default(),
        );
        assert!(report.recommendations.is_empty());
        assert_eq!(report.skipped_categories.len(), 5);
        assert_eq!(report.survey_metrics.total_surveys, 0);
        assert!(report.survey_metrics.avg_job_satisfaction.is_none());
    }

    #[test]
    fn survey_metrics_echo_overall_averages() {
        let report = synthesize_recommendations(&full_survey(), &brackets(0.5), 5);
        let metrics = &report.survey_metrics;

        assert_eq!(metrics.total_surveys, 500);
        assert_eq!(metrics.high_risk_count, 120);
        assert_eq!(metrics.avg_job_satisfaction, Some(3.2));
        assert_eq!(metrics.avg_work_life_balance, Some(2.7));
        assert_eq!(metrics.avg_career_growth, Some(3.8));
        assert_eq!(metrics.avg_management_satisfaction, Some(2.9));
    }

    #[test]
    fn echoed_average_always_has_a_recommendation() {
        let survey = SurveySegmentSnapshot::new(0, 0)
            .with_metric(SurveyDimension::WorkLifeBalance, SegmentMetric::new(3.6, 3.6, 3.5));
        let report = synthesize_recommendations(&survey, &CompensationBracketSnapshot::default(), 5);

        assert_eq!(report.survey_metrics.avg_work_life_balance, Some(3.6));
        assert_eq!(report.recommendations.len(), 1);
        assert_eq!(
            report.recommendations[0].category,
            RecommendationCategory::WorkLifeBalance
        );
    }

    #[test]
    fn synthesis_is_idempotent() {
        let engine = RecommendationEngine::default();
        let survey = full_survey();
        let compensation = brackets(0.66);

        let first = serde_json::to_string(&engine.synthesize(&survey, &compensation)).unwrap();
        let second = serde_json::to_string(&engine.synthesize(&survey, &compensation)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn report_wire_format_uses_camel_case() {
        let report = synthesize_recommendations(&full_survey(), &brackets(0.5), 5);
        let json = serde_json::to_value(&report).unwrap();

        assert!(json["recommendations"].is_array());
        assert_eq!(json["surveyMetrics"]["totalSurveys"], 500);
        assert!(json.get("skippedCategories").is_none());
    }

    #[test]
    fn custom_catalog_changes_only_what_it_lists() {
        let standard = RecommendationCatalog::standard();
        let only_compensation = RecommendationCatalog::new(vec![standard
            .policy(RecommendationCategory::Compensation)
            .unwrap()
            .clone()]);
        let engine = RecommendationEngine::new(only_compensation, 5);

        let report = engine.synthesize(&full_survey(), &brackets(0.8));
        assert_eq!(report.recommendations.len(), 1);
        assert_eq!(report.recommendations[0].risk_percent.value(), 48);
    }
}
