//! Survey segment statistics split by attrition-risk cohort.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Pulse survey dimensions reported on a 1-5 scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SurveyDimension {
    JobSatisfaction,
    WorkLifeBalance,
    CareerGrowth,
    RecognitionReward,
    ManagerRelationship,
    TrainingDevelopment,
    StressLevel,
}

impl SurveyDimension {
    /// All dimensions in reporting order.
    pub const ALL: [SurveyDimension; 7] = [
        SurveyDimension::JobSatisfaction,
        SurveyDimension::WorkLifeBalance,
        SurveyDimension::CareerGrowth,
        SurveyDimension::RecognitionReward,
        SurveyDimension::ManagerRelationship,
        SurveyDimension::TrainingDevelopment,
        SurveyDimension::StressLevel,
    ];

    /// Returns the display label for this dimension.
    pub fn label(&self) -> &'static str {
        match self {
            SurveyDimension::JobSatisfaction => "Job Satisfaction",
            SurveyDimension::WorkLifeBalance => "Work-Life Balance",
            SurveyDimension::CareerGrowth => "Career Growth Opportunities",
            SurveyDimension::RecognitionReward => "Recognition & Reward Satisfaction",
            SurveyDimension::ManagerRelationship => "Relationship with Manager",
            SurveyDimension::TrainingDevelopment => "Training & Skill Development",
            SurveyDimension::StressLevel => "Stress Level",
        }
    }
}

impl fmt::Display for SurveyDimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Averages for one survey dimension, overall and per risk cohort.
///
/// Cohort averages are `None` when the cohort had no non-null observations.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SegmentMetric {
    pub overall_average: Option<f64>,
    pub high_risk_average: Option<f64>,
    pub low_risk_average: Option<f64>,
    pub sample_count: u64,
    pub high_risk_count: u64,
}

impl SegmentMetric {
    /// Creates a metric with all three averages present.
    pub fn new(overall: f64, high_risk: f64, low_risk: f64) -> Self {
        Self {
            overall_average: Some(overall),
            high_risk_average: Some(high_risk),
            low_risk_average: Some(low_risk),
            sample_count: 0,
            high_risk_count: 0,
        }
    }

    /// Sets the observation counts.
    pub fn with_counts(mut self, sample_count: u64, high_risk_count: u64) -> Self {
        self.sample_count = sample_count;
        self.high_risk_count = high_risk_count.min(sample_count);
        self
    }

    /// Number of observations outside the high-risk cohort.
    pub fn low_risk_count(&self) -> u64 {
        self.sample_count.saturating_sub(self.high_risk_count)
    }

    /// Returns true when the metric carries no usable overall average.
    ///
    /// Counts do not decide presence; a zero `sample_count` only means the
    /// provider did not report counts.
    pub fn is_empty(&self) -> bool {
        !self.overall_average.is_some_and(f64::is_finite)
    }
}

/// Survey statistics for every dimension from a single aggregated read.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SurveySegmentSnapshot {
    /// Total survey responses considered.
    pub total_surveys: u64,
    /// Responses from employees in the high-risk cohort.
    pub high_risk_count: u64,
    pub metrics: BTreeMap<SurveyDimension, SegmentMetric>,
}

impl SurveySegmentSnapshot {
    /// Creates an empty snapshot with the given population counts.
    pub fn new(total_surveys: u64, high_risk_count: u64) -> Self {
        Self {
            total_surveys,
            high_risk_count,
            metrics: BTreeMap::new(),
        }
    }

    /// Adds or replaces a dimension's metric.
    pub fn with_metric(mut self, dimension: SurveyDimension, metric: SegmentMetric) -> Self {
        self.metrics.insert(dimension, metric);
        self
    }

    /// Returns the metric for a dimension if present and non-empty.
    pub fn metric(&self, dimension: SurveyDimension) -> Option<&SegmentMetric> {
        self.metrics.get(&dimension).filter(|m| !m.is_empty())
    }
}
