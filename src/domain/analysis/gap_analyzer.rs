//! Gap Analyzer - Risk attribution between high- and low-risk cohorts.

use serde::Serialize;

use crate::domain::foundation::Percentage;
use crate::domain::segments::SegmentMetric;

/// Cohort gap for one survey dimension.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GapAnalysis {
    /// `low_risk_average - high_risk_average`; `None` when a cohort average is missing.
    pub gap: Option<f64>,
    /// Gap as a share of the low-risk average, zero unless the gap is positive.
    pub relative_gap_percent: Percentage,
    /// False when a cohort is empty or the low-risk average is zero.
    pub computable: bool,
}

impl GapAnalysis {
    /// Gap result for an empty or undefined cohort.
    pub const DEGENERATE: Self = Self {
        gap: None,
        relative_gap_percent: Percentage::ZERO,
        computable: false,
    };
}

/// Analyzer for cohort gaps.
pub struct GapAnalyzer;

impl GapAnalyzer {
    /// Computes the cohort gap for a metric.
    ///
    /// # Edge Cases
    /// - Either cohort average missing: degenerate, 0%
    /// - Counts reported and a cohort has no members: degenerate, 0%
    /// - Zero or negative gap: 0% (reported as no measurable increase in risk)
    /// - Low-risk average of zero: 0%, flagged non-computable
    pub fn analyze(metric: &SegmentMetric) -> GapAnalysis {
        let (Some(high), Some(low)) = (metric.high_risk_average, metric.low_risk_average) else {
            return GapAnalysis::DEGENERATE;
        };
        if !high.is_finite() || !low.is_finite() {
            return GapAnalysis::DEGENERATE;
        }
        if metric.sample_count > 0 && (metric.high_risk_count == 0 || metric.low_risk_count() == 0)
        {
            return GapAnalysis::DEGENERATE;
        }

        let gap = low - high;
        let computable = low != 0.0;
        let relative_gap_percent = Self::relative_gap_percent(high, low);

        GapAnalysis {
            gap: Some(gap),
            relative_gap_percent,
            computable,
        }
    }

    /// `round((low - high) / low * 100)` for positive gaps, otherwise zero.
    pub fn relative_gap_percent(high_risk_average: f64, low_risk_average: f64) -> Percentage {
        let gap = low_risk_average - high_risk_average;
        if gap > 0.0 && low_risk_average != 0.0 {
            Percentage::from_ratio(gap, low_risk_average)
        } else {
            Percentage::ZERO
        }
    }
}
