//! PostgreSQL implementation of SegmentStatisticsProvider.
//!
//! Runs the two aggregation queries the engine depends on: pulse survey
//! averages split at the high-risk cutoff, and salary quartile brackets.

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};

use crate::domain::segments::{
    BracketName, CompensationBracket, CompensationBracketSnapshot, SegmentMetric,
    SurveyDimension, SurveySegmentSnapshot,
};
use crate::ports::{SegmentStatisticsError, SegmentStatisticsProvider};

const BRACKET_QUERY: &str = r#"
    WITH salary_quartiles AS (
        SELECT
            PERCENTILE_CONT(0.25) WITHIN GROUP (ORDER BY salary) AS q1,
            PERCENTILE_CONT(0.50) WITHIN GROUP (ORDER BY salary) AS median,
            PERCENTILE_CONT(0.75) WITHIN GROUP (ORDER BY salary) AS q3
        FROM employees
    )
    SELECT
        CASE
            WHEN e.salary < sq.q1 THEN 'Below Market'
            WHEN e.salary < sq.median THEN 'Below Average'
            WHEN e.salary < sq.q3 THEN 'Average'
            ELSE 'Above Average'
        END AS salary_bracket,
        COUNT(*) AS employee_count,
        COUNT(*) FILTER (WHERE e.attrition_score >= $1) AS high_risk_count,
        ROUND(AVG(e.attrition_score)::numeric, 3)::float8 AS avg_risk_score
    FROM employees e
    CROSS JOIN salary_quartiles sq
    GROUP BY salary_bracket
"#;

/// PostgreSQL implementation of SegmentStatisticsProvider.
#[derive(Clone)]
pub struct PostgresSegmentStatisticsReader {
    pool: PgPool,
    high_risk_threshold: f64,
    survey_query: String,
}

impl PostgresSegmentStatisticsReader {
    /// Creates a reader classifying attrition scores at or above
    /// `high_risk_threshold` as high-risk.
    pub fn new(pool: PgPool, high_risk_threshold: f64) -> Self {
        Self {
            pool,
            high_risk_threshold,
            survey_query: survey_query(),
        }
    }
}

#[async_trait]
impl SegmentStatisticsProvider for PostgresSegmentStatisticsReader {
    async fn survey_snapshot(&self) -> Result<SurveySegmentSnapshot, SegmentStatisticsError> {
        let row = sqlx::query(&self.survey_query)
            .bind(self.high_risk_threshold)
            .fetch_one(&self.pool)
            .await?;

        let mut snapshot = SurveySegmentSnapshot::new(
            count(&row, "total_surveys")?,
            count(&row, "high_risk_count")?,
        );
        for dimension in SurveyDimension::ALL {
            snapshot = snapshot.with_metric(dimension, metric_from_row(&row, dimension)?);
        }

        Ok(snapshot)
    }

    async fn compensation_snapshot(
        &self,
    ) -> Result<CompensationBracketSnapshot, SegmentStatisticsError> {
        let rows = sqlx::query(BRACKET_QUERY)
            .bind(self.high_risk_threshold)
            .fetch_all(&self.pool)
            .await?;

        let mut brackets = Vec::with_capacity(rows.len());
        for row in &rows {
            let label: String = row.try_get("salary_bracket")?;
            let Some(name) = BracketName::from_label(&label) else {
                tracing::warn!("Ignoring unknown salary bracket: {}", label);
                continue;
            };
            let average_risk_score: Option<f64> = row.try_get("avg_risk_score")?;
            brackets.push(CompensationBracket::new(
                name,
                count(row, "employee_count")?,
                count(row, "high_risk_count")?,
                average_risk_score.unwrap_or(0.0),
            ));
        }

        Ok(CompensationBracketSnapshot::new(brackets))
    }
}

// Helper functions

fn dimension_column(dimension: SurveyDimension) -> &'static str {
    match dimension {
        SurveyDimension::JobSatisfaction => "job_satisfaction",
        SurveyDimension::WorkLifeBalance => "work_life_balance",
        SurveyDimension::CareerGrowth => "career_growth_opportunities",
        SurveyDimension::RecognitionReward => "recognition_reward_sat",
        SurveyDimension::ManagerRelationship => "relationship_with_manager",
        SurveyDimension::TrainingDevelopment => "training_skill_dev_sat",
        SurveyDimension::StressLevel => "stress_levels",
    }
}

/// One aggregate block per dimension, all in a single pass over the join.
fn survey_query() -> String {
    let aggregates: Vec<String> = SurveyDimension::ALL
        .iter()
        .map(|dimension| {
            let col = dimension_column(*dimension);
            format!(
                r#"
        ROUND(AVG({col})::numeric, 2)::float8 AS {col}_overall,
        ROUND((AVG({col}) FILTER (WHERE is_high_risk))::numeric, 2)::float8 AS {col}_high,
        ROUND((AVG({col}) FILTER (WHERE NOT is_high_risk))::numeric, 2)::float8 AS {col}_low,
        COUNT({col}) AS {col}_n,
        COUNT({col}) FILTER (WHERE is_high_risk) AS {col}_high_n"#
            )
        })
        .collect();

    format!(
        r#"
    WITH survey_cohorts AS (
        SELECT ps.*, COALESCE(e.attrition_score >= $1, FALSE) AS is_high_risk
        FROM pulse_surveys ps
        JOIN employees e ON ps.employee_id = e.employee_id
    )
    SELECT
        COUNT(*) AS total_surveys,
        COUNT(*) FILTER (WHERE is_high_risk) AS high_risk_count,{}
    FROM survey_cohorts
"#,
        aggregates.join(",")
    )
}

fn metric_from_row(
    row: &PgRow,
    dimension: SurveyDimension,
) -> Result<SegmentMetric, SegmentStatisticsError> {
    let col = dimension_column(dimension);
    Ok(SegmentMetric {
        overall_average: row.try_get(format!("{col}_overall").as_str())?,
        high_risk_average: row.try_get(format!("{col}_high").as_str())?,
        low_risk_average: row.try_get(format!("{col}_low").as_str())?,
        sample_count: count(row, &format!("{col}_n"))?,
        high_risk_count: count(row, &format!("{col}_high_n"))?,
    })
}

fn count(row: &PgRow, column: &str) -> Result<u64, SegmentStatisticsError> {
    let value: i64 = row.try_get(column)?;
    Ok(u64::try_from(value).unwrap_or(0))
}
