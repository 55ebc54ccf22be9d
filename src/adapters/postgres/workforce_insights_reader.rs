//! PostgreSQL implementation of WorkforceInsightsProvider.

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};

use super::employee_reader::checked_performance_rating;
use crate::domain::foundation::EmployeeId;
use crate::domain::insights::{
    AtRiskEmployee, CohortComparison, CohortProfile, DepartmentRisk, LOW_ATTRITION_CEILING,
};
use crate::ports::{SegmentStatisticsError, WorkforceInsightsProvider};

const AT_RISK_QUERY: &str = r#"
    SELECT
        employee_id::text AS employee_id,
        full_name,
        department,
        COALESCE(job_role, '') AS job_role,
        attrition_score::float8 AS attrition_score,
        COALESCE(salary, 0)::float8 AS salary,
        COALESCE(years_with_company, 0)::int4 AS years_with_company,
        COALESCE(performance_rating, 0)::int4 AS performance_rating
    FROM employees
    WHERE attrition_score >= $1
    ORDER BY attrition_score DESC
    LIMIT $2
"#;

const DEPARTMENT_QUERY: &str = r#"
    SELECT
        department,
        COUNT(*) AS total_employees,
        COUNT(*) FILTER (WHERE attrition_score >= $1) AS high_risk_count,
        ROUND(AVG(attrition_score)::numeric, 3)::float8 AS risk_score,
        ROUND(AVG(salary)::numeric, 2)::float8 AS avg_salary,
        ROUND(AVG(performance_rating)::numeric, 2)::float8 AS avg_performance
    FROM employees
    WHERE department IS NOT NULL
    GROUP BY department
    ORDER BY risk_score DESC NULLS LAST
"#;

// Unscored employees belong to neither cohort.
const COHORT_QUERY: &str = r#"
    SELECT
        (AVG(salary) FILTER (WHERE attrition_score < $2))::float8 AS low_avg_salary,
        (AVG(number_of_promotions) FILTER (WHERE attrition_score < $2))::float8 AS low_avg_promotions,
        (AVG(salary) FILTER (WHERE attrition_score >= $1))::float8 AS high_avg_salary,
        (AVG(number_of_promotions) FILTER (WHERE attrition_score >= $1))::float8 AS high_avg_promotions
    FROM employees
"#;

#[derive(Clone)]
pub struct PostgresWorkforceInsightsReader {
    pool: PgPool,
}

impl PostgresWorkforceInsightsReader {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl WorkforceInsightsProvider for PostgresWorkforceInsightsReader {
    async fn at_risk_employees(
        &self,
        high_risk_threshold: f64,
        limit: usize,
    ) -> Result<Vec<AtRiskEmployee>, SegmentStatisticsError> {
        let rows = sqlx::query(AT_RISK_QUERY)
            .bind(high_risk_threshold)
            .bind(i64::try_from(limit).unwrap_or(i64::MAX))
            .fetch_all(&self.pool)
            .await?;

        rows.iter().map(at_risk_from_row).collect()
    }

    async fn department_risks(
        &self,
        high_risk_threshold: f64,
    ) -> Result<Vec<DepartmentRisk>, SegmentStatisticsError> {
        let rows = sqlx::query(DEPARTMENT_QUERY)
            .bind(high_risk_threshold)
            .fetch_all(&self.pool)
            .await?;

        rows.iter().map(department_from_row).collect()
    }

    async fn cohort_comparison(
        &self,
        high_risk_threshold: f64,
    ) -> Result<CohortComparison, SegmentStatisticsError> {
        let row = sqlx::query(COHORT_QUERY)
            .bind(high_risk_threshold)
            .bind(LOW_ATTRITION_CEILING)
            .fetch_one(&self.pool)
            .await?;

        Ok(CohortComparison {
            low_attrition: CohortProfile {
                avg_salary: row.try_get("low_avg_salary")?,
                avg_promotions: row.try_get("low_avg_promotions")?,
            },
            high_attrition: CohortProfile {
                avg_salary: row.try_get("high_avg_salary")?,
                avg_promotions: row.try_get("high_avg_promotions")?,
            },
        })
    }
}

fn at_risk_from_row(row: &PgRow) -> Result<AtRiskEmployee, SegmentStatisticsError> {
    let id: String = row.try_get("employee_id")?;
    let employee_id =
        EmployeeId::new(id).map_err(|e| SegmentStatisticsError::Database(e.to_string()))?;
    let years_with_company: i32 = row.try_get("years_with_company")?;

    Ok(AtRiskEmployee {
        employee_id,
        full_name: row.try_get("full_name")?,
        department: row.try_get("department")?,
        job_role: row.try_get("job_role")?,
        attrition_score: row.try_get("attrition_score")?,
        salary: row.try_get("salary")?,
        years_with_company: u32::try_from(years_with_company).unwrap_or(0),
        performance_rating: checked_performance_rating(row.try_get("performance_rating")?)
            .map_err(|e| SegmentStatisticsError::Database(e.to_string()))?,
    })
}

fn department_from_row(row: &PgRow) -> Result<DepartmentRisk, SegmentStatisticsError> {
    Ok(DepartmentRisk {
        department: row.try_get("department")?,
        total_employees: count(row, "total_employees")?,
        high_risk_count: count(row, "high_risk_count")?,
        risk_score: row.try_get("risk_score")?,
        avg_salary: row.try_get("avg_salary")?,
        avg_performance: row.try_get("avg_performance")?,
    })
}

fn count(row: &PgRow, column: &str) -> Result<u64, SegmentStatisticsError> {
    let value: i64 = row.try_get(column)?;
    Ok(u64::try_from(value).unwrap_or(0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_queries_bind_thresholds() {
        for sql in [AT_RISK_QUERY, DEPARTMENT_QUERY, COHORT_QUERY] {
            assert!(sql.contains("attrition_score >= $1"));
            assert!(!sql.contains("0.7"));
        }
        assert!(COHORT_QUERY.contains("attrition_score < $2"));
        assert!(!COHORT_QUERY.contains("0.3"));
    }

    #[test]
    fn test_watchlist_is_ordered_and_limited_in_sql() {
        assert!(AT_RISK_QUERY.contains("ORDER BY attrition_score DESC"));
        assert!(AT_RISK_QUERY.contains("LIMIT $2"));
    }

    #[test]
    fn test_department_query_skips_unassigned_employees() {
        assert!(DEPARTMENT_QUERY.contains("WHERE department IS NOT NULL"));
        assert!(DEPARTMENT_QUERY.contains("NULLS LAST"));
    }
}
