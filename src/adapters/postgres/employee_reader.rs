//! PostgreSQL implementation of EmployeeReader.

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};

use crate::domain::employee::EmployeeProfile;
use crate::domain::foundation::{EmployeeId, ValidationError};
use crate::ports::{EmployeeReader, EmployeeReaderError};

/// Ratings run 1-5; 0 stands for "not yet rated".
const MAX_PERFORMANCE_RATING: i32 = 5;

const PROFILE_QUERY: &str = r#"
    SELECT
        employee_id::text AS employee_id,
        full_name,
        COALESCE(job_role, '') AS job_role,
        COALESCE(salary, 0)::float8 AS salary,
        COALESCE(number_of_promotions, 0)::int4 AS number_of_promotions,
        COALESCE(years_with_company, 0)::int4 AS years_with_company,
        COALESCE(overtime, FALSE) AS overtime,
        COALESCE(performance_rating, 0)::int4 AS performance_rating,
        COALESCE(attrition_score, 0)::float8 AS attrition_score,
        COALESCE(years_in_current_role, 0)::int4 AS years_in_current_role
    FROM employees
    WHERE employee_id::text = $1
"#;

#[derive(Clone)]
pub struct PostgresEmployeeReader {
    pool: PgPool,
}

impl PostgresEmployeeReader {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EmployeeReader for PostgresEmployeeReader {
    async fn find_profile(
        &self,
        employee_id: &EmployeeId,
    ) -> Result<Option<EmployeeProfile>, EmployeeReaderError> {
        let row = sqlx::query(PROFILE_QUERY)
            .bind(employee_id.as_str())
            .fetch_optional(&self.pool)
            .await?;

        row.map(|r| profile_from_row(&r)).transpose()
    }
}

fn profile_from_row(row: &PgRow) -> Result<EmployeeProfile, EmployeeReaderError> {
    let id: String = row.try_get("employee_id")?;
    let employee_id =
        EmployeeId::new(id).map_err(|e| EmployeeReaderError::Database(e.to_string()))?;

    Ok(EmployeeProfile {
        employee_id,
        full_name: row.try_get("full_name")?,
        job_role: row.try_get("job_role")?,
        salary: row.try_get("salary")?,
        number_of_promotions: non_negative(row.try_get("number_of_promotions")?),
        years_with_company: non_negative(row.try_get("years_with_company")?),
        overtime: row.try_get("overtime")?,
        performance_rating: performance_rating(row.try_get("performance_rating")?)?,
        attrition_score: row.try_get("attrition_score")?,
        years_in_current_role: non_negative(row.try_get("years_in_current_role")?),
    })
}

fn non_negative(value: i32) -> u32 {
    u32::try_from(value).unwrap_or(0)
}

/// Corrupt ratings are surfaced, never coerced into a valid one.
pub(super) fn checked_performance_rating(value: i32) -> Result<u8, ValidationError> {
    if !(0..=MAX_PERFORMANCE_RATING).contains(&value) {
        return Err(ValidationError::out_of_range(
            "performance_rating",
            0,
            i64::from(MAX_PERFORMANCE_RATING),
            i64::from(value),
        ));
    }
    Ok(value as u8)
}

fn performance_rating(value: i32) -> Result<u8, EmployeeReaderError> {
    checked_performance_rating(value).map_err(|e| EmployeeReaderError::Database(e.to_string()))
}
