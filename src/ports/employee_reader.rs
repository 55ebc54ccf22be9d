use async_trait::async_trait;

use crate::domain::employee::EmployeeProfile;
use crate::domain::foundation::EmployeeId;

/// Read-only port for individual employee records
#[async_trait]
pub trait EmployeeReader: Send + Sync {
    /// Returns `Ok(None)` when no employee has the given ID.
    async fn find_profile(
        &self,
        employee_id: &EmployeeId,
    ) -> Result<Option<EmployeeProfile>, EmployeeReaderError>;
}

#[derive(Debug, thiserror::Error)]
pub enum EmployeeReaderError {
    #[error("Employee store unavailable: {0}")]
    Unavailable(String),

    #[error("Database error: {0}")]
    Database(String),
}

impl From<sqlx::Error> for EmployeeReaderError {
    fn from(err: sqlx::Error) -> Self {
        let connection_lost = matches!(
            err,
            sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_)
        );
        if connection_lost {
            EmployeeReaderError::Unavailable(err.to_string())
        } else {
            EmployeeReaderError::Database(err.to_string())
        }
    }
}
