//! GetEmployeeRetentionPlanHandler - Query handler for individual retention advice.

use std::sync::Arc;

use tracing::{debug, error};

use crate::domain::employee::{EmployeeRetentionPlan, RetentionAdvisor};
use crate::domain::foundation::EmployeeId;
use crate::ports::EmployeeReader;

/// Query for one employee's retention plan.
#[derive(Debug, Clone)]
pub struct GetEmployeeRetentionPlanQuery {
    pub employee_id: EmployeeId,
}

/// Result of a successful retention plan query.
pub type GetEmployeeRetentionPlanResult = EmployeeRetentionPlan;

#[derive(Debug, thiserror::Error)]
pub enum EmployeeAdviceError {
    #[error("Employee not found: {0}")]
    NotFound(EmployeeId),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Upstream data unavailable: {0}")]
    UpstreamUnavailable(String),
}

/// Handler for retrieving an employee's retention plan.
pub struct GetEmployeeRetentionPlanHandler {
    reader: Arc<dyn EmployeeReader>,
    advisor: RetentionAdvisor,
}

impl GetEmployeeRetentionPlanHandler {
    pub fn new(reader: Arc<dyn EmployeeReader>, advisor: RetentionAdvisor) -> Self {
        Self { reader, advisor }
    }

    pub async fn handle(
        &self,
        query: GetEmployeeRetentionPlanQuery,
    ) -> Result<GetEmployeeRetentionPlanResult, EmployeeAdviceError> {
        let profile = self
            .reader
            .find_profile(&query.employee_id)
            .await
            .map_err(|e| {
                error!(employee_id = %query.employee_id, error = %e, "Failed to load employee");
                EmployeeAdviceError::UpstreamUnavailable(e.to_string())
            })?
            .ok_or_else(|| EmployeeAdviceError::NotFound(query.employee_id.clone()))?;

        let plan = self.advisor.advise(&profile);
        debug!(
            employee_id = %plan.employee_id,
            recommendations = plan.recommendations.len(),
            "Built retention plan"
        );

        Ok(plan)
    }
}
