//! Analytics query handlers.
//!
//! Read-only handlers that turn aggregated workforce data into advice.

mod get_employee_retention_plan;
mod get_intervention_recommendations;
mod get_predictive_insights;

pub use get_employee_retention_plan::{
    EmployeeAdviceError, GetEmployeeRetentionPlanHandler, GetEmployeeRetentionPlanQuery,
    GetEmployeeRetentionPlanResult,
};
pub use get_intervention_recommendations::{
    GetInterventionRecommendationsHandler, GetInterventionRecommendationsQuery,
    GetInterventionRecommendationsResult, InterventionError,
};
pub use get_predictive_insights::{GetPredictiveInsightsHandler, InsightsError};
