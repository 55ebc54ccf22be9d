//! Application handlers.
//!
//! Query handlers that orchestrate port reads and domain services.

pub mod analytics;

pub use analytics::{
    EmployeeAdviceError, GetEmployeeRetentionPlanHandler, GetEmployeeRetentionPlanQuery,
    GetEmployeeRetentionPlanResult, GetInterventionRecommendationsHandler,
    GetInterventionRecommendationsQuery, GetInterventionRecommendationsResult,
    GetPredictiveInsightsHandler, InsightsError, InterventionError,
};
