//! Application layer - Queries and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Every operation here is a read; nothing is persisted.

pub mod handlers;

pub use handlers::{
    EmployeeAdviceError, GetEmployeeRetentionPlanHandler, GetEmployeeRetentionPlanQuery,
    GetInterventionRecommendationsHandler, GetInterventionRecommendationsQuery,
    GetPredictiveInsightsHandler, InsightsError, InterventionError,
};
