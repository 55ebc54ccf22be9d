//! HTTP DTOs for analytics endpoints.
//!
//! The domain reports are already designed for serialization, so they are
//! re-exported directly.

pub use crate::domain::analysis::InterventionReport;
pub use crate::domain::employee::EmployeeRetentionPlan;
pub use crate::domain::insights::PredictiveInsights;

use serde::{Deserialize, Serialize};

/// Query parameters for the interventions endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct InterventionParams {
    /// Maximum recommendations to return.
    pub limit: Option<usize>,
}

/// Standard error response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
}

impl ErrorResponse {
    fn new(code: &str, message: impl Into<String>) -> Self {
        Self {
            code: code.to_string(),
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new("BAD_REQUEST", message)
    }

    pub fn not_found(resource_type: &str, id: &str) -> Self {
        Self::new("NOT_FOUND", format!("{} not found: {}", resource_type, id))
    }

    pub fn service_unavailable(message: impl Into<String>) -> Self {
        Self::new("UPSTREAM_UNAVAILABLE", message)
    }
}
