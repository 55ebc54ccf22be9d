//! Analytics HTTP adapter module.
//!
//! Provides REST API endpoints for retention recommendations.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::ErrorResponse;
pub use handlers::{AnalyticsApiError, AnalyticsAppState};
pub use routes::analytics_routes;
