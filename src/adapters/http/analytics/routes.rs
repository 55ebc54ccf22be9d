//! HTTP routes for analytics endpoints.

use axum::routing::get;
use axum::Router;

use super::handlers::{
    get_employee_retention_plan, get_intervention_recommendations, get_predictive_insights,
    AnalyticsAppState,
};

/// Creates the analytics router with all routes.
pub fn analytics_routes(state: AnalyticsAppState) -> Router {
    Router::new()
        // GET /api/analytics/interventions?limit=N
        .route("/api/analytics/interventions", get(get_intervention_recommendations))
        // GET /api/analytics/recommendations/:employee_id
        .route(
            "/api/analytics/recommendations/:employee_id",
            get(get_employee_retention_plan),
        )
        // GET /api/analytics/predictive-insights
        .route("/api/analytics/predictive-insights", get(get_predictive_insights))
        .with_state(state)
}
