//! HTTP handlers for analytics endpoints.
//!
//! These handlers connect Axum routes to application layer query handlers.

use std::sync::Arc;

use axum::extract::{Json, Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::application::handlers::{
    EmployeeAdviceError, GetEmployeeRetentionPlanHandler, GetEmployeeRetentionPlanQuery,
    GetInterventionRecommendationsHandler, GetInterventionRecommendationsQuery,
    GetPredictiveInsightsHandler, InsightsError, InterventionError,
};
use crate::domain::analysis::RecommendationEngine;
use crate::domain::employee::RetentionAdvisor;
use crate::domain::foundation::EmployeeId;
use crate::domain::insights::InsightsAnalyzer;
use crate::ports::{EmployeeReader, SegmentStatisticsProvider, WorkforceInsightsProvider};

use super::dto::{
    EmployeeRetentionPlan, ErrorResponse, InterventionParams, InterventionReport, PredictiveInsights,
};

// ════════════════════════════════════════════════════════════════════════════════
// Error Type
// ════════════════════════════════════════════════════════════════════════════════

/// Analytics API error that implements IntoResponse.
#[derive(Debug)]
pub enum AnalyticsApiError {
    BadRequest(String),
    NotFound(String),
    ServiceUnavailable(String),
}

impl IntoResponse for AnalyticsApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, error) = match self {
            AnalyticsApiError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, ErrorResponse::bad_request(msg))
            }
            AnalyticsApiError::NotFound(id) => {
                (StatusCode::NOT_FOUND, ErrorResponse::not_found("Employee", &id))
            }
            AnalyticsApiError::ServiceUnavailable(msg) => (
                StatusCode::SERVICE_UNAVAILABLE,
                ErrorResponse::service_unavailable(msg),
            ),
        };
        (status, Json(error)).into_response()
    }
}

impl From<InterventionError> for AnalyticsApiError {
    fn from(error: InterventionError) -> Self {
        match error {
            InterventionError::InvalidInput(msg) => AnalyticsApiError::BadRequest(msg),
            InterventionError::UpstreamUnavailable(_) => AnalyticsApiError::ServiceUnavailable(
                "Segment statistics are currently unavailable".to_string(),
            ),
        }
    }
}

impl From<EmployeeAdviceError> for AnalyticsApiError {
    fn from(error: EmployeeAdviceError) -> Self {
        match error {
            EmployeeAdviceError::NotFound(id) => AnalyticsApiError::NotFound(id.to_string()),
            EmployeeAdviceError::InvalidInput(msg) => AnalyticsApiError::BadRequest(msg),
            EmployeeAdviceError::UpstreamUnavailable(_) => AnalyticsApiError::ServiceUnavailable(
                "Employee records are currently unavailable".to_string(),
            ),
        }
    }
}

impl From<InsightsError> for AnalyticsApiError {
    fn from(error: InsightsError) -> Self {
        match error {
            InsightsError::UpstreamUnavailable(_) => AnalyticsApiError::ServiceUnavailable(
                "Workforce records are currently unavailable".to_string(),
            ),
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared application state containing analytics dependencies.
#[derive(Clone)]
pub struct AnalyticsAppState {
    pub segment_statistics: Arc<dyn SegmentStatisticsProvider>,
    pub employee_reader: Arc<dyn EmployeeReader>,
    pub workforce_insights: Arc<dyn WorkforceInsightsProvider>,
    pub engine: RecommendationEngine,
    pub max_results_limit: usize,
    pub advisor: RetentionAdvisor,
    pub insights: InsightsAnalyzer,
}

impl AnalyticsAppState {
    pub fn intervention_handler(&self) -> GetInterventionRecommendationsHandler {
        GetInterventionRecommendationsHandler::new(
            self.segment_statistics.clone(),
            self.engine.clone(),
            self.max_results_limit,
        )
    }

    pub fn retention_plan_handler(&self) -> GetEmployeeRetentionPlanHandler {
        GetEmployeeRetentionPlanHandler::new(self.employee_reader.clone(), self.advisor)
    }

    pub fn predictive_insights_handler(&self) -> GetPredictiveInsightsHandler {
        GetPredictiveInsightsHandler::new(self.workforce_insights.clone(), self.insights)
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Handlers
// ════════════════════════════════════════════════════════════════════════════════

/// GET /api/analytics/interventions
///
/// Returns ranked, bounded retention interventions for the whole workforce.
pub async fn get_intervention_recommendations(
    State(state): State<AnalyticsAppState>,
    Query(params): Query<InterventionParams>,
) -> Result<Json<InterventionReport>, AnalyticsApiError> {
    let query = GetInterventionRecommendationsQuery {
        max_results: params.limit,
    };

    let report = state.intervention_handler().handle(query).await?;

    Ok(Json(report))
}

/// GET /api/analytics/recommendations/:employee_id
///
/// Returns retention advice for a single employee.
pub async fn get_employee_retention_plan(
    State(state): State<AnalyticsAppState>,
    Path(employee_id): Path<String>,
) -> Result<Json<EmployeeRetentionPlan>, AnalyticsApiError> {
    let employee_id = EmployeeId::new(employee_id)
        .map_err(|e| EmployeeAdviceError::InvalidInput(e.to_string()))?;

    let plan = state
        .retention_plan_handler()
        .handle(GetEmployeeRetentionPlanQuery { employee_id })
        .await?;

    Ok(Json(plan))
}

/// GET /api/analytics/predictive-insights
///
/// Returns the high-risk watchlist, per-department risk and retention factors.
pub async fn get_predictive_insights(
    State(state): State<AnalyticsAppState>,
) -> Result<Json<PredictiveInsights>, AnalyticsApiError> {
    let insights = state.predictive_insights_handler().handle().await?;

    Ok(Json(insights))
}
