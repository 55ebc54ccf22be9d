//! HTTP adapters - REST API implementations.
//!
//! Each area has its own HTTP adapter for endpoint exposure.

pub mod analytics;
pub mod health;
pub mod middleware;

use axum::Router;

use crate::config::ServerConfig;

// Re-export key types for convenience
pub use analytics::{analytics_routes, AnalyticsAppState};
pub use health::health_routes;

/// Assembles the full API router with middleware.
pub fn api_router(state: AnalyticsAppState, server: &ServerConfig) -> Router {
    let router = Router::new()
        .merge(health_routes())
        .merge(analytics_routes(state));
    middleware::with_middleware(router, server)
}
