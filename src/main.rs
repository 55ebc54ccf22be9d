use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use retention_advisor::adapters::{
    api_router, AnalyticsAppState, PostgresEmployeeReader, PostgresSegmentStatisticsReader,
    PostgresWorkforceInsightsReader,
};
use retention_advisor::config::{AppConfig, LogFormat};
use retention_advisor::domain::analysis::RecommendationEngine;
use retention_advisor::domain::employee::RetentionAdvisor;
use retention_advisor::domain::insights::InsightsAnalyzer;

#[tokio::main]
async fn main() {
    let config = AppConfig::load().expect("Failed to load configuration");

    init_tracing(&config);

    // Connections are established on first use; an unreachable database
    // surfaces as 503 on the affected request.
    let pool = config
        .database
        .connect_lazy()
        .expect("Invalid database configuration");

    let threshold = config.engine.high_risk_threshold;
    let state = AnalyticsAppState {
        segment_statistics: Arc::new(PostgresSegmentStatisticsReader::new(pool.clone(), threshold)),
        employee_reader: Arc::new(PostgresEmployeeReader::new(pool.clone())),
        workforce_insights: Arc::new(PostgresWorkforceInsightsReader::new(pool)),
        engine: RecommendationEngine::with_max_results(config.engine.max_results),
        max_results_limit: config.engine.max_results_limit,
        advisor: RetentionAdvisor::new(threshold),
        insights: InsightsAnalyzer::new(threshold, config.engine.watchlist_size),
    };

    let app = api_router(state, &config.server);

    let addr = config.server.socket_addr();
    tracing::info!(%addr, "Retention advisor listening");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind listener");
    axum::serve(listener, app).await.expect("Server error");
}

fn init_tracing(config: &AppConfig) {
    let filter = config
        .server
        .log_filter()
        .expect("Log filter validated at load");

    let registry = tracing_subscriber::registry().with(filter);
    match config.server.log_format {
        LogFormat::Json => registry.with(tracing_subscriber::fmt::layer().json()).init(),
        LogFormat::Compact => registry.with(tracing_subscriber::fmt::layer().compact()).init(),
    }
}
