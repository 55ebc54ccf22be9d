//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `postgres` - Aggregation queries over survey and employee tables
//! - `http` - Axum routes exposing the analytics queries

pub mod http;
pub mod postgres;

pub use http::{api_router, AnalyticsAppState};
pub use postgres::{
    PostgresEmployeeReader, PostgresSegmentStatisticsReader, PostgresWorkforceInsightsReader,
};
