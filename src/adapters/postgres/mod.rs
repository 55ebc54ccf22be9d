//! PostgreSQL adapters - Database implementations for read ports.
//!
//! - `PostgresSegmentStatisticsReader` - Cohort survey averages and salary brackets
//! - `PostgresEmployeeReader` - Single-employee profile lookups
//! - `PostgresWorkforceInsightsReader` - Watchlist, department and cohort aggregates

mod employee_reader;
mod segment_statistics_reader;
mod workforce_insights_reader;

pub use employee_reader::PostgresEmployeeReader;
pub use segment_statistics_reader::PostgresSegmentStatisticsReader;
pub use workforce_insights_reader::PostgresWorkforceInsightsReader;
