//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `SegmentStatisticsProvider` - Pre-aggregated survey and compensation snapshots
//! - `EmployeeReader` - Single-employee lookups for individual advice
//! - `WorkforceInsightsProvider` - Watchlist, department and cohort reads

mod employee_reader;
mod segment_statistics_provider;
mod workforce_insights_provider;

pub use employee_reader::{EmployeeReader, EmployeeReaderError};
pub use segment_statistics_provider::{SegmentStatisticsError, SegmentStatisticsProvider};
pub use workforce_insights_provider::WorkforceInsightsProvider;
