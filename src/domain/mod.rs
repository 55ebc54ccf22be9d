//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, errors)
//! - `segments` - Pre-aggregated survey and compensation statistics
//! - `analysis` - Recommendation synthesis engine
//! - `employee` - Individual retention advice
//! - `insights` - Watchlist, department risk and retention factors

pub mod analysis;
pub mod employee;
pub mod foundation;
pub mod insights;
pub mod segments;
