//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, and error types that form the
//! vocabulary of the retention advisor domain.

mod errors;
mod ids;
mod percentage;

pub use errors::ValidationError;
pub use ids::EmployeeId;
pub use percentage::Percentage;
