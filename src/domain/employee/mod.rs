//! Employee Module - Individual retention advice.
//!
//! Rule-based advice for a single employee, complementing the
//! population-level recommendations in `analysis`.

mod advisor;
mod profile;

pub use advisor::{
    AdviceCategory, EmployeeRecommendation, EmployeeRetentionPlan, RetentionAdvisor, Urgency,
    DEFAULT_HIGH_RISK_THRESHOLD,
};
pub use profile::EmployeeProfile;
