//! Employee attributes relevant to retention advice.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::EmployeeId;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeProfile {
    pub employee_id: EmployeeId,
    pub full_name: String,
    pub job_role: String,
    pub salary: f64,
    pub number_of_promotions: u32,
    pub years_with_company: u32,
    pub overtime: bool,
    /// Latest performance rating on a 1-5 scale.
    pub performance_rating: u8,
    /// Modelled attrition risk on a 0-1 scale.
    pub attrition_score: f64,
    pub years_in_current_role: u32,
}
