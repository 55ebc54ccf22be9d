use serde::Serialize;

/// Headcount and risk figures for one department.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentRisk {
    pub department: String,
    pub total_employees: u64,
    pub high_risk_count: u64,
    /// Mean attrition score; `None` when no employee has been scored.
    pub risk_score: Option<f64>,
    pub avg_salary: Option<f64>,
    pub avg_performance: Option<f64>,
}

/// Orders departments by descending mean risk.
///
/// Unscored departments go last; ties keep their input order.
pub fn rank_departments(mut departments: Vec<DepartmentRisk>) -> Vec<DepartmentRisk> {
    departments.sort_by(|a, b| match (a.risk_score, b.risk_score) {
        (Some(x), Some(y)) => y.total_cmp(&x),
        (Some(_), None) => std::cmp::Ordering::Less,
        (None, Some(_)) => std::cmp::Ordering::Greater,
        (None, None) => std::cmp::Ordering::Equal,
    });
    departments
}
