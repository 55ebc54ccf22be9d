use serde::Serialize;

use crate::domain::foundation::EmployeeId;

/// Attrition score from which departure is expected within a month.
pub const IMMINENT_DEPARTURE_SCORE: f64 = 0.8;

/// Employees listed on the watchlist unless configured otherwise.
pub const DEFAULT_WATCHLIST_SIZE: usize = 20;

/// Employee attributes shown on the watchlist.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AtRiskEmployee {
    pub employee_id: EmployeeId,
    pub full_name: String,
    pub department: Option<String>,
    pub job_role: String,
    pub attrition_score: f64,
    pub salary: f64,
    pub years_with_company: u32,
    pub performance_rating: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WatchlistEntry {
    #[serde(flatten)]
    pub employee: AtRiskEmployee,
    pub predicted_months_to_leave: u8,
}

/// Selects and orders the highest-risk employees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Watchlist {
    high_risk_threshold: f64,
    size: usize,
}

impl Watchlist {
    pub fn new(high_risk_threshold: f64, size: usize) -> Self {
        Self {
            high_risk_threshold,
            size,
        }
    }

    pub fn high_risk_threshold(&self) -> f64 {
        self.high_risk_threshold
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Rough departure horizon in months for an attrition score.
    pub fn predicted_months_to_leave(&self, attrition_score: f64) -> u8 {
        if attrition_score >= IMMINENT_DEPARTURE_SCORE {
            1
        } else if attrition_score >= self.high_risk_threshold {
            2
        } else {
            3
        }
    }

    /// Keeps high-risk employees only, riskiest first, bounded to `size`.
    pub fn build(&self, employees: Vec<AtRiskEmployee>) -> Vec<WatchlistEntry> {
        let mut at_risk: Vec<_> = employees
            .into_iter()
            .filter(|e| e.attrition_score >= self.high_risk_threshold)
            .collect();
        at_risk.sort_by(|a, b| b.attrition_score.total_cmp(&a.attrition_score));
        at_risk.truncate(self.size);

        at_risk
            .into_iter()
            .map(|employee| WatchlistEntry {
                predicted_months_to_leave: self.predicted_months_to_leave(employee.attrition_score),
                employee,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn employee(id: &str, attrition_score: f64) -> AtRiskEmployee {
        AtRiskEmployee {
            employee_id: EmployeeId::new(id).unwrap(),
            full_name: format!("Employee {}", id),
            department: Some("Sales".to_string()),
            job_role: "Account Executive".to_string(),
            attrition_score,
            salary: 58_000.0,
            years_with_company: 3,
            performance_rating: 4,
        }
    }

    #[test]
    fn departure_horizon_by_score() {
        let watchlist = Watchlist::new(0.7, 20);
        assert_eq!(watchlist.predicted_months_to_leave(0.93), 1);
        assert_eq!(watchlist.predicted_months_to_leave(0.8), 1);
        assert_eq!(watchlist.predicted_months_to_leave(0.79), 2);
        assert_eq!(watchlist.predicted_months_to_leave(0.7), 2);
        assert_eq!(watchlist.predicted_months_to_leave(0.5), 3);
    }

    #[test]
    fn build_filters_orders_and_bounds() {
        let watchlist = Watchlist::new(0.7, 2);
        let entries = watchlist.build(vec![
            employee("E-1", 0.72),
            employee("E-2", 0.4),
            employee("E-3", 0.91),
            employee("E-4", 0.85),
        ]);

        let ids: Vec<_> = entries.iter().map(|e| e.employee.employee_id.as_str()).collect();
        assert_eq!(ids, vec!["E-3", "E-4"]);
        assert!(entries.iter().all(|e| e.predicted_months_to_leave == 1));
    }

    #[test]
    fn entry_flattens_employee_fields() {
        let entries = Watchlist::new(0.7, 5).build(vec![employee("E-9", 0.75)]);
        let json = serde_json::to_value(&entries[0]).unwrap();

        assert_eq!(json["employeeId"], "E-9");
        assert_eq!(json["attritionScore"], 0.75);
        assert_eq!(json["predictedMonthsToLeave"], 2);
    }
}
