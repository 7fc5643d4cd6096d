//! Request types for the leave API.
//!
//! Query strings and JSON bodies are decoded into these types and then
//! converted to the domain types the engine works with.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{LeaveType, LeaveUsage};
use crate::roster::EmployeeQuery;

/// Query string carrying only the reference date.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AsOfParams {
    /// Reference date; today when omitted.
    #[serde(default)]
    pub as_of: Option<NaiveDate>,
}

/// Query string for `GET /employees`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListEmployeesParams {
    /// Search text matched against name, employee number and department.
    #[serde(default)]
    pub q: Option<String>,
    /// Exact department filter.
    #[serde(default)]
    pub department: Option<String>,
    /// 1-based page number.
    #[serde(default)]
    pub page: Option<usize>,
    /// Page size.
    #[serde(default)]
    pub per_page: Option<usize>,
    /// Reference date for the snapshots; today when omitted.
    #[serde(default)]
    pub as_of: Option<NaiveDate>,
}

impl ListEmployeesParams {
    /// The roster query part of the parameters.
    pub fn to_query(&self) -> EmployeeQuery {
        EmployeeQuery {
            q: self.q.clone(),
            department: self.department.clone(),
            page: self.page,
            per_page: self.per_page,
        }
    }
}

/// Request body for `POST /employees/{id}/usage`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UsageRequest {
    /// The first day of leave.
    pub date: NaiveDate,
    /// Number of days taken, in half-day steps.
    pub days: Decimal,
    /// Whole-day or half-day leave.
    #[serde(default = "default_leave_type")]
    pub leave_type: LeaveType,
    /// Optional free-text reason.
    #[serde(default)]
    pub reason: Option<String>,
}

fn default_leave_type() -> LeaveType {
    LeaveType::Annual
}

impl From<UsageRequest> for LeaveUsage {
    fn from(req: UsageRequest) -> Self {
        LeaveUsage {
            date: req.date,
            days: req.days,
            leave_type: req.leave_type,
            reason: req.reason.filter(|r| !r.trim().is_empty()),
        }
    }
}

/// Request body for `POST /settlement`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SettlementRequest {
    /// Days to value.
    pub unused_days: Decimal,
    /// Monthly wage in the smallest currency unit.
    pub monthly_wage: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_usage_request() {
        let json = r#"{
            "date": "2026-09-14",
            "days": "0.5",
            "leave_type": "morning_half",
            "reason": "Dentist"
        }"#;

        let request: UsageRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.leave_type, LeaveType::MorningHalf);
        assert_eq!(request.days, Decimal::new(5, 1));

        let usage: LeaveUsage = request.into();
        assert_eq!(usage.reason.as_deref(), Some("Dentist"));
    }

    #[test]
    fn test_usage_request_defaults_to_annual() {
        let json = r#"{"date": "2026-09-14", "days": 2}"#;

        let request: UsageRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.leave_type, LeaveType::Annual);
        assert_eq!(request.days, Decimal::from(2));
    }

    #[test]
    fn test_blank_reason_is_dropped() {
        let request = UsageRequest {
            date: NaiveDate::from_ymd_opt(2026, 9, 14).unwrap(),
            days: Decimal::ONE,
            leave_type: LeaveType::Annual,
            reason: Some("  ".to_string()),
        };

        let usage: LeaveUsage = request.into();
        assert_eq!(usage.reason, None);
    }

    #[test]
    fn test_list_params_to_query() {
        let params = ListEmployeesParams {
            q: Some("kim".to_string()),
            department: Some("Sales".to_string()),
            page: Some(2),
            per_page: Some(50),
            as_of: None,
        };

        let query = params.to_query();
        assert_eq!(query.needle().as_deref(), Some("kim"));
        assert_eq!(query.page(), 2);
        assert_eq!(query.per_page(), 50);
    }

    #[test]
    fn test_deserialize_settlement_request() {
        let json = r#"{"unused_days": "10", "monthly_wage": 3000000}"#;

        let request: SettlementRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.unused_days, Decimal::from(10));
        assert_eq!(request.monthly_wage, 3_000_000);
    }
}
