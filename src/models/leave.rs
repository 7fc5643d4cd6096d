//! Leave balance models.
//!
//! This module contains the intermediate values produced by the calculators
//! ([`Tenure`], [`LeavePeriod`], [`ExpiryStatus`]) and the aggregate
//! [`LeaveSnapshot`] built from them.

use chrono::{Days, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Elapsed service between a hire date and a reference date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tenure {
    /// Whole years elapsed.
    pub years: u32,
    /// Whole months elapsed beyond `years` (0..=11).
    pub months: u32,
    /// Whole months elapsed in total.
    pub total_months: u32,
}

/// One anniversary year, both ends inclusive.
///
/// # Example
///
/// ```
/// use leave_engine::models::LeavePeriod;
/// use chrono::NaiveDate;
///
/// let period = LeavePeriod {
///     leave_year: 3,
///     start_date: NaiveDate::from_ymd_opt(2025, 4, 1).unwrap(),
///     end_date: NaiveDate::from_ymd_opt(2026, 3, 31).unwrap(),
/// };
///
/// assert!(period.contains(NaiveDate::from_ymd_opt(2025, 4, 1).unwrap()));
/// assert!(period.contains(NaiveDate::from_ymd_opt(2026, 3, 31).unwrap()));
/// assert!(!period.contains(NaiveDate::from_ymd_opt(2026, 4, 1).unwrap()));
/// assert_eq!(period.next_start(), NaiveDate::from_ymd_opt(2026, 4, 1));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeavePeriod {
    /// 1-based index of the anniversary year.
    pub leave_year: u32,
    /// First day of the period (a hire-date anniversary).
    pub start_date: NaiveDate,
    /// Last day of the period.
    pub end_date: NaiveDate,
}

impl LeavePeriod {
    /// Checks if a date falls within the period (inclusive).
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start_date && date <= self.end_date
    }

    /// The day after the period ends.
    pub fn next_start(&self) -> Option<NaiveDate> {
        self.end_date.checked_add_days(Days::new(1))
    }
}

/// Expiry tier of a leave balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeaveStatus {
    /// More than the warning window remains before the period ends.
    Active,
    /// The period ends within the warning window.
    Warning,
    /// The period has ended.
    Expired,
}

/// Result of classifying a period end date against a reference date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpiryStatus {
    /// The expiry tier.
    pub status: LeaveStatus,
    /// Signed days from the reference date to the period end; negative once past.
    pub days_until_expiry: i64,
}

/// Point-in-time view of an employee's leave balance.
///
/// Recomputed on every request and never written back to the employee record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveSnapshot {
    /// The employee's identifier.
    pub employee_id: String,
    /// The employee's display name.
    pub employee_name: String,
    /// The date the snapshot was taken at.
    pub reference_date: NaiveDate,
    /// 1-based index of the current anniversary year.
    pub leave_year: u32,
    /// First day of the current period.
    pub start_date: NaiveDate,
    /// Last day of the current period.
    pub end_date: NaiveDate,
    /// Days accrued for the current period.
    pub total_days: u32,
    /// Days used, copied from the employee record.
    pub used_days: Decimal,
    /// `total_days - used_days`; negative when leave was over-used.
    pub remaining_days: Decimal,
    /// Net settlement, present only once the period has expired with days left.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub settlement_amount: Option<i64>,
    /// Expiry tier of the current period.
    pub status: LeaveStatus,
    /// Signed days until the current period ends.
    pub days_until_expiry: i64,
    /// The date the current period's balance is settled.
    pub next_settlement_date: NaiveDate,
}

impl LeaveSnapshot {
    /// True when leave days remain unused.
    pub fn has_remaining(&self) -> bool {
        self.remaining_days > Decimal::ZERO
    }

    /// True when the balance is in the warning window with days left to settle.
    pub fn is_settlement_target(&self) -> bool {
        self.status == LeaveStatus::Warning && self.has_remaining()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn create_snapshot(status: LeaveStatus, remaining: Decimal) -> LeaveSnapshot {
        LeaveSnapshot {
            employee_id: "EMP0001".to_string(),
            employee_name: "Kim Minjun".to_string(),
            reference_date: date(2026, 5, 10),
            leave_year: 4,
            start_date: date(2025, 6, 1),
            end_date: date(2026, 5, 31),
            total_days: 16,
            used_days: Decimal::from(16) - remaining,
            remaining_days: remaining,
            settlement_amount: None,
            status,
            days_until_expiry: 21,
            next_settlement_date: date(2026, 6, 1),
        }
    }

    #[test]
    fn test_leave_status_serialization() {
        assert_eq!(
            serde_json::to_string(&LeaveStatus::Active).unwrap(),
            "\"active\""
        );
        assert_eq!(
            serde_json::to_string(&LeaveStatus::Warning).unwrap(),
            "\"warning\""
        );
        assert_eq!(
            serde_json::to_string(&LeaveStatus::Expired).unwrap(),
            "\"expired\""
        );
    }

    #[test]
    fn test_period_next_start_crosses_year_end() {
        let period = LeavePeriod {
            leave_year: 1,
            start_date: date(2025, 1, 1),
            end_date: date(2025, 12, 31),
        };
        assert_eq!(period.next_start(), Some(date(2026, 1, 1)));
    }

    #[test]
    fn test_settlement_amount_omitted_when_absent() {
        let snapshot = create_snapshot(LeaveStatus::Warning, Decimal::from(3));
        let json = serde_json::to_value(&snapshot).unwrap();

        assert!(json.get("settlement_amount").is_none());
        assert_eq!(json["status"], "warning");
        assert_eq!(json["remaining_days"], "3");
    }

    #[test]
    fn test_settlement_target_requires_warning_and_remaining_days() {
        assert!(create_snapshot(LeaveStatus::Warning, Decimal::from(3)).is_settlement_target());
        assert!(!create_snapshot(LeaveStatus::Active, Decimal::from(3)).is_settlement_target());
        assert!(!create_snapshot(LeaveStatus::Warning, Decimal::ZERO).is_settlement_target());
        assert!(
            !create_snapshot(LeaveStatus::Warning, Decimal::new(-5, 1)).is_settlement_target()
        );
    }
}
