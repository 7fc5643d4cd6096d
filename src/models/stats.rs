//! Aggregate statistics over a group of employees.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Per-department totals.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepartmentStats {
    /// Department name.
    pub department: String,
    /// Number of employees in the department.
    pub total_employees: usize,
    /// Sum of current-period entitlements.
    pub total_days: u32,
    /// Sum of days used.
    pub used_days: Decimal,
    /// Sum of remaining days (over-use reduces it).
    pub remaining_days: Decimal,
    /// `used_days / total_days` as a rounded percentage; 0 when nothing is entitled.
    pub avg_usage_rate: u32,
    /// Projected net settlement of members with days left.
    pub settlement_amount: i64,
}

impl DepartmentStats {
    /// Creates an empty entry for a department.
    pub fn empty(department: impl Into<String>) -> Self {
        Self {
            department: department.into(),
            ..Self::default()
        }
    }
}

/// Organisation-wide dashboard figures.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortfolioSummary {
    /// Number of employees considered.
    pub total_employees: usize,
    /// Sum of current-period entitlements.
    pub total_days: u32,
    /// Sum of days used.
    pub used_days: Decimal,
    /// Sum of remaining days.
    pub remaining_days: Decimal,
    /// Rounded usage percentage; 0 when nothing is entitled.
    pub avg_usage_rate: u32,
    /// Employees whose period ends within the warning window.
    pub warning_count: usize,
    /// Employees whose period has expired.
    pub expired_count: usize,
    /// Warning-window employees that still have days to settle.
    pub settlement_target_count: usize,
    /// Net settlement owed on expired balances.
    pub expected_settlement_amount: i64,
}

/// Rounded percentage of `used` over `total`, half away from zero.
///
/// An empty denominator yields 0. Over-use can push the rate past 100; a
/// negative result (never expected from valid records) is reported as 0.
///
/// # Example
///
/// ```
/// use leave_engine::models::usage_rate;
/// use rust_decimal::Decimal;
///
/// assert_eq!(usage_rate(Decimal::new(75, 1), 15), 50);
/// assert_eq!(usage_rate(Decimal::from(3), 0), 0);
/// ```
pub fn usage_rate(used: Decimal, total: u32) -> u32 {
    if total == 0 {
        return 0;
    }
    (used * Decimal::ONE_HUNDRED / Decimal::from(total))
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_u32()
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_usage_rate_zero_denominator_is_zero() {
        assert_eq!(usage_rate(Decimal::ZERO, 0), 0);
        assert_eq!(usage_rate(Decimal::from(4), 0), 0);
    }

    #[test]
    fn test_usage_rate_rounds_half_up() {
        // 1 / 8 = 12.5%
        assert_eq!(usage_rate(Decimal::ONE, 8), 13);
        // 1 / 3 = 33.33%
        assert_eq!(usage_rate(Decimal::ONE, 3), 33);
    }

    #[test]
    fn test_usage_rate_can_exceed_one_hundred() {
        assert_eq!(usage_rate(Decimal::from(18), 15), 120);
    }

    #[test]
    fn test_empty_department() {
        let stats = DepartmentStats::empty("Finance");
        assert_eq!(stats.department, "Finance");
        assert_eq!(stats.total_employees, 0);
        assert_eq!(stats.avg_usage_rate, 0);
    }
}
