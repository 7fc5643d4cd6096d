//! Per-department aggregation.
//!
//! A pure reduction over [`build_snapshot`] outputs; the only arithmetic of
//! its own is summing and the guarded usage rate.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::config::LeavePolicy;
use crate::error::EngineResult;
use crate::models::{DepartmentStats, Employee, usage_rate};

use super::snapshot::build_snapshot;
use super::wage::calculate_settlement;

/// Groups employees by department and totals their leave balances.
///
/// `settlement_amount` projects the net payout of every member with days
/// left, whatever the expiry tier, so it answers "what would settling today
/// cost".
///
/// # Returns
///
/// Returns the statistics keyed by department name, or the first snapshot error.
///
/// # Examples
///
/// ```
/// use leave_engine::calculation::department_stats;
/// use leave_engine::config::LeavePolicy;
/// use chrono::NaiveDate;
///
/// let reference = NaiveDate::from_ymd_opt(2026, 10, 18).unwrap();
/// let stats = department_stats(&[], reference, &LeavePolicy::statutory()).unwrap();
/// assert!(stats.is_empty());
/// ```
pub fn department_stats(
    employees: &[Employee],
    reference_date: NaiveDate,
    policy: &LeavePolicy,
) -> EngineResult<BTreeMap<String, DepartmentStats>> {
    department_stats_seeded(&[], employees, reference_date, policy)
}

/// Like [`department_stats`], but every name in `departments` is present in
/// the result even when no employee belongs to it.
pub fn department_stats_seeded(
    departments: &[String],
    employees: &[Employee],
    reference_date: NaiveDate,
    policy: &LeavePolicy,
) -> EngineResult<BTreeMap<String, DepartmentStats>> {
    let mut stats: BTreeMap<String, DepartmentStats> = departments
        .iter()
        .map(|name| (name.clone(), DepartmentStats::empty(name.as_str())))
        .collect();

    for employee in employees {
        let snapshot = build_snapshot(employee, reference_date, policy)?;
        let entry = stats
            .entry(employee.department.clone())
            .or_insert_with(|| DepartmentStats::empty(employee.department.as_str()));

        entry.total_employees += 1;
        entry.total_days += snapshot.total_days;
        entry.used_days += snapshot.used_days;
        entry.remaining_days += snapshot.remaining_days;

        if snapshot.has_remaining() {
            let breakdown =
                calculate_settlement(snapshot.remaining_days, employee.monthly_wage, policy)?;
            entry.settlement_amount += breakdown.net_amount;
        }
    }

    for entry in stats.values_mut() {
        entry.avg_usage_rate = usage_rate(entry.used_days, entry.total_days);
    }

    Ok(stats)
}
