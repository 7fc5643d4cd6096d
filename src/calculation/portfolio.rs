//! Organisation-wide figures for the dashboard.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::config::LeavePolicy;
use crate::error::EngineResult;
use crate::models::{
    Employee, LeaveSnapshot, LeaveStatus, PortfolioSummary, SettlementHistorySummary,
    SettlementRecord, usage_rate,
};

use super::snapshot::build_snapshot;

/// Totals the leave balances of a whole employee collection.
///
/// `expected_settlement_amount` sums the settlement amounts the snapshots
/// carry, i.e. balances whose period has already closed.
pub fn portfolio_summary(
    employees: &[Employee],
    reference_date: NaiveDate,
    policy: &LeavePolicy,
) -> EngineResult<PortfolioSummary> {
    let mut summary = PortfolioSummary::default();

    for employee in employees {
        let snapshot = build_snapshot(employee, reference_date, policy)?;

        summary.total_employees += 1;
        summary.total_days += snapshot.total_days;
        summary.used_days += snapshot.used_days;
        summary.remaining_days += snapshot.remaining_days;
        match snapshot.status {
            LeaveStatus::Warning => summary.warning_count += 1,
            LeaveStatus::Expired => summary.expired_count += 1,
            LeaveStatus::Active => {}
        }
        if snapshot.is_settlement_target() {
            summary.settlement_target_count += 1;
        }
        summary.expected_settlement_amount += snapshot.settlement_amount.unwrap_or(0);
    }

    summary.avg_usage_rate = usage_rate(summary.used_days, summary.total_days);
    Ok(summary)
}

/// Returns the snapshots of employees in the warning window with days left,
/// soonest expiry first.
///
/// Ties are broken by employee id so the order is stable.
pub fn settlement_targets(
    employees: &[Employee],
    reference_date: NaiveDate,
    policy: &LeavePolicy,
) -> EngineResult<Vec<LeaveSnapshot>> {
    let mut targets = Vec::new();
    for employee in employees {
        let snapshot = build_snapshot(employee, reference_date, policy)?;
        if snapshot.is_settlement_target() {
            targets.push(snapshot);
        }
    }

    targets.sort_by(|a, b| {
        a.days_until_expiry
            .cmp(&b.days_until_expiry)
            .then_with(|| a.employee_id.cmp(&b.employee_id))
    });
    Ok(targets)
}

/// Totals an employee's past settlements.
///
/// # Examples
///
/// ```
/// use leave_engine::calculation::settlement_history_summary;
///
/// let summary = settlement_history_summary(&[]);
/// assert_eq!(summary.count, 0);
/// assert_eq!(summary.last_settlement_date, None);
/// ```
pub fn settlement_history_summary(records: &[SettlementRecord]) -> SettlementHistorySummary {
    SettlementHistorySummary::from_records(records)
}

/// Sum of remaining days across snapshots that still have days left.
pub fn unsettled_days(snapshots: &[LeaveSnapshot]) -> Decimal {
    snapshots
        .iter()
        .filter(|s| s.has_remaining())
        .map(|s| s.remaining_days)
        .sum()
}
