//! Calculation logic for the leave engine.
//!
//! Every function here is pure and synchronous: it takes the employee data,
//! an explicit reference date and the [`LeavePolicy`](crate::config::LeavePolicy)
//! it needs, and never reads the clock, logs, or mutates its inputs. The one
//! exception is [`snapshot_today`], the boundary helper that supplies the
//! local date.
//!
//! The calculators build on each other:
//!
//! - [`calculate_tenure`] measures service in whole months
//! - [`calculate_entitlement`] maps tenure to accrued days
//! - [`current_period`] and [`next_settlement_date`] derive anniversary boundaries
//! - [`classify_expiry`] tiers a period end against the reference date
//! - [`calculate_settlement`] values unused days
//! - [`build_snapshot`] composes all of the above for one employee
//! - [`department_stats`] and [`portfolio_summary`] reduce snapshots over a group

mod department;
mod entitlement;
mod expiry;
mod period;
mod portfolio;
mod snapshot;
mod tenure;
mod wage;

pub use department::{department_stats, department_stats_seeded};
pub use entitlement::{INCREMENT_TIER_START_YEARS, calculate_entitlement, entitlement_for_tenure};
pub use expiry::classify_expiry;
pub use period::{anniversary, current_period, next_settlement_date, period_for_leave_year};
pub use portfolio::{
    portfolio_summary, settlement_history_summary, settlement_targets, unsettled_days,
};
pub use snapshot::{build_snapshot, snapshot_today};
pub use tenure::{calculate_tenure, months_after};
pub use wage::{calculate_settlement, daily_wage, withholding_rate};
