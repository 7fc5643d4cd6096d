//! Core data models for the leave engine.
//!
//! This module contains all the domain models used throughout the engine.

mod employee;
mod leave;
mod settlement;
mod stats;
mod usage;

pub use employee::{Employee, SettlementRecord, SettlementType};
pub use leave::{ExpiryStatus, LeavePeriod, LeaveSnapshot, LeaveStatus, Tenure};
pub use settlement::{SettlementBreakdown, SettlementHistorySummary};
pub use stats::{DepartmentStats, PortfolioSummary, usage_rate};
pub use usage::{LeaveType, LeaveUsage, MAX_DAYS_PER_USAGE};
