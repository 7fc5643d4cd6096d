//! Leave usage registration model.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Upper bound on the days a single usage event can cover.
pub const MAX_DAYS_PER_USAGE: u32 = 366;

/// The kind of leave taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeaveType {
    /// One or more whole days of annual leave.
    Annual,
    /// Half a day, taken in the morning.
    MorningHalf,
    /// Half a day, taken in the afternoon.
    AfternoonHalf,
}

impl LeaveType {
    /// Returns true for the half-day variants.
    pub fn is_half_day(self) -> bool {
        matches!(self, LeaveType::MorningHalf | LeaveType::AfternoonHalf)
    }
}

/// A single leave usage event submitted by the registration flow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveUsage {
    /// The first day of leave.
    pub date: NaiveDate,
    /// Number of days taken (multiples of 0.5).
    pub days: Decimal,
    /// The kind of leave.
    pub leave_type: LeaveType,
    /// Optional free-text reason.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl LeaveUsage {
    /// Checks that the day count is positive, at most [`MAX_DAYS_PER_USAGE`],
    /// in half-day steps, and that half-day leave types carry exactly half a day.
    ///
    /// # Examples
    ///
    /// ```
    /// use leave_engine::models::{LeaveType, LeaveUsage};
    /// use chrono::NaiveDate;
    /// use rust_decimal::Decimal;
    ///
    /// let usage = LeaveUsage {
    ///     date: NaiveDate::from_ymd_opt(2026, 8, 14).unwrap(),
    ///     days: Decimal::new(5, 1),
    ///     leave_type: LeaveType::MorningHalf,
    ///     reason: None,
    /// };
    /// assert!(usage.validate().is_ok());
    /// ```
    pub fn validate(&self) -> EngineResult<()> {
        let half = Decimal::new(5, 1);

        if self.days <= Decimal::ZERO {
            return Err(EngineError::InvalidUsage {
                message: format!("days must be positive, got {}", self.days),
            });
        }
        if self.days > Decimal::from(MAX_DAYS_PER_USAGE) {
            return Err(EngineError::InvalidUsage {
                message: format!(
                    "days must not exceed {}, got {}",
                    MAX_DAYS_PER_USAGE, self.days
                ),
            });
        }
        if !(self.days % half).is_zero() {
            return Err(EngineError::InvalidUsage {
                message: format!("days must be a multiple of 0.5, got {}", self.days),
            });
        }
        if self.leave_type.is_half_day() && self.days != half {
            return Err(EngineError::InvalidUsage {
                message: format!("half-day leave must be 0.5 days, got {}", self.days),
            });
        }
        Ok(())
    }
}
