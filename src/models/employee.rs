//! Employee model and related types.
//!
//! This module defines the [`Employee`] record supplied by an external data
//! source and the read-only [`SettlementRecord`] history attached to it.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Why a past settlement was paid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SettlementType {
    /// Unused days cashed out at the end of an anniversary year.
    Annual,
    /// Unused days cashed out on resignation.
    Resignation,
}

/// A past cash-out of unused leave. Never recomputed by the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettlementRecord {
    /// The date the settlement was paid.
    pub settlement_date: NaiveDate,
    /// The anniversary year (1-based) the settlement closed out.
    pub leave_year: u32,
    /// Number of days settled.
    pub settled_days: Decimal,
    /// Amount paid out net of withholding, in the smallest currency unit.
    pub amount: i64,
    /// Why the settlement happened.
    #[serde(rename = "type")]
    pub settlement_type: SettlementType,
}

/// Represents an employee whose leave balance is being tracked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier for the employee.
    pub id: String,
    /// The employee number shown to staff.
    pub employee_no: String,
    /// Display name.
    pub name: String,
    /// Department the employee belongs to.
    pub department: String,
    /// Job title or grade.
    pub position: String,
    /// The date employment started; anchors every anniversary year.
    pub hire_date: NaiveDate,
    /// Monthly wage in the smallest currency unit.
    pub monthly_wage: i64,
    /// Leave days used in the current anniversary year (half-day granularity).
    pub used_days: Decimal,
    /// Last working day, if the employee has resigned.
    #[serde(default)]
    pub resignation_date: Option<NaiveDate>,
    /// Past settlements, oldest first.
    #[serde(default)]
    pub settlement_history: Vec<SettlementRecord>,
}

impl Employee {
    /// Checks the record-level guarantees the engine relies on.
    ///
    /// The monthly wage must be positive, used days must not be negative, a
    /// resignation date cannot precede the hire date, and every past settlement
    /// must carry positive days and a positive amount.
    ///
    /// # Examples
    ///
    /// ```
    /// use leave_engine::models::Employee;
    /// use chrono::NaiveDate;
    /// use rust_decimal::Decimal;
    ///
    /// let employee = Employee {
    ///     id: "EMP0001".to_string(),
    ///     employee_no: "EMP0001".to_string(),
    ///     name: "Kim Minjun".to_string(),
    ///     department: "Finance".to_string(),
    ///     position: "Manager".to_string(),
    ///     hire_date: NaiveDate::from_ymd_opt(2020, 3, 2).unwrap(),
    ///     monthly_wage: 4_000_000,
    ///     used_days: Decimal::new(35, 1),
    ///     resignation_date: None,
    ///     settlement_history: vec![],
    /// };
    /// assert!(employee.validate().is_ok());
    /// ```
    pub fn validate(&self) -> EngineResult<()> {
        if self.monthly_wage <= 0 {
            return Err(EngineError::InvalidWage {
                wage: self.monthly_wage,
            });
        }
        if self.used_days < Decimal::ZERO {
            return Err(EngineError::InvalidEmployee {
                field: "used_days".to_string(),
                message: format!("cannot be negative (got {})", self.used_days),
            });
        }
        if let Some(resigned) = self.resignation_date {
            if resigned < self.hire_date {
                return Err(EngineError::InvalidEmployee {
                    field: "resignation_date".to_string(),
                    message: format!("{} is before hire date {}", resigned, self.hire_date),
                });
            }
        }
        for record in &self.settlement_history {
            if record.settled_days <= Decimal::ZERO {
                return Err(EngineError::InvalidEmployee {
                    field: "settlement_history".to_string(),
                    message: format!(
                        "settled days must be positive (got {} on {})",
                        record.settled_days, record.settlement_date
                    ),
                });
            }
            if record.amount <= 0 {
                return Err(EngineError::InvalidEmployee {
                    field: "settlement_history".to_string(),
                    message: format!(
                        "amount must be positive (got {} on {})",
                        record.amount, record.settlement_date
                    ),
                });
            }
        }
        Ok(())
    }

    /// Returns true if a resignation date is recorded.
    pub fn has_resigned(&self) -> bool {
        self.resignation_date.is_some()
    }
}
