//! Configuration types for leave calculation.
//!
//! This module contains the strongly-typed policy structures that are
//! deserialized from YAML configuration files. [`LeavePolicy::statutory`]
//! carries the built-in values so the engine works without a config directory.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Accrual tiers for annual leave.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccrualPolicy {
    /// Maximum days accrued during the first year (one per completed month).
    pub first_year_cap: u32,
    /// Flat entitlement once a full year of service is completed.
    pub base_days: u32,
    /// Years of service per additional day, counted from the first year.
    pub increment_every_years: u32,
    /// Upper bound on the yearly entitlement.
    pub max_days: u32,
}

/// Constants used to turn a monthly wage into a daily rate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WagePolicy {
    /// Paid hours in a standard month, including paid weekly rest.
    pub standard_monthly_hours: i64,
    /// Working hours in one day of leave.
    pub daily_hours: i64,
}

/// Expiry warning configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpiryPolicy {
    /// A period ending within this many days (inclusive) is in the warning state.
    pub warning_window_days: i64,
}

/// One flat withholding bracket.
///
/// The rate applies to the whole settlement amount, not to the slice above
/// the previous bracket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WithholdingBracket {
    /// Inclusive upper bound of the bracket; `None` means unbounded.
    #[serde(default)]
    pub up_to: Option<i64>,
    /// Rate applied to the total amount (e.g. 0.03 for 3%).
    pub rate: Decimal,
}

/// Layout of `policy.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct PolicyFile {
    /// Human-readable name of the jurisdiction the rule comes from.
    pub jurisdiction: String,
    /// Accrual tiers.
    pub accrual: AccrualPolicy,
    /// Wage conversion constants.
    pub wage: WagePolicy,
    /// Expiry warning window.
    pub expiry: ExpiryPolicy,
}

/// Layout of `withholding.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct WithholdingFile {
    /// Brackets ordered by ascending upper bound, the last one open.
    pub brackets: Vec<WithholdingBracket>,
}

/// The complete policy consumed by every calculation function.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeavePolicy {
    /// Name of the jurisdiction.
    pub jurisdiction: String,
    /// Accrual tiers.
    pub accrual: AccrualPolicy,
    /// Wage conversion constants.
    pub wage: WagePolicy,
    /// Expiry warning window.
    pub expiry: ExpiryPolicy,
    /// Withholding brackets, ascending.
    pub withholding: Vec<WithholdingBracket>,
}

impl LeavePolicy {
    /// Returns the statutory policy: 11/15/25 day accrual, 209 monthly hours,
    /// 8-hour days, a 30 day warning window and 3%/5%/8% withholding.
    ///
    /// # Example
    ///
    /// ```
    /// use leave_engine::config::LeavePolicy;
    ///
    /// let policy = LeavePolicy::statutory();
    /// assert_eq!(policy.accrual.max_days, 25);
    /// assert_eq!(policy.wage.standard_monthly_hours, 209);
    /// ```
    pub fn statutory() -> Self {
        Self {
            jurisdiction: "Labor Standards Act, Article 60".to_string(),
            accrual: AccrualPolicy {
                first_year_cap: 11,
                base_days: 15,
                increment_every_years: 2,
                max_days: 25,
            },
            wage: WagePolicy {
                standard_monthly_hours: 209,
                daily_hours: 8,
            },
            expiry: ExpiryPolicy {
                warning_window_days: 30,
            },
            withholding: vec![
                WithholdingBracket {
                    up_to: Some(1_000_000),
                    rate: Decimal::new(3, 2),
                },
                WithholdingBracket {
                    up_to: Some(3_000_000),
                    rate: Decimal::new(5, 2),
                },
                WithholdingBracket {
                    up_to: None,
                    rate: Decimal::new(8, 2),
                },
            ],
        }
    }

    /// Builds a policy from the two configuration files.
    pub fn from_files(policy: PolicyFile, withholding: WithholdingFile) -> Self {
        Self {
            jurisdiction: policy.jurisdiction,
            accrual: policy.accrual,
            wage: policy.wage,
            expiry: policy.expiry,
            withholding: withholding.brackets,
        }
    }

    /// Checks internal consistency, returning a description of the first problem.
    pub fn validate(&self) -> Result<(), String> {
        if self.wage.standard_monthly_hours <= 0 || self.wage.daily_hours <= 0 {
            return Err("working hours must be positive".to_string());
        }
        if self.accrual.increment_every_years == 0 {
            return Err("increment_every_years must be at least 1".to_string());
        }
        if self.accrual.base_days > self.accrual.max_days {
            return Err(format!(
                "base_days {} exceeds max_days {}",
                self.accrual.base_days, self.accrual.max_days
            ));
        }
        if self.expiry.warning_window_days < 0 {
            return Err("warning_window_days must not be negative".to_string());
        }

        let Some((last, bounded)) = self.withholding.split_last() else {
            return Err("at least one withholding bracket is required".to_string());
        };
        if last.up_to.is_some() {
            return Err("the last withholding bracket must be open (no up_to)".to_string());
        }
        let mut previous: Option<i64> = None;
        for bracket in bounded {
            let Some(limit) = bracket.up_to else {
                return Err("only the last withholding bracket may be open".to_string());
            };
            if previous.is_some_and(|p| limit <= p) {
                return Err("withholding brackets must be in ascending order".to_string());
            }
            previous = Some(limit);
        }
        if self
            .withholding
            .iter()
            .any(|b| b.rate < Decimal::ZERO || b.rate >= Decimal::ONE)
        {
            return Err("withholding rates must be within [0, 1)".to_string());
        }

        Ok(())
    }
}

impl Default for LeavePolicy {
    fn default() -> Self {
        Self::statutory()
    }
}
