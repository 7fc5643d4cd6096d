//! Daily wage and settlement calculation.
//!
//! Every monetary step is floored to whole currency units before the next
//! step uses it, so no fractional amount propagates.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::config::{LeavePolicy, WagePolicy, WithholdingBracket};
use crate::error::{EngineError, EngineResult};
use crate::models::SettlementBreakdown;

/// Converts a monthly wage to a daily ordinary wage.
///
/// `floor(monthly_wage / standard_monthly_hours * daily_hours)`, computed in
/// integers so no precision is lost.
///
/// # Returns
///
/// Returns the daily wage, or `InvalidWage` when the monthly wage is not positive.
///
/// # Examples
///
/// ```
/// use leave_engine::calculation::daily_wage;
/// use leave_engine::config::LeavePolicy;
///
/// let policy = LeavePolicy::statutory();
/// assert_eq!(daily_wage(2_090_000, &policy.wage).unwrap(), 80_000);
/// assert_eq!(daily_wage(3_000_000, &policy.wage).unwrap(), 114_832);
/// ```
pub fn daily_wage(monthly_wage: i64, policy: &WagePolicy) -> EngineResult<i64> {
    if monthly_wage <= 0 {
        return Err(EngineError::InvalidWage { wage: monthly_wage });
    }
    if policy.standard_monthly_hours <= 0 {
        return Err(EngineError::CalculationError {
            message: "standard monthly hours must be positive".to_string(),
        });
    }

    monthly_wage
        .checked_mul(policy.daily_hours)
        .map(|scaled| scaled / policy.standard_monthly_hours)
        .ok_or_else(|| EngineError::CalculationError {
            message: format!("daily wage overflow for monthly wage {}", monthly_wage),
        })
}

/// Picks the flat withholding rate for a gross settlement amount.
///
/// The first bracket whose upper bound is at least the amount wins; an open
/// bracket catches everything above the bounded ones.
///
/// # Examples
///
/// ```
/// use leave_engine::calculation::withholding_rate;
/// use leave_engine::config::LeavePolicy;
/// use rust_decimal::Decimal;
///
/// let policy = LeavePolicy::statutory();
/// assert_eq!(withholding_rate(1_000_000, &policy.withholding), Decimal::new(3, 2));
/// assert_eq!(withholding_rate(1_000_001, &policy.withholding), Decimal::new(5, 2));
/// assert_eq!(withholding_rate(3_000_001, &policy.withholding), Decimal::new(8, 2));
/// ```
pub fn withholding_rate(total_amount: i64, brackets: &[WithholdingBracket]) -> Decimal {
    brackets
        .iter()
        .find(|b| b.up_to.is_none_or(|limit| total_amount <= limit))
        .or_else(|| brackets.last())
        .map_or(Decimal::ZERO, |b| b.rate)
}

/// Calculates the cash value of unused leave days.
///
/// # Arguments
///
/// * `unused_days` - Days to settle; fractional half days are allowed
/// * `monthly_wage` - Monthly wage in the smallest currency unit
/// * `policy` - Wage constants and withholding brackets
///
/// # Returns
///
/// Returns the breakdown, or an error if:
/// - `unused_days` is negative (`NegativeUnusedDays`)
/// - the monthly wage is not positive (`InvalidWage`)
///
/// # Examples
///
/// ```
/// use leave_engine::calculation::calculate_settlement;
/// use leave_engine::config::LeavePolicy;
/// use rust_decimal::Decimal;
///
/// let policy = LeavePolicy::statutory();
/// let breakdown = calculate_settlement(Decimal::from(10), 3_000_000, &policy).unwrap();
///
/// assert_eq!(breakdown.daily_wage, 114_832);
/// assert_eq!(breakdown.total_amount, 1_148_320);
/// assert_eq!(breakdown.tax_amount, 57_416);
/// assert_eq!(breakdown.net_amount, 1_090_904);
/// ```
pub fn calculate_settlement(
    unused_days: Decimal,
    monthly_wage: i64,
    policy: &LeavePolicy,
) -> EngineResult<SettlementBreakdown> {
    if unused_days < Decimal::ZERO {
        return Err(EngineError::NegativeUnusedDays { days: unused_days });
    }

    let daily_wage = daily_wage(monthly_wage, &policy.wage)?;
    let total_amount = floor_to_i64(Decimal::from(daily_wage) * unused_days)?;
    let tax_rate = withholding_rate(total_amount, &policy.withholding);
    let tax_amount = floor_to_i64(Decimal::from(total_amount) * tax_rate)?;

    Ok(SettlementBreakdown {
        unused_days,
        daily_wage,
        total_amount,
        tax_rate,
        tax_amount,
        net_amount: total_amount - tax_amount,
    })
}

fn floor_to_i64(amount: Decimal) -> EngineResult<i64> {
    amount
        .floor()
        .to_i64()
        .ok_or_else(|| EngineError::CalculationError {
            message: format!("amount {} does not fit in currency units", amount),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    fn policy() -> LeavePolicy {
        LeavePolicy::statutory()
    }

    #[test]
    fn test_daily_wage_exact_division() {
        assert_eq!(daily_wage(2_090_000, &policy().wage).unwrap(), 80_000);
    }

    #[test]
    fn test_daily_wage_floors() {
        // 3,000,000 / 209 * 8 = 114,832.53...
        assert_eq!(daily_wage(3_000_000, &policy().wage).unwrap(), 114_832);
    }

    #[test]
    fn test_daily_wage_rejects_non_positive_wage() {
        assert!(matches!(
            daily_wage(0, &policy().wage),
            Err(EngineError::InvalidWage { wage: 0 })
        ));
        assert!(matches!(
            daily_wage(-100, &policy().wage),
            Err(EngineError::InvalidWage { wage: -100 })
        ));
    }

    #[test]
    fn test_settlement_in_five_percent_bracket() {
        let breakdown = calculate_settlement(Decimal::from(10), 3_000_000, &policy()).unwrap();

        assert_eq!(breakdown.daily_wage, 114_832);
        assert_eq!(breakdown.total_amount, 1_148_320);
        assert_eq!(breakdown.tax_rate, dec("0.05"));
        assert_eq!(breakdown.tax_amount, 57_416);
        assert_eq!(breakdown.net_amount, 1_090_904);
    }

    #[test]
    fn test_settlement_in_three_percent_bracket() {
        // 80,000 x 5 = 400,000; 3% = 12,000
        let breakdown = calculate_settlement(Decimal::from(5), 2_090_000, &policy()).unwrap();

        assert_eq!(breakdown.total_amount, 400_000);
        assert_eq!(breakdown.tax_rate, dec("0.03"));
        assert_eq!(breakdown.tax_amount, 12_000);
        assert_eq!(breakdown.net_amount, 388_000);
    }

    #[test]
    fn test_settlement_in_eight_percent_bracket() {
        // 8,000,000 / 209 * 8 = 306,220.09 -> 306,220; x 20 = 6,124,400; 8% = 489,952
        let breakdown = calculate_settlement(Decimal::from(20), 8_000_000, &policy()).unwrap();

        assert_eq!(breakdown.daily_wage, 306_220);
        assert_eq!(breakdown.total_amount, 6_124_400);
        assert_eq!(breakdown.tax_rate, dec("0.08"));
        assert_eq!(breakdown.tax_amount, 489_952);
        assert_eq!(breakdown.net_amount, 5_634_448);
    }

    #[test]
    fn test_half_day_settlement_floors_total() {
        // 114,832 x 2.5 = 287,080; 3% = 8,612.4 -> 8,612
        let breakdown = calculate_settlement(dec("2.5"), 3_000_000, &policy()).unwrap();

        assert_eq!(breakdown.total_amount, 287_080);
        assert_eq!(breakdown.tax_amount, 8_612);
        assert_eq!(breakdown.net_amount, 278_468);
    }

    #[test]
    fn test_zero_days_settle_to_zero() {
        let breakdown = calculate_settlement(Decimal::ZERO, 3_000_000, &policy()).unwrap();

        assert_eq!(breakdown.total_amount, 0);
        assert_eq!(breakdown.tax_amount, 0);
        assert_eq!(breakdown.net_amount, 0);
    }

    #[test]
    fn test_negative_days_are_rejected() {
        let result = calculate_settlement(dec("-1.5"), 3_000_000, &policy());

        match result {
            Err(EngineError::NegativeUnusedDays { days }) => assert_eq!(days, dec("-1.5")),
            other => panic!("Expected NegativeUnusedDays, got {:?}", other),
        }
    }

    #[test]
    fn test_bracket_boundaries_are_inclusive() {
        let brackets = &policy().withholding;
        assert_eq!(withholding_rate(0, brackets), dec("0.03"));
        assert_eq!(withholding_rate(3_000_000, brackets), dec("0.05"));
        assert_eq!(withholding_rate(i64::MAX, brackets), dec("0.08"));
    }

    #[test]
    fn test_no_brackets_means_no_withholding() {
        assert_eq!(withholding_rate(500_000, &[]), Decimal::ZERO);
    }
}
