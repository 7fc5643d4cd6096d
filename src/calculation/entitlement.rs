//! Annual leave entitlement.
//!
//! The accrual rule is a step function of tenure:
//!
//! | Tenure            | Days                                         |
//! |-------------------|----------------------------------------------|
//! | under 1 year      | 1 per completed month, at most 11            |
//! | 1 to under 3 years| 15                                           |
//! | 3 years and over  | 15 + 1 per 2 years beyond the first, max 25  |

use chrono::NaiveDate;

use crate::config::AccrualPolicy;
use crate::error::EngineResult;
use crate::models::Tenure;

use super::tenure::calculate_tenure;

/// Years of service at which the incremental tier starts.
pub const INCREMENT_TIER_START_YEARS: u32 = 3;

/// Maps a tenure to the number of leave days accrued for the current period.
///
/// # Examples
///
/// ```
/// use leave_engine::calculation::entitlement_for_tenure;
/// use leave_engine::config::LeavePolicy;
/// use leave_engine::models::Tenure;
///
/// let policy = LeavePolicy::statutory();
/// let tenure = Tenure { years: 5, months: 2, total_months: 62 };
/// assert_eq!(entitlement_for_tenure(&tenure, &policy.accrual), 17);
/// ```
pub fn entitlement_for_tenure(tenure: &Tenure, accrual: &AccrualPolicy) -> u32 {
    if tenure.years < 1 {
        tenure.total_months.min(accrual.first_year_cap)
    } else if tenure.years < INCREMENT_TIER_START_YEARS {
        accrual.base_days
    } else {
        let additional = (tenure.years - 1) / accrual.increment_every_years.max(1);
        accrual
            .base_days
            .saturating_add(additional)
            .min(accrual.max_days)
    }
}

/// Calculates the entitlement for the anniversary year containing the reference date.
///
/// # Returns
///
/// Returns the number of days, or `InvalidDateRange` for a future hire date.
///
/// # Examples
///
/// ```
/// use leave_engine::calculation::calculate_entitlement;
/// use leave_engine::config::LeavePolicy;
/// use chrono::NaiveDate;
///
/// let policy = LeavePolicy::statutory();
/// let hire = NaiveDate::from_ymd_opt(2025, 1, 10).unwrap();
/// let reference = NaiveDate::from_ymd_opt(2025, 6, 10).unwrap();
///
/// assert_eq!(calculate_entitlement(hire, reference, &policy.accrual).unwrap(), 5);
/// ```
pub fn calculate_entitlement(
    hire_date: NaiveDate,
    reference_date: NaiveDate,
    accrual: &AccrualPolicy,
) -> EngineResult<u32> {
    let tenure = calculate_tenure(hire_date, reference_date)?;
    Ok(entitlement_for_tenure(&tenure, accrual))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LeavePolicy;
    use crate::error::EngineError;
    use proptest::prelude::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn accrual() -> AccrualPolicy {
        LeavePolicy::statutory().accrual
    }

    fn tenure(years: u32, months: u32) -> Tenure {
        Tenure {
            years,
            months,
            total_months: years * 12 + months,
        }
    }

    #[test]
    fn test_first_year_accrues_one_day_per_month() {
        assert_eq!(entitlement_for_tenure(&tenure(0, 0), &accrual()), 0);
        assert_eq!(entitlement_for_tenure(&tenure(0, 1), &accrual()), 1);
        assert_eq!(entitlement_for_tenure(&tenure(0, 11), &accrual()), 11);
    }

    #[test]
    fn test_second_and_third_years_are_flat() {
        assert_eq!(entitlement_for_tenure(&tenure(1, 0), &accrual()), 15);
        assert_eq!(entitlement_for_tenure(&tenure(2, 11), &accrual()), 15);
    }

    #[test]
    fn test_three_years_of_service_gives_sixteen_days() {
        let days = calculate_entitlement(date(2022, 10, 18), date(2025, 10, 18), &accrual());
        assert_eq!(days.unwrap(), 16);
    }

    #[test]
    fn test_increment_every_two_years() {
        assert_eq!(entitlement_for_tenure(&tenure(4, 0), &accrual()), 16);
        assert_eq!(entitlement_for_tenure(&tenure(5, 0), &accrual()), 17);
        assert_eq!(entitlement_for_tenure(&tenure(10, 0), &accrual()), 19);
        assert_eq!(entitlement_for_tenure(&tenure(20, 0), &accrual()), 24);
    }

    #[test]
    fn test_cap_at_twenty_five_days() {
        assert_eq!(entitlement_for_tenure(&tenure(21, 0), &accrual()), 25);
        assert_eq!(entitlement_for_tenure(&tenure(40, 0), &accrual()), 25);
    }

    #[test]
    fn test_future_hire_date_is_rejected() {
        let result = calculate_entitlement(date(2027, 1, 1), date(2026, 1, 1), &accrual());
        assert!(matches!(result, Err(EngineError::InvalidDateRange { .. })));
    }

    proptest! {
        #[test]
        fn prop_first_year_is_capped_month_count(months in 0u32..12) {
            let days = entitlement_for_tenure(&tenure(0, months), &accrual());
            prop_assert_eq!(days, months.min(11));
        }

        #[test]
        fn prop_years_one_and_two_are_fifteen(years in 1u32..3, months in 0u32..12) {
            prop_assert_eq!(entitlement_for_tenure(&tenure(years, months), &accrual()), 15);
        }

        #[test]
        fn prop_long_tenure_formula(years in 3u32..60, months in 0u32..12) {
            let days = entitlement_for_tenure(&tenure(years, months), &accrual());
            prop_assert_eq!(days, (15 + (years - 1) / 2).min(25));
            prop_assert!(days <= 25);
        }

        #[test]
        fn prop_monotonic_as_reference_date_advances(
            offset in 0u64..15_000,
            step in 1u64..400,
        ) {
            let hire = date(1990, 1, 31);
            let earlier = hire + chrono::Days::new(offset);
            let later = earlier + chrono::Days::new(step);

            let before = calculate_entitlement(hire, earlier, &accrual()).unwrap();
            let after = calculate_entitlement(hire, later, &accrual()).unwrap();
            prop_assert!(after >= before);
        }
    }
}
