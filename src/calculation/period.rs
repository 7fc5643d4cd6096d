//! Anniversary period resolution.
//!
//! Every period boundary is a hire-date anniversary produced by
//! [`anniversary`]. A period ends the day before the next anniversary, and the
//! next settlement date is that anniversary, so the two can never drift apart.

use chrono::{Days, NaiveDate};

use crate::error::{EngineError, EngineResult};
use crate::models::LeavePeriod;

use super::tenure::{calculate_tenure, months_after};

/// Returns the hire-date anniversary `years` years after hiring.
///
/// Feb 29 hires fall on Feb 28 in common years.
///
/// # Examples
///
/// ```
/// use leave_engine::calculation::anniversary;
/// use chrono::NaiveDate;
///
/// let hire = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
/// assert_eq!(anniversary(hire, 1).unwrap(), NaiveDate::from_ymd_opt(2025, 2, 28).unwrap());
/// assert_eq!(anniversary(hire, 4).unwrap(), NaiveDate::from_ymd_opt(2028, 2, 29).unwrap());
/// ```
pub fn anniversary(hire_date: NaiveDate, years: u32) -> EngineResult<NaiveDate> {
    years
        .checked_mul(12)
        .and_then(|months| months_after(hire_date, months))
        .ok_or_else(|| EngineError::CalculationError {
            message: format!("anniversary {} of {} is out of range", years, hire_date),
        })
}

/// Returns the period for a 1-based leave year.
pub fn period_for_leave_year(hire_date: NaiveDate, leave_year: u32) -> EngineResult<LeavePeriod> {
    let elapsed_years = leave_year.checked_sub(1).ok_or_else(|| EngineError::CalculationError {
        message: "leave years are numbered from 1".to_string(),
    })?;

    let start_date = anniversary(hire_date, elapsed_years)?;
    let end_date = day_before(anniversary(hire_date, leave_year)?)?;

    Ok(LeavePeriod {
        leave_year,
        start_date,
        end_date,
    })
}

/// Resolves the anniversary year containing the reference date.
///
/// # Returns
///
/// Returns the period, or `InvalidDateRange` when the hire date is after the
/// reference date.
///
/// # Examples
///
/// ```
/// use leave_engine::calculation::current_period;
/// use chrono::NaiveDate;
///
/// let hire = NaiveDate::from_ymd_opt(2022, 7, 1).unwrap();
/// let reference = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();
///
/// let period = current_period(hire, reference).unwrap();
/// assert_eq!(period.leave_year, 3);
/// assert_eq!(period.start_date, NaiveDate::from_ymd_opt(2024, 7, 1).unwrap());
/// assert_eq!(period.end_date, NaiveDate::from_ymd_opt(2025, 6, 30).unwrap());
/// ```
pub fn current_period(hire_date: NaiveDate, reference_date: NaiveDate) -> EngineResult<LeavePeriod> {
    let tenure = calculate_tenure(hire_date, reference_date)?;
    period_for_leave_year(hire_date, tenure.years + 1)
}

/// Returns the date the current period's balance is settled: the next
/// hire-date anniversary after the reference date.
///
/// Always equal to `current_period(..).end_date + 1 day`.
pub fn next_settlement_date(
    hire_date: NaiveDate,
    reference_date: NaiveDate,
) -> EngineResult<NaiveDate> {
    let tenure = calculate_tenure(hire_date, reference_date)?;
    anniversary(hire_date, tenure.years + 1)
}

fn day_before(date: NaiveDate) -> EngineResult<NaiveDate> {
    date.checked_sub_days(Days::new(1))
        .ok_or_else(|| EngineError::CalculationError {
            message: format!("no day before {}", date),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Months;
    use proptest::prelude::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_first_year_starts_on_hire_date() {
        let period = current_period(date(2026, 2, 1), date(2026, 2, 1)).unwrap();

        assert_eq!(period.leave_year, 1);
        assert_eq!(period.start_date, date(2026, 2, 1));
        assert_eq!(period.end_date, date(2027, 1, 31));
    }

    #[test]
    fn test_hire_exactly_three_years_ago_is_leave_year_four() {
        let period = current_period(date(2023, 10, 18), date(2026, 10, 18)).unwrap();

        assert_eq!(period.leave_year, 4);
        assert_eq!(period.start_date, date(2026, 10, 18));
        assert_eq!(period.end_date, date(2027, 10, 17));
    }

    #[test]
    fn test_last_day_of_period_stays_in_period() {
        let period = current_period(date(2023, 10, 18), date(2026, 10, 17)).unwrap();

        assert_eq!(period.leave_year, 3);
        assert_eq!(period.end_date, date(2026, 10, 17));
    }

    #[test]
    fn test_leap_day_hire_periods() {
        let hire = date(2024, 2, 29);

        let second = period_for_leave_year(hire, 2).unwrap();
        assert_eq!(second.start_date, date(2025, 2, 28));
        assert_eq!(second.end_date, date(2026, 2, 27));

        // The year before a leap year runs to Feb 28 so the next one can start on Feb 29
        let fourth = period_for_leave_year(hire, 4).unwrap();
        assert_eq!(fourth.start_date, date(2027, 2, 28));
        assert_eq!(fourth.end_date, date(2028, 2, 28));

        let fifth = period_for_leave_year(hire, 5).unwrap();
        assert_eq!(fifth.start_date, date(2028, 2, 29));
        assert_eq!(fifth.end_date, date(2029, 2, 27));
    }

    #[test]
    fn test_reference_on_feb_28_of_leap_year_is_inside_period() {
        let hire = date(2024, 2, 29);
        let reference = date(2028, 2, 28);

        let period = current_period(hire, reference).unwrap();
        assert_eq!(period.leave_year, 4);
        assert!(period.contains(reference));
    }

    #[test]
    fn test_next_settlement_date_is_next_anniversary() {
        let next = next_settlement_date(date(2020, 5, 20), date(2026, 1, 5)).unwrap();
        assert_eq!(next, date(2026, 5, 20));
    }

    #[test]
    fn test_leave_year_zero_is_rejected() {
        assert!(matches!(
            period_for_leave_year(date(2020, 1, 1), 0),
            Err(EngineError::CalculationError { .. })
        ));
    }

    #[test]
    fn test_future_hire_date_is_rejected() {
        assert!(matches!(
            current_period(date(2030, 1, 1), date(2026, 1, 1)),
            Err(EngineError::InvalidDateRange { .. })
        ));
    }

    fn hire_dates() -> impl Strategy<Value = NaiveDate> {
        prop_oneof![
            (1990i32..2026, 1u32..=12, 1u32..=28).prop_map(|(y, m, d)| date(y, m, d)),
            (1990i32..2026, prop::sample::select(vec![1u32, 3, 5, 7, 8, 10, 12]))
                .prop_map(|(y, m)| date(y, m, 31)),
            prop::sample::select(vec![1992, 1996, 2000, 2004, 2008, 2012, 2016, 2020, 2024])
                .prop_map(|y| date(y, 2, 29)),
        ]
    }

    proptest! {
        #[test]
        fn prop_reference_date_lies_in_current_period(hire in hire_dates(), offset in 0u64..12_000) {
            let reference = hire + Days::new(offset);
            let period = current_period(hire, reference).unwrap();
            prop_assert!(period.contains(reference));
        }

        #[test]
        fn prop_periods_are_contiguous(hire in hire_dates(), leave_year in 1u32..40) {
            let this = period_for_leave_year(hire, leave_year).unwrap();
            let next = period_for_leave_year(hire, leave_year + 1).unwrap();
            prop_assert_eq!(this.next_start(), Some(next.start_date));
            prop_assert!(this.start_date <= this.end_date);
        }

        #[test]
        fn prop_end_is_start_plus_one_year_minus_one_day(hire in hire_dates(), leave_year in 1u32..40) {
            let period = period_for_leave_year(hire, leave_year).unwrap();
            let naive_end = period.start_date + Months::new(12) - Days::new(1);
            // Only a leap-day hire whose start was clamped to Feb 28 runs one day longer
            let clamped_leap_start = hire.format("%m-%d").to_string() == "02-29"
                && period.start_date.format("%m-%d").to_string() == "02-28";
            if clamped_leap_start {
                prop_assert!(period.end_date == naive_end || period.end_date == naive_end + Days::new(1));
            } else {
                prop_assert_eq!(period.end_date, naive_end);
            }
        }

        #[test]
        fn prop_next_settlement_follows_period_end(hire in hire_dates(), offset in 0u64..12_000) {
            let reference = hire + Days::new(offset);
            let period = current_period(hire, reference).unwrap();
            let next = next_settlement_date(hire, reference).unwrap();
            prop_assert_eq!(period.next_start(), Some(next));
        }
    }
}
