//! Tenure calculation.
//!
//! Elapsed service is counted in calendar months: a month is complete once
//! the same day of the following month is reached, with the day clamped to
//! the end of shorter months (Jan 31 + 1 month = Feb 28 or 29).

use chrono::{Datelike, Months, NaiveDate};

use crate::error::{EngineError, EngineResult};
use crate::models::Tenure;

/// Adds whole calendar months to a date, clamping the day to the month end.
///
/// Returns `None` only when the result leaves chrono's supported range.
pub fn months_after(start: NaiveDate, months: u32) -> Option<NaiveDate> {
    start.checked_add_months(Months::new(months))
}

/// Calculates whole years and months of service at a reference date.
///
/// # Returns
///
/// Returns the tenure, or `InvalidDateRange` when the hire date is after the
/// reference date.
///
/// # Examples
///
/// ```
/// use leave_engine::calculation::calculate_tenure;
/// use chrono::NaiveDate;
///
/// let hire = NaiveDate::from_ymd_opt(2021, 3, 15).unwrap();
/// let reference = NaiveDate::from_ymd_opt(2024, 8, 14).unwrap();
///
/// let tenure = calculate_tenure(hire, reference).unwrap();
/// assert_eq!(tenure.years, 3);
/// assert_eq!(tenure.months, 4);
/// assert_eq!(tenure.total_months, 40);
/// ```
pub fn calculate_tenure(hire_date: NaiveDate, reference_date: NaiveDate) -> EngineResult<Tenure> {
    if hire_date > reference_date {
        return Err(EngineError::InvalidDateRange {
            hire_date,
            reference_date,
        });
    }

    // Months between the two calendar months; the last one may be incomplete.
    let span = (reference_date.year() - hire_date.year()) * 12 + reference_date.month() as i32
        - hire_date.month() as i32;
    let span = u32::try_from(span).map_err(|_| EngineError::CalculationError {
        message: format!("negative month span from {} to {}", hire_date, reference_date),
    })?;

    let total_months = if months_after(hire_date, span).is_some_and(|d| d <= reference_date) {
        span
    } else {
        span.saturating_sub(1)
    };

    Ok(Tenure {
        years: total_months / 12,
        months: total_months % 12,
        total_months,
    })
}
