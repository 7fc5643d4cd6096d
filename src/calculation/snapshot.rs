//! Aggregate leave snapshot.
//!
//! [`build_snapshot`] composes tenure, entitlement, period, expiry and
//! settlement into one [`LeaveSnapshot`]. It is a pure function of the
//! employee record, the reference date and the policy.

use chrono::{Days, Local, NaiveDate};
use rust_decimal::Decimal;

use crate::config::LeavePolicy;
use crate::error::{EngineError, EngineResult};
use crate::models::{Employee, LeaveSnapshot, LeaveStatus};

use super::entitlement::entitlement_for_tenure;
use super::expiry::classify_expiry;
use super::period::period_for_leave_year;
use super::tenure::calculate_tenure;
use super::wage::calculate_settlement;

/// Builds the leave snapshot of an employee as of a reference date.
///
/// `remaining_days` is not clamped: over-used leave shows up as a negative
/// balance. A settlement amount is only filled in once the period has expired
/// with days left; balances inside an open period are not yet cashable.
///
/// For a resigned employee the period is cut at the resignation date and
/// accrual stops there.
///
/// # Returns
///
/// Returns the snapshot, or an error if:
/// - the record is invalid (`InvalidWage`, `InvalidEmployee`)
/// - the hire date is after the reference date (`InvalidDateRange`)
///
/// # Examples
///
/// ```
/// use leave_engine::calculation::build_snapshot;
/// use leave_engine::config::LeavePolicy;
/// use leave_engine::models::{Employee, LeaveStatus};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let employee = Employee {
///     id: "EMP0007".to_string(),
///     employee_no: "EMP0007".to_string(),
///     name: "Park Jiho".to_string(),
///     department: "Quality".to_string(),
///     position: "Senior".to_string(),
///     hire_date: NaiveDate::from_ymd_opt(2021, 11, 1).unwrap(),
///     monthly_wage: 3_500_000,
///     used_days: Decimal::from(6),
///     resignation_date: None,
///     settlement_history: vec![],
/// };
/// let reference = NaiveDate::from_ymd_opt(2026, 10, 18).unwrap();
///
/// let snapshot = build_snapshot(&employee, reference, &LeavePolicy::statutory()).unwrap();
/// assert_eq!(snapshot.leave_year, 5);
/// assert_eq!(snapshot.total_days, 16);
/// assert_eq!(snapshot.remaining_days, Decimal::from(10));
/// assert_eq!(snapshot.status, LeaveStatus::Warning);
/// assert_eq!(snapshot.next_settlement_date, NaiveDate::from_ymd_opt(2026, 11, 1).unwrap());
/// ```
pub fn build_snapshot(
    employee: &Employee,
    reference_date: NaiveDate,
    policy: &LeavePolicy,
) -> EngineResult<LeaveSnapshot> {
    employee.validate()?;
    if employee.hire_date > reference_date {
        return Err(EngineError::InvalidDateRange {
            hire_date: employee.hire_date,
            reference_date,
        });
    }

    // Accrual stops on the last working day.
    let accrual_date = match employee.resignation_date {
        Some(resigned) if resigned < reference_date => resigned,
        _ => reference_date,
    };

    let tenure = calculate_tenure(employee.hire_date, accrual_date)?;
    let mut period = period_for_leave_year(employee.hire_date, tenure.years + 1)?;
    if let Some(resigned) = employee.resignation_date {
        if resigned <= period.end_date {
            period.end_date = resigned;
        }
    }
    let next_settlement_date =
        period
            .end_date
            .checked_add_days(Days::new(1))
            .ok_or_else(|| EngineError::CalculationError {
                message: format!("no settlement date after {}", period.end_date),
            })?;

    let total_days = entitlement_for_tenure(&tenure, &policy.accrual);
    let remaining_days = Decimal::from(total_days) - employee.used_days;
    let expiry = classify_expiry(period.end_date, reference_date, &policy.expiry);

    let settlement_amount =
        if remaining_days > Decimal::ZERO && expiry.status == LeaveStatus::Expired {
            Some(calculate_settlement(remaining_days, employee.monthly_wage, policy)?.net_amount)
        } else {
            None
        };

    Ok(LeaveSnapshot {
        employee_id: employee.id.clone(),
        employee_name: employee.name.clone(),
        reference_date,
        leave_year: period.leave_year,
        start_date: period.start_date,
        end_date: period.end_date,
        total_days,
        used_days: employee.used_days,
        remaining_days,
        settlement_amount,
        status: expiry.status,
        days_until_expiry: expiry.days_until_expiry,
        next_settlement_date,
    })
}

/// Builds a snapshot as of the local calendar date.
///
/// Only call sites at the process boundary (HTTP handlers, the CLI) should use
/// this; everything below them takes the reference date explicitly.
pub fn snapshot_today(employee: &Employee, policy: &LeavePolicy) -> EngineResult<LeaveSnapshot> {
    build_snapshot(employee, Local::now().date_naive(), policy)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::{current_period, next_settlement_date};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    fn policy() -> LeavePolicy {
        LeavePolicy::statutory()
    }

    fn create_test_employee(hire_date: NaiveDate, used_days: Decimal) -> Employee {
        Employee {
            id: "EMP0001".to_string(),
            employee_no: "EMP0001".to_string(),
            name: "Kim Minjun".to_string(),
            department: "Production 1".to_string(),
            position: "Staff".to_string(),
            hire_date,
            monthly_wage: 3_000_000,
            used_days,
            resignation_date: None,
            settlement_history: vec![],
        }
    }

    #[test]
    fn test_first_year_snapshot() {
        let employee = create_test_employee(date(2026, 3, 1), dec("2.5"));
        let snapshot = build_snapshot(&employee, date(2026, 10, 18), &policy()).unwrap();

        assert_eq!(snapshot.leave_year, 1);
        assert_eq!(snapshot.start_date, date(2026, 3, 1));
        assert_eq!(snapshot.end_date, date(2027, 2, 28));
        assert_eq!(snapshot.total_days, 7);
        assert_eq!(snapshot.remaining_days, dec("4.5"));
        assert_eq!(snapshot.status, LeaveStatus::Active);
        assert_eq!(snapshot.days_until_expiry, 133);
        assert_eq!(snapshot.settlement_amount, None);
        assert_eq!(snapshot.next_settlement_date, date(2027, 3, 1));
    }

    #[test]
    fn test_overused_leave_goes_negative() {
        let employee = create_test_employee(date(2024, 1, 10), Decimal::from(17));
        let snapshot = build_snapshot(&employee, date(2026, 10, 18), &policy()).unwrap();

        assert_eq!(snapshot.total_days, 15);
        assert_eq!(snapshot.remaining_days, Decimal::from(-2));
        assert_eq!(snapshot.settlement_amount, None);
    }

    #[test]
    fn test_warning_period_has_no_settlement_amount() {
        let employee = create_test_employee(date(2020, 11, 1), Decimal::from(3));
        let snapshot = build_snapshot(&employee, date(2026, 10, 18), &policy()).unwrap();

        assert_eq!(snapshot.status, LeaveStatus::Warning);
        assert!(snapshot.has_remaining());
        assert_eq!(snapshot.settlement_amount, None);
    }

    #[test]
    fn test_snapshot_agrees_with_standalone_calculators() {
        let hire = date(2019, 5, 20);
        let reference = date(2026, 10, 18);
        let employee = create_test_employee(hire, Decimal::ZERO);

        let snapshot = build_snapshot(&employee, reference, &policy()).unwrap();
        let period = current_period(hire, reference).unwrap();

        assert_eq!(snapshot.start_date, period.start_date);
        assert_eq!(snapshot.end_date, period.end_date);
        assert_eq!(
            snapshot.next_settlement_date,
            next_settlement_date(hire, reference).unwrap()
        );
    }

    #[test]
    fn test_snapshot_is_reproducible() {
        let employee = create_test_employee(date(2015, 7, 7), dec("9.5"));
        let first = build_snapshot(&employee, date(2026, 10, 18), &policy()).unwrap();
        let second = build_snapshot(&employee, date(2026, 10, 18), &policy()).unwrap();

        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }

    #[test]
    fn test_future_hire_date_is_rejected() {
        let employee = create_test_employee(date(2027, 1, 1), Decimal::ZERO);
        let result = build_snapshot(&employee, date(2026, 10, 18), &policy());

        assert!(matches!(result, Err(EngineError::InvalidDateRange { .. })));
    }

    #[test]
    fn test_invalid_wage_is_rejected() {
        let mut employee = create_test_employee(date(2020, 1, 1), Decimal::ZERO);
        employee.monthly_wage = -1;

        let result = build_snapshot(&employee, date(2026, 10, 18), &policy());
        assert!(matches!(result, Err(EngineError::InvalidWage { wage: -1 })));
    }

    #[test]
    fn test_resigned_employee_balance_expires_and_settles() {
        let mut employee = create_test_employee(date(2021, 4, 1), Decimal::from(5));
        employee.resignation_date = Some(date(2026, 8, 31));

        let snapshot = build_snapshot(&employee, date(2026, 10, 18), &policy()).unwrap();

        // Accrual as of 2026-08-31: 5 years -> 17 days
        assert_eq!(snapshot.leave_year, 6);
        assert_eq!(snapshot.start_date, date(2026, 4, 1));
        assert_eq!(snapshot.end_date, date(2026, 8, 31));
        assert_eq!(snapshot.total_days, 17);
        assert_eq!(snapshot.status, LeaveStatus::Expired);
        assert_eq!(snapshot.days_until_expiry, -48);
        assert_eq!(snapshot.next_settlement_date, date(2026, 9, 1));

        // 114,832 x 12 = 1,377,984; 5% = 68,899
        assert_eq!(snapshot.settlement_amount, Some(1_309_085));
    }

    #[test]
    fn test_upcoming_resignation_shortens_period() {
        let mut employee = create_test_employee(date(2021, 4, 1), Decimal::from(5));
        employee.resignation_date = Some(date(2026, 11, 7));

        let snapshot = build_snapshot(&employee, date(2026, 10, 18), &policy()).unwrap();

        assert_eq!(snapshot.end_date, date(2026, 11, 7));
        assert_eq!(snapshot.status, LeaveStatus::Warning);
        assert_eq!(snapshot.days_until_expiry, 20);
        assert_eq!(snapshot.settlement_amount, None);
    }

    #[test]
    fn test_resignation_after_period_end_has_no_effect() {
        let mut employee = create_test_employee(date(2021, 4, 1), Decimal::from(5));
        employee.resignation_date = Some(date(2027, 6, 30));

        let snapshot = build_snapshot(&employee, date(2026, 10, 18), &policy()).unwrap();

        assert_eq!(snapshot.end_date, date(2027, 3, 31));
        assert_eq!(snapshot.next_settlement_date, date(2027, 4, 1));
    }
}
