//! Expiry classification.

use chrono::NaiveDate;

use crate::config::ExpiryPolicy;
use crate::models::{ExpiryStatus, LeaveStatus};

/// Classifies a period end date against a reference date.
///
/// `days_until_expiry` is the signed whole-day difference; tiers are checked
/// in order: negative is expired, up to the warning window (inclusive) is
/// warning, anything later is active.
///
/// # Examples
///
/// ```
/// use leave_engine::calculation::classify_expiry;
/// use leave_engine::config::LeavePolicy;
/// use leave_engine::models::LeaveStatus;
/// use chrono::NaiveDate;
///
/// let policy = LeavePolicy::statutory();
/// let end = NaiveDate::from_ymd_opt(2026, 11, 17).unwrap();
/// let today = NaiveDate::from_ymd_opt(2026, 10, 18).unwrap();
///
/// let expiry = classify_expiry(end, today, &policy.expiry);
/// assert_eq!(expiry.days_until_expiry, 30);
/// assert_eq!(expiry.status, LeaveStatus::Warning);
/// ```
pub fn classify_expiry(
    period_end: NaiveDate,
    reference_date: NaiveDate,
    policy: &ExpiryPolicy,
) -> ExpiryStatus {
    let days_until_expiry = (period_end - reference_date).num_days();

    let status = if days_until_expiry < 0 {
        LeaveStatus::Expired
    } else if days_until_expiry <= policy.warning_window_days {
        LeaveStatus::Warning
    } else {
        LeaveStatus::Active
    };

    ExpiryStatus {
        status,
        days_until_expiry,
    }
}
