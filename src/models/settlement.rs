//! Settlement models.
//!
//! [`SettlementBreakdown`] is the cash value of a number of unused days;
//! [`SettlementHistorySummary`] totals an employee's past settlements.

use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use super::SettlementRecord;

/// The cash value of unused leave days.
///
/// # Example
///
/// ```
/// use leave_engine::models::SettlementBreakdown;
/// use rust_decimal::Decimal;
///
/// let breakdown = SettlementBreakdown {
///     unused_days: Decimal::from(10),
///     daily_wage: 114_832,
///     total_amount: 1_148_320,
///     tax_rate: Decimal::new(5, 2),
///     tax_amount: 57_416,
///     net_amount: 1_090_904,
/// };
/// assert_eq!(breakdown.total_amount - breakdown.tax_amount, breakdown.net_amount);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettlementBreakdown {
    /// The number of days being settled.
    pub unused_days: Decimal,
    /// Daily ordinary wage.
    pub daily_wage: i64,
    /// Gross amount before withholding.
    pub total_amount: i64,
    /// Flat withholding rate applied to the gross amount.
    pub tax_rate: Decimal,
    /// Amount withheld.
    pub tax_amount: i64,
    /// Amount paid out.
    pub net_amount: i64,
}

/// Totals over an employee's settlement history.
///
/// Amounts are net of withholding, like every recorded [`SettlementRecord::amount`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettlementHistorySummary {
    /// Number of settlements.
    pub count: usize,
    /// Days settled across all records.
    pub total_days: Decimal,
    /// Amount paid across all records.
    pub total_amount: i64,
    /// Days settled per record, to one decimal place; 0 without history.
    pub avg_days: Decimal,
    /// Amount paid per record, floored; 0 without history.
    pub avg_amount: i64,
    /// Largest single settlement in days; 0 without history.
    pub max_settled_days: Decimal,
    /// Date of the most recent settlement.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_settlement_date: Option<NaiveDate>,
    /// Days settled by the most recent settlement.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_settled_days: Option<Decimal>,
}

impl SettlementHistorySummary {
    /// Totals a slice of settlement records.
    ///
    /// The amount total saturates instead of overflowing.
    pub fn from_records(records: &[SettlementRecord]) -> Self {
        let count = records.len();
        let total_days: Decimal = records.iter().map(|r| r.settled_days).sum();
        let total_amount = records
            .iter()
            .fold(0i64, |total, r| total.saturating_add(r.amount));
        let last = records.iter().max_by_key(|r| r.settlement_date);

        let (avg_days, avg_amount) = match i64::try_from(count) {
            Ok(n) if n > 0 => (
                (total_days / Decimal::from(n))
                    .round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero),
                total_amount / n,
            ),
            _ => (Decimal::ZERO, 0),
        };

        Self {
            count,
            total_days,
            total_amount,
            avg_days,
            avg_amount,
            max_settled_days: records
                .iter()
                .map(|r| r.settled_days)
                .max()
                .unwrap_or(Decimal::ZERO),
            last_settlement_date: last.map(|r| r.settlement_date),
            last_settled_days: last.map(|r| r.settled_days),
        }
    }
}
