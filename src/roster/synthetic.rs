//! Deterministic demo population.
//!
//! Departments get an even share of the headcount. Position and salary follow
//! tenure, usage grows with tenure, and every completed anniversary year with
//! days left leaves an annual settlement record behind. Entitlements and
//! settlement amounts come from the calculation module, so the generated
//! history agrees with what the engine would compute.

use chrono::{Days, NaiveDate};
use rust_decimal::Decimal;

use crate::calculation::{anniversary, calculate_entitlement, calculate_settlement, calculate_tenure};
use crate::config::LeavePolicy;
use crate::error::{EngineError, EngineResult};
use crate::models::{Employee, SettlementRecord, SettlementType};

use super::rng::DemoRng;
use super::source::EmployeeSource;

/// Department names, in generation order.
pub const DEPARTMENTS: [&str; 12] = [
    "Production 1",
    "Production 2",
    "Production 3",
    "Quality Control",
    "R&D",
    "Sales",
    "Marketing",
    "Human Resources",
    "Finance",
    "General Affairs",
    "IT",
    "Purchasing",
];

/// Positions with their monthly salary band `[min, max)`.
const POSITIONS: [(&str, i64, i64); 7] = [
    ("Staff", 2_800_000, 3_500_000),
    ("Associate", 3_200_000, 4_000_000),
    ("Assistant Manager", 3_800_000, 4_800_000),
    ("Manager", 4_500_000, 5_800_000),
    ("Deputy General Manager", 5_500_000, 7_000_000),
    ("General Manager", 6_500_000, 8_500_000),
    ("Director", 8_000_000, 12_000_000),
];

const LAST_NAMES: [&str; 20] = [
    "Kim", "Lee", "Park", "Choi", "Jung", "Kang", "Cho", "Yoon", "Jang", "Lim", "Han", "Oh", "Seo",
    "Shin", "Kwon", "Hwang", "Ahn", "Song", "Ryu", "Hong",
];

const FIRST_NAMES: [&str; 30] = [
    "Minjun", "Seoyeon", "Seojun", "Seoyun", "Jiho", "Jiyun", "Junseo", "Haeun", "Doyun", "Sua",
    "Juwon", "Hayun", "Siwoo", "Jia", "Jihu", "Eunwoo", "Chaewon", "Yunseo", "Junhyeok", "Daeun",
    "Hyunwoo", "Yejun", "Minseo", "Hajun", "Jian", "Geonwoo", "Seojin", "Yujun", "Sunwoo",
    "Jungwoo",
];

/// Longest tenure generated, in days (about 21 years).
const MAX_TENURE_DAYS: i64 = 21 * 365;

/// Percent chance that an employee resigned within the last 60 days.
const RESIGNATION_PERCENT: u32 = 2;

/// Generates a reproducible employee population.
///
/// # Example
///
/// ```
/// use leave_engine::roster::{EmployeeSource, SyntheticSource};
/// use chrono::NaiveDate;
///
/// let as_of = NaiveDate::from_ymd_opt(2026, 10, 18).unwrap();
/// let first = SyntheticSource::new(24, 99, as_of).load().unwrap();
/// let second = SyntheticSource::new(24, 99, as_of).load().unwrap();
///
/// assert_eq!(first.len(), 24);
/// assert_eq!(first, second);
/// ```
#[derive(Debug, Clone)]
pub struct SyntheticSource {
    count: usize,
    seed: u64,
    as_of: NaiveDate,
    policy: LeavePolicy,
}

impl SyntheticSource {
    /// Creates a source of `count` employees as of a date, under the statutory policy.
    pub fn new(count: usize, seed: u64, as_of: NaiveDate) -> Self {
        Self {
            count,
            seed,
            as_of,
            policy: LeavePolicy::statutory(),
        }
    }

    /// Uses a different policy for entitlements and settlement history.
    pub fn with_policy(mut self, policy: LeavePolicy) -> Self {
        self.policy = policy;
        self
    }

    fn generate(
        &self,
        rng: &mut DemoRng,
        number: usize,
        department: &str,
    ) -> EngineResult<Employee> {
        let days_back = rng.range(0, MAX_TENURE_DAYS + 1);
        let hire_date = self.days_before(days_back.unsigned_abs())?;

        let resignation_date = if rng.chance(RESIGNATION_PERCENT) {
            let back = rng.range(0, days_back.min(60) + 1);
            Some(self.days_before(back.unsigned_abs())?)
        } else {
            None
        };
        let last_day = resignation_date.unwrap_or(self.as_of);

        let tenure = calculate_tenure(hire_date, last_day)?;
        let (position, min_wage, max_wage) = pick_position(rng, tenure.years);
        let monthly_wage = rng.range(min_wage, max_wage) / 10_000 * 10_000;

        let name = format!(
            "{} {}",
            rng.pick(&LAST_NAMES).copied().unwrap_or("Kim"),
            rng.pick(&FIRST_NAMES).copied().unwrap_or("Minjun"),
        );

        let total_days = calculate_entitlement(hire_date, last_day, &self.policy.accrual)?;
        let base_percent = (30 + 5 * i64::from(tenure.years)).min(85);
        let usage_percent = (base_percent + rng.range(-20, 21)).clamp(10, 95);
        let used_half_days = i64::from(total_days) * 2 * usage_percent / 100;

        let settlement_history =
            self.settlement_history(rng, hire_date, last_day, monthly_wage)?;

        let id = format!("EMP{:04}", number);
        Ok(Employee {
            employee_no: id.clone(),
            id,
            name,
            department: department.to_string(),
            position: position.to_string(),
            hire_date,
            monthly_wage,
            used_days: Decimal::new(used_half_days * 5, 1),
            resignation_date,
            settlement_history,
        })
    }

    /// One annual record per completed anniversary year with days left over.
    fn settlement_history(
        &self,
        rng: &mut DemoRng,
        hire_date: NaiveDate,
        last_day: NaiveDate,
        monthly_wage: i64,
    ) -> EngineResult<Vec<SettlementRecord>> {
        let completed_years = calculate_tenure(hire_date, last_day)?.years;
        let mut history = Vec::new();

        for leave_year in 1..=completed_years {
            let settlement_date = anniversary(hire_date, leave_year)?;
            let period_last_day = settlement_date.pred_opt().ok_or_else(|| {
                EngineError::CalculationError {
                    message: format!("no day before {}", settlement_date),
                }
            })?;
            let total_days =
                calculate_entitlement(hire_date, period_last_day, &self.policy.accrual)?;

            let usage_percent = rng.range(50, 90);
            let used_days = i64::from(total_days) * usage_percent / 100;
            let settled_days = i64::from(total_days) - used_days;
            if settled_days <= 0 {
                continue;
            }

            // Past wages: 85% of today's, plus 3% per year of service
            let raise_percent = 100 + 3 * (i64::from(leave_year) - 1);
            let past_wage = (monthly_wage * 85 / 100 * raise_percent / 100).max(1);
            let breakdown =
                calculate_settlement(Decimal::from(settled_days), past_wage, &self.policy)?;
            if breakdown.net_amount <= 0 {
                continue;
            }

            history.push(SettlementRecord {
                settlement_date,
                leave_year,
                settled_days: Decimal::from(settled_days),
                amount: breakdown.net_amount,
                settlement_type: SettlementType::Annual,
            });
        }

        Ok(history)
    }

    fn days_before(&self, days: u64) -> EngineResult<NaiveDate> {
        self.as_of
            .checked_sub_days(Days::new(days))
            .ok_or_else(|| EngineError::CalculationError {
                message: format!("{} days before {} is out of range", days, self.as_of),
            })
    }
}

impl EmployeeSource for SyntheticSource {
    fn name(&self) -> String {
        format!("synthetic(count={}, seed={})", self.count, self.seed)
    }

    fn load(&self) -> EngineResult<Vec<Employee>> {
        let mut rng = DemoRng::new(self.seed);
        let per_department = self.count / DEPARTMENTS.len();
        let extra = self.count % DEPARTMENTS.len();

        let mut employees = Vec::with_capacity(self.count);
        for (index, department) in DEPARTMENTS.iter().enumerate() {
            let headcount = per_department + usize::from(index < extra);
            for _ in 0..headcount {
                let number = employees.len() + 1;
                employees.push(self.generate(&mut rng, number, department)?);
            }
        }

        Ok(employees)
    }
}

fn pick_position(rng: &mut DemoRng, years: u32) -> (&'static str, i64, i64) {
    let coin = rng.chance(50);
    let index = match years {
        0..=1 => 0,
        2..=3 => usize::from(coin),
        4..=6 => 1 + usize::from(coin),
        7..=9 => 2 + usize::from(coin),
        10..=14 => 3 + usize::from(coin),
        15..=19 => 4 + usize::from(coin),
        _ => {
            if rng.chance(20) {
                6
            } else {
                5
            }
        }
    };
    POSITIONS[index]
}
