//! In-memory employee collection.

use std::collections::{BTreeSet, HashMap};

use chrono::NaiveDate;
use tracing::debug;

use crate::calculation::build_snapshot;
use crate::config::LeavePolicy;
use crate::error::{EngineError, EngineResult};
use crate::models::{Employee, LeaveSnapshot, LeaveUsage};

use super::query::{EmployeeQuery, Page};
use super::source::EmployeeSource;

/// The employees held for the session, in source order.
///
/// The roster owns the only mutation in the system: appending registered
/// usage to `used_days`. Snapshots are always derived afresh from it.
#[derive(Debug, Clone, Default)]
pub struct Roster {
    employees: Vec<Employee>,
    index: HashMap<String, usize>,
}

impl Roster {
    /// Creates a roster, validating every record.
    ///
    /// # Returns
    ///
    /// Returns the roster, or an error if:
    /// - a record fails [`Employee::validate`]
    /// - two records share an id (`InvalidEmployee`)
    pub fn new(employees: Vec<Employee>) -> EngineResult<Self> {
        let mut index = HashMap::with_capacity(employees.len());
        for (position, employee) in employees.iter().enumerate() {
            employee.validate()?;
            if index.insert(employee.id.clone(), position).is_some() {
                return Err(EngineError::InvalidEmployee {
                    field: "id".to_string(),
                    message: format!("duplicate employee id '{}'", employee.id),
                });
            }
        }

        Ok(Self { employees, index })
    }

    /// Loads a roster from any employee source.
    pub fn from_source(source: &dyn EmployeeSource) -> EngineResult<Self> {
        let employees = source.load()?;
        debug!(
            source = %source.name(),
            employees = employees.len(),
            "Loaded employees"
        );
        Self::new(employees)
    }

    /// All employees in source order.
    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    /// Number of employees.
    pub fn len(&self) -> usize {
        self.employees.len()
    }

    /// True when the roster holds no employees.
    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }

    /// Looks up an employee by id.
    pub fn get(&self, id: &str) -> EngineResult<&Employee> {
        self.index
            .get(id)
            .and_then(|&position| self.employees.get(position))
            .ok_or_else(|| EngineError::EmployeeNotFound { id: id.to_string() })
    }

    /// Distinct department names, sorted.
    pub fn departments(&self) -> Vec<String> {
        self.employees
            .iter()
            .map(|e| e.department.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Filters and paginates the roster.
    ///
    /// # Examples
    ///
    /// ```
    /// use leave_engine::roster::{EmployeeQuery, EmployeeSource, Roster, SyntheticSource};
    /// use chrono::NaiveDate;
    ///
    /// let as_of = NaiveDate::from_ymd_opt(2026, 10, 18).unwrap();
    /// let roster = Roster::from_source(&SyntheticSource::new(50, 7, as_of)).unwrap();
    ///
    /// let page = roster.search(&EmployeeQuery {
    ///     department: Some("Finance".to_string()),
    ///     ..Default::default()
    /// });
    /// assert!(page.items.iter().all(|e| e.department == "Finance"));
    /// ```
    pub fn search(&self, query: &EmployeeQuery) -> Page<&Employee> {
        let needle = query.needle();
        let matches: Vec<&Employee> = self
            .employees
            .iter()
            .filter(|e| {
                query
                    .department
                    .as_deref()
                    .is_none_or(|department| e.department == department)
            })
            .filter(|e| needle.as_deref().is_none_or(|n| matches_text(e, n)))
            .collect();

        Page::paginate(matches, query.page(), query.per_page())
    }

    /// Appends a usage event to an employee's used days.
    ///
    /// # Returns
    ///
    /// Returns the updated employee, or an error if:
    /// - the employee does not exist (`EmployeeNotFound`)
    /// - the usage fails [`LeaveUsage::validate`] (`InvalidUsage`)
    /// - the usage date is before hiring or after resignation (`InvalidUsage`)
    /// - the new total overflows (`InvalidUsage`)
    ///
    /// On error the roster is left unchanged.
    pub fn register_usage(&mut self, id: &str, usage: &LeaveUsage) -> EngineResult<&Employee> {
        let (position, updated) = self.with_usage(id, usage)?;
        Ok(self.commit(position, updated, usage))
    }

    /// Registers usage and returns the employee's snapshot as of `reference_date`.
    ///
    /// The snapshot is built from the updated record before it is stored, so
    /// either both succeed or the roster is left unchanged.
    pub fn record_usage(
        &mut self,
        id: &str,
        usage: &LeaveUsage,
        reference_date: NaiveDate,
        policy: &LeavePolicy,
    ) -> EngineResult<LeaveSnapshot> {
        let (position, updated) = self.with_usage(id, usage)?;
        let snapshot = build_snapshot(&updated, reference_date, policy)?;
        self.commit(position, updated, usage);
        Ok(snapshot)
    }

    /// Returns the position and a copy of the employee with the usage applied.
    fn with_usage(&self, id: &str, usage: &LeaveUsage) -> EngineResult<(usize, Employee)> {
        usage.validate()?;

        let position = *self
            .index
            .get(id)
            .ok_or_else(|| EngineError::EmployeeNotFound { id: id.to_string() })?;
        let employee = self
            .employees
            .get(position)
            .ok_or_else(|| EngineError::EmployeeNotFound { id: id.to_string() })?;

        if usage.date < employee.hire_date {
            return Err(EngineError::InvalidUsage {
                message: format!(
                    "usage date {} is before hire date {}",
                    usage.date, employee.hire_date
                ),
            });
        }
        if let Some(resigned) = employee.resignation_date {
            if usage.date > resigned {
                return Err(EngineError::InvalidUsage {
                    message: format!(
                        "usage date {} is after resignation date {}",
                        usage.date, resigned
                    ),
                });
            }
        }

        let used_days = employee.used_days.checked_add(usage.days).ok_or_else(|| {
            EngineError::InvalidUsage {
                message: format!(
                    "adding {} days to {} used days overflows",
                    usage.days, employee.used_days
                ),
            }
        })?;

        let mut updated = employee.clone();
        updated.used_days = used_days;
        Ok((position, updated))
    }

    fn commit(&mut self, position: usize, updated: Employee, usage: &LeaveUsage) -> &Employee {
        debug!(
            employee_id = %updated.id,
            days = %usage.days,
            used_days = %updated.used_days,
            "Registered leave usage"
        );
        let slot = &mut self.employees[position];
        *slot = updated;
        slot
    }
}

fn matches_text(employee: &Employee, needle: &str) -> bool {
    [&employee.name, &employee.employee_no, &employee.department]
        .iter()
        .any(|field| field.to_lowercase().contains(needle))
}
