//! Error types for the leave engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every failure the engine, roster and configuration layers can report.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use thiserror::Error;

/// The main error type for the leave engine.
///
/// All fallible operations return this error type so that callers (the HTTP
/// layer in particular) can render a deterministic fallback for each case.
///
/// # Example
///
/// ```
/// use leave_engine::error::EngineError;
///
/// let error = EngineError::EmployeeNotFound {
///     id: "EMP0404".to_string(),
/// };
/// assert_eq!(error.to_string(), "Employee not found: EMP0404");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed or holds inconsistent values.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// The hire date lies after the reference date.
    #[error("Hire date {hire_date} is after reference date {reference_date}")]
    InvalidDateRange {
        /// The employee's hire date.
        hire_date: NaiveDate,
        /// The date the calculation was requested for.
        reference_date: NaiveDate,
    },

    /// A monthly wage that is zero or negative.
    #[error("Monthly wage must be positive, got {wage}")]
    InvalidWage {
        /// The rejected wage.
        wage: i64,
    },

    /// An employee record was invalid or contained inconsistent data.
    #[error("Invalid employee field '{field}': {message}")]
    InvalidEmployee {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// Settlement was requested for a negative number of unused days.
    #[error("Unused days must not be negative, got {days}")]
    NegativeUnusedDays {
        /// The rejected day count.
        days: Decimal,
    },

    /// A leave usage registration was rejected.
    #[error("Invalid leave usage: {message}")]
    InvalidUsage {
        /// A description of what made the usage invalid.
        message: String,
    },

    /// No employee matches the given identifier.
    #[error("Employee not found: {id}")]
    EmployeeNotFound {
        /// The identifier that was looked up.
        id: String,
    },

    /// A general calculation error occurred (date or amount out of range).
    #[error("Calculation error: {message}")]
    CalculationError {
        /// A description of the calculation error.
        message: String,
    },

    /// An employee data source could not be read.
    #[error("Failed to load employees from '{source_name}': {message}")]
    DataSourceError {
        /// The data source (file path or generator name).
        source_name: String,
        /// A description of the failure.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
