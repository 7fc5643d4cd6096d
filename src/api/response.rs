//! Response types for the leave API.
//!
//! This module defines the success bodies of each endpoint and the error
//! response structures, including the mapping from [`EngineError`] to an
//! HTTP status.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::models::{
    DepartmentStats, Employee, LeaveSnapshot, PortfolioSummary, SettlementBreakdown,
    SettlementHistorySummary,
};

/// One row of the employee list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeSummary {
    /// Employee identifier.
    pub id: String,
    /// Employee number.
    pub employee_no: String,
    /// Display name.
    pub name: String,
    /// Department.
    pub department: String,
    /// Position.
    pub position: String,
    /// Hire date.
    pub hire_date: NaiveDate,
    /// Leave balance at the reference date.
    pub snapshot: LeaveSnapshot,
}

impl EmployeeSummary {
    /// Pairs an employee with their snapshot.
    pub fn new(employee: &Employee, snapshot: LeaveSnapshot) -> Self {
        Self {
            id: employee.id.clone(),
            employee_no: employee.employee_no.clone(),
            name: employee.name.clone(),
            department: employee.department.clone(),
            position: employee.position.clone(),
            hire_date: employee.hire_date,
            snapshot,
        }
    }
}

/// Body of `GET /employees/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeDetail {
    /// The full employee record.
    pub employee: Employee,
    /// Leave balance at the reference date.
    pub snapshot: LeaveSnapshot,
    /// What settling the remaining days would pay; absent with nothing left.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub settlement_preview: Option<SettlementBreakdown>,
    /// Totals over past settlements.
    pub settlement_history: SettlementHistorySummary,
}

/// Body of `GET /departments`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepartmentsResponse {
    /// The reference date used.
    pub reference_date: NaiveDate,
    /// Per-department totals, sorted by name.
    pub departments: Vec<DepartmentStats>,
}

/// Body of `GET /dashboard`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardResponse {
    /// The reference date used.
    pub reference_date: NaiveDate,
    /// Organisation-wide totals.
    pub summary: PortfolioSummary,
    /// Employees whose balance expires soonest, capped at a fixed count.
    pub settlement_targets: Vec<LeaveSnapshot>,
    /// Remaining days across all settlement targets, not only the listed ones.
    pub target_remaining_days: Decimal,
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }

    /// Creates an invalid query string error response.
    pub fn invalid_query(message: impl Into<String>) -> Self {
        Self::new("INVALID_QUERY", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        let message = error.to_string();
        let (status, error) = match error {
            EngineError::ConfigNotFound { .. } | EngineError::ConfigParseError { .. } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiError::with_details("CONFIG_ERROR", "Configuration error", message),
            ),
            EngineError::InvalidDateRange { .. } => (
                StatusCode::BAD_REQUEST,
                ApiError::with_details(
                    "INVALID_DATE_RANGE",
                    message,
                    "The reference date must not be before the hire date",
                ),
            ),
            EngineError::InvalidWage { .. } => (
                StatusCode::BAD_REQUEST,
                ApiError::new("INVALID_WAGE", message),
            ),
            EngineError::InvalidEmployee { .. } => (
                StatusCode::BAD_REQUEST,
                ApiError::with_details(
                    "INVALID_EMPLOYEE",
                    message,
                    "The employee data contains invalid information",
                ),
            ),
            EngineError::NegativeUnusedDays { .. } => (
                StatusCode::BAD_REQUEST,
                ApiError::new("NEGATIVE_UNUSED_DAYS", message),
            ),
            EngineError::InvalidUsage { .. } => (
                StatusCode::BAD_REQUEST,
                ApiError::new("INVALID_USAGE", message),
            ),
            EngineError::EmployeeNotFound { .. } => (
                StatusCode::NOT_FOUND,
                ApiError::new("EMPLOYEE_NOT_FOUND", message),
            ),
            EngineError::CalculationError { .. } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiError::with_details("CALCULATION_ERROR", "Calculation failed", message),
            ),
            EngineError::DataSourceError { .. } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiError::with_details("DATA_SOURCE_ERROR", "Employee data unavailable", message),
            ),
        };
        ApiErrorResponse { status, error }
    }
}
