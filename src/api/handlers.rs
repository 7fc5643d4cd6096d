//! HTTP request handlers for the leave API.
//!
//! This module contains the handler functions for all API endpoints. Each
//! handler resolves the reference date (today unless `as_of` is given), runs
//! the pure calculation under the roster lock, and maps engine errors to
//! [`ApiError`] bodies.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use chrono::{Local, NaiveDate};
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{
    build_snapshot, calculate_settlement, department_stats, portfolio_summary,
    settlement_history_summary, settlement_targets, unsettled_days,
};
use crate::config::LeavePolicy;
use crate::error::{EngineError, EngineResult};
use crate::models::{LeaveUsage, SettlementBreakdown};
use crate::roster::{Page, Roster};

use super::request::{AsOfParams, ListEmployeesParams, SettlementRequest, UsageRequest};
use super::response::{
    ApiError, ApiErrorResponse, DashboardResponse, DepartmentsResponse, EmployeeDetail,
    EmployeeSummary,
};
use super::state::AppState;

/// Number of settlement targets listed on the dashboard.
pub const DASHBOARD_TARGET_LIMIT: usize = 10;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/employees", get(list_employees_handler))
        .route("/employees/:id", get(employee_detail_handler))
        .route("/employees/:id/usage", post(register_usage_handler))
        .route("/departments", get(departments_handler))
        .route("/dashboard", get(dashboard_handler))
        .route("/settlement", post(settlement_handler))
        .with_state(state)
}

/// Handler for GET /employees.
///
/// Returns one page of employees matching the query, each with a snapshot.
async fn list_employees_handler(
    State(state): State<AppState>,
    params: Result<Query<ListEmployeesParams>, QueryRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Listing employees");

    let params = match params {
        Ok(Query(params)) => params,
        Err(rejection) => return query_rejection_response(correlation_id, rejection),
    };
    let reference_date = reference_date(params.as_of);

    let start_time = Instant::now();
    let roster = state.roster().read().await;
    let result = roster
        .search(&params.to_query())
        .try_map(|employee| {
            build_snapshot(employee, reference_date, state.policy())
                .map(|snapshot| EmployeeSummary::new(employee, snapshot))
        });

    if let Ok(page) = &result {
        info!(
            correlation_id = %correlation_id,
            total_items = page.total_items,
            page = page.page,
            duration_us = start_time.elapsed().as_micros(),
            "Employee list completed"
        );
    }
    respond::<Page<EmployeeSummary>>(correlation_id, result)
}

/// Handler for GET /employees/{id}.
///
/// Returns the employee record with snapshot, settlement preview and history.
async fn employee_detail_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    params: Result<Query<AsOfParams>, QueryRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, employee_id = %id, "Fetching employee");

    let params = match params {
        Ok(Query(params)) => params,
        Err(rejection) => return query_rejection_response(correlation_id, rejection),
    };

    let roster = state.roster().read().await;
    let result = employee_detail(&roster, &id, reference_date(params.as_of), state.policy());
    respond(correlation_id, result)
}

/// Handler for POST /employees/{id}/usage.
///
/// Registers leave usage and returns the employee's new snapshot.
async fn register_usage_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    params: Result<Query<AsOfParams>, QueryRejection>,
    payload: Result<Json<UsageRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, employee_id = %id, "Registering leave usage");

    let params = match params {
        Ok(Query(params)) => params,
        Err(rejection) => return query_rejection_response(correlation_id, rejection),
    };
    let usage: LeaveUsage = match payload {
        Ok(Json(request)) => request.into(),
        Err(rejection) => return json_rejection_response(correlation_id, rejection),
    };

    let reference_date = reference_date(params.as_of);
    let result = state
        .roster()
        .write()
        .await
        .record_usage(&id, &usage, reference_date, state.policy());

    if let Ok(snapshot) = &result {
        info!(
            correlation_id = %correlation_id,
            employee_id = %id,
            days = %usage.days,
            remaining_days = %snapshot.remaining_days,
            "Leave usage registered"
        );
    }
    respond(correlation_id, result)
}

/// Handler for GET /departments.
async fn departments_handler(
    State(state): State<AppState>,
    params: Result<Query<AsOfParams>, QueryRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Aggregating departments");

    let params = match params {
        Ok(Query(params)) => params,
        Err(rejection) => return query_rejection_response(correlation_id, rejection),
    };
    let reference_date = reference_date(params.as_of);

    let start_time = Instant::now();
    let roster = state.roster().read().await;
    let result = department_stats(roster.employees(), reference_date, state.policy()).map(
        |stats| DepartmentsResponse {
            reference_date,
            departments: stats.into_values().collect(),
        },
    );

    info!(
        correlation_id = %correlation_id,
        employees = roster.len(),
        duration_us = start_time.elapsed().as_micros(),
        "Department aggregation finished"
    );
    respond(correlation_id, result)
}

/// Handler for GET /dashboard.
async fn dashboard_handler(
    State(state): State<AppState>,
    params: Result<Query<AsOfParams>, QueryRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Building dashboard");

    let params = match params {
        Ok(Query(params)) => params,
        Err(rejection) => return query_rejection_response(correlation_id, rejection),
    };

    let roster = state.roster().read().await;
    let result = dashboard(&roster, reference_date(params.as_of), state.policy());
    respond(correlation_id, result)
}

/// Handler for POST /settlement.
///
/// Values a number of unused days for a monthly wage.
async fn settlement_handler(
    State(state): State<AppState>,
    payload: Result<Json<SettlementRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing settlement request");

    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => return json_rejection_response(correlation_id, rejection),
    };

    let result = calculate_settlement(request.unused_days, request.monthly_wage, state.policy());
    if let Ok(breakdown) = &result {
        info!(
            correlation_id = %correlation_id,
            unused_days = %breakdown.unused_days,
            net_amount = breakdown.net_amount,
            "Settlement calculated"
        );
    }
    respond::<SettlementBreakdown>(correlation_id, result)
}

fn employee_detail(
    roster: &Roster,
    id: &str,
    reference_date: NaiveDate,
    policy: &LeavePolicy,
) -> EngineResult<EmployeeDetail> {
    let employee = roster.get(id)?;
    let snapshot = build_snapshot(employee, reference_date, policy)?;
    let settlement_preview = if snapshot.has_remaining() {
        Some(calculate_settlement(
            snapshot.remaining_days,
            employee.monthly_wage,
            policy,
        )?)
    } else {
        None
    };

    Ok(EmployeeDetail {
        employee: employee.clone(),
        snapshot,
        settlement_preview,
        settlement_history: settlement_history_summary(&employee.settlement_history),
    })
}

fn dashboard(
    roster: &Roster,
    reference_date: NaiveDate,
    policy: &LeavePolicy,
) -> EngineResult<DashboardResponse> {
    let summary = portfolio_summary(roster.employees(), reference_date, policy)?;
    let mut targets = settlement_targets(roster.employees(), reference_date, policy)?;
    let target_remaining_days = unsettled_days(&targets);
    targets.truncate(DASHBOARD_TARGET_LIMIT);

    Ok(DashboardResponse {
        reference_date,
        summary,
        settlement_targets: targets,
        target_remaining_days,
    })
}

fn reference_date(as_of: Option<NaiveDate>) -> NaiveDate {
    as_of.unwrap_or_else(|| Local::now().date_naive())
}

fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

fn respond<T: Serialize>(correlation_id: Uuid, result: EngineResult<T>) -> Response {
    match result {
        Ok(body) => json_response(StatusCode::OK, body),
        Err(err) => engine_error_response(correlation_id, err),
    }
}

fn engine_error_response(correlation_id: Uuid, err: EngineError) -> Response {
    warn!(
        correlation_id = %correlation_id,
        error = %err,
        "Request failed"
    );
    ApiErrorResponse::from(err).into_response()
}

fn query_rejection_response(correlation_id: Uuid, rejection: QueryRejection) -> Response {
    let body_text = rejection.body_text();
    warn!(
        correlation_id = %correlation_id,
        error = %body_text,
        "Query string error"
    );
    json_response(StatusCode::BAD_REQUEST, ApiError::invalid_query(body_text))
}

fn json_rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // serde's message names the offending field
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::new("VALIDATION_ERROR", body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    json_response(StatusCode::BAD_REQUEST, error)
}
