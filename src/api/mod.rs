//! HTTP API module for the leave engine.
//!
//! This module exposes the roster, snapshots, aggregations and the
//! settlement calculator as JSON endpoints:
//!
//! | Method | Path                    | Body                   |
//! |--------|-------------------------|------------------------|
//! | GET    | `/employees`            | page of employees      |
//! | GET    | `/employees/{id}`       | employee detail        |
//! | POST   | `/employees/{id}/usage` | updated snapshot       |
//! | GET    | `/departments`          | department statistics  |
//! | GET    | `/dashboard`            | portfolio summary      |
//! | POST   | `/settlement`           | settlement breakdown   |
//!
//! Every GET accepts an optional `as_of=YYYY-MM-DD`; without it the local
//! date is used.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::{DASHBOARD_TARGET_LIMIT, create_router};
pub use request::{AsOfParams, ListEmployeesParams, SettlementRequest, UsageRequest};
pub use response::{
    ApiError, DashboardResponse, DepartmentsResponse, EmployeeDetail, EmployeeSummary,
};
pub use state::AppState;
