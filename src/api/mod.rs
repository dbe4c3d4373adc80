//! HTTP API module for the Attendance Engine.
//!
//! This module provides the REST API endpoints for recording attendance,
//! managing employees and schedules, and reading reports.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{
    DateQuery, EmployeeRequest, EmployeeSearch, HoursRequest, MonthQuery, MonthlyReportQuery,
    StatsQuery,
};
pub use response::{ApiError, ApiErrorResponse, DailyReportResponse, DashboardResponse};
pub use state::{AppState, SharedTracker};
