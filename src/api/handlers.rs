//! HTTP request handlers for the Attendance Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::StatusCode,
    response::IntoResponse,
    routing::{get, patch, post, put},
};
use chrono::{Local, NaiveDate};
use serde_json::json;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{
    AttendanceEntry, RecordQuery, active_monthly_summary, calculate_hours, daily_records,
    dashboard_stats, employee_stats, monthly_summary, recent_records, search_employees,
    top_overtime,
};
use crate::error::EngineError;
use crate::models::{HoursTotals, MonthKey, NewSchedule, ScheduleUpdate};
use crate::store::AttendanceStore;

use super::request::{
    DateQuery, EmployeeRequest, EmployeeSearch, HoursRequest, MonthQuery, MonthlyReportQuery,
    StatsQuery,
};
use super::response::{ApiErrorResponse, DailyReportResponse, DashboardResponse};
use super::state::AppState;

/// Number of overtime leaders shown on the dashboard.
const DASHBOARD_TOP_OVERTIME: usize = 3;

/// Number of recent records shown on the dashboard.
const DASHBOARD_RECENT_RECORDS: usize = 5;

type ApiResult<T> = Result<T, ApiErrorResponse>;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/hours", post(hours_handler))
        .route("/employees", get(list_employees).post(create_employee))
        .route("/employees/:id", put(update_employee).delete(delete_employee))
        .route("/employees/:id/stats", get(employee_stats_handler))
        .route("/records", get(list_records).post(create_record))
        .route("/records/:id", put(update_record).delete(delete_record))
        .route("/reports/daily", get(daily_report))
        .route("/reports/monthly", get(monthly_report))
        .route("/dashboard", get(dashboard))
        .route("/schedules", get(list_schedules).post(create_schedule))
        .route("/schedules/:id", patch(update_schedule).delete(delete_schedule))
        .with_state(state)
}

/// Logs a rejected request against its correlation id.
fn rejected(correlation_id: Uuid, error: impl Into<ApiErrorResponse>) -> ApiErrorResponse {
    let response = error.into();
    warn!(
        correlation_id = %correlation_id,
        status = response.status.as_u16(),
        code = %response.error.code,
        message = %response.error.message,
        "Request rejected"
    );
    response
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

fn current_month() -> MonthKey {
    MonthKey::of(today())
}

/// Handler for POST /hours.
///
/// Splits a checkin/checkout pair into regular and overtime hours.
async fn hours_handler(
    State(state): State<AppState>,
    payload: Result<Json<HoursRequest>, JsonRejection>,
) -> ApiResult<impl IntoResponse> {
    let correlation_id = Uuid::new_v4();
    let Json(request) = payload.map_err(|e| rejected(correlation_id, e))?;

    let start_time = Instant::now();
    let result = calculate_hours(&request.checkin, &request.checkout, state.config().workday());
    if !result.is_valid() {
        return Err(rejected(correlation_id, EngineError::CheckoutBeforeCheckin));
    }

    info!(
        correlation_id = %correlation_id,
        total_hours = %result.total_hours,
        duration_us = start_time.elapsed().as_micros(),
        "Hours calculated"
    );
    Ok(Json(result))
}

/// Handler for GET /employees.
async fn list_employees(
    State(state): State<AppState>,
    query: Result<Query<EmployeeSearch>, QueryRejection>,
) -> ApiResult<impl IntoResponse> {
    let Query(query) = query?;
    let tracker = state.tracker().read().await;

    let employees: Vec<_> = search_employees(tracker.employees(), &query.search)
        .into_iter()
        .cloned()
        .collect();
    Ok(Json(employees))
}

/// Handler for POST /employees.
async fn create_employee(
    State(state): State<AppState>,
    payload: Result<Json<EmployeeRequest>, JsonRejection>,
) -> ApiResult<impl IntoResponse> {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing employee registration");
    let Json(request) = payload.map_err(|e| rejected(correlation_id, e))?;

    let employee = state
        .tracker()
        .write()
        .await
        .register_employee(&request.name, &request.department, request.id)
        .map_err(|e| rejected(correlation_id, e))?;

    Ok((StatusCode::CREATED, Json(employee)))
}

/// Handler for PUT /employees/:id.
async fn update_employee(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<EmployeeRequest>, JsonRejection>,
) -> ApiResult<impl IntoResponse> {
    let correlation_id = Uuid::new_v4();
    let Json(request) = payload.map_err(|e| rejected(correlation_id, e))?;

    let employee = state
        .tracker()
        .write()
        .await
        .update_employee(&id, &request.name, &request.department)
        .map_err(|e| rejected(correlation_id, e))?;

    Ok(Json(employee))
}

/// Handler for DELETE /employees/:id.
///
/// Removes the employee together with their records.
async fn delete_employee(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<impl IntoResponse> {
    let correlation_id = Uuid::new_v4();
    let removed = state
        .tracker()
        .write()
        .await
        .delete_employee(&id)
        .map_err(|e| rejected(correlation_id, e))?;

    info!(correlation_id = %correlation_id, employee_id = %id, "Employee removed");
    Ok(Json(json!({ "id": id, "removedRecords": removed })))
}

/// Handler for GET /employees/:id/stats.
async fn employee_stats_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    query: Result<Query<StatsQuery>, QueryRejection>,
) -> ApiResult<impl IntoResponse> {
    let Query(query) = query?;
    let tracker = state.tracker().read().await;

    if tracker.store().employee(&id).is_none() {
        return Err(EngineError::EmployeeNotFound { id }.into());
    }
    Ok(Json(employee_stats(&id, tracker.records(), query.month)))
}

/// Handler for GET /records.
///
/// Supports `search`, `status`, `sort`, `direction` and `page` parameters.
async fn list_records(
    State(state): State<AppState>,
    query: Result<Query<RecordQuery>, QueryRejection>,
) -> ApiResult<impl IntoResponse> {
    let Query(query) = query?;
    let tracker = state.tracker().read().await;
    Ok(Json(query.run(tracker.records(), tracker.employees())))
}

/// Handler for POST /records.
async fn create_record(
    State(state): State<AppState>,
    payload: Result<Json<AttendanceEntry>, JsonRejection>,
) -> ApiResult<impl IntoResponse> {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing attendance entry");
    let Json(entry) = payload.map_err(|e| rejected(correlation_id, e))?;

    let record = state
        .tracker()
        .write()
        .await
        .record_attendance(entry)
        .map_err(|e| rejected(correlation_id, e))?;

    info!(correlation_id = %correlation_id, record_id = %record.id, "Attendance entry stored");
    Ok((StatusCode::CREATED, Json(record)))
}

/// Handler for PUT /records/:id.
async fn update_record(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<AttendanceEntry>, JsonRejection>,
) -> ApiResult<impl IntoResponse> {
    let correlation_id = Uuid::new_v4();
    let Json(entry) = payload.map_err(|e| rejected(correlation_id, e))?;

    let record = state
        .tracker()
        .write()
        .await
        .update_record(&id, entry)
        .map_err(|e| rejected(correlation_id, e))?;

    Ok(Json(record))
}

/// Handler for DELETE /records/:id.
async fn delete_record(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<impl IntoResponse> {
    let correlation_id = Uuid::new_v4();
    state
        .tracker()
        .write()
        .await
        .delete_record(&id)
        .map_err(|e| rejected(correlation_id, e))?;

    Ok(StatusCode::NO_CONTENT)
}

/// Handler for GET /reports/daily.
async fn daily_report(
    State(state): State<AppState>,
    query: Result<Query<DateQuery>, QueryRejection>,
) -> ApiResult<impl IntoResponse> {
    let Query(query) = query?;
    let date = query.date.unwrap_or_else(today);
    let tracker = state.tracker().read().await;

    let records = daily_records(tracker.records(), date);
    let totals = HoursTotals::of(&records);
    Ok(Json(DailyReportResponse {
        date,
        records,
        totals,
    }))
}

/// Handler for GET /reports/monthly.
async fn monthly_report(
    State(state): State<AppState>,
    query: Result<Query<MonthlyReportQuery>, QueryRejection>,
) -> ApiResult<impl IntoResponse> {
    let Query(query) = query?;
    let month = query.month.unwrap_or_else(current_month);
    let tracker = state.tracker().read().await;

    let summary = if query.active {
        active_monthly_summary(tracker.employees(), tracker.records(), month)
    } else {
        monthly_summary(tracker.employees(), tracker.records(), month)
    };
    Ok(Json(summary))
}

/// Handler for GET /dashboard.
async fn dashboard(
    State(state): State<AppState>,
    query: Result<Query<MonthQuery>, QueryRejection>,
) -> ApiResult<impl IntoResponse> {
    let Query(query) = query?;
    let month = query.month.unwrap_or_else(current_month);
    let tracker = state.tracker().read().await;
    let (employees, records) = (tracker.employees(), tracker.records());

    Ok(Json(DashboardResponse {
        stats: dashboard_stats(employees, records, month),
        top_overtime: top_overtime(employees, records, month, DASHBOARD_TOP_OVERTIME),
        recent_records: recent_records(records, DASHBOARD_RECENT_RECORDS),
    }))
}

/// Handler for GET /schedules.
async fn list_schedules(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.schedules().read().await.list().to_vec())
}

/// Handler for POST /schedules.
async fn create_schedule(
    State(state): State<AppState>,
    payload: Result<Json<NewSchedule>, JsonRejection>,
) -> ApiResult<impl IntoResponse> {
    let correlation_id = Uuid::new_v4();
    let Json(definition) = payload.map_err(|e| rejected(correlation_id, e))?;

    let schedule = state
        .schedules()
        .write()
        .await
        .add(definition)
        .map_err(|e| rejected(correlation_id, e))?;

    info!(correlation_id = %correlation_id, schedule_id = %schedule.id, "Report schedule added");
    Ok((StatusCode::CREATED, Json(schedule)))
}

/// Handler for PATCH /schedules/:id.
async fn update_schedule(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<ScheduleUpdate>, JsonRejection>,
) -> ApiResult<impl IntoResponse> {
    let correlation_id = Uuid::new_v4();
    let Json(update) = payload.map_err(|e| rejected(correlation_id, e))?;

    let schedule = state
        .schedules()
        .write()
        .await
        .update(&id, update)
        .map_err(|e| rejected(correlation_id, e))?;

    info!(correlation_id = %correlation_id, schedule_id = %schedule.id, "Report schedule updated");
    Ok(Json(schedule))
}

/// Handler for DELETE /schedules/:id.
async fn delete_schedule(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<impl IntoResponse> {
    let correlation_id = Uuid::new_v4();
    state
        .schedules()
        .write()
        .await
        .delete(&id)
        .map_err(|e| rejected(correlation_id, e))?;

    info!(correlation_id = %correlation_id, schedule_id = %id, "Report schedule deleted");
    Ok(StatusCode::NO_CONTENT)
}
