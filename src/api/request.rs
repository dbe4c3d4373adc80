//! Request types for the Attendance Engine API.
//!
//! Attendance writes take an [`AttendanceEntry`](crate::calculation::AttendanceEntry)
//! body directly; the types here cover the remaining bodies and query
//! strings.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::MonthKey;

/// Request body for `POST /hours`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HoursRequest {
    /// Checkin as `HH:mm`.
    pub checkin: String,
    /// Checkout as `HH:mm`.
    pub checkout: String,
}

/// Request body for creating or updating an employee.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeRequest {
    /// The employee's display name.
    pub name: String,
    /// The department; blank falls back to the default department.
    #[serde(default)]
    pub department: String,
    /// An explicit id; generated when absent. Ignored on update.
    #[serde(default)]
    pub id: Option<String>,
}

/// Query string for `GET /employees`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EmployeeSearch {
    /// Matched against name, department and id.
    #[serde(default)]
    pub search: String,
}

/// Query string selecting a month; the current month when absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MonthQuery {
    /// The month as `YYYY-MM`.
    #[serde(default)]
    pub month: Option<MonthKey>,
}

/// Query string for `GET /reports/monthly`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlyReportQuery {
    /// The month as `YYYY-MM`; the current month when absent.
    #[serde(default)]
    pub month: Option<MonthKey>,
    /// Keep only employees with attendance in the month.
    #[serde(default = "default_active")]
    pub active: bool,
}

fn default_active() -> bool {
    true
}

/// Query string for `GET /reports/daily`; today when the date is absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DateQuery {
    /// The date as `YYYY-MM-DD`.
    #[serde(default)]
    pub date: Option<NaiveDate>,
}

/// Query string for `GET /employees/:id/stats`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StatsQuery {
    /// Restrict to one month; all time when absent.
    #[serde(default)]
    pub month: Option<MonthKey>,
}
