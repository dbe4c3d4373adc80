//! Report models produced by the aggregators.
//!
//! These are the shapes handed to dashboards and to export collaborators.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::AttendanceRecord;

/// Per-employee totals for one calendar month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyStats {
    /// The employee id.
    pub emp_id: String,
    /// The employee name.
    pub name: String,
    /// The employee department.
    pub department: String,
    /// Records with status `present`.
    pub present_days: usize,
    /// Records with status `absent`.
    pub absent_days: usize,
    /// Sum of regular hours.
    pub regular_hours: Decimal,
    /// Sum of overtime hours.
    pub overtime_hours: Decimal,
    /// Sum of total hours.
    pub total_hours: Decimal,
}

/// Headline figures for the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    /// Number of registered employees.
    pub total_employees: usize,
    /// Regular hours recorded in the month.
    pub total_regular: Decimal,
    /// Overtime hours recorded in the month.
    pub total_overtime: Decimal,
    /// Absent records in the month.
    pub absent_days: usize,
    /// Present records in the month.
    pub present_days: usize,
}

/// An employee ranked by overtime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OvertimeLeader {
    /// The employee id.
    pub id: String,
    /// The employee name.
    pub name: String,
    /// Overtime hours in the period.
    pub overtime: Decimal,
}

/// Statistics for a single employee, over one month or all time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeStats {
    /// Records with status `present`.
    pub present_days: usize,
    /// Records with status `absent`.
    pub absent_days: usize,
    /// Sum of regular hours.
    pub total_regular: Decimal,
    /// Sum of overtime hours.
    pub total_overtime: Decimal,
    /// Total hours divided by present days, zero when there are none.
    pub avg_daily_hours: Decimal,
    /// The contributing records, newest date first.
    pub records: Vec<AttendanceRecord>,
}

/// Hour sums over a set of records, used for table footers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HoursTotals {
    /// Sum of regular hours.
    pub regular_hours: Decimal,
    /// Sum of overtime hours.
    pub overtime_hours: Decimal,
    /// Sum of total hours.
    pub total_hours: Decimal,
}

impl HoursTotals {
    /// Sums the hour buckets of `records`.
    pub fn of<'a>(records: impl IntoIterator<Item = &'a AttendanceRecord>) -> Self {
        records.into_iter().fold(Self::default(), |acc, r| Self {
            regular_hours: acc.regular_hours + r.regular_hours,
            overtime_hours: acc.overtime_hours + r.overtime_hours,
            total_hours: acc.total_hours + r.total_hours,
        })
    }
}

impl std::iter::Sum for HoursTotals {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), |acc, t| Self {
            regular_hours: acc.regular_hours + t.regular_hours,
            overtime_hours: acc.overtime_hours + t.overtime_hours,
            total_hours: acc.total_hours + t.total_hours,
        })
    }
}
