//! Attendance record model and related types.
//!
//! Records are immutable once created: edits replace the whole record and
//! never mutate it partially.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::ClockTime;

/// The attendance status of a record.
///
/// `Friday` overrides both `Present` and `Absent` whenever the record's date
/// falls on the weekly rest day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttendanceStatus {
    /// Absent on a working day.
    Absent,
    /// Recorded on the weekly rest day.
    Friday,
    /// Present on a working day.
    Present,
}

impl AttendanceStatus {
    /// Returns the wire name of the status.
    pub fn as_str(&self) -> &'static str {
        match self {
            AttendanceStatus::Absent => "absent",
            AttendanceStatus::Friday => "friday",
            AttendanceStatus::Present => "present",
        }
    }
}

impl std::fmt::Display for AttendanceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single day of attendance for one employee.
///
/// At most one record exists per `(employee_id, date)` pair; the store
/// enforces this when records are written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceRecord {
    /// Unique identifier for the record.
    pub id: String,
    /// The calendar date the record covers.
    pub date: NaiveDate,
    /// The localized weekday name of `date`.
    pub day: String,
    /// The employee this record belongs to.
    pub employee_id: String,
    /// Checkin time, or the absence sentinel.
    pub checkin: ClockTime,
    /// Checkout time, or the absence sentinel.
    pub checkout: ClockTime,
    /// Regular plus overtime hours.
    pub total_hours: Decimal,
    /// Hours up to the workday boundary or the daily cap.
    pub regular_hours: Decimal,
    /// Hours worked past the workday boundary.
    pub overtime_hours: Decimal,
    /// Free-text notes.
    #[serde(default)]
    pub notes: String,
    /// Whether `date` is the weekly rest day.
    pub is_friday: bool,
    /// The attendance status.
    pub status: AttendanceStatus,
    /// When the record was created.
    pub created_at: DateTime<Utc>,
}
