//! Attendance record assembly.
//!
//! Builds a complete [`AttendanceRecord`] from what a user enters: the
//! employee, the date, notes, and either a checkin/checkout pair or an
//! absence. Duplicate detection is left to the store.

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::config::WorkdayRules;
use crate::error::{EngineError, EngineResult};
use crate::models::{
    AttendanceRecord, AttendanceStatus, ClockTime, HoursResult, generate_id, parse_clock,
};

use super::day_detection::{day_name, is_rest_day};
use super::hours::split_times;

/// Notes stored on an absence record when none are given.
pub const DEFAULT_ABSENCE_NOTE: &str = "غياب";

/// Whether the employee attended, with the times entered for a present day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Attendance {
    /// The employee worked; both times are required.
    Present {
        /// Checkin as `HH:mm`.
        #[serde(default)]
        checkin: Option<String>,
        /// Checkout as `HH:mm`.
        #[serde(default)]
        checkout: Option<String>,
    },
    /// The employee was absent.
    Absent,
}

/// User input for one day of attendance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceEntry {
    /// The employee the record is for.
    pub employee_id: String,
    /// The date being recorded.
    pub date: NaiveDate,
    /// Free-text notes.
    #[serde(default)]
    pub notes: String,
    /// Present with times, or absent.
    #[serde(flatten)]
    pub attendance: Attendance,
}

impl AttendanceEntry {
    /// Fills a missing checkout with the end of the workday.
    ///
    /// This mirrors the entry form: once a checkin is set and the checkout is
    /// still blank, the checkout is prefilled with the boundary time.
    pub fn with_default_checkout(mut self, rules: &WorkdayRules) -> Self {
        if let Attendance::Present { checkin, checkout } = &mut self.attendance {
            *checkout = default_checkout(checkin.as_deref(), checkout.take(), rules);
        }
        self
    }
}

/// Returns the checkout to use given what has been entered so far.
///
/// # Example
///
/// ```
/// use attendance_engine::calculation::default_checkout;
/// use attendance_engine::config::WorkdayRules;
///
/// let rules = WorkdayRules::default();
/// assert_eq!(default_checkout(Some("09:00"), None, &rules).as_deref(), Some("17:00"));
/// assert_eq!(default_checkout(Some("09:00"), Some("18:00".into()), &rules).as_deref(), Some("18:00"));
/// assert_eq!(default_checkout(None, None, &rules), None);
/// ```
pub fn default_checkout(
    checkin: Option<&str>,
    checkout: Option<String>,
    rules: &WorkdayRules,
) -> Option<String> {
    let checkin_set = checkin.is_some_and(|c| !c.trim().is_empty());
    let checkout_set = checkout.as_deref().is_some_and(|c| !c.trim().is_empty());

    if checkin_set && !checkout_set {
        Some(rules.end_of_work_day_text())
    } else {
        checkout
    }
}

/// Assembles an attendance record from user input.
///
/// The weekday name and rest-day flag are derived from the date. Absences
/// carry the `-` sentinel and zero hours. Present days run through the
/// hours engine. On the rest day the status is always `friday`.
///
/// # Errors
///
/// - [`EngineError::MissingField`] if the employee id or a present-day time is blank
/// - [`EngineError::InvalidTime`] if a time is not `HH:mm`
/// - [`EngineError::CheckoutBeforeCheckin`] if the hours engine rejects the times
///
/// # Example
///
/// ```
/// use attendance_engine::calculation::{assemble_record, Attendance, AttendanceEntry};
/// use attendance_engine::config::WorkdayRules;
/// use attendance_engine::models::AttendanceStatus;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let entry = AttendanceEntry {
///     employee_id: "EMP-001".to_string(),
///     date: NaiveDate::from_ymd_opt(2025, 3, 4).unwrap(),
///     notes: String::new(),
///     attendance: Attendance::Present {
///         checkin: Some("09:00".to_string()),
///         checkout: Some("19:30".to_string()),
///     },
/// };
///
/// let record = assemble_record(entry, &WorkdayRules::default()).unwrap();
/// assert_eq!(record.status, AttendanceStatus::Present);
/// assert_eq!(record.overtime_hours, Decimal::new(25, 1));
/// ```
pub fn assemble_record(entry: AttendanceEntry, rules: &WorkdayRules) -> EngineResult<AttendanceRecord> {
    if entry.employee_id.trim().is_empty() {
        return Err(missing("employee_id"));
    }

    let is_friday = is_rest_day(entry.date);

    let (checkin, checkout, hours, worked_status, notes) = match entry.attendance {
        Attendance::Absent => {
            let notes = if entry.notes.trim().is_empty() {
                DEFAULT_ABSENCE_NOTE.to_string()
            } else {
                entry.notes
            };
            (
                ClockTime::Absent,
                ClockTime::Absent,
                HoursResult::zero(),
                AttendanceStatus::Absent,
                notes,
            )
        }
        Attendance::Present { checkin, checkout } => {
            let checkin = required_time(checkin.as_deref(), "checkin")?;
            let checkout = required_time(checkout.as_deref(), "checkout")?;
            let hours = split_times(checkin, checkout, rules)?;
            (
                ClockTime::At(checkin),
                ClockTime::At(checkout),
                hours,
                AttendanceStatus::Present,
                entry.notes,
            )
        }
    };

    let status = if is_friday {
        AttendanceStatus::Friday
    } else {
        worked_status
    };

    Ok(AttendanceRecord {
        id: generate_id("REC"),
        date: entry.date,
        day: day_name(entry.date).to_string(),
        employee_id: entry.employee_id,
        checkin,
        checkout,
        total_hours: hours.total_hours,
        regular_hours: hours.regular_hours,
        overtime_hours: hours.overtime_hours,
        notes,
        is_friday,
        status,
        created_at: Utc::now(),
    })
}

fn required_time(value: Option<&str>, field: &str) -> EngineResult<chrono::NaiveTime> {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => parse_clock(v),
        _ => Err(missing(field)),
    }
}

fn missing(field: &str) -> EngineError {
    EngineError::MissingField {
        field: field.to_string(),
    }
}
