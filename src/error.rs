//! Error types for the Attendance Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while recording attendance,
//! computing hours and running scheduled reports.

use chrono::NaiveDate;
use thiserror::Error;

/// The message shown to users when a checkout is not after its checkin.
pub const CHECKOUT_BEFORE_CHECKIN_MESSAGE: &str = "checkout must be after checkin";

/// The main error type for the Attendance Engine.
///
/// Every failure is recoverable: operations that return an error leave
/// stored state unchanged.
///
/// # Example
///
/// ```
/// use attendance_engine::error::EngineError;
///
/// let error = EngineError::MissingField {
///     field: "employee_id".to_string(),
/// };
/// assert_eq!(error.to_string(), "Missing required field: employee_id");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// A time-of-day string could not be parsed as `HH:mm`.
    #[error("Invalid time '{value}': expected HH:mm")]
    InvalidTime {
        /// The rejected input.
        value: String,
    },

    /// A month string could not be parsed as `YYYY-MM`.
    #[error("Invalid month '{value}': expected YYYY-MM")]
    InvalidMonth {
        /// The rejected input.
        value: String,
    },

    /// The checkout time is equal to or earlier than the checkin time.
    #[error("checkout must be after checkin")]
    CheckoutBeforeCheckin,

    /// A record already exists for this employee on this date.
    #[error("Attendance already recorded for employee '{employee_id}' on {date}")]
    DuplicateRecord {
        /// The employee the record belongs to.
        employee_id: String,
        /// The date of the existing record.
        date: NaiveDate,
    },

    /// An employee with this id is already registered.
    #[error("Employee already exists: {id}")]
    DuplicateEmployee {
        /// The id that is already taken.
        id: String,
    },

    /// A required input field was empty or absent.
    #[error("Missing required field: {field}")]
    MissingField {
        /// The name of the missing field.
        field: String,
    },

    /// No employee exists with the given id.
    #[error("Employee not found: {id}")]
    EmployeeNotFound {
        /// The id that was looked up.
        id: String,
    },

    /// No attendance record exists with the given id.
    #[error("Attendance record not found: {id}")]
    RecordNotFound {
        /// The id that was looked up.
        id: String,
    },

    /// No report schedule exists with the given id.
    #[error("Report schedule not found: {id}")]
    ScheduleNotFound {
        /// The id that was looked up.
        id: String,
    },

    /// A report schedule definition was rejected.
    #[error("Invalid report schedule: {message}")]
    InvalidSchedule {
        /// A description of what made the schedule invalid.
        message: String,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A scheduled report could not be handed to its sink.
    #[error("Failed to deliver report '{schedule_id}': {message}")]
    ReportDelivery {
        /// The schedule whose report failed.
        schedule_id: String,
        /// A description of the delivery failure.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
