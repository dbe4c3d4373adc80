//! Core data models for the Attendance Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod attendance_record;
mod clock;
mod employee;
mod hours_result;
mod month;
mod report;
mod schedule;

pub use attendance_record::{AttendanceRecord, AttendanceStatus};
pub use clock::{ABSENT_MARKER, ClockTime, TIME_FORMAT, hhmm, parse_clock};
pub use employee::{DEFAULT_DEPARTMENT, Employee, generate_id};
pub use hours_result::HoursResult;
pub use month::MonthKey;
pub use report::{DashboardStats, EmployeeStats, HoursTotals, MonthlyStats, OvertimeLeader};
pub use schedule::{ExportFormat, NewSchedule, ReportSchedule, ScheduleKind, ScheduleUpdate};
