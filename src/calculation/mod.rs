//! Calculation logic for the Attendance Engine.
//!
//! This module contains the hours engine that splits a worked day into
//! regular and overtime hours, the record assembler that turns an attendance
//! entry into a stored record, weekday detection for the rest day, display
//! formatting, and the aggregators behind reports and the dashboard.

mod aggregation;
mod assembler;
mod day_detection;
mod formatting;
mod hours;

pub use aggregation::{
    DELETED_EMPLOYEE_NAME, RECORDS_PER_PAGE, RecordPage, RecordQuery, SortDirection, SortField,
    StatusFilter, active_monthly_summary, daily_records, dashboard_stats, employee_name,
    employee_stats, monthly_summary, recent_records, records_by_date_desc, records_in_month,
    search_employees, top_overtime,
};
pub use assembler::{
    Attendance, AttendanceEntry, DEFAULT_ABSENCE_NOTE, assemble_record, default_checkout,
};
pub use day_detection::{
    REST_DAY_INDEX, WEEKDAY_NAMES, day_name, is_rest_day, weekday_from_index, weekday_index,
};
pub use formatting::{
    AM_MARKER, MONTH_NAMES, PM_MARKER, format_duration, format_to_12_hour, month_name,
    month_name_of, parse_duration,
};
pub use hours::{calculate_hours, parse_time_minutes, round_hours, split_minutes, split_times};
