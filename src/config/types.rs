//! Configuration types for attendance tracking.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use chrono::NaiveTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{NewSchedule, TIME_FORMAT, hhmm};

/// Default workday boundary: 17:00.
pub const DEFAULT_END_OF_WORK_DAY: NaiveTime = match NaiveTime::from_hms_opt(17, 0, 0) {
    Some(time) => time,
    None => panic!("17:00 is a valid time"),
};

/// Default daily cap on regular hours: 8.
pub const DEFAULT_REGULAR_HOURS_CAP: Decimal = Decimal::from_parts(8, 0, 0, false, 0);

/// The rules the hours engine applies to a working day.
///
/// # Example
///
/// ```
/// use attendance_engine::config::WorkdayRules;
///
/// let rules = WorkdayRules::default();
/// assert_eq!(rules.end_of_work_day_text(), "17:00");
/// assert_eq!(rules.end_of_work_day_minutes(), 17 * 60);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkdayRules {
    /// Clock time after which additional work counts as overtime.
    #[serde(with = "hhmm")]
    pub end_of_work_day: NaiveTime,
    /// Maximum regular hours credited for one day.
    pub regular_hours_cap: Decimal,
}

impl WorkdayRules {
    /// The boundary as minutes since midnight.
    pub fn end_of_work_day_minutes(&self) -> u32 {
        use chrono::Timelike;
        self.end_of_work_day.hour() * 60 + self.end_of_work_day.minute()
    }

    /// The boundary as `HH:mm`, used as the default checkout.
    pub fn end_of_work_day_text(&self) -> String {
        self.end_of_work_day.format(TIME_FORMAT).to_string()
    }
}

impl Default for WorkdayRules {
    fn default() -> Self {
        Self {
            end_of_work_day: DEFAULT_END_OF_WORK_DAY,
            regular_hours_cap: DEFAULT_REGULAR_HOURS_CAP,
        }
    }
}

/// Schedules file structure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SchedulesConfig {
    /// Schedules registered at startup.
    #[serde(default)]
    pub schedules: Vec<NewSchedule>,
}

/// The complete configuration loaded from YAML files.
#[derive(Debug, Clone, Default)]
pub struct AttendanceConfig {
    /// Hours engine rules.
    workday: WorkdayRules,
    /// Report schedules to register at startup.
    schedules: Vec<NewSchedule>,
}

impl AttendanceConfig {
    /// Creates a new AttendanceConfig from its component parts.
    pub fn new(workday: WorkdayRules, schedules: Vec<NewSchedule>) -> Self {
        Self { workday, schedules }
    }

    /// Returns the workday rules.
    pub fn workday(&self) -> &WorkdayRules {
        &self.workday
    }

    /// Returns the startup schedules.
    pub fn schedules(&self) -> &[NewSchedule] {
        &self.schedules
    }
}
