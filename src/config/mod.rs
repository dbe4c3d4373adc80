//! Configuration loading and management for the Attendance Engine.
//!
//! This module provides functionality to load the workday rules and the
//! startup report schedules from YAML files.
//!
//! # Example
//!
//! ```no_run
//! use attendance_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/default").unwrap();
//! println!("Regular hours cap: {}", config.workday().regular_hours_cap);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    AttendanceConfig, DEFAULT_END_OF_WORK_DAY, DEFAULT_REGULAR_HOURS_CAP, SchedulesConfig,
    WorkdayRules,
};
