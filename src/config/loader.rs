//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading attendance
//! configuration from YAML files.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::models::NewSchedule;

use super::types::{AttendanceConfig, SchedulesConfig, WorkdayRules};

/// Loads and provides access to attendance configuration.
///
/// # Directory Structure
///
/// ```text
/// config/default/
/// ├── workday.yaml    # Workday boundary and regular-hours cap (required)
/// └── schedules.yaml  # Report schedules registered at startup (optional)
/// ```
///
/// # Example
///
/// ```no_run
/// use attendance_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/default")?;
/// println!("Workday ends at {}", loader.workday().end_of_work_day_text());
/// # Ok::<(), attendance_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: AttendanceConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// Returns an error if `workday.yaml` is missing, or if either file
    /// contains invalid YAML or out-of-range values.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let workday = Self::load_yaml::<WorkdayRules>(&path.join("workday.yaml"))?;
        if workday.regular_hours_cap.is_sign_negative() {
            return Err(EngineError::ConfigParseError {
                path: path.join("workday.yaml").display().to_string(),
                message: "regular_hours_cap must not be negative".to_string(),
            });
        }

        let schedules_path = path.join("schedules.yaml");
        let schedules = if schedules_path.exists() {
            Self::load_yaml::<SchedulesConfig>(&schedules_path)?.schedules
        } else {
            debug!(path = %schedules_path.display(), "No schedules file, starting without schedules");
            Vec::new()
        };

        for schedule in &schedules {
            schedule
                .kind
                .validate()
                .map_err(|e| EngineError::ConfigParseError {
                    path: schedules_path.display().to_string(),
                    message: format!("schedule '{}': {}", schedule.name, e),
                })?;
        }

        Ok(Self {
            config: AttendanceConfig::new(workday, schedules),
        })
    }

    /// Builds a loader from in-memory rules, without touching the filesystem.
    pub fn from_rules(workday: WorkdayRules) -> Self {
        Self {
            config: AttendanceConfig::new(workday, Vec::new()),
        }
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the underlying configuration.
    pub fn config(&self) -> &AttendanceConfig {
        &self.config
    }

    /// Returns the workday rules.
    pub fn workday(&self) -> &WorkdayRules {
        self.config.workday()
    }

    /// Returns the schedules to register at startup.
    pub fn schedules(&self) -> &[NewSchedule] {
        self.config.schedules()
    }
}
