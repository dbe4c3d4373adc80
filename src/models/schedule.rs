//! Report schedule models.
//!
//! A schedule pairs a recurrence (`daily`, `weekly` on a weekday, `monthly` on
//! a day of the month) with an export format and a wall-clock firing time.

use chrono::{NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use super::clock::hhmm;
use crate::error::{EngineError, EngineResult};

/// The file format a scheduled report is exported as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExportFormat {
    /// Spreadsheet workbook.
    Excel,
    /// PDF document.
    Pdf,
    /// Delimited text.
    Csv,
}

impl ExportFormat {
    /// The file extension used for exports in this format.
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Excel => "xlsx",
            ExportFormat::Pdf => "pdf",
            ExportFormat::Csv => "csv",
        }
    }
}

/// How often a schedule fires.
///
/// Weekly days are numbered from Sunday = 0 to Saturday = 6.
///
/// # Example
///
/// ```
/// use attendance_engine::models::ScheduleKind;
///
/// let kind: ScheduleKind = serde_json::from_str(r#"{"type":"weekly","day":4}"#).unwrap();
/// assert_eq!(kind, ScheduleKind::Weekly { day: 4 });
/// assert!(kind.validate().is_ok());
/// assert!(ScheduleKind::Monthly { day: 32 }.validate().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ScheduleKind {
    /// Every day.
    Daily,
    /// Once a week on `day` (Sunday = 0).
    Weekly {
        /// The weekday index.
        day: u8,
    },
    /// Once a month on day-of-month `day`.
    Monthly {
        /// The day of the month, 1 through 31.
        day: u8,
    },
}

impl ScheduleKind {
    /// Checks that the day field is in range for the recurrence.
    pub fn validate(&self) -> EngineResult<()> {
        match *self {
            ScheduleKind::Daily => Ok(()),
            ScheduleKind::Weekly { day } if day <= 6 => Ok(()),
            ScheduleKind::Weekly { day } => Err(EngineError::InvalidSchedule {
                message: format!("weekly day {} is outside 0..=6", day),
            }),
            ScheduleKind::Monthly { day } if (1..=31).contains(&day) => Ok(()),
            ScheduleKind::Monthly { day } => Err(EngineError::InvalidSchedule {
                message: format!("monthly day {} is outside 1..=31", day),
            }),
        }
    }
}

/// A recurring report export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportSchedule {
    /// Unique identifier for the schedule.
    pub id: String,
    /// Display name.
    pub name: String,
    /// The recurrence.
    #[serde(flatten)]
    pub kind: ScheduleKind,
    /// The wall-clock minute the schedule fires at.
    #[serde(with = "hhmm")]
    pub time: NaiveTime,
    /// The export format.
    pub format: ExportFormat,
    /// Disabled schedules never fire.
    pub enabled: bool,
    /// When the schedule last fired.
    #[serde(default)]
    pub last_run: Option<NaiveDateTime>,
}

/// A schedule definition before it is assigned an id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewSchedule {
    /// Display name.
    pub name: String,
    /// The recurrence.
    #[serde(flatten)]
    pub kind: ScheduleKind,
    /// The wall-clock minute the schedule fires at.
    #[serde(with = "hhmm")]
    pub time: NaiveTime,
    /// The export format.
    pub format: ExportFormat,
    /// Whether the schedule starts enabled.
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

fn default_enabled() -> bool {
    true
}

/// Changes to an existing schedule. Fields left as `None` keep their value.
///
/// # Example
///
/// ```
/// use attendance_engine::models::ScheduleUpdate;
///
/// let update: ScheduleUpdate = serde_json::from_str(r#"{"enabled":false}"#).unwrap();
/// assert_eq!(update.enabled, Some(false));
/// assert!(update.time.is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleUpdate {
    /// New display name.
    pub name: Option<String>,
    /// New recurrence, e.g. `{"type":"weekly","day":3}`.
    pub kind: Option<ScheduleKind>,
    /// New firing time as `HH:mm`.
    pub time: Option<String>,
    /// New export format.
    pub format: Option<ExportFormat>,
    /// Enable or disable the schedule.
    pub enabled: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schedule_deserialization() {
        let json = r#"{
            "id": "sched-1",
            "name": "Monthly summary",
            "type": "monthly",
            "day": 1,
            "time": "08:30",
            "format": "pdf",
            "enabled": true
        }"#;

        let schedule: ReportSchedule = serde_json::from_str(json).unwrap();
        assert_eq!(schedule.kind, ScheduleKind::Monthly { day: 1 });
        assert_eq!(schedule.time, NaiveTime::from_hms_opt(8, 30, 0).unwrap());
        assert_eq!(schedule.format, ExportFormat::Pdf);
        assert!(schedule.last_run.is_none());
    }

    #[test]
    fn test_daily_schedule_serialization() {
        let schedule = ReportSchedule {
            id: "sched-2".to_string(),
            name: "Daily".to_string(),
            kind: ScheduleKind::Daily,
            time: NaiveTime::from_hms_opt(18, 0, 0).unwrap(),
            format: ExportFormat::Csv,
            enabled: false,
            last_run: None,
        };
        let json = serde_json::to_value(&schedule).unwrap();
        assert_eq!(json["type"], "daily");
        assert_eq!(json["time"], "18:00");
        assert_eq!(json["format"], "csv");
        assert!(json.get("day").is_none());
    }

    #[test]
    fn test_new_schedule_defaults_enabled() {
        let json = r#"{"name":"w","type":"weekly","day":0,"time":"07:00","format":"excel"}"#;
        let schedule: NewSchedule = serde_json::from_str(json).unwrap();
        assert!(schedule.enabled);
        assert_eq!(schedule.kind, ScheduleKind::Weekly { day: 0 });
    }

    #[test]
    fn test_validate_weekly_range() {
        assert!(ScheduleKind::Weekly { day: 6 }.validate().is_ok());
        assert!(matches!(
            ScheduleKind::Weekly { day: 7 }.validate(),
            Err(EngineError::InvalidSchedule { .. })
        ));
        assert!(ScheduleKind::Monthly { day: 0 }.validate().is_err());
    }

    #[test]
    fn test_export_extensions() {
        assert_eq!(ExportFormat::Excel.extension(), "xlsx");
        assert_eq!(ExportFormat::Pdf.extension(), "pdf");
        assert_eq!(ExportFormat::Csv.extension(), "csv");
    }

    #[test]
    fn test_schedule_update_with_kind() {
        let json = r#"{"kind":{"type":"monthly","day":15},"time":"09:15"}"#;
        let update: ScheduleUpdate = serde_json::from_str(json).unwrap();
        assert_eq!(update.kind, Some(ScheduleKind::Monthly { day: 15 }));
        assert_eq!(update.time.as_deref(), Some("09:15"));
        assert!(update.name.is_none());
    }
}
