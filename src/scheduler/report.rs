//! Report payloads produced by schedules and the sinks that receive them.

use chrono::NaiveDate;
use serde::Serialize;
use tracing::info;

use crate::calculation::{daily_records, monthly_summary};
use crate::error::EngineResult;
use crate::models::{
    AttendanceRecord, Employee, ExportFormat, MonthKey, MonthlyStats, ReportSchedule, ScheduleKind,
};

/// The data a scheduled report exports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "report", rename_all = "snake_case")]
pub enum ScheduledReport {
    /// Every record of one date, ordered by checkin.
    Daily {
        /// The date covered.
        date: NaiveDate,
        /// The records of that date.
        records: Vec<AttendanceRecord>,
    },
    /// Per-employee totals for one month, one row per employee.
    Monthly {
        /// The month covered.
        month: MonthKey,
        /// The summary rows.
        summary: Vec<MonthlyStats>,
    },
}

impl ScheduledReport {
    /// Number of rows in the report.
    pub fn len(&self) -> usize {
        match self {
            ScheduledReport::Daily { records, .. } => records.len(),
            ScheduledReport::Monthly { summary, .. } => summary.len(),
        }
    }

    /// Returns true if the report has no rows.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The export file name for this report in `format`.
    pub fn file_name(&self, format: ExportFormat) -> String {
        match self {
            ScheduledReport::Daily { date, .. } => {
                format!("تقرير-يومي-{}.{}", date, format.extension())
            }
            ScheduledReport::Monthly { month, .. } => {
                format!("تقرير-شهري-{}.{}", month, format.extension())
            }
        }
    }
}

/// Builds the report `schedule` produces on `today`.
///
/// Daily and weekly schedules export the records of `today`. Monthly
/// schedules export the summary of the month containing `today`, including
/// employees without records.
pub fn build_report(
    schedule: &ReportSchedule,
    employees: &[Employee],
    records: &[AttendanceRecord],
    today: NaiveDate,
) -> ScheduledReport {
    match schedule.kind {
        ScheduleKind::Daily | ScheduleKind::Weekly { .. } => ScheduledReport::Daily {
            date: today,
            records: daily_records(records, today),
        },
        ScheduleKind::Monthly { .. } => {
            let month = MonthKey::of(today);
            ScheduledReport::Monthly {
                month,
                summary: monthly_summary(employees, records, month),
            }
        }
    }
}

/// Receives reports produced by due schedules.
///
/// Implementations render and deliver the report in the requested format.
/// Returning an error leaves the schedule eligible to run again.
pub trait ReportSink: Send + Sync {
    /// Delivers `report` for `schedule` in `format`.
    fn deliver(
        &self,
        schedule: &ReportSchedule,
        format: ExportFormat,
        report: &ScheduledReport,
    ) -> EngineResult<()>;
}

/// A sink that logs each delivered report.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingSink;

impl ReportSink for LoggingSink {
    fn deliver(
        &self,
        schedule: &ReportSchedule,
        format: ExportFormat,
        report: &ScheduledReport,
    ) -> EngineResult<()> {
        info!(
            schedule_id = %schedule.id,
            schedule_name = %schedule.name,
            format = format.extension(),
            file_name = %report.file_name(format),
            rows = report.len(),
            "Scheduled report ready"
        );
        Ok(())
    }
}
