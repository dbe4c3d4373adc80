//! Deciding which schedules fire at a given wall-clock minute.

use chrono::{Datelike, NaiveDateTime, Timelike};

use crate::calculation::weekday_index;
use crate::models::{ReportSchedule, ScheduleKind};

/// Returns true if `schedule` should fire at `now`.
///
/// A schedule fires when it is enabled, its `HH:mm` equals the minute of
/// `now`, its recurrence matches today, and it has not already run on
/// today's calendar date.
///
/// # Example
///
/// ```
/// use attendance_engine::models::{ExportFormat, ReportSchedule, ScheduleKind};
/// use attendance_engine::scheduler::is_due;
/// use chrono::{NaiveDate, NaiveTime};
///
/// let schedule = ReportSchedule {
///     id: "sched-1".to_string(),
///     name: "Daily".to_string(),
///     kind: ScheduleKind::Daily,
///     time: NaiveTime::from_hms_opt(18, 0, 0).unwrap(),
///     format: ExportFormat::Csv,
///     enabled: true,
///     last_run: None,
/// };
///
/// let date = NaiveDate::from_ymd_opt(2025, 3, 4).unwrap();
/// assert!(is_due(&schedule, date.and_hms_opt(18, 0, 42).unwrap()));
/// assert!(!is_due(&schedule, date.and_hms_opt(18, 1, 0).unwrap()));
/// ```
pub fn is_due(schedule: &ReportSchedule, now: NaiveDateTime) -> bool {
    if !schedule.enabled {
        return false;
    }

    if now.hour() != schedule.time.hour() || now.minute() != schedule.time.minute() {
        return false;
    }

    let recurrence_matches = match schedule.kind {
        ScheduleKind::Daily => true,
        ScheduleKind::Weekly { day } => weekday_index(now.date()) == usize::from(day),
        ScheduleKind::Monthly { day } => now.day() == u32::from(day),
    };
    if !recurrence_matches {
        return false;
    }

    schedule
        .last_run
        .is_none_or(|last_run| last_run.date() != now.date())
}

/// Returns the schedules that should fire at `now`, in list order.
pub fn due_schedules(schedules: &[ReportSchedule], now: NaiveDateTime) -> Vec<&ReportSchedule> {
    schedules.iter().filter(|s| is_due(s, now)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ExportFormat;
    use chrono::{NaiveDate, NaiveTime};

    fn at(date: &str, hour: u32, minute: u32) -> NaiveDateTime {
        NaiveDate::parse_from_str(date, "%Y-%m-%d")
            .unwrap()
            .and_hms_opt(hour, minute, 0)
            .unwrap()
    }

    fn schedule(kind: ScheduleKind, hour: u32, minute: u32) -> ReportSchedule {
        ReportSchedule {
            id: "sched-1".to_string(),
            name: "Report".to_string(),
            kind,
            time: NaiveTime::from_hms_opt(hour, minute, 0).unwrap(),
            format: ExportFormat::Excel,
            enabled: true,
            last_run: None,
        }
    }

    // ==========================================================================
    // SCH-001: Daily schedule fires only on its minute
    // ==========================================================================
    #[test]
    fn test_sch_001_daily_minute_match() {
        let daily = schedule(ScheduleKind::Daily, 18, 0);

        assert!(is_due(&daily, at("2025-03-04", 18, 0)));
        assert!(!is_due(&daily, at("2025-03-04", 17, 59)));
        assert!(!is_due(&daily, at("2025-03-04", 19, 0)));
    }

    // ==========================================================================
    // SCH-002: Weekly schedule uses Sunday-first weekday index
    // ==========================================================================
    #[test]
    fn test_sch_002_weekly_day() {
        // 2025-03-06 is a Thursday, index 4
        let weekly = schedule(ScheduleKind::Weekly { day: 4 }, 8, 30);

        assert!(is_due(&weekly, at("2025-03-06", 8, 30)));
        assert!(!is_due(&weekly, at("2025-03-05", 8, 30)));

        let sunday = schedule(ScheduleKind::Weekly { day: 0 }, 8, 30);
        assert!(is_due(&sunday, at("2025-03-02", 8, 30)));
    }

    // ==========================================================================
    // SCH-003: Monthly schedule uses the day of month
    // ==========================================================================
    #[test]
    fn test_sch_003_monthly_day() {
        let monthly = schedule(ScheduleKind::Monthly { day: 1 }, 7, 0);

        assert!(is_due(&monthly, at("2025-04-01", 7, 0)));
        assert!(!is_due(&monthly, at("2025-04-02", 7, 0)));

        let thirty_first = schedule(ScheduleKind::Monthly { day: 31 }, 7, 0);
        assert!(!is_due(&thirty_first, at("2025-04-30", 7, 0)));
    }

    // ==========================================================================
    // SCH-004: At most one run per calendar day
    // ==========================================================================
    #[test]
    fn test_sch_004_last_run_same_day() {
        let mut daily = schedule(ScheduleKind::Daily, 18, 0);

        daily.last_run = Some(at("2025-03-04", 18, 0));
        assert!(!is_due(&daily, at("2025-03-04", 18, 0)));

        daily.last_run = Some(at("2025-03-03", 18, 0));
        assert!(is_due(&daily, at("2025-03-04", 18, 0)));
    }

    #[test]
    fn test_disabled_never_fires() {
        let mut daily = schedule(ScheduleKind::Daily, 18, 0);
        daily.enabled = false;
        assert!(!is_due(&daily, at("2025-03-04", 18, 0)));
    }

    #[test]
    fn test_due_schedules_filters() {
        let mut other = schedule(ScheduleKind::Daily, 9, 0);
        other.id = "sched-2".to_string();
        let schedules = vec![schedule(ScheduleKind::Daily, 18, 0), other];

        let due = due_schedules(&schedules, at("2025-03-04", 9, 0));
        assert_eq!(due.len(), 1);
        assert_eq!(due[0].id, "sched-2");
    }
}
