//! Scheduled report exports.
//!
//! Schedules are evaluated against an explicit wall-clock time, so the
//! decision logic is testable without waiting on a timer. The background
//! task started by [`spawn_scheduler`] simply feeds it the local time once a
//! minute.

mod book;
mod evaluator;
mod report;

pub use book::ScheduleBook;
pub use evaluator::{due_schedules, is_due};
pub use report::{LoggingSink, ReportSink, ScheduledReport, build_report};

use std::sync::Arc;
use std::time::Duration;

use chrono::{Local, NaiveDateTime};
use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tracing::{error, info};

use crate::store::AttendanceStore;
use crate::tracker::AttendanceTracker;

/// How often the background task checks for due schedules.
pub const CHECK_INTERVAL: Duration = Duration::from_secs(60);

/// Runs every schedule due at `now` and returns the ids that ran.
///
/// Each due schedule builds its report from `store` and hands it to `sink`.
/// A successful delivery stamps the schedule's last run with `now`; a failed
/// one is logged and leaves the schedule unmarked.
pub fn run_due<S: AttendanceStore>(
    book: &mut ScheduleBook,
    store: &S,
    sink: &dyn ReportSink,
    now: NaiveDateTime,
) -> Vec<String> {
    let due: Vec<_> = due_schedules(book.list(), now).into_iter().cloned().collect();
    let mut ran = Vec::with_capacity(due.len());

    for schedule in due {
        let report = build_report(&schedule, store.employees(), store.records(), now.date());

        if let Err(e) = sink.deliver(&schedule, schedule.format, &report) {
            error!(schedule_id = %schedule.id, error = %e, "Scheduled report failed");
            continue;
        }

        if let Err(e) = book.mark_run(&schedule.id, now) {
            error!(schedule_id = %schedule.id, error = %e, "Could not record schedule run");
            continue;
        }

        info!(schedule_id = %schedule.id, rows = report.len(), "Scheduled report delivered");
        ran.push(schedule.id);
    }

    ran
}

/// Runs due schedules against shared state at `now`.
pub async fn run_tick<S: AttendanceStore>(
    book: &RwLock<ScheduleBook>,
    tracker: &RwLock<AttendanceTracker<S>>,
    sink: &dyn ReportSink,
    now: NaiveDateTime,
) -> Vec<String> {
    let tracker = tracker.read().await;
    let mut book = book.write().await;
    run_due(&mut book, tracker.store(), sink, now)
}

/// Starts the background task that checks schedules every minute.
pub fn spawn_scheduler<S: AttendanceStore + 'static>(
    book: Arc<RwLock<ScheduleBook>>,
    tracker: Arc<RwLock<AttendanceTracker<S>>>,
    sink: Arc<dyn ReportSink>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        info!("Starting report scheduler");

        let mut interval = tokio::time::interval(CHECK_INTERVAL);
        loop {
            interval.tick().await;
            let now = Local::now().naive_local();
            run_tick(&book, &tracker, sink.as_ref(), now).await;
        }
    })
}
