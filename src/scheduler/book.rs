//! The set of configured report schedules.

use chrono::NaiveDateTime;
use uuid::Uuid;

use crate::error::{EngineError, EngineResult};
use crate::models::{NewSchedule, ReportSchedule, ScheduleUpdate, parse_clock};

/// Holds report schedules in creation order.
#[derive(Debug, Clone, Default)]
pub struct ScheduleBook {
    schedules: Vec<ReportSchedule>,
}

impl ScheduleBook {
    /// Creates an empty book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a book from a list of definitions, e.g. the startup config.
    pub fn with_schedules(definitions: impl IntoIterator<Item = NewSchedule>) -> EngineResult<Self> {
        let mut book = Self::new();
        for definition in definitions {
            book.add(definition)?;
        }
        Ok(book)
    }

    /// All schedules.
    pub fn list(&self) -> &[ReportSchedule] {
        &self.schedules
    }

    /// Looks up a schedule by id.
    pub fn get(&self, id: &str) -> Option<&ReportSchedule> {
        self.schedules.iter().find(|s| s.id == id)
    }

    /// Adds a schedule with a fresh `sched-` id and no last run.
    pub fn add(&mut self, definition: NewSchedule) -> EngineResult<ReportSchedule> {
        definition.kind.validate()?;
        if definition.name.trim().is_empty() {
            return Err(EngineError::MissingField {
                field: "name".to_string(),
            });
        }

        let schedule = ReportSchedule {
            id: format!("sched-{}", Uuid::new_v4().simple()),
            name: definition.name,
            kind: definition.kind,
            time: definition.time,
            format: definition.format,
            enabled: definition.enabled,
            last_run: None,
        };
        self.schedules.push(schedule.clone());
        Ok(schedule)
    }

    /// Applies `update` to the schedule `id`.
    ///
    /// Nothing changes if any field of the update is invalid.
    pub fn update(&mut self, id: &str, update: ScheduleUpdate) -> EngineResult<ReportSchedule> {
        let time = update.time.as_deref().map(parse_clock).transpose()?;
        if let Some(kind) = &update.kind {
            kind.validate()?;
        }

        let schedule = self.get_mut(id)?;
        if let Some(name) = update.name {
            schedule.name = name;
        }
        if let Some(kind) = update.kind {
            schedule.kind = kind;
        }
        if let Some(time) = time {
            schedule.time = time;
        }
        if let Some(format) = update.format {
            schedule.format = format;
        }
        if let Some(enabled) = update.enabled {
            schedule.enabled = enabled;
        }
        Ok(schedule.clone())
    }

    /// Removes the schedule `id` and returns it.
    pub fn delete(&mut self, id: &str) -> EngineResult<ReportSchedule> {
        let position = self
            .schedules
            .iter()
            .position(|s| s.id == id)
            .ok_or_else(|| EngineError::ScheduleNotFound { id: id.to_string() })?;
        Ok(self.schedules.remove(position))
    }

    /// Records that the schedule `id` ran at `now`.
    pub fn mark_run(&mut self, id: &str, now: NaiveDateTime) -> EngineResult<()> {
        self.get_mut(id)?.last_run = Some(now);
        Ok(())
    }

    fn get_mut(&mut self, id: &str) -> EngineResult<&mut ReportSchedule> {
        self.schedules
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or_else(|| EngineError::ScheduleNotFound { id: id.to_string() })
    }
}
