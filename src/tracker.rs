//! The attendance tracker: validated writes over an [`AttendanceStore`].
//!
//! The tracker owns the store and the workday rules. It checks the
//! employee and the one-record-per-day rule before a record is assembled,
//! and keeps ids and creation times stable across edits.

use tracing::{info, warn};

use crate::calculation::{AttendanceEntry, assemble_record};
use crate::config::WorkdayRules;
use crate::error::{EngineError, EngineResult};
use crate::models::{AttendanceRecord, Employee};
use crate::store::AttendanceStore;

/// Records attendance and manages employees on top of a store.
///
/// # Example
///
/// ```
/// use attendance_engine::calculation::{Attendance, AttendanceEntry};
/// use attendance_engine::config::WorkdayRules;
/// use attendance_engine::store::InMemoryStore;
/// use attendance_engine::tracker::AttendanceTracker;
/// use chrono::NaiveDate;
///
/// let mut tracker = AttendanceTracker::new(InMemoryStore::with_demo_employees(), WorkdayRules::default());
///
/// let entry = AttendanceEntry {
///     employee_id: "EMP-001".to_string(),
///     date: NaiveDate::from_ymd_opt(2025, 3, 4).unwrap(),
///     notes: String::new(),
///     attendance: Attendance::Present {
///         checkin: Some("09:00".to_string()),
///         checkout: None,
///     },
/// };
///
/// let record = tracker.record_attendance(entry.clone()).unwrap();
/// assert_eq!(record.checkout.to_string(), "17:00");
/// assert!(tracker.record_attendance(entry).is_err());
/// ```
#[derive(Debug)]
pub struct AttendanceTracker<S: AttendanceStore> {
    store: S,
    rules: WorkdayRules,
}

impl<S: AttendanceStore> AttendanceTracker<S> {
    /// Creates a tracker over `store` using `rules` for every calculation.
    pub fn new(store: S, rules: WorkdayRules) -> Self {
        Self { store, rules }
    }

    /// The workday rules in force.
    pub fn rules(&self) -> &WorkdayRules {
        &self.rules
    }

    /// Read access to the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// All registered employees.
    pub fn employees(&self) -> &[Employee] {
        self.store.employees()
    }

    /// All attendance records.
    pub fn records(&self) -> &[AttendanceRecord] {
        self.store.records()
    }

    /// Records one day of attendance.
    ///
    /// A present entry with a checkin but no checkout is completed with the
    /// end of the workday.
    ///
    /// # Errors
    ///
    /// - [`EngineError::MissingField`] if the employee id is blank
    /// - [`EngineError::EmployeeNotFound`] if the employee is not registered
    /// - [`EngineError::DuplicateRecord`] if the employee already has a record that day
    /// - any assembly error from [`assemble_record`]
    pub fn record_attendance(&mut self, entry: AttendanceEntry) -> EngineResult<AttendanceRecord> {
        self.check_employee(&entry.employee_id)?;

        if self.store.has_record(&entry.employee_id, entry.date) {
            warn!(
                employee_id = %entry.employee_id,
                date = %entry.date,
                "Rejected duplicate attendance"
            );
            return Err(EngineError::DuplicateRecord {
                employee_id: entry.employee_id,
                date: entry.date,
            });
        }

        let record = assemble_record(entry.with_default_checkout(&self.rules), &self.rules)?;
        self.store.add_record(record.clone())?;

        info!(
            record_id = %record.id,
            employee_id = %record.employee_id,
            date = %record.date,
            status = %record.status,
            total_hours = %record.total_hours,
            "Attendance recorded"
        );

        Ok(record)
    }

    /// Replaces the record `id` with a freshly assembled one.
    ///
    /// The record keeps its id and creation time; hours, day name and status
    /// are recomputed from the new entry.
    pub fn update_record(&mut self, id: &str, entry: AttendanceEntry) -> EngineResult<AttendanceRecord> {
        let existing = self
            .store
            .record(id)
            .cloned()
            .ok_or_else(|| EngineError::RecordNotFound { id: id.to_string() })?;
        self.check_employee(&entry.employee_id)?;

        let mut record = assemble_record(entry.with_default_checkout(&self.rules), &self.rules)?;
        record.id = existing.id;
        record.created_at = existing.created_at;
        self.store.update_record(record.clone())?;

        info!(record_id = %record.id, date = %record.date, "Attendance updated");
        Ok(record)
    }

    /// Deletes the record `id`.
    pub fn delete_record(&mut self, id: &str) -> EngineResult<AttendanceRecord> {
        let record = self.store.delete_record(id)?;
        info!(record_id = %id, "Attendance deleted");
        Ok(record)
    }

    /// Registers a new employee.
    ///
    /// A blank department falls back to the default department and a missing
    /// id is generated.
    pub fn register_employee(
        &mut self,
        name: &str,
        department: &str,
        id: Option<String>,
    ) -> EngineResult<Employee> {
        if name.trim().is_empty() {
            return Err(EngineError::MissingField {
                field: "name".to_string(),
            });
        }

        let employee = Employee::new(name.trim(), department.trim(), id);
        self.store.add_employee(employee.clone())?;

        info!(employee_id = %employee.id, department = %employee.department, "Employee registered");
        Ok(employee)
    }

    /// Renames an employee or moves them to another department.
    pub fn update_employee(&mut self, id: &str, name: &str, department: &str) -> EngineResult<Employee> {
        if name.trim().is_empty() {
            return Err(EngineError::MissingField {
                field: "name".to_string(),
            });
        }

        let existing = self
            .store
            .employee(id)
            .ok_or_else(|| EngineError::EmployeeNotFound { id: id.to_string() })?;
        let mut employee = Employee::new(name.trim(), department.trim(), Some(existing.id.clone()));
        employee.created_at = existing.created_at;
        self.store.update_employee(employee.clone())?;

        info!(employee_id = %employee.id, "Employee updated");
        Ok(employee)
    }

    /// Deletes an employee together with all of their records.
    ///
    /// Returns the number of records removed.
    pub fn delete_employee(&mut self, id: &str) -> EngineResult<usize> {
        let removed = self.store.delete_employee(id)?;
        info!(employee_id = %id, removed_records = removed, "Employee deleted");
        Ok(removed)
    }

    fn check_employee(&self, employee_id: &str) -> EngineResult<()> {
        if employee_id.trim().is_empty() {
            return Err(EngineError::MissingField {
                field: "employee_id".to_string(),
            });
        }
        if self.store.employee(employee_id).is_none() {
            warn!(employee_id = %employee_id, "Attendance for unknown employee");
            return Err(EngineError::EmployeeNotFound {
                id: employee_id.to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::Attendance;
    use crate::models::AttendanceStatus;
    use crate::store::InMemoryStore;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn tracker() -> AttendanceTracker<InMemoryStore> {
        AttendanceTracker::new(InMemoryStore::with_demo_employees(), WorkdayRules::default())
    }

    fn present(employee_id: &str, date: &str, checkin: &str, checkout: &str) -> AttendanceEntry {
        AttendanceEntry {
            employee_id: employee_id.to_string(),
            date: make_date(date),
            notes: String::new(),
            attendance: Attendance::Present {
                checkin: Some(checkin.to_string()),
                checkout: Some(checkout.to_string()),
            },
        }
    }

    fn absent(employee_id: &str, date: &str) -> AttendanceEntry {
        AttendanceEntry {
            employee_id: employee_id.to_string(),
            date: make_date(date),
            notes: String::new(),
            attendance: Attendance::Absent,
        }
    }

    // ==========================================================================
    // TRK-001: Recording a present day stores the computed hours
    // ==========================================================================
    #[test]
    fn test_trk_001_record_present() {
        let mut tracker = tracker();

        let record = tracker
            .record_attendance(present("EMP-001", "2025-03-04", "09:00", "19:30"))
            .unwrap();

        assert_eq!(record.regular_hours, dec("8"));
        assert_eq!(record.overtime_hours, dec("2.5"));
        assert_eq!(record.total_hours, dec("10.5"));
        assert_eq!(tracker.records().len(), 1);
    }

    // ==========================================================================
    // TRK-002: Duplicate day is rejected and the store is untouched
    // ==========================================================================
    #[test]
    fn test_trk_002_duplicate_rejected() {
        let mut tracker = tracker();
        tracker
            .record_attendance(present("EMP-001", "2025-03-04", "09:00", "17:00"))
            .unwrap();
        let before = tracker.records().to_vec();

        let result = tracker.record_attendance(absent("EMP-001", "2025-03-04"));

        assert!(matches!(result, Err(EngineError::DuplicateRecord { .. })));
        assert_eq!(tracker.records(), before.as_slice());
    }

    // ==========================================================================
    // TRK-003: Missing and unknown employees
    // ==========================================================================
    #[test]
    fn test_trk_003_employee_checks() {
        let mut tracker = tracker();

        let blank = tracker.record_attendance(absent("  ", "2025-03-04"));
        assert!(matches!(blank, Err(EngineError::MissingField { ref field }) if field == "employee_id"));

        let unknown = tracker.record_attendance(absent("EMP-404", "2025-03-04"));
        assert!(matches!(unknown, Err(EngineError::EmployeeNotFound { .. })));

        assert!(tracker.records().is_empty());
    }

    // ==========================================================================
    // TRK-004: Engine rejection leaves nothing behind
    // ==========================================================================
    #[test]
    fn test_trk_004_checkout_before_checkin() {
        let mut tracker = tracker();

        let result = tracker.record_attendance(present("EMP-002", "2025-03-04", "14:00", "13:00"));

        assert!(matches!(result, Err(EngineError::CheckoutBeforeCheckin)));
        assert!(tracker.records().is_empty());
    }

    // ==========================================================================
    // TRK-005: Missing checkout defaults to end of workday
    // ==========================================================================
    #[test]
    fn test_trk_005_default_checkout() {
        let mut tracker = tracker();
        let entry = AttendanceEntry {
            attendance: Attendance::Present {
                checkin: Some("10:00".to_string()),
                checkout: None,
            },
            ..present("EMP-003", "2025-03-04", "", "")
        };

        let record = tracker.record_attendance(entry).unwrap();

        assert_eq!(record.checkout.to_string(), "17:00");
        assert_eq!(record.regular_hours, dec("7"));
    }

    #[test]
    fn test_absent_on_friday() {
        let mut tracker = tracker();
        let record = tracker.record_attendance(absent("EMP-004", "2025-03-07")).unwrap();
        assert_eq!(record.status, AttendanceStatus::Friday);
        assert_eq!(record.total_hours, Decimal::ZERO);
    }

    // ==========================================================================
    // TRK-006: Updating a record keeps its identity
    // ==========================================================================
    #[test]
    fn test_trk_006_update_record() {
        let mut tracker = tracker();
        let original = tracker
            .record_attendance(present("EMP-001", "2025-03-04", "09:00", "17:00"))
            .unwrap();

        let updated = tracker
            .update_record(&original.id, present("EMP-001", "2025-03-04", "09:00", "18:00"))
            .unwrap();

        assert_eq!(updated.id, original.id);
        assert_eq!(updated.created_at, original.created_at);
        assert_eq!(updated.overtime_hours, dec("1"));
        assert_eq!(tracker.records().len(), 1);

        let missing = tracker.update_record("REC-404", absent("EMP-001", "2025-03-05"));
        assert!(matches!(missing, Err(EngineError::RecordNotFound { .. })));
    }

    // ==========================================================================
    // TRK-007: Employee registration, update and cascading delete
    // ==========================================================================
    #[test]
    fn test_trk_007_employee_lifecycle() {
        let mut tracker = tracker();

        let employee = tracker.register_employee("Omar", "", None).unwrap();
        assert_eq!(employee.department, "عام");
        assert!(tracker.register_employee("   ", "Sales", None).is_err());

        let moved = tracker.update_employee(&employee.id, "Omar", "Sales").unwrap();
        assert_eq!(moved.department, "Sales");
        assert_eq!(moved.created_at, employee.created_at);

        tracker.record_attendance(absent(&employee.id, "2025-03-04")).unwrap();
        tracker.record_attendance(absent(&employee.id, "2025-03-05")).unwrap();
        tracker.record_attendance(absent("EMP-001", "2025-03-05")).unwrap();

        assert_eq!(tracker.delete_employee(&employee.id).unwrap(), 2);
        assert_eq!(tracker.records().len(), 1);
        assert_eq!(tracker.employees().len(), 4);
    }

    #[test]
    fn test_delete_record() {
        let mut tracker = tracker();
        let record = tracker.record_attendance(absent("EMP-001", "2025-03-04")).unwrap();
        tracker.delete_record(&record.id).unwrap();
        assert!(tracker.records().is_empty());
        assert!(tracker.delete_record(&record.id).is_err());
    }
}
