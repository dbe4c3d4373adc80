//! Storage of employees and attendance records.
//!
//! The [`AttendanceStore`] trait is the seam between the tracker and
//! wherever records live. [`InMemoryStore`] keeps everything in vectors and
//! is what the server and the tests use.

mod memory;

pub use memory::InMemoryStore;

use chrono::NaiveDate;

use crate::error::EngineResult;
use crate::models::{AttendanceRecord, Employee};

/// A repository of employees and their attendance records.
///
/// Every write that returns an error leaves the store unchanged.
pub trait AttendanceStore: Send + Sync {
    /// All employees in registration order.
    fn employees(&self) -> &[Employee];

    /// Looks up an employee by id.
    fn employee(&self, id: &str) -> Option<&Employee>;

    /// Registers an employee. Fails if the id is already taken.
    fn add_employee(&mut self, employee: Employee) -> EngineResult<()>;

    /// Replaces the employee with the same id.
    fn update_employee(&mut self, employee: Employee) -> EngineResult<()>;

    /// Removes an employee and every record that belongs to them.
    ///
    /// Returns the number of records removed with the employee.
    fn delete_employee(&mut self, id: &str) -> EngineResult<usize>;

    /// All records in insertion order.
    fn records(&self) -> &[AttendanceRecord];

    /// Looks up a record by id.
    fn record(&self, id: &str) -> Option<&AttendanceRecord>;

    /// Stores a new record.
    ///
    /// Fails with `DuplicateRecord` if the employee already has a record on
    /// that date.
    fn add_record(&mut self, record: AttendanceRecord) -> EngineResult<()>;

    /// Replaces the record with the same id.
    ///
    /// Moving a record onto a date the employee already has another record
    /// for fails with `DuplicateRecord`.
    fn update_record(&mut self, record: AttendanceRecord) -> EngineResult<()>;

    /// Removes a record and returns it.
    fn delete_record(&mut self, id: &str) -> EngineResult<AttendanceRecord>;

    /// Returns true if `employee_id` has a record dated `date`.
    fn has_record(&self, employee_id: &str, date: NaiveDate) -> bool {
        self.records()
            .iter()
            .any(|r| r.employee_id == employee_id && r.date == date)
    }
}
