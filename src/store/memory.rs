use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::models::{AttendanceRecord, Employee};

use super::AttendanceStore;

/// Employees seeded by [`InMemoryStore::with_demo_employees`]: id, name,
/// department.
const DEMO_EMPLOYEES: [(&str, &str, &str); 4] = [
    ("EMP-001", "أحمد محمد", "الإدارة"),
    ("EMP-002", "سارة علي", "المحاسبة"),
    ("EMP-003", "محمد خالد", "المبيعات"),
    ("EMP-004", "فاطمة أحمد", "الموارد البشرية"),
];

/// An [`AttendanceStore`] held entirely in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    employees: Vec<Employee>,
    records: Vec<AttendanceRecord>,
}

impl InMemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store seeded with four demo employees and no records.
    pub fn with_demo_employees() -> Self {
        let employees = DEMO_EMPLOYEES
            .iter()
            .map(|(id, name, department)| Employee::new(*name, *department, Some(id.to_string())))
            .collect();

        Self {
            employees,
            records: Vec::new(),
        }
    }

    fn duplicate_of(&self, record: &AttendanceRecord) -> Option<&AttendanceRecord> {
        self.records.iter().find(|r| {
            r.id != record.id && r.employee_id == record.employee_id && r.date == record.date
        })
    }
}

impl AttendanceStore for InMemoryStore {
    fn employees(&self) -> &[Employee] {
        &self.employees
    }

    fn employee(&self, id: &str) -> Option<&Employee> {
        self.employees.iter().find(|e| e.id == id)
    }

    fn add_employee(&mut self, employee: Employee) -> EngineResult<()> {
        if self.employee(&employee.id).is_some() {
            return Err(EngineError::DuplicateEmployee { id: employee.id });
        }
        self.employees.push(employee);
        Ok(())
    }

    fn update_employee(&mut self, employee: Employee) -> EngineResult<()> {
        let slot = self
            .employees
            .iter_mut()
            .find(|e| e.id == employee.id)
            .ok_or_else(|| EngineError::EmployeeNotFound {
                id: employee.id.clone(),
            })?;
        *slot = employee;
        Ok(())
    }

    fn delete_employee(&mut self, id: &str) -> EngineResult<usize> {
        let position = self
            .employees
            .iter()
            .position(|e| e.id == id)
            .ok_or_else(|| EngineError::EmployeeNotFound { id: id.to_string() })?;
        self.employees.remove(position);

        let before = self.records.len();
        self.records.retain(|r| r.employee_id != id);
        let removed = before - self.records.len();

        debug!(employee_id = %id, removed_records = removed, "Employee deleted");
        Ok(removed)
    }

    fn records(&self) -> &[AttendanceRecord] {
        &self.records
    }

    fn record(&self, id: &str) -> Option<&AttendanceRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    fn add_record(&mut self, record: AttendanceRecord) -> EngineResult<()> {
        if self.duplicate_of(&record).is_some() {
            return Err(EngineError::DuplicateRecord {
                employee_id: record.employee_id,
                date: record.date,
            });
        }
        self.records.push(record);
        Ok(())
    }

    fn update_record(&mut self, record: AttendanceRecord) -> EngineResult<()> {
        if self.record(&record.id).is_none() {
            return Err(EngineError::RecordNotFound { id: record.id });
        }
        if self.duplicate_of(&record).is_some() {
            return Err(EngineError::DuplicateRecord {
                employee_id: record.employee_id,
                date: record.date,
            });
        }

        if let Some(slot) = self.records.iter_mut().find(|r| r.id == record.id) {
            *slot = record;
        }
        Ok(())
    }

    fn delete_record(&mut self, id: &str) -> EngineResult<AttendanceRecord> {
        let position = self
            .records
            .iter()
            .position(|r| r.id == id)
            .ok_or_else(|| EngineError::RecordNotFound { id: id.to_string() })?;
        Ok(self.records.remove(position))
    }
}
