//! Employee model.
//!
//! Employees own zero or more attendance records through a weak id reference
//! held on the record side.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Department assigned when an employee is registered without one.
pub const DEFAULT_DEPARTMENT: &str = "عام";

/// Represents an employee whose attendance is tracked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    /// Unique identifier for the employee.
    pub id: String,
    /// The employee's display name.
    pub name: String,
    /// The department the employee belongs to.
    pub department: String,
    /// When the employee was registered.
    pub created_at: DateTime<Utc>,
}

impl Employee {
    /// Registers a new employee.
    ///
    /// An empty department falls back to [`DEFAULT_DEPARTMENT`] and a missing
    /// id is generated with the `EMP` prefix.
    ///
    /// # Examples
    ///
    /// ```
    /// use attendance_engine::models::{Employee, DEFAULT_DEPARTMENT};
    ///
    /// let employee = Employee::new("Sara", "", None);
    /// assert!(employee.id.starts_with("EMP-"));
    /// assert_eq!(employee.department, DEFAULT_DEPARTMENT);
    ///
    /// let custom = Employee::new("Omar", "Sales", Some("EMP-100".to_string()));
    /// assert_eq!(custom.id, "EMP-100");
    /// ```
    pub fn new(name: impl Into<String>, department: impl Into<String>, id: Option<String>) -> Self {
        let department = department.into();
        let department = if department.trim().is_empty() {
            DEFAULT_DEPARTMENT.to_string()
        } else {
            department
        };

        Self {
            id: id
                .filter(|id| !id.trim().is_empty())
                .unwrap_or_else(|| generate_id("EMP")),
            name: name.into(),
            department,
            created_at: Utc::now(),
        }
    }
}

/// Generates an opaque identifier of the form `PREFIX-<uuid>`.
pub fn generate_id(prefix: &str) -> String {
    format!("{}-{}", prefix, Uuid::new_v4().simple().to_string().to_uppercase())
}
