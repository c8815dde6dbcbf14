//! Employee model.
//!
//! This module defines the Employee struct representing the HR personnel
//! record the engine reads. The record is owned externally; the engine only
//! ever consumes it, anchored on the hire date.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Represents an employee whose vacations are scheduled by the engine.
///
/// The hire date anchors the vacation period calculation: the employee's
/// first vacation period opens one year after hiring.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier for the employee.
    pub id: String,
    /// The employee's given name.
    pub first_name: String,
    /// The employee's family name.
    pub last_name: String,
    /// Contact email address.
    pub email: String,
    /// Job position or title.
    pub position: String,
    /// The date the employee was hired.
    pub hire_date: NaiveDate,
}

impl Employee {
    /// Returns the employee's display name.
    ///
    /// # Examples
    ///
    /// ```
    /// use vacation_engine::models::Employee;
    /// use chrono::NaiveDate;
    ///
    /// let employee = Employee {
    ///     id: "emp_001".to_string(),
    ///     first_name: "Maria".to_string(),
    ///     last_name: "Quispe".to_string(),
    ///     email: "maria.quispe@example.com".to_string(),
    ///     position: "Analyst".to_string(),
    ///     hire_date: NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
    /// };
    /// assert_eq!(employee.full_name(), "Maria Quispe");
    /// ```
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
