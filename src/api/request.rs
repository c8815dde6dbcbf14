//! Request types for the Vacation Scheduling Engine API.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;
use uuid::Uuid;

use crate::models::Employee;
use crate::rules::reschedule::Replacement;

/// Body of `POST /employees`.
#[derive(Debug, Clone, Deserialize)]
pub struct RegisterEmployeeRequest {
    /// Unique employee id.
    pub id: String,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Contact email.
    pub email: String,
    /// Job position.
    pub position: String,
    /// Hire date, anchoring the vacation period.
    pub hire_date: NaiveDate,
}

impl From<RegisterEmployeeRequest> for Employee {
    fn from(request: RegisterEmployeeRequest) -> Self {
        Employee {
            id: request.id,
            first_name: request.first_name,
            last_name: request.last_name,
            email: request.email,
            position: request.position,
            hire_date: request.hire_date,
        }
    }
}

/// Body of `POST /allotments`.
#[derive(Debug, Clone, Deserialize)]
pub struct OpenAllotmentRequest {
    /// The employee to open (or fetch) the allotment for.
    pub employee_id: String,
}

/// Body of `POST /allotments/{id}/validations`.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct ValidateRangeRequest {
    /// Candidate start date.
    pub start_date: NaiveDate,
    /// Candidate end date (normalized under the Friday rule server-side).
    pub end_date: NaiveDate,
}

/// Body of `POST /allotments/{id}/ranges`.
#[derive(Debug, Clone, Deserialize)]
pub struct BookRangeRequest {
    /// First vacation day.
    pub start_date: NaiveDate,
    /// Last vacation day (normalized under the Friday rule server-side).
    pub end_date: NaiveDate,
    /// Marks the booking as drawn against advanced days.
    #[serde(default)]
    pub is_advance: bool,
    /// Optional external document reference.
    #[serde(default)]
    pub external_document_id: Option<String>,
}

/// One replacement interval in a preserve-count reschedule.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct ReplacementRequest {
    /// The range being replaced.
    pub source_id: Uuid,
    /// Replacement start date.
    pub start_date: NaiveDate,
    /// Replacement end date.
    pub end_date: NaiveDate,
}

impl From<ReplacementRequest> for Replacement {
    fn from(request: ReplacementRequest) -> Self {
        Replacement {
            source_id: request.source_id,
            start_date: request.start_date,
            end_date: request.end_date,
        }
    }
}

/// Body of `POST /allotments/{id}/reschedules`, tagged by mode.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum RescheduleRequest {
    /// Fold the selected ranges into one new range.
    Merge {
        /// The ranges to retire.
        source_ids: Vec<Uuid>,
        /// New range start.
        start_date: NaiveDate,
        /// New range end (normalized under the Friday rule server-side).
        end_date: NaiveDate,
    },
    /// Replace each selected range with one new range.
    PreserveCount {
        /// Replacement intervals, one per source range.
        replacements: Vec<ReplacementRequest>,
    },
}

/// Body of `POST /allotments/{id}/advances`.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct AdvanceRequest {
    /// Days to borrow; may be fractional (e.g. "2.5").
    pub amount: Decimal,
}
