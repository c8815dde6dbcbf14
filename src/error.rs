//! Error types for the Vacation Scheduling Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while validating, booking,
//! rescheduling or advancing vacation days.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use thiserror::Error;
use uuid::Uuid;

use crate::rules::validator::ValidationError;

/// The main error type for the Vacation Scheduling Engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application. The variants
/// fall into four kinds: validation errors (`InvalidRequest`), capacity
/// errors (`CapacityExceeded`, `InvalidAdvanceAmount`), state errors
/// (`RangeNotActive`, `RangeAlreadyStarted`, the not-found variants) and
/// store/configuration errors. None of them is fatal to the host process.
///
/// # Example
///
/// ```
/// use vacation_engine::error::EngineError;
///
/// let error = EngineError::PolicyNotFound {
///     path: "/missing/policy.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Policy file not found: /missing/policy.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Policy configuration file was not found at the specified path.
    #[error("Policy file not found: {path}")]
    PolicyNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Policy configuration file could not be parsed.
    #[error("Failed to parse policy file '{path}': {message}")]
    PolicyParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A candidate date range failed one or more validation rules.
    #[error("Vacation request rejected: {}", summarize(.errors))]
    InvalidRequest {
        /// The individual rule violations, in check order.
        errors: Vec<ValidationError>,
    },

    /// A reschedule or advance request exceeds the available day budget.
    #[error("Requested {requested} days but only {available} are available from {source_label}")]
    CapacityExceeded {
        /// The number of days requested.
        requested: Decimal,
        /// The number of days actually available.
        available: Decimal,
        /// What the days were drawn from (e.g. "the selected ranges").
        source_label: String,
    },

    /// An advance request carried a zero or negative amount.
    #[error("Invalid advance amount: {amount}")]
    InvalidAdvanceAmount {
        /// The rejected amount.
        amount: Decimal,
    },

    /// A reschedule was attempted with no source ranges selected.
    #[error("Select at least one range to reschedule")]
    EmptySelection,

    /// No vacation range exists with the given id.
    #[error("Vacation range not found: {range_id}")]
    RangeNotFound {
        /// The id that was looked up.
        range_id: Uuid,
    },

    /// No allotment exists with the given id.
    #[error("Allotment not found: {allotment_id}")]
    AllotmentNotFound {
        /// The id that was looked up.
        allotment_id: Uuid,
    },

    /// No employee exists with the given id.
    #[error("Employee not found: {employee_id}")]
    EmployeeNotFound {
        /// The id that was looked up.
        employee_id: String,
    },

    /// The operation requires an active range, but the range has already
    /// been rescheduled.
    #[error("Range {range_id} is not active")]
    RangeNotActive {
        /// The id of the offending range.
        range_id: Uuid,
    },

    /// The range's start date is not in the future, so it can no longer
    /// be rescheduled.
    #[error("Range {range_id} started on {start_date} and can no longer be rescheduled")]
    RangeAlreadyStarted {
        /// The id of the offending range.
        range_id: Uuid,
        /// The range's start date.
        start_date: NaiveDate,
    },

    /// The external persistence call failed. The engine applies no
    /// in-memory changes past the failed write.
    #[error("Store operation failed: {message}")]
    StoreError {
        /// A description of the store failure.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

fn summarize(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
