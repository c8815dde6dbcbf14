//! Response types for the Vacation Scheduling Engine API.
//!
//! This module defines the success payloads, the error response structure
//! and the mapping from engine errors to HTTP status codes.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::models::{Allotment, RemainingDays, VacationRange};
use crate::rules::advance::AdvanceSummary;
use crate::rules::validator::RangeValidation;

/// An allotment together with its derived remaining-day view.
#[derive(Debug, Clone, Serialize)]
pub struct AllotmentSummary {
    /// The allotment record.
    #[serde(flatten)]
    pub allotment: Allotment,
    /// Days remaining per pool, clamped at zero.
    pub remaining: RemainingDays,
}

impl From<Allotment> for AllotmentSummary {
    fn from(allotment: Allotment) -> Self {
        let remaining = allotment.remaining();
        Self {
            allotment,
            remaining,
        }
    }
}

/// Payload of a dry-run validation.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationResponse {
    /// True when no rule was violated.
    pub is_valid: bool,
    /// Rendered error messages, in check order.
    pub errors: Vec<String>,
    /// Rendered warning messages, in check order.
    pub warnings: Vec<String>,
}

impl From<RangeValidation> for ValidationResponse {
    fn from(validation: RangeValidation) -> Self {
        Self {
            is_valid: validation.is_valid(),
            errors: validation.error_messages(),
            warnings: validation.warning_messages(),
        }
    }
}

/// Payload of a successful booking.
#[derive(Debug, Clone, Serialize)]
pub struct BookingResponse {
    /// The allotment after the booking.
    pub allotment: AllotmentSummary,
    /// The created range.
    pub range: VacationRange,
    /// Rendered warning messages, for display.
    pub warnings: Vec<String>,
}

/// Payload of a successful reschedule.
#[derive(Debug, Clone, Serialize)]
pub struct RescheduleResponse {
    /// The allotment after the reschedule.
    pub allotment: AllotmentSummary,
    /// The replacement ranges that were created.
    pub replacements: Vec<VacationRange>,
}

/// Payload of a successful advance grant.
#[derive(Debug, Clone, Serialize)]
pub struct AdvanceResponse {
    /// The allotment after the grant.
    pub allotment: AllotmentSummary,
    /// The advance balance after the grant.
    pub advance: AdvanceSummary,
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        let (status, code) = match &error {
            EngineError::PolicyNotFound { .. } | EngineError::PolicyParseError { .. } => {
                (StatusCode::INTERNAL_SERVER_ERROR, "CONFIG_ERROR")
            }
            EngineError::InvalidRequest { .. }
            | EngineError::InvalidAdvanceAmount { .. }
            | EngineError::EmptySelection => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR"),
            EngineError::CapacityExceeded { .. } => (StatusCode::CONFLICT, "CAPACITY_EXCEEDED"),
            EngineError::RangeNotFound { .. } => (StatusCode::NOT_FOUND, "RANGE_NOT_FOUND"),
            EngineError::AllotmentNotFound { .. } => {
                (StatusCode::NOT_FOUND, "ALLOTMENT_NOT_FOUND")
            }
            EngineError::EmployeeNotFound { .. } => (StatusCode::NOT_FOUND, "EMPLOYEE_NOT_FOUND"),
            EngineError::RangeNotActive { .. } => (StatusCode::CONFLICT, "RANGE_NOT_ACTIVE"),
            EngineError::RangeAlreadyStarted { .. } => {
                (StatusCode::CONFLICT, "RANGE_ALREADY_STARTED")
            }
            EngineError::StoreError { .. } => (StatusCode::INTERNAL_SERVER_ERROR, "STORE_ERROR"),
        };

        ApiErrorResponse {
            status,
            error: ApiError::new(code, error.to_string()),
        }
    }
}
