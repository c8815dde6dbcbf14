//! HTTP API module for the Vacation Scheduling Engine.
//!
//! This module provides the REST endpoints the HR administration client
//! talks to: employee seeding, allotment opening, range validation and
//! booking, deletion, rescheduling and advance requests.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{
    AdvanceRequest, BookRangeRequest, OpenAllotmentRequest, RegisterEmployeeRequest,
    ReplacementRequest, RescheduleRequest, ValidateRangeRequest,
};
pub use response::{
    AdvanceResponse, AllotmentSummary, ApiError, ApiErrorResponse, BookingResponse,
    RescheduleResponse, ValidationResponse,
};
pub use state::{ApiScheduler, AppState};
