//! HTTP request handlers for the Vacation Scheduling Engine API.
//!
//! Handlers are thin adapters: they lock the shared scheduler, delegate to
//! it, and map engine errors onto HTTP statuses. All rule decisions live in
//! the rules modules.

use std::sync::MutexGuard;

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, post},
};
use tracing::info;
use uuid::Uuid;

use crate::models::Employee;

use super::request::{
    AdvanceRequest, BookRangeRequest, OpenAllotmentRequest, RegisterEmployeeRequest,
    RescheduleRequest, ValidateRangeRequest,
};
use super::response::{
    AdvanceResponse, AllotmentSummary, ApiError, ApiErrorResponse, BookingResponse,
    RescheduleResponse, ValidationResponse,
};
use super::state::{ApiScheduler, AppState};

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/employees", post(register_employee_handler))
        .route(
            "/employees/:employee_id/allotments",
            get(list_allotments_handler),
        )
        .route("/allotments", post(open_allotment_handler))
        .route(
            "/allotments/:allotment_id/validations",
            post(validate_handler),
        )
        .route("/allotments/:allotment_id/ranges", post(book_range_handler))
        .route(
            "/allotments/:allotment_id/ranges/:range_id",
            delete(delete_range_handler),
        )
        .route(
            "/allotments/:allotment_id/reschedules",
            post(reschedule_handler),
        )
        .route("/allotments/:allotment_id/advances", post(advance_handler))
        .with_state(state)
}

fn lock_scheduler(state: &AppState) -> Result<MutexGuard<'_, ApiScheduler>, ApiErrorResponse> {
    state.scheduler().lock().map_err(|_| ApiErrorResponse {
        status: StatusCode::INTERNAL_SERVER_ERROR,
        error: ApiError::new("STATE_ERROR", "Scheduler state is unavailable"),
    })
}

/// Handler for `POST /employees`: seeds an employee record.
async fn register_employee_handler(
    State(state): State<AppState>,
    Json(request): Json<RegisterEmployeeRequest>,
) -> Result<(StatusCode, Json<Employee>), ApiErrorResponse> {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, employee_id = %request.id, "registering employee");

    let mut scheduler = lock_scheduler(&state)?;
    let employee = scheduler.register_employee(request.into())?;
    Ok((StatusCode::CREATED, Json(employee)))
}

/// Handler for `POST /allotments`: finds or opens the employee's allotment.
async fn open_allotment_handler(
    State(state): State<AppState>,
    Json(request): Json<OpenAllotmentRequest>,
) -> Result<Json<AllotmentSummary>, ApiErrorResponse> {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, employee_id = %request.employee_id, "opening allotment");

    let mut scheduler = lock_scheduler(&state)?;
    let allotment = scheduler.open_allotment(&request.employee_id)?;
    Ok(Json(allotment.into()))
}

/// Handler for `GET /employees/{employee_id}/allotments`: lists allotments
/// with remaining-day summaries.
async fn list_allotments_handler(
    State(state): State<AppState>,
    Path(employee_id): Path<String>,
) -> Result<Json<Vec<AllotmentSummary>>, ApiErrorResponse> {
    let scheduler = lock_scheduler(&state)?;
    let allotments = scheduler.allotments_for(&employee_id)?;
    Ok(Json(allotments.into_iter().map(Into::into).collect()))
}

/// Handler for `POST /allotments/{id}/validations`: dry-run validation.
///
/// Always answers 200 with the error/warning lists; rejection is data here,
/// not an HTTP failure.
async fn validate_handler(
    State(state): State<AppState>,
    Path(allotment_id): Path<Uuid>,
    Json(request): Json<ValidateRangeRequest>,
) -> Result<Json<ValidationResponse>, ApiErrorResponse> {
    let scheduler = lock_scheduler(&state)?;
    let validation =
        scheduler.validate_request(allotment_id, request.start_date, request.end_date)?;
    Ok(Json(validation.into()))
}

/// Handler for `POST /allotments/{id}/ranges`: books a vacation range.
async fn book_range_handler(
    State(state): State<AppState>,
    Path(allotment_id): Path<Uuid>,
    Json(request): Json<BookRangeRequest>,
) -> Result<(StatusCode, Json<BookingResponse>), ApiErrorResponse> {
    let correlation_id = Uuid::new_v4();
    info!(
        correlation_id = %correlation_id,
        allotment_id = %allotment_id,
        start_date = %request.start_date,
        end_date = %request.end_date,
        "booking range"
    );

    let mut scheduler = lock_scheduler(&state)?;
    let outcome = scheduler.book_range(
        allotment_id,
        request.start_date,
        request.end_date,
        request.is_advance,
        request.external_document_id,
    )?;

    let response = BookingResponse {
        allotment: outcome.allotment.into(),
        range: outcome.range,
        warnings: outcome.warnings.iter().map(ToString::to_string).collect(),
    };
    Ok((StatusCode::CREATED, Json(response)))
}

/// Handler for `DELETE /allotments/{id}/ranges/{range_id}`.
async fn delete_range_handler(
    State(state): State<AppState>,
    Path((allotment_id, range_id)): Path<(Uuid, Uuid)>,
) -> Result<Json<AllotmentSummary>, ApiErrorResponse> {
    let correlation_id = Uuid::new_v4();
    info!(
        correlation_id = %correlation_id,
        allotment_id = %allotment_id,
        range_id = %range_id,
        "deleting range"
    );

    let mut scheduler = lock_scheduler(&state)?;
    let allotment = scheduler.remove_range(allotment_id, range_id)?;
    Ok(Json(allotment.into()))
}

/// Handler for `POST /allotments/{id}/reschedules`: merge or preserve-count.
async fn reschedule_handler(
    State(state): State<AppState>,
    Path(allotment_id): Path<Uuid>,
    Json(request): Json<RescheduleRequest>,
) -> Result<(StatusCode, Json<RescheduleResponse>), ApiErrorResponse> {
    let correlation_id = Uuid::new_v4();
    let mut scheduler = lock_scheduler(&state)?;

    let outcome = match request {
        RescheduleRequest::Merge {
            source_ids,
            start_date,
            end_date,
        } => {
            info!(
                correlation_id = %correlation_id,
                allotment_id = %allotment_id,
                sources = source_ids.len(),
                "merge reschedule"
            );
            scheduler.reschedule_merge(allotment_id, &source_ids, start_date, end_date)?
        }
        RescheduleRequest::PreserveCount { replacements } => {
            info!(
                correlation_id = %correlation_id,
                allotment_id = %allotment_id,
                sources = replacements.len(),
                "preserve-count reschedule"
            );
            let replacements: Vec<_> = replacements.into_iter().map(Into::into).collect();
            scheduler.reschedule_preserve(allotment_id, &replacements)?
        }
    };

    let response = RescheduleResponse {
        allotment: outcome.allotment.into(),
        replacements: outcome.replacements,
    };
    Ok((StatusCode::CREATED, Json(response)))
}

/// Handler for `POST /allotments/{id}/advances`: grants advance days.
async fn advance_handler(
    State(state): State<AppState>,
    Path(allotment_id): Path<Uuid>,
    Json(request): Json<AdvanceRequest>,
) -> Result<Json<AdvanceResponse>, ApiErrorResponse> {
    let correlation_id = Uuid::new_v4();
    info!(
        correlation_id = %correlation_id,
        allotment_id = %allotment_id,
        amount = %request.amount,
        "requesting advance"
    );

    let mut scheduler = lock_scheduler(&state)?;
    let allotment = scheduler.request_advance(allotment_id, request.amount)?;
    let advance = scheduler.advance_summary(allotment.id)?;

    Ok(Json(AdvanceResponse {
        allotment: allotment.into(),
        advance,
    }))
}
