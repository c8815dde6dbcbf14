//! Range lifecycle planning: opening allotments, booking and removal.
//!
//! Planning is pure: each function inspects an allotment snapshot and
//! returns the post-commit counter values together with the range to
//! create or delete. The scheduler applies plans write-through against the
//! store so that either everything lands or nothing does.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::config::VacationPolicy;
use crate::error::{EngineError, EngineResult};
use crate::models::{Allotment, AllotmentStatus, Employee, RangeKind, VacationRange};

use super::calendar::vacation_period;
use super::day_count::requested_days;
use super::validator::{ValidationWarning, validate_range};

/// Opens a fresh allotment for an employee.
///
/// The vacation period derives from the hire date (opens one year after
/// hiring, runs for one year) and the pools start at the policy baselines
/// with nothing consumed.
pub fn open_allotment(employee: &Employee, policy: &VacationPolicy) -> Allotment {
    let period = vacation_period(employee.hire_date);

    Allotment {
        id: Uuid::new_v4(),
        employee_id: employee.id.clone(),
        period_label: period.label,
        period_start: period.start,
        period_end: period.end,
        total_days: policy.base_total_days,
        advance_days_used: Decimal::ZERO,
        flexible_days_available: policy.flexible_days_available,
        flexible_days_used: Decimal::ZERO,
        block_days_available: policy.block_days_available,
        block_days_used: Decimal::ZERO,
        status: AllotmentStatus::Pending,
        ranges: Vec::new(),
    }
}

/// The outcome of planning a new booking.
#[derive(Debug, Clone)]
pub struct BookingPlan {
    /// The range to create.
    pub range: VacationRange,
    /// Flexible-pool used counter after the booking.
    pub flexible_days_used: Decimal,
    /// Block-pool used counter after the booking.
    pub block_days_used: Decimal,
    /// Advisory findings from validation, for display.
    pub warnings: Vec<ValidationWarning>,
}

/// Plans a new booking against an allotment.
///
/// Runs the full validation (including the stored-range overlap scan),
/// classifies the range as flexible when the day count is at or under the
/// policy threshold and the flexible pool still has headroom, and computes
/// the post-commit pool counters.
///
/// The caller is expected to have normalized the end date under the Friday
/// rule beforehand.
pub fn plan_booking(
    allotment: &Allotment,
    start_date: NaiveDate,
    end_date: NaiveDate,
    is_advance: bool,
    external_document_id: Option<String>,
    policy: &VacationPolicy,
) -> EngineResult<BookingPlan> {
    let validation = validate_range(start_date, end_date, allotment, policy, true);
    if !validation.is_valid() {
        return Err(EngineError::InvalidRequest {
            errors: validation.errors,
        });
    }

    let requested = requested_days(start_date, end_date);
    let flexible = requested.days <= policy.flexible_threshold_days
        && allotment.flexible_days_used < allotment.flexible_days_available;
    let kind = if flexible {
        RangeKind::Flexible
    } else {
        RangeKind::Block
    };

    let range = VacationRange::builder(
        allotment.id,
        allotment.employee_id.clone(),
        start_date,
        end_date,
        requested.days,
        kind,
    )
    .includes_weekend_extension(requested.includes_weekend_extension)
    .is_advance(is_advance)
    .external_document_id(external_document_id)
    .build()?;

    let days = Decimal::from(requested.days);
    let (flexible_days_used, block_days_used) = match kind {
        RangeKind::Flexible => (
            allotment.flexible_days_used + days,
            allotment.block_days_used,
        ),
        RangeKind::Block => (
            allotment.flexible_days_used,
            allotment.block_days_used + days,
        ),
    };

    Ok(BookingPlan {
        range,
        flexible_days_used,
        block_days_used,
        warnings: validation.warnings,
    })
}

/// The counter values that take effect when a range is removed.
#[derive(Debug, Clone)]
pub struct RemovalPlan {
    /// The range to delete.
    pub range_id: Uuid,
    /// Flexible-pool used counter after the removal.
    pub flexible_days_used: Decimal,
    /// Block-pool used counter after the removal.
    pub block_days_used: Decimal,
    /// Advance balance after the removal.
    pub advance_days_used: Decimal,
    /// Total day ceiling after the removal.
    pub total_days: Decimal,
}

/// Plans the hard removal of an active range.
///
/// Removal reverses the range's pool contribution exactly. A range drawn on
/// advanced days also unwinds the borrowed-day bookkeeping: the advance
/// balance drops (floored at zero) and the total ceiling falls back toward
/// the policy base, landing exactly on it once no advance days remain.
///
/// Rescheduled ranges are immutable history and cannot be deleted.
pub fn plan_removal(
    allotment: &Allotment,
    range_id: Uuid,
    policy: &VacationPolicy,
) -> EngineResult<RemovalPlan> {
    let range = allotment
        .find_range(range_id)
        .ok_or(EngineError::RangeNotFound { range_id })?;
    if !range.is_active() {
        return Err(EngineError::RangeNotActive { range_id });
    }

    let days = Decimal::from(range.requested_days);
    let mut flexible_days_used = allotment.flexible_days_used;
    let mut block_days_used = allotment.block_days_used;
    match range.kind {
        RangeKind::Flexible => flexible_days_used -= days,
        RangeKind::Block => block_days_used -= days,
    }

    let mut advance_days_used = allotment.advance_days_used;
    let mut total_days = allotment.total_days;
    if range.is_advance {
        advance_days_used = (advance_days_used - days).max(Decimal::ZERO);
        total_days = if advance_days_used == Decimal::ZERO {
            policy.base_total_days
        } else {
            (total_days - days).max(policy.base_total_days)
        };
    }

    Ok(RemovalPlan {
        range_id,
        flexible_days_used,
        block_days_used,
        advance_days_used,
        total_days,
    })
}
