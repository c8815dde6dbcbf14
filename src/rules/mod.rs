//! Business rules for the Vacation Scheduling Engine.
//!
//! This module contains the pure rule logic: calendar arithmetic, requested
//! day computation with the Friday rule, range validation, overlap
//! detection, booking/removal lifecycle planning, merge and preserve-count
//! reschedule planning, and advance-day accrual. None of these functions
//! performs I/O; the [`scheduler`](crate::scheduler) applies their plans
//! against the store.

pub mod advance;
pub mod calendar;
pub mod day_count;
pub mod lifecycle;
pub mod overlap;
pub mod reschedule;
pub mod validator;

pub use advance::{AdvancePlan, AdvanceSummary, advance_available, advance_summary, plan_advance};
pub use calendar::{
    VacationPeriod, add_years, friday_extended_sunday, inclusive_day_count, is_friday, is_saturday,
    is_sunday, is_weekend, vacation_period, whole_months_elapsed,
};
pub use day_count::{RequestedDays, normalized_end_date, requested_days};
pub use lifecycle::{BookingPlan, RemovalPlan, open_allotment, plan_booking, plan_removal};
pub use overlap::{DateInterval, find_overlap, intervals_overlap};
pub use reschedule::{
    Replacement, ReschedulePlan, Retirement, eligible_for_reschedule, plan_merge, plan_preserve,
};
pub use validator::{RangeValidation, ValidationError, ValidationWarning, validate_range};
