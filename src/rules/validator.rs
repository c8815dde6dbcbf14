//! Range validation against the vacation business rules.
//!
//! The validator accumulates every applicable error rather than stopping at
//! the first, so the caller can surface the full list; warnings come back
//! alongside even when the request is valid.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use thiserror::Error;

use crate::config::VacationPolicy;
use crate::models::Allotment;

use super::calendar::{is_friday, is_saturday, is_sunday};
use super::day_count::requested_days;

/// A single rule violation found while validating a candidate range.
///
/// Each variant renders a human-readable message through `Display`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The start date lies outside the vacation period.
    #[error("The start date must fall between {period_start} and {period_end}")]
    StartOutsidePeriod {
        /// First day of the vacation period.
        period_start: NaiveDate,
        /// Last day of the vacation period.
        period_end: NaiveDate,
    },

    /// The end date lies outside the vacation period.
    #[error("The end date must fall between {period_start} and {period_end}")]
    EndOutsidePeriod {
        /// First day of the vacation period.
        period_start: NaiveDate,
        /// Last day of the vacation period.
        period_end: NaiveDate,
    },

    /// The dates are reversed.
    #[error("The start date cannot be after the end date")]
    StartAfterEnd,

    /// The range begins on a Saturday or Sunday.
    #[error("A vacation cannot start on a weekend (Saturday or Sunday)")]
    WeekendStart,

    /// A short request was made with no flexible days left.
    #[error(
        "All {flexible_available} flexible days are used; remaining days must be requested \
         in blocks of at least {block_minimum} days"
    )]
    FlexiblePoolExhausted {
        /// Capacity of the flexible pool.
        flexible_available: Decimal,
        /// Minimum size of a block request.
        block_minimum: i64,
    },

    /// The request exceeds the flexible days left.
    #[error("Only {remaining} flexible days are available")]
    InsufficientFlexibleDays {
        /// Flexible days still available.
        remaining: Decimal,
    },

    /// The request exceeds the block days left.
    #[error("Only {remaining} block days are available")]
    InsufficientBlockDays {
        /// Block days still available.
        remaining: Decimal,
    },

    /// The candidate shares at least one day with a stored range.
    #[error("The requested range overlaps a vacation already scheduled from {start} to {end}")]
    OverlapsExisting {
        /// Start of the conflicting range.
        start: NaiveDate,
        /// End of the conflicting range.
        end: NaiveDate,
    },

    /// The computed day count is not positive (construction-time guard).
    #[error("The requested day count must be at least 1 (got {days})")]
    NonPositiveDayCount {
        /// The offending day count.
        days: i64,
    },
}

/// An advisory finding that does not block the request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationWarning {
    /// The range starts on a Friday, so the weekend is included.
    #[error("Starting on a Friday automatically includes the following Saturday and Sunday")]
    FridayStart,

    /// The range ends on a Friday, so it extends through Sunday.
    #[error("Ending on a Friday automatically extends the range through Sunday")]
    FridayEnd,

    /// This request uses up the last flexible days.
    #[error(
        "This range completes all {flexible_available} flexible days; remaining days must \
         be requested in blocks of at least {block_minimum} days"
    )]
    CompletesFlexiblePool {
        /// Capacity of the flexible pool.
        flexible_available: Decimal,
        /// Minimum size of a block request.
        block_minimum: i64,
    },
}

/// The outcome of validating one candidate range.
///
/// Errors and warnings are both returned for display; the request is
/// acceptable iff the error list is empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RangeValidation {
    /// Rule violations, in check order.
    pub errors: Vec<ValidationError>,
    /// Advisory findings, in check order.
    pub warnings: Vec<ValidationWarning>,
}

impl RangeValidation {
    /// Returns true when no rule was violated.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Renders the errors as display strings.
    pub fn error_messages(&self) -> Vec<String> {
        self.errors.iter().map(ToString::to_string).collect()
    }

    /// Renders the warnings as display strings.
    pub fn warning_messages(&self) -> Vec<String> {
        self.warnings.iter().map(ToString::to_string).collect()
    }
}

/// Validates a candidate date range against an allotment.
///
/// Checks run in a fixed order and accumulate:
/// 1. each boundary must lie within the vacation period;
/// 2. the dates must be ordered;
/// 3. the range must not start on a weekend;
/// 4. the requested day count classifies the range as flexible
///    (at most the policy threshold) or block, and the matching pool must
///    cover it;
/// 5. for a genuinely new range (`new_range`), the candidate must not share
///    a day with any stored range.
///
/// Pass `new_range = false` when the candidate replaces existing ranges;
/// reschedule planners run their own overlap scan with exclusions through
/// [`find_overlap`](super::overlap::find_overlap).
///
/// Friday boundaries produce warnings; the caller is expected to have
/// normalized the end date through
/// [`normalized_end_date`](super::day_count::normalized_end_date) first.
pub fn validate_range(
    start_date: NaiveDate,
    end_date: NaiveDate,
    allotment: &Allotment,
    policy: &VacationPolicy,
    new_range: bool,
) -> RangeValidation {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    let period_start = allotment.period_start;
    let period_end = allotment.period_end;

    if start_date < period_start || start_date > period_end {
        errors.push(ValidationError::StartOutsidePeriod {
            period_start,
            period_end,
        });
    }
    if end_date < period_start || end_date > period_end {
        errors.push(ValidationError::EndOutsidePeriod {
            period_start,
            period_end,
        });
    }
    if start_date > end_date {
        errors.push(ValidationError::StartAfterEnd);
    }
    if is_saturday(start_date) || is_sunday(start_date) {
        errors.push(ValidationError::WeekendStart);
    }

    let requested = requested_days(start_date, end_date);

    if is_friday(start_date) {
        warnings.push(ValidationWarning::FridayStart);
    }
    if is_friday(end_date) {
        warnings.push(ValidationWarning::FridayEnd);
    }

    let flexible_remaining = allotment.flexible_days_available - allotment.flexible_days_used;
    let block_remaining = allotment.block_days_available - allotment.block_days_used;
    let days = Decimal::from(requested.days);

    if requested.days <= policy.flexible_threshold_days {
        if flexible_remaining == Decimal::ZERO {
            errors.push(ValidationError::FlexiblePoolExhausted {
                flexible_available: allotment.flexible_days_available,
                block_minimum: policy.flexible_threshold_days,
            });
        } else if days > flexible_remaining {
            errors.push(ValidationError::InsufficientFlexibleDays {
                remaining: flexible_remaining,
            });
        }

        if flexible_remaining - days == Decimal::ZERO && flexible_remaining > Decimal::ZERO {
            warnings.push(ValidationWarning::CompletesFlexiblePool {
                flexible_available: allotment.flexible_days_available,
                block_minimum: policy.flexible_threshold_days,
            });
        }
    } else if days > block_remaining {
        errors.push(ValidationError::InsufficientBlockDays {
            remaining: block_remaining,
        });
    }

    if new_range {
        for range in &allotment.ranges {
            // Every stored range participates here, whatever its status;
            // the status-aware scan lives in find_overlap.
            if (start_date >= range.start_date && start_date <= range.end_date)
                || (end_date >= range.start_date && end_date <= range.end_date)
                || (start_date <= range.start_date && end_date >= range.end_date)
            {
                errors.push(ValidationError::OverlapsExisting {
                    start: range.start_date,
                    end: range.end_date,
                });
                break;
            }
        }
    }

    RangeValidation { errors, warnings }
}
