//! Reschedule planning: merge mode and preserve-count mode.
//!
//! Rescheduling retires active, not-yet-started ranges and replaces them
//! with new ones, stamping a bidirectional lineage link. Merge mode folds K
//! selected ranges into a single new range; preserve-count mode replaces
//! each selected range with exactly one new range. In both modes the
//! replacement days may not exceed the days freed by the sources, and any
//! leftover is banked back into the pool counters.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::config::VacationPolicy;
use crate::error::{EngineError, EngineResult};
use crate::models::{Allotment, RangeKind, VacationRange};

use super::day_count::requested_days;
use super::overlap::{DateInterval, find_overlap};
use super::validator::ValidationError;

/// Returns true when a range can still be rescheduled: it must be active
/// and its start date strictly in the future.
pub fn eligible_for_reschedule(range: &VacationRange, today: NaiveDate) -> bool {
    range.is_active() && range.start_date > today
}

/// One replacement interval in preserve-count mode, keyed by the range it
/// supersedes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Replacement {
    /// The source range being replaced.
    pub source_id: Uuid,
    /// First day of the replacement (inclusive).
    pub start_date: NaiveDate,
    /// Last day of the replacement (inclusive).
    pub end_date: NaiveDate,
}

/// A source range retired by a reschedule, with its successor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Retirement {
    /// The range leaving the active set.
    pub range_id: Uuid,
    /// The range that supersedes it.
    pub successor_id: Uuid,
}

/// The full effect of a reschedule, ready to commit.
///
/// The scheduler marks every retired range `rescheduled` with its successor
/// id, inserts the replacements, and writes the new pool counters — as one
/// unit of work.
#[derive(Debug, Clone)]
pub struct ReschedulePlan {
    /// Source ranges to retire, with their successors.
    pub retirements: Vec<Retirement>,
    /// New ranges to create.
    pub replacements: Vec<VacationRange>,
    /// Flexible-pool used counter after the reschedule.
    pub flexible_days_used: Decimal,
    /// Block-pool used counter after the reschedule.
    pub block_days_used: Decimal,
    /// Days freed by the sources but not consumed by the replacements,
    /// banked into whichever used counter kept the flexible pool within
    /// capacity.
    pub banked_days: i64,
}

fn resolve_sources<'a>(
    allotment: &'a Allotment,
    source_ids: &[Uuid],
    today: NaiveDate,
) -> EngineResult<Vec<&'a VacationRange>> {
    if source_ids.is_empty() {
        return Err(EngineError::EmptySelection);
    }

    let mut sources = Vec::with_capacity(source_ids.len());
    for &range_id in source_ids {
        let range = allotment
            .find_range(range_id)
            .ok_or(EngineError::RangeNotFound { range_id })?;
        if !range.is_active() {
            return Err(EngineError::RangeNotActive { range_id });
        }
        if range.start_date <= today {
            return Err(EngineError::RangeAlreadyStarted {
                range_id,
                start_date: range.start_date,
            });
        }
        sources.push(range);
    }

    Ok(sources)
}

fn interval_errors(
    allotment: &Allotment,
    start_date: NaiveDate,
    end_date: NaiveDate,
) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    if start_date > end_date {
        errors.push(ValidationError::StartAfterEnd);
    }
    if start_date < allotment.period_start || start_date > allotment.period_end {
        errors.push(ValidationError::StartOutsidePeriod {
            period_start: allotment.period_start,
            period_end: allotment.period_end,
        });
    }
    if end_date < allotment.period_start || end_date > allotment.period_end {
        errors.push(ValidationError::EndOutsidePeriod {
            period_start: allotment.period_start,
            period_end: allotment.period_end,
        });
    }
    errors
}

fn bank_leftover(
    allotment: &Allotment,
    flexible_days_used: &mut Decimal,
    block_days_used: &mut Decimal,
    leftover: i64,
) {
    if leftover > 0 {
        let leftover = Decimal::from(leftover);
        if *flexible_days_used + leftover <= allotment.flexible_days_available {
            *flexible_days_used += leftover;
        } else {
            *block_days_used += leftover;
        }
    }
}

/// Plans a merge-mode reschedule: K selected ranges fold into one new range.
///
/// The new interval must respect date order and the period bounds, may not
/// need more days than the sources free up, and may not overlap any active
/// range other than the sources. The merged range is flexible when its day
/// count is at or under the policy threshold, except that any block-kind
/// source keeps the merged range on block accounting.
///
/// The caller is expected to have normalized the end date under the Friday
/// rule beforehand.
pub fn plan_merge(
    allotment: &Allotment,
    source_ids: &[Uuid],
    start_date: NaiveDate,
    end_date: NaiveDate,
    today: NaiveDate,
    policy: &VacationPolicy,
) -> EngineResult<ReschedulePlan> {
    let sources = resolve_sources(allotment, source_ids, today)?;

    let errors = interval_errors(allotment, start_date, end_date);
    if !errors.is_empty() {
        return Err(EngineError::InvalidRequest { errors });
    }

    let requested = requested_days(start_date, end_date);
    let source_total: i64 = sources.iter().map(|r| r.requested_days).sum();
    if requested.days > source_total {
        return Err(EngineError::CapacityExceeded {
            requested: Decimal::from(requested.days),
            available: Decimal::from(source_total),
            source_label: "the selected ranges".to_string(),
        });
    }

    let candidate = DateInterval::new(start_date, end_date);
    if let Some(conflict) = find_overlap(&[candidate], allotment, source_ids) {
        return Err(EngineError::InvalidRequest {
            errors: vec![ValidationError::OverlapsExisting {
                start: conflict.start_date,
                end: conflict.end_date,
            }],
        });
    }

    let mut kind = if requested.days <= policy.flexible_threshold_days {
        RangeKind::Flexible
    } else {
        RangeKind::Block
    };
    if sources.iter().any(|r| r.kind == RangeKind::Block) {
        kind = RangeKind::Block;
    }

    let replacement = VacationRange::builder(
        allotment.id,
        allotment.employee_id.clone(),
        start_date,
        end_date,
        requested.days,
        kind,
    )
    .includes_weekend_extension(requested.includes_weekend_extension)
    .rescheduled_from(source_ids.to_vec())
    .build()?;

    let mut flexible_days_used = allotment.flexible_days_used;
    let mut block_days_used = allotment.block_days_used;
    for source in &sources {
        let days = Decimal::from(source.requested_days);
        match source.kind {
            RangeKind::Flexible => flexible_days_used -= days,
            RangeKind::Block => block_days_used -= days,
        }
    }
    let days = Decimal::from(requested.days);
    match kind {
        RangeKind::Flexible => flexible_days_used += days,
        RangeKind::Block => block_days_used += days,
    }

    let banked_days = source_total - requested.days;
    bank_leftover(
        allotment,
        &mut flexible_days_used,
        &mut block_days_used,
        banked_days,
    );

    let retirements = sources
        .iter()
        .map(|source| Retirement {
            range_id: source.id,
            successor_id: replacement.id,
        })
        .collect();

    Ok(ReschedulePlan {
        retirements,
        replacements: vec![replacement],
        flexible_days_used,
        block_days_used,
        banked_days,
    })
}

/// Plans a preserve-count reschedule: each selected range is replaced by
/// exactly one new range with its own dates.
///
/// The replacement intervals may not overlap any active range other than
/// the sources, each must respect date order and the period bounds, and
/// together they may not need more days than the sources free up. Each new
/// range is classified independently by its own day count and inherits the
/// advance flag from its source.
pub fn plan_preserve(
    allotment: &Allotment,
    replacements: &[Replacement],
    today: NaiveDate,
    policy: &VacationPolicy,
) -> EngineResult<ReschedulePlan> {
    let source_ids: Vec<Uuid> = replacements.iter().map(|r| r.source_id).collect();
    let sources = resolve_sources(allotment, &source_ids, today)?;

    let candidates: Vec<DateInterval> = replacements
        .iter()
        .map(|r| DateInterval::new(r.start_date, r.end_date))
        .collect();
    if let Some(conflict) = find_overlap(&candidates, allotment, &source_ids) {
        return Err(EngineError::InvalidRequest {
            errors: vec![ValidationError::OverlapsExisting {
                start: conflict.start_date,
                end: conflict.end_date,
            }],
        });
    }

    let mut new_ranges = Vec::with_capacity(replacements.len());
    let mut sum_new: i64 = 0;
    for (replacement, source) in replacements.iter().zip(&sources) {
        let errors = interval_errors(allotment, replacement.start_date, replacement.end_date);
        if !errors.is_empty() {
            return Err(EngineError::InvalidRequest { errors });
        }

        let requested = requested_days(replacement.start_date, replacement.end_date);
        sum_new += requested.days;

        let kind = if requested.days <= policy.flexible_threshold_days {
            RangeKind::Flexible
        } else {
            RangeKind::Block
        };

        let new_range = VacationRange::builder(
            allotment.id,
            allotment.employee_id.clone(),
            replacement.start_date,
            replacement.end_date,
            requested.days,
            kind,
        )
        .includes_weekend_extension(requested.includes_weekend_extension)
        .is_advance(source.is_advance)
        .rescheduled_from(vec![source.id])
        .build()?;
        new_ranges.push(new_range);
    }

    let source_total: i64 = sources.iter().map(|r| r.requested_days).sum();
    if sum_new > source_total {
        return Err(EngineError::CapacityExceeded {
            requested: Decimal::from(sum_new),
            available: Decimal::from(source_total),
            source_label: "the selected ranges".to_string(),
        });
    }

    let mut flexible_days_used = allotment.flexible_days_used;
    let mut block_days_used = allotment.block_days_used;
    for source in &sources {
        let days = Decimal::from(source.requested_days);
        match source.kind {
            RangeKind::Flexible => flexible_days_used -= days,
            RangeKind::Block => block_days_used -= days,
        }
    }
    for new_range in &new_ranges {
        let days = Decimal::from(new_range.requested_days);
        match new_range.kind {
            RangeKind::Flexible => flexible_days_used += days,
            RangeKind::Block => block_days_used += days,
        }
    }

    let banked_days = source_total - sum_new;
    bank_leftover(
        allotment,
        &mut flexible_days_used,
        &mut block_days_used,
        banked_days,
    );

    let retirements = sources
        .iter()
        .zip(&new_ranges)
        .map(|(source, new_range)| Retirement {
            range_id: source.id,
            successor_id: new_range.id,
        })
        .collect();

    Ok(ReschedulePlan {
        retirements,
        replacements: new_ranges,
        flexible_days_used,
        block_days_used,
        banked_days,
    })
}
