//! Advance (borrowed-day) accrual and request planning.
//!
//! Employees may pull future-accruing days into the current allotment.
//! Borrowable days accrue per whole month elapsed since the period start
//! and are capped; granting an advance only raises the pool ceilings — no
//! range is created until the days are actually booked.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::config::VacationPolicy;
use crate::error::{EngineError, EngineResult};
use crate::models::Allotment;

use super::calendar::whole_months_elapsed;

/// Computes the advance days accrued by a given date.
///
/// Zero until the period starts, then `days_per_month` for every whole
/// month elapsed, capped at the policy maximum.
///
/// # Examples
///
/// ```
/// use vacation_engine::config::VacationPolicy;
/// use vacation_engine::rules::advance::advance_available;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let policy = VacationPolicy::default();
/// let start = NaiveDate::from_ymd_opt(2025, 1, 10).unwrap();
/// let today = NaiveDate::from_ymd_opt(2025, 3, 15).unwrap();
/// // Two whole months at 2.5 days each.
/// assert_eq!(advance_available(start, today, &policy), Decimal::new(50, 1));
/// ```
pub fn advance_available(
    period_start: NaiveDate,
    today: NaiveDate,
    policy: &VacationPolicy,
) -> Decimal {
    if today <= period_start {
        return Decimal::ZERO;
    }

    let months = Decimal::from(whole_months_elapsed(period_start, today));
    (months * policy.advance.days_per_month).min(policy.advance.max_days)
}

/// A snapshot of an allotment's advance balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AdvanceSummary {
    /// Days accrued so far this period.
    pub accrued: Decimal,
    /// Days already borrowed.
    pub used: Decimal,
    /// Days still borrowable (`accrued - used`).
    pub remaining: Decimal,
}

/// Summarizes the advance balance of an allotment as of a date.
pub fn advance_summary(
    allotment: &Allotment,
    today: NaiveDate,
    policy: &VacationPolicy,
) -> AdvanceSummary {
    let accrued = advance_available(allotment.period_start, today, policy);
    let used = allotment.advance_days_used;

    AdvanceSummary {
        accrued,
        used,
        remaining: accrued - used,
    }
}

/// The counter values that take effect when an advance is granted.
#[derive(Debug, Clone, Copy)]
pub struct AdvancePlan {
    /// Advance balance after the grant.
    pub advance_days_used: Decimal,
    /// Total day ceiling after the grant.
    pub total_days: Decimal,
    /// Block-pool capacity after the grant. Advance days enlarge the block
    /// pool, not the flexible one.
    pub block_days_available: Decimal,
}

/// Plans an advance request against an allotment.
///
/// The amount must be positive and fit within the unborrowed accrual.
pub fn plan_advance(
    allotment: &Allotment,
    amount: Decimal,
    today: NaiveDate,
    policy: &VacationPolicy,
) -> EngineResult<AdvancePlan> {
    if amount <= Decimal::ZERO {
        return Err(EngineError::InvalidAdvanceAmount { amount });
    }

    let summary = advance_summary(allotment, today, policy);
    if amount > summary.remaining {
        return Err(EngineError::CapacityExceeded {
            requested: amount,
            available: summary.remaining,
            source_label: "the advance pool".to_string(),
        });
    }

    Ok(AdvancePlan {
        advance_days_used: allotment.advance_days_used + amount,
        total_days: allotment.total_days + amount,
        block_days_available: allotment.block_days_available + amount,
    })
}
