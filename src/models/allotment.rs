//! Allotment model: one employee's vacation-day budget for one period.
//!
//! The allotment owns its ranges and the pool counters. Pool mutation is
//! performed only by the rules/scheduler components; this module exposes
//! pure derivation (`remaining`) and range lookups.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::range::VacationRange;

/// Review state of an allotment. Informational only: the rules never gate
/// on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AllotmentStatus {
    /// Awaiting HR review.
    Pending,
    /// Approved by HR.
    Approved,
    /// Rejected by HR.
    Rejected,
}

/// The days still available in each pool, clamped at zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RemainingDays {
    /// Days left in the flexible pool.
    pub flexible: Decimal,
    /// Days left in the block pool.
    pub block: Decimal,
    /// Total days left across both pools.
    pub total: Decimal,
}

/// An employee's vacation-day budget for one vacation year.
///
/// Counters are decimals because advance borrowing accrues at 2.5 days per
/// month, so post-advance pool capacities can be fractional.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Allotment {
    /// Unique identifier.
    pub id: Uuid,
    /// The employee this allotment belongs to.
    pub employee_id: String,
    /// Period label, e.g. "2025-2026".
    pub period_label: String,
    /// First day vacations may be taken (hire date + 1 year).
    pub period_start: NaiveDate,
    /// Day the period closes (period start + 1 year).
    pub period_end: NaiveDate,
    /// Total days granted: the policy base plus any advanced days.
    pub total_days: Decimal,
    /// Days borrowed from future accrual so far.
    pub advance_days_used: Decimal,
    /// Capacity of the flexible pool.
    pub flexible_days_available: Decimal,
    /// Days consumed from the flexible pool.
    pub flexible_days_used: Decimal,
    /// Capacity of the block pool.
    pub block_days_available: Decimal,
    /// Days consumed from the block pool.
    pub block_days_used: Decimal,
    /// Review state.
    pub status: AllotmentStatus,
    /// The bookings owned by this allotment. Insertion order is preserved
    /// but carries no meaning.
    #[serde(default)]
    pub ranges: Vec<VacationRange>,
}

impl Allotment {
    /// Derives the days remaining in each pool, each clamped at zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use vacation_engine::models::{Allotment, AllotmentStatus};
    /// use chrono::NaiveDate;
    /// use rust_decimal::Decimal;
    /// use uuid::Uuid;
    ///
    /// let allotment = Allotment {
    ///     id: Uuid::new_v4(),
    ///     employee_id: "emp_001".to_string(),
    ///     period_label: "2025-2026".to_string(),
    ///     period_start: NaiveDate::from_ymd_opt(2025, 1, 10).unwrap(),
    ///     period_end: NaiveDate::from_ymd_opt(2026, 1, 10).unwrap(),
    ///     total_days: Decimal::from(30),
    ///     advance_days_used: Decimal::ZERO,
    ///     flexible_days_available: Decimal::from(7),
    ///     flexible_days_used: Decimal::from(3),
    ///     block_days_available: Decimal::from(23),
    ///     block_days_used: Decimal::ZERO,
    ///     status: AllotmentStatus::Pending,
    ///     ranges: vec![],
    /// };
    ///
    /// let remaining = allotment.remaining();
    /// assert_eq!(remaining.flexible, Decimal::from(4));
    /// assert_eq!(remaining.block, Decimal::from(23));
    /// assert_eq!(remaining.total, Decimal::from(27));
    /// ```
    pub fn remaining(&self) -> RemainingDays {
        let flexible = self.flexible_days_available - self.flexible_days_used;
        let block = self.block_days_available - self.block_days_used;

        RemainingDays {
            flexible: flexible.max(Decimal::ZERO),
            block: block.max(Decimal::ZERO),
            total: (flexible + block).max(Decimal::ZERO),
        }
    }

    /// Looks up a range by id.
    pub fn find_range(&self, range_id: Uuid) -> Option<&VacationRange> {
        self.ranges.iter().find(|r| r.id == range_id)
    }

    /// Looks up a range by id for mutation.
    pub fn find_range_mut(&mut self, range_id: Uuid) -> Option<&mut VacationRange> {
        self.ranges.iter_mut().find(|r| r.id == range_id)
    }

    /// Iterates over the ranges still in force.
    pub fn active_ranges(&self) -> impl Iterator<Item = &VacationRange> {
        self.ranges.iter().filter(|r| r.is_active())
    }
}
