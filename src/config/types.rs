//! Policy types for vacation scheduling.
//!
//! This module contains the strongly-typed policy structures that are
//! deserialized from the YAML policy file. The policy fixes the pool sizes
//! and accrual rates the rules operate on; the shipped defaults match the
//! standard 30-day annual allotment.

use rust_decimal::Decimal;
use serde::Deserialize;

/// Advance (borrowed-day) accrual policy.
///
/// Employees accrue borrowable days for every whole month elapsed since the
/// start of their vacation period, up to a hard cap.
#[derive(Debug, Clone, Deserialize)]
pub struct AdvancePolicy {
    /// Days accrued per whole month elapsed since the period start.
    pub days_per_month: Decimal,
    /// The maximum number of advance days that can accrue in one period.
    pub max_days: Decimal,
}

/// The vacation policy for one organization.
///
/// # Example
///
/// ```
/// use vacation_engine::config::VacationPolicy;
/// use rust_decimal::Decimal;
///
/// let policy = VacationPolicy::default();
/// assert_eq!(policy.base_total_days, Decimal::from(30));
/// assert_eq!(policy.flexible_days_available, Decimal::from(7));
/// assert_eq!(policy.block_days_available, Decimal::from(23));
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct VacationPolicy {
    /// Total vacation days granted per period before any advance.
    pub base_total_days: Decimal,
    /// Capacity of the flexible (short-range) pool.
    pub flexible_days_available: Decimal,
    /// Capacity of the block (long-range) pool.
    pub block_days_available: Decimal,
    /// Inclusive day-count threshold at or below which a range draws from
    /// the flexible pool.
    pub flexible_threshold_days: i64,
    /// Advance accrual policy.
    pub advance: AdvancePolicy,
}

impl Default for VacationPolicy {
    fn default() -> Self {
        Self {
            base_total_days: Decimal::from(30),
            flexible_days_available: Decimal::from(7),
            block_days_available: Decimal::from(23),
            flexible_threshold_days: 7,
            advance: AdvancePolicy {
                days_per_month: Decimal::new(25, 1),
                max_days: Decimal::from(30),
            },
        }
    }
}
