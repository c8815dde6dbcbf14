//! Injectable clock for date-dependent rules.
//!
//! Reschedule eligibility and advance accrual depend on "today". The clock
//! is a trait so tests (and replays) can pin the date.

use chrono::{NaiveDate, Utc};

/// Supplies the current date to the engine.
pub trait Clock: Send + Sync {
    /// Returns today's date.
    fn today(&self) -> NaiveDate;
}

/// The wall clock, reading the current UTC date.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Utc::now().date_naive()
    }
}

/// A clock pinned to a fixed date, for tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    today: NaiveDate,
}

impl FixedClock {
    /// Creates a clock that always reports the given date.
    pub fn new(today: NaiveDate) -> Self {
        Self { today }
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.today
    }
}

impl Clock for Box<dyn Clock> {
    fn today(&self) -> NaiveDate {
        (**self).today()
    }
}
