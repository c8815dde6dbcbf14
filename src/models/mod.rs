//! Core data models for the Vacation Scheduling Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod allotment;
mod employee;
mod range;

pub use allotment::{Allotment, AllotmentStatus, RemainingDays};
pub use employee::Employee;
pub use range::{RangeBuilder, RangeKind, RangeStatus, VacationRange};
