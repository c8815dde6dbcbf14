//! Persistence contract for the Vacation Scheduling Engine.
//!
//! The engine never touches ambient storage: every read and write goes
//! through the [`VacationStore`] trait injected into the scheduler. The
//! external store is authoritative and is the serialization point for
//! concurrent mutations of one allotment — implementations must make the
//! write sequence of a single commit transactional (or reject concurrent
//! writers), since the engine issues granular calls.

mod memory;

pub use memory::InMemoryStore;

use uuid::Uuid;

use crate::error::EngineResult;
use crate::models::{Allotment, Employee, VacationRange};

/// Storage operations the engine depends on.
///
/// Methods mirror the REST surface of the backing HR service: employee
/// lookup, allotment queries, range writes, and pool-counter updates.
pub trait VacationStore {
    /// Looks up an employee by id.
    fn find_employee(&self, employee_id: &str) -> EngineResult<Option<Employee>>;

    /// Inserts or replaces an employee record.
    fn insert_employee(&mut self, employee: &Employee) -> EngineResult<()>;

    /// Returns the allotments recorded for an employee, ranges included.
    fn allotments_for(&self, employee_id: &str) -> EngineResult<Vec<Allotment>>;

    /// Looks up an allotment (with its ranges) by id.
    fn find_allotment(&self, allotment_id: Uuid) -> EngineResult<Option<Allotment>>;

    /// Inserts a new allotment.
    fn insert_allotment(&mut self, allotment: &Allotment) -> EngineResult<()>;

    /// Inserts a new range into its allotment.
    fn insert_range(&mut self, range: &VacationRange) -> EngineResult<()>;

    /// Replaces a stored range (status/lineage updates).
    fn update_range(&mut self, range: &VacationRange) -> EngineResult<()>;

    /// Hard-deletes a range.
    fn delete_range(&mut self, range_id: Uuid) -> EngineResult<()>;

    /// Writes an allotment's pool counters (ranges are untouched).
    fn update_counters(&mut self, allotment: &Allotment) -> EngineResult<()>;
}
