//! In-memory reference implementation of the store contract.
//!
//! Used by the HTTP adapter and the test suites. Every method either fully
//! applies or returns an error without touching state, so a scheduler
//! commit sequence against this store cannot partially apply.

use std::collections::HashMap;

use uuid::Uuid;

use crate::error::{EngineError, EngineResult};
use crate::models::{Allotment, Employee, VacationRange};

use super::VacationStore;

/// A `VacationStore` backed by hash maps.
///
/// Allotments own their ranges, matching the domain model: range writes
/// locate the owning allotment and mutate its collection in place.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    employees: HashMap<String, Employee>,
    allotments: HashMap<Uuid, Allotment>,
}

impl InMemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn allotment_mut(&mut self, allotment_id: Uuid) -> EngineResult<&mut Allotment> {
        self.allotments
            .get_mut(&allotment_id)
            .ok_or(EngineError::AllotmentNotFound { allotment_id })
    }
}

impl VacationStore for InMemoryStore {
    fn find_employee(&self, employee_id: &str) -> EngineResult<Option<Employee>> {
        Ok(self.employees.get(employee_id).cloned())
    }

    fn insert_employee(&mut self, employee: &Employee) -> EngineResult<()> {
        self.employees.insert(employee.id.clone(), employee.clone());
        Ok(())
    }

    fn allotments_for(&self, employee_id: &str) -> EngineResult<Vec<Allotment>> {
        Ok(self
            .allotments
            .values()
            .filter(|a| a.employee_id == employee_id)
            .cloned()
            .collect())
    }

    fn find_allotment(&self, allotment_id: Uuid) -> EngineResult<Option<Allotment>> {
        Ok(self.allotments.get(&allotment_id).cloned())
    }

    fn insert_allotment(&mut self, allotment: &Allotment) -> EngineResult<()> {
        self.allotments.insert(allotment.id, allotment.clone());
        Ok(())
    }

    fn insert_range(&mut self, range: &VacationRange) -> EngineResult<()> {
        let allotment = self.allotment_mut(range.allotment_id)?;
        allotment.ranges.push(range.clone());
        Ok(())
    }

    fn update_range(&mut self, range: &VacationRange) -> EngineResult<()> {
        let range_id = range.id;
        let allotment = self.allotment_mut(range.allotment_id)?;
        let stored = allotment
            .find_range_mut(range_id)
            .ok_or(EngineError::RangeNotFound { range_id })?;
        *stored = range.clone();
        Ok(())
    }

    fn delete_range(&mut self, range_id: Uuid) -> EngineResult<()> {
        for allotment in self.allotments.values_mut() {
            if let Some(index) = allotment.ranges.iter().position(|r| r.id == range_id) {
                allotment.ranges.remove(index);
                return Ok(());
            }
        }
        Err(EngineError::RangeNotFound { range_id })
    }

    fn update_counters(&mut self, allotment: &Allotment) -> EngineResult<()> {
        let stored = self.allotment_mut(allotment.id)?;
        stored.total_days = allotment.total_days;
        stored.advance_days_used = allotment.advance_days_used;
        stored.flexible_days_available = allotment.flexible_days_available;
        stored.flexible_days_used = allotment.flexible_days_used;
        stored.block_days_available = allotment.block_days_available;
        stored.block_days_used = allotment.block_days_used;
        stored.status = allotment.status;
        Ok(())
    }
}
