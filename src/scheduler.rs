//! Orchestration: load an allotment, plan with the pure rules, commit
//! write-through against the store.
//!
//! Every mutating operation follows the same shape: read the allotment
//! snapshot, produce a plan (no side effects), then issue the store writes
//! in order — new ranges, range status updates, pool counters — and only
//! then hand the updated snapshot back. If a store write fails the engine
//! returns the error without applying anything in memory; keeping the
//! store-side sequence atomic is the store's contract, since the external
//! store is the serialization point for concurrent mutations of one
//! allotment.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::info;
use uuid::Uuid;

use crate::clock::Clock;
use crate::config::VacationPolicy;
use crate::error::{EngineError, EngineResult};
use crate::models::{Allotment, Employee, RangeStatus, VacationRange};
use crate::rules::advance::{AdvanceSummary, advance_summary, plan_advance};
use crate::rules::day_count::normalized_end_date;
use crate::rules::lifecycle::{open_allotment, plan_booking, plan_removal};
use crate::rules::reschedule::{Replacement, ReschedulePlan, plan_merge, plan_preserve};
use crate::rules::validator::{RangeValidation, ValidationWarning, validate_range};
use crate::store::VacationStore;

/// The result of booking a range.
#[derive(Debug, Clone)]
pub struct BookingOutcome {
    /// The allotment after the booking.
    pub allotment: Allotment,
    /// The range that was created.
    pub range: VacationRange,
    /// Advisory findings from validation, for display.
    pub warnings: Vec<ValidationWarning>,
}

/// The result of a reschedule.
#[derive(Debug, Clone)]
pub struct RescheduleOutcome {
    /// The allotment after the reschedule.
    pub allotment: Allotment,
    /// The replacement ranges that were created.
    pub replacements: Vec<VacationRange>,
}

/// Drives the vacation rules against an injected store and clock.
pub struct VacationScheduler<S, C> {
    store: S,
    clock: C,
    policy: VacationPolicy,
}

impl<S: VacationStore, C: Clock> VacationScheduler<S, C> {
    /// Creates a scheduler over a store, a clock and a policy.
    pub fn new(store: S, clock: C, policy: VacationPolicy) -> Self {
        Self {
            store,
            clock,
            policy,
        }
    }

    /// Returns the policy in force.
    pub fn policy(&self) -> &VacationPolicy {
        &self.policy
    }

    /// Registers (or replaces) an employee record in the store.
    pub fn register_employee(&mut self, employee: Employee) -> EngineResult<Employee> {
        self.store.insert_employee(&employee)?;
        info!(employee_id = %employee.id, "registered employee");
        Ok(employee)
    }

    /// Returns the allotments recorded for an employee.
    pub fn allotments_for(&self, employee_id: &str) -> EngineResult<Vec<Allotment>> {
        self.require_employee(employee_id)?;
        self.store.allotments_for(employee_id)
    }

    /// Finds the employee's allotment, opening a fresh one when none exists.
    ///
    /// The new allotment's period derives from the hire date and its pools
    /// start at the policy baselines.
    pub fn open_allotment(&mut self, employee_id: &str) -> EngineResult<Allotment> {
        let employee = self.require_employee(employee_id)?;

        if let Some(existing) = self.store.allotments_for(employee_id)?.into_iter().next() {
            return Ok(existing);
        }

        let allotment = open_allotment(&employee, &self.policy);
        self.store.insert_allotment(&allotment)?;
        info!(
            allotment_id = %allotment.id,
            employee_id = %employee_id,
            period = %allotment.period_label,
            "opened allotment"
        );
        Ok(allotment)
    }

    /// Dry-run validation of a candidate range.
    ///
    /// The end date is normalized under the Friday rule before the checks
    /// run; no state changes.
    pub fn validate_request(
        &self,
        allotment_id: Uuid,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> EngineResult<RangeValidation> {
        let allotment = self.load_allotment(allotment_id)?;
        let end_date = normalized_end_date(start_date, end_date);
        Ok(validate_range(
            start_date, end_date, &allotment, &self.policy, true,
        ))
    }

    /// Books a new vacation range.
    ///
    /// The end date is normalized under the Friday rule, the full
    /// validation runs, and on success the range insert and the counter
    /// update are written through the store.
    pub fn book_range(
        &mut self,
        allotment_id: Uuid,
        start_date: NaiveDate,
        end_date: NaiveDate,
        is_advance: bool,
        external_document_id: Option<String>,
    ) -> EngineResult<BookingOutcome> {
        let allotment = self.load_allotment(allotment_id)?;
        let end_date = normalized_end_date(start_date, end_date);

        let plan = plan_booking(
            &allotment,
            start_date,
            end_date,
            is_advance,
            external_document_id,
            &self.policy,
        )?;

        self.store.insert_range(&plan.range)?;

        let mut updated = allotment;
        updated.flexible_days_used = plan.flexible_days_used;
        updated.block_days_used = plan.block_days_used;
        updated.ranges.push(plan.range.clone());
        self.store.update_counters(&updated)?;

        info!(
            allotment_id = %allotment_id,
            range_id = %plan.range.id,
            days = plan.range.requested_days,
            kind = ?plan.range.kind,
            "booked vacation range"
        );

        Ok(BookingOutcome {
            allotment: updated,
            range: plan.range,
            warnings: plan.warnings,
        })
    }

    /// Hard-deletes an active range, reversing its pool contribution and
    /// any advance bookkeeping.
    pub fn remove_range(&mut self, allotment_id: Uuid, range_id: Uuid) -> EngineResult<Allotment> {
        let allotment = self.load_allotment(allotment_id)?;
        let plan = plan_removal(&allotment, range_id, &self.policy)?;

        self.store.delete_range(range_id)?;

        let mut updated = allotment;
        updated.ranges.retain(|r| r.id != range_id);
        updated.flexible_days_used = plan.flexible_days_used;
        updated.block_days_used = plan.block_days_used;
        updated.advance_days_used = plan.advance_days_used;
        updated.total_days = plan.total_days;
        self.store.update_counters(&updated)?;

        info!(
            allotment_id = %allotment_id,
            range_id = %range_id,
            "deleted vacation range"
        );

        Ok(updated)
    }

    /// Merge-mode reschedule: folds the selected ranges into one new range.
    ///
    /// The end date is normalized under the Friday rule before planning.
    pub fn reschedule_merge(
        &mut self,
        allotment_id: Uuid,
        source_ids: &[Uuid],
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> EngineResult<RescheduleOutcome> {
        let allotment = self.load_allotment(allotment_id)?;
        let end_date = normalized_end_date(start_date, end_date);
        let today = self.clock.today();

        let plan = plan_merge(
            &allotment,
            source_ids,
            start_date,
            end_date,
            today,
            &self.policy,
        )?;
        self.commit_reschedule(allotment, plan, "merge")
    }

    /// Preserve-count reschedule: replaces each selected range with one new
    /// range. Replacement intervals are taken verbatim.
    pub fn reschedule_preserve(
        &mut self,
        allotment_id: Uuid,
        replacements: &[Replacement],
    ) -> EngineResult<RescheduleOutcome> {
        let allotment = self.load_allotment(allotment_id)?;
        let today = self.clock.today();

        let plan = plan_preserve(&allotment, replacements, today, &self.policy)?;
        self.commit_reschedule(allotment, plan, "preserve-count")
    }

    /// Summarizes the advance balance as of today.
    pub fn advance_summary(&self, allotment_id: Uuid) -> EngineResult<AdvanceSummary> {
        let allotment = self.load_allotment(allotment_id)?;
        Ok(advance_summary(
            &allotment,
            self.clock.today(),
            &self.policy,
        ))
    }

    /// Grants advance days, raising the total and block-pool ceilings.
    pub fn request_advance(
        &mut self,
        allotment_id: Uuid,
        amount: Decimal,
    ) -> EngineResult<Allotment> {
        let allotment = self.load_allotment(allotment_id)?;
        let plan = plan_advance(&allotment, amount, self.clock.today(), &self.policy)?;

        let mut updated = allotment;
        updated.advance_days_used = plan.advance_days_used;
        updated.total_days = plan.total_days;
        updated.block_days_available = plan.block_days_available;
        self.store.update_counters(&updated)?;

        info!(
            allotment_id = %allotment_id,
            amount = %amount,
            "granted advance days"
        );

        Ok(updated)
    }

    fn require_employee(&self, employee_id: &str) -> EngineResult<Employee> {
        self.store
            .find_employee(employee_id)?
            .ok_or_else(|| EngineError::EmployeeNotFound {
                employee_id: employee_id.to_string(),
            })
    }

    fn load_allotment(&self, allotment_id: Uuid) -> EngineResult<Allotment> {
        self.store
            .find_allotment(allotment_id)?
            .ok_or(EngineError::AllotmentNotFound { allotment_id })
    }

    /// Applies a reschedule plan: insert replacements, retire sources with
    /// their successor links, then write the counters.
    fn commit_reschedule(
        &mut self,
        allotment: Allotment,
        plan: ReschedulePlan,
        mode: &str,
    ) -> EngineResult<RescheduleOutcome> {
        for replacement in &plan.replacements {
            self.store.insert_range(replacement)?;
        }

        let mut updated = allotment;
        for retirement in &plan.retirements {
            let snapshot = {
                let range = updated.find_range_mut(retirement.range_id).ok_or(
                    EngineError::RangeNotFound {
                        range_id: retirement.range_id,
                    },
                )?;
                range.status = RangeStatus::Rescheduled;
                range.rescheduled_to = Some(retirement.successor_id);
                range.clone()
            };
            self.store.update_range(&snapshot)?;
        }

        updated.flexible_days_used = plan.flexible_days_used;
        updated.block_days_used = plan.block_days_used;
        updated.ranges.extend(plan.replacements.iter().cloned());
        self.store.update_counters(&updated)?;

        info!(
            allotment_id = %updated.id,
            mode = mode,
            sources = plan.retirements.len(),
            replacements = plan.replacements.len(),
            banked_days = plan.banked_days,
            "applied reschedule"
        );

        Ok(RescheduleOutcome {
            allotment: updated,
            replacements: plan.replacements,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::models::RangeKind;
    use crate::store::InMemoryStore;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn create_test_employee() -> Employee {
        Employee {
            id: "emp_001".to_string(),
            first_name: "Maria".to_string(),
            last_name: "Quispe".to_string(),
            email: "maria.quispe@example.com".to_string(),
            position: "Analyst".to_string(),
            hire_date: make_date("2024-01-10"),
        }
    }

    fn create_scheduler() -> VacationScheduler<InMemoryStore, FixedClock> {
        let mut scheduler = VacationScheduler::new(
            InMemoryStore::new(),
            FixedClock::new(make_date("2025-01-15")),
            VacationPolicy::default(),
        );
        scheduler.register_employee(create_test_employee()).unwrap();
        scheduler
    }

    #[test]
    fn test_open_allotment_creates_then_finds() {
        let mut scheduler = create_scheduler();
        let first = scheduler.open_allotment("emp_001").unwrap();
        assert_eq!(first.period_label, "2025-2026");
        assert_eq!(first.period_start, make_date("2025-01-10"));

        let second = scheduler.open_allotment("emp_001").unwrap();
        assert_eq!(first.id, second.id);
    }

    #[test]
    fn test_open_allotment_unknown_employee() {
        let mut scheduler = create_scheduler();
        let result = scheduler.open_allotment("emp_999");
        assert!(matches!(result, Err(EngineError::EmployeeNotFound { .. })));
    }

    #[test]
    fn test_book_range_writes_through_store() {
        let mut scheduler = create_scheduler();
        let allotment = scheduler.open_allotment("emp_001").unwrap();

        let outcome = scheduler
            .book_range(
                allotment.id,
                make_date("2025-02-03"),
                make_date("2025-02-05"),
                false,
                None,
            )
            .unwrap();

        assert_eq!(outcome.range.kind, RangeKind::Flexible);
        assert_eq!(outcome.allotment.flexible_days_used, Decimal::from(3));

        // The store agrees with the returned snapshot.
        let reloaded = scheduler.load_allotment(allotment.id).unwrap();
        assert_eq!(reloaded, outcome.allotment);
    }

    #[test]
    fn test_book_range_normalizes_friday_start() {
        let mut scheduler = create_scheduler();
        let allotment = scheduler.open_allotment("emp_001").unwrap();

        // Friday booked as a single day extends through Sunday.
        let outcome = scheduler
            .book_range(
                allotment.id,
                make_date("2025-03-07"),
                make_date("2025-03-07"),
                false,
                None,
            )
            .unwrap();

        assert_eq!(outcome.range.end_date, make_date("2025-03-09"));
        assert_eq!(outcome.range.requested_days, 3);
        assert!(outcome.range.includes_weekend_extension);
        assert_eq!(outcome.warnings, vec![ValidationWarning::FridayStart]);
    }

    #[test]
    fn test_book_range_rejection_leaves_store_untouched() {
        let mut scheduler = create_scheduler();
        let allotment = scheduler.open_allotment("emp_001").unwrap();

        let result = scheduler.book_range(
            allotment.id,
            make_date("2025-02-05"),
            make_date("2025-02-03"),
            false,
            None,
        );
        assert!(matches!(result, Err(EngineError::InvalidRequest { .. })));

        let reloaded = scheduler.load_allotment(allotment.id).unwrap();
        assert!(reloaded.ranges.is_empty());
        assert_eq!(reloaded.flexible_days_used, Decimal::ZERO);
    }

    #[test]
    fn test_remove_range_round_trips_counters() {
        let mut scheduler = create_scheduler();
        let allotment = scheduler.open_allotment("emp_001").unwrap();
        let outcome = scheduler
            .book_range(
                allotment.id,
                make_date("2025-02-03"),
                make_date("2025-02-05"),
                false,
                None,
            )
            .unwrap();

        let updated = scheduler
            .remove_range(allotment.id, outcome.range.id)
            .unwrap();
        assert!(updated.ranges.is_empty());
        assert_eq!(updated.flexible_days_used, Decimal::ZERO);

        let reloaded = scheduler.load_allotment(allotment.id).unwrap();
        assert_eq!(reloaded, updated);
    }

    #[test]
    fn test_merge_reschedule_stamps_lineage_everywhere() {
        let mut scheduler = create_scheduler();
        let allotment = scheduler.open_allotment("emp_001").unwrap();
        let first = scheduler
            .book_range(
                allotment.id,
                make_date("2025-05-05"),
                make_date("2025-05-08"),
                false,
                None,
            )
            .unwrap()
            .range;
        let second = scheduler
            .book_range(
                allotment.id,
                make_date("2025-06-02"),
                make_date("2025-06-10"),
                false,
                None,
            )
            .unwrap()
            .range;

        let outcome = scheduler
            .reschedule_merge(
                allotment.id,
                &[first.id, second.id],
                make_date("2025-07-07"),
                make_date("2025-07-12"),
            )
            .unwrap();

        let replacement = &outcome.replacements[0];
        assert_eq!(replacement.rescheduled_from, vec![first.id, second.id]);

        let reloaded = scheduler.load_allotment(allotment.id).unwrap();
        for source_id in [first.id, second.id] {
            let source = reloaded.find_range(source_id).unwrap();
            assert_eq!(source.status, RangeStatus::Rescheduled);
            assert_eq!(source.rescheduled_to, Some(replacement.id));
        }
        assert!(reloaded.find_range(replacement.id).unwrap().is_active());
    }

    #[test]
    fn test_preserve_reschedule_keeps_range_count() {
        let mut scheduler = create_scheduler();
        let allotment = scheduler.open_allotment("emp_001").unwrap();
        let first = scheduler
            .book_range(
                allotment.id,
                make_date("2025-05-05"),
                make_date("2025-05-08"),
                false,
                None,
            )
            .unwrap()
            .range;

        let outcome = scheduler
            .reschedule_preserve(
                allotment.id,
                &[Replacement {
                    source_id: first.id,
                    start_date: make_date("2025-07-07"),
                    end_date: make_date("2025-07-10"),
                }],
            )
            .unwrap();

        assert_eq!(outcome.replacements.len(), 1);
        let reloaded = scheduler.load_allotment(allotment.id).unwrap();
        assert_eq!(reloaded.active_ranges().count(), 1);
        assert_eq!(reloaded.ranges.len(), 2);
    }

    #[test]
    fn test_request_advance_updates_ceilings() {
        let mut scheduler = VacationScheduler::new(
            InMemoryStore::new(),
            FixedClock::new(make_date("2025-03-15")),
            VacationPolicy::default(),
        );
        scheduler.register_employee(create_test_employee()).unwrap();
        let allotment = scheduler.open_allotment("emp_001").unwrap();

        let summary = scheduler.advance_summary(allotment.id).unwrap();
        assert_eq!(summary.accrued, Decimal::new(50, 1));

        let updated = scheduler
            .request_advance(allotment.id, Decimal::from(5))
            .unwrap();
        assert_eq!(updated.total_days, Decimal::from(35));
        assert_eq!(updated.block_days_available, Decimal::from(28));
        assert_eq!(updated.advance_days_used, Decimal::from(5));

        // No range is created by an advance.
        assert!(updated.ranges.is_empty());
    }

    #[test]
    fn test_request_advance_overdraw_is_rejected() {
        let mut scheduler = VacationScheduler::new(
            InMemoryStore::new(),
            FixedClock::new(make_date("2025-03-10")),
            VacationPolicy::default(),
        );
        scheduler.register_employee(create_test_employee()).unwrap();
        let allotment = scheduler.open_allotment("emp_001").unwrap();

        let result = scheduler.request_advance(allotment.id, Decimal::from(6));
        assert!(matches!(result, Err(EngineError::CapacityExceeded { .. })));
    }
}
