//! Vacation range model and related types.
//!
//! This module defines the [`VacationRange`] struct representing one
//! contiguous vacation booking, together with its kind/status enums and a
//! validating builder. Ranges are owned exclusively by their allotment.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{EngineError, EngineResult};
use crate::rules::validator::ValidationError;

/// The pool a range draws its days from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RangeKind {
    /// Short range drawn from the flexible pool (at most the flexible
    /// threshold, normally 7 days).
    Flexible,
    /// Long range drawn from the block pool.
    Block,
}

/// The lifecycle state of a range.
///
/// `Rescheduled` is terminal: the range becomes immutable, is excluded from
/// overlap checks against active ranges, and keeps its lineage links.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RangeStatus {
    /// The booking is in force.
    Active,
    /// The booking was superseded by a reschedule.
    Rescheduled,
}

/// Represents one contiguous vacation booking.
///
/// Ranges are created through [`VacationRange::builder`], which validates
/// date order and the day count at construction time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VacationRange {
    /// Unique identifier, stable across the record's lifetime.
    pub id: Uuid,
    /// The allotment this range belongs to.
    pub allotment_id: Uuid,
    /// The employee this range belongs to.
    pub employee_id: String,
    /// First day of the vacation (inclusive).
    pub start_date: NaiveDate,
    /// Last day of the vacation (inclusive).
    pub end_date: NaiveDate,
    /// Inclusive day count, possibly spanning a weekend via the Friday rule.
    pub requested_days: i64,
    /// Which pool the range consumes.
    pub kind: RangeKind,
    /// True when a Friday boundary pulled the following weekend into the range.
    pub includes_weekend_extension: bool,
    /// Lifecycle state.
    pub status: RangeStatus,
    /// True when the booking draws on advanced (borrowed) days.
    pub is_advance: bool,
    /// Ids of the ranges this one superseded (empty for organic bookings).
    #[serde(default)]
    pub rescheduled_from: Vec<Uuid>,
    /// Id of the range that superseded this one, if any.
    pub rescheduled_to: Option<Uuid>,
    /// Optional external document reference (administrative linkage only).
    pub external_document_id: Option<String>,
}

impl VacationRange {
    /// Starts building a range with the required fields.
    ///
    /// # Examples
    ///
    /// ```
    /// use vacation_engine::models::{RangeKind, VacationRange};
    /// use chrono::NaiveDate;
    /// use uuid::Uuid;
    ///
    /// let range = VacationRange::builder(
    ///     Uuid::new_v4(),
    ///     "emp_001",
    ///     NaiveDate::from_ymd_opt(2025, 2, 3).unwrap(),
    ///     NaiveDate::from_ymd_opt(2025, 2, 5).unwrap(),
    ///     3,
    ///     RangeKind::Flexible,
    /// )
    /// .build()
    /// .unwrap();
    /// assert_eq!(range.requested_days, 3);
    /// assert!(range.is_active());
    /// ```
    pub fn builder(
        allotment_id: Uuid,
        employee_id: impl Into<String>,
        start_date: NaiveDate,
        end_date: NaiveDate,
        requested_days: i64,
        kind: RangeKind,
    ) -> RangeBuilder {
        RangeBuilder {
            allotment_id,
            employee_id: employee_id.into(),
            start_date,
            end_date,
            requested_days,
            kind,
            includes_weekend_extension: false,
            is_advance: false,
            rescheduled_from: Vec::new(),
            external_document_id: None,
        }
    }

    /// Returns true while the booking is in force.
    pub fn is_active(&self) -> bool {
        self.status == RangeStatus::Active
    }
}

/// Builder for [`VacationRange`].
///
/// Optional fields are explicit; `build` validates that the dates are
/// ordered and the day count is positive.
#[derive(Debug, Clone)]
pub struct RangeBuilder {
    allotment_id: Uuid,
    employee_id: String,
    start_date: NaiveDate,
    end_date: NaiveDate,
    requested_days: i64,
    kind: RangeKind,
    includes_weekend_extension: bool,
    is_advance: bool,
    rescheduled_from: Vec<Uuid>,
    external_document_id: Option<String>,
}

impl RangeBuilder {
    /// Marks the range as spanning a weekend pulled in by a Friday boundary.
    pub fn includes_weekend_extension(mut self, value: bool) -> Self {
        self.includes_weekend_extension = value;
        self
    }

    /// Marks the range as drawing on advanced (borrowed) days.
    pub fn is_advance(mut self, value: bool) -> Self {
        self.is_advance = value;
        self
    }

    /// Records the ranges this one supersedes.
    pub fn rescheduled_from(mut self, source_ids: Vec<Uuid>) -> Self {
        self.rescheduled_from = source_ids;
        self
    }

    /// Attaches an external document reference.
    pub fn external_document_id(mut self, id: Option<String>) -> Self {
        self.external_document_id = id;
        self
    }

    /// Validates the required fields and produces the range.
    ///
    /// The new range is `active` with a fresh id and no successor.
    pub fn build(self) -> EngineResult<VacationRange> {
        let mut errors = Vec::new();
        if self.start_date > self.end_date {
            errors.push(ValidationError::StartAfterEnd);
        }
        if self.requested_days < 1 {
            errors.push(ValidationError::NonPositiveDayCount {
                days: self.requested_days,
            });
        }
        if !errors.is_empty() {
            return Err(EngineError::InvalidRequest { errors });
        }

        Ok(VacationRange {
            id: Uuid::new_v4(),
            allotment_id: self.allotment_id,
            employee_id: self.employee_id,
            start_date: self.start_date,
            end_date: self.end_date,
            requested_days: self.requested_days,
            kind: self.kind,
            includes_weekend_extension: self.includes_weekend_extension,
            status: RangeStatus::Active,
            is_advance: self.is_advance,
            rescheduled_from: self.rescheduled_from,
            rescheduled_to: None,
            external_document_id: self.external_document_id,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn build_test_range() -> VacationRange {
        VacationRange::builder(
            Uuid::new_v4(),
            "emp_001",
            make_date("2025-02-03"),
            make_date("2025-02-05"),
            3,
            RangeKind::Flexible,
        )
        .build()
        .unwrap()
    }

    #[test]
    fn test_builder_defaults() {
        let range = build_test_range();
        assert_eq!(range.status, RangeStatus::Active);
        assert!(!range.is_advance);
        assert!(!range.includes_weekend_extension);
        assert!(range.rescheduled_from.is_empty());
        assert_eq!(range.rescheduled_to, None);
        assert_eq!(range.external_document_id, None);
    }

    #[test]
    fn test_builder_rejects_reversed_dates() {
        let result = VacationRange::builder(
            Uuid::new_v4(),
            "emp_001",
            make_date("2025-02-05"),
            make_date("2025-02-03"),
            3,
            RangeKind::Flexible,
        )
        .build();

        assert!(matches!(result, Err(EngineError::InvalidRequest { .. })));
    }

    #[test]
    fn test_builder_rejects_zero_day_count() {
        let result = VacationRange::builder(
            Uuid::new_v4(),
            "emp_001",
            make_date("2025-02-03"),
            make_date("2025-02-05"),
            0,
            RangeKind::Flexible,
        )
        .build();

        assert!(matches!(result, Err(EngineError::InvalidRequest { .. })));
    }

    #[test]
    fn test_builder_optional_fields() {
        let source = Uuid::new_v4();
        let range = VacationRange::builder(
            Uuid::new_v4(),
            "emp_001",
            make_date("2025-06-02"),
            make_date("2025-06-10"),
            9,
            RangeKind::Block,
        )
        .includes_weekend_extension(true)
        .is_advance(true)
        .rescheduled_from(vec![source])
        .external_document_id(Some("DOC-042".to_string()))
        .build()
        .unwrap();

        assert!(range.includes_weekend_extension);
        assert!(range.is_advance);
        assert_eq!(range.rescheduled_from, vec![source]);
        assert_eq!(range.external_document_id.as_deref(), Some("DOC-042"));
    }

    #[test]
    fn test_fresh_ranges_get_distinct_ids() {
        assert_ne!(build_test_range().id, build_test_range().id);
    }

    #[test]
    fn test_is_active_reflects_status() {
        let mut range = build_test_range();
        assert!(range.is_active());
        range.status = RangeStatus::Rescheduled;
        assert!(!range.is_active());
    }

    #[test]
    fn test_range_kind_serialization() {
        assert_eq!(
            serde_json::to_string(&RangeKind::Flexible).unwrap(),
            "\"flexible\""
        );
        assert_eq!(serde_json::to_string(&RangeKind::Block).unwrap(), "\"block\"");
    }

    #[test]
    fn test_range_status_serialization() {
        assert_eq!(
            serde_json::to_string(&RangeStatus::Active).unwrap(),
            "\"active\""
        );
        assert_eq!(
            serde_json::to_string(&RangeStatus::Rescheduled).unwrap(),
            "\"rescheduled\""
        );
    }

    #[test]
    fn test_serialize_range_round_trip() {
        let range = build_test_range();
        let json = serde_json::to_string(&range).unwrap();
        let deserialized: VacationRange = serde_json::from_str(&json).unwrap();
        assert_eq!(range, deserialized);
    }
}
