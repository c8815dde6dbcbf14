//! Overlap detection between candidate intervals and booked ranges.
//!
//! Both the validator and the reschedule planners funnel through this
//! module, so the interval test exists in exactly one place.

use chrono::NaiveDate;
use uuid::Uuid;

use crate::models::{Allotment, VacationRange};

/// A candidate date interval, before it becomes a range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateInterval {
    /// First day (inclusive).
    pub start: NaiveDate,
    /// Last day (inclusive).
    pub end: NaiveDate,
}

impl DateInterval {
    /// Creates an interval. Callers are responsible for date order.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }
}

/// Tests whether two closed date intervals share at least one day.
///
/// `[a, b]` and `[c, d]` overlap iff `a ≤ d && c ≤ b`. The test is
/// symmetric in its two intervals.
///
/// # Examples
///
/// ```
/// use vacation_engine::rules::overlap::intervals_overlap;
/// use chrono::NaiveDate;
///
/// let d = |s: &str| NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap();
/// assert!(intervals_overlap(d("2025-04-01"), d("2025-04-05"), d("2025-04-04"), d("2025-04-10")));
/// assert!(!intervals_overlap(d("2025-04-01"), d("2025-04-05"), d("2025-04-06"), d("2025-04-10")));
/// ```
pub fn intervals_overlap(
    a_start: NaiveDate,
    a_end: NaiveDate,
    b_start: NaiveDate,
    b_end: NaiveDate,
) -> bool {
    a_start <= b_end && b_start <= a_end
}

/// Finds the first active range conflicting with any of the candidates.
///
/// Only ranges with `active` status and not listed in `exclude_ids` are
/// considered; exclusions let a reschedule ignore the very ranges it is
/// replacing. Iteration follows the allotment's collection order and stops
/// at the first conflict.
pub fn find_overlap<'a>(
    candidates: &[DateInterval],
    allotment: &'a Allotment,
    exclude_ids: &[Uuid],
) -> Option<&'a VacationRange> {
    for candidate in candidates {
        for range in &allotment.ranges {
            if exclude_ids.contains(&range.id) {
                continue;
            }
            if !range.is_active() {
                continue;
            }
            if intervals_overlap(candidate.start, candidate.end, range.start_date, range.end_date)
            {
                return Some(range);
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AllotmentStatus, RangeKind, RangeStatus};
    use chrono::Duration;
    use proptest::prelude::*;
    use rust_decimal::Decimal;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn create_test_allotment() -> Allotment {
        Allotment {
            id: Uuid::new_v4(),
            employee_id: "emp_001".to_string(),
            period_label: "2025-2026".to_string(),
            period_start: make_date("2025-01-10"),
            period_end: make_date("2026-01-10"),
            total_days: Decimal::from(30),
            advance_days_used: Decimal::ZERO,
            flexible_days_available: Decimal::from(7),
            flexible_days_used: Decimal::ZERO,
            block_days_available: Decimal::from(23),
            block_days_used: Decimal::ZERO,
            status: AllotmentStatus::Pending,
            ranges: vec![],
        }
    }

    fn push_range(allotment: &mut Allotment, start: &str, end: &str) -> Uuid {
        let start = make_date(start);
        let end = make_date(end);
        let range = VacationRange::builder(
            allotment.id,
            allotment.employee_id.clone(),
            start,
            end,
            (end - start).num_days() + 1,
            RangeKind::Flexible,
        )
        .build()
        .unwrap();
        let id = range.id;
        allotment.ranges.push(range);
        id
    }

    #[test]
    fn test_touching_intervals_overlap() {
        assert!(intervals_overlap(
            make_date("2025-04-01"),
            make_date("2025-04-05"),
            make_date("2025-04-05"),
            make_date("2025-04-10"),
        ));
    }

    #[test]
    fn test_contained_interval_overlaps() {
        assert!(intervals_overlap(
            make_date("2025-04-01"),
            make_date("2025-04-10"),
            make_date("2025-04-03"),
            make_date("2025-04-04"),
        ));
    }

    #[test]
    fn test_disjoint_intervals_do_not_overlap() {
        assert!(!intervals_overlap(
            make_date("2025-04-01"),
            make_date("2025-04-05"),
            make_date("2025-04-06"),
            make_date("2025-04-10"),
        ));
    }

    #[test]
    fn test_find_overlap_reports_first_conflict() {
        let mut allotment = create_test_allotment();
        let first = push_range(&mut allotment, "2025-04-01", "2025-04-05");
        push_range(&mut allotment, "2025-04-08", "2025-04-12");

        let candidate = DateInterval::new(make_date("2025-04-04"), make_date("2025-04-10"));
        let conflict = find_overlap(&[candidate], &allotment, &[]).unwrap();
        assert_eq!(conflict.id, first);
    }

    #[test]
    fn test_find_overlap_honors_exclusions() {
        let mut allotment = create_test_allotment();
        let first = push_range(&mut allotment, "2025-04-01", "2025-04-05");

        let candidate = DateInterval::new(make_date("2025-04-04"), make_date("2025-04-10"));
        assert!(find_overlap(&[candidate], &allotment, &[first]).is_none());
    }

    #[test]
    fn test_find_overlap_skips_rescheduled_ranges() {
        let mut allotment = create_test_allotment();
        let first = push_range(&mut allotment, "2025-04-01", "2025-04-05");
        allotment.find_range_mut(first).unwrap().status = RangeStatus::Rescheduled;

        let candidate = DateInterval::new(make_date("2025-04-04"), make_date("2025-04-10"));
        assert!(find_overlap(&[candidate], &allotment, &[]).is_none());
    }

    #[test]
    fn test_find_overlap_checks_every_candidate() {
        let mut allotment = create_test_allotment();
        let booked = push_range(&mut allotment, "2025-06-02", "2025-06-06");

        let candidates = [
            DateInterval::new(make_date("2025-05-05"), make_date("2025-05-07")),
            DateInterval::new(make_date("2025-06-04"), make_date("2025-06-09")),
        ];
        let conflict = find_overlap(&candidates, &allotment, &[]).unwrap();
        assert_eq!(conflict.id, booked);
    }

    #[test]
    fn test_find_overlap_none_when_clear() {
        let mut allotment = create_test_allotment();
        push_range(&mut allotment, "2025-04-01", "2025-04-05");

        let candidate = DateInterval::new(make_date("2025-05-01"), make_date("2025-05-03"));
        assert!(find_overlap(&[candidate], &allotment, &[]).is_none());
    }

    proptest! {
        #[test]
        fn prop_overlap_is_symmetric(
            a in 0i64..2_000, a_len in 0i64..60,
            b in 0i64..2_000, b_len in 0i64..60,
        ) {
            let base = make_date("2025-01-01");
            let a_start = base + Duration::days(a);
            let a_end = a_start + Duration::days(a_len);
            let b_start = base + Duration::days(b);
            let b_end = b_start + Duration::days(b_len);

            prop_assert_eq!(
                intervals_overlap(a_start, a_end, b_start, b_end),
                intervals_overlap(b_start, b_end, a_start, a_end)
            );
        }

        #[test]
        fn prop_overlap_iff_shared_day(
            a in 0i64..400, a_len in 0i64..30,
            b in 0i64..400, b_len in 0i64..30,
        ) {
            let base = make_date("2025-01-01");
            let a_start = base + Duration::days(a);
            let a_end = a_start + Duration::days(a_len);
            let b_start = base + Duration::days(b);
            let b_end = b_start + Duration::days(b_len);

            let shared = (a..=a + a_len).any(|day| day >= b && day <= b + b_len);
            prop_assert_eq!(intervals_overlap(a_start, a_end, b_start, b_end), shared);
        }
    }
}
