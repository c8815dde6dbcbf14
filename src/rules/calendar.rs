//! Calendar arithmetic for vacation scheduling.
//!
//! This module provides the pure date utilities the rules are built on:
//! inclusive day counts, weekday classification, the Friday→Sunday
//! extension, vacation-period derivation from a hire date, and
//! whole-months-elapsed for advance accrual.

use chrono::{Datelike, Duration, NaiveDate, Weekday};

/// Counts the days in a closed date interval.
///
/// Callers must reject `start > end` before calling; the count is only
/// meaningful for ordered dates.
///
/// # Examples
///
/// ```
/// use vacation_engine::rules::calendar::inclusive_day_count;
/// use chrono::NaiveDate;
///
/// let start = NaiveDate::from_ymd_opt(2025, 2, 3).unwrap();
/// let end = NaiveDate::from_ymd_opt(2025, 2, 5).unwrap();
/// assert_eq!(inclusive_day_count(start, end), 3);
/// assert_eq!(inclusive_day_count(start, start), 1);
/// ```
pub fn inclusive_day_count(start: NaiveDate, end: NaiveDate) -> i64 {
    (end - start).num_days() + 1
}

/// Returns true when the date falls on a Friday.
pub fn is_friday(date: NaiveDate) -> bool {
    date.weekday() == Weekday::Fri
}

/// Returns true when the date falls on a Saturday.
pub fn is_saturday(date: NaiveDate) -> bool {
    date.weekday() == Weekday::Sat
}

/// Returns true when the date falls on a Sunday.
pub fn is_sunday(date: NaiveDate) -> bool {
    date.weekday() == Weekday::Sun
}

/// Returns true when the date falls on a Saturday or Sunday.
pub fn is_weekend(date: NaiveDate) -> bool {
    is_saturday(date) || is_sunday(date)
}

/// Returns the Sunday that follows a Friday: `date + 2 days`.
pub fn friday_extended_sunday(date: NaiveDate) -> NaiveDate {
    date + Duration::days(2)
}

/// Adds whole years to a date, clamping Feb 29 to Feb 28 when the target
/// year is not a leap year.
pub fn add_years(date: NaiveDate, years: i32) -> NaiveDate {
    date.with_year(date.year() + years).unwrap_or_else(|| {
        // with_year only fails for Feb 29 on a non-leap target year.
        NaiveDate::from_ymd_opt(date.year() + years, 2, 28).expect("Feb 28 exists in every year")
    })
}

/// One employee's vacation year, derived from the hire date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VacationPeriod {
    /// Display label, e.g. "2025-2026".
    pub label: String,
    /// First day vacations may be taken (hire date + 1 year).
    pub start: NaiveDate,
    /// Day the period closes (start + 1 year).
    pub end: NaiveDate,
}

/// Derives the vacation period for an employee.
///
/// Vacations open one year after hiring and the period runs for one year.
///
/// # Examples
///
/// ```
/// use vacation_engine::rules::calendar::vacation_period;
/// use chrono::NaiveDate;
///
/// let period = vacation_period(NaiveDate::from_ymd_opt(2024, 1, 10).unwrap());
/// assert_eq!(period.start, NaiveDate::from_ymd_opt(2025, 1, 10).unwrap());
/// assert_eq!(period.end, NaiveDate::from_ymd_opt(2026, 1, 10).unwrap());
/// assert_eq!(period.label, "2025-2026");
/// ```
pub fn vacation_period(hire_date: NaiveDate) -> VacationPeriod {
    let start = add_years(hire_date, 1);
    let end = add_years(start, 1);

    VacationPeriod {
        label: format!("{}-{}", start.year(), end.year()),
        start,
        end,
    }
}

/// Counts the whole calendar months elapsed between two dates.
///
/// Returns 0 when `now` is on or before `period_start`. A month counts only
/// once `now`'s day-of-month has reached the period start's day-of-month.
///
/// # Examples
///
/// ```
/// use vacation_engine::rules::calendar::whole_months_elapsed;
/// use chrono::NaiveDate;
///
/// let start = NaiveDate::from_ymd_opt(2025, 1, 10).unwrap();
/// let mid_march = NaiveDate::from_ymd_opt(2025, 3, 15).unwrap();
/// assert_eq!(whole_months_elapsed(start, mid_march), 2);
/// ```
pub fn whole_months_elapsed(period_start: NaiveDate, now: NaiveDate) -> u32 {
    if now <= period_start {
        return 0;
    }

    let mut months = (now.year() - period_start.year()) * 12 + now.month() as i32
        - period_start.month() as i32;
    if now.day() < period_start.day() {
        months -= 1;
    }
    months.max(0) as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_inclusive_day_count_single_day() {
        let day = make_date("2025-02-03");
        assert_eq!(inclusive_day_count(day, day), 1);
    }

    #[test]
    fn test_inclusive_day_count_monday_to_wednesday() {
        assert_eq!(
            inclusive_day_count(make_date("2025-02-03"), make_date("2025-02-05")),
            3
        );
    }

    #[test]
    fn test_inclusive_day_count_across_month_boundary() {
        assert_eq!(
            inclusive_day_count(make_date("2025-01-30"), make_date("2025-02-02")),
            4
        );
    }

    #[test]
    fn test_weekday_classification() {
        // 2025-03-07 is a Friday, 03-08 Saturday, 03-09 Sunday.
        assert!(is_friday(make_date("2025-03-07")));
        assert!(is_saturday(make_date("2025-03-08")));
        assert!(is_sunday(make_date("2025-03-09")));
        assert!(!is_weekend(make_date("2025-03-07")));
        assert!(is_weekend(make_date("2025-03-08")));
        assert!(is_weekend(make_date("2025-03-09")));
    }

    #[test]
    fn test_friday_extended_sunday() {
        let friday = make_date("2025-03-07");
        let sunday = friday_extended_sunday(friday);
        assert_eq!(sunday, make_date("2025-03-09"));
        assert!(is_sunday(sunday));
    }

    #[test]
    fn test_add_years_plain_date() {
        assert_eq!(add_years(make_date("2024-01-10"), 1), make_date("2025-01-10"));
    }

    #[test]
    fn test_add_years_clamps_leap_day() {
        assert_eq!(add_years(make_date("2024-02-29"), 1), make_date("2025-02-28"));
        assert_eq!(add_years(make_date("2024-02-29"), 4), make_date("2028-02-29"));
    }

    #[test]
    fn test_vacation_period_from_hire_date() {
        let period = vacation_period(make_date("2024-01-10"));
        assert_eq!(period.start, make_date("2025-01-10"));
        assert_eq!(period.end, make_date("2026-01-10"));
        assert_eq!(period.label, "2025-2026");
    }

    #[test]
    fn test_vacation_period_label_spans_calendar_years() {
        let period = vacation_period(make_date("2023-11-02"));
        assert_eq!(period.label, "2024-2025");
    }

    #[test]
    fn test_whole_months_zero_before_start() {
        let start = make_date("2025-01-10");
        assert_eq!(whole_months_elapsed(start, make_date("2024-12-31")), 0);
        assert_eq!(whole_months_elapsed(start, start), 0);
    }

    #[test]
    fn test_whole_months_partial_month_does_not_count() {
        let start = make_date("2025-01-10");
        assert_eq!(whole_months_elapsed(start, make_date("2025-02-09")), 0);
        assert_eq!(whole_months_elapsed(start, make_date("2025-02-10")), 1);
    }

    #[test]
    fn test_whole_months_two_elapsed() {
        let start = make_date("2025-01-10");
        assert_eq!(whole_months_elapsed(start, make_date("2025-03-15")), 2);
    }

    #[test]
    fn test_whole_months_across_year_boundary() {
        let start = make_date("2025-01-10");
        assert_eq!(whole_months_elapsed(start, make_date("2026-01-10")), 12);
        assert_eq!(whole_months_elapsed(start, make_date("2026-03-09")), 13);
    }

    proptest! {
        #[test]
        fn prop_day_count_matches_difference_plus_one(
            start_offset in 0i64..20_000,
            span in 0i64..1_000,
        ) {
            let base = make_date("2000-01-01");
            let start = base + Duration::days(start_offset);
            let end = start + Duration::days(span);
            prop_assert_eq!(inclusive_day_count(start, end), span + 1);
            prop_assert!(inclusive_day_count(start, end) >= 1);
        }

        #[test]
        fn prop_friday_extension_lands_on_sunday(offset in 0i64..20_000) {
            let date = make_date("2000-01-01") + Duration::days(offset);
            if is_friday(date) {
                prop_assert!(is_sunday(friday_extended_sunday(date)));
            }
        }
    }
}
