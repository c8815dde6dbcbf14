//! Requested-day computation and Friday-boundary normalization.
//!
//! Selecting a Friday as a range boundary pulls the following Saturday and
//! Sunday into the vacation. Normalization happens in exactly one place,
//! [`normalized_end_date`], which the scheduler applies before validating
//! new bookings, dry-run validations and merge-mode reschedules.

use chrono::NaiveDate;

use super::calendar::{friday_extended_sunday, inclusive_day_count, is_friday};

/// The computed size of a candidate range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestedDays {
    /// Inclusive day count between the range boundaries.
    pub days: i64,
    /// True when either boundary falls on a Friday, meaning the weekend is
    /// part of the request.
    pub includes_weekend_extension: bool,
}

/// Computes the requested day count for a candidate range.
///
/// The count is the plain inclusive day count; the weekend flag records
/// whether a Friday boundary brought the weekend along. Callers must reject
/// `start > end` first.
///
/// # Examples
///
/// ```
/// use vacation_engine::rules::day_count::requested_days;
/// use chrono::NaiveDate;
///
/// // Monday through Wednesday: three plain days.
/// let computed = requested_days(
///     NaiveDate::from_ymd_opt(2025, 2, 3).unwrap(),
///     NaiveDate::from_ymd_opt(2025, 2, 5).unwrap(),
/// );
/// assert_eq!(computed.days, 3);
/// assert!(!computed.includes_weekend_extension);
/// ```
pub fn requested_days(start: NaiveDate, end: NaiveDate) -> RequestedDays {
    RequestedDays {
        days: inclusive_day_count(start, end),
        includes_weekend_extension: is_friday(start) || is_friday(end),
    }
}

/// Normalizes a candidate end date under the Friday rule.
///
/// An end date falling on a Friday advances to the following Sunday, and a
/// Friday start forces the end to at least that Sunday. Ends already past
/// the weekend are left untouched.
///
/// # Examples
///
/// ```
/// use vacation_engine::rules::day_count::normalized_end_date;
/// use chrono::NaiveDate;
///
/// let friday = NaiveDate::from_ymd_opt(2025, 3, 7).unwrap();
/// let sunday = NaiveDate::from_ymd_opt(2025, 3, 9).unwrap();
/// assert_eq!(normalized_end_date(friday, friday), sunday);
/// ```
pub fn normalized_end_date(start: NaiveDate, end: NaiveDate) -> NaiveDate {
    let mut end = end;
    if is_friday(end) {
        end = friday_extended_sunday(end);
    }
    if is_friday(start) {
        let sunday = friday_extended_sunday(start);
        if end < sunday {
            end = sunday;
        }
    }
    end
}
