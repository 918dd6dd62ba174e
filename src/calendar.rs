//! Working-day calendar utilities.
//!
//! A working day is any calendar date whose weekday is not Saturday or
//! Sunday. No public-holiday calendar is consulted.

use chrono::{Datelike, Duration, NaiveDate, Weekday};

/// Returns true unless the date falls on a Saturday or Sunday.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use vacation_engine::calendar::is_working_day;
///
/// // 2025-06-06 is a Friday, 2025-06-07 a Saturday
/// assert!(is_working_day(NaiveDate::from_ymd_opt(2025, 6, 6).unwrap()));
/// assert!(!is_working_day(NaiveDate::from_ymd_opt(2025, 6, 7).unwrap()));
/// ```
pub fn is_working_day(date: NaiveDate) -> bool {
    !matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Counts the working days in the inclusive range `[begin, end]`.
///
/// Performs a linear scan over the calendar days; ranges in this domain
/// are at most a few weeks long. Returns 0 when `begin > end` — callers
/// are expected not to pass inverted ranges.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use vacation_engine::calendar::count_working_days;
///
/// // Mon 2025-06-02 through Sun 2025-06-08: one full week
/// let begin = NaiveDate::from_ymd_opt(2025, 6, 2).unwrap();
/// let end = NaiveDate::from_ymd_opt(2025, 6, 8).unwrap();
/// assert_eq!(count_working_days(begin, end), 5);
/// ```
pub fn count_working_days(begin: NaiveDate, end: NaiveDate) -> u32 {
    let mut working_days = 0;
    let mut date = begin;
    while date <= end {
        if is_working_day(date) {
            working_days += 1;
        }
        date += Duration::days(1);
    }
    working_days
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_monday_through_friday_are_working_days() {
        // 2025-06-02 is a Monday
        for day in 2..=6 {
            let date = NaiveDate::from_ymd_opt(2025, 6, day).unwrap();
            assert!(is_working_day(date), "2025-06-{:02} should be working", day);
        }
    }

    #[test]
    fn test_saturday_is_not_a_working_day() {
        assert!(!is_working_day(make_date("2025-06-07")));
    }

    #[test]
    fn test_sunday_is_not_a_working_day() {
        assert!(!is_working_day(make_date("2025-06-08")));
    }

    #[test]
    fn test_single_weekday_counts_one() {
        let monday = make_date("2025-06-02");
        assert_eq!(count_working_days(monday, monday), 1);
    }

    #[test]
    fn test_single_weekend_day_counts_zero() {
        let saturday = make_date("2025-06-07");
        assert_eq!(count_working_days(saturday, saturday), 0);
    }

    #[test]
    fn test_inverted_range_counts_zero() {
        let begin = make_date("2025-06-10");
        let end = make_date("2025-06-02");
        assert_eq!(count_working_days(begin, end), 0);
    }

    #[test]
    fn test_full_calendar_week_counts_five() {
        assert_eq!(
            count_working_days(make_date("2025-06-02"), make_date("2025-06-08")),
            5
        );
    }

    #[test]
    fn test_weekend_only_range_counts_zero() {
        assert_eq!(
            count_working_days(make_date("2025-06-07"), make_date("2025-06-08")),
            0
        );
    }

    #[test]
    fn test_december_2025_has_23_working_days() {
        // December 2025: 31 days, four full weekends = 23 weekdays
        assert_eq!(
            count_working_days(make_date("2025-12-01"), make_date("2025-12-31")),
            23
        );
    }

    #[test]
    fn test_count_spans_year_boundary() {
        // Mon Dec 29 2025 through Fri Jan 2 2026
        assert_eq!(
            count_working_days(make_date("2025-12-29"), make_date("2026-01-02")),
            5
        );
    }

    proptest! {
        #[test]
        fn prop_single_day_count_matches_predicate(offset in 0i64..3650) {
            let date = make_date("2024-01-01") + Duration::days(offset);
            let expected = if is_working_day(date) { 1 } else { 0 };
            prop_assert_eq!(count_working_days(date, date), expected);
        }

        #[test]
        fn prop_any_seven_day_window_counts_five(offset in 0i64..3650) {
            let begin = make_date("2024-01-01") + Duration::days(offset);
            let end = begin + Duration::days(6);
            prop_assert_eq!(count_working_days(begin, end), 5);
        }

        #[test]
        fn prop_count_is_additive_over_a_split(offset in 0i64..3650, len in 1i64..60) {
            let begin = make_date("2024-01-01") + Duration::days(offset);
            let end = begin + Duration::days(len);
            let split = begin + Duration::days(len / 2);
            let left = count_working_days(begin, split);
            let right = count_working_days(split + Duration::days(1), end);
            prop_assert_eq!(left + right, count_working_days(begin, end));
        }
    }
}
