//! Period validation.
//!
//! A candidate allocation is accepted only if every range stays inside
//! the period year, the ranges leave a strict gap between one another,
//! and their working days sum to exactly the configured quota.

use chrono::Datelike;

use crate::calendar::count_working_days;
use crate::error::{VacationError, VacationResult};
use crate::models::CandidateRange;

/// Validates a candidate set of date ranges for one period year.
///
/// The gates run in order and each is hard:
///
/// 1. Every range must have `begin_date <= end_date`.
/// 2. Every range's begin and end year must equal `period_year`.
/// 3. Sorted by begin date, each range must end strictly before the next
///    one begins. Sharing a boundary date counts as an overlap, so
///    `[Jan 1, Jan 5]` followed by `[Jan 5, Jan 10]` is rejected while
///    `[Jan 1, Jan 5]` followed by `[Jan 6, Jan 10]` is accepted.
/// 4. The working days across all ranges must sum to exactly `quota` —
///    not at most.
///
/// The check is read-only; it never touches storage. Every rejection is
/// an [`VacationError::InvalidPeriod`] carrying the reason.
pub fn validate_period(
    candidates: &[CandidateRange],
    period_year: i32,
    quota: u32,
) -> VacationResult<()> {
    for candidate in candidates {
        if candidate.begin_date > candidate.end_date {
            return Err(VacationError::invalid_period(format!(
                "range begins {} but ends earlier on {}",
                candidate.begin_date, candidate.end_date
            )));
        }
        if candidate.begin_date.year() != period_year || candidate.end_date.year() != period_year {
            return Err(VacationError::invalid_period(format!(
                "range {} to {} falls outside period year {}",
                candidate.begin_date, candidate.end_date, period_year
            )));
        }
    }

    // Walk adjacent pairs over a defensive sorted copy.
    let mut sorted: Vec<CandidateRange> = candidates.to_vec();
    sorted.sort_by_key(|c| c.begin_date);

    for pair in sorted.windows(2) {
        let (current, next) = (&pair[0], &pair[1]);
        if current.end_date >= next.begin_date {
            return Err(VacationError::invalid_period(format!(
                "range ending {} overlaps range beginning {}",
                current.end_date, next.begin_date
            )));
        }
    }

    let total_working_days: u32 = candidates
        .iter()
        .map(|c| count_working_days(c.begin_date, c.end_date))
        .sum();

    if total_working_days != quota {
        return Err(VacationError::invalid_period(format!(
            "ranges cover {} working days but the configured quota is {}",
            total_working_days, quota
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn range(begin: &str, end: &str) -> CandidateRange {
        CandidateRange {
            begin_date: make_date(begin),
            end_date: make_date(end),
        }
    }

    #[test]
    fn test_valid_single_range_matching_quota() {
        // Mon 2025-03-03 through Fri 2025-03-21: 15 working days
        let candidates = vec![range("2025-03-03", "2025-03-21")];
        assert!(validate_period(&candidates, 2025, 15).is_ok());
    }

    #[test]
    fn test_valid_split_ranges_matching_quota() {
        // 10 + 5 working days, non-overlapping
        let candidates = vec![
            range("2025-03-03", "2025-03-14"),
            range("2025-08-04", "2025-08-08"),
        ];
        assert!(validate_period(&candidates, 2025, 15).is_ok());
    }

    #[test]
    fn test_inverted_range_rejected() {
        let candidates = vec![range("2025-12-10", "2025-12-01")];
        let err = validate_period(&candidates, 2025, 0).unwrap_err();
        assert!(matches!(err, VacationError::InvalidPeriod { .. }));
        assert!(err.to_string().contains("ends earlier"));
    }

    #[test]
    fn test_inverted_range_alongside_quota_sized_range_rejected() {
        // The valid range alone covers the full quota; the inverted range
        // contributes zero working days and must still be rejected
        let candidates = vec![
            range("2025-03-03", "2025-03-21"),
            range("2025-12-10", "2025-12-01"),
        ];
        let err = validate_period(&candidates, 2025, 15).unwrap_err();
        assert!(matches!(err, VacationError::InvalidPeriod { .. }));
    }

    #[test]
    fn test_range_outside_period_year_rejected() {
        let candidates = vec![range("2024-03-04", "2024-03-21")];
        let err = validate_period(&candidates, 2025, 15).unwrap_err();
        assert!(matches!(err, VacationError::InvalidPeriod { .. }));
    }

    #[test]
    fn test_range_spilling_into_next_year_rejected() {
        let candidates = vec![range("2025-12-22", "2026-01-09")];
        let err = validate_period(&candidates, 2025, 15).unwrap_err();
        assert!(matches!(err, VacationError::InvalidPeriod { .. }));
    }

    #[test]
    fn test_shared_boundary_date_rejected_as_overlap() {
        let candidates = vec![
            range("2025-01-01", "2025-01-05"),
            range("2025-01-05", "2025-01-10"),
        ];
        let err = validate_period(&candidates, 2025, 7).unwrap_err();
        assert!(matches!(err, VacationError::InvalidPeriod { .. }));
    }

    #[test]
    fn test_adjacent_without_shared_date_accepted() {
        // Wed Jan 1 - Sun Jan 5 (3 working) then Mon Jan 6 - Fri Jan 10 (5 working)
        let candidates = vec![
            range("2025-01-01", "2025-01-05"),
            range("2025-01-06", "2025-01-10"),
        ];
        assert!(validate_period(&candidates, 2025, 8).is_ok());
    }

    #[test]
    fn test_overlap_detected_regardless_of_input_order() {
        let candidates = vec![
            range("2025-06-09", "2025-06-13"),
            range("2025-06-02", "2025-06-10"),
        ];
        let err = validate_period(&candidates, 2025, 12).unwrap_err();
        assert!(matches!(err, VacationError::InvalidPeriod { .. }));
    }

    #[test]
    fn test_one_working_day_under_quota_rejected() {
        // 2025-03-03 to 2025-03-20: 14 working days
        let candidates = vec![range("2025-03-03", "2025-03-20")];
        let err = validate_period(&candidates, 2025, 15).unwrap_err();
        assert!(err.to_string().contains("14 working days"));
    }

    #[test]
    fn test_one_working_day_over_quota_rejected() {
        // 2025-03-03 to 2025-03-24: 16 working days
        let candidates = vec![range("2025-03-03", "2025-03-24")];
        let err = validate_period(&candidates, 2025, 15).unwrap_err();
        assert!(err.to_string().contains("16 working days"));
    }

    #[test]
    fn test_validator_does_not_reorder_caller_slice() {
        let candidates = vec![
            range("2025-08-04", "2025-08-08"),
            range("2025-03-03", "2025-03-14"),
        ];
        let before = candidates.clone();
        let _ = validate_period(&candidates, 2025, 15);
        assert_eq!(candidates, before);
    }
}
