//! Vacation range models.
//!
//! A [`VacationRange`] is one contiguous block of calendar dates assigned
//! as vacation. The set of all ranges sharing an (employee, period year)
//! pair forms that employee's allocation group for the year; the group is
//! where the non-overlap and quota invariants live.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::calendar::count_working_days;

/// A caller-supplied candidate date range.
///
/// Callers only ever submit begin and end dates; the derived
/// `working_days` count and the `was_used` flag on [`VacationRange`] are
/// always set by the allocator, never accepted from input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateRange {
    /// First day of the block, inclusive.
    pub begin_date: NaiveDate,
    /// Last day of the block, inclusive.
    pub end_date: NaiveDate,
}

/// One contiguous block of calendar dates assigned as vacation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VacationRange {
    /// Opaque identifier, assigned at creation.
    pub id: Uuid,
    /// The employee this range belongs to.
    pub employee_id: String,
    /// The period year this range counts against.
    pub period_year: i32,
    /// First day of the block, inclusive.
    pub begin_date: NaiveDate,
    /// Last day of the block, inclusive.
    pub end_date: NaiveDate,
    /// Count of Monday-Friday dates in `[begin_date, end_date]`.
    /// Recomputed by the allocator before every persistence call.
    pub working_days: u32,
    /// Whether the vacation has already been consumed. Once true for any
    /// range in a group, the whole group becomes immutable.
    pub was_used: bool,
}

impl VacationRange {
    /// Builds a fresh range for persistence from a candidate.
    ///
    /// Assigns a new id, recomputes `working_days` from the dates, and
    /// forces `was_used` to false.
    pub fn from_candidate(
        candidate: CandidateRange,
        employee_id: impl Into<String>,
        period_year: i32,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            employee_id: employee_id.into(),
            period_year,
            begin_date: candidate.begin_date,
            end_date: candidate.end_date,
            working_days: count_working_days(candidate.begin_date, candidate.end_date),
            was_used: false,
        }
    }
}
