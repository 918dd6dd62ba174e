//! Forward search for the automatic allocator.
//!
//! The automatic allocator is a greedy forward-fit scheduler with exactly
//! two candidate windows: December of the current year, then January of
//! the next year. It never looks backward and never splits the quota
//! across non-contiguous blocks; only manual submission can do that.

use chrono::{Datelike, Duration, NaiveDate};

use crate::calendar::{count_working_days, is_working_day};
use crate::error::{VacationError, VacationResult};

/// The candidate windows of the forward search, tried in declaration
/// order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchWindow {
    /// December of the current year, from the later of Dec 1 and today.
    December,
    /// January of the next year, from Jan 1.
    JanuaryNextYear,
}

/// A quota-sized block of working days placed by the search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlannedWindow {
    /// The period year the block counts against: the current year for a
    /// December placement, the next year for a January placement.
    pub period_year: i32,
    /// First day of the block; always a working day.
    pub begin_date: NaiveDate,
    /// Last day of the block; the quota-th working day after `begin_date`.
    pub end_date: NaiveDate,
}

/// Finds a contiguous block of exactly `quota` working days.
///
/// Tries December of `today`'s year first. The December window starts at
/// the later of December 1 and `today`, so a late call correctly falls
/// through to January. The attempt is abandoned when the window cannot
/// hold the quota or when the block would spill past December 31; the
/// search then restarts in January of the next year.
///
/// The January attempt is bounded: if January itself cannot hold the
/// quota the call fails with [`VacationError::InvalidPeriod`] instead of
/// scanning into February.
pub fn find_default_window(today: NaiveDate, quota: u32) -> VacationResult<PlannedWindow> {
    if quota == 0 {
        return Err(VacationError::invalid_period(
            "the configured quota must be at least one working day",
        ));
    }

    let mut window = SearchWindow::December;
    loop {
        match window {
            SearchWindow::December => {
                let current_year = today.year();
                let december_start = ymd(current_year, 12, 1);
                let december_end = ymd(current_year, 12, 31);
                let window_start = today.max(december_start);

                if count_working_days(window_start, december_end) < quota {
                    window = SearchWindow::JanuaryNextYear;
                    continue;
                }

                let begin_date = first_working_day_from(window_start);
                let end_date = extend_to_quota(begin_date, quota);

                // The block spilled into January; restart there.
                if end_date.month() != 12 {
                    window = SearchWindow::JanuaryNextYear;
                    continue;
                }

                return Ok(PlannedWindow {
                    period_year: current_year,
                    begin_date,
                    end_date,
                });
            }
            SearchWindow::JanuaryNextYear => {
                let next_year = today.year() + 1;
                let january_start = ymd(next_year, 1, 1);
                let january_end = ymd(next_year, 1, 31);

                if count_working_days(january_start, january_end) < quota {
                    return Err(VacationError::invalid_period(format!(
                        "quota of {} working days does not fit in January {}",
                        quota, next_year
                    )));
                }

                let begin_date = first_working_day_from(january_start);
                let end_date = extend_to_quota(begin_date, quota);

                return Ok(PlannedWindow {
                    period_year: next_year,
                    begin_date,
                    end_date,
                });
            }
        }
    }
}

fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid calendar date")
}

/// Advances day by day until a working day is reached.
fn first_working_day_from(mut date: NaiveDate) -> NaiveDate {
    while !is_working_day(date) {
        date += Duration::days(1);
    }
    date
}

/// Extends the block one day at a time until it holds exactly `quota`
/// working days. `begin` must be a working day and `quota` at least 1;
/// the returned end date is the quota-th working day.
fn extend_to_quota(begin: NaiveDate, quota: u32) -> NaiveDate {
    let mut end = begin;
    let mut count = 1;
    while count < quota {
        end += Duration::days(1);
        if is_working_day(end) {
            count += 1;
        }
    }
    end
}
