//! Injected time source.
//!
//! The automatic allocator decides between its December and January
//! windows based on the current date. Taking the date from a [`Clock`]
//! rather than the process clock lets tests pin "today" deterministically.

use chrono::{Local, NaiveDate};

/// Supplies the current calendar date.
pub trait Clock: Send + Sync {
    /// Returns today's date.
    fn today(&self) -> NaiveDate;
}

/// A [`Clock`] backed by the local system time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// A [`Clock`] pinned to a fixed date, for tests.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use vacation_engine::clock::{Clock, FixedClock};
///
/// let clock = FixedClock::new(NaiveDate::from_ymd_opt(2025, 12, 20).unwrap());
/// assert_eq!(clock.today(), NaiveDate::from_ymd_opt(2025, 12, 20).unwrap());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    today: NaiveDate,
}

impl FixedClock {
    /// Creates a clock that always reports the given date.
    pub fn new(today: NaiveDate) -> Self {
        Self { today }
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.today
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_clock_reports_pinned_date() {
        let date = NaiveDate::from_ymd_opt(2025, 7, 1).unwrap();
        assert_eq!(FixedClock::new(date).today(), date);
    }

    #[test]
    fn test_clocks_are_object_safe() {
        fn assert_object(_: &dyn Clock) {}
        assert_object(&SystemClock);
        assert_object(&FixedClock::new(
            NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
        ));
    }
}
