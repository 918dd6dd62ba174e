//! Collaborator interfaces consumed by the allocator.
//!
//! The engine does not own employee identity, the vacation-days quota, or
//! persistence; it consumes them through the traits in this module. The
//! in-memory implementations back the HTTP layer and the test suite.

mod memory;

use crate::models::{Employee, VacationRange};

pub use memory::{InMemoryEmployeeDirectory, InMemoryParameterStore, InMemoryVacationStore};

/// The configuration key holding the yearly vacation quota in working days.
pub const VACATION_DAYS_KEY: &str = "vacation_days";

/// Lookup of employee records.
pub trait EmployeeDirectory: Send + Sync {
    /// Returns the employee with the given id, if one exists.
    fn find_by_id(&self, employee_id: &str) -> Option<Employee>;
}

/// Read access to system-wide configuration parameters.
///
/// Parameter values are stored as strings; callers parse them into the
/// type they need.
pub trait ParameterStore: Send + Sync {
    /// Returns the raw value for the given key, if configured.
    fn get_value(&self, key: &str) -> Option<String>;
}

/// Persistence for vacation ranges.
///
/// Query methods that return lists order the ranges by `begin_date`
/// ascending. Implementations must be internally synchronized; the
/// allocator additionally serializes its validate-then-write sequences
/// per employee.
pub trait VacationStore: Send + Sync {
    /// Persists one range.
    fn save(&self, range: VacationRange);

    /// Removes every range for the employee on the given period year.
    fn delete_all_for_period(&self, employee_id: &str, period_year: i32);

    /// Returns the employee's ranges for the given period year.
    fn find_all_for_period(&self, employee_id: &str, period_year: i32) -> Vec<VacationRange>;

    /// Returns every range for the employee, across all period years.
    fn find_all(&self, employee_id: &str) -> Vec<VacationRange>;

    /// Returns true if any range exists for (employee, period year).
    fn exists_any(&self, employee_id: &str, period_year: i32) -> bool;

    /// Returns true if any range for (employee, period year) has already
    /// been consumed.
    fn exists_any_used(&self, employee_id: &str, period_year: i32) -> bool;
}
