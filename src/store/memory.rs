//! In-memory collaborator implementations.

use std::collections::HashMap;
use std::sync::Mutex;

use crate::models::{Employee, VacationRange};

use super::{EmployeeDirectory, ParameterStore, VacationStore};

/// An [`EmployeeDirectory`] backed by a map.
#[derive(Debug, Default)]
pub struct InMemoryEmployeeDirectory {
    employees: Mutex<HashMap<String, Employee>>,
}

impl InMemoryEmployeeDirectory {
    /// Creates an empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces an employee record.
    pub fn insert(&self, employee: Employee) {
        self.employees
            .lock()
            .expect("employee directory lock poisoned")
            .insert(employee.id.clone(), employee);
    }
}

impl EmployeeDirectory for InMemoryEmployeeDirectory {
    fn find_by_id(&self, employee_id: &str) -> Option<Employee> {
        self.employees
            .lock()
            .expect("employee directory lock poisoned")
            .get(employee_id)
            .cloned()
    }
}

/// A [`ParameterStore`] backed by a map.
#[derive(Debug, Default)]
pub struct InMemoryParameterStore {
    parameters: Mutex<HashMap<String, String>>,
}

impl InMemoryParameterStore {
    /// Creates an empty parameter store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a parameter value.
    pub fn set(&self, key: impl Into<String>, value: impl Into<String>) {
        self.parameters
            .lock()
            .expect("parameter store lock poisoned")
            .insert(key.into(), value.into());
    }
}

impl ParameterStore for InMemoryParameterStore {
    fn get_value(&self, key: &str) -> Option<String> {
        self.parameters
            .lock()
            .expect("parameter store lock poisoned")
            .get(key)
            .cloned()
    }
}

/// A [`VacationStore`] backed by a vector.
#[derive(Debug, Default)]
pub struct InMemoryVacationStore {
    ranges: Mutex<Vec<VacationRange>>,
}

impl InMemoryVacationStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn sorted(mut ranges: Vec<VacationRange>) -> Vec<VacationRange> {
        ranges.sort_by_key(|r| r.begin_date);
        ranges
    }
}

impl VacationStore for InMemoryVacationStore {
    fn save(&self, range: VacationRange) {
        self.ranges
            .lock()
            .expect("vacation store lock poisoned")
            .push(range);
    }

    fn delete_all_for_period(&self, employee_id: &str, period_year: i32) {
        self.ranges
            .lock()
            .expect("vacation store lock poisoned")
            .retain(|r| !(r.employee_id == employee_id && r.period_year == period_year));
    }

    fn find_all_for_period(&self, employee_id: &str, period_year: i32) -> Vec<VacationRange> {
        let ranges = self
            .ranges
            .lock()
            .expect("vacation store lock poisoned")
            .iter()
            .filter(|r| r.employee_id == employee_id && r.period_year == period_year)
            .cloned()
            .collect();
        Self::sorted(ranges)
    }

    fn find_all(&self, employee_id: &str) -> Vec<VacationRange> {
        let ranges = self
            .ranges
            .lock()
            .expect("vacation store lock poisoned")
            .iter()
            .filter(|r| r.employee_id == employee_id)
            .cloned()
            .collect();
        Self::sorted(ranges)
    }

    fn exists_any(&self, employee_id: &str, period_year: i32) -> bool {
        self.ranges
            .lock()
            .expect("vacation store lock poisoned")
            .iter()
            .any(|r| r.employee_id == employee_id && r.period_year == period_year)
    }

    fn exists_any_used(&self, employee_id: &str, period_year: i32) -> bool {
        self.ranges
            .lock()
            .expect("vacation store lock poisoned")
            .iter()
            .any(|r| r.employee_id == employee_id && r.period_year == period_year && r.was_used)
    }
}

impl InMemoryVacationStore {
    /// Sets `was_used` on every range for (employee, period year).
    ///
    /// Support hook for exercising the immutable-group rule; in production
    /// this transition belongs to the collaborator that spends vacations.
    pub fn mark_used(&self, employee_id: &str, period_year: i32) {
        for range in self
            .ranges
            .lock()
            .expect("vacation store lock poisoned")
            .iter_mut()
        {
            if range.employee_id == employee_id && range.period_year == period_year {
                range.was_used = true;
            }
        }
    }
}
