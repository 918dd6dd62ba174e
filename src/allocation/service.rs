//! The vacation allocation service.
//!
//! Ties the period validator and the forward search to the storage
//! collaborators: manual create/update of an employee's allocation group,
//! the automatic single-range allocator, and the query/grouping reads.

use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, Mutex};

use tracing::info;

use crate::clock::Clock;
use crate::error::{VacationError, VacationResult};
use crate::models::{CandidateRange, Employee, VacationRange};
use crate::store::{EmployeeDirectory, ParameterStore, VacationStore, VACATION_DAYS_KEY};

use super::search::find_default_window;
use super::validator::validate_period;

/// Allocates and validates yearly vacation periods for employees.
///
/// Every write runs validation fully before touching storage, and the
/// validate-then-write sequence is serialized per employee through an
/// advisory lock, so two concurrent calls for the same employee cannot
/// both pass the existence and overlap checks before either commits.
pub struct VacationService {
    vacations: Arc<dyn VacationStore>,
    employees: Arc<dyn EmployeeDirectory>,
    parameters: Arc<dyn ParameterStore>,
    clock: Arc<dyn Clock>,
    employee_locks: Mutex<HashMap<String, Arc<Mutex<()>>>>,
}

impl VacationService {
    /// Creates a service over the given collaborators.
    pub fn new(
        vacations: Arc<dyn VacationStore>,
        employees: Arc<dyn EmployeeDirectory>,
        parameters: Arc<dyn ParameterStore>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            vacations,
            employees,
            parameters,
            clock,
            employee_locks: Mutex::new(HashMap::new()),
        }
    }

    /// Returns the configured yearly quota of vacation working days.
    ///
    /// An absent or non-numeric parameter value is a
    /// [`VacationError::ConfigurationMissing`] fault, distinct from any
    /// business-rule violation.
    pub fn vacation_quota(&self) -> VacationResult<u32> {
        let raw = self.parameters.get_value(VACATION_DAYS_KEY).ok_or(
            VacationError::ConfigurationMissing {
                key: VACATION_DAYS_KEY.to_string(),
            },
        )?;

        raw.parse::<u32>()
            .map_err(|_| VacationError::ConfigurationMissing {
                key: VACATION_DAYS_KEY.to_string(),
            })
    }

    /// Returns the employee's ranges for one period year, ordered by
    /// begin date. An empty list is not an error.
    pub fn get_for_employee_on_period(
        &self,
        employee_id: &str,
        period_year: i32,
    ) -> Vec<VacationRange> {
        self.vacations.find_all_for_period(employee_id, period_year)
    }

    /// Returns every range for the employee, grouped by period year.
    ///
    /// Intra-group order is by begin date ascending. Pure read, no side
    /// effects.
    pub fn get_all_for_employee(&self, employee_id: &str) -> BTreeMap<i32, Vec<VacationRange>> {
        let mut grouped: BTreeMap<i32, Vec<VacationRange>> = BTreeMap::new();
        for range in self.vacations.find_all(employee_id) {
            grouped.entry(range.period_year).or_default().push(range);
        }
        grouped
    }

    /// Creates a brand-new allocation group for (employee, period year).
    ///
    /// Fails with [`VacationError::InvalidPeriod`] if a group already
    /// exists for the period, or if the candidates violate any validation
    /// gate. No range is persisted unless the whole set is accepted.
    pub fn create_for_employee_on_period(
        &self,
        employee_id: &str,
        period_year: i32,
        candidates: &[CandidateRange],
    ) -> VacationResult<Vec<VacationRange>> {
        let lock = self.employee_lock(employee_id);
        let _guard = lock.lock().expect("employee advisory lock poisoned");

        let employee = self.resolve_employee(employee_id)?;

        if self.vacations.exists_any(employee_id, period_year) {
            return Err(VacationError::invalid_period(format!(
                "vacations already exist for employee '{}' on period {}",
                employee_id, period_year
            )));
        }

        let quota = self.vacation_quota()?;
        validate_period(candidates, period_year, quota)?;

        self.persist_group(&employee, period_year, candidates);

        info!(
            employee_id = %employee_id,
            period_year,
            ranges = candidates.len(),
            "Created vacation allocation"
        );

        Ok(self.vacations.find_all_for_period(employee_id, period_year))
    }

    /// Replaces an existing allocation group wholesale.
    ///
    /// Fails with [`VacationError::PeriodNotFound`] when no group exists
    /// for the period, and with [`VacationError::InvalidPeriod`] when any
    /// range of the group has already been used — used allocations can
    /// never be edited. The old group is only deleted after the new set
    /// passes validation in full.
    pub fn update_for_employee_on_period(
        &self,
        employee_id: &str,
        period_year: i32,
        candidates: &[CandidateRange],
    ) -> VacationResult<Vec<VacationRange>> {
        let lock = self.employee_lock(employee_id);
        let _guard = lock.lock().expect("employee advisory lock poisoned");

        let employee = self.resolve_employee(employee_id)?;

        if !self.vacations.exists_any(employee_id, period_year) {
            return Err(VacationError::PeriodNotFound {
                employee_id: employee_id.to_string(),
                period_year,
            });
        }

        if self.vacations.exists_any_used(employee_id, period_year) {
            return Err(VacationError::invalid_period(format!(
                "vacations on period {} have already been used and cannot be modified",
                period_year
            )));
        }

        let quota = self.vacation_quota()?;
        validate_period(candidates, period_year, quota)?;

        self.vacations.delete_all_for_period(employee_id, period_year);
        self.persist_group(&employee, period_year, candidates);

        info!(
            employee_id = %employee_id,
            period_year,
            ranges = candidates.len(),
            "Replaced vacation allocation"
        );

        Ok(self.vacations.find_all_for_period(employee_id, period_year))
    }

    /// Automatically allocates one quota-sized block for the employee.
    ///
    /// Searches December of the current year first and January of the
    /// next year second; the group it produces belongs to whichever year
    /// the block lands in. Returns the single persisted range.
    pub fn create_default_for_employee(
        &self,
        employee_id: &str,
    ) -> VacationResult<Vec<VacationRange>> {
        let quota = self.vacation_quota()?;
        let window = find_default_window(self.clock.today(), quota)?;

        let lock = self.employee_lock(employee_id);
        let _guard = lock.lock().expect("employee advisory lock poisoned");

        let employee = self.resolve_employee(employee_id)?;

        let range = VacationRange::from_candidate(
            CandidateRange {
                begin_date: window.begin_date,
                end_date: window.end_date,
            },
            employee.id.clone(),
            window.period_year,
        );
        debug_assert_eq!(range.working_days, quota);

        self.vacations.save(range.clone());

        info!(
            employee_id = %employee_id,
            period_year = window.period_year,
            begin_date = %window.begin_date,
            end_date = %window.end_date,
            "Created default vacation allocation"
        );

        Ok(vec![range])
    }

    fn resolve_employee(&self, employee_id: &str) -> VacationResult<Employee> {
        self.employees
            .find_by_id(employee_id)
            .ok_or_else(|| VacationError::EmployeeNotFound {
                employee_id: employee_id.to_string(),
            })
    }

    fn persist_group(&self, employee: &Employee, period_year: i32, candidates: &[CandidateRange]) {
        for candidate in candidates {
            let range = VacationRange::from_candidate(*candidate, employee.id.clone(), period_year);
            self.vacations.save(range);
        }
    }

    fn employee_lock(&self, employee_id: &str) -> Arc<Mutex<()>> {
        let mut locks = self
            .employee_locks
            .lock()
            .expect("employee lock table poisoned");
        // An entry only the table still references is idle; drop it so the
        // table does not grow with every employee id ever seen.
        locks.retain(|_, lock| Arc::strong_count(lock) > 1);
        locks.entry(employee_id.to_string()).or_default().clone()
    }
}
