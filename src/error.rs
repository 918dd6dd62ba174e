//! Error types for the Vacation Allocation Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during vacation allocation.

use thiserror::Error;

/// The main error type for the Vacation Allocation Engine.
///
/// All allocator operations return this error type. The variants map onto
/// three distinct failure classes: lookups that found nothing
/// ([`EmployeeNotFound`](VacationError::EmployeeNotFound),
/// [`PeriodNotFound`](VacationError::PeriodNotFound)), business-rule
/// violations ([`InvalidPeriod`](VacationError::InvalidPeriod)), and
/// operational faults
/// ([`ConfigurationMissing`](VacationError::ConfigurationMissing)).
///
/// # Example
///
/// ```
/// use vacation_engine::error::VacationError;
///
/// let error = VacationError::EmployeeNotFound {
///     employee_id: "emp_404".to_string(),
/// };
/// assert_eq!(error.to_string(), "Employee not found: emp_404");
/// ```
#[derive(Debug, Error)]
pub enum VacationError {
    /// The referenced employee does not exist.
    #[error("Employee not found: {employee_id}")]
    EmployeeNotFound {
        /// The employee id that was not found.
        employee_id: String,
    },

    /// No allocation group exists for the employee on the given period year.
    #[error("No vacations exist for employee '{employee_id}' on period {period_year}")]
    PeriodNotFound {
        /// The employee whose allocation was requested.
        employee_id: String,
        /// The period year with no allocation.
        period_year: i32,
    },

    /// A candidate allocation violated a business rule: year mismatch,
    /// overlapping ranges, quota mismatch, a duplicate group on create,
    /// or an attempt to modify an already-used allocation.
    #[error("Invalid vacation period: {message}")]
    InvalidPeriod {
        /// A human-readable description of the violation.
        message: String,
    },

    /// A required configuration parameter is absent or unusable.
    #[error("Configuration parameter missing: {key}")]
    ConfigurationMissing {
        /// The parameter key that could not be resolved.
        key: String,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },
}

impl VacationError {
    /// Creates an [`InvalidPeriod`](VacationError::InvalidPeriod) error
    /// with the given reason.
    pub fn invalid_period(message: impl Into<String>) -> Self {
        VacationError::InvalidPeriod {
            message: message.into(),
        }
    }
}

/// A type alias for Results that return VacationError.
pub type VacationResult<T> = Result<T, VacationError>;
