//! Employee model.
//!
//! The engine does not own employee records; this struct mirrors the
//! fields the allocator needs from the external employee directory.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// An employee entitled to yearly vacation allocations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier for the employee.
    pub id: String,
    /// The employee's full name.
    pub full_name: String,
    /// The date the employee was hired.
    pub hired_date: NaiveDate,
}
