//! Core data models for the Vacation Allocation Engine.

mod employee;
mod vacation_range;

pub use employee::Employee;
pub use vacation_range::{CandidateRange, VacationRange};
