//! Allocation logic for the Vacation Allocation Engine.
//!
//! This module contains the period validator that gates every manual
//! write, the forward-search window used by the automatic allocator, and
//! the [`VacationService`] that ties both to the storage collaborators.

mod search;
mod service;
mod validator;

pub use search::{find_default_window, PlannedWindow, SearchWindow};
pub use service::VacationService;
pub use validator::validate_period;
