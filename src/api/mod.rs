//! HTTP API module for the Vacation Allocation Engine.
//!
//! This module provides the REST endpoints for creating, replacing and
//! querying employee vacation allocations.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::CreateVacationRangeRequest;
pub use response::{ApiError, VacationDaysResponse};
pub use state::AppState;
