//! Request types for the Vacation Allocation Engine API.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::CandidateRange;

/// One candidate date range in a create or update request.
///
/// Callers submit begin and end dates only; working-day counts and the
/// used flag are always derived server-side.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CreateVacationRangeRequest {
    /// First day of the requested block, inclusive.
    pub begin_date: NaiveDate,
    /// Last day of the requested block, inclusive.
    pub end_date: NaiveDate,
}

impl From<CreateVacationRangeRequest> for CandidateRange {
    fn from(request: CreateVacationRangeRequest) -> Self {
        CandidateRange {
            begin_date: request.begin_date,
            end_date: request.end_date,
        }
    }
}
