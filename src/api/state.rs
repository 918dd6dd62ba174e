//! Application state for the Vacation Allocation Engine API.

use std::sync::Arc;

use crate::allocation::VacationService;

/// Shared application state.
///
/// Holds the allocation service behind an [`Arc`] so every request
/// handler works against the same collaborators.
#[derive(Clone)]
pub struct AppState {
    service: Arc<VacationService>,
}

impl AppState {
    /// Creates a new application state over the given service.
    pub fn new(service: VacationService) -> Self {
        Self {
            service: Arc::new(service),
        }
    }

    /// Returns a reference to the allocation service.
    pub fn service(&self) -> &VacationService {
        &self.service
    }
}
