//! Application state for shared services

use std::sync::Arc;

use crate::infrastructure::services::{IdentificationService, SpeciesService};

/// Application state shared by all handlers. Everything in it is built
/// before the server starts and is read-only afterwards.
#[derive(Clone)]
pub struct AppState {
    pub identification_service: Arc<IdentificationService>,
    pub species_service: Arc<SpeciesService>,
}

impl AppState {
    pub fn new(
        identification_service: Arc<IdentificationService>,
        species_service: Arc<SpeciesService>,
    ) -> Self {
        Self {
            identification_service,
            species_service,
        }
    }
}
