//! Infrastructure services

mod identification_service;
mod species_service;

pub use identification_service::{Identification, IdentificationService};
pub use species_service::{ExportedReport, SpeciesService};
