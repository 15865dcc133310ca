//! FishTantra
//!
//! Fish species identification service:
//! - ResNet-50 image classifier over five freshwater aquaculture species
//! - Built-in species catalog with taxonomy, culture and hatchery profiles
//! - Downloadable PDF profile reports

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;

use api::state::AppState;
use domain::{NameNormalizer, SpeciesCatalog};
use infrastructure::classifier::ImageClassifier;
use infrastructure::report::PdfReportRenderer;
use infrastructure::services::{IdentificationService, SpeciesService};
use tracing::info;

/// Create the application state with custom configuration.
///
/// The classifier model is loaded here, once. A model that fails to load
/// leaves the state usable with predictions unavailable.
pub async fn create_app_state_with_config(config: &AppConfig) -> anyhow::Result<AppState> {
    let catalog = Arc::new(SpeciesCatalog::builtin());
    let normalizer = Arc::new(NameNormalizer::builtin());
    info!(species = catalog.len(), "Species catalog loaded");

    let model_path = config.classifier.model_path.clone();
    let classifier = tokio::task::spawn_blocking(move || ImageClassifier::load(model_path))
        .await
        .map_err(|e| anyhow::anyhow!("Classifier loading task failed: {}", e))?;

    let identification_service = Arc::new(IdentificationService::new(
        Arc::new(classifier),
        normalizer.clone(),
        catalog.clone(),
    ));
    let species_service = Arc::new(create_species_service(config, catalog, normalizer));

    Ok(AppState::new(identification_service, species_service))
}

/// Catalog and report services only; no classifier model is loaded
pub fn create_species_service(
    config: &AppConfig,
    catalog: Arc<SpeciesCatalog>,
    normalizer: Arc<NameNormalizer>,
) -> SpeciesService {
    let renderer = Arc::new(PdfReportRenderer::new(catalog.clone(), &config.report));

    SpeciesService::new(catalog, normalizer, renderer)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_app_state_without_model() {
        let mut config = AppConfig::default();
        config.classifier.model_path = "does/not/exist.onnx".into();

        let state = create_app_state_with_config(&config).await.unwrap();

        assert!(!state.identification_service.is_ready());
        assert_eq!(state.species_service.list().len(), 5);
    }

    #[test]
    fn test_species_service_exports_without_model() {
        let service = create_species_service(
            &AppConfig::default(),
            Arc::new(SpeciesCatalog::builtin()),
            Arc::new(NameNormalizer::builtin()),
        );

        let report = service.export("rohu").unwrap();
        assert_eq!(report.file_name, "rohu.pdf");
    }
}
