//! Species and prediction response types

use serde::Serialize;

use crate::domain::species::Attribute;
use crate::domain::{PredictionResult, SectionKind, SpeciesRecord};
use crate::infrastructure::services::Identification;

/// One section of a species profile
#[derive(Debug, Clone, Serialize)]
pub struct SectionView {
    pub name: SectionKind,
    pub heading: String,
    pub attributes: Vec<Attribute>,
}

/// Full species profile
#[derive(Debug, Clone, Serialize)]
pub struct SpeciesView {
    pub key: String,
    pub display_name: String,
    pub sections: Vec<SectionView>,
}

impl SpeciesView {
    pub fn from_domain(record: &SpeciesRecord) -> Self {
        Self {
            key: record.key.to_string(),
            display_name: record.display_name(),
            sections: record
                .sections()
                .into_iter()
                .map(|(kind, attributes)| SectionView {
                    name: kind,
                    heading: kind.heading(),
                    attributes,
                })
                .collect(),
        }
    }
}

/// Catalog listing entry
#[derive(Debug, Clone, Serialize)]
pub struct SpeciesSummary {
    pub key: String,
    pub display_name: String,
    pub scientific_name: String,
    pub download_url: String,
}

impl SpeciesSummary {
    pub fn from_domain(record: &SpeciesRecord) -> Self {
        Self {
            key: record.key.to_string(),
            display_name: record.display_name(),
            scientific_name: record.taxonomy.species.to_string(),
            download_url: format!("/download/{}", record.key.replace(' ', "%20")),
        }
    }
}

/// Response of `GET /species`
#[derive(Debug, Clone, Serialize)]
pub struct SpeciesListResponse {
    pub species: Vec<SpeciesSummary>,
}

/// Response of `POST /predict`
#[derive(Debug, Clone, Serialize)]
pub struct PredictResponse {
    pub fish_name: String,
    pub species_key: String,
    pub prediction: PredictionResult,
    pub species: SpeciesView,
}

impl PredictResponse {
    pub fn from_domain(identification: &Identification) -> Self {
        Self {
            fish_name: identification.fish_name(),
            species_key: identification.species_key().to_string(),
            prediction: identification.prediction.clone(),
            species: SpeciesView::from_domain(&identification.species),
        }
    }
}
