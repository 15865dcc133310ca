//! Species service - catalog queries and report export

use std::sync::Arc;

use tracing::debug;

use crate::domain::{DomainError, NameNormalizer, ReportRenderer, SpeciesCatalog, SpeciesRecord};

/// Rendered report ready for download
#[derive(Debug, Clone)]
pub struct ExportedReport {
    pub file_name: String,
    pub content_type: &'static str,
    pub bytes: Vec<u8>,
}

/// Catalog access keyed by user supplied species names
#[derive(Clone)]
pub struct SpeciesService {
    catalog: Arc<SpeciesCatalog>,
    normalizer: Arc<NameNormalizer>,
    renderer: Arc<dyn ReportRenderer>,
}

impl SpeciesService {
    pub fn new(
        catalog: Arc<SpeciesCatalog>,
        normalizer: Arc<NameNormalizer>,
        renderer: Arc<dyn ReportRenderer>,
    ) -> Self {
        Self {
            catalog,
            normalizer,
            renderer,
        }
    }

    /// All records in catalog order
    pub fn list(&self) -> Vec<&SpeciesRecord> {
        self.catalog.iter().collect()
    }

    /// Resolve a name to a catalog key: the lowercased name itself when it is
    /// a key, otherwise its alias target
    pub fn resolve_key(&self, name: &str) -> Option<&'static str> {
        let lowered = name.trim().to_lowercase();

        if let Some(record) = self.catalog.lookup(&lowered) {
            return Some(record.key);
        }

        self.normalizer
            .normalize(&lowered)
            .and_then(|key| self.catalog.lookup(key))
            .map(|record| record.key)
    }

    pub fn get(&self, name: &str) -> Result<&SpeciesRecord, DomainError> {
        self.resolve_key(name)
            .and_then(|key| self.catalog.lookup(key))
            .ok_or_else(|| DomainError::species_not_found(name))
    }

    /// Render the profile of the named species
    pub fn export(&self, name: &str) -> Result<ExportedReport, DomainError> {
        let key = self
            .resolve_key(name)
            .ok_or_else(|| DomainError::species_not_found(name))?;

        let bytes = self.renderer.render(key)?;
        debug!(species_key = %key, bytes = bytes.len(), "Species report exported");

        Ok(ExportedReport {
            file_name: format!("{}.{}", key, self.renderer.file_extension()),
            content_type: self.renderer.content_type(),
            bytes,
        })
    }
}
