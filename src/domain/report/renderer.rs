//! Report renderer trait definition

use crate::domain::DomainError;

/// Renders the profile of a catalog species into a downloadable document
pub trait ReportRenderer: Send + Sync {
    /// Render the species with the given canonical key.
    ///
    /// Returns `DomainError::SpeciesNotFound` when the key is not in the
    /// catalog; no partial document is produced.
    fn render(&self, key: &str) -> Result<Vec<u8>, DomainError>;

    /// MIME type of rendered documents
    fn content_type(&self) -> &'static str;

    /// File extension of rendered documents, without the dot
    fn file_extension(&self) -> &'static str;
}
