//! Identification service - predict, normalize and look up a species

use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::species::title_case;
use crate::domain::{
    Classifier, DomainError, NameNormalizer, PredictionResult, SpeciesCatalog, SpeciesRecord,
};

/// A classified image resolved to its catalog record
#[derive(Debug, Clone)]
pub struct Identification {
    pub prediction: PredictionResult,
    pub species: SpeciesRecord,
}

impl Identification {
    /// Predicted label in title case, e.g. `Common carp` -> `Common Carp`
    pub fn fish_name(&self) -> String {
        title_case(&self.prediction.predicted_class)
    }

    pub fn species_key(&self) -> &'static str {
        self.species.key
    }
}

/// Runs the predict -> normalize -> lookup pipeline
#[derive(Clone)]
pub struct IdentificationService {
    classifier: Arc<dyn Classifier>,
    normalizer: Arc<NameNormalizer>,
    catalog: Arc<SpeciesCatalog>,
}

impl IdentificationService {
    pub fn new(
        classifier: Arc<dyn Classifier>,
        normalizer: Arc<NameNormalizer>,
        catalog: Arc<SpeciesCatalog>,
    ) -> Self {
        Self {
            classifier,
            normalizer,
            catalog,
        }
    }

    /// Whether the underlying classifier has a model loaded
    pub fn is_ready(&self) -> bool {
        self.classifier.is_ready()
    }

    /// Classify on the blocking pool and resolve the species
    pub async fn identify(&self, image: Vec<u8>) -> Result<Identification, DomainError> {
        let classifier = Arc::clone(&self.classifier);
        let prediction = tokio::task::spawn_blocking(move || classifier.predict(&image))
            .await
            .map_err(|e| DomainError::inference(format!("classification task failed: {}", e)))??;

        self.resolve(prediction)
    }

    /// Map a prediction onto its catalog record.
    ///
    /// A label without an alias, or an alias without a record, is
    /// `UnknownSpecies`.
    pub fn resolve(&self, prediction: PredictionResult) -> Result<Identification, DomainError> {
        let label = prediction.predicted_class.as_str();

        let Some(key) = self.normalizer.normalize(label) else {
            warn!(predicted_class = %label, "Prediction has no catalog alias");
            return Err(DomainError::unknown_species(label));
        };

        let Some(species) = self.catalog.lookup(key) else {
            warn!(predicted_class = %label, species_key = %key, "Alias points at missing record");
            return Err(DomainError::unknown_species(label));
        };

        info!(
            predicted_class = %label,
            confidence = %prediction.confidence,
            species_key = %key,
            "Species identified"
        );

        Ok(Identification {
            prediction,
            species: species.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::classifier::mock::StubClassifier;
    use crate::domain::report::ReportDocument;
    use crate::domain::{ClassifierError, SPECIES_LABELS};

    fn service(classifier: StubClassifier) -> (IdentificationService, Arc<StubClassifier>) {
        let classifier = Arc::new(classifier);
        let service = IdentificationService::new(
            classifier.clone(),
            Arc::new(NameNormalizer::builtin()),
            Arc::new(SpeciesCatalog::builtin()),
        );
        (service, classifier)
    }

    #[tokio::test]
    async fn test_pangasius_end_to_end() {
        let (service, _) = service(StubClassifier::favouring("Pangasius", 0.9123));

        let identification = service.identify(b"image".to_vec()).await.unwrap();

        assert_eq!(identification.prediction.predicted_class, "Pangasius");
        assert_eq!(identification.prediction.confidence, "91.23%");
        assert_eq!(identification.species_key(), "pangasius");
        assert_eq!(identification.fish_name(), "Pangasius");

        let text = ReportDocument::from_record(&identification.species).to_text();
        assert!(text.contains("- Common Name: Pangasius / Sutchi catfish"));
    }

    #[tokio::test]
    async fn test_every_label_identifies() {
        for label in SPECIES_LABELS {
            let (service, _) = service(StubClassifier::favouring(label, 0.6));
            let identification = service.identify(Vec::new()).await.unwrap();
            assert_eq!(identification.prediction.predicted_class, label);
        }
    }

    #[tokio::test]
    async fn test_singi_label_resolves_to_singhi() {
        let (service, _) = service(StubClassifier::favouring("Singi", 0.7));

        let identification = service.identify(Vec::new()).await.unwrap();
        assert_eq!(identification.species_key(), "singhi");
        assert_eq!(identification.fish_name(), "Singi");
    }

    #[tokio::test]
    async fn test_model_unavailable() {
        let (service, classifier) =
            service(StubClassifier::failing(ClassifierError::ModelUnavailable));

        let err = service.identify(b"image".to_vec()).await.unwrap_err();
        assert!(matches!(err, DomainError::ModelUnavailable));
        assert!(!service.is_ready());
        assert_eq!(classifier.calls(), 1);
    }

    #[tokio::test]
    async fn test_decode_failure() {
        let (service, _) = service(StubClassifier::failing(ClassifierError::ImageDecode(
            "unsupported format".into(),
        )));

        let err = service.identify(b"zzz".to_vec()).await.unwrap_err();
        assert!(matches!(err, DomainError::ImageDecodeFailure { .. }));
    }

    #[test]
    fn test_unknown_label_is_explicit_error() {
        let (service, _) = service(StubClassifier::with_logits(vec![0.0; 5]));
        let prediction = PredictionResult::from_logits(&["Tilapia"], &[1.0]).unwrap();

        let err = service.resolve(prediction).unwrap_err();
        assert!(matches!(err, DomainError::UnknownSpecies { label } if label == "Tilapia"));
    }

    #[tokio::test]
    async fn test_alias_without_record() {
        let service = IdentificationService::new(
            Arc::new(StubClassifier::favouring("Rohu", 0.9)),
            Arc::new(NameNormalizer::builtin()),
            Arc::new(SpeciesCatalog::new(Vec::new())),
        );

        let err = service.identify(b"image".to_vec()).await.unwrap_err();
        assert!(matches!(err, DomainError::UnknownSpecies { .. }));
    }
}
