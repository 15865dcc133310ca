//! Image classifier service holding the process-wide model handle

use std::path::Path;
use std::sync::Arc;

use tracing::{debug, error, info};

use super::onnx::OnnxForwardPass;
use super::preprocess::preprocess;
use super::ForwardPass;
use crate::domain::{Classifier, ClassifierError, PredictionResult, SPECIES_LABELS};

/// Classifier over the five fixed species labels.
///
/// The model handle is resolved once when the classifier is built. A missing
/// handle is a valid state: every prediction then fails with
/// `ModelUnavailable` without touching the image.
#[derive(Clone)]
pub struct ImageClassifier {
    model: Option<Arc<dyn ForwardPass>>,
}

impl std::fmt::Debug for ImageClassifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImageClassifier")
            .field("ready", &self.model.is_some())
            .finish()
    }
}

impl ImageClassifier {
    pub fn new(model: Arc<dyn ForwardPass>) -> Self {
        Self { model: Some(model) }
    }

    /// Classifier whose model failed to load
    pub fn unavailable() -> Self {
        Self { model: None }
    }

    /// Load the ONNX checkpoint once. Load failures are logged and leave the
    /// classifier in the unavailable state; they are never retried.
    pub fn load(model_path: impl AsRef<Path>) -> Self {
        let model_path = model_path.as_ref();

        match OnnxForwardPass::load(model_path) {
            Ok(model) => {
                info!(model_path = %model_path.display(), "Classifier ready");
                Self::new(Arc::new(model))
            }
            Err(e) => {
                error!(
                    model_path = %model_path.display(),
                    error = %e,
                    "Classifier model failed to load; predictions will be unavailable"
                );
                Self::unavailable()
            }
        }
    }
}

impl Classifier for ImageClassifier {
    fn predict(&self, image: &[u8]) -> Result<PredictionResult, ClassifierError> {
        let model = self.model.as_ref().ok_or(ClassifierError::ModelUnavailable)?;

        let input = preprocess(image)?;
        let logits = model.logits(input)?;
        let result = PredictionResult::from_logits(&SPECIES_LABELS, &logits)?;

        debug!(
            predicted_class = %result.predicted_class,
            confidence = %result.confidence,
            "Image classified"
        );

        Ok(result)
    }

    fn is_ready(&self) -> bool {
        self.model.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::classifier::preprocess::fixtures::solid_png;
    use crate::infrastructure::classifier::MockForwardPass;

    fn fixed_logits(logits: Vec<f32>) -> MockForwardPass {
        let mut model = MockForwardPass::new();
        model
            .expect_logits()
            .withf(|input| input.shape() == [1, 3, 224, 224])
            .returning(move |_| Ok(logits.clone()));
        model
    }

    #[test]
    fn test_predict_ranks_all_classes() {
        let classifier = ImageClassifier::new(Arc::new(fixed_logits(vec![
            0.1, 0.2, 3.5, 1.0, -2.0,
        ])));

        let result = classifier.predict(&solid_png(320, 240, [90, 120, 60])).unwrap();

        assert_eq!(result.predicted_class, "Pangasius");
        assert_eq!(result.probabilities.len(), 5);
        let sum: f32 = result.probabilities.iter().map(|p| p.probability).sum();
        assert!((sum - 1.0).abs() < 1e-5);
        for pair in result.probabilities.windows(2) {
            assert!(pair[0].probability >= pair[1].probability);
        }
    }

    #[test]
    fn test_unavailable_model_skips_forward_pass() {
        let classifier = ImageClassifier::unavailable();

        assert!(!classifier.is_ready());
        for _ in 0..3 {
            assert_eq!(
                classifier.predict(&solid_png(8, 8, [0, 0, 0])).unwrap_err(),
                ClassifierError::ModelUnavailable
            );
        }
    }

    #[test]
    fn test_unavailable_wins_over_bad_image() {
        let classifier = ImageClassifier::unavailable();

        assert_eq!(
            classifier.predict(b"garbage").unwrap_err(),
            ClassifierError::ModelUnavailable
        );
    }

    #[test]
    fn test_corrupt_image_never_reaches_model() {
        let mut model = MockForwardPass::new();
        model.expect_logits().times(0);
        let classifier = ImageClassifier::new(Arc::new(model));

        let err = classifier.predict(b"\x89PNG\r\n\x1a\nbroken").unwrap_err();
        assert!(matches!(err, ClassifierError::ImageDecode(_)));
    }

    #[test]
    fn test_wrong_head_size_is_an_error() {
        let classifier = ImageClassifier::new(Arc::new(fixed_logits(vec![0.0; 1000])));

        let err = classifier.predict(&solid_png(64, 64, [1, 1, 1])).unwrap_err();
        assert_eq!(
            err,
            ClassifierError::OutputArity {
                expected: 5,
                actual: 1000
            }
        );
    }

    #[test]
    fn test_backend_failure_propagates() {
        let mut model = MockForwardPass::new();
        model
            .expect_logits()
            .returning(|_| Err(ClassifierError::Inference("out of memory".into())));
        let classifier = ImageClassifier::new(Arc::new(model));

        let err = classifier.predict(&solid_png(64, 64, [1, 1, 1])).unwrap_err();
        assert_eq!(err, ClassifierError::Inference("out of memory".into()));
    }

    #[test]
    fn test_load_missing_checkpoint_degrades() {
        let classifier = ImageClassifier::load("missing/fish_classifier.onnx");

        assert!(!classifier.is_ready());
        assert_eq!(
            classifier.predict(&solid_png(8, 8, [0, 0, 0])).unwrap_err(),
            ClassifierError::ModelUnavailable
        );
    }
}
