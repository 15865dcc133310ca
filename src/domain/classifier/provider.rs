//! Classifier trait definition

use super::{ClassifierError, PredictionResult};

/// Turns encoded image bytes into a ranked species prediction.
///
/// Implementations are CPU bound and synchronous; async callers should run
/// them on the blocking pool.
pub trait Classifier: Send + Sync {
    /// Classify a single encoded image
    fn predict(&self, image: &[u8]) -> Result<PredictionResult, ClassifierError>;

    /// Whether a model is loaded and predictions can succeed
    fn is_ready(&self) -> bool;
}
