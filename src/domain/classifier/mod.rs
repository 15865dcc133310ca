//! Classifier domain - label set, prediction ranking and the classifier seam

mod error;
mod labels;
mod prediction;
mod provider;

pub use error::ClassifierError;
pub use labels::{NUM_CLASSES, SPECIES_LABELS};
pub use prediction::{softmax, ClassProbability, PredictionResult};
pub use provider::Classifier;

#[cfg(test)]
pub use provider::mock;
