//! Image classification - preprocessing, forward pass and ranking

mod image_classifier;
mod onnx;
pub mod preprocess;

pub use image_classifier::ImageClassifier;
pub use onnx::OnnxForwardPass;

use tract_onnx::prelude::tract_ndarray::Array4;

use crate::domain::ClassifierError;

#[cfg(test)]
use mockall::automock;

/// Network forward pass: normalized NCHW input to raw logits
#[cfg_attr(test, automock)]
pub trait ForwardPass: Send + Sync {
    fn logits(&self, input: Array4<f32>) -> Result<Vec<f32>, ClassifierError>;
}
