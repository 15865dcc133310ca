//! ONNX forward pass backed by tract

use std::path::Path;

use tract_onnx::prelude::*;
use tracing::{debug, info};

use super::preprocess::INPUT_SIZE;
use super::ForwardPass;
use crate::domain::ClassifierError;

type Plan = TypedRunnableModel<TypedModel>;

/// ResNet-50 with a five-class head, exported to ONNX and optimized once
pub struct OnnxForwardPass {
    plan: Plan,
}

impl std::fmt::Debug for OnnxForwardPass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OnnxForwardPass").finish_non_exhaustive()
    }
}

impl OnnxForwardPass {
    /// Load and optimize the checkpoint at `path`
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ClassifierError> {
        let path = path.as_ref();
        debug!(model_path = %path.display(), "Loading ONNX checkpoint");

        if !path.exists() {
            return Err(ClassifierError::ModelLoad(format!(
                "checkpoint not found at {}",
                path.display()
            )));
        }

        let side = INPUT_SIZE as usize;
        let plan = tract_onnx::onnx()
            .model_for_path(path)
            .and_then(|model| model.with_input_fact(0, f32::fact([1, 3, side, side]).into()))
            .and_then(|model| model.into_optimized())
            .and_then(|model| model.into_runnable())
            .map_err(|e| ClassifierError::ModelLoad(format!("{:#}", e)))?;

        info!(model_path = %path.display(), "ONNX checkpoint loaded");

        Ok(Self { plan })
    }
}

impl ForwardPass for OnnxForwardPass {
    fn logits(&self, input: tract_ndarray::Array4<f32>) -> Result<Vec<f32>, ClassifierError> {
        let tensor: Tensor = input.into();
        let outputs = self
            .plan
            .run(tvec!(tensor.into()))
            .map_err(|e| ClassifierError::Inference(format!("{:#}", e)))?;

        let scores = outputs
            .first()
            .ok_or_else(|| ClassifierError::Inference("model returned no outputs".to_string()))?
            .to_array_view::<f32>()
            .map_err(|e| ClassifierError::Inference(format!("{:#}", e)))?
            .iter()
            .copied()
            .collect();

        Ok(scores)
    }
}
