use thiserror::Error;

/// Failures raised while turning image bytes into a prediction
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ClassifierError {
    #[error("model failed to load")]
    ModelUnavailable,

    #[error("image decode failed: {0}")]
    ImageDecode(String),

    #[error("model load failed: {0}")]
    ModelLoad(String),

    #[error("inference failed: {0}")]
    Inference(String),

    #[error("model produced {actual} scores, expected {expected}")]
    OutputArity { expected: usize, actual: usize },
}
