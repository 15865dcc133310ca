use thiserror::Error;

use super::classifier::ClassifierError;

/// Core domain errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Classifier model is unavailable")]
    ModelUnavailable,

    #[error("Could not decode image: {message}")]
    ImageDecodeFailure { message: String },

    #[error("No species data on file for '{label}'")]
    UnknownSpecies { label: String },

    #[error("Species not found: {key}")]
    SpeciesNotFound { key: String },

    #[error("Inference error: {message}")]
    Inference { message: String },

    #[error("Report error: {message}")]
    Report { message: String },

    #[error("Validation error: {message}")]
    Validation { message: String },
}

impl DomainError {
    pub fn image_decode(message: impl Into<String>) -> Self {
        Self::ImageDecodeFailure {
            message: message.into(),
        }
    }

    pub fn unknown_species(label: impl Into<String>) -> Self {
        Self::UnknownSpecies {
            label: label.into(),
        }
    }

    pub fn species_not_found(key: impl Into<String>) -> Self {
        Self::SpeciesNotFound { key: key.into() }
    }

    pub fn inference(message: impl Into<String>) -> Self {
        Self::Inference {
            message: message.into(),
        }
    }

    pub fn report(message: impl Into<String>) -> Self {
        Self::Report {
            message: message.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }
}

impl From<ClassifierError> for DomainError {
    fn from(err: ClassifierError) -> Self {
        match err {
            ClassifierError::ModelUnavailable => Self::ModelUnavailable,
            ClassifierError::ImageDecode(message) => Self::image_decode(message),
            ClassifierError::ModelLoad(message) | ClassifierError::Inference(message) => {
                Self::inference(message)
            }
            ClassifierError::OutputArity { expected, actual } => Self::inference(format!(
                "model produced {} scores, expected {}",
                actual, expected
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_species_not_found_error() {
        let error = DomainError::species_not_found("tilapia");
        assert_eq!(error.to_string(), "Species not found: tilapia");
    }

    #[test]
    fn test_unknown_species_error() {
        let error = DomainError::unknown_species("Tilapia");
        assert_eq!(error.to_string(), "No species data on file for 'Tilapia'");
    }

    #[test]
    fn test_classifier_error_conversion() {
        assert!(matches!(
            DomainError::from(ClassifierError::ModelUnavailable),
            DomainError::ModelUnavailable
        ));
        assert!(matches!(
            DomainError::from(ClassifierError::ImageDecode("bad magic".into())),
            DomainError::ImageDecodeFailure { .. }
        ));
        assert!(matches!(
            DomainError::from(ClassifierError::OutputArity {
                expected: 5,
                actual: 1000
            }),
            DomainError::Inference { .. }
        ));
    }
}
