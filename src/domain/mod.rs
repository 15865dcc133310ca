//! Domain layer - species knowledge, classification and reports

pub mod classifier;
pub mod error;
pub mod report;
pub mod species;

pub use classifier::{
    Classifier, ClassifierError, ClassProbability, PredictionResult, NUM_CLASSES, SPECIES_LABELS,
};
pub use error::DomainError;
pub use report::{PageLayout, ReportDocument, ReportRenderer};
pub use species::{NameNormalizer, SectionKind, SpeciesCatalog, SpeciesRecord};
