//! HTTP request and response types

pub mod error;
pub mod species;
pub mod upload;

pub use error::{ApiError, ApiErrorResponse};
pub use species::{PredictResponse, SpeciesListResponse, SpeciesSummary, SpeciesView};
pub use upload::ImageUpload;
