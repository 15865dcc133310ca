//! Infrastructure layer - model backends, renderers and application services

pub mod classifier;
pub mod logging;
pub mod report;
pub mod services;
