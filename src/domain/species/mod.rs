//! Species domain - aquaculture catalog and name resolution

mod catalog;
mod data;
mod entity;
mod normalizer;

pub use catalog::SpeciesCatalog;
pub use entity::{
    title_case, Aquaculture, Attribute, BreedingHatchery, SectionKind, SpeciesRecord, Taxonomy,
};
pub use normalizer::NameNormalizer;
