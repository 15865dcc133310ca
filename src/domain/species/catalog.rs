//! Read-only species catalog

use super::data::BUILTIN_RECORDS;
use super::entity::SpeciesRecord;

/// In-memory catalog of species records keyed by canonical key
#[derive(Debug, Clone)]
pub struct SpeciesCatalog {
    records: Vec<SpeciesRecord>,
}

impl SpeciesCatalog {
    pub fn new(records: Vec<SpeciesRecord>) -> Self {
        Self { records }
    }

    /// Catalog compiled into the binary
    pub fn builtin() -> Self {
        Self::new(BUILTIN_RECORDS.to_vec())
    }

    /// Exact lookup by canonical key
    pub fn lookup(&self, key: &str) -> Option<&SpeciesRecord> {
        self.records.iter().find(|record| record.key == key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.lookup(key).is_some()
    }

    /// Canonical keys in catalog order
    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.records.iter().map(|record| record.key)
    }

    pub fn iter(&self) -> impl Iterator<Item = &SpeciesRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl Default for SpeciesCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}
