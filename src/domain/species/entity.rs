//! Species record and its sub-records

use serde::Serialize;

/// A labelled attribute of a species sub-record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Attribute {
    pub label: &'static str,
    pub value: &'static str,
}

impl Attribute {
    const fn new(label: &'static str, value: &'static str) -> Self {
        Self { label, value }
    }
}

/// The three sub-records of a species profile, in render order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    Taxonomy,
    Aquaculture,
    BreedingHatchery,
}

impl SectionKind {
    pub const ALL: [SectionKind; 3] = [
        SectionKind::Taxonomy,
        SectionKind::Aquaculture,
        SectionKind::BreedingHatchery,
    ];

    /// Stable identifier of the section
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Taxonomy => "taxonomy",
            Self::Aquaculture => "aquaculture",
            Self::BreedingHatchery => "breeding_hatchery",
        }
    }

    /// Heading used in rendered reports
    pub fn heading(&self) -> String {
        self.as_str().to_uppercase()
    }
}

impl std::fmt::Display for SectionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Biological classification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Taxonomy {
    pub kingdom: &'static str,
    pub phylum: &'static str,
    pub class: &'static str,
    pub order: &'static str,
    pub family: &'static str,
    pub genus: &'static str,
    pub species: &'static str,
    pub common_name: &'static str,
}

impl Taxonomy {
    pub fn attributes(&self) -> Vec<Attribute> {
        vec![
            Attribute::new("Kingdom", self.kingdom),
            Attribute::new("Phylum", self.phylum),
            Attribute::new("Class", self.class),
            Attribute::new("Order", self.order),
            Attribute::new("Family", self.family),
            Attribute::new("Genus", self.genus),
            Attribute::new("Species", self.species),
            Attribute::new("Common Name", self.common_name),
        ]
    }
}

/// Grow-out practice
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Aquaculture {
    pub culture_systems: &'static str,
    pub site_selection: &'static str,
    pub pond_preparation: &'static str,
    pub seed_source: &'static str,
    pub seed_size: &'static str,
    pub stocking_density: &'static str,
    pub stocking_season: Option<&'static str>,
    pub feeding: &'static str,
    pub feeding_rate: &'static str,
    pub water_quality: &'static str,
    pub health_management: &'static str,
    pub culture_period: &'static str,
    pub harvest_size: &'static str,
    pub harvesting: &'static str,
    pub production: &'static str,
}

impl Aquaculture {
    pub fn attributes(&self) -> Vec<Attribute> {
        let mut attributes = vec![
            Attribute::new("Culture Systems", self.culture_systems),
            Attribute::new("Site Selection", self.site_selection),
            Attribute::new("Pond Preparation", self.pond_preparation),
            Attribute::new("Seed Source", self.seed_source),
            Attribute::new("Seed Size", self.seed_size),
            Attribute::new("Stocking Density", self.stocking_density),
        ];
        push_optional(&mut attributes, "Stocking Season", self.stocking_season);
        attributes.extend([
            Attribute::new("Feeding", self.feeding),
            Attribute::new("Feeding Rate", self.feeding_rate),
            Attribute::new("Water Quality", self.water_quality),
            Attribute::new("Health Management", self.health_management),
            Attribute::new("Culture Period", self.culture_period),
            Attribute::new("Harvest Size", self.harvest_size),
            Attribute::new("Harvesting", self.harvesting),
            Attribute::new("Production", self.production),
        ]);
        attributes
    }
}

/// Seed production facts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BreedingHatchery {
    pub breeding_type: &'static str,
    pub hormones_used: Option<&'static str>,
    pub spawning_method: Option<&'static str>,
    pub spawning_season: Option<&'static str>,
    pub egg_type: Option<&'static str>,
    pub hatchery_type: Option<&'static str>,
    pub incubation_period: &'static str,
    pub larval_rearing: Option<&'static str>,
    pub nursery_rearing: Option<&'static str>,
}

impl BreedingHatchery {
    pub fn attributes(&self) -> Vec<Attribute> {
        let mut attributes = vec![Attribute::new("Breeding Type", self.breeding_type)];
        push_optional(&mut attributes, "Hormones Used", self.hormones_used);
        push_optional(&mut attributes, "Spawning Method", self.spawning_method);
        push_optional(&mut attributes, "Spawning Season", self.spawning_season);
        push_optional(&mut attributes, "Egg Type", self.egg_type);
        push_optional(&mut attributes, "Hatchery Type", self.hatchery_type);
        attributes.push(Attribute::new("Incubation Period", self.incubation_period));
        push_optional(&mut attributes, "Larval Rearing", self.larval_rearing);
        push_optional(&mut attributes, "Nursery Rearing", self.nursery_rearing);
        attributes
    }
}

fn push_optional(attributes: &mut Vec<Attribute>, label: &'static str, value: Option<&'static str>) {
    if let Some(value) = value {
        attributes.push(Attribute::new(label, value));
    }
}

/// Full aquaculture profile of one species
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpeciesRecord {
    pub key: &'static str,
    pub taxonomy: Taxonomy,
    pub aquaculture: Aquaculture,
    pub breeding_hatchery: BreedingHatchery,
}

impl SpeciesRecord {
    /// Canonical catalog key
    pub fn key(&self) -> &'static str {
        self.key
    }

    /// Key in title case, e.g. `common carp` -> `Common Carp`
    pub fn display_name(&self) -> String {
        title_case(self.key)
    }

    /// Attributes of one section in their fixed order
    pub fn section(&self, kind: SectionKind) -> Vec<Attribute> {
        match kind {
            SectionKind::Taxonomy => self.taxonomy.attributes(),
            SectionKind::Aquaculture => self.aquaculture.attributes(),
            SectionKind::BreedingHatchery => self.breeding_hatchery.attributes(),
        }
    }

    /// All sections in render order
    pub fn sections(&self) -> Vec<(SectionKind, Vec<Attribute>)> {
        SectionKind::ALL
            .iter()
            .map(|kind| (*kind, self.section(*kind)))
            .collect()
    }
}

/// Upper-case the first letter of every whitespace separated word
pub fn title_case(value: &str) -> String {
    value
        .split_whitespace()
        .map(|word| {
            let lower = word.to_lowercase();
            let mut chars = lower.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
