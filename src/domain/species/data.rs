//! Built-in aquaculture knowledge base

use super::entity::{Aquaculture, BreedingHatchery, SpeciesRecord, Taxonomy};

pub(super) const BUILTIN_RECORDS: [SpeciesRecord; 5] = [
    SpeciesRecord {
        key: "pangasius",
        taxonomy: Taxonomy {
            kingdom: "Animalia",
            phylum: "Chordata",
            class: "Actinopterygii",
            order: "Siluriformes",
            family: "Pangasiidae",
            genus: "Pangasius",
            species: "Pangasius hypophthalmus",
            common_name: "Pangasius / Sutchi catfish",
        },
        aquaculture: Aquaculture {
            culture_systems: "Earthen ponds, cages, tanks, biofloc and RAS",
            site_selection: "Clay loam soil, perennial water source, flood-free area",
            pond_preparation: "Drying → liming (200–300 kg/ha) → manuring → water filling",
            seed_source: "Hatchery-produced fingerlings",
            seed_size: "8–10 cm fingerlings",
            stocking_density: "10,000–15,000 fingerlings/ha (pond culture)",
            stocking_season: Some("March–June"),
            feeding: "Floating pelleted feed (28–32% crude protein)",
            feeding_rate: "3–5% body weight/day (initial), reduced later",
            water_quality: "Temperature 25–32°C, pH 6.5–8.5, DO >3 mg/L",
            health_management: "Probiotics, regular water exchange, disease monitoring",
            culture_period: "6–8 months",
            harvest_size: "800 g – 1.2 kg",
            harvesting: "Partial and complete harvesting using seine nets",
            production: "15–20 tonnes/ha/year",
        },
        breeding_hatchery: BreedingHatchery {
            breeding_type: "Induced breeding",
            hormones_used: Some("Ovaprim / WOVA-FH"),
            spawning_method: Some("Stripping and fertilisation"),
            spawning_season: None,
            egg_type: None,
            hatchery_type: Some("FRP circular hatchery"),
            incubation_period: "24–30 hours",
            larval_rearing: Some("Spawn → fry → fingerlings in nursery ponds"),
            nursery_rearing: None,
        },
    },
    SpeciesRecord {
        key: "rohu",
        taxonomy: Taxonomy {
            kingdom: "Animalia",
            phylum: "Chordata",
            class: "Actinopterygii",
            order: "Cypriniformes",
            family: "Cyprinidae",
            genus: "Labeo",
            species: "Labeo rohita",
            common_name: "Rohu",
        },
        aquaculture: Aquaculture {
            culture_systems: "Composite carp culture in ponds",
            site_selection: "Loamy soil with good water retention",
            pond_preparation: "Drying → liming (200–250 kg/ha) → manuring",
            seed_source: "Induced breeding hatcheries",
            seed_size: "8–10 cm fingerlings",
            stocking_density: "4,000–6,000/ha (30–35% of total stock)",
            stocking_season: Some("June–July"),
            feeding: "Rice bran + oil cake (1:1) or pelleted feed",
            feeding_rate: "3–4% body weight/day",
            water_quality: "Temperature 22–32°C, pH 6.5–8.5",
            health_management: "Argulosis control, water quality maintenance",
            culture_period: "10–12 months",
            harvest_size: "700 g – 1 kg",
            harvesting: "Seine netting",
            production: "3–5 tonnes/ha/year",
        },
        breeding_hatchery: BreedingHatchery {
            breeding_type: "Induced breeding",
            hormones_used: Some("Pituitary gland extract / Ovaprim"),
            spawning_method: None,
            spawning_season: Some("South-west monsoon"),
            egg_type: None,
            hatchery_type: Some("Chinese circular hatchery"),
            incubation_period: "12–16 hours",
            larval_rearing: None,
            nursery_rearing: Some("Spawn stocked @ 3–5 million/ha"),
        },
    },
    SpeciesRecord {
        key: "catla",
        taxonomy: Taxonomy {
            kingdom: "Animalia",
            phylum: "Chordata",
            class: "Actinopterygii",
            order: "Cypriniformes",
            family: "Cyprinidae",
            genus: "Catla",
            species: "Catla catla",
            common_name: "Catla",
        },
        aquaculture: Aquaculture {
            culture_systems: "Composite carp culture",
            site_selection: "Large ponds with high plankton productivity",
            pond_preparation: "Drying → liming → fertilisation",
            seed_source: "Hatchery produced seed",
            seed_size: "10–12 cm fingerlings",
            stocking_density: "2,000–3,000/ha",
            stocking_season: Some("June–July"),
            feeding: "Supplementary feed + plankton",
            feeding_rate: "2–3% body weight",
            water_quality: "Temperature 25–32°C, pH 6.5–8.0",
            health_management: "EUS prevention, liming",
            culture_period: "10–12 months",
            harvest_size: "1–1.5 kg",
            harvesting: "Drag netting",
            production: "4–6 tonnes/ha/year",
        },
        breeding_hatchery: BreedingHatchery {
            breeding_type: "Induced breeding",
            hormones_used: Some("Pituitary gland / Ovaprim"),
            spawning_method: None,
            spawning_season: Some("Monsoon"),
            egg_type: None,
            hatchery_type: Some("Chinese hatchery"),
            incubation_period: "15–18 hours",
            larval_rearing: None,
            nursery_rearing: None,
        },
    },
    SpeciesRecord {
        key: "common carp",
        taxonomy: Taxonomy {
            kingdom: "Animalia",
            phylum: "Chordata",
            class: "Actinopterygii",
            order: "Cypriniformes",
            family: "Cyprinidae",
            genus: "Cyprinus",
            species: "Cyprinus carpio",
            common_name: "Common Carp",
        },
        aquaculture: Aquaculture {
            culture_systems: "Monoculture and polyculture",
            site_selection: "Wide tolerance to pond conditions",
            pond_preparation: "Drying → liming → organic manuring",
            seed_source: "Natural and induced breeding",
            seed_size: "8–10 cm fingerlings",
            stocking_density: "5,000–8,000/ha",
            stocking_season: None,
            feeding: "Rice bran, oil cake, farm-made feed",
            feeding_rate: "3–5% body weight",
            water_quality: "Temperature 20–30°C, pH 6.5–8.5",
            health_management: "Fin rot control, water exchange",
            culture_period: "8–10 months",
            harvest_size: "1–1.5 kg",
            harvesting: "Seine netting",
            production: "5–7 tonnes/ha/year",
        },
        breeding_hatchery: BreedingHatchery {
            breeding_type: "Natural and induced breeding",
            hormones_used: None,
            spawning_method: Some("Kakaban method"),
            spawning_season: None,
            egg_type: Some("Adhesive eggs"),
            hatchery_type: None,
            incubation_period: "3–5 days",
            larval_rearing: None,
            nursery_rearing: None,
        },
    },
    SpeciesRecord {
        key: "singhi",
        taxonomy: Taxonomy {
            kingdom: "Animalia",
            phylum: "Chordata",
            class: "Actinopterygii",
            order: "Siluriformes",
            family: "Heteropneustidae",
            genus: "Heteropneustes",
            species: "Heteropneustes fossilis",
            common_name: "Singhi",
        },
        aquaculture: Aquaculture {
            culture_systems: "Monoculture in shallow ponds and tanks",
            site_selection: "Shallow ponds with minimal water exchange",
            pond_preparation: "Heavy liming (300–500 kg/ha)",
            seed_source: "Induced breeding",
            seed_size: "5–8 cm fingerlings",
            stocking_density: "50,000–80,000/ha",
            stocking_season: None,
            feeding: "High protein feed (35–40%)",
            feeding_rate: "5–7% body weight",
            water_quality: "Temperature 24–32°C, tolerant to low DO",
            health_management: "Bacterial disease control, clean water",
            culture_period: "6–8 months",
            harvest_size: "80–120 g",
            harvesting: "Hand picking and netting",
            production: "1.5–2.5 tonnes/ha/year",
        },
        breeding_hatchery: BreedingHatchery {
            breeding_type: "Induced breeding",
            hormones_used: Some("Ovaprim"),
            spawning_method: Some("Stripping"),
            spawning_season: None,
            egg_type: None,
            hatchery_type: None,
            incubation_period: "20–24 hours",
            larval_rearing: None,
            nursery_rearing: None,
        },
    },
];

/// Common and scientific names mapped to catalog keys
pub(super) const BUILTIN_ALIASES: [(&str, &str); 11] = [
    ("pangasius", "pangasius"),
    ("pangasius hypophthalmus", "pangasius"),
    ("rohu", "rohu"),
    ("labeo rohita", "rohu"),
    ("catla", "catla"),
    ("catla catla", "catla"),
    ("common carp", "common carp"),
    ("cyprinus carpio", "common carp"),
    ("singhi", "singhi"),
    ("singi", "singhi"),
    ("heteropneustes fossilis", "singhi"),
];
