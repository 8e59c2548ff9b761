//! Static region table.

use serde::{Deserialize, Serialize};

use crate::entities::Race;

/// A place the player can travel to, with the enemies that live there.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Region {
    pub name: String,
    pub description: String,
    /// Candidate enemies as `(name, race)`.
    pub roster: Vec<(String, Race)>,
}

struct RegionTemplate {
    name: &'static str,
    description: &'static str,
    roster: &'static [(&'static str, Race)],
}

const REGIONS: [RegionTemplate; 5] = [
    RegionTemplate {
        name: "Shire",
        description: "Rolling green hills dotted with hobbit-holes. Trouble rarely comes here.",
        roster: &[("Bill Ferny", Race::Human), ("Sharkey's Ruffian", Race::Human)],
    },
    RegionTemplate {
        name: "Misty Mountains",
        description: "Cold peaks riddled with goblin tunnels.",
        roster: &[
            ("Goblin Scout", Race::Goblin),
            ("Goblin Archer", Race::Goblin),
            ("Azog's Lieutenant", Race::Orc),
        ],
    },
    RegionTemplate {
        name: "Mirkwood",
        description: "A dark forest where the light barely reaches the ground.",
        roster: &[
            ("Wood Goblin", Race::Goblin),
            ("Exiled Sentinel", Race::Elf),
            ("Dol Guldur Orc", Race::Orc),
        ],
    },
    RegionTemplate {
        name: "Dead Marshes",
        description: "Still pools where pale faces stare up from beneath the water.",
        roster: &[("Marsh Goblin", Race::Goblin), ("Lost Ranger", Race::Human)],
    },
    RegionTemplate {
        name: "Mordor",
        description: "Ash and fire under a shadowed sky.",
        roster: &[
            ("Uruk Captain", Race::Orc),
            ("Morgul Sentry", Race::Orc),
            ("Black Numenorean", Race::Human),
            ("Snaga", Race::Goblin),
        ],
    },
];

/// Fresh copies of every standard region.
pub fn standard_regions() -> Vec<Region> {
    REGIONS
        .iter()
        .map(|template| Region {
            name: template.name.to_string(),
            description: template.description.to_string(),
            roster: template
                .roster
                .iter()
                .map(|(name, race)| (name.to_string(), *race))
                .collect(),
        })
        .collect()
}
