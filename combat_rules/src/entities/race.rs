//! Race descriptors.
//!
//! Races differ only in their starting numbers and in an optional extra
//! combat action, so they are plain data rather than separate character types.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Every race a character can belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Race {
    Orc,
    Elf,
    Human,
    /// Enemy-only.
    Goblin,
}

/// Extra combat actions granted by race.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RaceAbility {
    /// Heavy hit that ignores armor, paid for with recoil damage.
    BerserkerRage,
    /// Fixed-damage shot with a raised critical chance.
    PrecisionStrike,
    /// Self-heal plus a permanent defense increase.
    Resilience,
}

impl RaceAbility {
    pub fn name(&self) -> &'static str {
        match self {
            RaceAbility::BerserkerRage => "Berserker Rage",
            RaceAbility::PrecisionStrike => "Precision Strike",
            RaceAbility::Resilience => "Resilience",
        }
    }
}

/// Starting numbers for a race.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RaceProfile {
    pub health: i32,
    pub attack: i32,
    pub defense: i32,
    pub ability: Option<RaceAbility>,
}

impl Race {
    pub const PLAYABLE: [Race; 3] = [Race::Orc, Race::Elf, Race::Human];

    pub fn profile(&self) -> RaceProfile {
        match self {
            Race::Orc => RaceProfile {
                health: 20,
                attack: 5,
                defense: 1,
                ability: Some(RaceAbility::BerserkerRage),
            },
            Race::Elf => RaceProfile {
                health: 15,
                attack: 6,
                defense: 0,
                ability: Some(RaceAbility::PrecisionStrike),
            },
            Race::Human => RaceProfile {
                health: 18,
                attack: 4,
                defense: 0,
                ability: Some(RaceAbility::Resilience),
            },
            Race::Goblin => RaceProfile {
                health: 12,
                attack: 3,
                defense: 0,
                ability: None,
            },
        }
    }

    pub fn is_playable(&self) -> bool {
        Self::PLAYABLE.contains(self)
    }
}

impl fmt::Display for Race {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Race::Orc => "Orc",
            Race::Elf => "Elf",
            Race::Human => "Human",
            Race::Goblin => "Goblin",
        };
        f.write_str(name)
    }
}

impl FromStr for Race {
    type Err = String;

    /// Case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "orc" => Ok(Race::Orc),
            "elf" => Ok(Race::Elf),
            "human" => Ok(Race::Human),
            "goblin" => Ok(Race::Goblin),
            other => Err(format!("unknown race '{other}'")),
        }
    }
}
