//! Tunable constants for combat and world population.
//!
//! All fields have defaults, so a TOML file only needs the values it changes:
//!
//! ```toml
//! [combat]
//! crit_chance = 0.25
//!
//! [world]
//! starting_region = "Mirkwood"
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::GameError;

/// Top-level game configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub combat: CombatConfig,
    pub world: WorldConfig,
}

impl GameConfig {
    /// Parse a configuration from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, GameError> {
        Ok(toml::from_str(text)?)
    }

    /// Read and parse a configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, GameError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }
}

/// Probabilities and dice ranges used by combat resolution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CombatConfig {
    /// Chance that an attack is a critical hit, before charm bonuses.
    pub crit_chance: f64,

    /// Damage multiplier applied on a critical hit.
    pub crit_multiplier: i32,

    /// Inclusive range of the extra die added by a special attack.
    pub special_bonus: (i32, i32),

    /// Chance the enemy picks a special attack on its turn.
    pub enemy_special_chance: f64,

    /// Minimum adjusted roll for a flee attempt to succeed.
    pub flee_threshold: f64,

    /// Added to (or subtracted from) the flee roll by relative health.
    pub flee_adjustment: f64,

    /// Chance the player acts first when a session is created.
    pub player_first_chance: f64,
}

impl Default for CombatConfig {
    fn default() -> Self {
        Self {
            crit_chance: 0.2,
            crit_multiplier: 2,
            special_bonus: (1, 3),
            enemy_special_chance: 0.2,
            flee_threshold: 0.5,
            flee_adjustment: 0.2,
            player_first_chance: 0.5,
        }
    }
}

/// World population settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    /// Chance a spawned enemy carries one loot item.
    pub loot_chance: f64,

    /// Upper bound on enemies spawned per region visit.
    pub enemies_per_region: usize,

    pub starting_region: String,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            loot_chance: 0.5,
            enemies_per_region: 3,
            starting_region: "Shire".to_string(),
        }
    }
}
