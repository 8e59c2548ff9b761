//! World state management - regions and the enemies that populate them.
//!
//! A `WorldState` belongs to exactly one game. Name lookups go through it
//! rather than through any process-wide registry, so two games never see each
//! other's characters.

mod regions;

pub use regions::*;

use serde::{Deserialize, Serialize};

use crate::config::WorldConfig;
use crate::dice::Dice;
use crate::entities::{Character, EntityId};
use crate::error::GameError;
use crate::items::random_loot;

/// The complete state of one game's world.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorldState {
    regions: Vec<Region>,
    current_region: usize,

    /// Active enemies in the current region, in spawn order.
    enemies: Vec<Character>,

    /// Names of enemies the player has beaten.
    defeated: Vec<String>,
}

impl Default for WorldState {
    fn default() -> Self {
        Self::new()
    }
}

impl WorldState {
    /// Standard regions, starting in the first one, with nobody around.
    pub fn new() -> Self {
        Self {
            regions: standard_regions(),
            current_region: 0,
            enemies: Vec::new(),
            defeated: Vec::new(),
        }
    }

    /// A world positioned in the configured starting region and populated.
    pub fn generate(config: &WorldConfig, dice: &mut dyn Dice) -> Self {
        let mut world = Self::new();
        if let Some(index) = world.region_index(&config.starting_region) {
            world.current_region = index;
        } else {
            tracing::warn!(region = %config.starting_region, "unknown starting region, using the first");
        }
        world.populate(config, dice);
        world
    }

    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    pub fn current_region(&self) -> &Region {
        &self.regions[self.current_region]
    }

    pub fn enemies(&self) -> &[Character] {
        &self.enemies
    }

    pub fn defeated(&self) -> &[String] {
        &self.defeated
    }

    fn region_index(&self, name: &str) -> Option<usize> {
        let name = name.trim();
        self.regions
            .iter()
            .position(|region| region.name.eq_ignore_ascii_case(name))
    }

    /// Replace the current enemies with a fresh draw from the region roster.
    ///
    /// Spawns between 1 and `enemies_per_region` distinct enemies (none when
    /// that is 0); each has `loot_chance` of carrying one random item.
    pub fn populate(&mut self, config: &WorldConfig, dice: &mut dyn Dice) {
        self.enemies.clear();
        let mut pool = self.current_region().roster.clone();
        let limit = config.enemies_per_region.min(pool.len());
        if limit == 0 {
            tracing::debug!(region = %self.current_region().name, "region left empty");
            return;
        }
        let count = dice.roll(1, limit as i32);

        for _ in 0..count {
            if pool.is_empty() {
                break;
            }
            let pick = dice.roll(0, pool.len() as i32 - 1) as usize;
            let (name, race) = pool.remove(pick);
            let mut enemy = Character::new(name, race);
            if dice.chance() < config.loot_chance {
                if let Some(item) = random_loot(dice) {
                    enemy = enemy.with_items([item]);
                }
            }
            self.enemies.push(enemy);
        }

        tracing::debug!(
            region = %self.current_region().name,
            enemies = self.enemies.len(),
            "region populated"
        );
    }

    /// Travel to another region and repopulate it.
    pub fn change_region(
        &mut self,
        name: &str,
        config: &WorldConfig,
        dice: &mut dyn Dice,
    ) -> Result<&Region, GameError> {
        let index = self
            .region_index(name)
            .ok_or_else(|| GameError::UnknownRegion(name.trim().to_string()))?;
        self.current_region = index;
        self.populate(config, dice);
        Ok(self.current_region())
    }

    /// Add an enemy to the active list.
    pub fn add_enemy(&mut self, enemy: Character) -> EntityId {
        let id = enemy.id;
        self.enemies.push(enemy);
        id
    }

    /// Case-insensitive lookup among active enemies.
    pub fn find_enemy_by_name(&self, name: &str) -> Option<&Character> {
        let name = name.trim();
        self.enemies
            .iter()
            .find(|enemy| enemy.name.eq_ignore_ascii_case(name))
    }

    pub fn pick_random_enemy(&self, dice: &mut dyn Dice) -> Option<&Character> {
        crate::dice::choose(dice, &self.enemies)
    }

    /// Move an enemy out of the world, e.g. into a combat session.
    pub fn take_enemy(&mut self, id: EntityId) -> Option<Character> {
        let index = self.enemies.iter().position(|enemy| enemy.id == id)?;
        Some(self.enemies.remove(index))
    }

    /// Put a surviving enemy back, keeping whatever damage it took.
    pub fn restore_enemy(&mut self, enemy: Character) {
        self.enemies.push(enemy);
    }

    /// Drop an enemy from the active list.
    pub fn remove_enemy(&mut self, id: EntityId) -> Option<Character> {
        self.take_enemy(id)
    }

    pub fn record_defeat(&mut self, name: impl Into<String>) {
        self.defeated.push(name.into());
    }

    /// Description of a region or active enemy, by name.
    pub fn examine(&self, name: &str) -> Option<String> {
        if let Some(index) = self.region_index(name) {
            return Some(self.regions[index].description.clone());
        }
        self.find_enemy_by_name(name)
            .map(|enemy| enemy.description.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::Race;
    use crate::testing::ScriptedDice;

    #[test]
    fn test_generate_uses_starting_region() {
        let config = WorldConfig {
            starting_region: "mordor".into(),
            ..Default::default()
        };
        let mut dice = ScriptedDice::fixed(0, 0.9);
        let world = WorldState::generate(&config, &mut dice);
        assert_eq!(world.current_region().name, "Mordor");
        // a zero roll clamps to the low end: one enemy, no loot
        assert_eq!(world.enemies().len(), 1);
        assert_eq!(world.enemies()[0].name, "Uruk Captain");
        assert!(world.enemies()[0].inventory.is_empty());
    }

    #[test]
    fn test_populate_spawns_distinct_enemies_with_loot() {
        let config = WorldConfig::default();
        let mut world = WorldState::new();
        // three enemies picked at 1, 1, 0; each carries the first loot table entry
        let mut dice = ScriptedDice::new()
            .rolls([3, 1, 0, 1, 0, 0, 0])
            .chances([0.1, 0.1, 0.1]);
        world.change_region("Mirkwood", &config, &mut dice).unwrap();

        let names: Vec<_> = world.enemies().iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["Exiled Sentinel", "Dol Guldur Orc", "Wood Goblin"]);
        assert!(world
            .enemies()
            .iter()
            .all(|e| e.inventory.get(0).map(|i| i.name.as_str()) == Some("Healing Potion")));
    }

    #[test]
    fn test_populate_with_zero_limit_spawns_nobody() {
        let config = WorldConfig {
            enemies_per_region: 0,
            ..Default::default()
        };
        let mut world = WorldState::new();
        world.add_enemy(Character::new("Gorbag", Race::Orc));
        let mut dice = ScriptedDice::fixed(3, 0.1);

        world.populate(&config, &mut dice);

        assert!(world.enemies().is_empty());
    }

    #[test]
    fn test_change_region_unknown() {
        let mut world = WorldState::new();
        let mut dice = ScriptedDice::new();
        let err = world
            .change_region("Narnia", &WorldConfig::default(), &mut dice)
            .unwrap_err();
        assert_eq!(err.to_string(), "There is no region called 'Narnia'.");
        assert_eq!(world.current_region().name, "Shire");
    }

    #[test]
    fn test_enemy_lookup_take_and_restore() {
        let mut world = WorldState::new();
        let id = world.add_enemy(Character::new("Gorbag", Race::Orc));
        world.add_enemy(Character::new("Shagrat", Race::Orc));

        assert_eq!(world.find_enemy_by_name("GORBAG").unwrap().id, id);
        assert!(world.find_enemy_by_name("Sauron").is_none());

        let mut gorbag = world.take_enemy(id).unwrap();
        assert_eq!(world.enemies().len(), 1);
        gorbag.set_health(4);
        world.restore_enemy(gorbag);
        assert_eq!(world.find_enemy_by_name("gorbag").unwrap().health(), 4);

        assert!(world.remove_enemy(id).is_some());
        assert!(world.remove_enemy(id).is_none());
    }

    #[test]
    fn test_pick_random_enemy() {
        let mut world = WorldState::new();
        let mut dice = ScriptedDice::new().rolls([1]);
        assert!(world.pick_random_enemy(&mut dice).is_none());

        world.add_enemy(Character::new("Gorbag", Race::Orc));
        world.add_enemy(Character::new("Shagrat", Race::Orc));
        assert_eq!(world.pick_random_enemy(&mut dice).unwrap().name, "Shagrat");
    }

    #[test]
    fn test_examine() {
        let mut world = WorldState::new();
        world.add_enemy(Character::new("Gorbag", Race::Orc));
        assert_eq!(
            world.examine("gorbag").unwrap(),
            "An Orc warrior with 20 HP."
        );
        assert!(world.examine("dead marshes").unwrap().contains("pale faces"));
        assert!(world.examine("palantir").is_none());
    }
}
