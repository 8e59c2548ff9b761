//! Character definitions.

use serde::{Deserialize, Serialize};

use super::{
    Carrier, Defended, EntityId, EquippedSlots, InventoryComponent, Race, RaceAbility,
    StatsComponent,
};
use crate::error::GameError;
use crate::items::Item;
use crate::mechanics::EquipmentSlot;

/// A player or enemy with stats, gear and an inventory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Character {
    pub id: EntityId,
    pub name: String,
    pub race: Race,
    pub description: String,

    pub stats: StatsComponent,
    pub inventory: InventoryComponent,
    equipped: EquippedSlots,
}

impl Character {
    /// Create a character with the race's starting numbers and an empty inventory.
    pub fn new(name: impl Into<String>, race: Race) -> Self {
        let profile = race.profile();
        let article = if race.to_string().starts_with(['A', 'E', 'I', 'O', 'U']) {
            "An"
        } else {
            "A"
        };
        Self {
            id: EntityId::new(),
            name: name.into(),
            race,
            description: format!("{article} {race} warrior with {} HP.", profile.health),
            stats: StatsComponent::new(profile.health, profile.attack, profile.defense),
            inventory: InventoryComponent::default(),
            equipped: EquippedSlots::default(),
        }
    }

    /// Builder-style: add items, silently stopping at capacity.
    pub fn with_items(mut self, items: impl IntoIterator<Item = Item>) -> Self {
        for item in items {
            if self.inventory.push(item).is_err() {
                break;
            }
        }
        self
    }

    pub fn is_alive(&self) -> bool {
        self.stats.current_hp() > 0
    }

    pub fn health(&self) -> i32 {
        self.stats.current_hp()
    }

    pub fn max_health(&self) -> i32 {
        self.stats.max_hp()
    }

    pub fn ability(&self) -> Option<RaceAbility> {
        self.race.profile().ability
    }

    /// Clamp into `[0, max_health]`. Every health change goes through here.
    pub fn set_health(&mut self, value: i32) {
        self.stats.set_health(value);
    }

    pub fn set_max_health(&mut self, value: i32) {
        self.stats.set_max_health(value);
    }

    /// Heal and return how much health was actually restored.
    pub fn heal(&mut self, amount: i32) -> i32 {
        let before = self.health();
        self.set_health(before + amount);
        self.health() - before
    }

    /// Base attack plus equipped weapon.
    pub fn effective_attack(&self) -> i32 {
        self.stats.base_attack() + self.equipped_item(EquipmentSlot::Weapon).map_or(0, Item::attack_bonus)
    }

    /// Base defense plus equipped armor.
    pub fn effective_defense(&self) -> i32 {
        self.stats.base_defense() + self.equipped_item(EquipmentSlot::Armor).map_or(0, Item::defense_bonus)
    }

    /// Critical chance granted by the equipped charm.
    pub fn crit_bonus(&self) -> f64 {
        self.equipped_item(EquipmentSlot::Charm).map_or(0.0, Item::crit_bonus)
    }

    pub fn equipped(&self) -> &EquippedSlots {
        &self.equipped
    }

    pub fn equipped_item(&self, slot: EquipmentSlot) -> Option<&Item> {
        self.equipped
            .get(slot)
            .and_then(|id| self.inventory.find_by_id(id))
    }

    /// Add an item to the inventory, refusing when it is full.
    pub fn add_item(&mut self, item: Item) -> Result<String, GameError> {
        let name = item.name.clone();
        self.inventory
            .push(item)
            .map_err(|item| GameError::InventoryFull {
                owner: self.name.clone(),
                item: item.name,
            })?;
        Ok(format!("{} acquires {}!", self.name, name))
    }

    /// Remove an item, first unequipping it if needed.
    pub fn remove_item(&mut self, id: EntityId) -> Result<Item, GameError> {
        self.inventory
            .position_of(id)
            .and_then(|index| self.take_item_at(index))
            .ok_or_else(|| GameError::ItemNotFound {
                owner: self.name.clone(),
                item: id.to_string(),
            })
    }

    pub(crate) fn take_item_at(&mut self, index: usize) -> Option<Item> {
        let mut item = self.inventory.remove_at(index)?;
        if item.is_equipped() {
            self.equipped.release(item.id);
            item.set_equipped(false);
        }
        Some(item)
    }

    /// Equip or unequip the equipment at `index`.
    ///
    /// Equipping displaces whatever was in the same slot, so each slot holds at
    /// most one item and the `equipped` flags agree with the slot pointers.
    pub fn toggle_equipment(&mut self, index: usize) -> Result<String, GameError> {
        let item = self.inventory.get(index).ok_or_else(|| {
            GameError::InvalidItemSelector(format!("There is no item #{index}."))
        })?;
        let Some(slot) = item.slot() else {
            return Err(GameError::InvalidItemSelector(format!(
                "{} cannot be equipped.",
                item.name
            )));
        };
        let id = item.id;

        if item.is_equipped() {
            let name = item.name.clone();
            self.unequip(slot);
            let verb = match slot {
                EquipmentSlot::Weapon => "unequips",
                EquipmentSlot::Armor => "removes",
                EquipmentSlot::Charm => "takes off",
            };
            return Ok(format!("{} {verb} {name}.", self.name));
        }

        let mut message = String::new();
        if let Some(previous) = self.unequip(slot) {
            message.push_str(&format!("{} unequips {}. ", self.name, previous));
        }

        self.equipped.set(slot, Some(id));
        let Some(item) = self.inventory.find_by_id_mut(id) else {
            return Err(GameError::ItemNotFound {
                owner: self.name.clone(),
                item: id.to_string(),
            });
        };
        item.set_equipped(true);

        let gain = match slot {
            EquipmentSlot::Weapon => format!(
                "{} equips {}, gaining +{} attack power!",
                self.name,
                item.name,
                item.attack_bonus()
            ),
            EquipmentSlot::Armor => format!(
                "{} puts on {}, gaining +{} defense!",
                self.name,
                item.name,
                item.defense_bonus()
            ),
            EquipmentSlot::Charm => format!(
                "{} wears {}, gaining +{:.0}% critical chance!",
                self.name,
                item.name,
                item.crit_bonus() * 100.0
            ),
        };
        message.push_str(&gain);
        Ok(message)
    }

    /// Clear a slot and return the name of what was there.
    fn unequip(&mut self, slot: EquipmentSlot) -> Option<String> {
        let id = self.equipped.get(slot)?;
        self.equipped.set(slot, None);
        let item = self.inventory.find_by_id_mut(id)?;
        item.set_equipped(false);
        Some(item.name.clone())
    }
}

impl Defended for Character {
    fn effective_defense(&self) -> i32 {
        Character::effective_defense(self)
    }
}

impl Carrier for Character {
    fn carrier_name(&self) -> &str {
        &self.name
    }

    fn inventory(&self) -> &InventoryComponent {
        &self.inventory
    }

    fn receive(&mut self, item: Item) -> Result<(), Item> {
        self.inventory.push(item)
    }

    fn surrender_all(&mut self) -> Vec<Item> {
        self.equipped = EquippedSlots::default();
        let mut items = self.inventory.drain();
        for item in &mut items {
            item.set_equipped(false);
        }
        items
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn armed_human() -> Character {
        Character::new("Aragorn", Race::Human).with_items([
            Item::weapon("Rusty Sword", "Old.", 1),
            Item::weapon("Iron Sword", "Sharp.", 3),
            Item::armor("Leather Tunic", "Basic.", 1),
            Item::healing_potion(10),
        ])
    }

    #[test]
    fn test_new_character() {
        let character = Character::new("Test Hero", Race::Orc);
        assert_eq!(character.name, "Test Hero");
        assert!(character.is_alive());
        assert_eq!(character.health(), 20);
        assert_eq!(character.effective_attack(), 5);
        assert_eq!(character.effective_defense(), 1);
        assert_eq!(character.description, "An Orc warrior with 20 HP.");
        assert_eq!(
            Character::new("Legolas", Race::Elf).description,
            "An Elf warrior with 15 HP."
        );
    }

    #[test]
    fn test_character_death() {
        let mut character = Character::new("Doomed", Race::Human);
        character.set_health(-5);
        assert_eq!(character.health(), 0);
        assert!(!character.is_alive());
    }

    #[test]
    fn test_heal_reports_actual_amount() {
        let mut character = Character::new("Boromir", Race::Human);
        character.set_health(15);
        assert_eq!(character.heal(10), 3);
        assert_eq!(character.health(), 18);
    }

    #[test]
    fn test_equip_is_exclusive_per_slot() {
        let mut hero = armed_human();
        hero.toggle_equipment(0).unwrap();
        assert_eq!(hero.effective_attack(), 5);

        let message = hero.toggle_equipment(1).unwrap();
        assert!(message.starts_with("Aragorn unequips Rusty Sword."));
        assert_eq!(hero.effective_attack(), 7);
        assert!(!hero.inventory.get(0).unwrap().is_equipped());
        assert!(hero.inventory.get(1).unwrap().is_equipped());
        assert_eq!(
            hero.equipped().weapon,
            Some(hero.inventory.get(1).unwrap().id)
        );
    }

    #[test]
    fn test_toggle_twice_unequips() {
        let mut hero = armed_human();
        hero.toggle_equipment(2).unwrap();
        assert_eq!(hero.effective_defense(), 1);
        let message = hero.toggle_equipment(2).unwrap();
        assert_eq!(message, "Aragorn removes Leather Tunic.");
        assert_eq!(hero.effective_defense(), 0);
        assert!(hero.equipped().armor.is_none());
    }

    #[test]
    fn test_toggle_rejects_consumables_and_bad_index() {
        let mut hero = armed_human();
        assert!(matches!(
            hero.toggle_equipment(3),
            Err(GameError::InvalidItemSelector(_))
        ));
        assert!(matches!(
            hero.toggle_equipment(40),
            Err(GameError::InvalidItemSelector(_))
        ));
    }

    #[test]
    fn test_add_item_refuses_when_full() {
        let mut hero = Character::new("Sam", Race::Human)
            .with_items((0..10).map(|_| Item::healing_potion(10)));
        let err = hero.add_item(Item::damage_potion(8)).unwrap_err();
        assert!(matches!(err, GameError::InventoryFull { .. }));
        assert_eq!(hero.inventory.len(), 10);
    }

    #[test]
    fn test_remove_equipped_item_clears_slot() {
        let mut hero = armed_human();
        hero.toggle_equipment(1).unwrap();
        let id = hero.inventory.get(1).unwrap().id;

        let removed = hero.remove_item(id).unwrap();
        assert!(!removed.is_equipped());
        assert!(hero.equipped().weapon.is_none());
        assert_eq!(hero.effective_attack(), 4);
        assert!(matches!(
            hero.remove_item(id),
            Err(GameError::ItemNotFound { .. })
        ));
    }

    #[test]
    fn test_surrender_all_unequips() {
        let mut hero = armed_human();
        hero.toggle_equipment(0).unwrap();
        let items = hero.surrender_all();
        assert_eq!(items.len(), 4);
        assert!(items.iter().all(|item| !item.is_equipped()));
        assert!(hero.inventory.is_empty());
        assert_eq!(hero.effective_attack(), 4);
    }
}
