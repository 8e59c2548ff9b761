//! Component definitions for characters.

use serde::{Deserialize, Serialize};

use super::EntityId;
use crate::items::Item;
use crate::mechanics::EquipmentSlot;

/// Maximum number of items a character can carry.
pub const INVENTORY_CAPACITY: usize = 10;

/// Base combat numbers.
///
/// Health is only reachable through the setters, which keep
/// `0 <= current_hp <= max_hp` and `max_hp >= 1` at all times.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsComponent {
    current_hp: i32,
    max_hp: i32,
    base_attack: i32,
    base_defense: i32,
}

impl Default for StatsComponent {
    fn default() -> Self {
        Self::new(10, 1, 0)
    }
}

impl StatsComponent {
    /// Full health, with floors applied to every value.
    pub fn new(max_hp: i32, base_attack: i32, base_defense: i32) -> Self {
        let max_hp = max_hp.max(1);
        Self {
            current_hp: max_hp,
            max_hp,
            base_attack: base_attack.max(1),
            base_defense: base_defense.max(0),
        }
    }

    pub fn current_hp(&self) -> i32 {
        self.current_hp
    }

    pub fn max_hp(&self) -> i32 {
        self.max_hp
    }

    pub fn base_attack(&self) -> i32 {
        self.base_attack
    }

    pub fn base_defense(&self) -> i32 {
        self.base_defense
    }

    /// Clamp into `[0, max_hp]`.
    pub fn set_health(&mut self, value: i32) {
        self.current_hp = value.clamp(0, self.max_hp);
    }

    /// Floors at 1 and pulls current health down if it no longer fits.
    pub fn set_max_health(&mut self, value: i32) {
        self.max_hp = value.max(1);
        if self.current_hp > self.max_hp {
            self.current_hp = self.max_hp;
        }
    }

    /// Floors at 1.
    pub fn set_base_attack(&mut self, value: i32) {
        self.base_attack = value.max(1);
    }

    /// Floors at 0.
    pub fn set_base_defense(&mut self, value: i32) {
        self.base_defense = value.max(0);
    }
}

/// Ordered, bounded item storage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryComponent {
    items: Vec<Item>,
    capacity: usize,
}

impl Default for InventoryComponent {
    fn default() -> Self {
        Self::with_capacity(INVENTORY_CAPACITY)
    }
}

impl InventoryComponent {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
            capacity,
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn is_full(&self) -> bool {
        self.items.len() >= self.capacity
    }

    /// Append, or hand the item back when full.
    pub fn push(&mut self, item: Item) -> Result<(), Item> {
        if self.is_full() {
            return Err(item);
        }
        self.items.push(item);
        Ok(())
    }

    pub fn get(&self, index: usize) -> Option<&Item> {
        self.items.get(index)
    }

    pub(crate) fn get_mut(&mut self, index: usize) -> Option<&mut Item> {
        self.items.get_mut(index)
    }

    pub fn find_by_id(&self, id: EntityId) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    pub(crate) fn find_by_id_mut(&mut self, id: EntityId) -> Option<&mut Item> {
        self.items.iter_mut().find(|item| item.id == id)
    }

    /// Position of the first item with this name (case-insensitive).
    pub fn position_by_name(&self, name: &str) -> Option<usize> {
        self.items.iter().position(|item| item.is_named(name))
    }

    pub fn position_of(&self, id: EntityId) -> Option<usize> {
        self.items.iter().position(|item| item.id == id)
    }

    pub(crate) fn remove_at(&mut self, index: usize) -> Option<Item> {
        if index < self.items.len() {
            Some(self.items.remove(index))
        } else {
            None
        }
    }

    pub(crate) fn drain(&mut self) -> Vec<Item> {
        std::mem::take(&mut self.items)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        self.items.iter()
    }
}

/// Back-pointers from a character to the items it wears.
///
/// The items themselves stay in the inventory; a slot only stores the id.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EquippedSlots {
    pub weapon: Option<EntityId>,
    pub armor: Option<EntityId>,
    pub charm: Option<EntityId>,
}

impl EquippedSlots {
    pub fn get(&self, slot: EquipmentSlot) -> Option<EntityId> {
        match slot {
            EquipmentSlot::Weapon => self.weapon,
            EquipmentSlot::Armor => self.armor,
            EquipmentSlot::Charm => self.charm,
        }
    }

    pub(crate) fn set(&mut self, slot: EquipmentSlot, id: Option<EntityId>) {
        match slot {
            EquipmentSlot::Weapon => self.weapon = id,
            EquipmentSlot::Armor => self.armor = id,
            EquipmentSlot::Charm => self.charm = id,
        }
    }

    /// Clear whichever slot points at `id`.
    pub(crate) fn release(&mut self, id: EntityId) {
        for slot in EquipmentSlot::ALL {
            if self.get(slot) == Some(id) {
                self.set(slot, None);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_clamp() {
        let mut stats = StatsComponent::new(20, 5, 1);
        stats.set_health(-7);
        assert_eq!(stats.current_hp(), 0);
        stats.set_health(99);
        assert_eq!(stats.current_hp(), 20);
    }

    #[test]
    fn test_max_health_floor_and_pull_down() {
        let mut stats = StatsComponent::new(20, 5, 1);
        stats.set_max_health(12);
        assert_eq!(stats.max_hp(), 12);
        assert_eq!(stats.current_hp(), 12);

        stats.set_max_health(-3);
        assert_eq!(stats.max_hp(), 1);
        assert_eq!(stats.current_hp(), 1);

        stats.set_max_health(30);
        assert_eq!(stats.current_hp(), 1);
    }

    #[test]
    fn test_stat_floors() {
        let mut stats = StatsComponent::new(0, 0, -2);
        assert_eq!(stats.max_hp(), 1);
        assert_eq!(stats.base_attack(), 1);
        assert_eq!(stats.base_defense(), 0);
        stats.set_base_attack(-4);
        stats.set_base_defense(-1);
        assert_eq!(stats.base_attack(), 1);
        assert_eq!(stats.base_defense(), 0);
    }

    #[test]
    fn test_inventory_capacity() {
        let mut inventory = InventoryComponent::with_capacity(2);
        assert!(inventory.push(Item::healing_potion(10)).is_ok());
        assert!(inventory.push(Item::damage_potion(8)).is_ok());
        let rejected = inventory.push(Item::healing_potion(5)).unwrap_err();
        assert_eq!(rejected.name, "Healing Potion");
        assert_eq!(inventory.len(), 2);
        assert!(inventory.is_full());
    }

    #[test]
    fn test_inventory_lookup_preserves_order() {
        let mut inventory = InventoryComponent::default();
        inventory.push(Item::healing_potion(10)).unwrap();
        inventory.push(Item::damage_potion(8)).unwrap();
        inventory.push(Item::healing_potion(10)).unwrap();

        assert_eq!(inventory.position_by_name("HEALING POTION"), Some(0));
        assert_eq!(inventory.position_by_name("damage potion"), Some(1));
        assert_eq!(inventory.position_by_name("elixir"), None);

        let removed = inventory.remove_at(0).unwrap();
        assert_eq!(removed.name, "Healing Potion");
        assert_eq!(inventory.get(0).unwrap().name, "Damage Potion");
        assert!(inventory.remove_at(5).is_none());
    }

    #[test]
    fn test_slots_release() {
        let id = EntityId::new();
        let mut slots = EquippedSlots::default();
        slots.set(EquipmentSlot::Armor, Some(id));
        assert_eq!(slots.get(EquipmentSlot::Armor), Some(id));
        slots.release(id);
        assert_eq!(slots.get(EquipmentSlot::Armor), None);
    }
}
