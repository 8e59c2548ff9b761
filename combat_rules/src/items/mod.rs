//! Items: consumables that are used up and equipment that is toggled on and off.

mod catalog;
mod usage;

pub use catalog::*;
pub use usage::*;

use serde::{Deserialize, Serialize};

use crate::entities::EntityId;
use crate::mechanics::EquipmentSlot;

/// A single item owned by some character's inventory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: EntityId,
    pub name: String,
    pub description: String,
    pub value: u32,
    pub kind: ItemKind,
}

/// What an item does when used.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ItemKind {
    /// Removed from the inventory after one use.
    Consumable(ConsumableEffect),
    /// Stays in the inventory; using it toggles `equipped`.
    Equipment { bonus: EquipmentBonus, equipped: bool },
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ConsumableEffect {
    Healing { amount: i32 },
    /// Needs a target.
    Damage { amount: i32 },
    /// `duration` is descriptive only; the boost is permanent.
    StrengthBoost { amount: i32, duration: u32 },
    /// `duration` is descriptive only; the boost is permanent.
    DefenseBoost { amount: i32, duration: u32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum EquipmentBonus {
    Weapon { attack_bonus: i32 },
    Armor { defense_bonus: i32 },
    /// Added to the wearer's critical hit chance.
    Charm { crit_bonus: f64 },
}

impl EquipmentBonus {
    pub fn slot(&self) -> EquipmentSlot {
        match self {
            EquipmentBonus::Weapon { .. } => EquipmentSlot::Weapon,
            EquipmentBonus::Armor { .. } => EquipmentSlot::Armor,
            EquipmentBonus::Charm { .. } => EquipmentSlot::Charm,
        }
    }
}

impl Item {
    fn new(name: impl Into<String>, description: impl Into<String>, value: u32, kind: ItemKind) -> Self {
        Self {
            id: EntityId::new(),
            name: name.into(),
            description: description.into(),
            value,
            kind,
        }
    }

    pub fn consumable(
        name: impl Into<String>,
        description: impl Into<String>,
        value: u32,
        effect: ConsumableEffect,
    ) -> Self {
        Self::new(name, description, value, ItemKind::Consumable(effect))
    }

    pub fn equipment(
        name: impl Into<String>,
        description: impl Into<String>,
        value: u32,
        bonus: EquipmentBonus,
    ) -> Self {
        Self::new(
            name,
            description,
            value,
            ItemKind::Equipment {
                bonus,
                equipped: false,
            },
        )
    }

    pub fn healing_potion(amount: i32) -> Self {
        Self::consumable(
            "Healing Potion",
            format!("A potion that restores {amount} HP."),
            20,
            ConsumableEffect::Healing { amount },
        )
    }

    pub fn damage_potion(amount: i32) -> Self {
        Self::consumable(
            "Damage Potion",
            format!("A potion that deals {amount} damage to an enemy."),
            15,
            ConsumableEffect::Damage { amount },
        )
    }

    pub fn weapon(name: impl Into<String>, description: impl Into<String>, attack_bonus: i32) -> Self {
        Self::equipment(name, description, 50, EquipmentBonus::Weapon { attack_bonus })
    }

    pub fn armor(name: impl Into<String>, description: impl Into<String>, defense_bonus: i32) -> Self {
        Self::equipment(name, description, 40, EquipmentBonus::Armor { defense_bonus })
    }

    pub fn charm(name: impl Into<String>, description: impl Into<String>, crit_bonus: f64) -> Self {
        Self::equipment(name, description, 60, EquipmentBonus::Charm { crit_bonus })
    }

    pub fn is_consumable(&self) -> bool {
        matches!(self.kind, ItemKind::Consumable(_))
    }

    /// Only damage items must be aimed at someone.
    pub fn needs_target(&self) -> bool {
        matches!(
            self.kind,
            ItemKind::Consumable(ConsumableEffect::Damage { .. })
        )
    }

    pub fn slot(&self) -> Option<EquipmentSlot> {
        match &self.kind {
            ItemKind::Equipment { bonus, .. } => Some(bonus.slot()),
            ItemKind::Consumable(_) => None,
        }
    }

    pub fn is_equipped(&self) -> bool {
        matches!(self.kind, ItemKind::Equipment { equipped: true, .. })
    }

    /// No-op for consumables.
    pub(crate) fn set_equipped(&mut self, value: bool) {
        if let ItemKind::Equipment { equipped, .. } = &mut self.kind {
            *equipped = value;
        }
    }

    pub fn attack_bonus(&self) -> i32 {
        match self.kind {
            ItemKind::Equipment {
                bonus: EquipmentBonus::Weapon { attack_bonus },
                ..
            } => attack_bonus,
            _ => 0,
        }
    }

    pub fn defense_bonus(&self) -> i32 {
        match self.kind {
            ItemKind::Equipment {
                bonus: EquipmentBonus::Armor { defense_bonus },
                ..
            } => defense_bonus,
            _ => 0,
        }
    }

    pub fn crit_bonus(&self) -> f64 {
        match self.kind {
            ItemKind::Equipment {
                bonus: EquipmentBonus::Charm { crit_bonus },
                ..
            } => crit_bonus,
            _ => 0.0,
        }
    }

    /// Case-insensitive name comparison.
    pub fn is_named(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name.trim())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_flags() {
        let potion = Item::healing_potion(10);
        assert!(potion.is_consumable());
        assert!(!potion.needs_target());
        assert!(potion.slot().is_none());

        let bomb = Item::damage_potion(8);
        assert!(bomb.needs_target());

        let sword = Item::weapon("Rusty Sword", "Old.", 1);
        assert!(!sword.is_consumable());
        assert_eq!(sword.slot(), Some(EquipmentSlot::Weapon));
        assert_eq!(sword.attack_bonus(), 1);
        assert_eq!(sword.defense_bonus(), 0);
        assert!(!sword.is_equipped());
    }

    #[test]
    fn test_set_equipped_ignores_consumables() {
        let mut potion = Item::healing_potion(10);
        potion.set_equipped(true);
        assert!(!potion.is_equipped());

        let mut tunic = Item::armor("Leather Tunic", "Basic.", 1);
        tunic.set_equipped(true);
        assert!(tunic.is_equipped());
    }

    #[test]
    fn test_is_named() {
        let potion = Item::healing_potion(10);
        assert!(potion.is_named("healing potion"));
        assert!(potion.is_named(" HEALING POTION"));
        assert!(!potion.is_named("healing"));
    }
}
