//! Standard item database.
//!
//! Every lookup builds a fresh item with its own id, so two potions taken from
//! the catalogue are always distinct inventory entries.

use super::{ConsumableEffect, Item};
use crate::dice::{self, Dice};

/// Names of every standard item, in catalogue order.
pub const STANDARD_ITEMS: [&str; 9] = [
    "Healing Potion",
    "Damage Potion",
    "Strength Elixir",
    "Defense Potion",
    "Rusty Sword",
    "Iron Sword",
    "Leather Tunic",
    "Chain Mail",
    "Lucky Charm",
];

/// Items an enemy may be carrying when it spawns.
pub const LOOT_TABLE: [&str; 6] = [
    "Healing Potion",
    "Healing Potion",
    "Damage Potion",
    "Strength Elixir",
    "Defense Potion",
    "Iron Sword",
];

/// Build a standard item by name (case-insensitive).
pub fn standard_item(name: &str) -> Option<Item> {
    let item = match name.trim().to_lowercase().as_str() {
        "healing potion" => Item::healing_potion(10),
        "damage potion" => Item::damage_potion(8),
        "strength elixir" => Item::consumable(
            "Strength Elixir",
            "A bitter draught that hardens the sword arm (+2 attack for 3 turns).",
            30,
            ConsumableEffect::StrengthBoost {
                amount: 2,
                duration: 3,
            },
        ),
        "defense potion" => Item::consumable(
            "Defense Potion",
            "A thick tonic that toughens the skin (+2 defense for 3 turns).",
            30,
            ConsumableEffect::DefenseBoost {
                amount: 2,
                duration: 3,
            },
        ),
        "rusty sword" => Item::weapon(
            "Rusty Sword",
            "An old sword with some rust, but still sharp.",
            1,
        ),
        "iron sword" => Item::weapon("Iron Sword", "A well-balanced blade of dark iron.", 3),
        "leather tunic" => Item::armor(
            "Leather Tunic",
            "Basic protection made of hardened leather.",
            1,
        ),
        "chain mail" => Item::armor("Chain Mail", "Interlocking rings that turn aside blades.", 3),
        "lucky charm" => Item::charm(
            "Lucky Charm",
            "A worn token that seems to guide blows to weak spots.",
            0.1,
        ),
        _ => return None,
    };
    Some(item)
}

/// The kit every new player starts with.
pub fn starting_items() -> Vec<Item> {
    ["Healing Potion", "Damage Potion", "Rusty Sword", "Leather Tunic"]
        .iter()
        .filter_map(|name| standard_item(name))
        .collect()
}

/// Draw one item from the loot table.
pub fn random_loot(dice: &mut dyn Dice) -> Option<Item> {
    dice::choose(dice, &LOOT_TABLE).and_then(|name| standard_item(name))
}
