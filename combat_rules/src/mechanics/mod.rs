//! Game mechanics: attack kinds, turn order, outcomes and player actions.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The two kinds of attack a combatant can make.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AttackType {
    Normal,
    /// Adds a bonus die on top of the normal damage roll.
    Special,
}

/// Equipment slots for characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EquipmentSlot {
    Weapon,
    Armor,
    Charm,
}

impl EquipmentSlot {
    pub const ALL: [EquipmentSlot; 3] = [
        EquipmentSlot::Weapon,
        EquipmentSlot::Armor,
        EquipmentSlot::Charm,
    ];
}

impl fmt::Display for EquipmentSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EquipmentSlot::Weapon => "Weapon",
            EquipmentSlot::Armor => "Armor",
            EquipmentSlot::Charm => "Charm",
        };
        f.write_str(name)
    }
}

/// Which side is entitled to act next.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Turn {
    Player,
    Enemy,
}

impl fmt::Display for Turn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Turn::Player => f.write_str("Player"),
            Turn::Enemy => f.write_str("Enemy"),
        }
    }
}

/// Terminal result of a combat session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CombatOutcome {
    Victory,
    Defeat,
    Fled,
}

/// How the player refers to an inventory item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemSelector {
    /// 0-based inventory position.
    Index(usize),
    /// Case-insensitive item name.
    Name(String),
}

impl ItemSelector {
    /// Numbers become 0-based indices, anything else is a name.
    pub fn parse(text: &str) -> Self {
        let text = text.trim();
        match text.parse::<usize>() {
            Ok(index) => ItemSelector::Index(index),
            Err(_) => ItemSelector::Name(text.to_string()),
        }
    }
}

impl fmt::Display for ItemSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemSelector::Index(index) => write!(f, "#{index}"),
            ItemSelector::Name(name) => f.write_str(name),
        }
    }
}

/// A player action submitted to a combat session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CombatAction {
    Attack,
    Special,
    /// The race's special ability, if it has one.
    Ability,
    UseItem(ItemSelector),
    Flee,
    /// Anything the driver could not map to a known verb.
    Unknown(String),
}

impl CombatAction {
    /// Map a verb (plus optional argument) to an action.
    ///
    /// `use` and `use_item` read the argument as an [`ItemSelector`].
    pub fn parse(verb: &str, argument: Option<&str>) -> Self {
        match verb.trim().to_lowercase().as_str() {
            "attack" => CombatAction::Attack,
            "special" => CombatAction::Special,
            "ability" => CombatAction::Ability,
            "flee" => CombatAction::Flee,
            "use" | "use_item" => match argument.map(str::trim).filter(|a| !a.is_empty()) {
                Some(arg) => CombatAction::UseItem(ItemSelector::parse(arg)),
                None => CombatAction::Unknown(verb.trim().to_string()),
            },
            other => CombatAction::Unknown(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_selector_parse() {
        assert_eq!(ItemSelector::parse("2"), ItemSelector::Index(2));
        assert_eq!(
            ItemSelector::parse(" Healing Potion "),
            ItemSelector::Name("Healing Potion".into())
        );
        assert_eq!(ItemSelector::parse("-1"), ItemSelector::Name("-1".into()));
    }

    #[test]
    fn test_action_parse() {
        assert_eq!(CombatAction::parse("ATTACK", None), CombatAction::Attack);
        assert_eq!(
            CombatAction::parse("use", Some("0")),
            CombatAction::UseItem(ItemSelector::Index(0))
        );
        assert_eq!(
            CombatAction::parse("use", None),
            CombatAction::Unknown("use".into())
        );
        assert_eq!(
            CombatAction::parse("dance", None),
            CombatAction::Unknown("dance".into())
        );
    }

    #[test]
    fn test_outcome_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&CombatOutcome::Fled).unwrap(),
            "\"fled\""
        );
        assert_eq!(serde_json::to_string(&Turn::Enemy).unwrap(), "\"enemy\"");
    }
}
