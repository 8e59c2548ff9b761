//! Applying items to characters.

use super::{ConsumableEffect, ItemKind};
use crate::entities::Character;
use crate::error::GameError;
use crate::mechanics::ItemSelector;

/// Turn a selector into an inventory index.
pub fn resolve_selector(owner: &Character, selector: &ItemSelector) -> Result<usize, GameError> {
    if owner.inventory.is_empty() {
        return Err(GameError::InvalidItemSelector(
            "You don't have any items to use.".to_string(),
        ));
    }
    match selector {
        ItemSelector::Index(index) if *index < owner.inventory.len() => Ok(*index),
        ItemSelector::Index(_) => Err(GameError::InvalidItemSelector(
            "Invalid item index.".to_string(),
        )),
        ItemSelector::Name(name) => owner.inventory.position_by_name(name).ok_or_else(|| {
            GameError::InvalidItemSelector(format!("You don't have an item called '{name}'."))
        }),
    }
}

/// Use the item at `index`.
///
/// Consumables are removed after a successful use. A damage item with no
/// target fails with [`GameError::NoTarget`] and stays in the inventory.
/// Equipment is toggled and never removed.
pub fn use_item(
    actor: &mut Character,
    index: usize,
    target: Option<&mut Character>,
) -> Result<String, GameError> {
    let item = actor
        .inventory
        .get(index)
        .ok_or_else(|| GameError::InvalidItemSelector("Invalid item index.".to_string()))?;

    let effect = match item.kind {
        ItemKind::Consumable(effect) => Some(effect),
        ItemKind::Equipment { .. } => None,
    };
    let item_name = item.name.clone();
    let Some(effect) = effect else {
        return actor.toggle_equipment(index);
    };

    let message = match effect {
        ConsumableEffect::Healing { amount } => {
            let healed = actor.heal(amount);
            format!(
                "{} drinks the {} and recovers {} HP! Current HP: {}/{}",
                actor.name,
                item_name,
                healed,
                actor.health(),
                actor.max_health()
            )
        }
        ConsumableEffect::Damage { amount } => {
            let Some(target) = target else {
                return Err(GameError::NoTarget {
                    user: actor.name.clone(),
                    item: item_name,
                });
            };
            let before = target.health();
            target.set_health(before - amount);
            format!(
                "{} throws the {} at {}, dealing {} damage! {}'s HP: {}",
                actor.name,
                item_name,
                target.name,
                before - target.health(),
                target.name,
                target.health()
            )
        }
        ConsumableEffect::StrengthBoost { amount, .. } => {
            let base = actor.stats.base_attack();
            actor.stats.set_base_attack(base + amount);
            format!(
                "{} drinks the {} and feels stronger! Attack is now {}.",
                actor.name,
                item_name,
                actor.effective_attack()
            )
        }
        ConsumableEffect::DefenseBoost { amount, .. } => {
            let base = actor.stats.base_defense();
            actor.stats.set_base_defense(base + amount);
            format!(
                "{} drinks the {} and feels tougher! Defense is now {}.",
                actor.name,
                item_name,
                actor.effective_defense()
            )
        }
    };

    actor.take_item_at(index);
    tracing::debug!(user = %actor.name, item = %item_name, "consumable used");
    Ok(message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::Race;
    use crate::items::{standard_item, Item};

    fn hero() -> Character {
        Character::new("Frodo", Race::Human).with_items([
            Item::healing_potion(10),
            Item::damage_potion(8),
            standard_item("Strength Elixir").unwrap(),
            standard_item("Defense Potion").unwrap(),
            Item::weapon("Rusty Sword", "Old.", 1),
        ])
    }

    #[test]
    fn test_resolve_selector() {
        let frodo = hero();
        assert_eq!(resolve_selector(&frodo, &ItemSelector::Index(4)).unwrap(), 4);
        assert_eq!(
            resolve_selector(&frodo, &ItemSelector::Name("damage POTION".into())).unwrap(),
            1
        );
        assert!(matches!(
            resolve_selector(&frodo, &ItemSelector::Index(5)),
            Err(GameError::InvalidItemSelector(_))
        ));
        let err = resolve_selector(&frodo, &ItemSelector::Name("lembas".into())).unwrap_err();
        assert_eq!(err.to_string(), "You don't have an item called 'lembas'.");

        let empty = Character::new("Gollum", Race::Goblin);
        let err = resolve_selector(&empty, &ItemSelector::Index(0)).unwrap_err();
        assert_eq!(err.to_string(), "You don't have any items to use.");
    }

    #[test]
    fn test_healing_reports_actual_and_is_consumed() {
        let mut frodo = hero();
        frodo.set_health(14);
        let message = use_item(&mut frodo, 0, None).unwrap();
        assert!(message.contains("recovers 4 HP"));
        assert_eq!(frodo.health(), 18);
        assert_eq!(frodo.inventory.len(), 4);
        assert_eq!(frodo.inventory.position_by_name("Healing Potion"), None);
    }

    #[test]
    fn test_damage_needs_target() {
        let mut frodo = hero();
        let err = use_item(&mut frodo, 1, None).unwrap_err();
        assert!(matches!(err, GameError::NoTarget { .. }));
        assert_eq!(frodo.inventory.len(), 5);

        let mut orc = Character::new("Shagrat", Race::Orc);
        orc.set_health(5);
        let message = use_item(&mut frodo, 1, Some(&mut orc)).unwrap();
        assert_eq!(orc.health(), 0);
        assert!(message.contains("dealing 5 damage"));
        assert_eq!(frodo.inventory.len(), 4);
    }

    #[test]
    fn test_boosts_are_permanent() {
        let mut frodo = hero();
        use_item(&mut frodo, 2, None).unwrap();
        assert_eq!(frodo.effective_attack(), 6);
        use_item(&mut frodo, 2, None).unwrap();
        assert_eq!(frodo.effective_defense(), 2);
        assert_eq!(frodo.inventory.len(), 3);
    }

    #[test]
    fn test_equipment_is_never_removed() {
        let mut frodo = hero();
        use_item(&mut frodo, 4, None).unwrap();
        assert_eq!(frodo.effective_attack(), 5);
        use_item(&mut frodo, 4, None).unwrap();
        assert_eq!(frodo.effective_attack(), 4);
        assert_eq!(frodo.inventory.len(), 5);
    }
}
