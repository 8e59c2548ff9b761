//! Race abilities usable as a combat action.

use crate::dice::Dice;
use crate::entities::{Character, RaceAbility};
use crate::error::GameError;

/// Critical chance of a precision strike.
const PRECISION_CRIT_CHANCE: f64 = 0.4;

/// Permanent defense granted by resilience.
const RESILIENCE_DEFENSE: i32 = 2;

/// Perform `user`'s race ability against `target`.
///
/// Abilities bypass armor. Fails with [`GameError::NoAbility`] for races
/// without one, leaving both characters untouched.
pub fn use_ability(
    user: &mut Character,
    target: &mut Character,
    dice: &mut dyn Dice,
    log: &mut Vec<String>,
) -> Result<RaceAbility, GameError> {
    let ability = user
        .ability()
        .ok_or_else(|| GameError::NoAbility(user.name.clone()))?;

    match ability {
        RaceAbility::BerserkerRage => {
            let attack = user.effective_attack();
            let damage = dice.roll(attack, attack * 2);
            target.set_health(target.health() - damage);

            let recoil = (damage / 4).max(1);
            user.set_health(user.health() - recoil);

            log.push(format!(
                "{} goes into a berserker rage and deals {} damage to {}!",
                user.name, damage, target.name
            ));
            log.push(format!(
                "The rage costs {} {} health points.",
                user.name, recoil
            ));
            log.push(format!("{} now has {} HP.", target.name, target.health()));
        }
        RaceAbility::PrecisionStrike => {
            let critical = dice.chance() < PRECISION_CRIT_CHANCE;
            let damage = user.effective_attack() * if critical { 2 } else { 1 };
            target.set_health(target.health() - damage);

            let shot = if critical {
                "a critical precision shot"
            } else {
                "a precision shot"
            };
            log.push(format!(
                "{} fires {} at {} for {} damage!",
                user.name, shot, target.name, damage
            ));
            log.push(format!("{} now has {} HP.", target.name, target.health()));
        }
        RaceAbility::Resilience => {
            let amount = dice.roll(2, 5);
            let healed = user.heal(amount);
            let defense = user.stats.base_defense();
            user.stats.set_base_defense(defense + RESILIENCE_DEFENSE);

            log.push(format!(
                "{} shows resilience, healing for {} HP and gaining +{} defense!",
                user.name, healed, RESILIENCE_DEFENSE
            ));
        }
    }

    tracing::debug!(user = %user.name, ability = ability.name(), "race ability used");
    Ok(ability)
}
