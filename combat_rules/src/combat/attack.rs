//! Attack resolution, shared by player attacks and enemy counter-attacks.

use crate::config::CombatConfig;
use crate::dice::Dice;
use crate::entities::{Character, Defended};
use crate::mechanics::AttackType;

/// The numbers behind one resolved attack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttackReport {
    pub critical: bool,
    /// Damage before defense.
    pub raw: i32,
    /// Absorbed by the target's defense.
    pub blocked: i32,
    pub dealt: i32,
}

/// Split raw damage into what gets through and what defense absorbs.
///
/// Any defense above zero reduces damage, but at least 1 point always lands.
pub fn apply_defense(raw: i32, target: &impl Defended) -> (i32, i32) {
    let defense = target.effective_defense();
    if defense > 0 {
        let reduced = (raw - defense).max(1);
        (reduced, raw - reduced)
    } else {
        (raw, 0)
    }
}

/// Roll and apply one attack, narrating into `log`.
///
/// Damage arithmetic saturates, so extreme configured multipliers cannot
/// overflow.
///
/// Draw order: critical chance, base damage `[1, attack]`, then the special
/// bonus die for special attacks.
pub fn resolve_attack(
    attacker: &Character,
    target: &mut Character,
    attack_type: AttackType,
    config: &CombatConfig,
    dice: &mut dyn Dice,
    log: &mut Vec<String>,
) -> AttackReport {
    let crit_chance = (config.crit_chance + attacker.crit_bonus()).clamp(0.0, 1.0);
    let critical = dice.chance() < crit_chance;
    let mut raw = dice.roll(1, attacker.effective_attack());

    if critical {
        raw = raw.saturating_mul(config.crit_multiplier);
        log.push(format!("Critical hit! {} deals double damage!", attacker.name));
    }

    if attack_type == AttackType::Special {
        let (low, high) = config.special_bonus;
        raw = raw.saturating_add(dice.roll(low, high));
        log.push(format!("{} uses a special attack!", attacker.name));
    }

    let (dealt, blocked) = apply_defense(raw, target);
    target.set_health(target.health() - dealt);

    log.push(format!(
        "{} attacks {} for {} damage!",
        attacker.name, target.name, dealt
    ));
    if blocked > 0 {
        log.push(format!(
            "{}'s armor blocks {} damage.",
            target.name, blocked
        ));
    }
    log.push(format!("{} now has {} HP.", target.name, target.health()));

    tracing::debug!(
        attacker = %attacker.name,
        target = %target.name,
        ?attack_type,
        critical,
        raw,
        blocked,
        dealt,
        "attack resolved"
    );

    AttackReport {
        critical,
        raw,
        blocked,
        dealt,
    }
}
