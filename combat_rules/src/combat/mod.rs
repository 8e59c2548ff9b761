//! Combat sessions: one player against one enemy, resolved turn by turn.
//!
//! A session moves through these phases:
//!
//! ```text
//! NotStarted -> PlayerTurn <-> EnemyTurn -> Resolved(Victory | Defeat | Fled)
//! ```
//!
//! Each accepted player action is followed by the enemy's automatic reply, so
//! control always comes back to the player unless the fight has ended. Every
//! narrated event goes into the session log, which is cleared at the start of
//! each call and returned inside a [`RenderedState`].

mod abilities;
mod attack;

pub use abilities::*;
pub use attack::*;

use serde::{Deserialize, Serialize};

use crate::config::CombatConfig;
use crate::dice::Dice;
use crate::entities::Character;
use crate::error::GameError;
use crate::items::{resolve_selector, use_item};
use crate::mechanics::{AttackType, CombatAction, CombatOutcome, Turn};

const AVAILABLE_ACTIONS: &str = "Available actions: 'attack', 'special', 'ability', 'use item', 'flee'";

/// Where a session currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CombatPhase {
    NotStarted,
    PlayerTurn,
    EnemyTurn,
    Resolved(CombatOutcome),
}

/// Snapshot handed back to the driver after every call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderedState {
    pub player_name: String,
    pub player_health: i32,
    pub player_max_health: i32,
    pub enemy_name: String,
    pub enemy_health: i32,
    pub enemy_max_health: i32,
    pub active: bool,
    pub turn: Turn,
    pub log: Vec<String>,
    /// `None` while the fight is undetermined.
    pub outcome: Option<CombatOutcome>,
}

impl RenderedState {
    pub fn to_json(&self) -> Result<String, GameError> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Whether a flee attempt succeeds for a given uniform roll.
///
/// Being healthier than the enemy adds `flee_adjustment` to the roll, being
/// weaker subtracts it. The adjusted roll is clamped to `[0, 1]` and compared
/// against `flee_threshold`.
pub fn flee_succeeds(player_health: i32, enemy_health: i32, roll: f64, config: &CombatConfig) -> bool {
    let mut chance = roll;
    if player_health > enemy_health {
        chance += config.flee_adjustment;
    } else if player_health < enemy_health {
        chance -= config.flee_adjustment;
    }
    chance.clamp(0.0, 1.0) >= config.flee_threshold
}

/// One fight between a player and an enemy.
///
/// The session owns both characters for its lifetime. Get them back with
/// [`CombatSession::into_parts`] once it has resolved.
#[derive(Debug, Clone)]
pub struct CombatSession {
    player: Character,
    enemy: Character,
    config: CombatConfig,
    turn: Turn,
    started: bool,
    outcome: Option<CombatOutcome>,
    log: Vec<String>,
}

impl CombatSession {
    /// Create a session and flip for who goes first.
    pub fn new(player: Character, enemy: Character, config: CombatConfig, dice: &mut dyn Dice) -> Self {
        let turn = if dice.chance() < config.player_first_chance {
            Turn::Player
        } else {
            Turn::Enemy
        };
        tracing::info!(player = %player.name, enemy = %enemy.name, first = %turn, "combat session created");
        Self {
            player,
            enemy,
            config,
            turn,
            started: false,
            outcome: None,
            log: Vec::new(),
        }
    }

    pub fn player(&self) -> &Character {
        &self.player
    }

    pub fn enemy(&self) -> &Character {
        &self.enemy
    }

    pub fn turn(&self) -> Turn {
        self.turn
    }

    pub fn outcome(&self) -> Option<CombatOutcome> {
        self.outcome
    }

    pub fn is_active(&self) -> bool {
        self.outcome.is_none()
    }

    pub fn phase(&self) -> CombatPhase {
        match (self.outcome, self.started, self.turn) {
            (Some(outcome), _, _) => CombatPhase::Resolved(outcome),
            (None, false, _) => CombatPhase::NotStarted,
            (None, true, Turn::Player) => CombatPhase::PlayerTurn,
            (None, true, Turn::Enemy) => CombatPhase::EnemyTurn,
        }
    }

    /// Release the characters.
    pub fn into_parts(self) -> (Character, Character) {
        (self.player, self.enemy)
    }

    /// Open the fight. If the enemy won the flip it strikes immediately.
    pub fn start_combat(&mut self, dice: &mut dyn Dice) -> RenderedState {
        self.log.clear();
        if self.started {
            self.log.push("The battle has already begun.".to_string());
            return self.render();
        }
        self.started = true;

        self.log.push(format!("You face {}!", self.enemy.name));
        self.log.push(self.enemy.description.clone());
        self.log
            .push(format!("The battle begins! {} attacks first.", self.turn));

        if self.turn == Turn::Enemy {
            self.enemy_turn(dice);
            if self.check_for_death() {
                return self.render();
            }
            self.turn = Turn::Player;
        }
        self.prompt_player();
        self.render()
    }

    /// Apply one player action, then let the enemy answer.
    ///
    /// Rejected actions (wrong turn, unknown verb, bad item selector) only add
    /// a log line; health, inventory and turn order are left alone.
    pub fn process_action(&mut self, action: CombatAction, dice: &mut dyn Dice) -> RenderedState {
        self.log.clear();
        if let Err(err) = self.take_player_turn(action, dice) {
            tracing::debug!(error = %err, "combat action rejected");
            self.log.push(err.to_string());
            if matches!(err, GameError::InvalidAction(_)) {
                self.log.push(AVAILABLE_ACTIONS.to_string());
                self.log.push(format!(
                    "You are fighting {} ({}/{} HP)",
                    self.enemy.name,
                    self.enemy.health(),
                    self.enemy.max_health()
                ));
            }
        }
        self.render()
    }

    fn take_player_turn(&mut self, action: CombatAction, dice: &mut dyn Dice) -> Result<(), GameError> {
        if self.outcome.is_some() {
            return Err(GameError::CombatInactive);
        }
        if !self.started || self.turn != Turn::Player {
            return Err(GameError::NotPlayerTurn);
        }

        match action {
            CombatAction::Attack => self.player_attack(AttackType::Normal, dice),
            CombatAction::Special => self.player_attack(AttackType::Special, dice),
            CombatAction::Ability => {
                use_ability(&mut self.player, &mut self.enemy, dice, &mut self.log)?;
            }
            CombatAction::UseItem(selector) => {
                let index = resolve_selector(&self.player, &selector)?;
                let message = use_item(&mut self.player, index, Some(&mut self.enemy))?;
                self.log.push(message);
            }
            CombatAction::Flee => {
                let roll = dice.chance();
                if flee_succeeds(self.player.health(), self.enemy.health(), roll, &self.config) {
                    self.log.push(format!(
                        "{} successfully flees from {}!",
                        self.player.name, self.enemy.name
                    ));
                    self.resolve(CombatOutcome::Fled);
                    return Ok(());
                }
                self.log.push(format!(
                    "{} tries to flee but is blocked by {}!",
                    self.player.name, self.enemy.name
                ));
            }
            CombatAction::Unknown(verb) => return Err(GameError::InvalidAction(verb)),
        }

        if self.check_for_death() {
            return Ok(());
        }

        self.turn = Turn::Enemy;
        self.enemy_turn(dice);
        if self.check_for_death() {
            return Ok(());
        }

        self.turn = Turn::Player;
        self.prompt_player();
        Ok(())
    }

    fn player_attack(&mut self, attack_type: AttackType, dice: &mut dyn Dice) {
        resolve_attack(
            &self.player,
            &mut self.enemy,
            attack_type,
            &self.config,
            dice,
            &mut self.log,
        );
    }

    /// The enemy always attacks; it only decides whether to make it special.
    fn enemy_turn(&mut self, dice: &mut dyn Dice) {
        self.log.push("It's the enemy's turn!".to_string());
        let attack_type = if dice.chance() < self.config.enemy_special_chance {
            AttackType::Special
        } else {
            AttackType::Normal
        };
        resolve_attack(
            &self.enemy,
            &mut self.player,
            attack_type,
            &self.config,
            dice,
            &mut self.log,
        );
    }

    /// The player is checked first, so a double knock-out is a defeat.
    fn check_for_death(&mut self) -> bool {
        if !self.player.is_alive() {
            self.log
                .push(format!("{} has been defeated!", self.player.name));
            self.resolve(CombatOutcome::Defeat);
            true
        } else if !self.enemy.is_alive() {
            self.log
                .push(format!("{} has been defeated!", self.enemy.name));
            self.resolve(CombatOutcome::Victory);
            true
        } else {
            false
        }
    }

    fn resolve(&mut self, outcome: CombatOutcome) {
        self.outcome = Some(outcome);
        tracing::info!(
            player = %self.player.name,
            enemy = %self.enemy.name,
            ?outcome,
            "combat resolved"
        );
    }

    fn prompt_player(&mut self) {
        self.log.push("It's your turn!".to_string());
        self.log.push(AVAILABLE_ACTIONS.to_string());
    }

    fn render(&self) -> RenderedState {
        RenderedState {
            player_name: self.player.name.clone(),
            player_health: self.player.health(),
            player_max_health: self.player.max_health(),
            enemy_name: self.enemy.name.clone(),
            enemy_health: self.enemy.health(),
            enemy_max_health: self.enemy.max_health(),
            active: self.is_active(),
            turn: self.turn,
            log: self.log.clone(),
            outcome: self.outcome,
        }
    }
}
