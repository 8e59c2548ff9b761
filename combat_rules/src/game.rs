//! One player's game: the world, the player and at most one running fight.
//!
//! `Game` is the surface a driver talks to. Nothing in it is shared between
//! games, so a host running many games gives each its own `Game` and its own
//! dice.

use crate::combat::{CombatSession, RenderedState};
use crate::config::GameConfig;
use crate::dice::Dice;
use crate::entities::Character;
use crate::error::GameError;
use crate::items::{self, resolve_selector};
use crate::mechanics::{CombatAction, CombatOutcome, ItemSelector};
use crate::rewards::RewardResolver;
use crate::world_state::{Region, WorldState};

enum Stage {
    Exploring(Character),
    Fighting(Box<CombatSession>),
    /// Only observable inside a transition.
    Vacant,
}

pub struct Game {
    stage: Stage,
    world: WorldState,
    config: GameConfig,
    dice: Box<dyn Dice + Send>,
}

impl Game {
    /// Start a game with a freshly generated world.
    pub fn new(player: Character, config: GameConfig, mut dice: Box<dyn Dice + Send>) -> Self {
        let world = WorldState::generate(&config.world, dice.as_mut());
        Self::with_world(player, world, config, dice)
    }

    pub fn with_world(
        player: Character,
        world: WorldState,
        config: GameConfig,
        dice: Box<dyn Dice + Send>,
    ) -> Self {
        Self {
            stage: Stage::Exploring(player),
            world,
            config,
            dice,
        }
    }

    pub fn player(&self) -> &Character {
        match &self.stage {
            Stage::Exploring(player) => player,
            Stage::Fighting(session) => session.player(),
            Stage::Vacant => unreachable!("game stage left vacant outside a transition"),
        }
    }

    pub fn world(&self) -> &WorldState {
        &self.world
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn combat(&self) -> Option<&CombatSession> {
        match &self.stage {
            Stage::Fighting(session) => Some(session.as_ref()),
            _ => None,
        }
    }

    pub fn in_combat(&self) -> bool {
        self.combat().is_some()
    }

    /// The player has fallen; nothing more can happen.
    pub fn is_over(&self) -> bool {
        !self.player().is_alive()
    }

    fn ensure_exploring(&self) -> Result<(), GameError> {
        if let Some(session) = self.combat() {
            return Err(GameError::CombatInProgress(session.enemy().name.clone()));
        }
        if self.is_over() {
            return Err(GameError::GameOver(self.player().name.clone()));
        }
        Ok(())
    }

    /// Open a fight with the named enemy, or a random one when `target` is `None`.
    ///
    /// The enemy leaves the world's active list for the duration of the fight.
    /// Returns the enemy's name.
    pub fn create_session(&mut self, target: Option<&str>) -> Result<String, GameError> {
        self.ensure_exploring()?;

        let enemy_id = match target {
            Some(name) => self
                .world
                .find_enemy_by_name(name)
                .ok_or_else(|| GameError::UnknownEnemy(name.trim().to_string()))?
                .id,
            None => {
                self.world
                    .pick_random_enemy(self.dice.as_mut())
                    .ok_or(GameError::NoEnemies)?
                    .id
            }
        };
        let Some(enemy) = self.world.take_enemy(enemy_id) else {
            return Err(GameError::NoEnemies);
        };
        let enemy_name = enemy.name.clone();

        let Stage::Exploring(player) = std::mem::replace(&mut self.stage, Stage::Vacant) else {
            unreachable!("ensure_exploring checked the stage");
        };
        let session = CombatSession::new(player, enemy, self.config.combat.clone(), self.dice.as_mut());
        self.stage = Stage::Fighting(Box::new(session));
        Ok(enemy_name)
    }

    pub fn start_combat(&mut self) -> Result<RenderedState, GameError> {
        let Stage::Fighting(session) = &mut self.stage else {
            return Err(GameError::CombatInactive);
        };
        let mut state = session.start_combat(self.dice.as_mut());
        state.log.extend(self.settle());
        Ok(state)
    }

    /// Forward a player action; settle the fight if it just ended.
    pub fn process_action(&mut self, action: CombatAction) -> Result<RenderedState, GameError> {
        let Stage::Fighting(session) = &mut self.stage else {
            return Err(GameError::CombatInactive);
        };
        let mut state = session.process_action(action, self.dice.as_mut());
        state.log.extend(self.settle());
        Ok(state)
    }

    /// Hand the characters back once a session has resolved.
    ///
    /// Victory pays out loot and removes the enemy for good. An enemy the
    /// player fled from or lost to goes back to the world with its wounds.
    fn settle(&mut self) -> Vec<String> {
        match &self.stage {
            Stage::Fighting(session) if !session.is_active() => {}
            _ => return Vec::new(),
        }
        let Stage::Fighting(session) = std::mem::replace(&mut self.stage, Stage::Vacant) else {
            unreachable!("stage matched above");
        };

        let outcome = session.outcome();
        let (mut player, enemy) = (*session).into_parts();
        let lines = match outcome {
            Some(CombatOutcome::Victory) => {
                RewardResolver::settle(&mut player, enemy, &mut self.world).lines()
            }
            _ => {
                self.world.restore_enemy(enemy);
                Vec::new()
            }
        };
        self.stage = Stage::Exploring(player);
        lines
    }

    /// Use an item outside combat. Damage items have nobody to hit.
    pub fn use_item(&mut self, selector: &ItemSelector) -> Result<String, GameError> {
        self.ensure_exploring()?;
        let Stage::Exploring(player) = &mut self.stage else {
            return Err(GameError::CombatInactive);
        };
        let index = resolve_selector(player, selector)?;
        items::use_item(player, index, None)
    }

    pub fn change_region(&mut self, name: &str) -> Result<&Region, GameError> {
        self.ensure_exploring()?;
        self.world
            .change_region(name, &self.config.world, self.dice.as_mut())
    }

    /// Describe anything the player can name: themselves, their items,
    /// the regions and the enemies around.
    pub fn examine(&self, name: &str) -> Option<String> {
        let player = self.player();
        if player.name.eq_ignore_ascii_case(name.trim()) {
            return Some(player.description.clone());
        }
        if let Some(index) = player.inventory.position_by_name(name) {
            return player.inventory.get(index).map(|item| item.description.clone());
        }
        self.world.examine(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::Race;
    use crate::items::{starting_items, Item};
    use crate::mechanics::Turn;
    use crate::testing::ScriptedDice;

    fn game_with(dice: ScriptedDice, enemy: Character) -> Game {
        let player = Character::new("Gimli", Race::Orc).with_items(starting_items());
        let mut world = WorldState::new();
        world.add_enemy(enemy);
        Game::with_world(player, world, GameConfig::default(), Box::new(dice))
    }

    #[test]
    fn test_create_session_moves_enemy() {
        let mut game = game_with(ScriptedDice::new(), Character::new("Snaga", Race::Goblin));
        assert_eq!(game.create_session(Some("snaga")).unwrap(), "Snaga");
        assert!(game.in_combat());
        assert!(game.world().enemies().is_empty());

        let err = game.create_session(None).unwrap_err();
        assert!(matches!(err, GameError::CombatInProgress(_)));
    }

    #[test]
    fn test_unknown_enemy() {
        let mut game = game_with(ScriptedDice::new(), Character::new("Snaga", Race::Goblin));
        let err = game.create_session(Some("Smaug")).unwrap_err();
        assert_eq!(err.to_string(), "No enemy named 'Smaug' found.");
        assert!(!game.in_combat());
        assert!(matches!(game.start_combat(), Err(GameError::CombatInactive)));
    }

    #[test]
    fn test_victory_pays_out() {
        let goblin = Character::new("Snaga", Race::Goblin).with_items([Item::healing_potion(10)]);
        // player first, then every attack crits at full strength: 12 HP takes two hits
        let dice = ScriptedDice::new().chances([0.1]).fallback_roll(5).fallback_chance(0.0);
        let mut game = game_with(dice, goblin);

        game.create_session(None).unwrap();
        let state = game.start_combat().unwrap();
        assert_eq!(state.turn, Turn::Player);

        let state = game.process_action(CombatAction::Attack).unwrap();
        assert_eq!(state.enemy_health, 2);
        assert!(game.in_combat());
        let state = game.process_action(CombatAction::Attack).unwrap();
        assert_eq!(state.outcome, Some(CombatOutcome::Victory));
        assert_eq!(state.log.last().unwrap(), "Gimli acquires Healing Potion!");
        assert!(!game.in_combat());
        assert_eq!(game.player().inventory.len(), 5);
        assert_eq!(game.world().defeated(), ["Snaga".to_string()]);
    }

    #[test]
    fn test_fled_enemy_returns_wounded() {
        let mut game = game_with(
            ScriptedDice::new().chances([0.1, 0.9]).rolls([2]).fallback_chance(0.6),
            Character::new("Snaga", Race::Goblin),
        );
        game.create_session(Some("Snaga")).unwrap();
        game.start_combat().unwrap();
        game.process_action(CombatAction::Attack).unwrap();
        let state = game.process_action(CombatAction::Flee).unwrap();

        assert_eq!(state.outcome, Some(CombatOutcome::Fled));
        assert!(!game.in_combat());
        let snaga = game.world().find_enemy_by_name("snaga").unwrap();
        assert_eq!(snaga.health(), 10);
    }

    #[test]
    fn test_use_item_outside_combat() {
        let mut game = game_with(ScriptedDice::new(), Character::new("Snaga", Race::Goblin));
        let err = game
            .use_item(&ItemSelector::Name("Damage Potion".into()))
            .unwrap_err();
        assert!(matches!(err, GameError::NoTarget { .. }));
        assert_eq!(game.player().inventory.len(), 4);

        let message = game.use_item(&ItemSelector::Index(2)).unwrap();
        assert_eq!(message, "Gimli equips Rusty Sword, gaining +1 attack power!");
        assert_eq!(game.player().effective_attack(), 6);
    }

    #[test]
    fn test_examine() {
        let game = game_with(ScriptedDice::new(), Character::new("Snaga", Race::Goblin));
        assert_eq!(game.examine("gimli").unwrap(), "An Orc warrior with 20 HP.");
        assert_eq!(
            game.examine("rusty sword").unwrap(),
            "An old sword with some rust, but still sharp."
        );
        assert_eq!(game.examine("snaga").unwrap(), "A Goblin warrior with 12 HP.");
        assert!(game.examine("shire").is_some());
        assert!(game.examine("ring").is_none());
    }

    #[test]
    fn test_defeat_ends_the_game() {
        let mut weak = Character::new("Gimli", Race::Orc);
        weak.set_health(1);
        let mut world = WorldState::new();
        world.add_enemy(Character::new("Uruk Captain", Race::Orc));
        // enemy first, hits for at least 1
        let dice = ScriptedDice::new().chances([0.9]).fallback_roll(3);
        let mut game = Game::with_world(weak, world, GameConfig::default(), Box::new(dice));

        game.create_session(None).unwrap();
        let state = game.start_combat().unwrap();

        assert_eq!(state.outcome, Some(CombatOutcome::Defeat));
        assert!(game.is_over());
        assert!(matches!(
            game.create_session(None),
            Err(GameError::GameOver(_))
        ));
        assert_eq!(game.world().enemies().len(), 1);
    }
}
