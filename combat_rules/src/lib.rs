//! # Combat Rules
//!
//! Rules for a turn-based fantasy adventure: characters, items, combat
//! sessions, loot and the world the player explores.
//! This crate owns all game state and performs no I/O beyond loading config;
//! a driver (see `adventure_shell`) feeds it actions and renders the results.

pub mod combat;
pub mod config;
pub mod dice;
pub mod entities;
pub mod error;
pub mod game;
pub mod items;
pub mod mechanics;
pub mod rewards;
pub mod testing;
pub mod world_state;

pub use combat::{CombatPhase, CombatSession, RenderedState};
pub use config::{CombatConfig, GameConfig, WorldConfig};
pub use dice::{Dice, SeededDice};
pub use entities::*;
pub use error::GameError;
pub use game::Game;
pub use items::{ConsumableEffect, EquipmentBonus, Item, ItemKind};
pub use mechanics::*;
pub use rewards::{RewardResolver, RewardSummary};
pub use world_state::*;
