//! Entity definitions for the game world.

mod character;
mod components;
mod race;

pub use character::*;
pub use components::*;
pub use race::*;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for characters and items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntityId(pub Uuid);

impl EntityId {
    /// Create a new random entity ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for EntityId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for EntityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Anything that can soak incoming damage.
pub trait Defended {
    /// Base defense plus equipped armor.
    fn effective_defense(&self) -> i32;
}

/// Anything that carries an inventory.
pub trait Carrier {
    fn carrier_name(&self) -> &str;
    fn inventory(&self) -> &InventoryComponent;

    /// Add an item, or hand it back if there is no room.
    fn receive(&mut self, item: crate::items::Item) -> Result<(), crate::items::Item>;

    /// Remove every item, unequipping anything that was worn.
    fn surrender_all(&mut self) -> Vec<crate::items::Item>;
}
