//! Error kinds raised by the engine.
//!
//! None of these are fatal. A combat session turns every error into a line of
//! narration and keeps waiting for a valid action.

use thiserror::Error;

/// Everything that can go wrong while driving a game.
#[derive(Debug, Error)]
pub enum GameError {
    #[error("Invalid combat action: '{0}'")]
    InvalidAction(String),

    #[error("It's not your turn yet!")]
    NotPlayerTurn,

    #[error("The battle is already over.")]
    CombatInactive,

    #[error("You are already in combat with {0}!")]
    CombatInProgress(String),

    #[error("{0}")]
    InvalidItemSelector(String),

    #[error("{owner}'s inventory is full! {item} cannot be carried.")]
    InventoryFull { owner: String, item: String },

    #[error("{owner} doesn't have {item}.")]
    ItemNotFound { owner: String, item: String },

    #[error("{user} has no target to use {item} on!")]
    NoTarget { user: String, item: String },

    #[error("{0} has no special ability.")]
    NoAbility(String),

    #[error("No enemies to encounter.")]
    NoEnemies,

    #[error("Your journey has ended. {0} has fallen.")]
    GameOver(String),

    #[error("No enemy named '{0}' found.")]
    UnknownEnemy(String),

    #[error("There is no region called '{0}'.")]
    UnknownRegion(String),

    #[error("Invalid configuration: {0}")]
    Config(#[from] toml::de::Error),

    #[error("Could not read configuration: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_read_as_narration() {
        let err = GameError::InventoryFull {
            owner: "Gorbag".into(),
            item: "Healing Potion".into(),
        };
        assert_eq!(
            err.to_string(),
            "Gorbag's inventory is full! Healing Potion cannot be carried."
        );
        assert_eq!(
            GameError::InvalidAction("dance".into()).to_string(),
            "Invalid combat action: 'dance'"
        );
    }
}
