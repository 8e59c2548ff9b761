//! Post-combat settlement: loot transfer and enemy removal.

use serde::{Deserialize, Serialize};

use crate::entities::{Carrier, Character};
use crate::error::GameError;
use crate::world_state::WorldState;

/// What a victory yielded.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RewardSummary {
    pub recipient: String,
    pub defeated: String,
    /// Item names that made it into the recipient's inventory.
    pub acquired: Vec<String>,
    /// Item names refused because the inventory was full.
    pub lost: Vec<String>,
}

impl RewardSummary {
    /// Narration lines for the combat log.
    pub fn lines(&self) -> Vec<String> {
        let mut lines = Vec::new();
        if self.acquired.is_empty() && self.lost.is_empty() {
            lines.push(format!("{} carried nothing of value.", self.defeated));
        }
        for item in &self.acquired {
            lines.push(format!("{} acquires {}!", self.recipient, item));
        }
        for item in &self.lost {
            let refusal = GameError::InventoryFull {
                owner: self.recipient.clone(),
                item: item.clone(),
            };
            lines.push(format!("{refusal} It is left behind."));
        }
        lines
    }
}

/// Settles a won fight.
pub struct RewardResolver;

impl RewardResolver {
    /// Move everything `from` carries into `to`, in order, until `to` is full.
    pub fn transfer_loot(from: &mut impl Carrier, to: &mut impl Carrier) -> RewardSummary {
        let mut summary = RewardSummary {
            recipient: to.carrier_name().to_string(),
            defeated: from.carrier_name().to_string(),
            ..Default::default()
        };

        for item in from.surrender_all() {
            let name = item.name.clone();
            match to.receive(item) {
                Ok(()) => summary.acquired.push(name),
                Err(refused) => {
                    tracing::warn!(
                        recipient = %summary.recipient,
                        item = %refused.name,
                        "inventory full, loot lost"
                    );
                    summary.lost.push(refused.name);
                }
            }
        }

        tracing::info!(
            recipient = %summary.recipient,
            defeated = %summary.defeated,
            acquired = summary.acquired.len(),
            lost = summary.lost.len(),
            held = to.inventory().len(),
            "loot transferred"
        );
        summary
    }

    /// Transfer the defeated enemy's loot and take it out of the world for good.
    pub fn settle(player: &mut Character, mut enemy: Character, world: &mut WorldState) -> RewardSummary {
        let summary = Self::transfer_loot(&mut enemy, player);
        world.remove_enemy(enemy.id);
        world.record_defeat(enemy.name);
        summary
    }
}
