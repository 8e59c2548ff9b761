//! Testing utilities.
//!
//! [`ScriptedDice`] makes combat deterministic: queued values are returned in
//! order, and once a queue runs dry the fixed fallback is used for every call.

use std::collections::VecDeque;

use crate::dice::Dice;

/// Dice that replay scripted values.
#[derive(Debug, Clone)]
pub struct ScriptedDice {
    rolls: VecDeque<i32>,
    chances: VecDeque<f64>,
    fallback_roll: Option<i32>,
    fallback_chance: f64,
}

impl ScriptedDice {
    /// Empty script. Rolls fall back to the low end of the range and chances to 0.99.
    pub fn new() -> Self {
        Self {
            rolls: VecDeque::new(),
            chances: VecDeque::new(),
            fallback_roll: None,
            fallback_chance: 0.99,
        }
    }

    /// Dice that always return the same roll and chance.
    pub fn fixed(roll: i32, chance: f64) -> Self {
        Self::new().fallback_roll(roll).fallback_chance(chance)
    }

    /// Queue integer rolls.
    pub fn rolls(mut self, values: impl IntoIterator<Item = i32>) -> Self {
        self.rolls.extend(values);
        self
    }

    /// Queue chance values.
    pub fn chances(mut self, values: impl IntoIterator<Item = f64>) -> Self {
        self.chances.extend(values);
        self
    }

    pub fn fallback_roll(mut self, value: i32) -> Self {
        self.fallback_roll = Some(value);
        self
    }

    pub fn fallback_chance(mut self, value: f64) -> Self {
        self.fallback_chance = value;
        self
    }

    /// Scripted values not consumed yet.
    pub fn remaining(&self) -> (usize, usize) {
        (self.rolls.len(), self.chances.len())
    }
}

impl Default for ScriptedDice {
    fn default() -> Self {
        Self::new()
    }
}

impl Dice for ScriptedDice {
    /// Scripted rolls are clamped into the requested range.
    fn roll(&mut self, low: i32, high: i32) -> i32 {
        let value = self
            .rolls
            .pop_front()
            .or(self.fallback_roll)
            .unwrap_or(low);
        value.clamp(low, high.max(low))
    }

    fn chance(&mut self) -> f64 {
        self.chances.pop_front().unwrap_or(self.fallback_chance)
    }
}
