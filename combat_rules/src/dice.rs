//! Source of randomness for the engine.
//!
//! Every random decision goes through [`Dice`], so a game can be replayed from
//! a seed and tests can script exact outcomes.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A random number generator as the engine sees it.
pub trait Dice {
    /// Uniform integer in `[low, high]`. Returns `low` when the range is empty.
    fn roll(&mut self, low: i32, high: i32) -> i32;

    /// Uniform float in `[0, 1)`.
    fn chance(&mut self) -> f64;
}

/// Pick one element of a slice.
pub fn choose<'a, T>(dice: &mut dyn Dice, items: &'a [T]) -> Option<&'a T> {
    if items.is_empty() {
        return None;
    }
    let index = dice.roll(0, items.len() as i32 - 1) as usize;
    items.get(index)
}

/// Dice backed by a seedable standard generator.
#[derive(Debug, Clone)]
pub struct SeededDice {
    rng: StdRng,
    seed: u64,
}

impl SeededDice {
    /// Deterministic dice for the given seed.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    /// Dice seeded from the operating system.
    pub fn from_entropy() -> Self {
        Self::new(rand::thread_rng().gen())
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl Dice for SeededDice {
    fn roll(&mut self, low: i32, high: i32) -> i32 {
        if high <= low {
            return low;
        }
        self.rng.gen_range(low..=high)
    }

    fn chance(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }
}
