//! Dice pool rolling
//!
//! Checks roll `dice × d6 + flat`. Rolling takes any [`rand::Rng`] so games
//! can seed deterministically; `roll_check` wraps `thread_rng` for
//! convenience.

mod initiative;

pub use initiative::{seed_initiative, turn_order, Combatant};

use crate::derived::CheckValue;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome of rolling a check's dice pool
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollResult {
    /// Individual d6 results
    pub rolls: Vec<i32>,
    /// Flat part added to the dice
    pub flat: i32,
    /// Dice sum plus flat part
    pub total: i32,
}

impl RollResult {
    /// Sum of the dice alone
    pub fn dice_total(&self) -> i32 {
        self.rolls.iter().sum()
    }
}

impl fmt::Display for RollResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}d6{:+} = {}", self.rolls.len(), self.flat, self.total)
    }
}

/// A named, toggleable bonus applied on top of a check before rolling
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollModifier {
    pub name: String,
    pub value: i32,
    pub active: bool,
}

/// Roll a check with the given generator
///
/// A pool debuffed below zero dice rolls no dice at all.
pub fn roll_check_with_rng<R: Rng>(check: &CheckValue, rng: &mut R) -> RollResult {
    let count = check.dice.max(0);
    let rolls: Vec<i32> = (0..count).map(|_| rng.gen_range(1..=6)).collect();
    let total = rolls.iter().sum::<i32>() + check.flat;
    RollResult {
        rolls,
        flat: check.flat,
        total,
    }
}

/// Roll a check with thread-local RNG
pub fn roll_check(check: &CheckValue) -> RollResult {
    roll_check_with_rng(check, &mut rand::thread_rng())
}

/// Roll a check with extra named modifiers; inactive ones are skipped
pub fn roll_check_with_modifiers<R: Rng>(
    check: &CheckValue,
    modifiers: &[RollModifier],
    rng: &mut R,
) -> RollResult {
    let extra: i32 = modifiers
        .iter()
        .filter(|modifier| modifier.active)
        .map(|modifier| modifier.value)
        .sum();
    let adjusted = CheckValue {
        flat: check.flat + extra,
        dice: check.dice,
    };
    roll_check_with_rng(&adjusted, rng)
}
