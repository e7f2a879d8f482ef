//! ClassItem - The character's class (at most one per character)

use crate::item::ItemId;
use crate::types::Ability;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Linear resource growth: a starting value at level 1 plus a gain for every
/// level after it
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceProgression {
    pub start: i32,
    pub gain: i32,
}

impl ResourceProgression {
    /// Cap contributed by this progression at the given level
    pub fn at_level(&self, level: i32) -> i32 {
        self.start + self.gain * (level - 1)
    }
}

/// A class item, supplying flat ability modifiers and resource progressions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassItem {
    pub id: ItemId,
    pub name: String,
    /// Flat bonus per ability
    #[serde(default)]
    pub modifiers: HashMap<Ability, i32>,
    #[serde(default)]
    pub health: ResourceProgression,
    #[serde(default)]
    pub mana: ResourceProgression,
}

impl ClassItem {
    /// Flat class bonus for one ability; unlisted abilities get 0
    pub fn modifier(&self, ability: Ability) -> i32 {
        self.modifiers.get(&ability).copied().unwrap_or(0)
    }
}
