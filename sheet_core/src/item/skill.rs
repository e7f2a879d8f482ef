//! SkillItem - Learned skills contributing modifier formulas

use crate::formula::{self, ModifierValue, Substitutions};
use crate::item::ItemId;
use crate::types::ModifierKey;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Current and maximum skill level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillLevel {
    pub value: i32,
    pub max: i32,
}

impl Default for SkillLevel {
    fn default() -> Self {
        SkillLevel { value: 1, max: 1 }
    }
}

/// An extra roll a skill offers, entered as a raw formula
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomRoll {
    pub name: String,
    pub formula: String,
}

/// A custom roll with its tokens substituted for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedRoll {
    pub name: String,
    pub check: String,
}

/// A learned skill. Only active skills contribute to derivation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillItem {
    pub id: ItemId,
    pub name: String,
    #[serde(default)]
    pub active: bool,
    #[serde(default)]
    pub level: SkillLevel,
    /// Modifier formulas keyed by derivation target
    #[serde(default)]
    pub modifiers: HashMap<ModifierKey, String>,
    #[serde(default)]
    pub custom_rolls: Vec<CustomRoll>,
    #[serde(default)]
    pub timing: String,
    /// Action point cost to use, if any
    #[serde(default)]
    pub cost: Option<i32>,
}

impl SkillItem {
    /// The raw formula targeting `key`; absent keys default to `"0"`
    pub fn modifier_formula(&self, key: ModifierKey) -> &str {
        self.modifiers.get(&key).map_or("0", String::as_str)
    }

    /// Evaluate the formula targeting `key` with this skill's level as `SL`
    pub fn modifier_value(&self, key: ModifierKey, character_level: i32) -> ModifierValue {
        let subs = Substitutions::for_skill(self.level.value, character_level);
        formula::evaluate(self.modifier_formula(key), &subs)
    }

    /// Custom rolls with `SL`/`CL` substituted, ready for display
    pub fn resolved_rolls(&self, character_level: i32) -> Vec<ResolvedRoll> {
        let subs = Substitutions::for_skill(self.level.value, character_level);
        self.custom_rolls
            .iter()
            .map(|roll| ResolvedRoll {
                name: roll.name.clone(),
                check: formula::substitute_tokens(&roll.formula, &subs),
            })
            .collect()
    }
}
