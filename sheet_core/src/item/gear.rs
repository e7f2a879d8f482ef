//! GearItem - Equippable items contributing modifiers while worn

use crate::formula::{self, ModifierValue, Substitutions};
use crate::item::ItemId;
use crate::types::ModifierKey;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Where a piece of gear may be worn or held
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ItemSlot {
    Head,
    Body,
    SupportArmor,
    #[serde(rename = "one")]
    OneHand,
    /// Occupies both hand slots at once. Older documents used `"dual"`.
    #[serde(rename = "both", alias = "dual")]
    BothHands,
    Accessory,
}

/// An equippable item. Its modifiers only contribute while it occupies an
/// equipment slot; gear has no level, so formulas substitute `CL` only.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GearItem {
    pub id: ItemId,
    pub name: String,
    pub equip_slot: ItemSlot,
    #[serde(default)]
    pub modifiers: HashMap<ModifierKey, String>,
}

impl GearItem {
    /// Evaluate the formula targeting `key`; absent keys default to `"0"`
    pub fn modifier_value(&self, key: ModifierKey, character_level: i32) -> ModifierValue {
        let formula = self.modifiers.get(&key).map_or("0", String::as_str);
        formula::evaluate(formula, &Substitutions::for_gear(character_level))
    }
}
