//! Derivation - Recomputing every derived value from base state
//!
//! The orchestrator is a pure function: abilities first, then the combat
//! snapshot, which reads finalized ability scores. Calling it twice on the
//! same sheet yields the same output; nothing accumulates across calls.

mod ability;
mod combat;

pub use ability::{compute_ability, AbilityScore};
pub use combat::{
    compute_combat, CheckValue, CombatAttributes, CombatExtension, CombatSnapshot, PlayerCombat,
};

use crate::character::CharacterSheet;
use crate::types::Ability;
use serde::{Deserialize, Serialize};

/// Derived ability table, one entry per ability
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbilityScores {
    pub strength: AbilityScore,
    pub dexterity: AbilityScore,
    pub agility: AbilityScore,
    pub intelligence: AbilityScore,
    pub perception: AbilityScore,
    pub mind: AbilityScore,
}

impl AbilityScores {
    /// Derived record for one ability
    pub fn get(&self, ability: Ability) -> &AbilityScore {
        match ability {
            Ability::Strength => &self.strength,
            Ability::Dexterity => &self.dexterity,
            Ability::Agility => &self.agility,
            Ability::Intelligence => &self.intelligence,
            Ability::Perception => &self.perception,
            Ability::Mind => &self.mind,
        }
    }

    fn get_mut(&mut self, ability: Ability) -> &mut AbilityScore {
        match ability {
            Ability::Strength => &mut self.strength,
            Ability::Dexterity => &mut self.dexterity,
            Ability::Agility => &mut self.agility,
            Ability::Intelligence => &mut self.intelligence,
            Ability::Perception => &mut self.perception,
            Ability::Mind => &mut self.mind,
        }
    }
}

/// Ephemeral output of one derivation pass; never persisted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DerivedSheet {
    pub abilities: AbilityScores,
    pub combat: CombatSnapshot,
}

/// Recompute every derived value from the sheet's base data
pub fn derive(sheet: &CharacterSheet) -> DerivedSheet {
    let class_item = sheet.class_item();

    let mut abilities = AbilityScores::default();
    for &ability in Ability::all() {
        let class_mod = class_item.map_or(0, |class| class.modifier(ability));
        *abilities.get_mut(ability) = compute_ability(
            ability,
            sheet.abilities.get(ability),
            class_mod,
            sheet.active_skills(),
            sheet.level,
        );
    }

    let combat = compute_combat(sheet, &abilities);
    DerivedSheet { abilities, combat }
}
