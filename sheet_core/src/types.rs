//! Core types shared across the sheet engine

use serde::{Deserialize, Serialize};
use std::fmt;

/// The six ability scores used by the system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ability {
    Strength,
    Dexterity,
    Agility,
    Intelligence,
    Perception,
    Mind,
}

impl Ability {
    /// Get all abilities in sheet order
    pub fn all() -> &'static [Ability] {
        &[
            Ability::Strength,
            Ability::Dexterity,
            Ability::Agility,
            Ability::Intelligence,
            Ability::Perception,
            Ability::Mind,
        ]
    }

    /// Full display label
    pub fn label(&self) -> &'static str {
        match self {
            Ability::Strength => "Strength",
            Ability::Dexterity => "Dexterity",
            Ability::Agility => "Agility",
            Ability::Intelligence => "Intelligence",
            Ability::Perception => "Perception",
            Ability::Mind => "Mind",
        }
    }

    /// Three-letter abbreviation for compact sheet views
    pub fn abbr(&self) -> &'static str {
        match self {
            Ability::Strength => "STR",
            Ability::Dexterity => "DEX",
            Ability::Agility => "AGI",
            Ability::Intelligence => "INT",
            Ability::Perception => "PER",
            Ability::Mind => "MND",
        }
    }

    /// The modifier-map key targeting this ability
    pub fn modifier_key(&self) -> ModifierKey {
        match self {
            Ability::Strength => ModifierKey::Strength,
            Ability::Dexterity => ModifierKey::Dexterity,
            Ability::Agility => ModifierKey::Agility,
            Ability::Intelligence => ModifierKey::Intelligence,
            Ability::Perception => ModifierKey::Perception,
            Ability::Mind => ModifierKey::Mind,
        }
    }
}

impl fmt::Display for Ability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Document-type tag distinguishing full characters from NPCs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActorKind {
    Player,
    Npc,
}

/// Living-standard choice affecting health and mana caps
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Lifestyle {
    Stable,
    Economy,
    Suite,
    Royal,
}

impl Lifestyle {
    /// Flat adjustment applied to both resource caps at the given level
    pub fn resource_adjustment(self, level: i32) -> i32 {
        match self {
            Lifestyle::Stable => -5 * level,
            Lifestyle::Economy => 5,
            Lifestyle::Suite => 10,
            Lifestyle::Royal => 30,
        }
    }
}

/// Keys a modifier formula can target
///
/// Serialized camelCase so host documents (`"hitCheck"`, `"physicalDefense"`)
/// map directly onto the enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ModifierKey {
    // Abilities
    Strength,
    Dexterity,
    Agility,
    Intelligence,
    Perception,
    Mind,
    // Roll checks
    HitCheck,
    AttackPower,
    DodgeCheck,
    DetectTraps,
    DisarmTraps,
    SenseThreats,
    IdentifyEnemy,
    MagicCheck,
    // Combat attributes
    PhysicalDefense,
    MagicDefense,
    ActionPoints,
    Movement,
    // Resource caps
    Health,
    Mana,
}

impl ModifierKey {
    /// The ability this key targets, if it targets one
    pub fn ability(&self) -> Option<Ability> {
        match self {
            ModifierKey::Strength => Some(Ability::Strength),
            ModifierKey::Dexterity => Some(Ability::Dexterity),
            ModifierKey::Agility => Some(Ability::Agility),
            ModifierKey::Intelligence => Some(Ability::Intelligence),
            ModifierKey::Perception => Some(Ability::Perception),
            ModifierKey::Mind => Some(Ability::Mind),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ability_all_covers_six() {
        assert_eq!(Ability::all().len(), 6);
    }

    #[test]
    fn test_lifestyle_adjustments() {
        assert_eq!(Lifestyle::Stable.resource_adjustment(4), -20);
        assert_eq!(Lifestyle::Economy.resource_adjustment(4), 5);
        assert_eq!(Lifestyle::Suite.resource_adjustment(4), 10);
        assert_eq!(Lifestyle::Royal.resource_adjustment(4), 30);
    }

    #[test]
    fn test_modifier_key_serde_names() {
        let key: ModifierKey = serde_json::from_str("\"hitCheck\"").unwrap();
        assert_eq!(key, ModifierKey::HitCheck);
        let key: ModifierKey = serde_json::from_str("\"physicalDefense\"").unwrap();
        assert_eq!(key, ModifierKey::PhysicalDefense);
        let key: ModifierKey = serde_json::from_str("\"strength\"").unwrap();
        assert_eq!(key, ModifierKey::Strength);
    }

    #[test]
    fn test_modifier_key_ability_mapping() {
        assert_eq!(ModifierKey::Agility.ability(), Some(Ability::Agility));
        assert_eq!(ModifierKey::HitCheck.ability(), None);
        for &ability in Ability::all() {
            assert_eq!(ability.modifier_key().ability(), Some(ability));
        }
    }
}
