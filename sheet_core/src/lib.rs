//! sheet_core - Character sheet derivation for a 2d6 tabletop system
//!
//! This library provides:
//! - CharacterSheet: base input state (abilities, level, items, equipment)
//! - derive: the pure derivation pass producing ability scores and a combat snapshot
//! - formula: modifier formula evaluation with SL/CL tokens and d6 pools
//! - roll: dice pool rolling and initiative seeding
//!
//! Derivation is synchronous and side-effect free: the host hands in a
//! sheet, gets a fresh [`DerivedSheet`](derived::DerivedSheet) back, and owns
//! everything else (persistence, permissions, rendering).

pub mod character;
pub mod config;
pub mod derived;
pub mod formula;
pub mod item;
pub mod prelude;
pub mod roll;
pub mod types;

// Re-export core types for convenience
pub use character::{
    level_progress, BaseAbilities, CharacterSheet, EquipError, Equipment, EquipmentSlot,
    LevelProgress,
};
pub use config::{default_classes, default_skills, ConfigError};
pub use derived::{
    compute_ability, compute_combat, derive, AbilityScore, AbilityScores, CheckValue,
    CombatAttributes, CombatExtension, CombatSnapshot, DerivedSheet, PlayerCombat,
};
pub use formula::{evaluate, substitute_tokens, ModifierValue, Substitutions};
pub use item::{
    ClassItem, CustomRoll, GearItem, Item, ItemId, ItemSlot, RaceItem, ResolvedRoll,
    ResourceProgression, SkillItem, SkillLevel,
};
pub use roll::{
    roll_check, roll_check_with_modifiers, roll_check_with_rng, seed_initiative, turn_order,
    Combatant, RollModifier, RollResult,
};
pub use types::{Ability, ActorKind, Lifestyle, ModifierKey};
