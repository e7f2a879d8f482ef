//! Prelude module for convenient imports
//!
//! ```rust
//! use sheet_core::prelude::*;
//! ```

// Character state
pub use crate::character::{CharacterSheet, EquipError, Equipment, EquipmentSlot};

// Derivation
pub use crate::derived::{
    derive, AbilityScore, AbilityScores, CheckValue, CombatAttributes, CombatExtension,
    CombatSnapshot, DerivedSheet, PlayerCombat,
};

// Formulas
pub use crate::formula::{evaluate, ModifierValue, Substitutions};

// Items
pub use crate::item::{ClassItem, GearItem, Item, ItemId, ItemSlot, RaceItem, SkillItem};

// Rolling
pub use crate::roll::{roll_check, roll_check_with_rng, Combatant, RollResult};

// Core enums
pub use crate::types::{Ability, ActorKind, Lifestyle, ModifierKey};

// Config
pub use crate::config::{default_classes, default_skills};
