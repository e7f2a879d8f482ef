//! Combat aggregation
//!
//! Seeds the roll-check and attribute tables from finalized ability scores,
//! then folds active skills and equipped gear on top. The fold is an
//! additive sum, so the order of skills and items never matters.

use crate::character::CharacterSheet;
use crate::derived::AbilityScores;
use crate::formula::{self, ModifierValue, Substitutions};
use crate::types::{ActorKind, ModifierKey};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One roll check: a dice pool plus a flat part
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckValue {
    pub flat: i32,
    pub dice: i32,
}

impl CheckValue {
    /// Seed a check at the base pool of 2d6
    fn seeded(flat: i32) -> Self {
        CheckValue { flat, dice: 2 }
    }

    fn apply(&mut self, value: ModifierValue) {
        self.flat += value.flat;
        self.dice += value.dice;
    }
}

/// Scalar combat attributes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CombatAttributes {
    pub physical_defense: i32,
    pub magic_defense: i32,
    pub action_points: i32,
    pub movement: i32,
}

/// Player-only derived combat data: the extended check set and resource caps
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerCombat {
    pub detect_traps: CheckValue,
    pub disarm_traps: CheckValue,
    pub sense_threats: CheckValue,
    pub identify_enemy: CheckValue,
    pub magic_check: CheckValue,
    /// Health cap from class progression, lifestyle, skills, and gear
    pub health: i32,
    /// Mana cap from class progression, lifestyle, skills, and gear
    pub mana: i32,
}

/// Per-kind extension of the combat snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CombatExtension {
    Npc,
    Player(PlayerCombat),
}

impl CombatExtension {
    /// Player data, if this snapshot belongs to a player
    pub fn player(&self) -> Option<&PlayerCombat> {
        match self {
            CombatExtension::Player(player) => Some(player),
            CombatExtension::Npc => None,
        }
    }
}

/// Ephemeral combat numbers, fully recomputed on every derivation pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CombatSnapshot {
    pub hit_check: CheckValue,
    pub attack_power: CheckValue,
    pub dodge_check: CheckValue,
    #[serde(rename = "combatAttributes")]
    pub attributes: CombatAttributes,
    pub extension: CombatExtension,
}

/// Working state for the fold
struct Accumulator {
    hit_check: CheckValue,
    attack_power: CheckValue,
    dodge_check: CheckValue,
    attributes: CombatAttributes,
    player: Option<PlayerCombat>,
}

impl Accumulator {
    /// Fold one modifier map into the tables. Checks take flat and dice
    /// parts; scalar attributes and resource caps take the flat part only.
    /// Ability-targeted keys belong to the ability pass and are skipped.
    fn fold(&mut self, modifiers: &HashMap<ModifierKey, String>, subs: &Substitutions) {
        for (key, text) in modifiers {
            if key.ability().is_some() {
                continue;
            }
            let value = formula::evaluate(text, subs);
            match key {
                ModifierKey::HitCheck => self.hit_check.apply(value),
                ModifierKey::AttackPower => self.attack_power.apply(value),
                ModifierKey::DodgeCheck => self.dodge_check.apply(value),
                ModifierKey::PhysicalDefense => self.attributes.physical_defense += value.flat,
                ModifierKey::MagicDefense => self.attributes.magic_defense += value.flat,
                ModifierKey::ActionPoints => self.attributes.action_points += value.flat,
                ModifierKey::Movement => self.attributes.movement += value.flat,
                ModifierKey::DetectTraps => {
                    if let Some(player) = self.player.as_mut() {
                        player.detect_traps.apply(value);
                    }
                }
                ModifierKey::DisarmTraps => {
                    if let Some(player) = self.player.as_mut() {
                        player.disarm_traps.apply(value);
                    }
                }
                ModifierKey::SenseThreats => {
                    if let Some(player) = self.player.as_mut() {
                        player.sense_threats.apply(value);
                    }
                }
                ModifierKey::IdentifyEnemy => {
                    if let Some(player) = self.player.as_mut() {
                        player.identify_enemy.apply(value);
                    }
                }
                ModifierKey::MagicCheck => {
                    if let Some(player) = self.player.as_mut() {
                        player.magic_check.apply(value);
                    }
                }
                ModifierKey::Health => {
                    if let Some(player) = self.player.as_mut() {
                        player.health += value.flat;
                    }
                }
                ModifierKey::Mana => {
                    if let Some(player) = self.player.as_mut() {
                        player.mana += value.flat;
                    }
                }
                _ => {}
            }
        }
    }
}

/// Compute the combat snapshot from finalized ability scores
///
/// Reads the sheet and the ability table without mutating either; every call
/// assembles a fresh snapshot from base values.
pub fn compute_combat(sheet: &CharacterSheet, abilities: &AbilityScores) -> CombatSnapshot {
    let level = sheet.level;

    let player = match sheet.kind {
        ActorKind::Npc => None,
        ActorKind::Player => {
            let class = sheet.class_item();
            let adjustment = sheet
                .lifestyle
                .map_or(0, |lifestyle| lifestyle.resource_adjustment(level));
            Some(PlayerCombat {
                detect_traps: CheckValue::seeded(abilities.perception.score),
                disarm_traps: CheckValue::seeded(abilities.dexterity.score),
                sense_threats: CheckValue::seeded(abilities.perception.score),
                identify_enemy: CheckValue::seeded(abilities.intelligence.score),
                magic_check: CheckValue::seeded(abilities.intelligence.score),
                health: (class.map_or(0, |c| c.health.at_level(level)) + adjustment).max(1),
                mana: (class.map_or(0, |c| c.mana.at_level(level)) + adjustment).max(1),
            })
        }
    };

    let mut acc = Accumulator {
        hit_check: CheckValue::seeded(abilities.dexterity.score),
        attack_power: CheckValue::seeded(0),
        dodge_check: CheckValue::seeded(abilities.agility.score),
        attributes: CombatAttributes {
            physical_defense: 0,
            magic_defense: 0,
            action_points: abilities.agility.score + abilities.perception.score,
            movement: abilities.strength.score + 5,
        },
        player,
    };

    for skill in sheet.active_skills() {
        let subs = Substitutions::for_skill(skill.level.value, level);
        acc.fold(&skill.modifiers, &subs);
    }

    let gear_subs = Substitutions::for_gear(level);
    for gear in sheet.equipped_gear() {
        acc.fold(&gear.modifiers, &gear_subs);
    }

    CombatSnapshot {
        hit_check: acc.hit_check,
        attack_power: acc.attack_power,
        dodge_check: acc.dodge_check,
        attributes: acc.attributes,
        extension: match acc.player {
            Some(player) => CombatExtension::Player(player),
            None => CombatExtension::Npc,
        },
    }
}
