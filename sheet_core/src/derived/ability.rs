//! Ability aggregation

use crate::item::SkillItem;
use crate::types::Ability;
use serde::{Deserialize, Serialize};

/// Derived fields for one ability, rebuilt on every pass
///
/// `value` is the raw sheet input; everything else is overwritten by
/// [`compute_ability`]. Invariants: `score = bonus + class + skills` and
/// `dice = 2 + skills_dice`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AbilityScore {
    pub value: i32,
    pub bonus: i32,
    #[serde(rename = "class")]
    pub class_mod: i32,
    pub skills: i32,
    pub skills_dice: i32,
    pub score: i32,
    pub dice: i32,
}

/// Compute one ability's derived fields from scratch
///
/// Returns a fresh record per call; nothing carries over between abilities.
/// Skill contributions may be negative and are not clamped, so a debuff can
/// pull a dice pool below the base 2.
pub fn compute_ability<'a>(
    ability: Ability,
    base_value: i32,
    class_mod: i32,
    active_skills: impl Iterator<Item = &'a SkillItem>,
    level: i32,
) -> AbilityScore {
    let bonus = base_value.div_euclid(3);

    let mut skills_flat = 0;
    let mut skills_dice = 0;
    for skill in active_skills {
        let value = skill.modifier_value(ability.modifier_key(), level);
        skills_flat += value.flat;
        skills_dice += value.dice;
    }

    AbilityScore {
        value: base_value,
        bonus,
        class_mod,
        skills: skills_flat,
        skills_dice,
        score: bonus + class_mod + skills_flat,
        dice: 2 + skills_dice,
    }
}
