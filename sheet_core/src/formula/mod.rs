//! Modifier formula evaluation
//!
//! Item and skill modifiers are free-text formulas like `"SLd6+CL"` or
//! `"SL*2"`. `SL` substitutes the owning skill's level and `CL` the
//! character's level; a `d6` marker splits the text into a dice count and a
//! flat part. Malformed input never fails: it evaluates to 0, so bad game
//! data cannot block a derivation pass.

mod expr;

use serde::{Deserialize, Serialize};

/// Flat and dice parts produced by one modifier formula
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModifierValue {
    /// Flat bonus added to the target
    pub flat: i32,
    /// Number of d6 added to the target's dice pool
    pub dice: i32,
}

/// Token values available to a formula
#[derive(Debug, Clone, Copy)]
pub struct Substitutions {
    /// `SL`, the owning skill's level. Gear carries no level, so gear
    /// formulas leave this unset and an `SL` token degrades to 0.
    pub skill_level: Option<i32>,
    /// `CL`, the character's level
    pub character_level: i32,
}

impl Substitutions {
    /// Substitutions for a skill modifier
    pub fn for_skill(skill_level: i32, character_level: i32) -> Self {
        Substitutions {
            skill_level: Some(skill_level),
            character_level,
        }
    }

    /// Substitutions for a gear modifier
    pub fn for_gear(character_level: i32) -> Self {
        Substitutions {
            skill_level: None,
            character_level,
        }
    }

    fn resolve(&self, ident: &str) -> Option<i32> {
        match ident {
            "SL" => self.skill_level,
            "CL" => Some(self.character_level),
            _ => None,
        }
    }
}

/// Byte offset of the dice marker, if the formula has one
///
/// The marker is the first `d6` not followed by an alphanumeric character,
/// so `SLd6` splits at the token boundary while `d60` is left alone.
fn dice_marker(formula: &str) -> Option<usize> {
    let bytes = formula.as_bytes();
    for i in 0..bytes.len().saturating_sub(1) {
        if bytes[i] == b'd'
            && bytes[i + 1] == b'6'
            && !bytes.get(i + 2).is_some_and(|c| c.is_ascii_alphanumeric())
        {
            return Some(i);
        }
    }
    None
}

/// Evaluate a modifier formula against the substitution table
///
/// Never fails: an empty or malformed side contributes 0.
pub fn evaluate(formula: &str, subs: &Substitutions) -> ModifierValue {
    match dice_marker(formula) {
        Some(marker) => ModifierValue {
            dice: expr::evaluate_arithmetic(&formula[..marker], subs).unwrap_or(0),
            flat: expr::evaluate_arithmetic(&formula[marker + 2..], subs).unwrap_or(0),
        },
        None => ModifierValue {
            flat: expr::evaluate_arithmetic(formula, subs).unwrap_or(0),
            dice: 0,
        },
    }
}

/// Substitute `SL`/`CL` tokens into a formula for display
///
/// Only standalone identifiers are replaced; everything else, including
/// unknown identifiers and the `d6` marker, is copied through verbatim.
pub fn substitute_tokens(formula: &str, subs: &Substitutions) -> String {
    let bytes = formula.as_bytes();
    let mut out = String::with_capacity(formula.len());
    let mut i = 0;

    while i < bytes.len() {
        let c = bytes[i];
        if c.is_ascii_alphabetic() || c == b'_' {
            let start = i;
            while i < bytes.len() && (bytes[i].is_ascii_alphanumeric() || bytes[i] == b'_') {
                i += 1;
            }
            let ident = &formula[start..i];
            match subs.resolve(ident) {
                Some(value) => out.push_str(&value.to_string()),
                None => out.push_str(ident),
            }
        } else {
            out.push(c as char);
            i += 1;
        }
    }

    out
}
