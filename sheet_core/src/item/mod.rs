//! Item records owned by a character

mod class;
mod gear;
mod race;
mod skill;

pub use class::{ClassItem, ResourceProgression};
pub use gear::{GearItem, ItemSlot};
pub use race::RaceItem;
pub use skill::{CustomRoll, ResolvedRoll, SkillItem, SkillLevel};

use serde::{Deserialize, Serialize};

/// Identifier for an owned item
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ItemId(pub String);

impl From<&str> for ItemId {
    fn from(s: &str) -> Self {
        ItemId(s.to_string())
    }
}

impl From<String> for ItemId {
    fn from(s: String) -> Self {
        ItemId(s)
    }
}

/// An owned item, tagged by document type
///
/// The tag matches the host's document types, where gear is stored as plain
/// `"item"`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Item {
    Class(ClassItem),
    Race(RaceItem),
    Skill(SkillItem),
    #[serde(rename = "item")]
    Gear(GearItem),
}

impl Item {
    /// The item's identifier
    pub fn id(&self) -> &ItemId {
        match self {
            Item::Class(item) => &item.id,
            Item::Race(item) => &item.id,
            Item::Skill(item) => &item.id,
            Item::Gear(item) => &item.id,
        }
    }

    /// Display name
    pub fn name(&self) -> &str {
        match self {
            Item::Class(item) => &item.name,
            Item::Race(item) => &item.name,
            Item::Skill(item) => &item.name,
            Item::Gear(item) => &item.name,
        }
    }

    /// View as a skill, if this is one
    pub fn as_skill(&self) -> Option<&SkillItem> {
        match self {
            Item::Skill(item) => Some(item),
            _ => None,
        }
    }

    /// View as gear, if this is some
    pub fn as_gear(&self) -> Option<&GearItem> {
        match self {
            Item::Gear(item) => Some(item),
            _ => None,
        }
    }
}
