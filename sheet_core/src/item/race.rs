//! RaceItem - The character's race (at most one per character)

use crate::item::ItemId;
use serde::{Deserialize, Serialize};

/// A race item. Races carry no derivation data; they are flavor records the
/// sheet displays, kept unique the same way classes are.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RaceItem {
    pub id: ItemId,
    pub name: String,
    #[serde(default)]
    pub description: String,
}
