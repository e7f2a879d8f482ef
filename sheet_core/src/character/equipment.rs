//! Equipment - Slot assignment for worn and held gear

use crate::item::{ItemId, ItemSlot};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

/// Named attachment points on a character
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EquipmentSlot {
    Head,
    Body,
    OtherArmor,
    RightHand,
    LeftHand,
    Accessory,
}

impl EquipmentSlot {
    /// Get all equipment slots
    pub fn all() -> &'static [EquipmentSlot] {
        &[
            EquipmentSlot::Head,
            EquipmentSlot::Body,
            EquipmentSlot::OtherArmor,
            EquipmentSlot::RightHand,
            EquipmentSlot::LeftHand,
            EquipmentSlot::Accessory,
        ]
    }
}

/// Equip failure reasons
#[derive(Error, Debug, PartialEq, Eq)]
pub enum EquipError {
    #[error("no item with id {0:?} on this character")]
    UnknownItem(ItemId),
    #[error("item {0:?} is not equippable gear")]
    NotGear(ItemId),
    #[error("item {item:?} cannot occupy the {slot:?} slot")]
    SlotMismatch { item: ItemId, slot: EquipmentSlot },
}

/// The character's slot-to-item assignment
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Equipment {
    #[serde(flatten)]
    slots: HashMap<EquipmentSlot, ItemId>,
}

impl Equipment {
    /// Item occupying a slot, if any
    pub fn get(&self, slot: EquipmentSlot) -> Option<&ItemId> {
        self.slots.get(&slot)
    }

    /// Whether the item occupies any slot
    pub fn is_equipped(&self, id: &ItemId) -> bool {
        self.slots.values().any(|held| held == id)
    }

    /// Distinct equipped item ids. An item held in both hands appears once.
    pub fn item_ids(&self) -> Vec<&ItemId> {
        let mut ids: Vec<&ItemId> = Vec::new();
        for id in self.slots.values() {
            if !ids.contains(&id) {
                ids.push(id);
            }
        }
        ids
    }

    pub(crate) fn assign(&mut self, slot: EquipmentSlot, id: ItemId) {
        self.slots.insert(slot, id);
    }

    /// Clear one slot, returning the item that held it
    pub(crate) fn clear(&mut self, slot: EquipmentSlot) -> Option<ItemId> {
        self.slots.remove(&slot)
    }

    /// Remove every slot assignment pointing at the item
    pub(crate) fn clear_item(&mut self, id: &ItemId) {
        self.slots.retain(|_, held| held != id);
    }
}

/// Slots an item of the given kind may occupy
pub(crate) fn allowed_slots(item_slot: ItemSlot) -> &'static [EquipmentSlot] {
    match item_slot {
        ItemSlot::Head => &[EquipmentSlot::Head],
        ItemSlot::Body => &[EquipmentSlot::Body],
        ItemSlot::SupportArmor => &[EquipmentSlot::OtherArmor],
        ItemSlot::OneHand | ItemSlot::BothHands => {
            &[EquipmentSlot::RightHand, EquipmentSlot::LeftHand]
        }
        ItemSlot::Accessory => &[EquipmentSlot::Accessory],
    }
}
