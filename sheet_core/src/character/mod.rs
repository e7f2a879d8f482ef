//! Character input state
//!
//! `CharacterSheet` holds everything a derivation pass reads: base ability
//! values, level and xp, lifestyle, owned items, and the equipment
//! assignment. It never holds derived values; those live in a
//! [`DerivedSheet`](crate::derived::DerivedSheet) rebuilt on demand.

mod equipment;

pub use equipment::{EquipError, Equipment, EquipmentSlot};

use crate::item::{ClassItem, GearItem, Item, ItemId, ItemSlot, RaceItem, SkillItem};
use crate::types::{Ability, ActorKind, Lifestyle};
use serde::{Deserialize, Serialize};

/// Base ability values as entered on the sheet
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseAbilities {
    pub strength: i32,
    pub dexterity: i32,
    pub agility: i32,
    pub intelligence: i32,
    pub perception: i32,
    pub mind: i32,
}

impl BaseAbilities {
    /// Raw value for one ability
    pub fn get(&self, ability: Ability) -> i32 {
        match ability {
            Ability::Strength => self.strength,
            Ability::Dexterity => self.dexterity,
            Ability::Agility => self.agility,
            Ability::Intelligence => self.intelligence,
            Ability::Perception => self.perception,
            Ability::Mind => self.mind,
        }
    }

    /// Set the raw value for one ability
    pub fn set(&mut self, ability: Ability, value: i32) {
        match ability {
            Ability::Strength => self.strength = value,
            Ability::Dexterity => self.dexterity = value,
            Ability::Agility => self.agility = value,
            Ability::Intelligence => self.intelligence = value,
            Ability::Perception => self.perception = value,
            Ability::Mind => self.mind = value,
        }
    }
}

/// Progress through the level track for an xp total
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelProgress {
    /// Level reached
    pub level: i32,
    /// Xp carried into the current level
    pub into_level: i32,
    /// Total xp at which the next level is reached
    pub next_level_at: i32,
}

/// Walk the level track: each level costs `level × 10` xp
pub fn level_progress(xp: i32) -> LevelProgress {
    let mut level = 1;
    let mut rest = xp.max(0);
    while rest >= level * 10 {
        rest -= level * 10;
        level += 1;
    }
    LevelProgress {
        level,
        into_level: rest,
        next_level_at: xp.max(0) - rest + level * 10,
    }
}

fn default_level() -> i32 {
    1
}

/// Full input state for one character
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CharacterSheet {
    // === Identity ===
    pub id: String,
    pub name: String,
    pub kind: ActorKind,

    // === Base values ===
    #[serde(default)]
    pub abilities: BaseAbilities,
    #[serde(default = "default_level")]
    pub level: i32,
    #[serde(default)]
    pub xp: i32,
    #[serde(default)]
    pub lifestyle: Option<Lifestyle>,

    // === Possessions ===
    #[serde(default)]
    pub equipment: Equipment,
    #[serde(default)]
    pub items: Vec<Item>,
}

impl CharacterSheet {
    /// Create an empty sheet at level 1
    pub fn new(id: impl Into<String>, name: impl Into<String>, kind: ActorKind) -> Self {
        CharacterSheet {
            id: id.into(),
            name: name.into(),
            kind,
            abilities: BaseAbilities::default(),
            level: 1,
            xp: 0,
            lifestyle: None,
            equipment: Equipment::default(),
            items: Vec::new(),
        }
    }

    // === Items ===

    /// Add an item. Classes and races stay unique: adding a second one
    /// replaces the first, the way the host deletes duplicates on creation.
    pub fn add_item(&mut self, item: Item) {
        match item {
            Item::Class(_) => self.items.retain(|i| !matches!(i, Item::Class(_))),
            Item::Race(_) => self.items.retain(|i| !matches!(i, Item::Race(_))),
            _ => {}
        }
        self.items.push(item);
    }

    /// Remove an item by id, clearing any equipment slots it held
    pub fn remove_item(&mut self, id: &ItemId) -> Option<Item> {
        let index = self.items.iter().position(|i| i.id() == id)?;
        self.equipment.clear_item(id);
        Some(self.items.remove(index))
    }

    /// Find an item by id
    pub fn item(&self, id: &ItemId) -> Option<&Item> {
        self.items.iter().find(|i| i.id() == id)
    }

    /// The character's class item, if one is present
    pub fn class_item(&self) -> Option<&ClassItem> {
        self.items.iter().find_map(|i| match i {
            Item::Class(class) => Some(class),
            _ => None,
        })
    }

    /// The character's race item, if one is present
    pub fn race_item(&self) -> Option<&RaceItem> {
        self.items.iter().find_map(|i| match i {
            Item::Race(race) => Some(race),
            _ => None,
        })
    }

    /// All learned skills
    pub fn skills(&self) -> impl Iterator<Item = &SkillItem> {
        self.items.iter().filter_map(Item::as_skill)
    }

    /// Skills currently contributing to derivation
    pub fn active_skills(&self) -> impl Iterator<Item = &SkillItem> {
        self.skills().filter(|skill| skill.active)
    }

    /// Toggle a skill's active flag; false if the id is not a skill
    pub fn set_skill_active(&mut self, id: &ItemId, active: bool) -> bool {
        for item in &mut self.items {
            if let Item::Skill(skill) = item {
                if &skill.id == id {
                    skill.active = active;
                    return true;
                }
            }
        }
        false
    }

    // === Equipment ===

    /// Gear item by id
    pub fn gear(&self, id: &ItemId) -> Option<&GearItem> {
        self.item(id).and_then(Item::as_gear)
    }

    /// Distinct equipped gear items, resolved through the slot assignment.
    /// Ids pointing at missing or non-gear items are skipped.
    pub fn equipped_gear(&self) -> Vec<&GearItem> {
        self.equipment
            .item_ids()
            .into_iter()
            .filter_map(|id| self.gear(id))
            .collect()
    }

    /// Equip an owned gear item into a slot
    ///
    /// One-hand gear goes to either hand; both-hands gear occupies both hand
    /// slots with the same item id.
    pub fn equip(&mut self, id: &ItemId, slot: EquipmentSlot) -> Result<(), EquipError> {
        let item = self
            .item(id)
            .ok_or_else(|| EquipError::UnknownItem(id.clone()))?;
        let gear = item.as_gear().ok_or_else(|| EquipError::NotGear(id.clone()))?;

        if !equipment::allowed_slots(gear.equip_slot).contains(&slot) {
            return Err(EquipError::SlotMismatch {
                item: id.clone(),
                slot,
            });
        }

        if gear.equip_slot == ItemSlot::BothHands {
            self.equipment.assign(EquipmentSlot::RightHand, id.clone());
            self.equipment.assign(EquipmentSlot::LeftHand, id.clone());
        } else {
            self.equipment.assign(slot, id.clone());
        }
        Ok(())
    }

    /// Unequip whatever occupies a slot, returning its id
    ///
    /// A both-hands item leaves both hand slots at once.
    pub fn unequip(&mut self, slot: EquipmentSlot) -> Option<ItemId> {
        let id = self.equipment.clear(slot)?;
        if matches!(
            self.gear(&id).map(|g| g.equip_slot),
            Some(ItemSlot::BothHands)
        ) {
            self.equipment.clear_item(&id);
        }
        Some(id)
    }

    // === Progression ===

    /// Record an xp total, updating the level from the track
    pub fn apply_xp(&mut self, xp: i32) {
        self.xp = xp;
        self.level = level_progress(xp).level;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::{ClassItem, GearItem, RaceItem, ResourceProgression, SkillItem};
    use std::collections::HashMap;

    fn sheet() -> CharacterSheet {
        CharacterSheet::new("kazuma", "Kazuma", ActorKind::Player)
    }

    fn class(id: &str) -> Item {
        Item::Class(ClassItem {
            id: id.into(),
            name: id.to_string(),
            modifiers: HashMap::new(),
            health: ResourceProgression { start: 20, gain: 4 },
            mana: ResourceProgression { start: 10, gain: 3 },
        })
    }

    fn gear(id: &str, slot: ItemSlot) -> Item {
        Item::Gear(GearItem {
            id: id.into(),
            name: id.to_string(),
            equip_slot: slot,
            modifiers: HashMap::new(),
        })
    }

    #[test]
    fn test_second_class_replaces_first() {
        let mut sheet = sheet();
        sheet.add_item(class("adventurer"));
        sheet.add_item(class("archwizard"));

        let classes: Vec<_> = sheet
            .items
            .iter()
            .filter(|i| matches!(i, Item::Class(_)))
            .collect();
        assert_eq!(classes.len(), 1);
        assert_eq!(sheet.class_item().unwrap().id, "archwizard".into());
    }

    #[test]
    fn test_second_race_replaces_first() {
        let mut sheet = sheet();
        sheet.add_item(Item::Race(RaceItem {
            id: "human".into(),
            name: "Human".to_string(),
            description: String::new(),
        }));
        sheet.add_item(Item::Race(RaceItem {
            id: "crimson_demon".into(),
            name: "Crimson Demon".to_string(),
            description: String::new(),
        }));

        assert_eq!(sheet.race_item().unwrap().id, "crimson_demon".into());
    }

    #[test]
    fn test_level_track_matches_threshold_loop() {
        // 0..9 xp is level 1; level 2 costs 10, level 3 another 20.
        assert_eq!(level_progress(0).level, 1);
        assert_eq!(level_progress(9).level, 1);
        assert_eq!(level_progress(10).level, 2);
        assert_eq!(level_progress(29).level, 2);
        assert_eq!(level_progress(30).level, 3);

        let progress = level_progress(35);
        assert_eq!(progress.level, 3);
        assert_eq!(progress.into_level, 5);
        assert_eq!(progress.next_level_at, 60);
    }

    #[test]
    fn test_apply_xp_updates_level() {
        let mut sheet = sheet();
        sheet.apply_xp(30);
        assert_eq!(sheet.level, 3);
        assert_eq!(sheet.xp, 30);
    }

    #[test]
    fn test_equip_one_hand_to_either_hand() {
        let mut sheet = sheet();
        sheet.add_item(gear("sword", ItemSlot::OneHand));
        sheet.add_item(gear("dagger", ItemSlot::OneHand));

        sheet.equip(&"sword".into(), EquipmentSlot::RightHand).unwrap();
        sheet.equip(&"dagger".into(), EquipmentSlot::LeftHand).unwrap();
        assert_eq!(sheet.equipped_gear().len(), 2);
    }

    #[test]
    fn test_equip_both_hands_occupies_both() {
        let mut sheet = sheet();
        sheet.add_item(gear("greatsword", ItemSlot::BothHands));

        sheet
            .equip(&"greatsword".into(), EquipmentSlot::RightHand)
            .unwrap();
        assert_eq!(
            sheet.equipment.get(EquipmentSlot::LeftHand),
            Some(&"greatsword".into())
        );
        // One item, one contribution.
        assert_eq!(sheet.equipped_gear().len(), 1);
    }

    #[test]
    fn test_unequip_both_hands_clears_both() {
        let mut sheet = sheet();
        sheet.add_item(gear("greatsword", ItemSlot::BothHands));
        sheet
            .equip(&"greatsword".into(), EquipmentSlot::LeftHand)
            .unwrap();

        let removed = sheet.unequip(EquipmentSlot::RightHand);
        assert_eq!(removed, Some("greatsword".into()));
        assert!(sheet.equipment.get(EquipmentSlot::LeftHand).is_none());
    }

    #[test]
    fn test_equip_rejects_wrong_slot() {
        let mut sheet = sheet();
        sheet.add_item(gear("helmet", ItemSlot::Head));

        let result = sheet.equip(&"helmet".into(), EquipmentSlot::Accessory);
        assert_eq!(
            result,
            Err(EquipError::SlotMismatch {
                item: "helmet".into(),
                slot: EquipmentSlot::Accessory,
            })
        );
    }

    #[test]
    fn test_equip_rejects_non_gear() {
        let mut sheet = sheet();
        sheet.add_item(class("adventurer"));

        let result = sheet.equip(&"adventurer".into(), EquipmentSlot::Body);
        assert_eq!(result, Err(EquipError::NotGear("adventurer".into())));
    }

    #[test]
    fn test_remove_item_clears_its_slots() {
        let mut sheet = sheet();
        sheet.add_item(gear("helmet", ItemSlot::Head));
        sheet.equip(&"helmet".into(), EquipmentSlot::Head).unwrap();

        sheet.remove_item(&"helmet".into());
        assert!(sheet.equipment.get(EquipmentSlot::Head).is_none());
        assert!(sheet.item(&"helmet".into()).is_none());
    }

    #[test]
    fn test_set_skill_active() {
        let mut sheet = sheet();
        sheet.add_item(Item::Skill(SkillItem {
            id: "snipe".into(),
            name: "Snipe".to_string(),
            active: false,
            level: Default::default(),
            modifiers: HashMap::new(),
            custom_rolls: Vec::new(),
            timing: String::new(),
            cost: None,
        }));

        assert!(sheet.set_skill_active(&"snipe".into(), true));
        assert_eq!(sheet.active_skills().count(), 1);
        assert!(!sheet.set_skill_active(&"missing".into(), true));
    }
}
