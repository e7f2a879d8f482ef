//! Integration test: build a character -> learn skills -> equip gear ->
//! derive -> roll
//!
//! This walks the full flow a host adapter would drive, using the shipped
//! compendium configs where possible.

use rand::rngs::StdRng;
use rand::SeedableRng;
use sheet_core::prelude::*;
use sheet_core::roll::seed_initiative;
use sheet_core::roll::turn_order;
use sheet_core::types::ModifierKey;
use std::collections::HashMap;

fn build_megumin() -> CharacterSheet {
    let mut sheet = CharacterSheet::new("megumin", "Megumin", ActorKind::Player);
    sheet.abilities.strength = 6;
    sheet.abilities.dexterity = 9;
    sheet.abilities.agility = 9;
    sheet.abilities.intelligence = 15;
    sheet.abilities.perception = 9;
    sheet.abilities.mind = 12;
    sheet.apply_xp(30); // level 3

    let classes = default_classes();
    sheet.add_item(Item::Class(classes["archwizard"].clone()));

    let skills = default_skills();
    let mut explosion = skills["explosion_magic"].clone();
    explosion.active = true;
    explosion.level.value = 3;
    sheet.add_item(Item::Skill(explosion));

    sheet.add_item(Item::Gear(GearItem {
        id: "wizard_staff".into(),
        name: "Wizard's Staff".to_string(),
        equip_slot: ItemSlot::OneHand,
        modifiers: HashMap::from([
            (ModifierKey::MagicCheck, "1d6".to_string()),
            (ModifierKey::AttackPower, "CL".to_string()),
        ]),
    }));
    sheet
        .equip(&"wizard_staff".into(), EquipmentSlot::RightHand)
        .unwrap();

    sheet
}

#[test]
fn full_flow_derives_and_rolls() {
    let sheet = build_megumin();
    let derived = derive(&sheet);

    // Abilities: floor(value / 3) plus the archwizard class modifiers.
    assert_eq!(derived.abilities.intelligence.score, 8);
    assert_eq!(derived.abilities.mind.score, 5);
    assert_eq!(derived.abilities.strength.score, 2);

    // Checks seed from finalized scores, then skill and staff fold in.
    // Explosion Magic at SL 3, CL 3 adds 3 dice and 3 flat; the staff adds
    // one die more.
    let player = derived.combat.extension.player().unwrap();
    assert_eq!(player.magic_check, CheckValue { flat: 11, dice: 6 });

    // The staff's attack power scales with character level.
    assert_eq!(derived.combat.attack_power, CheckValue { flat: 3, dice: 2 });

    // Resource caps: archwizard progression at level 3, minus the mana the
    // skill reserves.
    assert_eq!(player.health, 18);
    assert_eq!(player.mana, 32);

    // Attributes read ability scores.
    assert_eq!(derived.combat.attributes.action_points, 6);
    assert_eq!(derived.combat.attributes.movement, 7);

    // Rolling the magic check produces 6d6 + 11.
    let mut rng = StdRng::seed_from_u64(42);
    let result = sheet_core::roll_check_with_rng(&player.magic_check, &mut rng);
    assert_eq!(result.rolls.len(), 6);
    assert_eq!(result.total, result.dice_total() + 11);
}

#[test]
fn derivation_is_stable_across_passes() {
    let sheet = build_megumin();
    assert_eq!(derive(&sheet), derive(&sheet));
}

#[test]
fn toggling_the_skill_off_removes_its_contribution() {
    let mut sheet = build_megumin();
    let with_skill = derive(&sheet);

    sheet.set_skill_active(&"explosion_magic".into(), false);
    let without_skill = derive(&sheet);

    let before = with_skill.combat.extension.player().unwrap();
    let after = without_skill.combat.extension.player().unwrap();

    // The staff die remains; the skill's 3 dice and flat CL are gone.
    assert_eq!(after.magic_check, CheckValue { flat: 8, dice: 3 });
    assert_eq!(after.mana, before.mana + 6);
}

#[test]
fn unequipping_the_staff_removes_its_contribution() {
    let mut sheet = build_megumin();
    sheet.unequip(EquipmentSlot::RightHand);

    let derived = derive(&sheet);
    let player = derived.combat.extension.player().unwrap();
    assert_eq!(player.magic_check, CheckValue { flat: 11, dice: 5 });
    assert_eq!(derived.combat.attack_power, CheckValue { flat: 0, dice: 2 });
}

#[test]
fn action_points_seed_combat_initiative() {
    let megumin = build_megumin();
    let derived = derive(&megumin);

    let mut combatants = vec![
        Combatant::new("megumin", derived.combat.attributes.action_points),
        Combatant::new("giant_toad", 4),
    ];
    seed_initiative(&mut combatants);

    assert_eq!(combatants[0].initiative, Some(6));
    // Megumin acts first.
    assert_eq!(turn_order(&combatants), vec![0, 1]);
}

#[test]
fn host_shaped_json_round_trips() {
    let sheet = build_megumin();
    let json = serde_json::to_string(&sheet).unwrap();
    let parsed: CharacterSheet = sheet_core::config::parse_json(&json).unwrap();

    assert_eq!(derive(&parsed), derive(&sheet));
}
