//! Example Game - A minimal scenario demonstrating sheet_core
//!
//! This demo shows:
//! - Building a party from the shipped compendium (classes + skills)
//! - Equipping gear and deriving a full sheet
//! - Rolling checks with a seeded RNG
//! - Seeding combat initiative from action points

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use sheet_core::prelude::*;
use sheet_core::roll::{seed_initiative, turn_order};
use sheet_core::types::ModifierKey;
use sheet_core::{roll_check_with_rng, SkillLevel};
use std::collections::HashMap;

fn build_archer() -> CharacterSheet {
    let mut sheet = CharacterSheet::new("iris", "Iris", ActorKind::Player);
    sheet.abilities.strength = 8;
    sheet.abilities.dexterity = 14;
    sheet.abilities.agility = 11;
    sheet.abilities.intelligence = 9;
    sheet.abilities.perception = 12;
    sheet.abilities.mind = 7;
    sheet.apply_xp(60); // level 4
    sheet.lifestyle = Some(Lifestyle::Economy);

    let classes = default_classes();
    sheet.add_item(Item::Class(classes["adventurer"].clone()));

    let skills = default_skills();
    for (id, level) in [("snipe", 3), ("deadeye", 2)] {
        let mut skill = skills[id].clone();
        skill.active = true;
        skill.level = SkillLevel { value: level, max: skill.level.max };
        sheet.add_item(Item::Skill(skill));
    }

    sheet.add_item(Item::Gear(GearItem {
        id: "longbow".into(),
        name: "Longbow".to_string(),
        equip_slot: ItemSlot::BothHands,
        modifiers: HashMap::from([(ModifierKey::AttackPower, "2d6+CL".to_string())]),
    }));
    sheet.add_item(Item::Gear(GearItem {
        id: "leather_armor".into(),
        name: "Leather Armor".to_string(),
        equip_slot: ItemSlot::Body,
        modifiers: HashMap::from([(ModifierKey::PhysicalDefense, "3".to_string())]),
    }));
    sheet.equip(&"longbow".into(), EquipmentSlot::RightHand).unwrap();
    sheet.equip(&"leather_armor".into(), EquipmentSlot::Body).unwrap();

    sheet
}

fn build_toad() -> CharacterSheet {
    let mut sheet = CharacterSheet::new("giant_toad", "Giant Toad", ActorKind::Npc);
    sheet.abilities.strength = 12;
    sheet.abilities.dexterity = 4;
    sheet.abilities.agility = 5;
    sheet.abilities.perception = 6;
    sheet.level = 2;
    sheet
}

fn print_check(name: &str, check: &CheckValue) {
    println!("  {name:<16} {}d6{:+}", check.dice, check.flat);
}

fn print_sheet(sheet: &CharacterSheet, derived: &DerivedSheet) {
    println!("=== {} (level {}) ===", sheet.name, sheet.level);

    for &ability in Ability::all() {
        let score = derived.abilities.get(ability);
        println!(
            "  {:<4} value {:>2}  score {:>2}  pool {}d6",
            ability.abbr(),
            score.value,
            score.score,
            score.dice
        );
    }

    println!("  --");
    print_check("Hit Check", &derived.combat.hit_check);
    print_check("Attack Power", &derived.combat.attack_power);
    print_check("Dodge Check", &derived.combat.dodge_check);

    if let Some(player) = derived.combat.extension.player() {
        print_check("Detect Traps", &player.detect_traps);
        print_check("Magic Check", &player.magic_check);
        println!("  HP {}  MP {}", player.health, player.mana);
    }

    let attributes = &derived.combat.attributes;
    println!(
        "  Phys Def {}  Magic Def {}  AP {}  Move {}",
        attributes.physical_defense,
        attributes.magic_defense,
        attributes.action_points,
        attributes.movement
    );
    println!();
}

fn main() {
    let mut rng = ChaCha8Rng::seed_from_u64(26);

    let archer = build_archer();
    let toad = build_toad();

    let archer_derived = derive(&archer);
    let toad_derived = derive(&toad);

    print_sheet(&archer, &archer_derived);
    print_sheet(&toad, &toad_derived);

    // Custom rolls from the skill compendium, resolved for display.
    for skill in archer.skills() {
        for roll in skill.resolved_rolls(archer.level) {
            println!("{} offers: {} ({})", skill.name, roll.name, roll.check);
        }
    }
    println!();

    // Roll the archer's hit check a few times.
    for _ in 0..3 {
        let result = roll_check_with_rng(&archer_derived.combat.hit_check, &mut rng);
        println!("Hit check: {result} (dice {:?})", result.rolls);
    }
    println!();

    // Initiative comes from action points.
    let mut combatants = vec![
        Combatant::new(
            archer.id.clone(),
            archer_derived.combat.attributes.action_points,
        ),
        Combatant::new(
            toad.id.clone(),
            toad_derived.combat.attributes.action_points,
        ),
    ];
    seed_initiative(&mut combatants);
    println!("Turn order:");
    for index in turn_order(&combatants) {
        let combatant = &combatants[index];
        println!(
            "  {} (initiative {})",
            combatant.id,
            combatant.initiative.unwrap_or(0)
        );
    }

    // The derived sheet is plain data; hosts can ship it as JSON.
    println!();
    println!(
        "Snapshot JSON: {}",
        serde_json::to_string(&archer_derived.combat).unwrap()
    );
}
