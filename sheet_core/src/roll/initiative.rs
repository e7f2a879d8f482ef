//! Initiative seeding from action points

use serde::{Deserialize, Serialize};

/// A combat participant awaiting turn order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Combatant {
    pub id: String,
    /// Action points from the owner's combat snapshot
    pub action_points: i32,
    /// Rolled or assigned initiative; empty until seeded
    pub initiative: Option<i32>,
}

impl Combatant {
    /// A combatant with no initiative yet
    pub fn new(id: impl Into<String>, action_points: i32) -> Self {
        Combatant {
            id: id.into(),
            action_points,
            initiative: None,
        }
    }
}

/// Fill missing initiative values from action points
///
/// Combatants that already have an initiative keep it.
pub fn seed_initiative(combatants: &mut [Combatant]) {
    for combatant in combatants {
        if combatant.initiative.is_none() {
            combatant.initiative = Some(combatant.action_points);
        }
    }
}

/// Turn order as indices, highest initiative first
///
/// Unseeded combatants sort last; ties keep their original order.
pub fn turn_order(combatants: &[Combatant]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..combatants.len()).collect();
    order.sort_by_key(|&i| std::cmp::Reverse(combatants[i].initiative));
    order
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_fills_only_missing_values() {
        let mut combatants = vec![
            Combatant::new("kazuma", 5),
            Combatant {
                id: "darkness".to_string(),
                action_points: 3,
                initiative: Some(9),
            },
        ];

        seed_initiative(&mut combatants);
        assert_eq!(combatants[0].initiative, Some(5));
        assert_eq!(combatants[1].initiative, Some(9));
    }

    #[test]
    fn test_turn_order_is_descending() {
        let mut combatants = vec![
            Combatant::new("aqua", 4),
            Combatant::new("megumin", 7),
            Combatant::new("chomusuke", 2),
        ];
        seed_initiative(&mut combatants);

        assert_eq!(turn_order(&combatants), vec![1, 0, 2]);
    }

    #[test]
    fn test_unseeded_combatants_sort_last() {
        let combatants = vec![
            Combatant::new("ghost", 10),
            Combatant {
                id: "wiz".to_string(),
                action_points: 1,
                initiative: Some(1),
            },
        ];

        assert_eq!(turn_order(&combatants), vec![1, 0]);
    }

    #[test]
    fn test_ties_keep_original_order() {
        let mut combatants = vec![Combatant::new("a", 5), Combatant::new("b", 5)];
        seed_initiative(&mut combatants);
        assert_eq!(turn_order(&combatants), vec![0, 1]);
    }
}
