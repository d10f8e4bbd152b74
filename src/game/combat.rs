//! Combat resolution.
//!
//! One attack round compares a single attack die against a single defense
//! die. Ties go to the defender.
//!
//! - Conquest: the defender changes hands and receives half the attacker's
//!   troops (rounded down); the attacker keeps the rest.
//! - Repel: the attacker loses one troop, but never drops below one.

use serde::Serialize;
use tracing::info;

use crate::game::{Dice, Territory};

/// Which side won a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    /// The attacker conquered the defender.
    Attacker,
    /// The defender held.
    Defender,
}

/// Result of one attack round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CombatOutcome {
    /// Face rolled by the attacker.
    pub attack_roll: u8,
    /// Face rolled by the defender.
    pub defense_roll: u8,
    /// Winning side.
    pub winner: Side,
    /// Troops that moved into the conquered territory (0 on repel).
    pub troops_moved: u32,
    /// Troops the attacker lost (0 on conquest).
    pub troops_lost: u32,
    /// Attacker after combat.
    pub attacker: Territory,
    /// Defender after combat.
    pub defender: Territory,
}

impl CombatOutcome {
    /// Whether the defender changed hands.
    #[must_use]
    pub const fn is_conquest(&self) -> bool {
        matches!(self.winner, Side::Attacker)
    }
}

/// Roll the attack die, then the defense die, and apply the result.
///
/// Callers are responsible for the attack preconditions; see
/// [`validate_attack`](crate::game::validate_attack).
pub fn resolve_attack<D: Dice + ?Sized>(
    attacker: &mut Territory,
    defender: &mut Territory,
    dice: &mut D,
) -> CombatOutcome {
    let attack_roll = dice.roll();
    let defense_roll = dice.roll();
    apply_rolls(attacker, defender, attack_roll, defense_roll)
}

/// Apply a pair of rolls to the two territories.
pub fn apply_rolls(
    attacker: &mut Territory,
    defender: &mut Territory,
    attack_roll: u8,
    defense_roll: u8,
) -> CombatOutcome {
    let (winner, troops_moved, troops_lost) = if attack_roll > defense_roll {
        let moved = attacker.troops / 2;
        defender.owner_color.clone_from(&attacker.owner_color);
        attacker.troops -= moved;
        defender.troops = moved;
        (Side::Attacker, moved, 0)
    } else {
        // A territory never drops to zero through a failed attack
        let before = attacker.troops;
        attacker.troops = before.saturating_sub(1).max(1);
        (Side::Defender, 0, before.saturating_sub(attacker.troops))
    };

    info!(
        attacker = %attacker.name,
        defender = %defender.name,
        attack_roll,
        defense_roll,
        ?winner,
        troops_moved,
        troops_lost,
        "attack resolved"
    );

    CombatOutcome {
        attack_roll,
        defense_roll,
        winner,
        troops_moved,
        troops_lost,
        attacker: attacker.clone(),
        defender: defender.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::LoadedDice;

    fn pair(attacker_troops: u32, defender_troops: u32) -> (Territory, Territory) {
        (
            Territory::new("Brazil", "Red", attacker_troops),
            Territory::new("Argentina", "Blue", defender_troops),
        )
    }

    #[test]
    fn test_conquest_moves_half() {
        let (mut a, mut d) = pair(5, 3);
        let outcome = apply_rolls(&mut a, &mut d, 6, 1);
        assert!(outcome.is_conquest());
        assert_eq!(outcome.troops_moved, 2);
        assert_eq!(outcome.troops_lost, 0);
        assert_eq!(a.troops, 3);
        assert_eq!(d.troops, 2);
        assert_eq!(d.owner_color, "Red");
        assert_eq!(outcome.defender, d);
    }

    #[test]
    fn test_conquest_with_even_troops() {
        let (mut a, mut d) = pair(8, 1);
        apply_rolls(&mut a, &mut d, 4, 3);
        assert_eq!((a.troops, d.troops), (4, 4));
    }

    #[test]
    fn test_repel_costs_one_troop() {
        let (mut a, mut d) = pair(5, 3);
        let outcome = apply_rolls(&mut a, &mut d, 1, 6);
        assert_eq!(outcome.winner, Side::Defender);
        assert_eq!(outcome.troops_lost, 1);
        assert_eq!(a.troops, 4);
        assert_eq!(d, Territory::new("Argentina", "Blue", 3));
    }

    #[test]
    fn test_tie_goes_to_defender() {
        for face in 1..=6 {
            let (mut a, mut d) = pair(5, 3);
            let outcome = apply_rolls(&mut a, &mut d, face, face);
            assert_eq!(outcome.winner, Side::Defender, "tie on {face}");
            assert_eq!(d.owner_color, "Blue");
        }
    }

    #[test]
    fn test_repel_floor_is_one() {
        let (mut a, mut d) = pair(1, 3);
        let outcome = apply_rolls(&mut a, &mut d, 2, 5);
        assert_eq!(a.troops, 1);
        assert_eq!(outcome.troops_lost, 0);
    }

    #[test]
    fn test_resolve_attack_rolls_attacker_first() {
        let (mut a, mut d) = pair(5, 3);
        let mut dice = LoadedDice::new([6, 1]);
        let outcome = resolve_attack(&mut a, &mut d, &mut dice);
        assert_eq!((outcome.attack_roll, outcome.defense_roll), (6, 1));
        assert_eq!(dice.rolls(), 2);
        assert!(outcome.is_conquest());
    }

    #[test]
    fn test_outcome_serializes_winner_lowercase() {
        let (mut a, mut d) = pair(5, 3);
        let outcome = apply_rolls(&mut a, &mut d, 3, 3);
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["winner"], "defender");
        assert_eq!(json["attacker"]["troops"], 4);
    }
}
