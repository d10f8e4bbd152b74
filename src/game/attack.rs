//! Attack orchestration: precondition checks followed by one combat round.

use tracing::debug;

use crate::error::AttackError;
use crate::game::{CombatOutcome, Dice, Registry, resolve_attack};

/// Check whether `attacker` may attack `defender`.
///
/// Checks run in this order and the first failure is returned:
/// 1. at least two territories are registered
/// 2. both indices are registered
/// 3. the indices differ
/// 4. the owners differ
/// 5. the attacker has at least two troops
///
/// # Errors
///
/// Returns the [`AttackError`] for the first failed check.
pub fn validate_attack(
    registry: &Registry,
    attacker: usize,
    defender: usize,
) -> Result<(), AttackError> {
    let registered = registry.len();
    if registered < 2 {
        return Err(AttackError::NotEnoughTerritories { registered });
    }

    let lookup = |index: usize| {
        registry
            .get(index)
            .ok_or(AttackError::InvalidId { index, registered })
    };
    let from = lookup(attacker)?;
    let to = lookup(defender)?;

    if attacker == defender {
        return Err(AttackError::SelfAttack);
    }
    if from.is_allied_with(to) {
        return Err(AttackError::SameColor {
            color: from.owner_color.clone(),
        });
    }
    if !from.can_attack() {
        return Err(AttackError::InsufficientTroops { troops: from.troops });
    }
    Ok(())
}

/// Validate and then resolve one attack round.
///
/// No die is rolled and nothing changes unless every check passes.
///
/// # Errors
///
/// Returns the [`AttackError`] from [`validate_attack`].
pub fn attack<D: Dice + ?Sized>(
    registry: &mut Registry,
    attacker: usize,
    defender: usize,
    dice: &mut D,
) -> Result<CombatOutcome, AttackError> {
    if let Err(e) = validate_attack(registry, attacker, defender) {
        debug!(attacker, defender, error = %e, "attack refused");
        return Err(e);
    }
    let (from, to) = registry.get_pair_mut(attacker, defender)?;
    Ok(resolve_attack(from, to, dice))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::LoadedDice;

    fn registry() -> Registry {
        let mut registry = Registry::allocate(5).unwrap();
        registry.register("Brazil", "Red", 5).unwrap();
        registry.register("Argentina", "Blue", 3).unwrap();
        registry.register("Chile", "Red", 1).unwrap();
        registry
    }

    #[test]
    fn test_not_enough_territories() {
        let mut registry = Registry::allocate(5).unwrap();
        registry.register("Brazil", "Red", 5).unwrap();
        assert_eq!(
            validate_attack(&registry, 0, 1),
            Err(AttackError::NotEnoughTerritories { registered: 1 })
        );
    }

    #[test]
    fn test_invalid_ids() {
        let registry = registry();
        assert_eq!(
            validate_attack(&registry, 3, 0),
            Err(AttackError::InvalidId {
                index: 3,
                registered: 3
            })
        );
        assert_eq!(
            validate_attack(&registry, 0, 7),
            Err(AttackError::InvalidId {
                index: 7,
                registered: 3
            })
        );
    }

    #[test]
    fn test_self_attack() {
        assert_eq!(validate_attack(&registry(), 1, 1), Err(AttackError::SelfAttack));
    }

    #[test]
    fn test_same_color() {
        assert_eq!(
            validate_attack(&registry(), 0, 2),
            Err(AttackError::SameColor {
                color: "Red".to_string()
            })
        );
    }

    #[test]
    fn test_insufficient_troops() {
        let mut registry = registry();
        registry.register("Peru", "Green", 1).unwrap();
        assert_eq!(
            validate_attack(&registry, 3, 1),
            Err(AttackError::InsufficientTroops { troops: 1 })
        );
    }

    #[test]
    fn test_same_color_checked_before_troops() {
        // Chile is Red with 1 troop; attacking Brazil (Red) fails on color first
        assert!(matches!(
            validate_attack(&registry(), 2, 0),
            Err(AttackError::SameColor { .. })
        ));
    }

    #[test]
    fn test_refused_attack_rolls_nothing() {
        let mut registry = registry();
        let before = registry.list().to_vec();
        let mut dice = LoadedDice::new([6, 1]);
        assert!(attack(&mut registry, 0, 2, &mut dice).is_err());
        assert_eq!(dice.rolls(), 0);
        assert_eq!(registry.list(), before.as_slice());
    }

    #[test]
    fn test_attack_applies_outcome_to_registry() {
        let mut registry = registry();
        let mut dice = LoadedDice::new([5, 2]);
        let outcome = attack(&mut registry, 0, 1, &mut dice).unwrap();
        assert!(outcome.is_conquest());
        assert_eq!(registry.list()[1].owner_color, "Red");
        assert_eq!(registry.list()[1].troops, 2);
        assert_eq!(registry.list()[0].troops, 3);
    }

    #[test]
    fn test_reverse_index_order() {
        let mut registry = registry();
        let mut dice = LoadedDice::new([6, 1]);
        let outcome = attack(&mut registry, 1, 0, &mut dice).unwrap();
        assert_eq!(outcome.attacker.name, "Argentina");
        assert_eq!(registry.list()[0].owner_color, "Blue");
        assert_eq!(registry.list()[0].troops, 1);
        assert_eq!(registry.list()[1].troops, 2);
    }
}
