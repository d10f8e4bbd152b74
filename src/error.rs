//! Error types for the territory registry and attack orchestration.

use std::fmt;

/// Registration was refused; the registry is left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistrationError {
    /// Every slot is taken.
    Full {
        /// The registry's fixed capacity.
        capacity: usize,
    },
    /// Troop count below 1 or above `u32::MAX`.
    InvalidTroops(i64),
}

impl fmt::Display for RegistrationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegistrationError::Full { capacity } => {
                write!(f, "maximum number of territories ({capacity}) reached")
            }
            RegistrationError::InvalidTroops(troops) => {
                write!(
                    f,
                    "invalid troop count {troops}: must be between 1 and {}",
                    u32::MAX
                )
            }
        }
    }
}

impl std::error::Error for RegistrationError {}

/// A registry index did not name a registered territory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupError {
    /// Index outside `[0, len)`.
    OutOfRange {
        /// The requested index.
        index: usize,
        /// Number of registered territories.
        len: usize,
    },
    /// Both indices of a pair name the same territory.
    SameIndex {
        /// The repeated index.
        index: usize,
    },
}

impl fmt::Display for LookupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LookupError::OutOfRange { index, len } => {
                write!(f, "territory index {index} out of range (registered: {len})")
            }
            LookupError::SameIndex { index } => {
                write!(f, "territory index {index} requested twice")
            }
        }
    }
}

impl std::error::Error for LookupError {}

/// Reasons an attack is refused before any die is rolled.
///
/// Variants are listed in the order the checks run; the first failing
/// check wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttackError {
    /// Fewer than two territories exist.
    NotEnoughTerritories {
        /// Number of registered territories.
        registered: usize,
    },
    /// An index does not name a registered territory.
    InvalidId {
        /// The offending index (0-based).
        index: usize,
        /// Number of registered territories.
        registered: usize,
    },
    /// Attacker and defender are the same territory.
    SelfAttack,
    /// Both territories belong to the same army.
    SameColor {
        /// The shared owner color.
        color: String,
    },
    /// The attacker cannot leave an occupying troop behind.
    InsufficientTroops {
        /// The attacker's current troops.
        troops: u32,
    },
}

impl fmt::Display for AttackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttackError::NotEnoughTerritories { registered } => write!(
                f,
                "not enough territories to attack (need 2, have {registered})"
            ),
            AttackError::InvalidId { index, registered } => write!(
                f,
                "invalid territory id {} (valid ids: 1-{registered})",
                index.saturating_add(1)
            ),
            AttackError::SelfAttack => write!(f, "a territory cannot attack itself"),
            AttackError::SameColor { color } => {
                write!(f, "cannot attack an allied territory (both are {color})")
            }
            AttackError::InsufficientTroops { troops } => write!(
                f,
                "insufficient troops to attack: need at least 2, have {troops}"
            ),
        }
    }
}

impl std::error::Error for AttackError {}

impl From<LookupError> for AttackError {
    fn from(e: LookupError) -> Self {
        match e {
            LookupError::OutOfRange { index, len } => AttackError::InvalidId {
                index,
                registered: len,
            },
            LookupError::SameIndex { .. } => AttackError::SelfAttack,
        }
    }
}

/// Storage for the registry could not be obtained.
///
/// This is the only fatal error: the session cannot start without it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AllocationError {
    /// The capacity that was requested.
    pub requested: usize,
}

impl fmt::Display for AllocationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "failed to allocate storage for {} territories",
            self.requested
        )
    }
}

impl std::error::Error for AllocationError {}
