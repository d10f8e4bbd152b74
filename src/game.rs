//! Game layer.
//!
//! Implements the rules of a single-player territory war:
//! - Territories with an owner color and a troop count
//! - A fixed-capacity registry holding every territory
//! - Dice-based combat between two territories
//! - The precondition gate in front of combat

mod attack;
mod combat;
mod dice;
mod registry;
mod territory;

pub use attack::{attack, validate_attack};
pub use combat::{apply_rolls, resolve_attack, CombatOutcome, Side};
pub use dice::{Dice, LoadedDice, RandomDice, FACES};
pub use registry::{resolve_capacity, Registry, DEFAULT_CAPACITY};
pub use territory::{Territory, COLOR_MAX_CHARS, NAME_MAX_CHARS};
