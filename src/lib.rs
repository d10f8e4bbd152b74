// Allow unwrap in tests (test code is not production)
#![cfg_attr(test, allow(clippy::unwrap_used))]
//! War: a turn-based territory conquest game for the terminal.
//!
//! The player registers territories, each held by a colored army with a
//! number of troops, and then launches attacks between them. Every attack
//! is settled by one attack die against one defense die.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────┐
//! │   Console (menu loop, rendering)    │
//! ├─────────────────────────────────────┤
//! │   Attack gate  →  Combat resolver   │
//! ├─────────────────────────────────────┤
//! │   Territory registry   │   Dice     │
//! └─────────────────────────────────────┘
//! ```

pub mod config;
pub mod console;
pub mod error;
pub mod game;

pub use config::{OutputFormat, SessionConfig};
pub use error::{AllocationError, AttackError, LookupError, RegistrationError};

// Re-export key game types at crate root for convenience
pub use game::{
    CombatOutcome, Dice, LoadedDice, RandomDice, Registry, Side, Territory, attack,
    resolve_attack,
};
