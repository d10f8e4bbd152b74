//! Six-sided dice.
//!
//! Combat takes its randomness through the [`Dice`] trait so a session can
//! be seeded for replay, or fed fixed faces in tests.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Number of faces on a die.
pub const FACES: u8 = 6;

/// A source of six-sided die rolls.
pub trait Dice {
    /// Roll once, returning a face in `1..=6`.
    fn roll(&mut self) -> u8;
}

/// Uniform dice backed by any [`rand`] generator.
#[derive(Debug, Clone)]
pub struct RandomDice<R> {
    rng: R,
}

impl<R: Rng> RandomDice<R> {
    /// Wrap an existing generator.
    #[must_use]
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomDice<StdRng> {
    /// Reproducible dice: the same seed always yields the same rolls.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Dice seeded from operating system entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_os_rng())
    }
}

impl<R: Rng> Dice for RandomDice<R> {
    fn roll(&mut self) -> u8 {
        self.rng.random_range(1..=FACES)
    }
}

/// Dice that replay a fixed sequence of faces, wrapping around at the end.
///
/// Faces outside `1..=6` are clamped. An empty sequence always rolls 1.
#[derive(Debug, Clone)]
pub struct LoadedDice {
    faces: Vec<u8>,
    next: usize,
}

impl LoadedDice {
    /// Create dice that roll `faces` in order.
    #[must_use]
    pub fn new(faces: impl IntoIterator<Item = u8>) -> Self {
        Self {
            faces: faces.into_iter().map(|f| f.clamp(1, FACES)).collect(),
            next: 0,
        }
    }

    /// Number of rolls made so far.
    #[must_use]
    pub const fn rolls(&self) -> usize {
        self.next
    }
}

impl Dice for LoadedDice {
    fn roll(&mut self) -> u8 {
        let face = if self.faces.is_empty() {
            1
        } else {
            self.faces[self.next % self.faces.len()]
        };
        self.next += 1;
        face
    }
}
