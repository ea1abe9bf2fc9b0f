//! Deterministic dice for the storm hazard.
//!
//! The engine never calls a global RNG. It rolls through the [`Dice`] trait,
//! so a session is reproducible from a seed (`GameRng`) and tests can script
//! exact rolls (`ScriptedDice`).

use std::collections::VecDeque;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// A source of die rolls.
pub trait Dice {
    /// Roll a die with `sides` faces, returning a uniform integer in
    /// `1..=sides`.
    fn roll(&mut self, sides: i64) -> i64;
}

/// Deterministic seeded RNG backing the storm hazard.
///
/// Uses ChaCha8: fast, and its word position allows O(1) state capture no
/// matter how many rolls have been made, so a session can be checkpointed
/// and replayed.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create a new RNG with an entropy-derived seed.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// The seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Capture the current state for serialization.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Restore from a captured state.
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

impl Dice for GameRng {
    fn roll(&mut self, sides: i64) -> i64 {
        self.inner.gen_range(1..=sides)
    }
}

/// Serializable RNG state for checkpointing a session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    /// Original seed.
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter).
    pub word_pos: u128,
}

/// Dice that replay a fixed sequence of rolls.
///
/// Used by tests that need an exact storm scenario. Panics when the script
/// runs dry, which in a test is the failure you want.
#[derive(Clone, Debug, Default)]
pub struct ScriptedDice {
    rolls: VecDeque<i64>,
}

impl ScriptedDice {
    /// Create dice that will produce `rolls` in order.
    #[must_use]
    pub fn new(rolls: impl IntoIterator<Item = i64>) -> Self {
        Self {
            rolls: rolls.into_iter().collect(),
        }
    }

    /// Number of scripted rolls not yet consumed.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.rolls.len()
    }
}

impl Dice for ScriptedDice {
    fn roll(&mut self, sides: i64) -> i64 {
        let roll = self
            .rolls
            .pop_front()
            .expect("scripted dice ran out of rolls");
        assert!(
            (1..=sides).contains(&roll),
            "scripted roll {roll} outside 1..={sides}"
        );
        roll
    }
}
