//! Core types: colony state, the action set, RNG.
//!
//! These are the building blocks the turn engine operates on. Nothing in this
//! module performs I/O or holds a reference to the driver.

pub mod action;
pub mod rng;
pub mod state;

pub use action::{Action, UnknownAction};
pub use rng::{Dice, GameRng, GameRngState, ScriptedDice};
pub use state::ColonyState;
