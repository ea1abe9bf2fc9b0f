//! The turn engine: action effects, the storm hazard, and outcomes.

pub mod engine;

pub use engine::{GameEngine, Outcome, StormEvent, TurnReport};
