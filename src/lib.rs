//! # planet-sandbox
//!
//! A text-driven colony management simulation. The player steers a single
//! colony across discrete turns, choosing one of five fixed actions per turn,
//! until the colonist target is reached (victory) or the turn limit or funds
//! run out (defeat).
//!
//! ## Design Principles
//!
//! 1. **Core returns data, never prints**: the engine produces strings and
//!    events; all console I/O lives in the `cli` driver layer.
//!
//! 2. **Closed action set**: the five actions are an enum, not looked up by
//!    name at runtime. Dispatch is exhaustively matched at compile time.
//!
//! 3. **Deterministic by seed**: the storm hazard die is injectable via the
//!    `Dice` trait. The default `GameRng` (ChaCha8) reproduces a session
//!    exactly from its seed.
//!
//! ## Modules
//!
//! - `core`: colony state, the action enum, RNG
//! - `rules`: the turn engine (action effects, storm hazard, outcome)
//! - `modes`: scenario configuration, career campaign, sandbox
//! - `cli`: interactive driver (the only module that touches stdin/stdout)

pub mod core;
pub mod rules;
pub mod modes;
pub mod cli;

// Re-export commonly used types
pub use crate::core::{
    Action, UnknownAction,
    ColonyState,
    Dice, GameRng, GameRngState, ScriptedDice,
};

pub use crate::rules::{GameEngine, Outcome, StormEvent, TurnReport};

pub use crate::modes::{Campaign, CampaignLevel, SandboxScenario, ScenarioConfig};
