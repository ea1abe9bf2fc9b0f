//! Colony state: the sole mutable entity of a session.
//!
//! ## Invariants
//!
//! - `turn` only increases, by exactly 1 per completed action.
//! - `morale` stays in `[0, MORALE_MAX]` after any mutation.
//! - `storm_risk` stays in `[0, STORM_RISK_MAX]` after any mutation.
//! - `minerals` never drops below 0: storm damage is clamped and spending is
//!   refused before mutation.
//! - `funds` has no floor; negative funds is the defeat trigger.

use serde::{Deserialize, Serialize};

/// Upper clamp for colony morale.
pub const MORALE_MAX: i64 = 10;

/// Upper clamp for accumulated storm risk.
pub const STORM_RISK_MAX: i64 = 3;

/// Morale every colony starts with.
pub const STARTING_MORALE: i64 = 5;

/// Current status of the player's colony.
///
/// Owned exclusively by the engine driving one session; there is no sharing
/// and no concurrent mutation. Derives `PartialEq` so tests can assert that a
/// rejected input left the state byte-for-byte unchanged.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColonyState {
    /// Colony name (display only).
    pub name: String,

    /// Credits. May go negative transiently; that ends the game.
    pub funds: i64,

    /// Mineral stockpile. Never negative.
    pub minerals: i64,

    /// Accumulated research points.
    pub research: i64,

    /// Settled colonists. Starts at 0.
    pub colonists: i64,

    /// Colonists required for victory. Fixed at creation.
    pub colonist_target: i64,

    /// Turn limit. Fixed at creation.
    pub max_turns: u32,

    /// Scenario description (display only).
    pub description: String,

    /// Current turn, starting at 1.
    pub turn: u32,

    /// Colony morale, clamped to `[0, MORALE_MAX]`.
    pub morale: i64,

    /// Accumulated storm hazard, clamped to `[0, STORM_RISK_MAX]`.
    pub storm_risk: i64,
}

impl ColonyState {
    /// Victory: the colonist target has been reached.
    #[must_use]
    pub fn is_victory(&self) -> bool {
        self.colonists >= self.colonist_target
    }

    /// Defeat: the turn limit was exceeded or funds went negative.
    #[must_use]
    pub fn is_defeat(&self) -> bool {
        self.turn > self.max_turns || self.funds < 0
    }

    /// Turns left before the limit, never negative.
    #[must_use]
    pub fn remaining_turns(&self) -> u32 {
        self.max_turns.saturating_add(1).saturating_sub(self.turn)
    }

    /// Raise morale by `amount`, clamped to `MORALE_MAX`.
    pub fn raise_morale(&mut self, amount: i64) {
        self.morale = (self.morale + amount).min(MORALE_MAX);
    }

    /// Lower morale by `amount`, clamped to 0.
    pub fn lower_morale(&mut self, amount: i64) {
        self.morale = (self.morale - amount).max(0);
    }

    /// Re-clamp morale into `[0, MORALE_MAX]`.
    pub fn clamp_morale(&mut self) {
        self.morale = self.morale.clamp(0, MORALE_MAX);
    }

    /// Raise storm risk by `amount`, clamped to `STORM_RISK_MAX`.
    pub fn raise_storm_risk(&mut self, amount: i64) {
        self.storm_risk = (self.storm_risk + amount).min(STORM_RISK_MAX);
    }

    /// Lower storm risk by `amount`, clamped to 0.
    pub fn lower_storm_risk(&mut self, amount: i64) {
        self.storm_risk = (self.storm_risk - amount).max(0);
    }
}
