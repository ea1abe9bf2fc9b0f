//! The closed set of colony actions.
//!
//! The five actions are a plain enum rather than names resolved at runtime:
//! the engine matches on the variant, so adding an action without handling it
//! is a compile error. Parsing is the only place a free-form string enters,
//! and it is trimmed and lowercased before lookup.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One of the five colony actions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    /// Extract minerals for credits.
    Mine,
    /// Invest credits into research points.
    Research,
    /// Spend minerals and research to settle new colonists.
    Settle,
    /// Trade for credits at the cost of morale and storm risk.
    Trade,
    /// Let a turn pass to regenerate morale.
    Rest,
}

impl Action {
    /// All actions in menu order. The order is fixed so the driver renders a
    /// deterministic menu.
    pub const ALL: [Action; 5] = [
        Action::Mine,
        Action::Research,
        Action::Settle,
        Action::Trade,
        Action::Rest,
    ];

    /// The identifier the player types.
    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Action::Mine => "mine",
            Action::Research => "research",
            Action::Settle => "settle",
            Action::Trade => "trade",
            Action::Rest => "rest",
        }
    }

    /// Menu description shown next to the identifier.
    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            Action::Mine => "Baue Mineralien ab und steigere Vorräte.",
            Action::Research => "Investiere in Forschung, um bessere Kolonien zu errichten.",
            Action::Settle => "Setze neue Kolonisten ein, kostet Mineralien und Forschung.",
            Action::Trade => "Führe Handel durch, um zusätzliche Mittel zu erhalten.",
            Action::Rest => "Lass eine Runde verstreichen, um Moral zu regenerieren.",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// The requested action id is not one of the five known actions.
///
/// The only operational error the engine raises. Always recoverable by
/// re-prompting; the state is untouched and the turn does not advance.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("Unbekannte Aktion: {0}")]
pub struct UnknownAction(pub String);

impl FromStr for Action {
    type Err = UnknownAction;

    /// Case-insensitive, whitespace-trimmed lookup.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        match normalized.as_str() {
            "mine" => Ok(Action::Mine),
            "research" => Ok(Action::Research),
            "settle" => Ok(Action::Settle),
            "trade" => Ok(Action::Trade),
            "rest" => Ok(Action::Rest),
            _ => Err(UnknownAction(normalized)),
        }
    }
}
