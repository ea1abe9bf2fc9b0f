//! Scenario configuration: the immutable blueprint for a colony.

use serde::{Deserialize, Serialize};

use crate::core::state::{ColonyState, STARTING_MORALE};

/// Resources and limits for a scenario.
///
/// Constructed once (from the campaign table or from user input), consumed
/// once by [`ScenarioConfig::to_state`], then discarded. Range validation of
/// user-supplied values is the caller's responsibility.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioConfig {
    /// Colony name.
    pub name: String,
    /// Credits at turn 1.
    pub starting_funds: i64,
    /// Minerals at turn 1.
    pub starting_minerals: i64,
    /// Research points at turn 1.
    pub starting_research: i64,
    /// Colonists required for victory.
    pub colonist_target: i64,
    /// Turn limit.
    pub max_turns: u32,
    /// Scenario description.
    pub description: String,
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            name: String::new(),
            starting_funds: 30,
            starting_minerals: 5,
            starting_research: 0,
            colonist_target: 10,
            max_turns: 20,
            description: String::new(),
        }
    }
}

impl ScenarioConfig {
    /// Build the initial state for this scenario.
    ///
    /// Deterministic and pure: colonists always start at 0, the turn counter
    /// at 1, morale at its default and storm risk at 0; everything else is
    /// copied verbatim.
    #[must_use]
    pub fn to_state(&self) -> ColonyState {
        ColonyState {
            name: self.name.clone(),
            funds: self.starting_funds,
            minerals: self.starting_minerals,
            research: self.starting_research,
            colonists: 0,
            colonist_target: self.colonist_target,
            max_turns: self.max_turns,
            description: self.description.clone(),
            turn: 1,
            morale: STARTING_MORALE,
            storm_risk: 0,
        }
    }
}

/// A user-tailored scenario.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SandboxScenario {
    /// The configuration the user assembled.
    pub config: ScenarioConfig,
}

impl SandboxScenario {
    /// Assemble a sandbox scenario from externally validated parameters.
    #[must_use]
    pub fn from_user_input(
        name: impl Into<String>,
        colonist_target: i64,
        starting_funds: i64,
        starting_minerals: i64,
        starting_research: i64,
        max_turns: u32,
        description: impl Into<String>,
    ) -> Self {
        Self {
            config: ScenarioConfig {
                name: name.into(),
                starting_funds,
                starting_minerals,
                starting_research,
                colonist_target,
                max_turns,
                description: description.into(),
            },
        }
    }
}
