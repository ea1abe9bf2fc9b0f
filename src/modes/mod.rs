//! Play modes: scenario configuration, the career campaign, and the sandbox.
//!
//! Everything here is content and construction - the levels are data, not
//! logic. A [`ScenarioConfig`] is consumed once to build the initial
//! [`crate::core::ColonyState`] for a session.

pub mod campaign;
pub mod config;

pub use campaign::{Campaign, CampaignLevel};
pub use config::{SandboxScenario, ScenarioConfig};
