//! The state and turn engine.
//!
//! `perform_action` is the only way a turn advances: it parses the player's
//! input into the closed [`Action`] set, applies exactly one effect procedure,
//! then runs the turn-advance procedure (turn counter, morale re-clamp, storm
//! hazard). Resource-insufficiency is not an error - a refused action still
//! consumes the turn and reports why, so stalling is never free. The single
//! operational error is [`UnknownAction`], which leaves the state untouched.
//!
//! The engine performs no I/O. It returns a [`TurnReport`] per turn and the
//! driver decides how to present it.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::action::{Action, UnknownAction};
use crate::core::rng::{Dice, GameRng};
use crate::core::state::ColonyState;

/// Credits spent per mining run.
const MINE_COST: i64 = 3;
/// Minerals gained per mining run.
const MINE_YIELD: i64 = 4;
/// Credits spent per research investment.
const RESEARCH_COST: i64 = 5;
/// Research points gained per investment.
const RESEARCH_YIELD: i64 = 2;
/// Minerals consumed when settling new colonists.
const SETTLE_MINERAL_COST: i64 = 5;
/// Research points consumed when settling new colonists.
const SETTLE_RESEARCH_COST: i64 = 2;
/// Credits consumed when settling new colonists.
const SETTLE_FUNDS_COST: i64 = 2;
/// Colonists arriving per settlement.
const SETTLERS_PER_MODULE: i64 = 3;
/// Credits gained per trade.
const TRADE_PROFIT: i64 = 6;

/// Faces of the storm trigger die.
const STORM_DIE: i64 = 6;
/// Faces of the storm penalty die.
const PENALTY_DIE: i64 = 4;

/// Storm damage resolved during a turn advance.
///
/// Reported separately from the action's own result message so the driver can
/// surface the hazard as its own notification.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StormEvent {
    /// Amount subtracted from funds and (floored) minerals.
    pub penalty: i64,
}

impl fmt::Display for StormEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("⚠️ Ein Sturm hat Teile deiner Infrastruktur beschädigt!")
    }
}

/// Everything that happened during one accepted action.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnReport {
    /// The action that was performed (or refused).
    pub action: Action,
    /// Human-readable result of the action itself.
    pub message: String,
    /// Storm damage resolved while advancing the turn, if any.
    pub storm: Option<StormEvent>,
}

/// Terminal evaluation of a session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// The colonist target was reached.
    Victory,
    /// The turn limit was exceeded or funds went negative.
    Defeat,
    /// The session ended before reaching a terminal state.
    Aborted,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            Outcome::Victory => "Mission erfüllt! Die Kolonie floriert.",
            Outcome::Defeat => "Mission gescheitert. Die Ressourcen sind erschöpft.",
            Outcome::Aborted => "Mission abgebrochen.",
        };
        f.write_str(message)
    }
}

/// Game logic for both career and sandbox sessions.
///
/// Generic over the die source so tests can script exact storm rolls; a
/// normal session uses the seeded [`GameRng`].
#[derive(Clone, Debug)]
pub struct GameEngine<D: Dice = GameRng> {
    state: ColonyState,
    dice: D,
}

impl GameEngine {
    /// Create an engine with the default seeded RNG.
    #[must_use]
    pub fn new(state: ColonyState, rng: GameRng) -> Self {
        Self { state, dice: rng }
    }
}

impl<D: Dice> GameEngine<D> {
    /// Create an engine with an explicit die source.
    #[must_use]
    pub fn with_dice(state: ColonyState, dice: D) -> Self {
        Self { state, dice }
    }

    /// The current colony state.
    #[must_use]
    pub fn state(&self) -> &ColonyState {
        &self.state
    }

    /// Consume the engine, yielding the final state.
    #[must_use]
    pub fn into_state(self) -> ColonyState {
        self.state
    }

    /// The fixed action menu, in rendering order.
    pub fn available_actions(&self) -> impl Iterator<Item = (Action, &'static str)> {
        Action::ALL.into_iter().map(|a| (a, a.description()))
    }

    /// Parse and perform one action, then advance the turn.
    ///
    /// The input is trimmed and lowercased before lookup. An unknown id
    /// returns [`UnknownAction`] without mutating anything; an action refused
    /// for lack of resources still advances the turn.
    pub fn perform_action(&mut self, input: &str) -> Result<TurnReport, UnknownAction> {
        let action = input.parse::<Action>()?;
        let message = self.apply(action);
        let storm = self.advance_turn();
        Ok(TurnReport {
            action,
            message,
            storm,
        })
    }

    /// Advance the turn counter and resolve the storm hazard.
    ///
    /// With `storm_risk > 0`, a d6 at or below the risk triggers damage: a d4
    /// penalty hits funds (unfloored) and minerals (floored at 0) and costs 1
    /// morale. Whether or not the storm hit, the risk decays by 1.
    pub fn advance_turn(&mut self) -> Option<StormEvent> {
        self.state.turn += 1;
        self.state.clamp_morale();

        let mut storm = None;
        if self.state.storm_risk > 0 {
            if self.dice.roll(STORM_DIE) <= self.state.storm_risk {
                let penalty = self.dice.roll(PENALTY_DIE);
                self.state.funds -= penalty;
                self.state.minerals = (self.state.minerals - penalty).max(0);
                self.state.lower_morale(1);
                storm = Some(StormEvent { penalty });
            }
            self.state.lower_storm_risk(1);
        }
        storm
    }

    /// Pure rendering of the current state block for the driver to print.
    #[must_use]
    pub fn render_state(&self) -> String {
        let state = &self.state;
        let description = if state.description.is_empty() {
            "Keine"
        } else {
            &state.description
        };
        format!(
            "\n=== {} | Runde {} ===\n\
             Beschreibung: {}\n\
             Ziel: {}/{} Kolonisten\n\
             Credits: {} | Mineralien: {} | Forschung: {} | Moral: {}\n\
             Sturmgefahr: {}/3 | Verbleibende Runden: {}\n",
            state.name,
            state.turn,
            description,
            state.colonists,
            state.colonist_target,
            state.funds,
            state.minerals,
            state.research,
            state.morale,
            state.storm_risk,
            state.remaining_turns(),
        )
    }

    /// Terminal evaluation: victory beats defeat, anything else is an abort.
    #[must_use]
    pub fn outcome(&self) -> Outcome {
        if self.state.is_victory() {
            Outcome::Victory
        } else if self.state.is_defeat() {
            Outcome::Defeat
        } else {
            Outcome::Aborted
        }
    }

    // === Action effect procedures ===

    fn apply(&mut self, action: Action) -> String {
        match action {
            Action::Mine => self.apply_mine(),
            Action::Research => self.apply_research(),
            Action::Settle => self.apply_settle(),
            Action::Trade => self.apply_trade(),
            Action::Rest => self.apply_rest(),
        }
    }

    fn apply_mine(&mut self) -> String {
        if self.state.funds < MINE_COST {
            return "Nicht genug Credits für den Bergbau.".to_string();
        }
        self.state.funds -= MINE_COST;
        self.state.minerals += MINE_YIELD;
        self.state.raise_morale(1);
        format!("Bergbau erfolgreich! +{MINE_YIELD} Mineralien.")
    }

    fn apply_research(&mut self) -> String {
        if self.state.funds < RESEARCH_COST {
            return "Dir fehlen Credits für Forschung.".to_string();
        }
        self.state.funds -= RESEARCH_COST;
        self.state.research += RESEARCH_YIELD;
        self.state.raise_morale(1);
        format!("Forschung abgeschlossen! +{RESEARCH_YIELD} Forschungspunkte.")
    }

    fn apply_settle(&mut self) -> String {
        // The minerals check reports first when both resources are short.
        if self.state.minerals < SETTLE_MINERAL_COST {
            return "Zu wenig Mineralien, um neue Module zu bauen.".to_string();
        }
        if self.state.research < SETTLE_RESEARCH_COST {
            return "Zu wenig Forschungspunkte für nachhaltige Kolonien.".to_string();
        }
        self.state.minerals -= SETTLE_MINERAL_COST;
        self.state.research -= SETTLE_RESEARCH_COST;
        self.state.colonists += SETTLERS_PER_MODULE;
        self.state.funds -= SETTLE_FUNDS_COST;
        self.state.raise_morale(2);
        format!("{SETTLERS_PER_MODULE} neue Kolonisten sind angekommen!")
    }

    fn apply_trade(&mut self) -> String {
        self.state.funds += TRADE_PROFIT;
        self.state.lower_morale(1);
        self.state.raise_storm_risk(1);
        "Handel abgeschlossen, aber erhöhte Sturmgefahr!".to_string()
    }

    fn apply_rest(&mut self) -> String {
        self.state.raise_morale(2);
        "Crew ruht sich aus. Moral steigt.".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::rng::ScriptedDice;
    use crate::core::state::STARTING_MORALE;

    fn state() -> ColonyState {
        ColonyState {
            name: "Testkolonie".to_string(),
            funds: 30,
            minerals: 5,
            research: 0,
            colonists: 0,
            colonist_target: 10,
            max_turns: 20,
            description: String::new(),
            turn: 1,
            morale: STARTING_MORALE,
            storm_risk: 0,
        }
    }

    fn engine(state: ColonyState) -> GameEngine<ScriptedDice> {
        // No scripted rolls: any storm roll would panic, proving that no die
        // is touched while storm_risk is 0.
        GameEngine::with_dice(state, ScriptedDice::default())
    }

    #[test]
    fn test_menu_is_ordered() {
        let engine = engine(state());
        let ids: Vec<_> = engine.available_actions().map(|(a, _)| a.id()).collect();
        assert_eq!(ids, vec!["mine", "research", "settle", "trade", "rest"]);
    }

    #[test]
    fn test_mine_success() {
        let mut engine = engine(state());
        let report = engine.perform_action("mine").unwrap();

        assert_eq!(report.action, Action::Mine);
        assert_eq!(report.message, "Bergbau erfolgreich! +4 Mineralien.");
        assert_eq!(report.storm, None);
        assert_eq!(engine.state().funds, 27);
        assert_eq!(engine.state().minerals, 9);
        assert_eq!(engine.state().morale, STARTING_MORALE + 1);
        assert_eq!(engine.state().turn, 2);
    }

    #[test]
    fn test_mine_refused_still_advances_turn() {
        let mut start = state();
        start.funds = 2;
        let mut engine = engine(start);

        let report = engine.perform_action("mine").unwrap();
        assert_eq!(report.message, "Nicht genug Credits für den Bergbau.");
        assert_eq!(engine.state().funds, 2);
        assert_eq!(engine.state().minerals, 5);
        assert_eq!(engine.state().morale, STARTING_MORALE);
        assert_eq!(engine.state().turn, 2);
    }

    #[test]
    fn test_research_success() {
        let mut engine = engine(state());
        let report = engine.perform_action("research").unwrap();

        assert_eq!(report.message, "Forschung abgeschlossen! +2 Forschungspunkte.");
        assert_eq!(engine.state().funds, 25);
        assert_eq!(engine.state().research, 2);
        assert_eq!(engine.state().morale, STARTING_MORALE + 1);
    }

    #[test]
    fn test_research_refused() {
        let mut start = state();
        start.funds = 4;
        let mut engine = engine(start);

        let report = engine.perform_action("research").unwrap();
        assert_eq!(report.message, "Dir fehlen Credits für Forschung.");
        assert_eq!(engine.state().funds, 4);
        assert_eq!(engine.state().research, 0);
        assert_eq!(engine.state().turn, 2);
    }

    #[test]
    fn test_settle_success() {
        let mut start = state();
        start.minerals = 6;
        start.research = 3;
        let mut engine = engine(start);

        let report = engine.perform_action("settle").unwrap();
        assert_eq!(report.message, "3 neue Kolonisten sind angekommen!");
        assert_eq!(engine.state().minerals, 1);
        assert_eq!(engine.state().research, 1);
        assert_eq!(engine.state().colonists, 3);
        assert_eq!(engine.state().funds, 28);
        assert_eq!(engine.state().morale, STARTING_MORALE + 2);
    }

    #[test]
    fn test_settle_refused_minerals_first() {
        // Both resources short: the minerals refusal wins.
        let mut start = state();
        start.minerals = 4;
        start.research = 0;
        let mut engine = engine(start);

        let report = engine.perform_action("settle").unwrap();
        assert_eq!(report.message, "Zu wenig Mineralien, um neue Module zu bauen.");
        assert_eq!(engine.state().colonists, 0);
        assert_eq!(engine.state().turn, 2);
    }

    #[test]
    fn test_settle_refused_research() {
        let mut start = state();
        start.minerals = 8;
        start.research = 1;
        let mut engine = engine(start);

        let report = engine.perform_action("settle").unwrap();
        assert_eq!(
            report.message,
            "Zu wenig Forschungspunkte für nachhaltige Kolonien."
        );
        assert_eq!(engine.state().minerals, 8);
        assert_eq!(engine.state().research, 1);
    }

    #[test]
    fn test_trade_raises_risk_and_lowers_morale() {
        let mut engine = GameEngine::with_dice(state(), ScriptedDice::new([6]));

        let report = engine.perform_action("trade").unwrap();
        assert_eq!(report.message, "Handel abgeschlossen, aber erhöhte Sturmgefahr!");
        assert_eq!(engine.state().funds, 36);
        assert_eq!(engine.state().morale, STARTING_MORALE - 1);
        // Raised to 1 by the trade, decayed back to 0 on the missed roll.
        assert_eq!(engine.state().storm_risk, 0);
        assert_eq!(report.storm, None);
    }

    #[test]
    fn test_trade_storm_risk_capped() {
        // A miss (d6 = 6) per turn; risk climbs by 1 and decays by 1, so
        // repeated trades pin it at 1 after each advance and it never
        // exceeds the cap mid-action.
        let mut engine =
            GameEngine::with_dice(state(), ScriptedDice::new([6, 6, 6, 6, 6]));
        for _ in 0..5 {
            engine.perform_action("trade").unwrap();
            assert!(engine.state().storm_risk <= 3);
        }
    }

    #[test]
    fn test_rest_caps_morale() {
        let mut start = state();
        start.morale = 9;
        let mut engine = engine(start);

        let report = engine.perform_action("rest").unwrap();
        assert_eq!(report.message, "Crew ruht sich aus. Moral steigt.");
        assert_eq!(engine.state().morale, 10);
    }

    #[test]
    fn test_case_insensitive_padded_input() {
        let mut engine1 = engine(state());
        let mut engine2 = engine(state());

        let r1 = engine1.perform_action("MINE ").unwrap();
        let r2 = engine2.perform_action("mine").unwrap();

        assert_eq!(r1, r2);
        assert_eq!(engine1.state(), engine2.state());
    }

    #[test]
    fn test_unknown_action_no_mutation_no_advance() {
        let mut engine = engine(state());
        let before = engine.state().clone();

        let err = engine.perform_action("dig").unwrap_err();
        assert_eq!(err, UnknownAction("dig".to_string()));
        assert_eq!(engine.state(), &before);
    }

    #[test]
    fn test_storm_hits() {
        let mut start = state();
        start.storm_risk = 2;
        start.minerals = 5;
        // d6 = 2 <= risk 2 triggers; penalty d4 = 3.
        let mut engine = GameEngine::with_dice(start, ScriptedDice::new([2, 3]));

        let report = engine.perform_action("rest").unwrap();
        assert_eq!(report.storm, Some(StormEvent { penalty: 3 }));
        assert_eq!(engine.state().funds, 27);
        assert_eq!(engine.state().minerals, 2);
        // Rest raised morale to 7, the storm takes 1 back.
        assert_eq!(engine.state().morale, 6);
        assert_eq!(engine.state().storm_risk, 1);
    }

    #[test]
    fn test_storm_misses_only_decays_risk() {
        let mut start = state();
        start.storm_risk = 2;
        // d6 = 5 > risk 2: no damage, no penalty die.
        let mut engine = GameEngine::with_dice(start, ScriptedDice::new([5]));

        let report = engine.perform_action("rest").unwrap();
        assert_eq!(report.storm, None);
        assert_eq!(engine.state().funds, 30);
        assert_eq!(engine.state().minerals, 5);
        assert_eq!(engine.state().storm_risk, 1);
    }

    #[test]
    fn test_storm_minerals_floored_funds_not() {
        let mut start = state();
        start.storm_risk = 3;
        start.funds = 1;
        start.minerals = 1;
        // d6 = 1 triggers; penalty d4 = 4.
        let mut engine = GameEngine::with_dice(start, ScriptedDice::new([1, 4]));

        engine.perform_action("rest").unwrap();
        assert_eq!(engine.state().funds, -3);
        assert_eq!(engine.state().minerals, 0);
        assert!(engine.state().is_defeat());
    }

    #[test]
    fn test_no_roll_without_risk() {
        // ScriptedDice with an empty script panics on any roll.
        let mut engine = engine(state());
        engine.perform_action("rest").unwrap();
        engine.perform_action("mine").unwrap();
    }

    #[test]
    fn test_outcome_transitions() {
        let mut start = state();
        start.colonist_target = 3;
        start.minerals = 5;
        start.research = 2;
        let mut engine = engine(start);
        assert_eq!(engine.outcome(), Outcome::Aborted);

        engine.perform_action("settle").unwrap();
        assert_eq!(engine.outcome(), Outcome::Victory);
    }

    #[test]
    fn test_defeat_outcome_on_turn_limit() {
        let mut start = state();
        start.max_turns = 1;
        let mut engine = engine(start);

        engine.perform_action("rest").unwrap();
        assert_eq!(engine.state().turn, 2);
        assert_eq!(engine.outcome(), Outcome::Defeat);
    }

    #[test]
    fn test_render_state_block() {
        let mut start = state();
        start.name = "Orbitale Versorgungsstation".to_string();
        start.description = "Station im Orbit.".to_string();
        let engine = engine(start);

        let rendered = engine.render_state();
        assert!(rendered.contains("=== Orbitale Versorgungsstation | Runde 1 ==="));
        assert!(rendered.contains("Beschreibung: Station im Orbit."));
        assert!(rendered.contains("Ziel: 0/10 Kolonisten"));
        assert!(rendered.contains("Credits: 30 | Mineralien: 5 | Forschung: 0 | Moral: 5"));
        assert!(rendered.contains("Sturmgefahr: 0/3 | Verbleibende Runden: 20"));
    }

    #[test]
    fn test_render_state_empty_description() {
        let engine = engine(state());
        assert!(engine.render_state().contains("Beschreibung: Keine"));
    }

    #[test]
    fn test_outcome_messages() {
        assert_eq!(
            Outcome::Victory.to_string(),
            "Mission erfüllt! Die Kolonie floriert."
        );
        assert_eq!(
            Outcome::Defeat.to_string(),
            "Mission gescheitert. Die Ressourcen sind erschöpft."
        );
        assert_eq!(Outcome::Aborted.to_string(), "Mission abgebrochen.");
    }

    #[test]
    fn test_turn_report_serialization() {
        let report = TurnReport {
            action: Action::Trade,
            message: "Handel abgeschlossen, aber erhöhte Sturmgefahr!".to_string(),
            storm: Some(StormEvent { penalty: 2 }),
        };

        let json = serde_json::to_string(&report).unwrap();
        let deserialized: TurnReport = serde_json::from_str(&json).unwrap();
        assert_eq!(report, deserialized);
    }
}
