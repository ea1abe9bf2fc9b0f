//! The career campaign: a fixed, ordered sequence of levels.

use crate::core::state::ColonyState;
use crate::modes::config::ScenarioConfig;

/// Callback invoked with the final state when a level is won.
pub type CompletionHook = fn(&ColonyState);

/// A single level in the career campaign.
#[derive(Clone, Debug)]
pub struct CampaignLevel {
    /// Level title shown in the career header.
    pub title: String,
    /// Scenario the level is played on.
    pub config: ScenarioConfig,
    /// Mission briefing. Never empty.
    pub briefing: String,
    /// Optional tip shown below the briefing.
    pub advice: Option<String>,
    /// Optional hook invoked with the final state on victory.
    pub on_complete: Option<CompletionHook>,
}

impl CampaignLevel {
    /// Create a level. Every level must brief the player.
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        config: ScenarioConfig,
        briefing: impl Into<String>,
    ) -> Self {
        let briefing = briefing.into();
        assert!(!briefing.is_empty(), "Career levels must provide a briefing");
        Self {
            title: title.into(),
            config,
            briefing,
            advice: None,
            on_complete: None,
        }
    }

    /// Attach an advice line.
    #[must_use]
    pub fn with_advice(mut self, advice: impl Into<String>) -> Self {
        self.advice = Some(advice.into());
        self
    }

    /// Attach a completion hook.
    #[must_use]
    pub fn with_completion_hook(mut self, hook: CompletionHook) -> Self {
        self.on_complete = Some(hook);
        self
    }
}

/// The ordered sequence of career levels.
#[derive(Clone, Debug, Default)]
pub struct Campaign {
    levels: Vec<CampaignLevel>,
}

impl Campaign {
    /// Create a campaign from an explicit level list.
    #[must_use]
    pub fn new(levels: Vec<CampaignLevel>) -> Self {
        Self { levels }
    }

    /// The fixed default campaign of increasing difficulty.
    #[must_use]
    pub fn standard() -> Self {
        Self::new(vec![
            CampaignLevel::new(
                "Orbital Outpost",
                ScenarioConfig {
                    name: "Orbitale Versorgungsstation".to_string(),
                    starting_funds: 35,
                    starting_minerals: 8,
                    starting_research: 1,
                    colonist_target: 12,
                    max_turns: 18,
                    description: "Baue eine Forschungsstation im Orbit und docke \
                                  Versorgungsschiffe an."
                        .to_string(),
                },
                "Errichte eine stabile Orbitalstation und empfange die ersten Kolonisten. \
                 Ein sanfter Einstieg in die Missionen des Planetensandkastens.",
            )
            .with_advice(
                "Priorisiere Forschung früh, damit du bessere Siedlungsstrukturen erhältst.",
            ),
            CampaignLevel::new(
                "Eisige Täler",
                ScenarioConfig {
                    name: "Glaziales Habitat".to_string(),
                    starting_funds: 40,
                    starting_minerals: 6,
                    starting_research: 2,
                    colonist_target: 18,
                    max_turns: 22,
                    description: "Ein lebensfeindlicher Mond mit reichlich Eisvorkommen."
                        .to_string(),
                },
                "Kolonisiere das polare Tal eines Mondes. Nutze Eisreserven, um Sauerstoff \
                 zu gewinnen.",
            )
            .with_advice(
                "Baue früh Förderanlagen, um genug Mineralien für Kuppeln zu sammeln.",
            ),
            CampaignLevel::new(
                "Sturmsaison",
                ScenarioConfig {
                    name: "Sturmtanz".to_string(),
                    starting_funds: 45,
                    starting_minerals: 10,
                    starting_research: 4,
                    colonist_target: 24,
                    max_turns: 24,
                    description: "Ein Planet mit häufigen Staubstürmen, die Infrastruktur \
                                  beschädigen können."
                        .to_string(),
                },
                "Widerstehe meterologen Extrembedingungen und führe die Kolonie durch \
                 einen Sturmzyklus.",
            )
            .with_advice(
                "Halte Reserven bereit, denn Stürme erhöhen die Unterhaltskosten.",
            ),
        ])
    }

    /// Iterate over the levels in play order.
    pub fn levels(&self) -> impl Iterator<Item = &CampaignLevel> {
        self.levels.iter()
    }

    /// Number of levels.
    #[must_use]
    pub fn len(&self) -> usize {
        self.levels.len()
    }

    /// Whether the campaign has no levels.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_campaign_has_three_levels() {
        let campaign = Campaign::standard();
        assert_eq!(campaign.len(), 3);
        assert!(!campaign.is_empty());

        let titles: Vec<_> = campaign.levels().map(|l| l.title.as_str()).collect();
        assert_eq!(titles, vec!["Orbital Outpost", "Eisige Täler", "Sturmsaison"]);
    }

    #[test]
    fn test_every_level_briefs_the_player() {
        for level in Campaign::standard().levels() {
            assert!(!level.briefing.is_empty());
            assert!(level.advice.is_some());
        }
    }

    #[test]
    fn test_first_level_scenario() {
        let campaign = Campaign::standard();
        let first = campaign.levels().next().unwrap();

        assert_eq!(first.config.name, "Orbitale Versorgungsstation");
        assert_eq!(first.config.starting_funds, 35);
        assert_eq!(first.config.starting_minerals, 8);
        assert_eq!(first.config.starting_research, 1);
        assert_eq!(first.config.colonist_target, 12);
        assert_eq!(first.config.max_turns, 18);
    }

    #[test]
    fn test_difficulty_increases() {
        let campaign = Campaign::standard();
        let targets: Vec<_> = campaign.levels().map(|l| l.config.colonist_target).collect();
        let mut sorted = targets.clone();
        sorted.sort_unstable();
        assert_eq!(targets, sorted);
    }

    #[test]
    #[should_panic(expected = "briefing")]
    fn test_empty_briefing_rejected() {
        let _ = CampaignLevel::new("Leer", ScenarioConfig::default(), "");
    }

    #[test]
    fn test_completion_hook_attached() {
        fn hook(_state: &ColonyState) {}

        let level = CampaignLevel::new("Test", ScenarioConfig::default(), "Briefing")
            .with_completion_hook(hook);
        assert!(level.on_complete.is_some());
    }
}
