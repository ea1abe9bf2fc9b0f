//! Career mode: play the campaign levels in order.

use std::io::{self, BufRead, Write};

use crate::cli::session::run_session;
use crate::core::rng::GameRng;
use crate::modes::campaign::Campaign;
use crate::rules::engine::GameEngine;

/// Run the campaign until a level is lost or every level is won.
///
/// Each level gets its own engine seeded from `seed` plus the level index, so
/// a whole career run is reproducible from one seed.
pub fn run_career<R, W>(
    campaign: &Campaign,
    seed: u64,
    input: &mut R,
    out: &mut W,
) -> io::Result<()>
where
    R: BufRead,
    W: Write,
{
    for (index, level) in campaign.levels().enumerate() {
        writeln!(out, "\n{}", "#".repeat(72))?;
        writeln!(out, "Karriere-Level {}: {}", index + 1, level.title)?;
        writeln!(out, "{}", level.briefing)?;
        if let Some(advice) = &level.advice {
            writeln!(out, "Tipp: {advice}")?;
        }

        let rng = GameRng::new(seed.wrapping_add(index as u64));
        let mut engine = GameEngine::new(level.config.to_state(), rng);
        // A quit leaves the level short of victory and ends the career below.
        let _ = run_session(&mut engine, input, out)?;

        if !engine.state().is_victory() {
            writeln!(out, "Karriere-Modus endet hier. Versuche es erneut!")?;
            return Ok(());
        }
        if let Some(hook) = level.on_complete {
            hook(engine.state());
        }
    }

    writeln!(
        out,
        "\nGlückwunsch! Du hast alle Missionen des Karriere-Modus abgeschlossen."
    )?;
    Ok(())
}
