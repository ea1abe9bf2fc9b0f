//! The interactive turn loop shared by both play modes.

use std::io::{self, BufRead, Write};

use crate::core::rng::Dice;
use crate::rules::engine::GameEngine;

/// How a session ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionEnd {
    /// The player quit (or input closed) before a terminal state.
    Quit,
    /// Victory or defeat was reached; the outcome message was printed.
    Terminal,
}

/// Run one session until victory, defeat, or quit.
///
/// Renders the state, offers the action menu, and forwards the chosen action
/// to the engine. `quit`/`exit` (or end of input) aborts the session; an
/// unknown action prints the error and re-prompts without touching the state.
pub fn run_session<D, R, W>(
    engine: &mut GameEngine<D>,
    input: &mut R,
    out: &mut W,
) -> io::Result<SessionEnd>
where
    D: Dice,
    R: BufRead,
    W: Write,
{
    writeln!(out, "{}", engine.render_state())?;

    while !(engine.state().is_victory() || engine.state().is_defeat()) {
        writeln!(out, "Wähle eine Aktion:")?;
        for (action, description) in engine.available_actions() {
            writeln!(out, " - {action}: {description}")?;
        }
        write!(out, "> ")?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            // Input closed: treat like an explicit quit.
            writeln!(out, "Mission beendet.")?;
            return Ok(SessionEnd::Quit);
        }

        let choice = line.trim().to_lowercase();
        if choice == "quit" || choice == "exit" {
            writeln!(out, "Mission beendet.")?;
            return Ok(SessionEnd::Quit);
        }

        match engine.perform_action(&choice) {
            Ok(report) => {
                if let Some(storm) = report.storm {
                    writeln!(out, "{storm}")?;
                }
                writeln!(out, "{}", report.message)?;
                writeln!(out, "{}", engine.render_state())?;
            }
            Err(err) => writeln!(out, "{err}")?,
        }
    }

    writeln!(out, "{}", engine.outcome())?;
    Ok(SessionEnd::Terminal)
}
