//! Sandbox mode: one session on a user-tailored scenario.

use std::io::{self, BufRead, Write};

use crate::cli::session::run_session;
use crate::core::rng::GameRng;
use crate::modes::config::SandboxScenario;
use crate::rules::engine::GameEngine;

/// Run a single sandbox session.
pub fn run_sandbox<R, W>(
    scenario: &SandboxScenario,
    seed: u64,
    input: &mut R,
    out: &mut W,
) -> io::Result<()>
where
    R: BufRead,
    W: Write,
{
    let mut engine = GameEngine::new(scenario.config.to_state(), GameRng::new(seed));
    let _ = run_session(&mut engine, input, out)?;
    Ok(())
}
