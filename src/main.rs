//! Planet Sandbox - command line entry point.

use std::io;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};

use planet_sandbox::cli::{run_career, run_sandbox};
use planet_sandbox::modes::{Campaign, SandboxScenario};

/// Play mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Mode {
    /// The scripted multi-level campaign.
    Career,
    /// A single scenario with user-chosen parameters.
    Sandbox,
}

/// Planet Sandbox Textabenteuer
#[derive(Parser, Debug)]
#[command(name = "planet-sandbox", version, about)]
struct Args {
    /// Wähle zwischen Karriere- oder Sandboxmodus.
    #[arg(long, value_enum, default_value = "career")]
    mode: Mode,

    /// Name für Sandbox-Szenario
    #[arg(long, default_value = "Benutzerdefiniertes Habitat")]
    name: String,

    /// Kolonistenziel im Sandboxmodus
    #[arg(long, default_value_t = 15)]
    target: i64,

    /// Startcredits im Sandboxmodus
    #[arg(long, default_value_t = 35)]
    funds: i64,

    /// Startmineralien im Sandboxmodus
    #[arg(long, default_value_t = 8)]
    minerals: i64,

    /// Startforschung im Sandboxmodus
    #[arg(long, default_value_t = 1)]
    research: i64,

    /// Maximale Rundenzahl im Sandboxmodus
    #[arg(long, default_value_t = 20)]
    turns: u32,

    /// Beschreibung des Sandbox-Szenarios.
    #[arg(
        long,
        default_value = "Eine freie Mission mit selbst festgelegten Parametern."
    )]
    description: String,

    /// Seed für die Sturmwürfel (Standard: zufällig)
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> ExitCode {
    let args = Args::parse();
    let seed = args.seed.unwrap_or_else(rand::random);

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let result = match args.mode {
        Mode::Career => run_career(&Campaign::standard(), seed, &mut input, &mut out),
        Mode::Sandbox => {
            let scenario = SandboxScenario::from_user_input(
                args.name,
                args.target,
                args.funds,
                args.minerals,
                args.research,
                args.turns,
                args.description,
            );
            run_sandbox(&scenario, seed, &mut input, &mut out)
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Fehler: {err}");
            ExitCode::FAILURE
        }
    }
}
