use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;
use turn_sim::{
    GameLoop, JsonRenderer, OutputFormat, Renderer, Scenario, SimConfig, SpawnPolicy,
    TextRenderer, handle_error,
};

/// Turn-based simulation of a player against enemies and a boss
#[derive(Parser, Debug)]
#[command(name = "turn-sim")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Random seed (default: random)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Maximum turns (default: the scenario's budget)
    #[arg(short, long)]
    turns: Option<u32>,

    /// Scenario JSON file (default: built-in scenario)
    #[arg(long)]
    scenario: Option<PathBuf>,

    /// When summoned enemies first act
    #[arg(long, value_enum, default_value_t = SpawnPolicy::Deferred)]
    spawn_policy: SpawnPolicy,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Suppress turn-by-turn output
    #[arg(short, long)]
    quiet: bool,
}

/// `RUST_LOG`-style directives, falling back to warnings only when unset or invalid.
fn log_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new("warn"))
}

/// Load a scenario file, keeping the `SimError` as the root cause.
fn load_scenario(path: &Path) -> Result<Scenario> {
    Scenario::load(path)
        .map_err(|e| {
            let message = handle_error(&e);
            anyhow::Error::new(e).context(message)
        })
        .with_context(|| format!("Failed to load scenario {}", path.display()))
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(std::env::var(EnvFilter::DEFAULT_ENV).ok().as_deref()))
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let scenario = match &args.scenario {
        Some(path) => load_scenario(path)?,
        None => Scenario::default(),
    };

    let seed = args.seed.unwrap_or_else(rand::random);
    let turns = args.turns.unwrap_or(scenario.turns);
    let config = SimConfig::new(turns, seed).with_spawn_policy(args.spawn_policy);

    let mut game = GameLoop::from_scenario(scenario, config);
    let stdout = io::stdout().lock();
    let mut renderer: Box<dyn Renderer> = match args.format {
        OutputFormat::Text => Box::new(TextRenderer::new(stdout).quiet(args.quiet)),
        OutputFormat::Json => Box::new(JsonRenderer::new(stdout)),
    };

    if let Err(e) = game.run_with(renderer.as_mut()) {
        let message = handle_error(&e);
        return Err(e).context(message).context("Simulation failed");
    }
    Ok(())
}
