use std::io::BufRead;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::{debug, info, warn};

use goldfield_app::console::{self, ConsoleCommand};
use goldfield_app::game_loop;
use goldfield_app::state::AppState;
use goldfield_app::telemetry;
use goldfield_core::commands::PlayerCommand;
use goldfield_core::constants::{DEFAULT_SEED, TICK_RATE};
use goldfield_core::enums::Ruleset;
use goldfield_core::rules::Rules;
use goldfield_core::state::GameStateSnapshot;
use goldfield_sim::{SimConfig, SimulationEngine};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum RulesetArg {
    Classic,
    Outpost,
}

impl From<RulesetArg> for Ruleset {
    fn from(arg: RulesetArg) -> Self {
        match arg {
            RulesetArg::Classic => Ruleset::Classic,
            RulesetArg::Outpost => Ruleset::Outpost,
        }
    }
}

#[derive(Debug, Parser)]
#[command(author, version, about = "GOLDFIELD grid strategy runner")]
struct Cli {
    /// TOML rules file (preset plus overrides)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Rules preset, used when no rules file is given
    #[arg(long, value_enum, default_value = "classic")]
    ruleset: RulesetArg,

    /// RNG seed for grid generation and enemy spawns
    #[arg(long, default_value_t = DEFAULT_SEED)]
    seed: u64,

    /// Ticks to simulate in headless mode
    #[arg(long, default_value_t = 10 * TICK_RATE as u64)]
    ticks: u64,

    /// Cell to click before the first tick, as x,y (repeatable)
    #[arg(long = "click", value_name = "X,Y", value_parser = parse_click)]
    clicks: Vec<(i32, i32)>,

    /// Run in real time and read commands from stdin
    #[arg(long)]
    realtime: bool,

    /// Print the final snapshot as JSON on stdout
    #[arg(long)]
    snapshot: bool,

    /// Log filter directives (overrides RUST_LOG)
    #[arg(long)]
    log_filter: Option<String>,
}

fn parse_click(s: &str) -> Result<(i32, i32), String> {
    console::parse_cell(s).map_err(|e| e.to_string())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    telemetry::init(cli.log_filter.as_deref())?;

    let rules = match &cli.config {
        Some(path) => Rules::load(path)
            .with_context(|| format!("loading rules from {}", path.display()))?,
        None => Rules::for_ruleset(cli.ruleset.into()),
    };
    rules.validate()?;
    info!(ruleset = ?rules.ruleset, seed = cli.seed, "starting GOLDFIELD");

    let config = SimConfig {
        seed: cli.seed,
        rules,
    };
    let clicks: Vec<PlayerCommand> = cli
        .clicks
        .iter()
        .map(|&(x, y)| PlayerCommand::Click { x, y })
        .collect();

    let final_snapshot = if cli.realtime {
        run_realtime(config, clicks)?
    } else {
        Some(run_headless(config, clicks, cli.ticks))
    };

    if cli.snapshot {
        if let Some(snapshot) = final_snapshot {
            println!("{}", serde_json::to_string_pretty(&snapshot)?);
        }
    }
    Ok(())
}

/// Simulate `ticks` ticks. With zero ticks nothing runs, queued clicks
/// included, and the initial state is returned.
fn run_headless(config: SimConfig, clicks: Vec<PlayerCommand>, ticks: u64) -> GameStateSnapshot {
    let mut engine = SimulationEngine::new(config);
    engine.queue_commands(clicks);

    let mut last = None;
    for _ in 0..ticks {
        last = Some(engine.tick());
    }
    let snapshot = last.unwrap_or_else(|| engine.snapshot());
    summarize(&snapshot);
    snapshot
}

fn run_realtime(
    config: SimConfig,
    clicks: Vec<PlayerCommand>,
) -> Result<Option<GameStateSnapshot>> {
    let state = AppState::new();
    let (tx, handle) =
        game_loop::spawn_game_loop(config, clicks, Arc::clone(&state.latest_snapshot))
            .context("spawning game loop thread")?;
    state.attach(tx);
    info!("type 'quit' to stop");

    let stdin = std::io::stdin();
    for line in stdin.lock().lines() {
        let line = line.context("reading stdin")?;
        match console::parse_line(&line) {
            Ok(None) => {}
            Ok(Some(ConsoleCommand::Loop(cmd))) => {
                debug!(?cmd, "console command");
                if !state.send(cmd) {
                    warn!("game loop is gone");
                    break;
                }
            }
            Ok(Some(ConsoleCommand::Status)) => {
                if !state.is_running() {
                    info!("game loop is not running");
                }
                match state.latest() {
                    Some(snapshot) => summarize(&snapshot),
                    None => info!("no tick yet"),
                }
            }
            Ok(Some(ConsoleCommand::Quit)) => break,
            Err(err) => warn!(%err, "bad command"),
        }
    }

    state.shutdown();
    if handle.join().is_err() {
        warn!("game loop thread panicked");
    }
    Ok(state.latest())
}

fn summarize(snapshot: &GameStateSnapshot) {
    info!(
        tick = snapshot.time.tick,
        phase = ?snapshot.phase,
        units = snapshot.units.len(),
        enemies = snapshot.enemies.len(),
        "{}",
        snapshot.player.gold_label
    );
}
