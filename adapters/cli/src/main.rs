#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Command-line adapter that runs Elemental Defence waves headlessly.

mod demo;

use std::{fs, path::PathBuf, time::Duration};

use anyhow::{Context, Result};
use clap::Parser;
use elemental_defence_balance::Balance;
use elemental_defence_core::{GoldSource, PermanentBuffs};
use elemental_defence_system_analytics::{CombatStats, StatsReport};
use elemental_defence_world::{query, EngineConfig, EngineMode, GameEngine, PathMode};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use demo::{Placement, TowerPreset};

/// Headless Elemental Defence combat simulation.
#[derive(Parser, Debug)]
#[command(name = "elemental-defence")]
#[command(about = "Runs tower-defense waves against a demo path and prints combat stats")]
#[command(version)]
struct Args {
    /// Number of waves to run.
    #[arg(long, default_value_t = 5)]
    waves: u32,

    /// Stage the waves belong to.
    #[arg(long, default_value_t = 1)]
    stage: u32,

    /// Seed for every random roll.
    #[arg(long, default_value_t = 0x5eed)]
    seed: u64,

    /// Game-speed multiplier.
    #[arg(long, default_value_t = 1.0)]
    speed: f32,

    /// Simulated milliseconds per tick.
    #[arg(long, default_value_t = 50)]
    tick_ms: u64,

    /// TOML document overriding the default balance tables.
    #[arg(long, value_name = "FILE")]
    balance: Option<PathBuf>,

    /// Tower layout placed before the first wave.
    #[arg(long, value_enum, default_value_t = TowerPreset::Starter)]
    towers: TowerPreset,

    /// Leaked enemies re-enter the path instead of leaving.
    #[arg(long)]
    looping: bool,

    /// Tick limit per wave; unfinished waves are abandoned.
    #[arg(long, default_value_t = 20_000)]
    max_ticks: u32,

    /// Raise log verbosity (-v debug, -vv trace). `RUST_LOG` takes precedence.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let balance = load_balance(args.balance.as_ref())?;
    let path_mode = if args.looping {
        PathMode::Looping
    } else {
        PathMode::Once
    };
    let config = EngineConfig::new(Duration::from_millis(args.tick_ms.max(1)), args.seed)
        .with_game_speed(args.speed)
        .with_path_mode(path_mode);
    let mut engine = GameEngine::new(balance, config, vec![demo::demo_path()]);
    place_towers(&mut engine, args.towers)?;

    let mut stats = CombatStats::new();
    let buffs = PermanentBuffs::default();
    for wave in 1..=args.waves {
        let _ = engine
            .start_wave(wave, args.stage)
            .with_context(|| format!("could not start wave {wave}"))?;
        let mut ticks = 0;
        while engine.is_running() && ticks < args.max_ticks {
            let _ = engine.step(&buffs, &mut stats);
            ticks += 1;
        }
        if engine.is_running() {
            warn!(wave, ticks, "wave did not finish; abandoning it");
            engine.stop();
            engine.clear_battlefield();
        }
        info!(
            wave,
            ticks,
            lives = query::lives(&engine),
            gold = query::gold(&engine),
            "wave finished"
        );
        if query::mode(&engine) == EngineMode::GameOver {
            warn!(wave, "out of lives");
            break;
        }
    }

    print_summary(&stats.report(), &engine);
    Ok(())
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}

fn load_balance(path: Option<&PathBuf>) -> Result<Balance> {
    let Some(path) = path else {
        return Ok(Balance::default());
    };
    let source = fs::read_to_string(path)
        .with_context(|| format!("could not read balance file {}", path.display()))?;
    Balance::from_toml_str(&source)
        .with_context(|| format!("invalid balance file {}", path.display()))
}

fn place_towers(engine: &mut GameEngine, preset: TowerPreset) -> Result<()> {
    for placement in preset.placements() {
        match placement {
            Placement::Attack {
                element,
                tier,
                role,
                grid,
            } => {
                let _ = engine
                    .place_tower(element, tier, role, grid)
                    .with_context(|| format!("could not place {element:?} tower"))?;
            }
            Placement::Support { kind, tier, grid } => {
                let _ = engine
                    .place_support(kind, tier, grid)
                    .with_context(|| format!("could not place {kind:?} support"))?;
            }
        }
    }
    Ok(())
}

fn print_summary(report: &StatsReport, engine: &GameEngine) {
    println!("ticks            {}", report.ticks);
    println!("waves completed  {}", report.waves_completed);
    println!(
        "perfect waves    {} (streak {})",
        report.perfect_waves, report.perfect_streak
    );
    println!("lives left       {}", query::lives(engine));
    println!("lives lost       {}", report.lives_lost);
    println!("gold earned      {}", query::gold(engine));
    for source in [GoldSource::Attack, GoldSource::Burn] {
        let gold = report.gold.get(&source).copied().unwrap_or(0);
        println!("  from {:<10}  {gold}", format!("{source:?}"));
    }
    println!("kills            {}", report.total_kills);
    for (kind, count) in &report.kills {
        println!("  {:<14}  {count}", format!("{kind:?}"));
    }
    if !report.leaks.is_empty() {
        println!("leaks");
        for (kind, count) in &report.leaks {
            println!("  {:<14}  {count}", format!("{kind:?}"));
        }
    }
}
