//! Fuzzy Boss - headless encounter runner
//!
//! Drives the boss controller against a scripted player that circles the
//! boss, closing in and backing off, and prints the decisions it makes.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use fuzzy_boss::boss::{standard_engine, BossController, BossEvent, Observation, RngSource};
use fuzzy_boss::core::error::Result;
use fuzzy_boss::core::types::{Tick, Vec3};
use fuzzy_boss::core::BossConfig;
use fuzzy_boss::fuzzy::load_rulebook;
use fuzzy_boss::simulation::FixedTickScheduler;

/// Headless boss encounter - prints attack and evasion decisions
#[derive(Parser, Debug)]
#[command(name = "fuzzy-boss")]
#[command(about = "Run the fuzzy boss against a scripted player")]
struct Args {
    /// Boss config TOML (defaults are used when omitted)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Rule book TOML (the built-in standard rule book when omitted)
    #[arg(long)]
    rulebook: Option<PathBuf>,

    /// Number of ticks to simulate
    #[arg(long, default_value_t = 3600)]
    ticks: u64,

    /// Random seed for deterministic runs
    #[arg(long)]
    seed: Option<u64>,

    /// Output format: json or text
    #[arg(long, default_value = "text")]
    format: String,

    /// Log every evaluation
    #[arg(long, short = 'v')]
    verbose: bool,
}

/// One output line
#[derive(Serialize)]
struct TickEvent {
    tick: Tick,
    #[serde(flatten)]
    event: BossEvent,
}

#[derive(Serialize, Default)]
struct Summary {
    ticks: Tick,
    seed: u64,
    attacks: u32,
    strikes_on_target: u32,
    avoidances: u32,
    final_health_ratio: f32,
}

/// Player damage dealt every `PLAYER_HIT_INTERVAL_SECS` while in range
const PLAYER_DAMAGE: u32 = 10;
const PLAYER_HIT_INTERVAL_SECS: f32 = 2.0;
const PLAYER_REACH: f32 = 3.0;
/// A strike lands when the player is within this distance of its target
const STRIKE_RADIUS: f32 = 1.5;
const FRAME_RATE: u32 = 30;

fn main() -> Result<()> {
    let args = Args::parse();

    let default_filter = if args.verbose {
        "fuzzy_boss=debug"
    } else {
        "fuzzy_boss=info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = match &args.config {
        Some(path) => BossConfig::load(path)?,
        None => BossConfig::default(),
    };
    let engine = match &args.rulebook {
        Some(path) => load_rulebook(path)?,
        None => standard_engine()?,
    };

    let seed = args.seed.unwrap_or_else(|| rand::random());
    let mut rng = RngSource::new(ChaCha8Rng::seed_from_u64(seed));
    tracing::info!("Fuzzy boss starting (seed {}, {} ticks)", seed, args.ticks);

    let mut scheduler = FixedTickScheduler::new(config.tick_rate);
    let hit_interval = scheduler.secs_to_ticks(PLAYER_HIT_INTERVAL_SECS).max(1);
    let tick_secs = scheduler.tick_duration().as_secs_f32();
    let mut boss = BossController::new(config, Arc::new(engine))?;

    let json = args.format == "json";
    let mut summary = Summary {
        seed,
        ..Default::default()
    };

    // Render frames arrive at their own pace; the boss only sees fixed ticks
    let frame = Duration::from_secs(1) / FRAME_RATE;
    let mut tick: Tick = 0;
    'frames: while tick < args.ticks {
        for _ in 0..scheduler.advance(frame) {
            tick += 1;
            let observation = scripted_observation(tick as f32 * tick_secs);

            for event in boss.tick(&observation, &mut rng)? {
                match event {
                    BossEvent::AttackStarted { .. } => summary.attacks += 1,
                    BossEvent::Strike { target, .. } => {
                        if target.distance(&observation.player) <= STRIKE_RADIUS {
                            summary.strikes_on_target += 1;
                        }
                    }
                    BossEvent::AvoidanceStarted { .. } => summary.avoidances += 1,
                    _ => {}
                }

                if json {
                    println!("{}", serde_json::to_string(&TickEvent { tick, event })?);
                } else {
                    println!("[{:>6}] {:?}", tick, event);
                }
            }

            let in_reach = observation.left_hand.distance(&observation.player) <= PLAYER_REACH
                || observation.right_hand.distance(&observation.player) <= PLAYER_REACH;
            if in_reach && tick % hit_interval == 0 {
                boss.take_damage(PLAYER_DAMAGE);
            }

            if boss.health().is_dead() {
                tracing::info!("Encounter over at tick {}", tick);
                break 'frames;
            }
            if tick >= args.ticks {
                break 'frames;
            }
        }
    }
    summary.ticks = tick;

    summary.final_health_ratio = boss.health().ratio();
    if json {
        println!("{}", serde_json::to_string(&summary)?);
    } else {
        println!();
        println!("=== SUMMARY ===");
        println!("Ticks:             {}", summary.ticks);
        println!("Attacks:           {}", summary.attacks);
        println!("Strikes on target: {}", summary.strikes_on_target);
        println!("Avoidances:        {}", summary.avoidances);
        println!("Final health:      {:.0}%", summary.final_health_ratio * 100.0);
    }

    Ok(())
}

/// Hands sway either side of the boss; the player spirals in and out
fn scripted_observation(t: f32) -> Observation {
    let sway = (t * 1.5).sin();
    let radius = 4.0 + 3.5 * (t * 0.3).sin();
    let angle = t * 0.5;

    Observation {
        left_hand: Vec3::new(-3.0, 0.0, sway),
        right_hand: Vec3::new(3.0, 0.0, -sway),
        player: Vec3::new(radius * angle.cos(), 0.0, radius * angle.sin()),
        player_aggression: (0.5 + 0.5 * (t * 0.2).sin()).clamp(0.0, 1.0),
    }
}
