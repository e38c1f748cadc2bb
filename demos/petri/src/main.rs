//! petri: headless runner for the slime mold simulation.
//!
//! Loads a JSON preset (or the built-in defaults), drops a scattered batch of
//! agents at the grid centre every few steps, and runs with the simulation
//! unpaused.  Per-step trail statistics can be written to CSV.
//!
//! ```text
//! RUST_LOG=info cargo run --release -p petri -- \
//!     --preset demos/petri/presets/network.json --steps 500 --stats stats.csv
//! ```

mod stats;


use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use slime_core::{SimulationConfig, Vec2};
use slime_sim::{CreateRequest, SimBuilder};

use stats::StatsObserver;

#[derive(Parser, Debug)]
#[command(name = "petri")]
#[command(about = "Run the slime mold simulation headless and report trail statistics")]
struct Cli {
    /// JSON preset to load; missing fields take their defaults.
    #[arg(long)]
    preset: Option<PathBuf>,

    /// Host steps to run.
    #[arg(long, default_value_t = 200)]
    steps: u64,

    /// Override the preset's RNG seed.
    #[arg(long)]
    seed: Option<u64>,

    /// Spawn a batch of agents every N steps (0 spawns once, before the first step).
    #[arg(long, default_value_t = 10)]
    spawn_every: u64,

    /// Write per-step statistics to this CSV file.
    #[arg(long)]
    stats: Option<PathBuf>,
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

fn load_config(cli: &Cli) -> Result<SimulationConfig> {
    let mut config = match &cli.preset {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("reading preset {}", path.display()))?;
            serde_json::from_str::<SimulationConfig>(&text)
                .with_context(|| format!("parsing preset {}", path.display()))?
        }
        None => SimulationConfig::default(),
    };
    if let Some(seed) = cli.seed {
        config.seed = seed;
    }
    config.clamp(None);
    Ok(config)
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let config = load_config(&cli)?;
    println!("=== petri: slime mold ===");
    println!(
        "Preset: {}  |  Grid: {}  |  Max agents: {}  |  Seed: {}",
        config.preset_name,
        config.shape(),
        config.max_agents,
        config.seed,
    );

    let mut sim = SimBuilder::new(config).running(true).build()?;
    let center = sim.config().shape().center();
    let gesture = CreateRequest::from_pointer(center, Vec2::ZERO);

    let mut observer = match &cli.stats {
        Some(path) => StatsObserver::to_path(path)?,
        None => StatsObserver::disabled(),
    };

    let t0 = Instant::now();
    for step in 0..cli.steps {
        let spawn_now = match cli.spawn_every {
            0 => step == 0,
            n => step % n == 0,
        };
        if spawn_now {
            let created = sim.create_agents(gesture)?;
            info!(step, created, total = sim.num_agents(), "spawned");
        }

        observer.begin_step(step);
        let report = sim.step(&mut observer)?;
        if step % 50 == 0 {
            if let Some(maps) = sim.maps() {
                info!(
                    step,
                    ticks = report.ticks,
                    agents = report.agents,
                    total = maps.total_intensity(),
                    max = maps.max_intensity(),
                    "progress"
                );
            }
        }
    }
    let elapsed = t0.elapsed();
    let rows = observer.rows();
    observer.finish()?;

    println!();
    println!("Ran {} steps ({} ticks) in {:.2?}", cli.steps, sim.current_tick().0, elapsed);
    println!("Agents: {}", sim.num_agents());
    if let Some(maps) = sim.maps() {
        println!("Trail intensity: total {:.1}, max {:.3}", maps.total_intensity(), maps.max_intensity());
    }
    if let Some(path) = &cli.stats {
        println!("Stats written to {} ({rows} rows)", path.display());
    }
    Ok(())
}
