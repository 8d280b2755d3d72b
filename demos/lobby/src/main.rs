//! lobby — command-line driver for the lift dispatch simulator.
//!
//! Runs a fleet against either a CSV event script or seeded synthetic
//! traffic, prints the fleet status at a fixed interval, and finishes with a
//! wait-time summary.
//!
//! ```text
//! lobby --floors 20 --cars 4 --ticks 500 --policy least-loaded
//! lobby --config building.json --script morning.csv --snapshot-every 10
//! RUST_LOG=lift_sim=debug lobby --ticks 50
//! ```

mod config;

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use lift_core::{LiftError, Tick};
use lift_policy::PolicyKind;
use lift_script::{Event, EventQueue, TrafficGenerator, load_script_csv};
use lift_sim::{DispatcherBuilder, FleetStatus, Sim, SimObserver, TickReport};

use config::LobbyConfig;

// ── Command line ──────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "lobby")]
#[command(about = "Multi-car lift dispatch simulator")]
struct Args {
    /// JSON file with building, policy, and run settings.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the number of floors.
    #[arg(long)]
    floors: Option<u32>,

    /// Override the number of cars.
    #[arg(long)]
    cars: Option<u32>,

    /// Dispatch policy: nearest, nearest-eligible, least-loaded.
    #[arg(short, long)]
    policy: Option<PolicyKind>,

    /// Ticks of traffic to generate, or the tick limit for a script run.
    #[arg(short, long)]
    ticks: Option<u64>,

    /// Seed for synthetic traffic.
    #[arg(long)]
    seed: Option<u64>,

    /// CSV event script (tick,action,floor,direction,car).  Replaces
    /// synthetic traffic.
    #[arg(short, long)]
    script: Option<PathBuf>,

    /// Print fleet status every N ticks (0 = never).
    #[arg(long, default_value_t = 0)]
    snapshot_every: u64,
}

// ── Observer ──────────────────────────────────────────────────────────────────

#[derive(Default)]
struct Summary {
    served:      u64,
    total_wait:  u64,
    longest:     u64,
    rejected:    u64,
}

impl SimObserver for Summary {
    fn on_rejected(&mut self, tick: Tick, event: &Event, error: &LiftError) {
        self.rejected += 1;
        warn!(%tick, %event, %error, "event rejected");
    }

    fn on_tick_end(&mut self, report: &TickReport) {
        for r in &report.resolved {
            let waited = r.waited();
            self.served += 1;
            self.total_wait += waited;
            self.longest = self.longest.max(waited);
        }
    }

    fn on_snapshot(&mut self, status: &FleetStatus) {
        print!("{status}");
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();

    // 1. Settings: file, then command-line overrides.
    let mut settings = match &args.config {
        Some(path) => LobbyConfig::load(path)?,
        None => LobbyConfig::default(),
    };
    settings.apply_overrides(args.floors, args.cars, args.policy, args.ticks, args.seed);
    let building = settings.building.clone();
    building.validate().context("invalid building configuration")?;

    println!("=== lobby — lift dispatch ===");
    println!(
        "Floors: {}  |  Cars: {}  |  Policy: {}  |  Out of service: {:?}",
        building.num_floors, building.num_cars, settings.policy, building.out_of_service
    );

    // 2. Event source.
    let script: EventQueue = match &args.script {
        Some(path) => load_script_csv(path)
            .with_context(|| format!("loading script {}", path.display()))?,
        None => TrafficGenerator::new(&building, settings.seed)
            .with_hall_rate(settings.hall_rate)
            .with_car_rate(settings.car_rate)
            .generate(settings.ticks),
    };
    println!("Events: {}", script.len());
    println!();

    // 3. Dispatcher and driver.
    let mut builder = DispatcherBuilder::new(building, settings.policy);
    if let Some(floors) = settings.initial_floors.clone() {
        builder = builder.initial_floors(floors);
    }
    let dispatcher = builder.build().context("building dispatcher")?;
    let mut sim = Sim::new(dispatcher, script).with_snapshot_interval(args.snapshot_every);

    let mut summary = Summary::default();

    // 4. Run: the requested ticks, then drain whatever is still outstanding.
    let t0 = Instant::now();
    sim.run_ticks(settings.ticks, &mut summary);
    let drained = sim.run_until_idle(settings.drain_limit, &mut summary);
    let elapsed = t0.elapsed();

    if !sim.dispatcher.is_quiescent() {
        warn!(outstanding = sim.dispatcher.ledger().len(), "calls still outstanding at the tick limit");
    }
    info!(drain_ticks = drained, "run complete");

    // 5. Summary.
    let clock = sim.dispatcher.clock();
    println!();
    print!("{}", sim.dispatcher.status());
    println!();
    println!("Simulated {clock} in {:.3} s wall time", elapsed.as_secs_f64());
    println!("  calls served   : {}", summary.served);
    println!("  events rejected: {}", summary.rejected);
    if summary.served > 0 {
        let mean = summary.total_wait as f64 / summary.served as f64;
        println!(
            "  mean wait      : {:.2} ticks ({:.1} s)",
            mean,
            mean * clock.tick_duration_secs as f64
        );
        println!(
            "  longest wait   : {} ticks ({} s)",
            summary.longest,
            clock.secs_for_ticks(summary.longest)
        );
    }

    Ok(())
}
