//! simbroadcast — simulates many beacons broadcasting in one place.
//!
//! Answers the question: how many distinct beacons can a single passive
//! scanner register within a scan window, when overlapping broadcasts are
//! lost?
//!
//! # Example
//!
//! ```bash
//! # 50 beacons advertising once per second, scanned for 100 s
//! simbroadcast -n 50 -i 1.0 100
//!
//! # Reproducible run with a custom scan probability
//! simbroadcast -n 200 -i 0.1 --scan-prob 0.5 --seed 42 30
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use bsim_core::{BeaconId, DEFAULT_SCAN_PROB, SimConfig, SimTime};
use bsim_sim::{SimBuilder, SimObserver};

/// Beacon broadcast simulator
///
/// Simulates multiple beacons broadcasting simultaneously in one location and
/// reports how many of them a single scanner registers.
#[derive(Parser, Debug)]
#[command(name = "simbroadcast")]
#[command(version, about, long_about = None)]
struct Args {
    /// Number of broadcasting beacons
    #[arg(short = 'n', value_parser = clap::value_parser!(u32).range(1..))]
    beacons: u32,

    /// Broadcasting interval in seconds
    #[arg(short = 'i', long)]
    interval: f64,

    /// Probability that a given, non-colliding broadcast is successfully
    /// scanned (not yet backed by any measurement)
    #[arg(long, alias = "scan_prob", default_value_t = DEFAULT_SCAN_PROB)]
    scan_prob: f64,

    /// Random seed for reproducible results. When omitted, a random seed is used.
    #[arg(long)]
    seed: Option<u64>,

    /// Scanning duration in seconds
    #[arg(value_name = "DURATION", value_parser = clap::value_parser!(u64).range(1..))]
    duration: u64,
}

/// Prints a line each time the scanner registers a new beacon.
struct ProgressPrinter;

impl SimObserver for ProgressPrinter {
    fn on_beacon_noticed(&mut self, at: SimTime, _beacon: BeaconId, noticed: usize) {
        println!("{at}: noticed: {noticed}");
    }
}

/// Used when `RUST_LOG` is unset or unparsable.
const DEFAULT_LOG_FILTER: &str = "warn,simbroadcast=info,bsim_sim=info";

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let seed = args.seed.unwrap_or_else(rand::random);

    info!(
        beacons = args.beacons,
        interval_secs = args.interval,
        duration_secs = args.duration,
        scan_prob = args.scan_prob,
        seed,
        "Starting simulation"
    );

    let config = SimConfig::new(args.duration as f64, args.scan_prob, seed);
    let mut sim = SimBuilder::new(config)
        .beacons(args.beacons as usize, args.interval)
        .build()
        .context("invalid simulation parameters")?;

    let report = sim.run(&mut ProgressPrinter)?;
    println!("{report}");
    Ok(())
}
