//! edinburgh — one day of lunch deliveries around the central area.
//!
//! Reads the collaborator data from `--data-dir`:
//!
//! | File                       | Contents                                |
//! |----------------------------|-----------------------------------------|
//! | `no-fly-zones.geojson`     | Polygon features                        |
//! | `landmarks.geojson`        | Named point features used as waypoints  |
//! | `shops.json`               | `[{ name, location: { lng, lat } }]`    |
//! | `orders-DD-MM-YYYY.csv`    | The day's orders                        |
//!
//! and writes `flightpath.csv`, `deliveries.csv` (or `output.db` with
//! `--sqlite`) and `drone-DD-MM-YYYY.geojson` to `--out-dir`.

mod data;

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use ld_dispatch::{DispatchBuilder, DispatchConfig, RunOutcome, register_deliveries};
use ld_orders::{Order, OrderQueue};
use ld_output::{CsvWriter, FlightOutputObserver, OutputWriter, RunDate, write_path_geojson};
use ld_world::{WorldMap, WorldMapBuilder};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Day to fly, as DD-MM-YYYY.
    #[arg(long, default_value = "01-01-2023")]
    date: RunDate,

    /// Directory holding zones, landmarks, shops and orders.
    #[arg(long, default_value = "demos/edinburgh/data")]
    data_dir: PathBuf,

    /// Where output files are written.  Created if missing.
    #[arg(long, default_value = "output/edinburgh")]
    out_dir: PathBuf,

    /// JSON file with a `DispatchConfig`; missing fields take defaults.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write `output.db` instead of CSV files.
    #[cfg(feature = "sqlite")]
    #[arg(long)]
    sqlite: bool,
}

fn load_config(path: Option<&Path>) -> Result<DispatchConfig> {
    let Some(path) = path else {
        return Ok(DispatchConfig::default());
    };
    let text = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))
}

fn build_world(data_dir: &Path, orders: &[Order]) -> Result<WorldMap> {
    let mut builder = WorldMapBuilder::new();
    for (name, point) in data::load_landmarks(&data_dir.join("landmarks.geojson"))? {
        builder.add_location(&name, point);
    }
    for (name, point) in data::load_shops(&data_dir.join("shops.json"))? {
        builder.add_location(&name, point);
    }
    register_deliveries(&mut builder, orders);
    for zone in data::load_no_fly_zones(&data_dir.join("no-fly-zones.geojson"))? {
        builder.add_no_fly_zone(zone);
    }
    Ok(builder.build())
}

fn fly<W: OutputWriter>(
    world:  WorldMap,
    config: DispatchConfig,
    orders: Vec<Order>,
    writer: W,
) -> Result<RunOutcome> {
    let dispatcher = DispatchBuilder::new(world, config).build()?;
    let mut obs = FlightOutputObserver::new(writer);
    let run = dispatcher.run(OrderQueue::from_iter(orders), &mut obs);
    // Steps flown before an abort still belong in the log.
    let written = obs.finish();
    let outcome = run?;
    written.context("writing flight log")?;
    Ok(outcome)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let config = load_config(args.config.as_deref())?;

    // 1. Collaborator data.
    let orders = data::load_orders(&args.data_dir.join(format!("orders-{}.csv", args.date)))?;
    let world = build_world(&args.data_dir, &orders)?;
    info!(
        date = %args.date,
        orders = orders.len(),
        locations = world.location_count(),
        zones = world.zones().len(),
        "inputs loaded"
    );

    // 2. Fly.
    fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("creating {}", args.out_dir.display()))?;
    let t0 = Instant::now();

    #[cfg(feature = "sqlite")]
    let outcome = if args.sqlite {
        fly(world, config, orders, ld_output::SqliteWriter::new(&args.out_dir)?)?
    } else {
        fly(world, config, orders, CsvWriter::new(&args.out_dir)?)?
    };
    #[cfg(not(feature = "sqlite"))]
    let outcome = fly(world, config, orders, CsvWriter::new(&args.out_dir)?)?;

    let elapsed = t0.elapsed();

    // 3. Line trace.
    let trace = write_path_geojson(&args.out_dir, args.date, &outcome.path)?;

    println!("Run complete in {:.3} s", elapsed.as_secs_f64());
    println!("  {}", outcome.summary);
    println!("  path: {} points -> {}", outcome.path.len(), trace.display());
    Ok(())
}
