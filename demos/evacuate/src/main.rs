//! evacuate — runs the floor-field automaton on a small hall.
//!
//! ```text
//! cargo run -p evacuate -- [config.json] [map.txt]
//! ```
//!
//! Without arguments the built-in hall and `AutomatonConfig::default()` are
//! used.  Output lands in `output/evacuate/`: `positions.csv`,
//! `tick_summaries.csv`, `trace.json`, and `statistics.json`.
//! Set `RUST_LOG=debug` to see individual evacuations.

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use evac_agent::PedestrianParams;
use evac_behavior::FloorFieldModel;
use evac_core::{GridScenario, Scenario};
use evac_output::{CsvWriter, FanOut, JsonTraceWriter, OutputObserver};
use evac_sim::{AutomatonBuilder, AutomatonConfig};

// ── Constants ─────────────────────────────────────────────────────────────────

const PEDESTRIANS: usize = 60;
const OUTPUT_DIR:  &str  = "output/evacuate";

// Hall with two pillars, an inner wall, and two doors on the east side.
const HALL: &str = "\
####################
#..................#
#..##..........##..#
#..##..........##..#
#..................E
#......######......#
#..................#
#..................E
#..##..........##..#
#..##..........##..#
#..................#
####################
";

// ── Setup ─────────────────────────────────────────────────────────────────────

fn load_config(path: Option<&Path>) -> Result<AutomatonConfig> {
    let Some(path) = path else {
        return Ok(AutomatonConfig::default());
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    let config: AutomatonConfig = serde_json::from_str(&text)
        .with_context(|| format!("parsing config {}", path.display()))?;
    Ok(config)
}

fn load_scenario(path: Option<&Path>) -> Result<GridScenario> {
    let text = match path {
        Some(p) => std::fs::read_to_string(p)
            .with_context(|| format!("reading map {}", p.display()))?,
        None => HALL.to_owned(),
    };
    Ok(text.parse()?)
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args: Vec<PathBuf> = std::env::args_os().skip(1).map(PathBuf::from).collect();
    let config = load_config(args.first().map(PathBuf::as_path))?;
    let scenario = load_scenario(args.get(1).map(PathBuf::as_path))?;

    println!("=== evacuate — floor-field automaton ===");
    println!(
        "Grid: {}x{}  |  Exits: {}  |  Pedestrians: {PEDESTRIANS}  |  Seed: {}",
        scenario.rows(),
        scenario.cols(),
        scenario.exits().len(),
        config.seed,
    );
    println!("{}", scenario.to_ascii());

    // 1. Build the automaton (computes the floor field).
    let mut automaton = AutomatonBuilder::new(config.clone(), scenario, FloorFieldModel).build()?;
    println!(
        "Floor field: max distance {:.2} cells, {} unreachable cells",
        automaton.floor_field().max_distance(),
        automaton.floor_field().unreachable_count(),
    );

    // 2. Populate with a mix of calm and hurried pedestrians.
    automaton.add_pedestrians_uniformly(PEDESTRIANS, |rng| {
        let bias = rng.gen_range(1.0..4.0);
        let repulsion = rng.gen_range(0.0..1.0);
        let velocity = rng.gen_range(0.6..=1.0);
        PedestrianParams::new(bias, repulsion, velocity).unwrap_or_default()
    })?;

    // 3. Output.
    let out = Path::new(OUTPUT_DIR);
    std::fs::create_dir_all(out)?;
    tracing::info!(dir = %out.display(), "writing output");
    let writer = FanOut::new(
        CsvWriter::new(out)?,
        JsonTraceWriter::new(&out.join("trace.json"), config.seconds_per_tick, config.cell_size_m)?
            .with_domain("hall"),
    );
    let mut obs = OutputObserver::new(writer, &config);

    // 4. Run until everyone is out or the time limit hits.
    let t0 = Instant::now();
    automaton.run(&mut obs)?;
    let elapsed = t0.elapsed();

    if let Some(e) = obs.take_error() {
        eprintln!("output error: {e}");
    }

    // 5. Summary.
    let stats = automaton.statistics();
    std::fs::write(out.join("statistics.json"), serde_json::to_string_pretty(&stats)?)?;

    println!();
    println!(
        "Finished at {} in {:.3} s wall time",
        automaton.clock(),
        elapsed.as_secs_f64()
    );
    println!("{stats}");
    println!();
    println!("Output written to {OUTPUT_DIR}/");

    Ok(())
}
