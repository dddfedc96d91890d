//! grid_demo — headless host loop for the uav_grid simulator.
//!
//! Loads a world and a command batch (embedded defaults, or paths given on the
//! command line), scatters scenery, then drives the scheduler at 60 fps until
//! every queue is exhausted.  Per-step output lands in `output/grid_demo/`.
//!
//! ```text
//! grid_demo [world.json] [commands.json|commands.csv]
//! RUST_LOG=uav_sim=debug grid_demo
//! ```

use std::io::Cursor;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::info;

use uav_command::{Command, load_commands_csv, load_commands_json, load_commands_json_reader};
use uav_core::{SimRng, Vec3, WorldConfig, scatter_buildings};
use uav_output::{CsvWriter, StepOutputObserver};
use uav_sim::{DisplayNode, PresentationAdapter, SchedulerBuilder};

// ── Constants ─────────────────────────────────────────────────────────────────

const FRAME_MS:      f64 = 1_000.0 / 60.0;
/// Frames rendered after the last step so UAVs settle on their final targets.
const SETTLE_FRAMES: u64 = 600;
const OUTPUT_DIR:    &str = "output/grid_demo";

// ── Embedded inputs ───────────────────────────────────────────────────────────

const WORLD_JSON: &str = r#"{
  "mapConfig": {
    "gridX": 30,
    "gridZ": 30,
    "boxSize": 20,
    "randomBuildings": 50,
    "UAVs": [
      { "name": "drone1", "position": { "x": 14, "y": 14 } },
      { "name": "drone2", "position": { "x": 16, "y": 14 } },
      { "name": "drone3", "position": { "x": 15, "y": 17 } }
    ]
  },
  "sim": { "stepLengthMs": 4000, "seed": 7 }
}"#;

const COMMANDS_JSON: &str = r#"[
  { "UAVId": "drone1", "command": "TAKEOFF" },
  { "UAVId": "drone2", "command": "TAKEOFF" },
  { "UAVId": "drone1", "command": "MOVE", "data": { "direction": { "x": 2, "y": 0 } } },
  { "UAVId": "drone2", "command": "MOVE", "data": { "direction": { "x": 0, "y": -3 } } },
  { "UAVId": "drone3", "command": "TAKEOFF" },
  { "UAVId": "drone1", "command": "MOVE", "data": { "direction": { "x": 0, "y": 2 } } },
  { "UAVId": "drone3", "command": "MOVE", "data": { "direction": { "x": -4, "y": -4 } } },
  { "UAVId": "drone1", "command": "LAND" },
  { "UAVId": "drone2", "command": "LAND" },
  { "UAVId": "drone3", "command": "LAND" },
  { "UAVId": "ghost",  "command": "TAKEOFF" }
]"#;

// ── Display stand-in ──────────────────────────────────────────────────────────

/// What a renderer would keep per UAV: a transform.
#[derive(Default)]
struct ConsoleNode {
    position: Vec3,
    heading:  f32,
}

impl DisplayNode for ConsoleNode {
    fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    fn set_heading(&mut self, heading: f32) {
        self.heading = heading;
    }
}

// ── Input loading ─────────────────────────────────────────────────────────────

fn load_world(path: Option<&Path>) -> Result<WorldConfig> {
    match path {
        Some(p) => WorldConfig::from_json_path(p).with_context(|| format!("loading world {}", p.display())),
        None => Ok(WorldConfig::from_json_str(WORLD_JSON)?),
    }
}

fn load_commands(path: Option<&Path>) -> Result<Vec<Command>> {
    let Some(p) = path else {
        return Ok(load_commands_json_reader(Cursor::new(COMMANDS_JSON))?);
    };
    let commands = match p.extension().and_then(|e| e.to_str()) {
        Some("csv") => load_commands_csv(p),
        _ => load_commands_json(p),
    };
    commands.with_context(|| format!("loading commands {}", p.display()))
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    init_tracing();

    let mut args = std::env::args().skip(1).map(PathBuf::from);
    let world_path = args.next();
    let commands_path = args.next();

    println!("=== grid_demo — uav_grid command-step scheduler ===");

    // 1. Configuration.
    let config = load_world(world_path.as_deref())?;
    let commands = load_commands(commands_path.as_deref())?;
    println!(
        "Grid: {} × {} cells of {}  |  UAVs: {}  |  Step: {} ms",
        config.map.grid_x,
        config.map.grid_z,
        config.map.box_size,
        config.map.uavs.len(),
        config.sim.step_length_ms,
    );

    // 2. Scheduler and scenery (placed with the same grid transform).
    let mut sched = SchedulerBuilder::new(config.clone()).build()?;
    let mut rng = SimRng::new(config.sim.seed);
    let buildings = scatter_buildings(sched.grid(), config.map.random_buildings, &mut rng);
    let tallest = buildings.iter().map(|b| b.height).fold(0.0_f32, f32::max);
    println!(
        "Scenery: {} buildings (tallest {:.1}) over a {:.0}-unit ground plane",
        buildings.len(),
        tallest,
        sched.grid().ground_extent(),
    );

    // 3. Output and display.
    std::fs::create_dir_all(OUTPUT_DIR)?;
    let writer = CsvWriter::new(Path::new(OUTPUT_DIR))?;
    let mut obs = StepOutputObserver::new(writer, &config.sim);
    let mut display = PresentationAdapter::for_scheduler(&sched, |_| ConsoleNode::default());

    // 4. Submit.
    let report = sched.submit_commands(commands, &mut obs);
    println!(
        "Submitted: {} accepted, {} dropped {:?}, longest queue {}",
        report.accepted,
        report.dropped.len(),
        report.dropped,
        report.longest_queue,
    );
    println!();

    // 5. Run.
    let t0 = Instant::now();
    let end_ms = sched.run_until_idle(0.0, FRAME_MS, SETTLE_FRAMES, &mut obs)?;
    display.sync(&sched);
    info!(end_ms, final_step = %sched.current_step(), "host loop finished");

    if let Some(e) = obs.take_error() {
        eprintln!("output error: {e}");
    }

    println!(
        "Run complete in {:.3} s wall, {:.1} s simulated, final step {}",
        t0.elapsed().as_secs_f64(),
        end_ms / 1_000.0,
        sched.current_step(),
    );
    println!("  output in {OUTPUT_DIR}/ (step_snapshots.csv, step_summaries.csv)");
    println!();

    // 6. Final positions table.
    println!("{:<10} {:<10} {:<28} {:>8}", "UAV", "Cell", "Position", "Heading");
    println!("{}", "-".repeat(60));
    for (view, node) in sched.views().zip(display.nodes()) {
        println!(
            "{:<10} {:<10} {:<28} {:>8.1}",
            view.name,
            view.cell.to_string(),
            node.position.to_string(),
            node.heading.to_degrees(),
        );
    }

    Ok(())
}
