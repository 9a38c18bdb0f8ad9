//! skirmish — smallest runnable match for the rust_arena framework.
//!
//! Two harvester fleets of 4 robots each contest 16 stations on a 40×40
//! arena for 60 rounds, with CSV reports written to `output/skirmish/`.

use std::path::Path;
use std::time::Instant;

use anyhow::Result;

use arena_core::{MatchConfig, MatchRng, OwnerId, Position};
use arena_match::{MatchBuilder, MatchRunner};
use arena_report::{CsvReporter, MatchReportObserver};
use arena_strategy::HarvesterStrategy;
use arena_world::GameMap;

// ── Constants ─────────────────────────────────────────────────────────────────

const ARENA_SIDE: i32 = 40;
const STATION_COUNT: usize = 16;
const FLEET_SIZE: usize = 4;
const START_ENERGY: u32 = 300;
const ROUNDS: u32 = 60;
const SEED: u64 = 42;
const REPORT_INTERVAL: u32 = 5;

const RED: OwnerId = OwnerId(0);
const BLUE: OwnerId = OwnerId(1);

fn owner_name(owner: OwnerId) -> &'static str {
    if owner == RED { "red" } else { "blue" }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    println!("=== skirmish — rust_arena ===");
    println!("Fleets: 2 × {FLEET_SIZE}  |  Stations: {STATION_COUNT}  |  Rounds: {ROUNDS}  |  Seed: {SEED}");
    println!();

    // 1. Generate the arena.
    let mut rng = MatchRng::new(SEED);
    let map = GameMap::generate(ARENA_SIDE, ARENA_SIDE, STATION_COUNT, &mut rng.child(0))?;
    println!(
        "Arena: {}x{} with {} stations",
        map.width(),
        map.height(),
        map.station_count()
    );

    // 2. Match config.
    let config = MatchConfig {
        rounds_total: ROUNDS,
        seed: SEED,
        harvest_yield: 40,
        spawn_cost: 200,
        spawn_energy: 100,
        attack_overhead: 50,
        attack_levy_divisor: 20,
        report_interval_rounds: REPORT_INTERVAL,
    };

    // 3. Wire fleets: red starts in the north-west corner, blue south-east.
    let mut builder = MatchBuilder::new(config, map)
        .strategy(RED, HarvesterStrategy::new())
        .strategy(BLUE, HarvesterStrategy::new());
    for i in 0..FLEET_SIZE as i32 {
        builder = builder
            .robot(RED, Position::new(1 + i, 1), START_ENERGY)
            .robot(BLUE, Position::new(ARENA_SIDE - 2 - i, ARENA_SIDE - 2), START_ENERGY);
    }
    let mut runner = builder.build()?;

    // 4. Set up CSV reporting.
    std::fs::create_dir_all("output/skirmish")?;
    let writer = CsvReporter::new(Path::new("output/skirmish"))?;
    let mut obs = MatchReportObserver::new(writer);

    // 5. Run.
    let t0 = Instant::now();
    runner.run(&mut obs);
    let elapsed = t0.elapsed();

    if let Some(e) = obs.take_error() {
        eprintln!("report error: {e}");
    }

    // 6. Summary.
    println!("Match complete in {:.3} s ({} rounds)", elapsed.as_secs_f64(), runner.round().0);
    println!();
    print_standings(&runner);
    println!();
    print_roster(&runner);
    println!();
    println!("Reports: output/skirmish/round_summaries.csv, output/skirmish/robot_snapshots.csv");

    Ok(())
}

fn print_standings(runner: &MatchRunner) {
    println!("{:<8} {:<8} {:<10}", "Fleet", "Robots", "Energy");
    println!("{}", "-".repeat(28));
    for standing in runner.standings() {
        println!(
            "{:<8} {:<8} {:<10}",
            owner_name(standing.owner),
            standing.robots,
            standing.energy
        );
    }
}

fn print_roster(runner: &MatchRunner) {
    println!("{:<8} {:<8} {:<12} {:<8}", "Robot", "Fleet", "Position", "Energy");
    println!("{}", "-".repeat(40));
    for robot in runner.roster.robot_ids() {
        println!(
            "{:<8} {:<8} {:<12} {:<8}",
            robot.0,
            owner_name(runner.roster.owner(robot)),
            runner.roster.position(robot).to_string(),
            runner.roster.energy(robot)
        );
    }
}
