//! forage-demo — smallest example for the forage colony simulation.
//!
//! Runs 12 foragers on a 20×20 bounded grid with one home site, three
//! resource sites, and a wall of obstacles between home and the far
//! resource.  Scale comment: bump the constants and switch the grid to a
//! torus for long pheromone-highway runs.

use std::path::Path;
use std::time::Instant;

use anyhow::Result;

use forage_agent::{Forager, ForagerState};
use forage_core::{ForagerParams, Position, Tick};
use forage_grid::Grid;
use forage_output::{ColonyOutputObserver, CsvWriter, OutputWriter};
use forage_sim::{ColonyBuilder, ColonyConfig, ColonyObserver, TickSummary};

// ── Constants ─────────────────────────────────────────────────────────────────

const ROWS:              usize = 20;
const COLS:              usize = 20;
const NEIGHBOURS:        u8    = 4;
const TORUS:             bool  = false;
const FORAGER_COUNT:     usize = 12;
const RESOURCE_CAPACITY: u32   = 40;
const TOTAL_TICKS:       u64   = 2_000;
const SEED:              u64   = 42;
const SNAPSHOT_INTERVAL: u64   = 100;

// ── Observer wrapper to accumulate totals ─────────────────────────────────────

struct CountingObserver<W: OutputWriter> {
    inner:            ColonyOutputObserver<W>,
    total_deliveries: u64,
    total_dead_ends:  u64,
    snapshots:        usize,
}

impl<W: OutputWriter> CountingObserver<W> {
    fn new(inner: ColonyOutputObserver<W>) -> Self {
        Self { inner, total_deliveries: 0, total_dead_ends: 0, snapshots: 0 }
    }
}

impl<W: OutputWriter> ColonyObserver for CountingObserver<W> {
    fn on_tick_end(&mut self, tick: Tick, summary: &TickSummary) {
        self.total_deliveries += summary.deliveries;
        self.total_dead_ends += summary.dead_ends;
        self.inner.on_tick_end(tick, summary);
    }

    fn on_snapshot(&mut self, tick: Tick, grid: &Grid, foragers: &[Forager]) {
        self.snapshots += 1;
        self.inner.on_snapshot(tick, grid, foragers);
    }

    fn on_sim_end(&mut self, final_tick: Tick) {
        self.inner.on_sim_end(final_tick);
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    println!("=== forage-demo — ant colony foraging ===");
    println!("Grid: {ROWS}×{COLS}  |  Foragers: {FORAGER_COUNT}  |  Ticks: {TOTAL_TICKS}  |  Seed: {SEED}");
    println!();

    // 1. Colony config.
    let config = ColonyConfig {
        rows:                    ROWS,
        cols:                    COLS,
        neighbours:              NEIGHBOURS,
        torus:                   TORUS,
        total_ticks:             TOTAL_TICKS,
        seed:                    SEED,
        snapshot_interval_ticks: SNAPSHOT_INTERVAL,
        params:                  ForagerParams::default(),
    };

    let mut colony = ColonyBuilder::new(config).build()?;

    // 2. World layout: home near the centre, one close resource, one far,
    //    one at a random free cell, and a short obstacle wall.
    let home = colony.grid.place_home(Some(Position::new(10, 10)))?;
    colony.grid.place_resource(Some(Position::new(13, 10)), RESOURCE_CAPACITY)?;
    colony.grid.place_resource(Some(Position::new(2, 17)), RESOURCE_CAPACITY)?;
    let random_resource = colony.grid.place_resource(None, RESOURCE_CAPACITY)?;
    for y in 13..17 {
        colony.grid.place_obstacle(Some(Position::new(6, y)))?;
    }
    println!("Home at {home}, random resource landed at {random_resource}");

    // 3. Spawn foragers at the home site.
    for _ in 0..FORAGER_COUNT {
        colony.spawn_forager(home, None)?;
    }

    // 4. Set up output.
    std::fs::create_dir_all("output/forage-demo")?;
    let writer = CsvWriter::new(Path::new("output/forage-demo"))?;
    let mut obs = CountingObserver::new(ColonyOutputObserver::new(writer));

    // 5. Run.
    let t0 = Instant::now();
    colony.run(&mut obs)?;
    let elapsed = t0.elapsed();

    if let Some(e) = obs.inner.take_error() {
        eprintln!("output error: {e}");
    }

    // 6. Summary.
    println!("Simulation complete in {:.3} s", elapsed.as_secs_f64());
    println!("  deliveries : {}", obs.total_deliveries);
    println!("  dead ends  : {}", obs.total_dead_ends);
    println!("  snapshots  : {}", obs.snapshots);
    let extrema = colony.grid.trail_extrema();
    match (extrema.min(), extrema.max()) {
        (Some(lo), Some(hi)) => println!("  trail intensity range: {lo:.6} .. {hi:.6}"),
        _ => println!("  no trail was ever reinforced"),
    }
    println!();

    // 7. Final forager table.
    println!("{:<10} {:<12} {:<10}", "Forager", "State", "Position");
    println!("{}", "-".repeat(34));
    for forager in &colony.foragers {
        println!(
            "{:<10} {:<12} {:<10}",
            forager.id().to_string(),
            match forager.state() {
                ForagerState::Exploring => "exploring",
                ForagerState::Returning => "returning",
            },
            forager.pos().to_string(),
        );
    }

    Ok(())
}
