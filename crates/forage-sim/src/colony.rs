//! The `Colony` struct and its tick loop.

use forage_agent::{Forager, SelectionPolicy, StepEvent, TrailDistanceWeighted};
use forage_core::{ForagerId, ForagerParams, ForagerRng, Position, Tick};
use forage_grid::Grid;

use crate::{ColonyConfig, ColonyObserver, SimResult, TickSummary};

#[cfg(feature = "fx-hash")]
type PositionSet = rustc_hash::FxHashSet<Position>;
#[cfg(not(feature = "fx-hash"))]
type PositionSet = std::collections::HashSet<Position>;

/// The main simulation runner.
///
/// Owns the grid, the foragers, and their RNG sub-streams, and drives the
/// three-phase tick described in the [crate docs](crate).  Create via
/// [`ColonyBuilder`][crate::ColonyBuilder].
pub struct Colony<P: SelectionPolicy = TrailDistanceWeighted> {
    /// Global configuration (dimensions, seed, run length, …).
    pub config: ColonyConfig,

    /// The world model.  Placement entry points (`place_resource`,
    /// `place_home`, `place_obstacle`) are reached through here.
    pub grid: Grid,

    /// All foragers, in spawn order.  Stepped in this order every tick.
    pub foragers: Vec<Forager>,

    /// Per-forager RNG sub-streams, parallel to `foragers`.
    rngs: Vec<ForagerRng>,

    /// The selection policy shared by every forager.
    policy: P,

    /// The current tick, advanced at the end of each [`tick`][Colony::tick].
    now: Tick,

    /// Spawn counter backing `ForagerId` allocation.
    next_forager: u32,
}

impl<P: SelectionPolicy> Colony<P> {
    pub(crate) fn new(config: ColonyConfig, grid: Grid, policy: P) -> Self {
        Self {
            config,
            grid,
            foragers: Vec::new(),
            rngs: Vec::new(),
            policy,
            now: Tick::ZERO,
            next_forager: 0,
        }
    }

    /// The current tick.
    #[inline]
    pub fn now(&self) -> Tick {
        self.now
    }

    // ── Spawning ──────────────────────────────────────────────────────────

    /// Spawn a forager at `at`, which must host a home site.
    ///
    /// The forager is registered with that home (deposits only count
    /// there), gets the next `ForagerId`, and draws its decisions from a
    /// sub-stream derived from the configured seed — spawn order never
    /// perturbs the streams of existing foragers.
    ///
    /// `params` of `None` uses the colony-wide defaults; overrides go
    /// through the same range validation as the colony config.
    pub fn spawn_forager(
        &mut self,
        at: Position,
        params: Option<ForagerParams>,
    ) -> SimResult<ForagerId> {
        let params = params.unwrap_or(self.config.params);
        params.validate()?;

        let id = ForagerId(self.next_forager);
        let home = self.grid.cell_mut(at)?.home_mut()?;
        home.register(id);

        self.foragers.push(Forager::new(id, at, params));
        self.rngs.push(ForagerRng::new(self.config.seed, id));
        self.next_forager += 1;
        Ok(id)
    }

    // ── Public run API ────────────────────────────────────────────────────

    /// Run from the current tick to `config.end_tick()`.
    ///
    /// Calls observer hooks at every tick boundary.  Use
    /// [`NoopObserver`][crate::NoopObserver] if you don't need callbacks.
    pub fn run<O: ColonyObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        while self.now < self.config.end_tick() {
            self.tick(observer)?;
        }
        observer.on_sim_end(self.now);
        Ok(())
    }

    /// Run exactly `n` ticks from the current position (ignores
    /// `end_tick`).  Useful for tests and incremental stepping.
    pub fn run_ticks<O: ColonyObserver>(&mut self, n: u64, observer: &mut O) -> SimResult<()> {
        for _ in 0..n {
            self.tick(observer)?;
        }
        Ok(())
    }

    // ── Core tick processing ──────────────────────────────────────────────

    /// Advance the colony by one tick.  Returns the tick's summary.
    pub fn tick<O: ColonyObserver>(&mut self, observer: &mut O) -> SimResult<TickSummary> {
        let now = self.now;
        observer.on_tick_start(now);

        // ── Phase 1: step every forager in fixed spawn order ──────────────
        let mut reinforced = PositionSet::default();
        let mut summary = TickSummary::default();

        for i in 0..self.foragers.len() {
            let forager = &mut self.foragers[i];
            let visible = self.grid.visible_from(forager.pos());
            let report = forager.step(&visible, &mut self.grid, &self.policy, &mut self.rngs[i])?;

            if let Some(pos) = report.reinforced {
                reinforced.insert(pos);
            }
            match report.event {
                StepEvent::Collected => summary.collections += 1,
                StepEvent::Delivered => summary.deliveries += 1,
                StepEvent::DeadEnd => summary.dead_ends += 1,
                _ => {}
            }
        }
        summary.laden_foragers = self.foragers.iter().filter(|f| f.is_laden()).count();

        // ── Phase 2: decay every marker not reinforced this tick ──────────
        //
        // O(cells) scan, rebuilt each tick; markers reinforced in phase 1
        // already absorbed their (1 - rho) factor inside the update.
        let rho = self.config.params.rho;
        for pos in self.grid.trail_positions() {
            if reinforced.contains(&pos) {
                continue;
            }
            if let Some(marker) = self.grid.cell_mut(pos)?.trail_mut() {
                marker.decay(rho);
            }
        }

        // ── Phase 3: observers, clock ─────────────────────────────────────
        observer.on_tick_end(now, &summary);
        let interval = self.config.snapshot_interval_ticks;
        if interval > 0 && now.0 % interval == 0 {
            observer.on_snapshot(now, &self.grid, &self.foragers);
        }

        self.now = self.now.offset(1);
        Ok(summary)
    }
}
