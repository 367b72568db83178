//! Observer hooks for progress reporting and data collection.

use forage_agent::Forager;
use forage_core::Tick;
use forage_grid::Grid;

/// Per-tick statistics handed to [`ColonyObserver::on_tick_end`].
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub struct TickSummary {
    /// Units deposited at home sites this tick.
    pub deliveries: u64,
    /// Units collected from resource sites this tick.
    pub collections: u64,
    /// Foragers that hit a dead end and retreated this tick.
    pub dead_ends: u64,
    /// Foragers carrying a unit at the end of the tick.
    pub laden_foragers: usize,
}

/// Callbacks invoked by [`Colony::run`][crate::Colony::run] at key points
/// in the tick loop.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.  Trail monitoring is pull-based: the
/// snapshot hook hands out the grid and forager list read-only, and the
/// observer queries whatever it wants (e.g.
/// [`Grid::trail_positions`]) — no hidden event wiring.
///
/// # Example — progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter { interval: u64 }
///
/// impl ColonyObserver for ProgressPrinter {
///     fn on_tick_end(&mut self, tick: Tick, summary: &TickSummary) {
///         if tick.0 % self.interval == 0 {
///             println!("{tick}: {} delivered", summary.deliveries);
///         }
///     }
/// }
/// ```
pub trait ColonyObserver {
    /// Called at the very start of each tick, before any forager steps.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called at the end of each tick, after the decay pass.
    fn on_tick_end(&mut self, _tick: Tick, _summary: &TickSummary) {}

    /// Called at snapshot intervals (every `snapshot_interval_ticks`).
    ///
    /// Read-only access to the full world state, so output writers can
    /// record trail intensities and forager positions without the colony
    /// knowing about any specific output format.
    fn on_snapshot(&mut self, _tick: Tick, _grid: &Grid, _foragers: &[Forager]) {}

    /// Called once after the final tick completes.
    fn on_sim_end(&mut self, _final_tick: Tick) {}
}

/// A [`ColonyObserver`] that does nothing.  Use when you need to call `run`
/// but don't want progress callbacks.
pub struct NoopObserver;

impl ColonyObserver for NoopObserver {}
