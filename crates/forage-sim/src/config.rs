//! Colony configuration.

use forage_core::{ForagerParams, Tick};

use crate::{SimError, SimResult};

/// Top-level simulation configuration.
///
/// Supplied by a thin external configuration/CLI layer; the core consumes
/// it as in-memory parameters.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ColonyConfig {
    /// Grid height in cells.
    pub rows: usize,

    /// Grid width in cells.
    pub cols: usize,

    /// Requested neighbour count: `<= 4` selects the von Neumann rule set,
    /// anything larger the Moore rule set.
    pub neighbours: u8,

    /// Torus boundary policy; `false` is bounded.
    pub torus: bool,

    /// Ticks simulated by [`Colony::run`][crate::Colony::run].
    pub total_ticks: u64,

    /// Master RNG seed.  The same seed always produces identical runs.
    pub seed: u64,

    /// Fire the snapshot observer hook every N ticks.  0 = never.
    pub snapshot_interval_ticks: u64,

    /// Colony-wide default algorithm parameters; individual foragers may be
    /// spawned with overrides.
    pub params: ForagerParams,
}

impl Default for ColonyConfig {
    fn default() -> Self {
        Self {
            rows: 30,
            cols: 30,
            neighbours: 4,
            torus: false,
            total_ticks: 1_000,
            seed: 42,
            snapshot_interval_ticks: 0,
            params: ForagerParams::default(),
        }
    }
}

impl ColonyConfig {
    /// The tick at which the run ends (exclusive upper bound).
    #[inline]
    pub fn end_tick(&self) -> Tick {
        Tick(self.total_ticks)
    }

    /// Reject empty grids and out-of-range algorithm parameters.
    pub fn validate(&self) -> SimResult<()> {
        if self.rows == 0 || self.cols == 0 {
            return Err(SimError::Config(format!(
                "grid dimensions must be non-zero, got {}x{}",
                self.rows, self.cols
            )));
        }
        self.params.validate()?;
        Ok(())
    }
}
