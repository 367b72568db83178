//! Fluent builder for constructing a [`Colony`].

use forage_agent::{SelectionPolicy, TrailDistanceWeighted};
use forage_grid::Grid;

use crate::{Colony, ColonyConfig, SimResult};

/// Fluent builder for [`Colony<P>`].
///
/// Validates the configuration, builds the grid from it, and returns a
/// ready-to-run colony.  The selection policy defaults to
/// [`TrailDistanceWeighted`]; swap it with [`policy`][Self::policy].
///
/// # Example
///
/// ```rust,ignore
/// let mut colony = ColonyBuilder::new(ColonyConfig::default()).build()?;
/// let home = colony.grid.place_home(None)?;
/// colony.grid.place_resource(None, 1_000)?;
/// colony.spawn_forager(home, None)?;
/// colony.run(&mut NoopObserver)?;
/// ```
pub struct ColonyBuilder<P: SelectionPolicy = TrailDistanceWeighted> {
    config: ColonyConfig,
    policy: P,
}

impl ColonyBuilder<TrailDistanceWeighted> {
    /// Create a builder with the default selection policy.
    pub fn new(config: ColonyConfig) -> Self {
        Self {
            config,
            policy: TrailDistanceWeighted,
        }
    }
}

impl<P: SelectionPolicy> ColonyBuilder<P> {
    /// Replace the selection policy.
    pub fn policy<Q: SelectionPolicy>(self, policy: Q) -> ColonyBuilder<Q> {
        ColonyBuilder {
            config: self.config,
            policy,
        }
    }

    /// Validate the configuration and build an empty colony.
    ///
    /// Sites and foragers are added afterwards through
    /// [`Colony::grid`]'s placement operations and
    /// [`Colony::spawn_forager`].
    pub fn build(self) -> SimResult<Colony<P>> {
        self.config.validate()?;
        let grid = Grid::new(
            self.config.rows,
            self.config.cols,
            self.config.neighbours,
            self.config.torus,
            self.config.seed,
        );
        Ok(Colony::new(self.config, grid, self.policy))
    }
}
