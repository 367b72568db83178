//! The pheromone trail model.
//!
//! A trail marker is a positive intensity scalar attached to a cell.  Two
//! mutations exist: a reinforcement update driven by the path length of a
//! forager that just completed a round trip, and a passive multiplicative
//! decay applied each tick the marker is not reinforced.  Intensity decays
//! asymptotically toward zero but never reaches it, so the `> 0` invariant
//! holds for the marker's whole lifetime.

/// A chemical trail signal at one cell.
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrailMarker {
    intensity: f64,
}

impl TrailMarker {
    /// New marker at the baseline intensity `gamma`.
    pub fn new(gamma: f64) -> Self {
        Self { intensity: gamma }
    }

    /// Current signal strength.  Always `> 0`.
    #[inline]
    pub fn intensity(&self) -> f64 {
        self.intensity
    }

    /// Passive decay: `intensity ← (1 - rho) * intensity`.
    ///
    /// Called once per tick for every marker that was not reinforced that
    /// tick.
    pub fn decay(&mut self, rho: f64) {
        self.intensity *= 1.0 - rho;
    }

    /// Reinforcement: `intensity ← (1 - rho) * intensity + 1/path_length`.
    ///
    /// Returns the new intensity, or `None` for a non-positive
    /// `path_length` — a forager that deposits on the cell it started from
    /// has a zero-length path, and the deposit term is undefined there.
    /// Policy: skip the update entirely (the marker keeps its current
    /// intensity and the extrema bookkeeping is untouched).
    pub fn reinforce(&mut self, rho: f64, path_length: f64) -> Option<f64> {
        if path_length <= 0.0 {
            return None;
        }
        self.intensity = (1.0 - rho) * self.intensity + 1.0 / path_length;
        Some(self.intensity)
    }
}

// ── TrailExtrema ──────────────────────────────────────────────────────────────

/// Running minimum and maximum intensity ever produced by reinforcement.
///
/// Owned by the grid.  Used only to normalize display intensity for
/// visualization; the decision scoring never reads it.  Passive decay does
/// not update the extrema.
#[derive(Copy, Clone, PartialEq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrailExtrema {
    range: Option<(f64, f64)>,
}

impl TrailExtrema {
    /// Fold a freshly reinforced intensity into the running extrema.
    pub fn observe(&mut self, intensity: f64) {
        self.range = Some(match self.range {
            None => (intensity, intensity),
            Some((lo, hi)) => (lo.min(intensity), hi.max(intensity)),
        });
    }

    /// Historical minimum, if any reinforcement has happened.
    pub fn min(&self) -> Option<f64> {
        self.range.map(|(lo, _)| lo)
    }

    /// Historical maximum, if any reinforcement has happened.
    pub fn max(&self) -> Option<f64> {
        self.range.map(|(_, hi)| hi)
    }

    /// Map an intensity into `[0, 1]` against the observed range, for
    /// display scaling.  Returns 0 before any observation or while the
    /// range is degenerate.
    pub fn normalize(&self, intensity: f64) -> f64 {
        match self.range {
            Some((lo, hi)) if hi > lo => ((intensity - lo) / (hi - lo)).clamp(0.0, 1.0),
            _ => 0.0,
        }
    }
}
