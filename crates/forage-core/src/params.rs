//! Foraging algorithm parameters.
//!
//! The four parameters steer the weighted cell-selection score
//! `intensity^alpha * (1/dist)^beta` and the trail update rules.  Defaults
//! are colony-wide; individual foragers may be spawned with overrides.

use crate::{CoreError, CoreResult};

/// Tunable parameters of the foraging algorithm.
///
/// | Field   | Range         | Role                                              |
/// |---------|---------------|---------------------------------------------------|
/// | `gamma` | `0 < γ < 1`   | Baseline intensity for unmarked cells and the initial intensity of new trail markers. |
/// | `alpha` | `α >= 0`      | Exponent on trail intensity.  `α → 0` ignores trails; large `α` is trail-greedy. |
/// | `beta`  | `β >= 0`      | Exponent on inverse distance to the decision target. |
/// | `rho`   | `0 < ρ < 1`   | Per-tick trail decay rate; reinforcement blends decay with a `1/path_length` deposit. |
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ForagerParams {
    pub gamma: f64,
    pub alpha: f64,
    pub beta:  f64,
    pub rho:   f64,
}

impl Default for ForagerParams {
    fn default() -> Self {
        Self {
            gamma: 0.001,
            alpha: 1.3,
            beta:  0.9,
            rho:   0.005,
        }
    }
}

impl ForagerParams {
    /// Check every parameter against its documented range.
    pub fn validate(&self) -> CoreResult<()> {
        if !(self.gamma > 0.0 && self.gamma < 1.0) {
            return Err(CoreError::Config(format!(
                "gamma must be in (0, 1), got {}",
                self.gamma
            )));
        }
        if !(self.alpha >= 0.0) {
            return Err(CoreError::Config(format!(
                "alpha must be >= 0, got {}",
                self.alpha
            )));
        }
        if !(self.beta >= 0.0) {
            return Err(CoreError::Config(format!(
                "beta must be >= 0, got {}",
                self.beta
            )));
        }
        if !(self.rho > 0.0 && self.rho < 1.0) {
            return Err(CoreError::Config(format!(
                "rho must be in (0, 1), got {}",
                self.rho
            )));
        }
        Ok(())
    }
}
