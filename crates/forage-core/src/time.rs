//! Simulation time model.
//!
//! Time is a monotonically increasing `Tick` counter.  One tick is one
//! synchronous pass over every forager followed by the trail decay pass;
//! there is no wall-clock mapping — frame pacing belongs to the external
//! driver.

use std::fmt;

/// An absolute simulation tick counter.
///
/// Stored as `u64`; overflow is not a practical concern at any simulation
/// rate.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// Return the tick `n` steps after `self`.
    #[inline]
    pub fn offset(self, n: u64) -> Tick {
        Tick(self.0 + n)
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}
