//! Deterministic RNG wrappers.
//!
//! # Determinism strategy
//!
//! One global seed drives the whole run.  The grid consumes its own stream
//! (`ColonyRng`, used for the placement shuffle and nothing else), and each
//! forager gets an independent sub-stream seeded by:
//!
//!   seed = global_seed XOR (forager_id * MIXING_CONSTANT)
//!
//! The mixing constant is the 64-bit fractional part of the golden ratio,
//! which spreads consecutive forager IDs uniformly across the seed space.
//! Spawning additional foragers never disturbs the streams of existing ones,
//! so identical seeds reproduce identical runs regardless of when foragers
//! are added.

use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::ForagerId;

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

// ── ColonyRng ─────────────────────────────────────────────────────────────────

/// Grid-level deterministic RNG.
///
/// Owned by the grid; drives the pre-shuffled placement traversal order.
/// Keep it out of forager decision code — the per-forager streams exist so
/// that placement calls never shift agent behavior.
pub struct ColonyRng(SmallRng);

impl ColonyRng {
    pub fn new(seed: u64) -> Self {
        ColonyRng(SmallRng::seed_from_u64(seed))
    }

    /// Shuffle a mutable slice in-place (Fisher-Yates).
    #[inline]
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        slice.shuffle(&mut self.0);
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }
}

// ── ForagerRng ────────────────────────────────────────────────────────────────

/// Per-forager deterministic RNG sub-stream.
///
/// Created at spawn time; stored in a `Vec` parallel to the forager list.
/// All of a forager's stochastic choices (candidate selection) draw from
/// this stream and nothing else.
pub struct ForagerRng(SmallRng);

impl ForagerRng {
    /// Seed deterministically from the run's global seed and a forager ID.
    pub fn new(global_seed: u64, forager: ForagerId) -> Self {
        let seed = global_seed ^ (forager.0 as u64).wrapping_mul(MIXING_CONSTANT);
        ForagerRng(SmallRng::seed_from_u64(seed))
    }

    /// Expose the inner `SmallRng` for use with `rand` distribution types
    /// (`dist.sample(rng.inner())`).
    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }
}
