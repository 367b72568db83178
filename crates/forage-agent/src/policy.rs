//! Candidate scoring and weighted selection.
//!
//! The scoring strategy sits behind a trait so that alternative foraging
//! policies plug in without touching the step procedure; only the
//! trail-and-distance-weighted score is shipped.

use rand::distributions::{Distribution, WeightedIndex};

use forage_core::{ForagerParams, ForagerRng};

/// Pluggable candidate-cell scoring.
///
/// Implementations receive the candidate's trail intensity (the baseline
/// `gamma` for unmarked cells), its distance to the decision target, and
/// the forager's parameters, and return a non-negative weight.  Weights
/// are normalized into a categorical distribution by the caller.
pub trait SelectionPolicy: Send + Sync + 'static {
    fn score(&self, intensity: f64, distance: f64, params: &ForagerParams) -> f64;
}

/// The default policy: `intensity^alpha * (1/distance)^beta`.
///
/// `alpha → 0` ignores trails (near-random choice), large `alpha` is
/// trail-greedy; `beta` biases toward nearby candidates.
#[derive(Copy, Clone, Debug, Default)]
pub struct TrailDistanceWeighted;

impl SelectionPolicy for TrailDistanceWeighted {
    fn score(&self, intensity: f64, distance: f64, params: &ForagerParams) -> f64 {
        intensity.powf(params.alpha) * (1.0 / distance).powf(params.beta)
    }
}

/// Draw one index from the categorical distribution defined by `scores`.
///
/// Degenerate score vectors (zero total, NaN, a negative entry) cannot
/// form a `WeightedIndex`; the guard falls back to uniform selection over
/// the candidates rather than propagating NaN probabilities.
///
/// # Panics
/// Debug-asserts that `scores` is non-empty; callers handle the empty
/// candidate set (dead end) before sampling.
pub(crate) fn sample(scores: &[f64], rng: &mut ForagerRng) -> usize {
    debug_assert!(!scores.is_empty());
    match WeightedIndex::new(scores) {
        Ok(dist) => dist.sample(rng.inner()),
        Err(_) => rng.gen_range(0..scores.len()),
    }
}

/// Normalize a score vector into selection probabilities.
///
/// Diagnostic counterpart of [`sample`] — visualization and tests use it;
/// the step procedure samples without materializing probabilities.
/// Returns `None` for a degenerate score vector (the case where `sample`
/// falls back to uniform selection).
pub fn probabilities(scores: &[f64]) -> Option<Vec<f64>> {
    let total: f64 = scores.iter().sum();
    if !(total > 0.0) || !total.is_finite() {
        return None;
    }
    Some(scores.iter().map(|s| s / total).collect())
}
