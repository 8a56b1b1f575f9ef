//! Weight shifting and weighted discrete sampling.
//!
//! Raw desirabilities can tie, or differ only in the last few bits.  Before
//! sampling they are shifted so the smallest becomes [`WEIGHT_FLOOR`]:
//!
//! ```text
//! weight_i = WEIGHT_FLOOR + value_i - min(values)
//! ```
//!
//! Every weight is then strictly positive, so the sampler never sees an
//! all-zero vector.  The floor value and the shift are part of the model's
//! reproducibility contract; changing either changes every seeded run.

use rand::distributions::WeightedIndex;

use evac_core::SimRng;

use crate::BehaviorResult;

/// Minimum weight after shifting.
pub const WEIGHT_FLOOR: f64 = 1e-5;

/// Shift `values` in place so their minimum lands on `WEIGHT_FLOOR` (up to rounding).
pub fn shift_weights(values: &mut [f64]) {
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    for v in values.iter_mut() {
        *v = WEIGHT_FLOOR + *v - min;
    }
}

/// Draw an index with probability `weights[i] / Σ weights`.
///
/// Fails for empty input, negative or non-finite weights, or an all-zero
/// vector.
pub fn sample_weighted(weights: &[f64], rng: &mut SimRng) -> BehaviorResult<usize> {
    let dist = WeightedIndex::new(weights)?;
    Ok(rng.sample(&dist))
}
