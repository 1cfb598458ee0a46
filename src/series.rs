//! Partial-fraction expansion of the Leibniz series for π.
//!
//! Each pass folds the pair of terms `-1/(i*p1 - p2)` and `+1/(i*p1 + p2)`
//! into the accumulator. With the canonical parameters (p1 = 4, p2 = 1) the
//! accumulator after N passes equals the Leibniz partial sum over 2N + 1
//! terms, so scaling by [`SCALE`] converges to π.

use rayon::prelude::*;

/// Loop passes for the canonical run.
pub const CANONICAL_ITERATIONS: i64 = 100_000_000;

/// Canonical first series parameter.
pub const PARAM1: f64 = 4.0;

/// Canonical second series parameter.
pub const PARAM2: f64 = 1.0;

/// Fixed scale applied once to the accumulator after the loop ends.
pub const SCALE: f64 = 4.0;

/// Evaluates the series over `iterations` passes.
///
/// The accumulation proceeds in strictly increasing `i`, single pass;
/// floating-point addition is non-associative, so the order is part of the
/// contract and reordering changes the least-significant bits of the result.
/// `iterations <= 0` leaves the accumulator at its identity value 1.0.
///
/// A zero `j1` or `j2` (possible when `param2` is an integer multiple of
/// `param1`) is not guarded against: the division yields an infinity that
/// propagates through the remaining passes per IEEE-754 semantics. The
/// canonical parameters never align that way for integer `i >= 1`.
#[must_use]
pub fn evaluate(iterations: i64, param1: f64, param2: f64) -> f64 {
    let mut result = 1.0_f64;
    for i in 1..=iterations {
        let j1 = i as f64 * param1 - param2;
        let j2 = i as f64 * param1 + param2;
        result = result - 1.0 / j1 + 1.0 / j2;
    }
    result
}

/// Parallel variant of [`evaluate`], splitting the pass range across rayon
/// workers and summing per-chunk deltas.
///
/// Combining chunk sums reassociates the addition, so the result may differ
/// from [`evaluate`] in the least-significant bits. The sequential evaluator
/// remains the canonical semantics; this variant is library-only and never
/// selected by the binary.
#[must_use]
pub fn evaluate_parallel(iterations: i64, param1: f64, param2: f64) -> f64 {
    if iterations <= 0 {
        return 1.0;
    }
    let delta: f64 = (1..=iterations)
        .into_par_iter()
        .map(|i| {
            let j1 = i as f64 * param1 - param2;
            let j2 = i as f64 * param1 + param2;
            1.0 / j2 - 1.0 / j1
        })
        .sum();
    1.0 + delta
}
