//! Benchmark of a partial-fraction Leibniz series converging to π.
//!
//! The binary evaluates the series over a fixed 100 million passes, scales
//! the accumulator by four, and prints the value and the wall-clock time of
//! the run. The evaluator itself is pure; everything configurable about the
//! run is a compile-time constant.

use anyhow::Result;
use tracing::{debug, info};

pub mod bench;
pub mod logger;
pub mod series;

use bench::RunRecord;
use series::{CANONICAL_ITERATIONS, PARAM1, PARAM2, SCALE};

/// Performs the canonical timed run and prints the two report lines.
///
/// The scale factor is applied inside the timed region, after the evaluator
/// returns; the reported time covers the full computation of the value.
pub fn run() -> Result<()> {
    logger::init_logging();

    info!(
        iterations = CANONICAL_ITERATIONS,
        param1 = PARAM1,
        param2 = PARAM2,
        "starting canonical series run"
    );

    let record = RunRecord::capture("pifrac-canonical", || {
        series::evaluate(CANONICAL_ITERATIONS, PARAM1, PARAM2) * SCALE
    });

    debug!(elapsed_secs = record.elapsed_secs(), "run complete");

    #[expect(clippy::print_stdout, reason = "the report lines are the program output")]
    {
        print!("{}", record.report());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_closure_scales_after_evaluation() {
        // Same arithmetic the binary performs, at a size tests can afford.
        let record = RunRecord::capture("scaled", || {
            series::evaluate(1_000, PARAM1, PARAM2) * SCALE
        });
        let expected = series::evaluate(1_000, PARAM1, PARAM2) * SCALE;
        assert_eq!(record.value.to_bits(), expected.to_bits());
    }
}
