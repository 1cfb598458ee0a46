//! Single-shot timing harness and report formatting.

use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

/// Decimal digits carried by both report lines.
const REPORT_PRECISION: usize = 12;

/// One completed timed run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunRecord {
    /// Name of the run
    pub name: String,

    /// Value produced by the timed closure
    pub value: f64,

    /// Wall-clock duration of the closure call
    pub elapsed: Duration,

    /// Timestamp when the run finished
    pub timestamp_ms: u64,
}

impl RunRecord {
    /// Runs `f` once, measuring wall-clock time around the call with a
    /// monotonic clock. The closure's entire body is inside the timed
    /// region, including any final scaling it performs.
    pub fn capture<F>(name: impl Into<String>, f: F) -> Self
    where
        F: FnOnce() -> f64,
    {
        let start = Instant::now();
        let value = f();
        let elapsed = start.elapsed();

        Self {
            name: name.into(),
            value,
            elapsed,
            timestamp_ms: current_time_ms(),
        }
    }

    /// Elapsed time as fractional seconds.
    #[must_use]
    pub fn elapsed_secs(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }

    /// The two fixed report lines, each newline-terminated:
    /// the value and the elapsed seconds, fixed-point at twelve decimals.
    #[must_use]
    pub fn report(&self) -> String {
        format!(
            "Result: {:.prec$}\nExecution Time: {:.prec$} seconds\n",
            self.value,
            self.elapsed_secs(),
            prec = REPORT_PRECISION,
        )
    }

    /// Export to JSON
    #[must_use]
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }
}

/// Get current time in milliseconds
fn current_time_ms() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64
}
