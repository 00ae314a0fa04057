//! Running statistics for one scheduling algorithm.

use serde::{Deserialize, Serialize};

/// Observed performance history for a single algorithm.
///
/// The averages are `None` until the first observation is recorded;
/// afterwards each is the arithmetic mean of every sample seen so far.
/// Keeping them as `Option` means an unset average can never leak into
/// arithmetic.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SchedulerProfile {
    /// Running mean of observed solution quality.
    pub average_quality: Option<f64>,
    /// Running mean of observed runtime in seconds.
    pub average_runtime: Option<f64>,
    /// How many observations have been recorded.
    pub invocations: u64,
}

impl SchedulerProfile {
    /// Fold one `(quality, runtime)` observation into the running means.
    ///
    /// Incremental mean: `new = (old * n + sample) / (n + 1)`.
    pub fn record(&mut self, quality: f64, runtime: f64) {
        let n = self.invocations as f64;
        self.average_quality = Some(match self.average_quality {
            Some(avg) => (avg * n + quality) / (n + 1.0),
            None => quality,
        });
        self.average_runtime = Some(match self.average_runtime {
            Some(avg) => (avg * n + runtime) / (n + 1.0),
            None => runtime,
        });
        self.invocations += 1;
    }

    /// True once at least one observation has been recorded.
    pub fn has_history(&self) -> bool {
        self.invocations > 0
    }
}
