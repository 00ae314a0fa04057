//! The switching-policy trait.

use switchgear_core::SchedulerAlgorithm;
use switchgear_metrics::MetricSnapshot;
use switchgear_profiles::ProfileSet;

/// Decides which scheduling algorithm should be active for the next
/// epoch.
///
/// Implementations must be pure functions of their inputs: any history
/// a policy needs arrives through `profiles` or lives in fields set at
/// construction, never in ambient state. The decision is total; a
/// policy always names exactly one algorithm.
pub trait SwitchingPolicy: Send + Sync {
    /// Pick the algorithm for the next epoch.
    ///
    /// `initial_invocation` marks the very first decision of a run,
    /// before any metrics are meaningful; policies typically return a
    /// fixed default in that case. `profiles` is a consistent snapshot
    /// of every algorithm's running history; policies that only look
    /// at live metrics ignore it.
    fn pick_scheduler(
        &self,
        metrics: &MetricSnapshot,
        profiles: Option<&ProfileSet>,
        initial_invocation: bool,
    ) -> SchedulerAlgorithm;
}
