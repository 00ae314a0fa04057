//! Utilization-threshold policy — the FIFO/EDF reference policy.

use switchgear_core::SchedulerAlgorithm;
use switchgear_metrics::MetricSnapshot;
use switchgear_profiles::ProfileSet;

use crate::policy::SwitchingPolicy;

/// Switches between FIFO and EDF on utilization bands.
///
/// The target is recomputed from the current utilization alone on
/// every call: the previous algorithm is never consulted, so there is
/// no hysteresis. That statelessness is intended behavior. Only FIFO
/// and EDF are reachable from this policy.
///
/// Bands, with `u` the latest utilization:
///
/// ```text
/// u <= 0.25          -> FIFO
/// 0.25 < u <= 0.5    -> EDF
/// 0.5  < u <  0.75   -> FIFO
/// u >= 0.75          -> EDF
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct UtilizationThresholdPolicy;

impl UtilizationThresholdPolicy {
    pub fn new() -> Self {
        Self
    }
}

impl SwitchingPolicy for UtilizationThresholdPolicy {
    fn pick_scheduler(
        &self,
        metrics: &MetricSnapshot,
        _profiles: Option<&ProfileSet>,
        initial_invocation: bool,
    ) -> SchedulerAlgorithm {
        if initial_invocation {
            return SchedulerAlgorithm::Fifo;
        }

        let u = metrics.utilization;
        if u <= 0.25 || (u > 0.5 && u < 0.75) {
            SchedulerAlgorithm::Fifo
        } else {
            SchedulerAlgorithm::Edf
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(utilization: f64) -> MetricSnapshot {
        MetricSnapshot {
            utilization,
            sim_time: 100,
        }
    }

    fn pick(utilization: f64) -> SchedulerAlgorithm {
        UtilizationThresholdPolicy::new().pick_scheduler(&snapshot(utilization), None, false)
    }

    #[test]
    fn initial_invocation_is_fifo_regardless_of_metrics() {
        let policy = UtilizationThresholdPolicy::new();
        let picked = policy.pick_scheduler(&snapshot(0.9), None, true);
        assert_eq!(picked, SchedulerAlgorithm::Fifo);
    }

    #[test]
    fn low_utilization_stays_fifo() {
        assert_eq!(pick(0.10), SchedulerAlgorithm::Fifo);
    }

    #[test]
    fn mid_band_goes_edf() {
        assert_eq!(pick(0.26), SchedulerAlgorithm::Edf);
        assert_eq!(pick(0.40), SchedulerAlgorithm::Edf);
    }

    #[test]
    fn upper_mid_band_returns_to_fifo() {
        assert_eq!(pick(0.60), SchedulerAlgorithm::Fifo);
        assert_eq!(pick(0.74), SchedulerAlgorithm::Fifo);
    }

    #[test]
    fn high_utilization_goes_edf() {
        assert_eq!(pick(0.90), SchedulerAlgorithm::Edf);
    }

    #[test]
    fn band_edges_are_exact() {
        // 0.25 is inside the low FIFO band.
        assert_eq!(pick(0.25), SchedulerAlgorithm::Fifo);
        // 0.5 is excluded from the FIFO band (strict lower bound).
        assert_eq!(pick(0.50), SchedulerAlgorithm::Edf);
        // 0.75 is excluded from the FIFO band (strict upper bound).
        assert_eq!(pick(0.75), SchedulerAlgorithm::Edf);
    }

    #[test]
    fn ignores_profiles() {
        let mut profiles = ProfileSet::new();
        let mut edf = switchgear_profiles::SchedulerProfile::default();
        edf.record(10.0, 0.1);
        profiles.insert(SchedulerAlgorithm::Edf, edf);

        let policy = UtilizationThresholdPolicy::new();
        let picked = policy.pick_scheduler(&snapshot(0.10), Some(&profiles), false);
        assert_eq!(picked, SchedulerAlgorithm::Fifo);
    }
}
