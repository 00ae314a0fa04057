//! Profile-ranking policy — un-opinionated switching from history.

use switchgear_core::SchedulerAlgorithm;
use switchgear_metrics::MetricSnapshot;
use switchgear_profiles::ProfileSet;

use crate::policy::SwitchingPolicy;

/// Weights for trading observed quality against observed runtime.
#[derive(Debug, Clone, Copy)]
pub struct RankingWeights {
    pub quality: f64,
    pub runtime: f64,
}

impl Default for RankingWeights {
    fn default() -> Self {
        Self {
            quality: 1.0,
            runtime: 0.1,
        }
    }
}

/// Picks the algorithm with the best historical quality/runtime
/// trade-off.
///
/// Each algorithm with recorded history scores
/// `quality * avg_quality - runtime * avg_runtime`; the highest score
/// wins, with ties broken by enumeration order. Falls back to FIFO on
/// the initial invocation, when no profile snapshot is supplied, or
/// when nothing has history yet, so the decision is always total.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProfileRankingPolicy {
    weights: RankingWeights,
}

impl ProfileRankingPolicy {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_weights(weights: RankingWeights) -> Self {
        Self { weights }
    }

    fn score(&self, quality: f64, runtime: f64) -> f64 {
        self.weights.quality * quality - self.weights.runtime * runtime
    }
}

impl SwitchingPolicy for ProfileRankingPolicy {
    fn pick_scheduler(
        &self,
        _metrics: &MetricSnapshot,
        profiles: Option<&ProfileSet>,
        initial_invocation: bool,
    ) -> SchedulerAlgorithm {
        if initial_invocation {
            return SchedulerAlgorithm::Fifo;
        }
        let Some(profiles) = profiles else {
            return SchedulerAlgorithm::Fifo;
        };

        let mut best: Option<(SchedulerAlgorithm, f64)> = None;
        for algo in SchedulerAlgorithm::ALL {
            let Some(profile) = profiles.get(&algo) else {
                continue;
            };
            let (Some(quality), Some(runtime)) =
                (profile.average_quality, profile.average_runtime)
            else {
                continue;
            };

            let score = self.score(quality, runtime);
            // Strictly greater keeps the earliest member on ties.
            if best.is_none_or(|(_, s)| score > s) {
                best = Some((algo, score));
            }
        }

        match best {
            Some((algo, _)) => algo,
            None => SchedulerAlgorithm::Fifo,
        }
    }
}
