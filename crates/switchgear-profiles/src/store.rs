//! ProfileStore — shared running statistics for every algorithm.
//!
//! A `Clone` handle over shared state, in the same spirit as the rest
//! of the platform's stores: the controller records outcomes while
//! other contexts (reporting, policies) read snapshots. Each update is
//! a single critical section under the write lock, so a reader can
//! never observe a profile whose three fields disagree.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;
use tracing::debug;

use switchgear_core::SchedulerAlgorithm;

use crate::profile::SchedulerProfile;

/// A consistent snapshot of every algorithm's profile.
pub type ProfileSet = HashMap<SchedulerAlgorithm, SchedulerProfile>;

/// Thread-safe store of one [`SchedulerProfile`] per algorithm.
///
/// All twelve entries exist from construction (the store is never
/// partially populated) and none are ever removed; profiles live as
/// long as the run.
#[derive(Clone)]
pub struct ProfileStore {
    inner: Arc<RwLock<ProfileSet>>,
}

impl ProfileStore {
    /// Create a store with a zero-invocation profile for every algorithm.
    pub fn new() -> Self {
        let profiles = SchedulerAlgorithm::ALL
            .iter()
            .map(|&algo| (algo, SchedulerProfile::default()))
            .collect();
        Self {
            inner: Arc::new(RwLock::new(profiles)),
        }
    }

    /// Snapshot of one algorithm's current running stats.
    pub fn get(&self, algorithm: SchedulerAlgorithm) -> SchedulerProfile {
        // Populated for every member at construction; the fallback is
        // the same zero-invocation profile.
        self.inner
            .read()
            .get(&algorithm)
            .copied()
            .unwrap_or_default()
    }

    /// Fold an epoch's `(quality, runtime)` outcome into the named
    /// algorithm's running averages and bump its invocation count.
    pub fn record_observation(
        &self,
        algorithm: SchedulerAlgorithm,
        quality: f64,
        runtime: f64,
    ) {
        let mut profiles = self.inner.write();
        let profile = profiles
            .entry(algorithm)
            .or_insert_with(SchedulerProfile::default);
        profile.record(quality, runtime);
        debug!(
            algorithm = %algorithm,
            quality,
            runtime,
            invocations = profile.invocations,
            "observation recorded"
        );
    }

    /// Consistent snapshot of every profile, for policies that reason
    /// across the whole candidate set.
    pub fn all_profiles(&self) -> ProfileSet {
        self.inner.read().clone()
    }
}

impl Default for ProfileStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_algorithm_present_from_construction() {
        let store = ProfileStore::new();
        let profiles = store.all_profiles();

        assert_eq!(profiles.len(), 12);
        for algo in SchedulerAlgorithm::ALL {
            assert_eq!(profiles[&algo], SchedulerProfile::default());
        }
    }

    #[test]
    fn get_before_any_record_is_zero_invocation() {
        let store = ProfileStore::new();
        let profile = store.get(SchedulerAlgorithm::Edf);

        assert_eq!(profile.invocations, 0);
        assert_eq!(profile.average_quality, None);
        assert_eq!(profile.average_runtime, None);
    }

    #[test]
    fn record_updates_running_average() {
        let store = ProfileStore::new();
        store.record_observation(SchedulerAlgorithm::Fifo, 1.0, 5.0);
        store.record_observation(SchedulerAlgorithm::Fifo, 2.0, 15.0);
        store.record_observation(SchedulerAlgorithm::Fifo, 3.0, 10.0);

        let profile = store.get(SchedulerAlgorithm::Fifo);
        assert_eq!(profile.average_quality, Some(2.0));
        assert_eq!(profile.average_runtime, Some(10.0));
        assert_eq!(profile.invocations, 3);
    }

    #[test]
    fn recording_one_algorithm_leaves_others_untouched() {
        let store = ProfileStore::new();
        store.record_observation(SchedulerAlgorithm::Edf, 0.9, 1.0);

        for algo in SchedulerAlgorithm::ALL {
            if algo == SchedulerAlgorithm::Edf {
                continue;
            }
            let profile = store.get(algo);
            assert_eq!(profile.invocations, 0, "{algo} was mutated");
            assert_eq!(profile.average_quality, None);
        }
    }

    #[test]
    fn clones_share_state() {
        let store = ProfileStore::new();
        let handle = store.clone();

        handle.record_observation(SchedulerAlgorithm::Ilp, 0.5, 2.0);
        assert_eq!(store.get(SchedulerAlgorithm::Ilp).invocations, 1);
    }

    #[test]
    fn snapshot_fields_are_mutually_consistent() {
        let store = ProfileStore::new();
        store.record_observation(SchedulerAlgorithm::Z3, 1.0, 4.0);

        let snapshot = store.all_profiles();
        let profile = snapshot[&SchedulerAlgorithm::Z3];
        // All three fields from the same update.
        assert_eq!(profile.invocations, 1);
        assert_eq!(profile.average_quality, Some(1.0));
        assert_eq!(profile.average_runtime, Some(4.0));

        // Later writes don't bleed into the snapshot.
        store.record_observation(SchedulerAlgorithm::Z3, 3.0, 8.0);
        assert_eq!(snapshot[&SchedulerAlgorithm::Z3].invocations, 1);
    }

    #[test]
    fn concurrent_records_are_all_reflected() {
        use std::thread;

        let store = ProfileStore::new();
        let per_thread = 100;

        let algorithms = [
            SchedulerAlgorithm::Fifo,
            SchedulerAlgorithm::Edf,
            SchedulerAlgorithm::TetriSched,
            SchedulerAlgorithm::Graphene,
        ];

        let mut handles = vec![];
        for algo in algorithms {
            let store = store.clone();
            handles.push(thread::spawn(move || {
                for i in 0..per_thread {
                    store.record_observation(algo, i as f64, 1.0);
                }
            }));
        }
        for h in handles {
            h.join().unwrap();
        }

        for algo in algorithms {
            let profile = store.get(algo);
            assert_eq!(profile.invocations, per_thread, "{algo} lost updates");
            // Mean of 0..100 is 49.5 regardless of interleaving.
            assert!((profile.average_quality.unwrap() - 49.5).abs() < 1e-9);
        }
    }

    #[test]
    fn concurrent_records_on_same_algorithm() {
        use std::thread;

        let store = ProfileStore::new();
        let mut handles = vec![];
        for _ in 0..4 {
            let store = store.clone();
            handles.push(thread::spawn(move || {
                for _ in 0..250 {
                    store.record_observation(SchedulerAlgorithm::Clockwork, 2.0, 3.0);
                }
            }));
        }
        for h in handles {
            h.join().unwrap();
        }

        let profile = store.get(SchedulerAlgorithm::Clockwork);
        assert_eq!(profile.invocations, 1000);
        // Identical samples: the mean must be exact whatever the order.
        assert!((profile.average_quality.unwrap() - 2.0).abs() < 1e-9);
        assert!((profile.average_runtime.unwrap() - 3.0).abs() < 1e-9);
    }
}
