//! SchedulingController — drives scheduler switching across epochs.

use tokio::sync::{mpsc, watch};
use tracing::{debug, info, warn};

use switchgear_core::{SchedulerAlgorithm, SwitchConfig};
use switchgear_metrics::{MetricSnapshot, ResourceUtilization};
use switchgear_policy::SwitchingPolicy;
use switchgear_profiles::{ProfileSet, ProfileStore};

use crate::error::{ControllerError, ControllerResult};

/// Outcome of one epoch-boundary decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EpochDecision {
    /// The policy picked a different algorithm than the active one.
    Switched {
        from: Option<SchedulerAlgorithm>,
        to: SchedulerAlgorithm,
    },
    /// The policy confirmed the already-active algorithm.
    Unchanged(SchedulerAlgorithm),
    /// The metrics were degenerate; no decision was made and the
    /// previously active algorithm (if any) stays in place.
    Skipped {
        retained: Option<SchedulerAlgorithm>,
    },
}

/// Events the external simulator feeds into the controller's run loop.
#[derive(Debug, Clone)]
pub enum SimulatorEvent {
    /// A new decision epoch begins; carries the per-pool counters
    /// sampled at the boundary.
    EpochBoundary {
        pools: Vec<Vec<ResourceUtilization>>,
        sim_time: u64,
    },
    /// An epoch finished; carries the outcome for the algorithm that
    /// was active during it.
    EpochComplete {
        algorithm: SchedulerAlgorithm,
        quality: f64,
        runtime: f64,
    },
}

/// Callback type for applying a scheduler switch.
///
/// The controller calls this with the newly selected algorithm; the
/// callback reconfigures the external simulator.
pub type SwitchCallback =
    Box<dyn Fn(SchedulerAlgorithm) -> BoxFuture + Send + Sync>;

type BoxFuture = std::pin::Pin<
    Box<dyn std::future::Future<Output = anyhow::Result<()>> + Send>,
>;

/// Orchestrates the per-epoch switching decision.
///
/// Exclusively owns the active-algorithm state and the profile store
/// for the lifetime of one experiment run. The decision path is
/// single-threaded (one epoch in flight at a time); outcome recording
/// may arrive from other contexts through a cloned [`ProfileStore`]
/// handle or the event channel.
pub struct SchedulingController {
    policy: Box<dyn SwitchingPolicy>,
    profiles: ProfileStore,
    /// The algorithm currently configured in the simulator; `None`
    /// until the first successful decision.
    active: Option<SchedulerAlgorithm>,
    /// Callback to apply switches.
    switch_fn: Option<SwitchCallback>,
}

impl std::fmt::Debug for SchedulingController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SchedulingController")
            .field("active", &self.active)
            .field("switch_fn", &self.switch_fn.as_ref().map(|_| "<callback>"))
            .finish_non_exhaustive()
    }
}

impl SchedulingController {
    /// Create a controller with the given policy installed.
    pub fn new(policy: Box<dyn SwitchingPolicy>) -> Self {
        Self {
            policy,
            profiles: ProfileStore::new(),
            active: None,
            switch_fn: None,
        }
    }

    /// Create a controller from configuration, resolving the policy by
    /// name.
    pub fn from_config(config: &SwitchConfig) -> ControllerResult<Self> {
        let policy = switchgear_policy::from_config(&config.switching)
            .ok_or_else(|| {
                ControllerError::UnknownPolicy(config.switching.policy.clone())
            })?;
        Ok(Self::new(policy))
    }

    /// Set the callback used to apply scheduler switches.
    pub fn with_switch_fn(mut self, f: SwitchCallback) -> Self {
        self.switch_fn = Some(f);
        self
    }

    /// Run the switching decision for one epoch boundary.
    ///
    /// Aggregates the per-pool counters, consults the policy, and
    /// updates the active-algorithm state. Degenerate metrics (no
    /// allocated and no available capacity) skip the decision and keep
    /// the previous algorithm; that is a warning, not a failure.
    pub fn on_epoch_boundary(
        &mut self,
        pools: &[Vec<ResourceUtilization>],
        sim_time: u64,
    ) -> EpochDecision {
        let snapshot = match MetricSnapshot::from_pools(pools, sim_time) {
            Ok(s) => s,
            Err(e) => {
                warn!(
                    sim_time,
                    error = %e,
                    "skipping switching decision, keeping active scheduler"
                );
                return EpochDecision::Skipped {
                    retained: self.active,
                };
            }
        };

        let picked = match self.active {
            // First decision of the run: no meaningful history yet.
            None => self.policy.pick_scheduler(&snapshot, None, true),
            Some(_) => {
                let profiles = self.profiles.all_profiles();
                self.policy.pick_scheduler(&snapshot, Some(&profiles), false)
            }
        };

        match self.active {
            Some(current) if current == picked => {
                debug!(
                    sim_time,
                    utilization = snapshot.utilization,
                    algorithm = %picked,
                    "scheduler unchanged"
                );
                EpochDecision::Unchanged(picked)
            }
            from => {
                self.active = Some(picked);
                info!(
                    sim_time,
                    utilization = snapshot.utilization,
                    from = from.map(|a| a.as_flag()).unwrap_or("none"),
                    to = %picked,
                    "switching scheduler"
                );
                EpochDecision::Switched { from, to: picked }
            }
        }
    }

    /// Record a completed epoch's outcome for the algorithm that ran it.
    pub fn on_epoch_result(
        &self,
        algorithm: SchedulerAlgorithm,
        quality: f64,
        runtime: f64,
    ) {
        self.profiles.record_observation(algorithm, quality, runtime);
    }

    /// Record an outcome reported by flag name across the process
    /// boundary. A name outside the closed enumeration is fatal.
    pub fn record_named_result(
        &self,
        flag: &str,
        quality: f64,
        runtime: f64,
    ) -> ControllerResult<()> {
        let algorithm: SchedulerAlgorithm = flag.parse()?;
        self.on_epoch_result(algorithm, quality, runtime);
        Ok(())
    }

    /// The currently active algorithm, if a decision has been made.
    pub fn active_scheduler(&self) -> Option<SchedulerAlgorithm> {
        self.active
    }

    /// A handle to the profile store, for reporting and for contexts
    /// that record observations directly.
    pub fn profiles(&self) -> ProfileStore {
        self.profiles.clone()
    }

    /// Consistent snapshot of every algorithm's running history.
    pub fn all_profiles(&self) -> ProfileSet {
        self.profiles.all_profiles()
    }

    /// Drive the controller from a simulator event stream until the
    /// channel closes or the shutdown signal fires.
    ///
    /// Switches are applied through the callback installed with
    /// [`with_switch_fn`](Self::with_switch_fn); callback failures are
    /// logged and do not stop the loop.
    pub async fn run(
        &mut self,
        mut events: mpsc::Receiver<SimulatorEvent>,
        mut shutdown: watch::Receiver<bool>,
    ) {
        info!("scheduling controller started");

        loop {
            tokio::select! {
                event = events.recv() => {
                    match event {
                        Some(SimulatorEvent::EpochBoundary { pools, sim_time }) => {
                            let decision = self.on_epoch_boundary(&pools, sim_time);
                            if let EpochDecision::Switched { to, .. } = decision
                                && let Some(ref switch_fn) = self.switch_fn
                                && let Err(e) = switch_fn(to).await
                            {
                                warn!(
                                    algorithm = %to,
                                    error = %e,
                                    "scheduler switch callback failed"
                                );
                            }
                        }
                        Some(SimulatorEvent::EpochComplete {
                            algorithm,
                            quality,
                            runtime,
                        }) => {
                            self.on_epoch_result(algorithm, quality, runtime);
                        }
                        None => {
                            info!("simulator event channel closed");
                            break;
                        }
                    }
                }
                _ = shutdown.changed() => {
                    info!("scheduling controller shutting down");
                    break;
                }
            }
        }
    }
}
