//! switchgear-policy — pluggable scheduler-switching policies.
//!
//! A [`SwitchingPolicy`] is a pure decision function from the current
//! metrics (and optionally the algorithms' running profiles) to the
//! algorithm that should be active for the next epoch. Policies are
//! plain structs behind a trait object, selected by name at controller
//! construction.

pub mod policy;
pub mod ranking;
pub mod threshold;

pub use policy::SwitchingPolicy;
pub use ranking::{ProfileRankingPolicy, RankingWeights};
pub use threshold::UtilizationThresholdPolicy;

use switchgear_core::SwitchingSection;

/// Resolve a policy from its configured name.
///
/// Returns `None` for names outside the known set; callers treat that
/// as a fatal configuration error.
pub fn from_config(section: &SwitchingSection) -> Option<Box<dyn SwitchingPolicy>> {
    match section.policy.as_str() {
        "utilization-threshold" => Some(Box::new(UtilizationThresholdPolicy::new())),
        "profile-ranking" => {
            let weights = section
                .ranking
                .as_ref()
                .map(|r| RankingWeights {
                    quality: r.quality_weight,
                    runtime: r.runtime_weight,
                })
                .unwrap_or_default();
            Some(Box::new(ProfileRankingPolicy::with_weights(weights)))
        }
        _ => None,
    }
}
