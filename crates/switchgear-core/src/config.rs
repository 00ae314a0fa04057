//! switchgear.toml configuration parser.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Top-level controller configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SwitchConfig {
    #[serde(default)]
    pub switching: SwitchingSection,
}

/// The `[switching]` section — which policy drives epoch decisions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SwitchingSection {
    /// Policy name: "utilization-threshold" or "profile-ranking".
    #[serde(default = "default_policy")]
    pub policy: String,
    /// Weights for the "profile-ranking" policy; ignored otherwise.
    pub ranking: Option<RankingConfig>,
}

/// The `[switching.ranking]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankingConfig {
    #[serde(default = "default_quality_weight")]
    pub quality_weight: f64,
    #[serde(default = "default_runtime_weight")]
    pub runtime_weight: f64,
}

fn default_policy() -> String {
    "utilization-threshold".to_string()
}

fn default_quality_weight() -> f64 {
    1.0
}

fn default_runtime_weight() -> f64 {
    0.1
}

impl Default for SwitchingSection {
    fn default() -> Self {
        Self {
            policy: default_policy(),
            ranking: None,
        }
    }
}

impl SwitchConfig {
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: SwitchConfig = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn to_toml_string(&self) -> anyhow::Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}
