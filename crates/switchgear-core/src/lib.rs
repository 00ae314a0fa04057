pub mod algorithm;
pub mod config;

pub use algorithm::{SchedulerAlgorithm, UnknownAlgorithm};
pub use config::{RankingConfig, SwitchConfig, SwitchingSection};
