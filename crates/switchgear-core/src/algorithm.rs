//! The closed enumeration of candidate scheduling algorithms.
//!
//! The flag names are a contract shared with the simulator's
//! scheduler-selection flag: `as_flag()`, `Display`, `FromStr`, and the
//! serde representation all agree. Adding an algorithm means updating
//! both sides of that contract.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A scheduler-selection name outside the closed enumeration.
///
/// This is a configuration or programming error at the process
/// boundary; callers are expected to fail fast on it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown scheduler algorithm: {0}")]
pub struct UnknownAlgorithm(pub String);

/// A candidate scheduling algorithm the simulator can run.
///
/// Used purely as a selector key; no ordering is defined between
/// algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SchedulerAlgorithm {
    #[serde(rename = "fifo")]
    Fifo,
    #[serde(rename = "edf")]
    Edf,
    #[serde(rename = "lsf")]
    LeastSlackFirst,
    #[serde(rename = "z3")]
    Z3,
    #[serde(rename = "branch_prediction")]
    BranchPrediction,
    #[serde(rename = "ilp")]
    Ilp,
    #[serde(rename = "tetrisched_cplex")]
    TetriSchedCplex,
    #[serde(rename = "tetrisched_gurobi")]
    TetriSchedGurobi,
    #[serde(rename = "clockwork")]
    Clockwork,
    #[serde(rename = "tetrisched")]
    TetriSched,
    #[serde(rename = "graphene_prime")]
    GraphenePrime,
    #[serde(rename = "graphene")]
    Graphene,
}

impl SchedulerAlgorithm {
    /// Every member of the enumeration, in declaration order.
    ///
    /// Policies and the profile store iterate this to cover the full
    /// candidate set.
    pub const ALL: [SchedulerAlgorithm; 12] = [
        SchedulerAlgorithm::Fifo,
        SchedulerAlgorithm::Edf,
        SchedulerAlgorithm::LeastSlackFirst,
        SchedulerAlgorithm::Z3,
        SchedulerAlgorithm::BranchPrediction,
        SchedulerAlgorithm::Ilp,
        SchedulerAlgorithm::TetriSchedCplex,
        SchedulerAlgorithm::TetriSchedGurobi,
        SchedulerAlgorithm::Clockwork,
        SchedulerAlgorithm::TetriSched,
        SchedulerAlgorithm::GraphenePrime,
        SchedulerAlgorithm::Graphene,
    ];

    /// The flag name understood by the simulator's scheduler flag.
    pub fn as_flag(&self) -> &'static str {
        match self {
            SchedulerAlgorithm::Fifo => "fifo",
            SchedulerAlgorithm::Edf => "edf",
            SchedulerAlgorithm::LeastSlackFirst => "lsf",
            SchedulerAlgorithm::Z3 => "z3",
            SchedulerAlgorithm::BranchPrediction => "branch_prediction",
            SchedulerAlgorithm::Ilp => "ilp",
            SchedulerAlgorithm::TetriSchedCplex => "tetrisched_cplex",
            SchedulerAlgorithm::TetriSchedGurobi => "tetrisched_gurobi",
            SchedulerAlgorithm::Clockwork => "clockwork",
            SchedulerAlgorithm::TetriSched => "tetrisched",
            SchedulerAlgorithm::GraphenePrime => "graphene_prime",
            SchedulerAlgorithm::Graphene => "graphene",
        }
    }
}

impl fmt::Display for SchedulerAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_flag())
    }
}

impl FromStr for SchedulerAlgorithm {
    type Err = UnknownAlgorithm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SchedulerAlgorithm::ALL
            .iter()
            .find(|a| a.as_flag() == s)
            .copied()
            .ok_or_else(|| UnknownAlgorithm(s.to_string()))
    }
}
