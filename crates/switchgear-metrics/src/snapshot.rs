//! Per-resource utilization counters and the derived epoch snapshot.

use serde::{Deserialize, Serialize};

use crate::error::{MetricsError, MetricsResult};

/// Allocation/availability counters for one resource in one pool.
///
/// `resource_availability` is *unused* capacity, not total capacity;
/// total capacity is the sum of the two fields.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResourceUtilization {
    pub resource_allocation: f64,
    pub resource_availability: f64,
}

/// A single epoch's aggregated system metrics.
///
/// Produced from the simulator's per-pool counters and consumed
/// immediately by the switching policy; instances are transient.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricSnapshot {
    /// Fraction of tracked capacity currently allocated, in `[0, 1]`.
    pub utilization: f64,
    /// Simulator clock at the time the counters were sampled.
    pub sim_time: u64,
}

impl MetricSnapshot {
    /// Aggregate per-pool counters into a snapshot.
    pub fn from_pools(
        pools: &[Vec<ResourceUtilization>],
        sim_time: u64,
    ) -> MetricsResult<Self> {
        Ok(Self {
            utilization: percent_utilization(pools)?,
            sim_time,
        })
    }
}

/// Compute the utilization ratio across every resource in every pool.
///
/// Pure and order-independent: permuting pools or resources yields the
/// same result. Fails with [`MetricsError::DivisionByZero`] when the
/// input carries no capacity at all.
pub fn percent_utilization(pools: &[Vec<ResourceUtilization>]) -> MetricsResult<f64> {
    let mut allocated = 0.0;
    let mut available = 0.0;

    for pool in pools {
        for res in pool {
            allocated += res.resource_allocation;
            available += res.resource_availability;
        }
    }

    let total = allocated + available;
    if total == 0.0 {
        return Err(MetricsError::DivisionByZero);
    }

    Ok(allocated / total)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn res(allocation: f64, availability: f64) -> ResourceUtilization {
        ResourceUtilization {
            resource_allocation: allocation,
            resource_availability: availability,
        }
    }

    #[test]
    fn single_resource_ratio() {
        let pools = vec![vec![res(3.0, 1.0)]];
        assert_eq!(percent_utilization(&pools).unwrap(), 0.75);
    }

    #[test]
    fn sums_across_pools_and_resources() {
        let pools = vec![
            vec![res(2.0, 2.0), res(1.0, 0.0)],
            vec![res(1.0, 4.0)],
        ];
        // allocated = 4, available = 6.
        assert_eq!(percent_utilization(&pools).unwrap(), 0.4);
    }

    #[test]
    fn order_independent() {
        let a = vec![vec![res(2.0, 2.0), res(1.0, 0.0)], vec![res(1.0, 4.0)]];
        let b = vec![vec![res(1.0, 4.0)], vec![res(1.0, 0.0), res(2.0, 2.0)]];
        assert_eq!(
            percent_utilization(&a).unwrap(),
            percent_utilization(&b).unwrap()
        );
    }

    #[test]
    fn all_zero_input_is_an_error() {
        let pools = vec![vec![res(0.0, 0.0)], vec![]];
        assert_eq!(
            percent_utilization(&pools),
            Err(MetricsError::DivisionByZero)
        );
    }

    #[test]
    fn empty_input_is_an_error() {
        assert_eq!(percent_utilization(&[]), Err(MetricsError::DivisionByZero));
    }

    #[test]
    fn fully_allocated_is_one() {
        let pools = vec![vec![res(5.0, 0.0)]];
        assert_eq!(percent_utilization(&pools).unwrap(), 1.0);
    }

    #[test]
    fn fully_idle_is_zero() {
        let pools = vec![vec![res(0.0, 5.0)]];
        assert_eq!(percent_utilization(&pools).unwrap(), 0.0);
    }

    #[test]
    fn stays_within_unit_interval() {
        let pools = vec![vec![res(123.4, 5.6), res(0.1, 99.0)]];
        let u = percent_utilization(&pools).unwrap();
        assert!((0.0..=1.0).contains(&u), "utilization was {u}");
    }

    #[test]
    fn snapshot_carries_sim_time() {
        let pools = vec![vec![res(1.0, 3.0)]];
        let snap = MetricSnapshot::from_pools(&pools, 42).unwrap();
        assert_eq!(snap.utilization, 0.25);
        assert_eq!(snap.sim_time, 42);
    }

    #[test]
    fn snapshot_propagates_degenerate_input() {
        let snap = MetricSnapshot::from_pools(&[], 0);
        assert_eq!(snap, Err(MetricsError::DivisionByZero));
    }
}
