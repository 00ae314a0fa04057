//! switchgear-metrics — utilization aggregation for switching decisions.
//!
//! The external simulator reports, once per epoch, per-pool counters of
//! allocated and still-available resources. This crate collapses them
//! into a single utilization figure in `[0, 1]`:
//!
//! ```text
//! utilization = sum(allocation) / sum(allocation + availability)
//! ```
//!
//! An input with no allocation and no availability has no defined
//! utilization; that is surfaced as [`MetricsError::DivisionByZero`]
//! rather than coerced to 0 or 1, so the controller can skip the
//! epoch's decision.

pub mod error;
pub mod snapshot;

pub use error::{MetricsError, MetricsResult};
pub use snapshot::{MetricSnapshot, ResourceUtilization, percent_utilization};
