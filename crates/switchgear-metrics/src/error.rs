//! Error types for metric aggregation.

use thiserror::Error;

/// Result type alias for metric aggregation.
pub type MetricsResult<T> = Result<T, MetricsError>;

/// Errors that can occur while aggregating utilization counters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MetricsError {
    /// No allocated and no available capacity anywhere in the input,
    /// so the utilization ratio is undefined.
    #[error("utilization undefined: zero allocated and available capacity across all pools")]
    DivisionByZero,
}
