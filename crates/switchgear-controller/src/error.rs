//! Controller error types.

use thiserror::Error;

/// Result type alias for controller operations.
pub type ControllerResult<T> = Result<T, ControllerError>;

/// Errors that can occur while assembling or driving the controller.
#[derive(Debug, Error)]
pub enum ControllerError {
    /// The configured switching-policy name is not recognized.
    #[error("unknown switching policy: {0}")]
    UnknownPolicy(String),

    /// An observation named an algorithm outside the closed enumeration.
    #[error(transparent)]
    Algorithm(#[from] switchgear_core::UnknownAlgorithm),
}
