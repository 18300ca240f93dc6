//! Crate-level error type.

use crate::compiler::ValidationError;
use thiserror::Error;

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, PsiError>;

#[derive(Debug, Error)]
pub enum PsiError {
    /// The circuit broke a validation rule; no gate was applied.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Register size outside `1..=max`.
    #[error("cannot allocate a {requested}-qubit register: supported range is 1..={max}")]
    InvalidQubitCount { requested: usize, max: usize },

    /// Sampling was requested from a register whose circuit was rejected.
    #[error("the circuit for this register was rejected; there is no state to sample")]
    Rejected,

    /// The amplitude distribution could not be sampled (NaN or all-zero weights).
    #[error("cannot sample state: {0}")]
    Distribution(#[from] rand::distributions::WeightedError),

    #[error("malformed circuit JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
