use thiserror::Error;

#[cfg(doc)]
use crate::SolverOptions;

/// Returned when a [`SolverOptions`] instance describes an impossible configuration.
#[derive(Error, Debug, Copy, Clone, PartialEq)]
pub enum SolverOptionsError {
    #[error("the score decay factor must lie strictly between 0 and 1, got {0}")]
    InvalidDecay(f64),
    #[error("bump sort must be an integer in 0..=5, got {0}")]
    InvalidBumpSort(u8),
    #[error("moving average weights must lie in (0, 1], got {0}")]
    InvalidEmaWeight(f64),
}
