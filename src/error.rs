//! Error types for the dissolved oxygen simulator.

use thiserror::Error;

/// Input-validation errors reported before any integration step runs.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimulationError {
    /// The time grid cannot define a step
    #[error("time grid needs at least 2 points, found {found}")]
    TooFewPoints { found: usize },

    #[error("time grid allows at most {max} points, found {found}")]
    TooManyPoints { found: usize, max: usize },

    /// Grid point `index` is not greater than its predecessor
    #[error("time grid is not strictly increasing at index {index}")]
    NonIncreasingGrid { index: usize },

    #[error("{name} must be a finite number")]
    NonFinite { name: &'static str },
}

impl SimulationError {
    pub fn non_finite(name: &'static str) -> Self {
        Self::NonFinite { name }
    }
}
