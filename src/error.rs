//! Error types for the relaxation solvers.
//!
//! This module provides a unified error type [`RelaxError`] covering
//! configuration problems detected before the first sweep and the terminal
//! states a run can end in without converging.

use thiserror::Error;

/// Result type alias using [`RelaxError`].
pub type Result<T> = std::result::Result<T, RelaxError>;

/// Unified error type for all solver operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RelaxError {
    // ============ Configuration Errors ============
    /// A configuration parameter is outside its valid range
    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    /// A derived plate column falls on or outside the grid border
    #[error("Plate column {column} is outside the interior [1, {}] of a grid of size {size}", .size.saturating_sub(1))]
    PlateOutOfBounds { column: usize, size: usize },

    /// The derived plate columns do not satisfy c1 < c2
    #[error("Plate columns overlap or are reversed (c1 = {c1}, c2 = {c2})")]
    PlatesOverlap { c1: usize, c2: usize },

    /// A grid of the wrong shape was handed to a solver
    #[error("Grid shape mismatch: expected {expected}x{expected}, found {found}x{found}")]
    ShapeMismatch { expected: usize, found: usize },

    // ============ Run Termination ============
    /// The iteration cap was reached before the tolerance was met
    #[error("Relaxation did not converge after {iterations} iterations (delta: {delta:.2e})")]
    DidNotConverge { iterations: usize, delta: f64 },

    /// An observer requested the run to stop
    #[error("Relaxation stopped by observer after {iterations} iterations (delta: {delta:.2e})")]
    StoppedByObserver { iterations: usize, delta: f64 },
}

impl RelaxError {
    /// Create an invalid configuration error
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Create a non-convergence error
    pub fn did_not_converge(iterations: usize, delta: f64) -> Self {
        Self::DidNotConverge { iterations, delta }
    }

    /// Whether this error was raised before any sweep ran.
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidConfig { .. } | Self::PlateOutOfBounds { .. } | Self::PlatesOverlap { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = RelaxError::did_not_converge(50, 1.5e-3);
        assert_eq!(
            err.to_string(),
            "Relaxation did not converge after 50 iterations (delta: 1.50e-3)"
        );

        let err = RelaxError::PlateOutOfBounds { column: 10, size: 10 };
        assert_eq!(
            err.to_string(),
            "Plate column 10 is outside the interior [1, 9] of a grid of size 10"
        );
    }

    #[test]
    fn test_config_classification() {
        assert!(RelaxError::invalid_config("bad").is_config_error());
        assert!(RelaxError::PlatesOverlap { c1: 4, c2: 4 }.is_config_error());
        assert!(!RelaxError::did_not_converge(1, 0.1).is_config_error());
    }
}
