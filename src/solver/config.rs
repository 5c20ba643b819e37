//! Solver configuration.

use crate::error::{RelaxError, Result};
use crate::grid::{validate_layout, BoundaryCondition, PlateFractions};

use super::{
    DEFAULT_GRID_SIZE, DEFAULT_PLATE_SIZE, DEFAULT_TOLERANCE, DEFAULT_V1, DEFAULT_V2,
};

/// Configuration for a relaxation run.
#[derive(Debug, Clone, PartialEq)]
pub struct SolverConfig {
    /// Linear grid size N; the grid has `(N + 1) x (N + 1)` points.
    pub size: usize,
    /// Stop once the largest per-cell change is at or below this value.
    pub tolerance: f64,
    /// Linear capacitor size L used to place the plates.
    pub plate_size: usize,
    /// Potential of the left plate.
    pub v1: f64,
    /// Potential of the right plate.
    pub v2: f64,
    /// Optional cap on the number of sweeps. `None` iterates until converged.
    pub max_iterations: Option<usize>,
    /// Plate placement multipliers of `N / L`.
    pub fractions: PlateFractions,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_GRID_SIZE,
            tolerance: DEFAULT_TOLERANCE,
            plate_size: DEFAULT_PLATE_SIZE,
            v1: DEFAULT_V1,
            v2: DEFAULT_V2,
            max_iterations: None,
            fractions: PlateFractions::default(),
        }
    }
}

impl SolverConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the linear grid size N.
    pub fn with_size(mut self, size: usize) -> Self {
        self.size = size;
        self
    }

    /// Set the convergence tolerance.
    ///
    /// Smaller tolerance = closer to the true solution but more sweeps.
    /// The distance to the true solution is a multiple of the tolerance that
    /// grows with the grid size.
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Set the linear capacitor size L.
    pub fn with_plate_size(mut self, plate_size: usize) -> Self {
        self.plate_size = plate_size;
        self
    }

    /// Set the plate potentials.
    pub fn with_voltages(mut self, v1: f64, v2: f64) -> Self {
        self.v1 = v1;
        self.v2 = v2;
        self
    }

    /// Cap the number of sweeps.
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = Some(max_iterations);
        self
    }

    /// Set the plate placement fractions.
    pub fn with_fractions(mut self, fractions: PlateFractions) -> Self {
        self.fractions = fractions;
        self
    }

    /// Check every parameter and build the plate boundary condition.
    pub fn validate(&self) -> Result<BoundaryCondition> {
        if !(self.tolerance.is_finite() && self.tolerance > 0.0) {
            return Err(RelaxError::invalid_config(format!(
                "tolerance must be positive and finite, got {}",
                self.tolerance
            )));
        }

        if !self.v1.is_finite() || !self.v2.is_finite() {
            return Err(RelaxError::invalid_config(format!(
                "plate potentials must be finite, got V1 = {}, V2 = {}",
                self.v1, self.v2
            )));
        }

        if self.max_iterations == Some(0) {
            return Err(RelaxError::invalid_config(
                "max_iterations must allow at least one sweep",
            ));
        }

        let layout = validate_layout(self.size, self.plate_size, self.fractions)?;
        Ok(BoundaryCondition::from_layout(layout, self.v1, self.v2))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SolverConfig::new();
        assert_eq!(config.size, 100);
        assert_eq!(config.tolerance, 1e-5);
        assert_eq!(config.plate_size, 10);
        assert_eq!((config.v1, config.v2), (1.0, -1.0));
        assert_eq!(config.max_iterations, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let config = SolverConfig::new()
            .with_size(10)
            .with_tolerance(1e-3)
            .with_plate_size(5)
            .with_voltages(2.0, 0.5)
            .with_max_iterations(30);
        assert_eq!(config.size, 10);
        assert_eq!(config.tolerance, 1e-3);
        assert_eq!(config.plate_size, 5);
        assert_eq!((config.v1, config.v2), (2.0, 0.5));
        assert_eq!(config.max_iterations, Some(30));
    }

    #[test]
    fn test_validate_builds_boundary() {
        let bc = SolverConfig::new().with_size(10).validate().unwrap();
        assert_eq!(bc.layout().c1, 2);
        assert_eq!(bc.layout().c2, 8);
        assert_eq!(bc.voltages(), (1.0, -1.0));
    }

    #[test]
    fn test_rejects_bad_tolerance() {
        for tolerance in [0.0, -1e-5, f64::NAN, f64::INFINITY] {
            let err = SolverConfig::new()
                .with_tolerance(tolerance)
                .validate()
                .unwrap_err();
            assert!(err.is_config_error(), "{tolerance}: {err}");
        }
    }

    #[test]
    fn test_rejects_non_finite_voltage() {
        let err = SolverConfig::new()
            .with_voltages(f64::NAN, 1.0)
            .validate()
            .unwrap_err();
        assert!(matches!(err, RelaxError::InvalidConfig { .. }));
    }

    #[test]
    fn test_rejects_zero_cap() {
        assert!(SolverConfig::new().with_max_iterations(0).validate().is_err());
    }

    #[test]
    fn test_rejects_bad_geometry() {
        assert!(SolverConfig::new().with_size(1).validate().is_err());
        assert!(SolverConfig::new().with_plate_size(0).validate().is_err());
        assert!(SolverConfig::new()
            .with_size(10)
            .with_plate_size(2)
            .validate()
            .is_err());
    }

    #[test]
    fn test_equal_voltages_are_valid() {
        assert!(SolverConfig::new().with_voltages(0.5, 0.5).validate().is_ok());
    }
}
