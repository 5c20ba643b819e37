//! Convergence measurement between successive sweeps.

use crate::error::Result;
use crate::grid::Grid;

/// Largest absolute per-cell difference between two grids of equal shape.
pub fn max_abs_delta(old: &Grid, new: &Grid) -> Result<f64> {
    old.check_shape(new)?;
    Ok(old
        .as_slice()
        .iter()
        .zip(new.as_slice())
        .fold(0.0f64, |acc, (a, b)| acc.max((b - a).abs())))
}

/// Tracks the per-sweep change and decides when the run has converged.
#[derive(Debug, Clone)]
pub struct ConvergenceTracker {
    tolerance: f64,
    /// Delta of the most recent sweep, `None` before the first
    last_delta: Option<f64>,
}

impl ConvergenceTracker {
    pub fn new(tolerance: f64) -> Self {
        Self {
            tolerance,
            last_delta: None,
        }
    }

    /// Remember the delta of the latest sweep.
    pub fn record(&mut self, delta: f64) {
        self.last_delta = Some(delta);
    }

    pub fn last_delta(&self) -> Option<f64> {
        self.last_delta
    }

    /// True once a sweep has run and its delta is at or below tolerance.
    ///
    /// A NaN delta never converges.
    pub fn is_converged(&self) -> bool {
        self.last_delta.is_some_and(|delta| delta <= self.tolerance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn test_max_abs_delta() {
        let old = Grid::zeros(3);
        let mut new = Grid::zeros(3);
        new.set(1, 1, 0.25);
        new.set(2, 3, -0.75);

        assert_relative_eq!(max_abs_delta(&old, &new).unwrap(), 0.75);
        assert_relative_eq!(max_abs_delta(&new, &old).unwrap(), 0.75);
        assert_eq!(max_abs_delta(&new, &new).unwrap(), 0.0);
    }

    #[test]
    fn test_shape_mismatch() {
        assert!(max_abs_delta(&Grid::zeros(3), &Grid::zeros(4)).is_err());
    }

    #[test]
    fn test_not_converged_before_first_sweep() {
        let tracker = ConvergenceTracker::new(1e-3);
        assert_eq!(tracker.last_delta(), None);
        assert!(!tracker.is_converged());
    }

    #[test]
    fn test_tolerance_is_inclusive() {
        let mut tracker = ConvergenceTracker::new(0.5);
        tracker.record(0.6);
        assert!(!tracker.is_converged());
        tracker.record(0.5);
        assert!(tracker.is_converged());
        tracker.record(f64::NAN);
        assert!(!tracker.is_converged());
    }
}
