//! Iteration driver.
//!
//! A [`Solver`] owns the grid for the whole run and moves through these
//! states:
//!
//! ```text
//! new() ──invalid──▶ Err(InvalidConfig | PlateOutOfBounds | PlatesOverlap)
//!   │
//!   ▼
//! Iterating ──delta <= tol──▶ Converged
//!   │
//!   ├──sweeps == cap──▶ ExceededCap
//!   └──observer stop──▶ Err(StoppedByObserver)
//! ```

use crate::error::{RelaxError, Result};
use crate::grid::{BoundaryCondition, Grid};

use super::{Action, ConvergenceTracker, Event, Method, Observer, SolverConfig, Sweep};

/// Where a run currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Still above tolerance (or no sweep has run yet).
    Iterating,
    /// The last sweep changed no cell by more than the tolerance.
    Converged,
    /// The iteration cap was reached above tolerance.
    ExceededCap,
}

/// Converged potential and the sweep count that reached it.
///
/// The grid is only reachable through a shared reference.
#[derive(Debug, Clone)]
pub struct IterationResult {
    grid: Grid,
    iterations: usize,
    delta: f64,
    method: Method,
}

impl IterationResult {
    /// Final potential field.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Sweep count at which the tolerance was first met.
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    /// Delta of the final sweep.
    pub fn final_delta(&self) -> f64 {
        self.delta
    }

    pub fn method(&self) -> Method {
        self.method
    }
}

/// Relaxation run over one grid.
pub struct Solver {
    config: SolverConfig,
    boundary: BoundaryCondition,
    grid: Grid,
    sweeper: Box<dyn Sweep + Send>,
    tracker: ConvergenceTracker,
    iterations: usize,
    status: Status,
}

impl Solver {
    /// Validate `config` and prepare a zeroed grid with the plates applied.
    pub fn new(method: Method, config: SolverConfig) -> Result<Self> {
        let boundary = config.validate()?;

        let mut grid = Grid::zeros(config.size);
        boundary.apply(&mut grid);

        Ok(Self {
            sweeper: method.sweeper(config.size),
            tracker: ConvergenceTracker::new(config.tolerance),
            boundary,
            grid,
            config,
            iterations: 0,
            status: Status::Iterating,
        })
    }

    pub fn method(&self) -> Method {
        self.sweeper.method()
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    pub fn boundary(&self) -> &BoundaryCondition {
        &self.boundary
    }

    /// Current state of the potential field.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Sweeps completed so far.
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    /// Delta of the last sweep, `None` before the first.
    pub fn last_delta(&self) -> Option<f64> {
        self.tracker.last_delta()
    }

    pub fn status(&self) -> Status {
        self.status
    }

    /// Run one sweep, re-clamp the plates, and update the status.
    ///
    /// Always sweeps, even after convergence; the status then reflects the
    /// new sweep alone.
    pub fn step(&mut self) -> Result<Status> {
        let delta = self.sweeper.sweep(&mut self.grid, &self.boundary)?;
        self.iterations += 1;
        self.tracker.record(delta);

        self.status = if self.tracker.is_converged() {
            Status::Converged
        } else if self
            .config
            .max_iterations
            .is_some_and(|cap| self.iterations >= cap)
        {
            Status::ExceededCap
        } else {
            Status::Iterating
        };

        Ok(self.status)
    }

    /// Sweep until converged.
    ///
    /// # Errors
    ///
    /// Returns [`RelaxError::DidNotConverge`] when the configured cap is hit
    /// first. Without a cap a non-converging configuration never returns.
    pub fn run(self) -> Result<IterationResult> {
        self.run_observed(())
    }

    /// Sweep until converged, reporting every sweep to `observer`.
    ///
    /// # Errors
    ///
    /// Returns [`RelaxError::DidNotConverge`] when the cap is hit and
    /// [`RelaxError::StoppedByObserver`] when the observer asks to stop.
    pub fn run_observed<O: Observer>(mut self, mut observer: O) -> Result<IterationResult> {
        loop {
            let status = self.step()?;
            let delta = self.tracker.last_delta().unwrap_or(f64::NAN);

            let event = Event {
                iteration: self.iterations,
                delta,
                method: self.method(),
            };
            if let Some(Action::StopEarly) = observer.observe(&event) {
                return Err(RelaxError::StoppedByObserver {
                    iterations: self.iterations,
                    delta,
                });
            }

            match status {
                Status::Converged => return Ok(self.into_result(delta)),
                Status::ExceededCap => {
                    return Err(RelaxError::did_not_converge(self.iterations, delta));
                }
                Status::Iterating => {}
            }
        }
    }

    fn into_result(self, delta: f64) -> IterationResult {
        IterationResult {
            method: self.sweeper.method(),
            grid: self.grid,
            iterations: self.iterations,
            delta,
        }
    }
}

/// Solve the capacitor problem with the given update order.
///
/// # Example
///
/// ```
/// use laplace_plates::{solve, Method, SolverConfig};
///
/// let config = SolverConfig::new().with_size(10).with_tolerance(1e-3);
/// let result = solve(Method::GaussSeidel, &config)?;
///
/// assert_eq!(result.grid().side(), 11);
/// assert!(result.iterations() > 0);
/// # Ok::<(), laplace_plates::RelaxError>(())
/// ```
pub fn solve(method: Method, config: &SolverConfig) -> Result<IterationResult> {
    Solver::new(method, config.clone())?.run()
}

/// Same as [`solve`], reporting every sweep to `observer`.
pub fn solve_observed<O: Observer>(
    method: Method,
    config: &SolverConfig,
    observer: O,
) -> Result<IterationResult> {
    Solver::new(method, config.clone())?.run_observed(observer)
}
