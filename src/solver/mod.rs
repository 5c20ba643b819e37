//! Relaxation solvers for Laplace's equation.
//!
//! This module provides the iteration engine. Every interior cell is
//! repeatedly replaced by the mean of its four neighbours:
//!
//! ```text
//! phi[i,j] = (phi[i+1,j] + phi[i-1,j] + phi[i,j+1] + phi[i,j-1]) / 4
//! ```
//!
//! Two update orders are available:
//!
//! - [`Method::Jacobi`] reads only the previous sweep and writes a second
//!   buffer. Cells are independent, so the sweep may run row-parallel
//!   (feature `parallel`).
//! - [`Method::GaussSeidel`] updates in place in row-major order, so each
//!   cell already sees the new values above and to its left. It usually
//!   needs fewer sweeps but is strictly sequential.
//!
//! After each sweep the plates are re-clamped and the largest per-cell
//! change is compared against the tolerance.

mod config;
mod convergence;
mod gauss_seidel;
mod jacobi;
mod observer;
mod relax;

use std::fmt;
use std::str::FromStr;

use crate::error::{RelaxError, Result};
use crate::grid::{BoundaryCondition, Grid};

pub use config::SolverConfig;
pub use convergence::{max_abs_delta, ConvergenceTracker};
pub use gauss_seidel::GaussSeidelSolver;
pub use jacobi::JacobiSolver;
pub use observer::{Action, Event, Observer};
pub use relax::{solve, solve_observed, IterationResult, Solver, Status};

/// Default linear grid size N.
pub const DEFAULT_GRID_SIZE: usize = 100;

/// Default convergence tolerance.
pub const DEFAULT_TOLERANCE: f64 = 1e-5;

/// Default linear capacitor size L.
pub const DEFAULT_PLATE_SIZE: usize = 10;

/// Default potential of the left plate.
pub const DEFAULT_V1: f64 = 1.0;

/// Default potential of the right plate.
pub const DEFAULT_V2: f64 = -1.0;

/// Relaxation update order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum Method {
    /// Simultaneous update from the previous sweep (double-buffered)
    Jacobi,
    /// Sequential in-place update in row-major order
    GaussSeidel,
}

impl Method {
    /// Create the sweep implementation for a grid of linear size `n`.
    pub fn sweeper(self, n: usize) -> Box<dyn Sweep + Send> {
        match self {
            Method::Jacobi => Box::new(JacobiSolver::new(n)),
            Method::GaussSeidel => Box::new(GaussSeidelSolver::new(n)),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Method::Jacobi => "jacobi",
            Method::GaussSeidel => "gauss-seidel",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Method {
    type Err = RelaxError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "jacobi" => Ok(Method::Jacobi),
            "gauss-seidel" | "gauss_seidel" | "gaussseidel" => Ok(Method::GaussSeidel),
            other => Err(RelaxError::invalid_config(format!(
                "unknown method '{other}' (expected 'jacobi' or 'gauss-seidel')"
            ))),
        }
    }
}

/// One relaxation sweep strategy.
pub trait Sweep {
    /// Update rule implemented by this sweep.
    fn method(&self) -> Method;

    /// Relax every interior cell of `phi` once, re-clamp the plates, and
    /// return the largest absolute change from the state before the sweep.
    ///
    /// Border cells are never written.
    fn sweep(&mut self, phi: &mut Grid, boundary: &BoundaryCondition) -> Result<f64>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_parse() {
        assert_eq!("jacobi".parse::<Method>().unwrap(), Method::Jacobi);
        assert_eq!("Gauss-Seidel".parse::<Method>().unwrap(), Method::GaussSeidel);
        assert_eq!("gauss_seidel".parse::<Method>().unwrap(), Method::GaussSeidel);
        assert!("sor".parse::<Method>().is_err());
    }

    #[test]
    fn test_method_display_round_trips() {
        for method in [Method::Jacobi, Method::GaussSeidel] {
            assert_eq!(method.to_string().parse::<Method>().unwrap(), method);
        }
    }

    #[test]
    fn test_sweeper_reports_method() {
        assert_eq!(Method::Jacobi.sweeper(10).method(), Method::Jacobi);
        assert_eq!(Method::GaussSeidel.sweeper(10).method(), Method::GaussSeidel);
    }
}
