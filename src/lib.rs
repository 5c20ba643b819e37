//! # Laplace Plates
//!
//! Relaxation solvers for the electrostatic potential around a parallel-plate
//! capacitor inside a grounded square box.
//!
//! This library provides:
//! - A square potential [`Grid`] with a grounded outer border
//! - Plate geometry and the Dirichlet clamp it imposes ([`BoundaryCondition`])
//! - Jacobi and Gauss-Seidel sweeps with a max-change convergence test
//! - An iteration driver with an optional sweep cap and per-sweep observer
//!
//! ## Architecture
//!
//! - [`grid`] - Potential field, plate layout, and geometry validation
//! - [`solver`] - Sweep strategies, convergence tracking, and the run loop
//! - [`error`] - Unified error type
//!
//! ## Usage
//!
//! ### Native CLI
//!
//! ```bash
//! relax --size 100 --tolerance 1e-5 --plate-size 10 --method gauss-seidel
//! ```
//!
//! ### Library
//!
//! ```
//! use laplace_plates::{solve, Method, SolverConfig};
//!
//! let config = SolverConfig::new().with_size(20).with_tolerance(1e-4);
//! let result = solve(Method::Jacobi, &config)?;
//! println!("converged after {} sweeps", result.iterations());
//! # Ok::<(), laplace_plates::RelaxError>(())
//! ```
//!
//! ## Geometry
//!
//! The grid spans indices `0..=N` on both axes. With capacitor size `L` the
//! plates are the columns `floor(N/L * 2)` (held at `V1`) and
//! `floor(N/L * 8)` (held at `V2`), over the rows
//! `floor(N/L * 2)..floor(N/L * 8)`. The outer border stays at 0 V.

pub mod error;
pub mod grid;
pub mod solver;

// Re-export main types for convenience
pub use error::{RelaxError, Result};
pub use grid::{BoundaryCondition, Grid};
pub use solver::{solve, solve_observed, IterationResult, Method, Solver, SolverConfig, Status};

// WASM bindings
#[cfg(feature = "wasm")]
mod wasm;

#[cfg(feature = "wasm")]
pub use wasm::WasmRelaxation;
