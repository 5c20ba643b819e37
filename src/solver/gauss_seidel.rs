//! Gauss-Seidel relaxation.
//!
//! The sweep updates cells in place, visiting rows `1..N` top to bottom and
//! columns `1..N` left to right. When cell `(i, j)` is visited its neighbours
//! `(i - 1, j)` and `(i, j - 1)` already hold this sweep's values while
//! `(i + 1, j)` and `(i, j + 1)` still hold the previous sweep's. This order
//! is part of the method: any other visiting order (red-black included)
//! follows a different numerical trajectory.
//!
//! Plate cells are skipped during the scan, so every neighbour read from a
//! plate sees its fixed potential. Relaxing them and clamping only after the
//! sweep would let later cells read a transient plate value and shift the
//! fixed point away from the Jacobi solution.

use crate::error::Result;
use crate::grid::{BoundaryCondition, Grid, PlateLayout};

use super::{max_abs_delta, Method, Sweep};

/// In-place Gauss-Seidel sweep.
#[derive(Debug, Clone)]
pub struct GaussSeidelSolver {
    /// Snapshot of the state before the current sweep
    previous: Grid,
}

impl GaussSeidelSolver {
    pub fn new(n: usize) -> Self {
        Self {
            previous: Grid::zeros(n),
        }
    }
}

impl Sweep for GaussSeidelSolver {
    fn method(&self) -> Method {
        Method::GaussSeidel
    }

    fn sweep(&mut self, phi: &mut Grid, boundary: &BoundaryCondition) -> Result<f64> {
        self.previous.copy_from(phi)?;

        relax_in_place(phi, boundary.layout());
        boundary.apply(phi);

        max_abs_delta(&self.previous, phi)
    }
}

fn relax_in_place(phi: &mut Grid, plates: &PlateLayout) {
    let n = phi.n();
    let side = phi.side();
    let data = phi.as_mut_slice();

    for i in 1..n {
        for j in 1..n {
            if plates.contains(i, j) {
                continue;
            }
            let k = i * side + j;
            data[k] = (data[k + side] + data[k - side] + data[k + 1] + data[k - 1]) / 4.0;
        }
    }
}
