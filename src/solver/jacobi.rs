//! Jacobi relaxation.

use crate::error::Result;
use crate::grid::{BoundaryCondition, Grid};

use super::{max_abs_delta, Method, Sweep};

/// Double-buffered Jacobi sweep.
///
/// The caller's grid is the frozen previous state; the new state is written
/// into a second buffer owned by the solver, and the two are swapped at the
/// end of the sweep. The buffers never alias.
#[derive(Debug, Clone)]
pub struct JacobiSolver {
    /// Scratch buffer receiving the next state
    next: Grid,
}

impl JacobiSolver {
    pub fn new(n: usize) -> Self {
        Self {
            next: Grid::zeros(n),
        }
    }
}

impl Sweep for JacobiSolver {
    fn method(&self) -> Method {
        Method::Jacobi
    }

    fn sweep(&mut self, phi: &mut Grid, boundary: &BoundaryCondition) -> Result<f64> {
        phi.check_shape(&self.next)?;

        copy_border(phi, &mut self.next);
        relax_interior(phi, &mut self.next);
        boundary.apply(&mut self.next);

        let delta = max_abs_delta(phi, &self.next)?;

        // phi becomes the new state, the old state is recycled as scratch
        std::mem::swap(phi, &mut self.next);
        Ok(delta)
    }
}

/// Copy the outer border of `src` into `dst`.
fn copy_border(src: &Grid, dst: &mut Grid) {
    let n = src.n();
    for k in 0..=n {
        dst.set(0, k, src.get(0, k));
        dst.set(n, k, src.get(n, k));
        dst.set(k, 0, src.get(k, 0));
        dst.set(k, n, src.get(k, n));
    }
}

/// Relax one interior row `i` of `src` into `row`.
#[inline]
fn relax_row(src: &[f64], side: usize, i: usize, row: &mut [f64]) {
    let above = &src[(i - 1) * side..i * side];
    let here = &src[i * side..(i + 1) * side];
    let below = &src[(i + 1) * side..(i + 2) * side];

    for j in 1..side - 1 {
        row[j] = (below[j] + above[j] + here[j + 1] + here[j - 1]) / 4.0;
    }
}

#[cfg_attr(feature = "parallel", allow(dead_code))]
fn relax_interior_sequential(old: &Grid, next: &mut Grid) {
    let n = old.n();
    let side = old.side();
    let src = old.as_slice();

    for (i, row) in next.as_mut_slice().chunks_mut(side).enumerate() {
        if i == 0 || i == n {
            continue;
        }
        relax_row(src, side, i, row);
    }
}

#[cfg(not(feature = "parallel"))]
fn relax_interior(old: &Grid, next: &mut Grid) {
    relax_interior_sequential(old, next);
}

/// Row-parallel interior update. Every output row reads only `old`.
#[cfg(feature = "parallel")]
fn relax_interior(old: &Grid, next: &mut Grid) {
    use rayon::prelude::*;

    let n = old.n();
    let side = old.side();
    let src = old.as_slice();

    next.as_mut_slice()
        .par_chunks_mut(side)
        .enumerate()
        .for_each(|(i, row)| {
            if i == 0 || i == n {
                return;
            }
            relax_row(src, side, i, row);
        });
}
