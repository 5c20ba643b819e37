//! Square potential field.

use std::fmt;
use std::ops::{Index, IndexMut};

use crate::error::{RelaxError, Result};

/// A square grid of potential samples over `[0, N] x [0, N]`.
///
/// Storage is row-major: cell `(i, j)` is row `i`, column `j`. The shape is
/// fixed at construction to `(N + 1) x (N + 1)`.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    /// Linear size N (the last valid index on each axis)
    n: usize,
    /// Row-major samples, `(n + 1)^2` of them
    data: Vec<f64>,
}

impl Grid {
    /// Create a grid of linear size `n` with every sample at zero.
    ///
    /// # Panics
    ///
    /// Panics if `(n + 1)^2` samples cannot be addressed; check with
    /// [`cell_count`] first.
    pub fn zeros(n: usize) -> Self {
        let side = n + 1;
        Self {
            n,
            data: vec![0.0; side * side],
        }
    }

    /// Linear size N. Valid indices on each axis are `0..=N`.
    pub fn n(&self) -> usize {
        self.n
    }

    /// Number of points per axis (`N + 1`).
    pub fn side(&self) -> usize {
        self.n + 1
    }

    /// Get the sample at row `i`, column `j`.
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.data[self.offset(i, j)]
    }

    /// Set the sample at row `i`, column `j`.
    pub fn set(&mut self, i: usize, j: usize, value: f64) {
        let idx = self.offset(i, j);
        self.data[idx] = value;
    }

    /// Iterate over rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[f64]> {
        self.data.chunks(self.side())
    }

    /// Row-major view of all samples.
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    pub(crate) fn as_mut_slice(&mut self) -> &mut [f64] {
        &mut self.data
    }

    /// Whether `(i, j)` lies on the outer border.
    pub fn is_border(&self, i: usize, j: usize) -> bool {
        i == 0 || j == 0 || i == self.n || j == self.n
    }

    /// Overwrite this grid with the contents of `other`.
    ///
    /// Both grids must have the same shape.
    pub fn copy_from(&mut self, other: &Grid) -> Result<()> {
        self.check_shape(other)?;
        self.data.copy_from_slice(&other.data);
        Ok(())
    }

    /// Fail with [`RelaxError::ShapeMismatch`] unless `other` has the same shape.
    pub fn check_shape(&self, other: &Grid) -> Result<()> {
        if self.n != other.n {
            return Err(RelaxError::ShapeMismatch {
                expected: self.side(),
                found: other.side(),
            });
        }
        Ok(())
    }

    #[inline]
    fn offset(&self, i: usize, j: usize) -> usize {
        debug_assert!(i <= self.n && j <= self.n, "({i}, {j}) outside 0..={}", self.n);
        i * self.side() + j
    }
}

/// Number of samples in a grid of linear size `n`, or `None` when the
/// buffer would not fit in the address space.
pub fn cell_count(n: usize) -> Option<usize> {
    let side = n.checked_add(1)?;
    let cells = side.checked_mul(side)?;
    let bytes = cells.checked_mul(std::mem::size_of::<f64>())?;
    (bytes <= isize::MAX as usize).then_some(cells)
}

impl Index<(usize, usize)> for Grid {
    type Output = f64;

    fn index(&self, (i, j): (usize, usize)) -> &f64 {
        &self.data[self.offset(i, j)]
    }
}

impl IndexMut<(usize, usize)> for Grid {
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut f64 {
        let idx = self.offset(i, j);
        &mut self.data[idx]
    }
}

impl fmt::Display for Grid {
    /// One row per line, samples separated by a single space.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            let mut first = true;
            for value in row {
                if !first {
                    write!(f, " ")?;
                }
                first = false;
                match f.precision() {
                    Some(p) => write!(f, "{value:.p$}")?,
                    None => write!(f, "{value}")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape() {
        let grid = Grid::zeros(10);
        assert_eq!(grid.n(), 10);
        assert_eq!(grid.side(), 11);
        assert_eq!(grid.as_slice().len(), 121);
        assert_eq!(grid.rows().count(), 11);
        assert!(grid.as_slice().iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_row_major_indexing() {
        let mut grid = Grid::zeros(3);
        grid.set(1, 2, 5.0);
        grid[(2, 1)] = -3.0;

        assert_eq!(grid.get(1, 2), 5.0);
        assert_eq!(grid[(2, 1)], -3.0);
        assert_eq!(grid.as_slice()[4 + 2], 5.0);
        assert_eq!(grid.rows().nth(2).unwrap(), &[0.0, -3.0, 0.0, 0.0]);
    }

    #[test]
    fn test_cell_count() {
        assert_eq!(cell_count(10), Some(121));
        assert_eq!(cell_count(usize::MAX), None);
        assert_eq!(cell_count(usize::MAX / 2), None);
        // side^2 fits in usize but eight bytes per sample do not
        assert_eq!(cell_count(1usize << (usize::BITS / 2 - 1)), None);
    }

    #[test]
    fn test_border() {
        let grid = Grid::zeros(4);
        assert!(grid.is_border(0, 2));
        assert!(grid.is_border(2, 4));
        assert!(!grid.is_border(1, 3));
    }

    #[test]
    fn test_copy_from_checks_shape() {
        let mut a = Grid::zeros(4);
        let mut b = Grid::zeros(4);
        b.set(2, 2, 1.0);
        a.copy_from(&b).unwrap();
        assert_eq!(a, b);

        let c = Grid::zeros(5);
        assert_eq!(
            a.copy_from(&c),
            Err(RelaxError::ShapeMismatch {
                expected: 5,
                found: 6
            })
        );
    }

    #[test]
    fn test_display() {
        let mut grid = Grid::zeros(1);
        grid.set(0, 1, 0.5);
        assert_eq!(format!("{grid:.2}"), "0.00 0.50\n0.00 0.00\n");
    }
}
