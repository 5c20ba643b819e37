//! Capacitor plate geometry and the Dirichlet clamp it imposes.
//!
//! The two plates are vertical line segments. With grid size `N` and
//! capacitor size `L`, the scale `N / L` maps physical positions to indices:
//!
//! ```text
//! c1   = floor(N / L * start)      left plate column, held at V1
//! c2   = floor(N / L * end)        right plate column, held at V2
//! rows = [floor(N / L * start), floor(N / L * end))
//! ```
//!
//! With the default fractions (2 and 8) and `L = 10` the plates sit at 20%
//! and 80% of the domain and span the rows between those marks.

use std::ops::Range;

use crate::error::Result;

use super::validate::validate_layout;
use super::Grid;

/// Default start fraction (numerator over `L`) for plate placement.
pub const PLATE_START_FRACTION: f64 = 2.0;

/// Default end fraction (numerator over `L`) for plate placement.
pub const PLATE_END_FRACTION: f64 = 8.0;

/// Multipliers of `N / L` that place the plates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlateFractions {
    /// Left plate column and first plate row
    pub start: f64,
    /// Right plate column and one past the last plate row
    pub end: f64,
}

impl Default for PlateFractions {
    fn default() -> Self {
        Self {
            start: PLATE_START_FRACTION,
            end: PLATE_END_FRACTION,
        }
    }
}

/// Grid indices occupied by the plates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlateLayout {
    /// Column of the left plate
    pub c1: usize,
    /// Column of the right plate
    pub c2: usize,
    /// Half-open row range covered by both plates
    pub rows: Range<usize>,
}

impl PlateLayout {
    /// Derive plate indices from `N`, `L` and the placement fractions.
    ///
    /// No range checks happen here; see [`PlateLayout::new`] for the
    /// validated constructor.
    pub fn derive(n: usize, plate_size: usize, fractions: PlateFractions) -> Self {
        let scale = n as f64 / plate_size as f64;
        let start = (scale * fractions.start).floor() as usize;
        let end = (scale * fractions.end).floor() as usize;
        Self {
            c1: start,
            c2: end,
            rows: start..end,
        }
    }

    /// Derive and validate plate indices for a grid of linear size `n`.
    pub fn new(n: usize, plate_size: usize, fractions: PlateFractions) -> Result<Self> {
        validate_layout(n, plate_size, fractions)
    }

    /// Whether `(i, j)` lies on either plate.
    pub fn contains(&self, i: usize, j: usize) -> bool {
        self.rows.contains(&i) && (j == self.c1 || j == self.c2)
    }
}

/// Fixed plate potentials clamped onto a grid.
#[derive(Debug, Clone, PartialEq)]
pub struct BoundaryCondition {
    layout: PlateLayout,
    v1: f64,
    v2: f64,
}

impl BoundaryCondition {
    /// Build the boundary condition for a grid of linear size `n`.
    pub fn new(n: usize, plate_size: usize, v1: f64, v2: f64) -> Result<Self> {
        Self::with_fractions(n, plate_size, PlateFractions::default(), v1, v2)
    }

    /// Same as [`BoundaryCondition::new`] with custom plate fractions.
    pub fn with_fractions(
        n: usize,
        plate_size: usize,
        fractions: PlateFractions,
        v1: f64,
        v2: f64,
    ) -> Result<Self> {
        let layout = PlateLayout::new(n, plate_size, fractions)?;
        Ok(Self::from_layout(layout, v1, v2))
    }

    /// Wrap an already validated layout.
    pub fn from_layout(layout: PlateLayout, v1: f64, v2: f64) -> Self {
        Self { layout, v1, v2 }
    }

    /// Plate indices.
    pub fn layout(&self) -> &PlateLayout {
        &self.layout
    }

    /// Potentials of the left and right plate.
    pub fn voltages(&self) -> (f64, f64) {
        (self.v1, self.v2)
    }

    /// Overwrite every plate cell with its fixed potential.
    ///
    /// Idempotent. Cells off the plates are left alone.
    pub fn apply(&self, grid: &mut Grid) {
        let PlateLayout { c1, c2, ref rows } = self.layout;
        for i in rows.clone() {
            grid.set(i, c1, self.v1);
            grid.set(i, c2, self.v2);
        }
    }

    /// Iterate over `(row, column, potential)` for every plate cell.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, f64)> + '_ {
        self.layout.rows.clone().flat_map(move |i| {
            [(i, self.layout.c1, self.v1), (i, self.layout.c2, self.v2)]
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_layout() {
        // N = 10, L = 10: plates at columns 2 and 8, rows 2..8
        let layout = PlateLayout::new(10, 10, PlateFractions::default()).unwrap();
        assert_eq!(layout.c1, 2);
        assert_eq!(layout.c2, 8);
        assert_eq!(layout.rows, 2..8);

        let layout = PlateLayout::new(100, 10, PlateFractions::default()).unwrap();
        assert_eq!((layout.c1, layout.c2), (20, 80));
        assert_eq!(layout.rows, 20..80);
    }

    #[test]
    fn test_layout_floors_uneven_ratio() {
        // N / L = 25 / 10 = 2.5 -> floor(5.0) = 5, floor(20.0) = 20
        let layout = PlateLayout::derive(25, 10, PlateFractions::default());
        assert_eq!((layout.c1, layout.c2), (5, 20));

        // N / L = 10 / 3 -> floor(6.67) = 6, floor(26.67) = 26
        let layout = PlateLayout::derive(10, 3, PlateFractions::default());
        assert_eq!((layout.c1, layout.c2), (6, 26));
    }

    #[test]
    fn test_custom_fractions() {
        let fractions = PlateFractions {
            start: 3.0,
            end: 7.0,
        };
        let layout = PlateLayout::new(10, 10, fractions).unwrap();
        assert_eq!((layout.c1, layout.c2), (3, 7));
        assert_eq!(layout.rows, 3..7);
    }

    #[test]
    fn test_apply_clamps_plates_only() {
        let bc = BoundaryCondition::new(10, 10, 1.0, -1.0).unwrap();
        let mut grid = Grid::zeros(10);
        bc.apply(&mut grid);

        for i in 0..=10 {
            for j in 0..=10 {
                let expected = match (i, j) {
                    (2..=7, 2) => 1.0,
                    (2..=7, 8) => -1.0,
                    _ => 0.0,
                };
                assert_eq!(grid.get(i, j), expected, "cell ({i}, {j})");
            }
        }
    }

    #[test]
    fn test_apply_is_idempotent() {
        let bc = BoundaryCondition::new(10, 10, 0.7, -0.3).unwrap();
        let mut grid = Grid::zeros(10);
        grid.set(3, 2, 42.0);
        grid.set(5, 5, 9.0);

        bc.apply(&mut grid);
        let once = grid.clone();
        bc.apply(&mut grid);

        assert_eq!(grid, once);
        assert_eq!(grid.get(3, 2), 0.7);
        assert_eq!(grid.get(5, 5), 9.0);
    }

    #[test]
    fn test_contains() {
        let layout = PlateLayout::new(10, 10, PlateFractions::default()).unwrap();
        assert!(layout.contains(2, 2));
        assert!(layout.contains(7, 8));
        assert!(!layout.contains(8, 2));
        assert!(!layout.contains(1, 2));
        assert!(!layout.contains(4, 5));
    }

    #[test]
    fn test_cells() {
        let bc = BoundaryCondition::new(10, 10, 1.0, -1.0).unwrap();
        let cells: Vec<_> = bc.cells().collect();
        assert_eq!(cells.len(), 12);
        assert_eq!(cells[0], (2, 2, 1.0));
        assert_eq!(cells[1], (2, 8, -1.0));
        assert_eq!(cells[11], (7, 8, -1.0));
    }
}
