//! Geometry validation.

use crate::error::{RelaxError, Result};

use super::{cell_count, PlateFractions, PlateLayout};

/// Smallest linear grid size with a non-empty interior.
pub const MIN_GRID_SIZE: usize = 2;

/// Validate grid and plate parameters and return the derived layout.
///
/// Checks:
/// - `N >= 2`
/// - the `(N + 1)^2` grid is addressable
/// - `L > 0`
/// - fractions are finite and non-negative
/// - both plate columns lie in `[1, N - 1]`
/// - `c1 < c2`
pub fn validate_layout(n: usize, plate_size: usize, fractions: PlateFractions) -> Result<PlateLayout> {
    if n < MIN_GRID_SIZE {
        return Err(RelaxError::invalid_config(format!(
            "grid size N must be at least {MIN_GRID_SIZE}, got {n}"
        )));
    }

    if cell_count(n).is_none() {
        return Err(RelaxError::invalid_config(format!(
            "grid size N = {n} is too large to allocate"
        )));
    }

    if plate_size == 0 {
        return Err(RelaxError::invalid_config("capacitor size L must be positive"));
    }

    let PlateFractions { start, end } = fractions;
    if !start.is_finite() || !end.is_finite() || start < 0.0 || end < 0.0 {
        return Err(RelaxError::invalid_config(format!(
            "plate fractions must be finite and non-negative, got start = {start}, end = {end}"
        )));
    }

    let layout = PlateLayout::derive(n, plate_size, fractions);

    for column in [layout.c1, layout.c2] {
        if column < 1 || column > n - 1 {
            return Err(RelaxError::PlateOutOfBounds { column, size: n });
        }
    }

    if layout.c1 >= layout.c2 {
        return Err(RelaxError::PlatesOverlap {
            c1: layout.c1,
            c2: layout.c2,
        });
    }

    Ok(layout)
}
