//! Potential grid and capacitor geometry.
//!
//! This module provides the [`Grid`] holding the potential field and the
//! [`BoundaryCondition`] that pins the two capacitor plates to fixed
//! potentials. The outer border is never written after initialization, so it
//! stays at the grounded initial value of zero.

mod field;
mod plates;
mod validate;

pub use field::{cell_count, Grid};
pub use plates::{
    BoundaryCondition, PlateFractions, PlateLayout, PLATE_END_FRACTION, PLATE_START_FRACTION,
};
pub use validate::{validate_layout, MIN_GRID_SIZE};
