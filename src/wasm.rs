//! WASM bindings for Laplace Plates.
//!
//! This module provides JavaScript-friendly bindings so a browser page can
//! solve the capacitor problem and render the potential as a heat map.
//!
//! ## Usage (JavaScript)
//!
//! ```javascript
//! import init, { WasmRelaxation } from 'laplace_plates';
//!
//! await init();
//!
//! const run = new WasmRelaxation('gauss-seidel', 100, 1e-5, 10, 1.0, -1.0);
//! const side = run.side;
//! const grid = run.grid(); // Float64Array, row-major, side * side
//! ```

use wasm_bindgen::prelude::*;

use crate::solver::{solve, IterationResult, Method, SolverConfig};

/// Initialize panic hook for better error messages in browser console.
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

/// A finished relaxation run, exposed read-only to JavaScript.
#[wasm_bindgen]
pub struct WasmRelaxation {
    result: IterationResult,
}

#[wasm_bindgen]
impl WasmRelaxation {
    /// Solve with default iteration limits (none).
    ///
    /// # Arguments
    /// * `method` - `"jacobi"` or `"gauss-seidel"`
    /// * `size` - Linear grid size N
    /// * `tolerance` - Convergence tolerance
    /// * `plate_size` - Linear capacitor size L
    /// * `v1`, `v2` - Plate potentials
    #[wasm_bindgen(constructor)]
    pub fn new(
        method: &str,
        size: usize,
        tolerance: f64,
        plate_size: usize,
        v1: f64,
        v2: f64,
    ) -> Result<WasmRelaxation, JsValue> {
        Self::with_cap(method, size, tolerance, plate_size, v1, v2, 0)
    }

    /// Solve with a sweep cap. A cap of 0 means unbounded.
    ///
    /// An unbounded run blocks the page until it converges, so browsers
    /// should normally pass a cap.
    #[wasm_bindgen]
    pub fn with_cap(
        method: &str,
        size: usize,
        tolerance: f64,
        plate_size: usize,
        v1: f64,
        v2: f64,
        max_iterations: usize,
    ) -> Result<WasmRelaxation, JsValue> {
        let method: Method = method
            .parse()
            .map_err(|e: crate::RelaxError| JsValue::from_str(&e.to_string()))?;

        let mut config = SolverConfig::new()
            .with_size(size)
            .with_tolerance(tolerance)
            .with_plate_size(plate_size)
            .with_voltages(v1, v2);
        if max_iterations > 0 {
            config = config.with_max_iterations(max_iterations);
        }

        let result = solve(method, &config).map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(WasmRelaxation { result })
    }

    /// Number of sweeps needed to converge.
    #[wasm_bindgen(getter)]
    pub fn iterations(&self) -> usize {
        self.result.iterations()
    }

    /// Delta of the final sweep.
    #[wasm_bindgen(getter)]
    pub fn delta(&self) -> f64 {
        self.result.final_delta()
    }

    /// Points per axis (N + 1).
    #[wasm_bindgen(getter)]
    pub fn side(&self) -> usize {
        self.result.grid().side()
    }

    /// Copy of the potential, row-major.
    #[wasm_bindgen]
    pub fn grid(&self) -> Vec<f64> {
        self.result.grid().as_slice().to_vec()
    }

    /// Potential at row `i`, column `j`, or `undefined` outside the grid.
    #[wasm_bindgen]
    pub fn value(&self, i: usize, j: usize) -> Option<f64> {
        let grid = self.result.grid();
        (i <= grid.n() && j <= grid.n()).then(|| grid.get(i, j))
    }
}

/// Get the library version.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
