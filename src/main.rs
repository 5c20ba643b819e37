//! Relax - parallel-plate capacitor potential solver
//!
//! Solves Laplace's equation for two charged plates in a grounded box and
//! reports how many sweeps the chosen method needed.
//!
//! # Usage
//!
//! ```bash
//! relax --size 100 --tolerance 1e-5 --plate-size 10 --method jacobi
//! ```

use std::time::Instant;

use clap::Parser;
use laplace_plates::{
    error::Result,
    solver::{
        Action, Event, DEFAULT_GRID_SIZE, DEFAULT_PLATE_SIZE, DEFAULT_TOLERANCE, DEFAULT_V1,
        DEFAULT_V2,
    },
    solve_observed, Method, SolverConfig,
};

/// Parallel-plate capacitor potential solver
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Linear grid size N (the grid has (N+1)x(N+1) points)
    #[arg(short = 'n', long, default_value_t = DEFAULT_GRID_SIZE)]
    size: usize,

    /// Convergence tolerance on the largest per-cell change
    #[arg(short, long, default_value_t = DEFAULT_TOLERANCE)]
    tolerance: f64,

    /// Linear capacitor size L used to place the plates
    #[arg(short = 'l', long, default_value_t = DEFAULT_PLATE_SIZE)]
    plate_size: usize,

    /// Potential of the left plate
    #[arg(long, default_value_t = DEFAULT_V1, allow_negative_numbers = true)]
    v1: f64,

    /// Potential of the right plate
    #[arg(long, default_value_t = DEFAULT_V2, allow_negative_numbers = true)]
    v2: f64,

    /// Relaxation method
    #[arg(short, long, value_enum, default_value_t = Method::GaussSeidel)]
    method: Method,

    /// Give up after this many sweeps
    #[arg(long)]
    max_iterations: Option<usize>,

    /// Print the delta to stderr every this many sweeps
    #[arg(long, value_name = "EVERY")]
    progress: Option<usize>,

    /// Print the final grid to stdout, one row per line
    #[arg(long)]
    print_grid: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = SolverConfig::new()
        .with_size(args.size)
        .with_tolerance(args.tolerance)
        .with_plate_size(args.plate_size)
        .with_voltages(args.v1, args.v2);
    if let Some(cap) = args.max_iterations {
        config = config.with_max_iterations(cap);
    }

    eprintln!(
        "Solving Laplace's equation on a {0}x{0} grid with {1} (tolerance {2:e})...",
        args.size + 1,
        args.method,
        args.tolerance
    );

    let every = args.progress.filter(|&k| k > 0);
    let started = Instant::now();
    let result = solve_observed(args.method, &config, |event: &Event| -> Option<Action> {
        if let Some(k) = every {
            if event.iteration % k == 0 {
                eprintln!("  sweep {:>8}  delta {:.3e}", event.iteration, event.delta);
            }
        }
        None
    })?;
    let elapsed = started.elapsed();

    println!("Tolerance reached after {} iterations.", result.iterations());
    eprintln!("Final delta: {:.3e}", result.final_delta());
    eprintln!("Time to complete loop: {:.3} s", elapsed.as_secs_f64());

    if args.print_grid {
        print!("{:.6}", result.grid());
    }

    Ok(())
}
