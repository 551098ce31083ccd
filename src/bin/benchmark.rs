//! Times serial against parallel stepping to pick PARALLEL_THRESHOLD

use std::time::Instant;
use life_grid::domain::{Cell, Grid, GridCoord, PARALLEL_THRESHOLD, presets};

/// Long rows tiled over the field give a busy, reproducible soup
fn seeded_grid(size: usize) -> Grid {
    let mut grid = Grid::new(size, size);
    let row = presets::long_row();
    for cy in (2..size as i32).step_by(6) {
        for cx in (20..size as i32).step_by(42) {
            row.place_on(&mut grid, GridCoord::new(cx, cy));
        }
    }
    // Break the symmetry so the soup does not settle quickly
    for i in 0..size as i32 {
        grid.set_cell(GridCoord::new((i * 7) % size as i32, i), Cell::Alive);
    }
    grid
}

fn time_steps(size: usize, iterations: u32, step: fn(&Grid) -> Grid) -> f64 {
    let mut grid = seeded_grid(size);
    let start = Instant::now();
    for _ in 0..iterations {
        grid = step(&grid);
    }
    start.elapsed().as_secs_f64() * 1000.0 / iterations as f64
}

fn main() {
    println!("=== Step benchmark (threshold {} cells) ===\n", PARALLEL_THRESHOLD);
    println!("{:>10} {:>12} {:>12} {:>10}", "Size", "Serial", "Parallel", "Speedup");
    println!("{:-<48}", "");

    let iterations = 20;
    for size in [30, 64, 128, 256, 512, 1024] {
        let serial_ms = time_steps(size, iterations, Grid::evolve);
        let parallel_ms = time_steps(size, iterations, Grid::evolve_parallel);
        println!(
            "{:>10} {:>10.3}ms {:>10.3}ms {:>9.1}x",
            format!("{}x{}", size, size),
            serial_ms,
            parallel_ms,
            serial_ms / parallel_ms
        );
    }
}
