//! Step throughput per tessellation/neighborhood, serial against parallel

use std::time::Instant;

use rand::SeedableRng;
use rand::rngs::StdRng;
use hex_life::{Algorithm, Grid, Neighborhood, Rule, Tessellation};

fn benchmark(
    algorithm: Algorithm,
    tessellation: Tessellation,
    neighborhood: Neighborhood,
    size: usize,
    iterations: u32,
) -> f64 {
    let mut rng = StdRng::seed_from_u64(0xC0FFEE);
    let mut grid = Grid::new(tessellation, neighborhood, true, size, size);
    if let Err(err) = grid.randomize(0.3, &mut rng) {
        eprintln!("{}", err);
        return 0.0;
    }
    let rule = Rule::conway();

    let start = Instant::now();
    for _ in 0..iterations {
        algorithm.step(&mut grid, &rule);
    }
    start.elapsed().as_secs_f64() * 1000.0 / iterations as f64
}

fn main() {
    println!("=== Tessellated Life Step Benchmark ===\n");

    let sizes = [100, 500, 1000, 2000];
    let iterations = 20;

    println!(
        "{:>12} {:>18} {:>12} {:>12} {:>10}",
        "Size", "Neighborhood", "Serial", "Parallel", "Speedup"
    );
    println!("{:-<68}", "");

    for size in sizes {
        for neighborhood in Neighborhood::all() {
            let tessellation = neighborhood.native_tessellation();
            let serial_ms = benchmark(Algorithm::Serial, tessellation, neighborhood, size, iterations);
            let parallel_ms = benchmark(Algorithm::Parallel, tessellation, neighborhood, size, iterations);

            let speedup = if parallel_ms > 0.0 {
                format!("{:>9.1}x", serial_ms / parallel_ms)
            } else {
                format!("{:>10}", "-")
            };

            println!(
                "{:>12} {:>18} {:>12.2} {:>12.2} {}",
                format!("{}x{}", size, size),
                neighborhood.name(),
                serial_ms,
                parallel_ms,
                speedup
            );
        }
    }

    println!("\n=== Throughput at 2000x2000, Hex star ===\n");

    let cells = 2000 * 2000;
    let parallel_ms = benchmark(Algorithm::Parallel, Tessellation::Hexagonal, Neighborhood::HexStar, 2000, 10);
    println!(
        "Parallel:    {:.2} ms/gen, {:.1}M cells/sec",
        parallel_ms,
        (cells as f64) / (parallel_ms / 1000.0) / 1_000_000.0
    );
}
