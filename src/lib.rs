//! # Langton's Ant
//!
//! Multi-ant Langton's Ant simulator on an unbounded sparse grid, with a
//! pannable, zoomable viewport.
//!
//! ## Features
//!
//! - **Unbounded**: sparse grid, only visited cells are materialized
//! - **Multi-ant**: any number of ants share one grid, added and removed live
//! - **Fractional speed**: 0.1x to 10x ticks per frame, probabilistic remainder
//! - **Reproducible**: seeded random number generation
//! - **Configurable**: YAML configuration files
//!
//! ## Quick Start
//!
//! ```rust
//! use langton::{Config, Simulation, Viewport};
//!
//! let config = Config::default();
//! let viewport = Viewport::new(config.viewport.clone());
//! let mut sim = Simulation::new(config);
//!
//! // Spawn one ant at the cell under the canvas center, then run.
//! let (x, y) = viewport.center_cell(800.0, 600.0);
//! sim.add_ant(x, y);
//! sim.run(10_000);
//!
//! println!("{}", sim.stats().summary());
//! ```
//!
//! ## Rendering
//!
//! ```rust
//! use langton::{Config, Renderer, Simulation, Viewport};
//!
//! let config = Config::default();
//! let viewport = Viewport::new(config.viewport.clone());
//! let mut sim = Simulation::new(config);
//! sim.add_ant(0, 0);
//! sim.run(100);
//!
//! let renderer = Renderer::new();
//! let rects = renderer.draw(&sim.grid, sim.ants(), &viewport, (800.0, 600.0));
//! assert!(!rects.is_empty());
//! ```

pub mod ant;
pub mod config;
pub mod grid;
pub mod render;
pub mod simulation;
pub mod stats;
pub mod viewport;

#[cfg(feature = "gui")]
pub mod gui;

// Re-export main types
pub use ant::{Ant, Heading};
pub use config::Config;
pub use grid::Grid;
pub use render::{DrawRect, Renderer};
pub use simulation::Simulation;
pub use stats::Stats;
pub use viewport::Viewport;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Run a quick benchmark
pub fn benchmark(frames: u64, ants: usize) -> BenchmarkResult {
    use std::time::Instant;

    let config = Config::default();
    let mut sim = Simulation::new_with_seed(config, 42);
    for _ in 0..ants {
        sim.add_ant(0, 0);
    }

    let start = Instant::now();
    sim.run(frames);
    let elapsed = start.elapsed();

    BenchmarkResult {
        frames,
        ants,
        cells: sim.grid.len(),
        elapsed_secs: elapsed.as_secs_f64(),
        frames_per_second: frames as f64 / elapsed.as_secs_f64(),
    }
}

/// Benchmark result
#[derive(Debug, Clone)]
pub struct BenchmarkResult {
    pub frames: u64,
    pub ants: usize,
    pub cells: usize,
    pub elapsed_secs: f64,
    pub frames_per_second: f64,
}

impl std::fmt::Display for BenchmarkResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "=== Benchmark Results ===")?;
        writeln!(f, "Frames: {}", self.frames)?;
        writeln!(f, "Ants: {}", self.ants)?;
        writeln!(f, "Cells visited: {}", self.cells)?;
        writeln!(f, "Time: {:.3}s", self.elapsed_secs)?;
        writeln!(f, "Speed: {:.1} frames/s", self.frames_per_second)?;
        Ok(())
    }
}
