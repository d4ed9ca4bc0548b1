//! Simulation engine - ant transition rule and stepping policy.

use crate::ant::{Ant, Heading};
use crate::config::Config;
use crate::grid::Grid;
use crate::stats::Stats;
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

/// The simulation: one shared grid walked by any number of ants.
///
/// Ants are kept in insertion order; that order fixes both the sequence in
/// which they advance within a tick and their display color. All randomness
/// (initial headings, the fractional-speed draw) comes from one seeded RNG,
/// so runs are reproducible via [`Simulation::new_with_seed`].
pub struct Simulation {
    /// Cell states, sparse and unbounded
    pub grid: Grid,

    /// Frames processed so far (each tick advances every ant once)
    pub steps: u64,

    /// Configuration
    pub config: Config,

    // Ant list (insertion order is meaningful)
    ants: Vec<Ant>,

    // Logical ticks requested per step() call, clamped
    speed: f64,

    // Random number generator (seeded for reproducibility)
    rng: ChaCha8Rng,
    seed: u64,
}

impl Simulation {
    /// Create an empty simulation with the given configuration.
    ///
    /// No ant is added; the driver spawns the first one at the viewport
    /// center via [`add_ant`](Simulation::add_ant).
    pub fn new(config: Config) -> Self {
        let seed = rand::thread_rng().gen();
        Self::new_with_seed(config, seed)
    }

    /// Create a simulation with a specific seed for reproducibility.
    pub fn new_with_seed(config: Config, seed: u64) -> Self {
        let rng = ChaCha8Rng::seed_from_u64(seed);
        let speed = config.simulation.initial_speed;

        Self {
            grid: Grid::new(),
            steps: 0,
            config,
            ants: Vec::new(),
            speed,
            rng,
            seed,
        }
    }

    /// Advance the simulation by one frame.
    ///
    /// Performs `floor(speed)` full ticks, then one extra tick with
    /// probability `speed - floor(speed)`. The fractional decision is a
    /// single random draw per call, so at non-integer speeds the long-run
    /// tick rate converges to `speed` while any individual call performs
    /// either `floor(speed)` or `floor(speed) + 1` ticks.
    pub fn step(&mut self) {
        let whole = self.speed.floor() as u64;
        let frac = self.speed - self.speed.floor();

        for _ in 0..whole {
            self.tick();
        }

        if frac > 0.0 && self.rng.gen::<f64>() < frac {
            self.tick();
        }
    }

    /// One tick: advance every ant once, in list order.
    fn tick(&mut self) {
        for index in 0..self.ants.len() {
            self.advance(index);
        }
        self.steps += 1;
    }

    /// Apply the Langton's Ant rule to a single ant.
    ///
    /// The turn decision reads the pre-flip cell state, the flip happens
    /// before the move, and the move uses the post-turn heading. Reordering
    /// any of these changes the emergent pattern.
    fn advance(&mut self, index: usize) {
        let ant = self.ants[index];
        let on = self.grid.get(ant.x, ant.y);

        let heading = if on {
            ant.heading.turned_left()
        } else {
            ant.heading.turned_right()
        };

        self.grid.set(ant.x, ant.y, !on);

        let (dx, dy) = heading.offset();
        self.ants[index] = Ant::new(ant.x + dx, ant.y + dy, heading);
    }

    /// Append an ant at the given cell with a uniformly random heading.
    ///
    /// The driver passes the grid cell at the current viewport center.
    pub fn add_ant(&mut self, x: i64, y: i64) {
        let heading = Heading::from_index(self.rng.gen_range(0..4));
        self.add_ant_with_heading(x, y, heading);
    }

    /// Append an ant with an explicit heading.
    pub fn add_ant_with_heading(&mut self, x: i64, y: i64, heading: Heading) {
        self.ants.push(Ant::new(x, y, heading));
        log::debug!(
            "ant added at ({}, {}) facing {:?} ({} total)",
            x,
            y,
            heading,
            self.ants.len()
        );
    }

    /// Remove the most recently added ant.
    ///
    /// No-op when exactly one ant remains; the simulation never drops to
    /// zero ants except through [`reset`](Simulation::reset).
    pub fn remove_ant(&mut self) {
        if self.ants.len() > 1 {
            self.ants.pop();
        }
    }

    /// Clear the grid and ants, restore initial speed, zero the step
    /// counter, and spawn a single fresh ant at the given cell.
    pub fn reset(&mut self, spawn_x: i64, spawn_y: i64) {
        self.grid.clear();
        self.ants.clear();
        self.speed = self.config.simulation.initial_speed;
        self.add_ant(spawn_x, spawn_y);
        self.steps = 0;
        log::info!("simulation reset, ant spawned at ({}, {})", spawn_x, spawn_y);
    }

    /// Set the speed, clamped into `[min_speed, max_speed]`.
    ///
    /// Out-of-range values are clamped silently, never rejected.
    pub fn set_speed(&mut self, speed: f64) {
        self.speed = speed.clamp(
            self.config.simulation.min_speed,
            self.config.simulation.max_speed,
        );
    }

    /// Current speed in logical ticks per frame.
    #[inline]
    pub fn speed(&self) -> f64 {
        self.speed
    }

    /// Ants in insertion order.
    #[inline]
    pub fn ants(&self) -> &[Ant] {
        &self.ants
    }

    /// Number of ants.
    #[inline]
    pub fn ant_count(&self) -> usize {
        self.ants.len()
    }

    /// Seed for reproducibility.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Drive the frame loop for the given number of frames.
    pub fn run(&mut self, frames: u64) {
        for _ in 0..frames {
            self.step();
        }
    }

    /// Snapshot of the pull-based counters.
    pub fn stats(&self) -> Stats {
        Stats {
            steps: self.steps,
            ants: self.ants.len(),
            cells: self.grid.len(),
            speed: self.speed,
        }
    }
}
