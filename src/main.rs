//! Langton's Ant - CLI entry point
//!
//! Headless runs, benchmarks, and config generation.

use clap::{Parser, Subcommand};
use langton::{benchmark, Config, Simulation};
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "langton")]
#[command(version)]
#[command(about = "Multi-ant Langton's Ant simulator on an unbounded grid")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a headless simulation
    Run {
        /// Configuration file (YAML)
        #[arg(short, long, default_value = "config.yaml")]
        config: PathBuf,

        /// Number of frames to simulate
        #[arg(short, long, default_value = "10000")]
        steps: u64,

        /// Extra ants to add beside the initial one
        #[arg(short, long, default_value = "0")]
        ants: usize,

        /// Speed in ticks per frame (clamped into the configured range)
        #[arg(long)]
        speed: Option<f64>,

        /// Random seed for reproducibility
        #[arg(long)]
        seed: Option<u64>,

        /// Quiet mode (minimal output)
        #[arg(short, long)]
        quiet: bool,
    },

    /// Run performance benchmark
    Benchmark {
        /// Number of frames
        #[arg(short, long, default_value = "100000")]
        steps: u64,

        /// Number of ants
        #[arg(short, long, default_value = "1")]
        ants: usize,
    },

    /// Generate default configuration file
    Init {
        /// Output path
        #[arg(short, long, default_value = "config.yaml")]
        output: PathBuf,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            config,
            steps,
            ants,
            speed,
            seed,
            quiet,
        } => run_simulation(config, steps, ants, speed, seed, quiet),

        Commands::Benchmark { steps, ants } => run_benchmark(steps, ants),

        Commands::Init { output } => generate_config(output),
    }
}

fn run_simulation(
    config_path: PathBuf,
    steps: u64,
    extra_ants: usize,
    speed: Option<f64>,
    seed: Option<u64>,
    quiet: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    // Load or create config
    let config = if config_path.exists() {
        println!("Loading config from: {:?}", config_path);
        Config::from_file(&config_path)?
    } else {
        println!("Using default configuration");
        Config::default()
    };

    let stats_interval = config.logging.stats_interval;

    let mut sim = if let Some(s) = seed {
        println!("Using seed: {}", s);
        Simulation::new_with_seed(config, s)
    } else {
        Simulation::new(config)
    };

    // Headless runs have no canvas; the first ant spawns at the origin,
    // matching a fresh viewport centered there.
    sim.add_ant(0, 0);
    for _ in 0..extra_ants {
        sim.add_ant(0, 0);
    }
    if let Some(v) = speed {
        sim.set_speed(v);
    }

    println!("Starting simulation");
    println!("  Ants: {}", sim.ant_count());
    println!("  Speed: {:.1}x", sim.speed());
    println!("  Frames: {}", steps);
    println!();

    let start = Instant::now();

    for i in 0..steps {
        sim.step();

        if !quiet && i % stats_interval == 0 {
            println!("{}", sim.stats().summary());
        }
    }

    let elapsed = start.elapsed();
    let frames_per_sec = steps as f64 / elapsed.as_secs_f64();

    println!();
    println!("=== Simulation Complete ===");
    println!("Time: {:.2}s", elapsed.as_secs_f64());
    println!("Ticks: {}", sim.steps);
    println!("Speed: {:.1} frames/s", frames_per_sec);
    println!("Cells visited: {}", sim.grid.len());
    println!("Ants: {}", sim.ant_count());

    Ok(())
}

fn run_benchmark(steps: u64, ants: usize) -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Langton's Ant Benchmark ===");
    println!("Frames: {}", steps);
    println!("Ants: {}", ants);
    println!();

    let result = benchmark(steps, ants);
    println!("{}", result);

    Ok(())
}

fn generate_config(output: PathBuf) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::default();
    config.save(&output)?;
    println!("Configuration saved to: {:?}", output);
    Ok(())
}
