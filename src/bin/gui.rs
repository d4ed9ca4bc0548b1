//! Langton's Ant GUI entry point
//!
//! Run with: `cargo run --features gui --bin langton-gui`

use langton::config::Config;
use langton::gui::run_gui;

fn main() -> eframe::Result<()> {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Load config or use default
    let config = load_config();

    log::info!("Starting Langton's Ant GUI");
    log::info!(
        "Speed range: {:.1}x - {:.1}x, zoom range: {:.1} - {:.1}",
        config.simulation.min_speed,
        config.simulation.max_speed,
        config.viewport.min_zoom,
        config.viewport.max_zoom
    );

    run_gui(config)
}

/// Load configuration from file or use default
fn load_config() -> Config {
    // Try to load from common locations
    let paths = ["config.yaml", "langton.yaml", "../config.yaml"];

    for path in paths {
        if let Ok(config) = Config::from_file(path) {
            log::info!("Loaded config from: {}", path);
            return config;
        }
    }

    log::info!("Using default configuration");
    Config::default()
}
