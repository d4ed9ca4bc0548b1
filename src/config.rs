//! Configuration system for the simulator.
//!
//! Supports YAML configuration files with sensible defaults.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub simulation: SimulationConfig,
    pub viewport: ViewportConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Simulation speed configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Speed after startup and after a reset
    pub initial_speed: f64,
    /// Lower clamp for the speed control
    pub min_speed: f64,
    /// Upper clamp for the speed control
    pub max_speed: f64,
    /// Granularity of the speed slider
    pub speed_step: f64,
}

/// Viewport/zoom configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViewportConfig {
    /// Cell edge length in pixels at zoom 1.0
    pub base_cell_size: f64,
    /// Smallest accepted zoom level
    pub min_zoom: f64,
    /// Largest accepted zoom level
    pub max_zoom: f64,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Frames between stats lines in headless runs
    pub stats_interval: u64,
    /// Log level (error, warn, info, debug, trace)
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            simulation: SimulationConfig::default(),
            viewport: ViewportConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            initial_speed: 1.0,
            min_speed: 0.1,
            max_speed: 10.0,
            speed_step: 0.1,
        }
    }
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            base_cell_size: 4.0,
            min_zoom: 0.5,
            max_zoom: 5.0,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            stats_interval: 1000,
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn std::error::Error>> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a YAML file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), Box<dyn std::error::Error>> {
        let yaml = serde_yaml::to_string(self)?;
        std::fs::write(path, yaml)?;
        Ok(())
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), String> {
        if self.simulation.min_speed <= 0.0 {
            return Err("min_speed must be > 0".to_string());
        }
        if self.simulation.min_speed > self.simulation.max_speed {
            return Err("min_speed cannot exceed max_speed".to_string());
        }
        if self.simulation.initial_speed < self.simulation.min_speed
            || self.simulation.initial_speed > self.simulation.max_speed
        {
            return Err("initial_speed must lie within [min_speed, max_speed]".to_string());
        }
        if self.simulation.speed_step <= 0.0 {
            return Err("speed_step must be > 0".to_string());
        }
        if self.viewport.base_cell_size <= 0.0 {
            return Err("base_cell_size must be > 0".to_string());
        }
        if self.viewport.min_zoom <= 0.0 {
            return Err("min_zoom must be > 0".to_string());
        }
        if self.viewport.min_zoom > self.viewport.max_zoom {
            return Err("min_zoom cannot exceed max_zoom".to_string());
        }
        if self.logging.stats_interval == 0 {
            return Err("stats_interval must be > 0".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_default_matches_reference_constants() {
        let config = Config::default();
        assert_eq!(config.simulation.min_speed, 0.1);
        assert_eq!(config.simulation.max_speed, 10.0);
        assert_eq!(config.viewport.base_cell_size, 4.0);
        assert_eq!(config.viewport.min_zoom, 0.5);
        assert_eq!(config.viewport.max_zoom, 5.0);
    }

    #[test]
    fn test_config_roundtrip() {
        let config = Config::default();
        let yaml = serde_yaml::to_string(&config).unwrap();
        let loaded: Config = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(config.viewport.base_cell_size, loaded.viewport.base_cell_size);
        assert_eq!(config.simulation.max_speed, loaded.simulation.max_speed);
    }

    #[test]
    fn test_invalid_speed_range_rejected() {
        let mut config = Config::default();
        config.simulation.min_speed = 5.0;
        config.simulation.max_speed = 2.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_zoom_rejected() {
        let mut config = Config::default();
        config.viewport.min_zoom = 0.0;
        assert!(config.validate().is_err());
    }
}
