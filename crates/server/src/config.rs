//! Server configuration.

use quadtree::Boundary;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

/// Root configuration structure.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub world: WorldConfig,
    #[serde(default)]
    pub fleet: FleetConfig,
    #[serde(default)]
    pub search: SearchConfig,
}

impl Config {
    /// Load configuration from `config.toml` or use defaults.
    pub fn load() -> anyhow::Result<Self> {
        let path = Path::new("config.toml");
        if path.exists() {
            let contents = std::fs::read_to_string(path)?;
            Ok(toml::from_str(&contents)?)
        } else {
            info!("No config.toml found, creating default config");
            let default_config = Self::default();
            std::fs::write(path, toml::to_string_pretty(&default_config)?)?;
            Ok(default_config)
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            world: WorldConfig::default(),
            fleet: FleetConfig::default(),
            search: SearchConfig::default(),
        }
    }
}

/// HTTP listener settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
    /// Bind address.
    #[serde(default = "default_bind")]
    pub bind: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            bind: default_bind(),
        }
    }
}

fn default_port() -> u16 {
    8080
}
fn default_bind() -> String {
    "0.0.0.0".to_string()
}

/// The planar world the index covers, centered on the origin.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct WorldConfig {
    /// Half-extent along X (longitude).
    #[serde(default = "default_half_width")]
    pub half_width: f64,
    /// Half-extent along Y (latitude).
    #[serde(default = "default_half_height")]
    pub half_height: f64,
    /// Points a tree leaf may hold before it splits.
    #[serde(default = "default_bucket_capacity")]
    pub bucket_capacity: usize,
}

impl WorldConfig {
    /// The world as an index boundary.
    pub fn boundary(&self) -> Boundary {
        Boundary::new(0.0, 0.0, self.half_width, self.half_height)
    }
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            half_width: default_half_width(),
            half_height: default_half_height(),
            bucket_capacity: default_bucket_capacity(),
        }
    }
}

fn default_half_width() -> f64 {
    180.0
}
fn default_half_height() -> f64 {
    90.0
}
fn default_bucket_capacity() -> usize {
    4
}

/// Driver fleet simulation settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FleetConfig {
    /// Number of simulated drivers.
    #[serde(default = "default_drivers")]
    pub drivers: usize,
    /// Milliseconds between relocations.
    #[serde(default = "default_move_interval")]
    pub move_interval_ms: u64,
    /// Upper bound on the random startup stagger, in milliseconds.
    #[serde(default = "default_max_spawn_delay")]
    pub max_spawn_delay_ms: u64,
    /// Width of the uniform wander step per relocation.
    #[serde(default = "default_step_range")]
    pub step_range: f64,
}

impl Default for FleetConfig {
    fn default() -> Self {
        Self {
            drivers: default_drivers(),
            move_interval_ms: default_move_interval(),
            max_spawn_delay_ms: default_max_spawn_delay(),
            step_range: default_step_range(),
        }
    }
}

fn default_drivers() -> usize {
    10_000
}
fn default_move_interval() -> u64 {
    2_000
}
fn default_max_spawn_delay() -> u64 {
    5_000
}
fn default_step_range() -> f64 {
    0.1
}

/// Half-extents of the nearby-search rectangle.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SearchConfig {
    #[serde(default = "default_search_radius")]
    pub radius_x: f64,
    #[serde(default = "default_search_radius")]
    pub radius_y: f64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            radius_x: default_search_radius(),
            radius_y: default_search_radius(),
        }
    }
}

fn default_search_radius() -> f64 {
    20.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_cover_the_reference_world() {
        let config = Config::default();
        let world = config.world.boundary();

        assert_eq!(world.min_x(), -180.0);
        assert_eq!(world.max_x(), 180.0);
        assert_eq!(world.min_y(), -90.0);
        assert_eq!(world.max_y(), 90.0);
        assert_eq!(config.world.bucket_capacity, 4);
    }

    #[test]
    fn partial_toml_fills_in_defaults() {
        let config: Config = toml::from_str(
            r#"
            [server]
            port = 9000

            [fleet]
            drivers = 25
            "#,
        )
        .expect("partial config should parse");

        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.bind, "0.0.0.0");
        assert_eq!(config.fleet.drivers, 25);
        assert_eq!(config.fleet.move_interval_ms, 2_000);
        assert_eq!(config.search.radius_x, 20.0);
    }
}
