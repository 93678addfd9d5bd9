//! Simulation configuration
//!
//! Stored as JSON. Every field has a default, so a partial file only needs
//! the values it changes.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sim::{Arena, BodyError};
pub use crate::sim::PairMode;

/// Errors loading or validating a configuration
#[derive(Debug)]
pub enum ConfigError {
    /// A value is out of its allowed range
    Invalid(String),
    /// A body could not be built from the configuration
    Body(BodyError),
    /// Standard I/O error
    IoError(std::io::Error),
    /// JSON serialization/deserialization error
    JsonError(serde_json::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Invalid(msg) => write!(f, "invalid config: {msg}"),
            ConfigError::Body(e) => write!(f, "invalid body: {e}"),
            ConfigError::IoError(e) => write!(f, "IO error: {e}"),
            ConfigError::JsonError(e) => write!(f, "JSON error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Body(e) => Some(e),
            ConfigError::IoError(e) => Some(e),
            ConfigError::JsonError(e) => Some(e),
            ConfigError::Invalid(_) => None,
        }
    }
}

impl From<BodyError> for ConfigError {
    fn from(e: BodyError) -> Self {
        ConfigError::Body(e)
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::IoError(e)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::JsonError(e)
    }
}

/// Simulation parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    // === Arena ===
    pub arena_width: f32,
    pub arena_height: f32,

    // === Physics ===
    /// Fraction of relative normal speed kept after a hit (0.0 - 1.0)
    pub restitution: f32,
    /// Integration sub-steps per frame
    pub substeps: u32,
    /// Simulated time per frame
    pub frame_time: f32,
    /// Pair enumeration order
    pub pair_mode: PairMode,

    // === Population ===
    pub body_count: usize,
    /// Inclusive radius range, whole units
    pub radius_range: (u32, u32),
    /// Inclusive range for each velocity component, whole units
    pub speed_range: (u32, u32),
    /// RNG seed for initial placement
    pub seed: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            arena_width: ARENA_WIDTH,
            arena_height: ARENA_HEIGHT,

            restitution: RESTITUTION,
            substeps: SUBSTEPS,
            frame_time: FRAME_TIME,
            pair_mode: PairMode::Ordered,

            body_count: BODY_COUNT,
            radius_range: (MIN_RADIUS, MAX_RADIUS),
            speed_range: (MIN_SPEED, MAX_SPEED),
            seed: 0,
        }
    }
}

impl SimConfig {
    /// Arena bounds described by this config
    pub fn arena(&self) -> Arena {
        Arena::new(self.arena_width, self.arena_height)
    }

    /// Check every value is usable by the simulation
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = |v: f32| v.is_finite() && v > 0.0;

        if !positive(self.arena_width) || !positive(self.arena_height) {
            return Err(ConfigError::Invalid(format!(
                "arena must have positive size, got {}x{}",
                self.arena_width, self.arena_height
            )));
        }
        if !(0.0..=1.0).contains(&self.restitution) {
            return Err(ConfigError::Invalid(format!(
                "restitution must be within [0, 1], got {}",
                self.restitution
            )));
        }
        if self.substeps == 0 {
            return Err(ConfigError::Invalid("substeps must be at least 1".into()));
        }
        if !positive(self.frame_time) {
            return Err(ConfigError::Invalid(format!(
                "frame_time must be positive, got {}",
                self.frame_time
            )));
        }
        if self.body_count > MAX_BODY_COUNT {
            return Err(ConfigError::Invalid(format!(
                "body_count must be at most {MAX_BODY_COUNT}, got {}",
                self.body_count
            )));
        }
        let (min_r, max_r) = self.radius_range;
        if min_r == 0 || min_r > max_r {
            return Err(ConfigError::Invalid(format!(
                "radius_range must be non-empty and positive, got {min_r}..={max_r}"
            )));
        }
        let (min_v, max_v) = self.speed_range;
        if min_v > max_v {
            return Err(ConfigError::Invalid(format!(
                "speed_range must be non-empty, got {min_v}..={max_v}"
            )));
        }
        Ok(())
    }

    /// Parse and validate a JSON config
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Pretty-printed JSON form
    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load a config file from disk
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Write this config to disk
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        std::fs::write(path, self.to_json()?)?;
        log::info!("Config saved to {}", path.display());
        Ok(())
    }
}
