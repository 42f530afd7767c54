//! Configuration for the planners.
//!
//! All parameters have defaults matching the documented cost and geometry
//! model; sections can be overridden individually from YAML.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Serde default helpers
mod defaults {
    pub fn diagonal_cost() -> f32 {
        std::f32::consts::SQRT_2
    }

    pub fn max_turn_factor() -> f32 {
        4.0
    }

    pub fn turning_radius() -> f32 {
        5.5
    }

    pub fn boundary_nudge() -> f32 {
        0.01
    }
}

/// Discrete A* settings
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct AStarSettings {
    /// Cost multiplier for diagonal moves (sqrt(2))
    #[serde(default = "defaults::diagonal_cost")]
    pub diagonal_cost: f32,

    /// Step-cost multiplier reached at a full 180° direction change.
    /// The penalty ramps linearly from 1.0 at 90° to this value at 180°.
    #[serde(default = "defaults::max_turn_factor")]
    pub max_turn_factor: f32,
}

impl Default for AStarSettings {
    fn default() -> Self {
        Self {
            diagonal_cost: std::f32::consts::SQRT_2,
            max_turn_factor: 4.0,
        }
    }
}

/// Curvature-constrained search settings
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct CurvatureSettings {
    /// Turning radius in tile units
    #[serde(default = "defaults::turning_radius")]
    pub turning_radius: f32,

    /// Distance a new pose is nudged off the tile boundary along its
    /// heading, to avoid numerical sticking exactly on an edge
    #[serde(default = "defaults::boundary_nudge")]
    pub boundary_nudge: f32,
}

impl Default for CurvatureSettings {
    fn default() -> Self {
        Self {
            turning_radius: 5.5,
            boundary_nudge: 0.01,
        }
    }
}

/// Full planner configuration
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize)]
pub struct PlannerConfig {
    /// Discrete A* settings
    #[serde(default)]
    pub astar: AStarSettings,

    /// Curvature-constrained search settings
    #[serde(default)]
    pub curvature: CurvatureSettings,
}

impl PlannerConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: &std::path::Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io(e.to_string()))?;
        Self::from_yaml(&contents)
    }

    /// Load configuration from a YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        serde_yaml::from_str(yaml).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Save configuration to a YAML file
    pub fn to_yaml_file(&self, path: &std::path::Path) -> Result<(), ConfigError> {
        let yaml = self.to_yaml()?;
        std::fs::write(path, yaml).map_err(|e| ConfigError::Io(e.to_string()))
    }

    /// Serialize to YAML string
    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        serde_yaml::to_string(self).map_err(|e| ConfigError::Parse(e.to_string()))
    }
}

/// Configuration error type
#[derive(Error, Debug, Clone)]
pub enum ConfigError {
    /// File I/O error
    #[error("IO error: {0}")]
    Io(String),

    /// YAML parsing error
    #[error("Parse error: {0}")]
    Parse(String),
}
