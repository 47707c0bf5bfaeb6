//! Emitter definitions - JSON persistence
//!
//! Authoring tools keep vision emitters as small JSON documents: a name,
//! a ground-plane placement, the obstacle mask, and the shape parameters.
//! Fields use `#[serde(default)]` so adding parameters won't break
//! existing files.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::pose::Pose;
use crate::probe::ObstacleMask;
use crate::shapes::{CircleParams, ShapeParams};

/// Errors from loading or saving emitter definitions
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read or write config: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// One persisted vision emitter
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmitterConfig {
    /// Display name
    pub name: String,
    /// Ground-plane position (x, y, z)
    pub position: [f32; 3],
    /// Facing around +Y, in degrees
    pub yaw_degrees: f32,
    /// Obstacle layers this emitter tests against
    pub mask: ObstacleMask,
    /// Shape parameterization
    pub shape: ShapeParams,
}

impl Default for EmitterConfig {
    fn default() -> Self {
        Self {
            name: "emitter".to_string(),
            position: [0.0, 0.0, 0.0],
            yaw_degrees: 0.0,
            mask: ObstacleMask::ALL,
            shape: ShapeParams::Circle(CircleParams::default()),
        }
    }
}

impl EmitterConfig {
    /// The emitter's pose
    pub fn pose(&self) -> Pose {
        Pose::from_yaw(
            nalgebra::Point3::new(self.position[0], self.position[1], self.position[2]),
            self.yaw_degrees,
        )
    }

    /// Load a definition from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Load a definition, falling back to defaults on any error
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::load(path) {
            Ok(config) => {
                log::info!("loaded emitter config from {}", path.display());
                config
            }
            Err(e) => {
                log::warn!("failed to load {} ({e}), using defaults", path.display());
                Self::default()
            }
        }
    }

    /// Save the definition as pretty JSON
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::RhombusParams;

    #[test]
    fn test_json_round_trip() {
        let config = EmitterConfig {
            name: "guard-tower".to_string(),
            position: [4.0, 0.0, -1.5],
            yaw_degrees: 90.0,
            mask: ObstacleMask::layer(2),
            shape: ShapeParams::Rhombus(RhombusParams::default()),
        };

        let json = serde_json::to_string_pretty(&config).unwrap();
        let back: EmitterConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, back);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let config: EmitterConfig = serde_json::from_str(r#"{ "name": "patrol" }"#).unwrap();
        assert_eq!(config.name, "patrol");
        assert_eq!(config.mask, ObstacleMask::ALL);
        assert!(matches!(config.shape, ShapeParams::Circle(_)));
    }

    #[test]
    fn test_pose_carries_placement() {
        let config = EmitterConfig {
            position: [3.0, 0.0, -2.0],
            yaw_degrees: 90.0,
            ..Default::default()
        };
        let pose = config.pose();
        assert_eq!(pose.position, nalgebra::Point3::new(3.0, 0.0, -2.0));

        // +90 degrees of yaw turns local +Z into world +X.
        let forward = pose.rotate(nalgebra::Vector3::z());
        assert!((forward.x - 1.0).abs() < 1e-5);
        assert!(forward.z.abs() < 1e-5);
    }

    #[test]
    fn test_load_or_default_on_missing_file() {
        let config = EmitterConfig::load_or_default("/definitely/not/here.json");
        assert_eq!(config, EmitterConfig::default());
    }
}
