use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::gameplay::{CollectionRules, DeliveryPolicy, DeliveryRules};

/// Optional overrides, relative to the working directory.
pub const CONFIG_PATH: &str = "assets/config/game.json";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid value for {field}: {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

/// Position and uniform scale of a scene object.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    pub position: [f32; 3],
    pub scale: f32,
}

impl Placement {
    pub const fn new(x: f32, y: f32, z: f32, scale: f32) -> Self {
        Self {
            position: [x, y, z],
            scale,
        }
    }

    pub fn translation(&self) -> Vec3 {
        Vec3::from_array(self.position)
    }

    pub fn transform(&self) -> Transform {
        Transform::from_translation(self.translation()).with_scale(Vec3::splat(self.scale))
    }
}

#[derive(Resource, Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub collection: CollectionConfig,
    pub delivery: DeliveryConfig,
}

/// Halloween forest: gather pumpkins before midnight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CollectionConfig {
    pub time_limit_secs: f32,
    pub pickup_radius: f32,
    pub collectible_count: u32,
    /// Pumpkins land uniformly within this distance of the origin on X and Z.
    pub scatter_half_extent: f32,
    pub collectible_height: f32,
    pub seed: u64,
    pub scan_interval: u32,
    pub hud_interval: u32,
    pub player_spawn: [f32; 3],
    pub player_speed: f32,
    pub arena_half_extent: f32,
}

impl Default for CollectionConfig {
    fn default() -> Self {
        Self {
            time_limit_secs: 90.0,
            pickup_radius: 2.0,
            collectible_count: 12,
            scatter_half_extent: 60.0,
            collectible_height: 0.6,
            seed: 12345,
            scan_interval: 6,
            hud_interval: 3,
            player_spawn: [0.0, 0.0, 0.0],
            player_speed: 6.0,
            arena_half_extent: 100.0,
        }
    }
}

impl CollectionConfig {
    pub fn rules(&self) -> CollectionRules {
        CollectionRules {
            time_limit: seconds(self.time_limit_secs),
            pickup_radius: self.pickup_radius,
            scan_interval: self.scan_interval,
        }
    }
}

/// Space station: ferry the package to the ship.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeliveryConfig {
    pub time_limit_secs: f32,
    pub pickup_radius: f32,
    pub delivery_radius: f32,
    pub carry_offset: [f32; 3],
    pub ground_level: f32,
    /// When false the package stays delivered instead of respawning.
    pub recycle_on_delivery: bool,
    pub indicator_interval: u32,
    pub player_speed: f32,
    pub station: Placement,
    pub ship: Placement,
    pub player: Placement,
    pub package: Placement,
}

impl Default for DeliveryConfig {
    fn default() -> Self {
        Self {
            time_limit_secs: 30.0,
            pickup_radius: 4.0,
            delivery_radius: 8.0,
            carry_offset: [0.0, 1.5, 1.5],
            ground_level: 0.0,
            recycle_on_delivery: true,
            indicator_interval: 1,
            player_speed: 10.0,
            station: Placement::new(0.0, 0.0, 0.0, 1.0),
            ship: Placement::new(100.0, 1.0, 0.0, 4.0),
            player: Placement::new(90.0, 0.0, 10.0, 3.0),
            package: Placement::new(0.0, 0.0, -10.0, 1.5),
        }
    }
}

impl DeliveryConfig {
    pub fn rules(&self) -> DeliveryRules {
        DeliveryRules {
            time_limit: seconds(self.time_limit_secs),
            pickup_radius: self.pickup_radius,
            delivery_radius: self.delivery_radius,
            carry_offset: Vec3::from_array(self.carry_offset),
            ground_level: self.ground_level,
            policy: if self.recycle_on_delivery {
                DeliveryPolicy::Recycle
            } else {
                DeliveryPolicy::Retire
            },
            indicator_interval: self.indicator_interval,
        }
    }
}

fn seconds(secs: f32) -> Duration {
    Duration::try_from_secs_f32(secs).unwrap_or_default()
}

impl GameConfig {
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text)
    }

    /// Loads overrides from `path`, falling back to the built-in values when
    /// the file is missing or unusable.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        if !path.exists() {
            info!("no config at {}, using defaults", path.display());
            return Self::default();
        }
        match Self::from_path(path) {
            Ok(config) => {
                info!("loaded config from {}", path.display());
                config
            }
            Err(e) => {
                warn!("ignoring config: {}", e);
                Self::default()
            }
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let c = &self.collection;
        let d = &self.delivery;
        check_time("collection.time_limit_secs", c.time_limit_secs)?;
        check_time("delivery.time_limit_secs", d.time_limit_secs)?;
        check_positive("collection.pickup_radius", c.pickup_radius)?;
        check_positive("delivery.pickup_radius", d.pickup_radius)?;
        check_positive("delivery.delivery_radius", d.delivery_radius)?;
        check_positive("delivery.player.scale", d.player.scale)?;
        check_positive("delivery.package.scale", d.package.scale)?;
        if !c.scatter_half_extent.is_finite() || c.scatter_half_extent < 0.0 {
            return Err(ConfigError::Invalid {
                field: "collection.scatter_half_extent",
                reason: "must be a finite, non-negative number",
            });
        }
        Ok(())
    }
}

fn check_time(field: &'static str, secs: f32) -> Result<(), ConfigError> {
    if secs.is_finite() && secs >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Invalid {
            field,
            reason: "must be a finite, non-negative number of seconds",
        })
    }
}

fn check_positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Invalid {
            field,
            reason: "must be greater than zero",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_defaults() {
        let config = GameConfig::from_json(r#"{ "delivery": { "time_limit_secs": 45 } }"#).unwrap();
        assert_eq!(config.delivery.time_limit_secs, 45.0);
        assert_eq!(config.delivery.delivery_radius, 8.0);
        assert_eq!(config.collection, CollectionConfig::default());
        assert_eq!(config.delivery.rules().time_limit, Duration::from_secs(45));
    }

    #[test]
    fn rejects_non_positive_radius() {
        let err = GameConfig::from_json(r#"{ "collection": { "pickup_radius": 0 } }"#).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                field: "collection.pickup_radius",
                ..
            }
        ));
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(matches!(GameConfig::from_json("{ nope"), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn retire_policy_from_flag() {
        let mut config = DeliveryConfig::default();
        config.recycle_on_delivery = false;
        assert_eq!(config.rules().policy, DeliveryPolicy::Retire);
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let config = GameConfig::load_or_default("does/not/exist.json");
        assert_eq!(config, GameConfig::default());
    }
}
