//! Construction-time controller configuration.
//!
//! Defaults come from [`crate::collision::settings`]. A config can be built in
//! code or loaded from TOML; every field is optional in TOML.
//!
//! ```toml
//! horizontal_ray_count = 6
//! vertical_ray_count = 4
//! collision_mask = 1
//! max_climb_angle = 60.0
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    collision::settings::{
        DEFAULT_MAX_CLIMB_ANGLE, DEFAULT_MAX_DESCEND_ANGLE, DEFAULT_RAY_COUNT,
        DEFAULT_SKIN_WIDTH, MAX_ANGLE_LIMIT,
    },
    mask::CollisionMask,
};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse controller config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("skin width must be finite and positive, got {0}")]
    InvalidSkinWidth(f32),
    #[error("{name} must be within [0, 90) degrees, got {value}")]
    AngleOutOfRange { name: &'static str, value: f32 },
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControllerConfig {
    /// Sideways rays along the box height. Clamped to at least 2.
    pub horizontal_ray_count: usize,
    /// Up/down rays along the box width. Clamped to at least 2.
    pub vertical_ray_count: usize,
    /// Layers the rays collide with.
    pub collision_mask: CollisionMask,
    /// Steepest climbable surface, degrees from up. Ties climb.
    pub max_climb_angle: f32,
    /// Steepest surface downward motion hugs, degrees from up.
    pub max_descend_angle: f32,
    /// Inset of the ray origins from the box edges.
    pub skin_width: f32,
    /// Keep every ray of the last resolve call for debug drawing.
    pub record_debug_rays: bool,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            horizontal_ray_count: DEFAULT_RAY_COUNT,
            vertical_ray_count: DEFAULT_RAY_COUNT,
            collision_mask: CollisionMask::ALL,
            max_climb_angle: DEFAULT_MAX_CLIMB_ANGLE,
            max_descend_angle: DEFAULT_MAX_DESCEND_ANGLE,
            skin_width: DEFAULT_SKIN_WIDTH,
            record_debug_rays: false,
        }
    }
}

impl ControllerConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the resolver cannot work with. Ray counts are not checked;
    /// the controller clamps them.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.skin_width.is_finite() || self.skin_width <= 0.0 {
            return Err(ConfigError::InvalidSkinWidth(self.skin_width));
        }
        check_angle("max_climb_angle", self.max_climb_angle)?;
        check_angle("max_descend_angle", self.max_descend_angle)?;
        Ok(())
    }
}

fn check_angle(name: &'static str, value: f32) -> Result<(), ConfigError> {
    if (0.0..MAX_ANGLE_LIMIT).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::AngleOutOfRange { name, value })
    }
}
