//! Data-driven game balance
//!
//! Every section defaults independently, so a tuning file only needs the
//! values it overrides.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while loading or validating tuning data.
#[derive(Debug, Error)]
pub enum TuningError {
    #[error("failed to read tuning file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse tuning file: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid tuning: {0}")]
    Invalid(&'static str),
}

/// Vertical/horizontal movement constants (world units, seconds)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsTuning {
    /// Constant vertical acceleration (negative = down)
    pub gravity: f32,
    /// Vertical velocity applied on jump
    pub jump_velocity: f32,
    /// Floor for vertical velocity (negative)
    pub max_fall_speed: f32,
    /// Horizontal speed while a direction is held
    pub move_speed: f32,
}

impl Default for PhysicsTuning {
    fn default() -> Self {
        Self {
            gravity: -26.0,
            jump_velocity: 12.0,
            max_fall_speed: -20.0,
            move_speed: 7.0,
        }
    }
}

/// Player body dimensions and spawn point (bottom-left, world units)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BodyTuning {
    pub width: f32,
    pub height: f32,
    pub spawn_x: f32,
    pub spawn_y: f32,
}

impl Default for BodyTuning {
    fn default() -> Self {
        Self {
            width: 1.0,
            height: 1.0,
            spawn_x: 1.0,
            spawn_y: 5.0,
        }
    }
}

/// Follow camera parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraTuning {
    /// Position follow rate (per second)
    pub follow_rate: f32,
    /// Look-ahead smoothing rate (per second)
    pub look_ahead_rate: f32,
    /// Look-ahead magnitude in world units
    pub look_ahead_distance: f32,
    /// Zoom factor applied to the viewport (< 1 zooms in)
    pub zoom: f32,
    /// Horizontal intent below this is treated as standing still
    pub intent_threshold: f32,
    /// Viewport size in world units; the map extent when absent
    pub viewport: Option<[f32; 2]>,
}

impl Default for CameraTuning {
    fn default() -> Self {
        Self {
            follow_rate: 5.0,
            look_ahead_rate: 2.5,
            look_ahead_distance: 7.0,
            zoom: 0.7,
            intent_threshold: 0.001,
            viewport: None,
        }
    }
}

/// Scoring and health rules
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RulesTuning {
    /// Score awarded per coin
    pub coin_value: u32,
    /// Health lost per tick of hazard overlap
    pub damage_per_tick: u32,
    /// Starting (and maximum) health
    pub max_health: u32,
    /// Score at which the run is won
    pub win_score: u32,
}

impl Default for RulesTuning {
    fn default() -> Self {
        Self {
            coin_value: 10,
            damage_per_tick: 1,
            max_health: 100,
            win_score: 40,
        }
    }
}

/// Complete tuning set
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub physics: PhysicsTuning,
    pub body: BodyTuning,
    pub camera: CameraTuning,
    pub rules: RulesTuning,
}

impl Tuning {
    /// Parse and validate tuning from a JSON string
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Load tuning from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, TuningError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let tuning = Self::from_json(&json)?;
        log::info!("Loaded tuning from {}", path.display());
        Ok(tuning)
    }

    /// Check value ranges the simulation relies on
    pub fn validate(&self) -> Result<(), TuningError> {
        let p = &self.physics;
        if !(p.gravity < 0.0) {
            return Err(TuningError::Invalid("gravity must be negative"));
        }
        if !(p.max_fall_speed < 0.0) {
            return Err(TuningError::Invalid("max_fall_speed must be negative"));
        }
        if !(p.jump_velocity > 0.0) {
            return Err(TuningError::Invalid("jump_velocity must be positive"));
        }
        if !(p.move_speed >= 0.0) {
            return Err(TuningError::Invalid("move_speed must not be negative"));
        }

        let b = &self.body;
        if !(b.width > 0.0 && b.height > 0.0) {
            return Err(TuningError::Invalid("body size must be positive"));
        }

        let c = &self.camera;
        if !(c.follow_rate > 0.0 && c.look_ahead_rate > 0.0) {
            return Err(TuningError::Invalid("camera rates must be positive"));
        }
        if !(c.zoom > 0.0) {
            return Err(TuningError::Invalid("zoom must be positive"));
        }
        if !(c.look_ahead_distance >= 0.0) {
            return Err(TuningError::Invalid("look_ahead_distance must not be negative"));
        }
        if let Some([w, h]) = c.viewport {
            if !(w > 0.0 && h > 0.0) {
                return Err(TuningError::Invalid("viewport must be positive"));
            }
        }

        if self.rules.max_health == 0 {
            return Err(TuningError::Invalid("max_health must be non-zero"));
        }
        Ok(())
    }
}
