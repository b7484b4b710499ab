//! Tile Platformer - collision, movement and camera core of a 2D side-scroller
//!
//! Core modules:
//! - `sim`: Deterministic simulation (tile collision, kinematic body, tile events, camera)
//! - `map`: Level description loading and layer classification
//! - `tuning`: Data-driven game balance
//! - `audio`: Sound cue dispatch
//! - `clock`: Fixed timestep accumulator

pub mod audio;
pub mod clock;
pub mod map;
pub mod sim;
pub mod tuning;

pub use map::{LoadedMap, MapError};
pub use tuning::{Tuning, TuningError};

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Longest frame delta accepted by the clock (seconds)
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// Source pixels per world unit
    pub const PIXELS_PER_UNIT: f32 = 32.0;

    /// Subtracted from a rectangle's far edge before converting to a tile index,
    /// so an edge lying exactly on a tile boundary does not claim the next tile.
    pub const COLLISION_EPSILON: f32 = 1e-4;
}

/// Exponential approach of `current` toward `target` at `rate` per second.
///
/// Not clamped: with `rate * dt > 1` the value overshoots, same as the
/// frame-rate dependent lerp it models.
#[inline]
pub fn approach(current: f32, target: f32, rate: f32, dt: f32) -> f32 {
    current + (target - current) * rate * dt
}

/// Sign of `delta` with a dead zone: -1, 0 or +1.
#[inline]
pub fn sign_with_threshold(delta: f32, threshold: f32) -> f32 {
    if delta.abs() > threshold {
        delta.signum()
    } else {
        0.0
    }
}
