//! Follow camera with smoothed look-ahead
//!
//! Each update: pick a look-ahead target from the player's horizontal intent,
//! ease the look-ahead toward it, ease the camera toward the body center plus
//! look-ahead, then keep the view inside the map.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::zone::Rect;
use crate::tuning::CameraTuning;
use crate::{approach, sign_with_threshold};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CameraController {
    /// Camera center (world units)
    pub position: Vec2,
    /// Unzoomed viewport size (world units)
    pub viewport: Vec2,
    pub zoom: f32,
    /// Current, smoothed look-ahead
    pub look_ahead_offset: f32,
    /// Look-ahead the offset is easing toward: -L, 0 or +L
    pub look_ahead_target: f32,
    tuning: CameraTuning,
}

impl CameraController {
    /// Camera centered on its own viewport, like an orthographic camera set
    /// up with its origin at the map's bottom-left corner.
    pub fn new(viewport: Vec2, tuning: CameraTuning) -> Self {
        Self {
            position: viewport * 0.5,
            viewport,
            zoom: tuning.zoom,
            look_ahead_offset: 0.0,
            look_ahead_target: 0.0,
            tuning,
        }
    }

    /// Half of the visible area, zoom applied
    pub fn half_extents(&self) -> Vec2 {
        self.viewport * self.zoom * 0.5
    }

    /// Visible world rectangle
    pub fn view_rect(&self) -> Rect {
        let half = self.half_extents();
        Rect::from_min_size(self.position - half, half * 2.0)
    }

    /// Jump straight to `focus` (no smoothing), then clamp
    pub fn snap_to(&mut self, focus: Vec2, map_size: Vec2) {
        self.position = focus;
        self.look_ahead_offset = 0.0;
        self.look_ahead_target = 0.0;
        self.clamp_to(map_size);
    }

    /// Advance one tick toward the body center `focus`.
    ///
    /// `intent_dx` is the horizontal move the player asked for this tick.
    pub fn update(&mut self, focus: Vec2, intent_dx: f32, map_size: Vec2, dt: f32) {
        let direction = sign_with_threshold(intent_dx, self.tuning.intent_threshold);
        self.look_ahead_target = direction * self.tuning.look_ahead_distance;
        self.look_ahead_offset = approach(
            self.look_ahead_offset,
            self.look_ahead_target,
            self.tuning.look_ahead_rate,
            dt,
        );

        let desired = focus + Vec2::new(self.look_ahead_offset, 0.0);
        let rate = self.tuning.follow_rate;
        self.position.x = approach(self.position.x, desired.x, rate, dt);
        self.position.y = approach(self.position.y, desired.y, rate, dt);

        self.clamp_to(map_size);
    }

    /// Keep the view inside `[0, map_size]`.
    ///
    /// On an axis where the view is larger than the map the bounds would
    /// cross, so the camera centers on the map instead.
    fn clamp_to(&mut self, map_size: Vec2) {
        let half = self.half_extents();
        self.position.x = clamp_axis(self.position.x, half.x, map_size.x);
        self.position.y = clamp_axis(self.position.y, half.y, map_size.y);
    }
}

fn clamp_axis(value: f32, half: f32, extent: f32) -> f32 {
    let (lo, hi) = (half, extent - half);
    if lo > hi {
        extent * 0.5
    } else {
        value.clamp(lo, hi)
    }
}
