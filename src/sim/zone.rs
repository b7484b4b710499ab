//! Static hazard geometry

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle, bottom-left anchored, world units
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    pub fn from_min_size(min: Vec2, size: Vec2) -> Self {
        Self::new(min.x, min.y, size.x, size.y)
    }

    /// Zero or negative extent (or NaN) on either axis
    pub fn is_degenerate(&self) -> bool {
        !(self.w > 0.0 && self.h > 0.0)
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.w * 0.5, self.y + self.h * 0.5)
    }

    /// Strict overlap test; touching edges do not overlap and degenerate
    /// rectangles overlap nothing.
    pub fn overlaps(&self, other: &Rect) -> bool {
        if self.is_degenerate() || other.is_degenerate() {
            return false;
        }
        self.x < other.x + other.w
            && self.x + self.w > other.x
            && self.y < other.y + other.h
            && self.y + self.h > other.y
    }

    /// Divide every component by a pixels-per-unit factor
    pub fn scaled_down(&self, pixels_per_unit: f32) -> Self {
        Self::new(
            self.x / pixels_per_unit,
            self.y / pixels_per_unit,
            self.w / pixels_per_unit,
            self.h / pixels_per_unit,
        )
    }
}

/// A static damage area. Only rectangles are supported; other source shapes
/// are dropped when the map is loaded.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum DamageZone {
    Rectangle(Rect),
}

impl DamageZone {
    /// Build a rectangular zone from a pixel rectangle
    pub fn from_pixels(rect_px: Rect, pixels_per_unit: f32) -> Self {
        DamageZone::Rectangle(rect_px.scaled_down(pixels_per_unit))
    }

    /// Whether the zone overlaps a body's bounding box
    pub fn overlaps(&self, bounds: &Rect) -> bool {
        match self {
            DamageZone::Rectangle(rect) => rect.overlaps(bounds),
        }
    }
}
