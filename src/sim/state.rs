//! Simulation context
//!
//! Everything a tick reads or writes, owned in one place and handed to
//! [`tick`](super::tick::tick) by mutable reference. The coin layer inside
//! `grid` is the only map data a tick mutates.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::body::KinematicBody;
use super::camera::CameraController;
use super::events::GameEvent;
use super::grid::TileGrid;
use super::progress::ProgressState;
use super::zone::DamageZone;
use crate::map::LoadedMap;
use crate::tuning::Tuning;

/// Complete session state (deterministic, serializable)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    /// Tile occupancy; coin cells are cleared as they are collected
    pub grid: TileGrid,
    /// Static hazards
    pub zones: Vec<DamageZone>,
    /// The player
    pub body: KinematicBody,
    /// Score and health
    pub progress: ProgressState,
    /// Follow camera
    pub camera: CameraController,
    /// Balance values this session runs with
    pub tuning: Tuning,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Events raised by the most recent tick
    #[serde(skip)]
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Start a session on a loaded map
    pub fn new(map: LoadedMap, tuning: Tuning) -> Self {
        let LoadedMap { grid, zones } = map;
        let b = tuning.body;
        let body = KinematicBody::new(
            Vec2::new(b.spawn_x, b.spawn_y),
            Vec2::new(b.width, b.height),
        );

        let map_size = grid.world_size();
        let viewport = tuning
            .camera
            .viewport
            .map(Vec2::from)
            .unwrap_or(map_size);
        let mut camera = CameraController::new(viewport, tuning.camera);
        camera.snap_to(body.center(), map_size);

        Self {
            grid,
            zones,
            body,
            progress: ProgressState::new(&tuning.rules),
            camera,
            tuning,
            time_ticks: 0,
            events: Vec::new(),
        }
    }

    /// Map extent in world units
    pub fn map_size(&self) -> Vec2 {
        self.grid.world_size()
    }

    /// Gameplay has ended; only the camera keeps updating
    pub fn is_frozen(&self) -> bool {
        self.progress.is_terminal()
    }

    /// Coins still on the map
    pub fn coins_remaining(&self) -> usize {
        self.grid.coins().map_or(0, |l| l.count())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::grid::TileLayer;

    fn open_map(width: u32, height: u32) -> LoadedMap {
        LoadedMap {
            grid: TileGrid::new(width, height, Vec2::ONE).with_solid(TileLayer::new(width, height)),
            zones: Vec::new(),
        }
    }

    #[test]
    fn test_new_spawns_from_tuning() {
        let state = GameState::new(open_map(40, 20), Tuning::default());
        assert_eq!(state.body.pos(), Vec2::new(1.0, 5.0));
        assert_eq!(state.body.size, Vec2::ONE);
        assert_eq!(state.progress.health(), 100);
        assert_eq!(state.time_ticks, 0);
        assert!(!state.is_frozen());
        assert_eq!(state.coins_remaining(), 0);
    }

    #[test]
    fn test_viewport_defaults_to_map_size() {
        let state = GameState::new(open_map(40, 20), Tuning::default());
        assert_eq!(state.camera.viewport, Vec2::new(40.0, 20.0));
        // Snapped onto the body, then clamped: half extents are 14 x 7 at zoom 0.7
        let half = state.camera.half_extents();
        assert!((state.camera.position.x - half.x).abs() < 1e-4);
        assert!((state.camera.position.y - half.y).abs() < 1e-4);
    }

    #[test]
    fn test_viewport_override() {
        let mut tuning = Tuning::default();
        tuning.camera.viewport = Some([16.0, 9.0]);
        let state = GameState::new(open_map(40, 20), tuning);
        assert_eq!(state.camera.viewport, Vec2::new(16.0, 9.0));
    }
}
