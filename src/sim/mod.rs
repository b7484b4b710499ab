//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Caller-supplied timestep only
//! - Fixed per-tick order: input, integrate, X commit, Y commit, tile events, camera
//! - No rendering, audio or platform dependencies

pub mod body;
pub mod camera;
pub mod collision;
pub mod events;
pub mod grid;
pub mod progress;
pub mod state;
pub mod tick;
pub mod zone;

pub use body::KinematicBody;
pub use camera::CameraController;
pub use collision::{collides, collides_rect};
pub use events::{GameEvent, process_tile_events};
pub use grid::{TileGrid, TileLayer};
pub use progress::{Outcome, ProgressState};
pub use state::GameState;
pub use tick::{TickInput, tick};
pub use zone::{DamageZone, Rect};
