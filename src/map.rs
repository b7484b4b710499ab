//! Level loading
//!
//! Levels are JSON documents shaped like a Tiled export: a cell grid, a tile
//! size in pixels and a list of named layers. Layer roles are picked by name
//! (case-insensitive):
//! - `Foreground`: solid tiles (required)
//! - `Coin`: collectible tiles
//! - `Damage`: hazard shapes
//!
//! Tile rows and object coordinates are stored top-down in pixels; the loader
//! flips them to the y-up world the simulation uses.

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::PIXELS_PER_UNIT;
use crate::sim::{DamageZone, Rect, TileGrid, TileLayer};

/// Built-in level used by the headless runner when no map is given
pub const DEMO_LEVEL: &str = include_str!("../levels/demo.json");

const SOLID_LAYER: &str = "Foreground";
const COIN_LAYER: &str = "Coin";
const DAMAGE_LAYER: &str = "Damage";

/// Fatal problems with a level; reported before a session starts
#[derive(Debug, Error)]
pub enum MapError {
    #[error("failed to read map: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse map: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("map has no `Foreground` tile layer")]
    MissingSolidLayer,
    #[error("layer `{name}` must be a tile layer")]
    WrongLayerKind { name: String },
    #[error("layer `{name}` has {actual} cells, expected {expected}")]
    LayerSize {
        name: String,
        expected: usize,
        actual: usize,
    },
    #[error("tile size must be non-zero")]
    ZeroTileSize,
}

/// Shape of a map object, pixel units, y measured downward
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "shape", rename_all = "lowercase")]
pub enum ObjectShape {
    Rectangle {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
    },
    Ellipse {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
    },
    Polygon {
        x: f32,
        y: f32,
        points: Vec<[f32; 2]>,
    },
    Point {
        x: f32,
        y: f32,
    },
}

/// One named layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum LayerDescription {
    /// Tile ids, row-major, top row first; 0 = empty
    Tiles { name: String, data: Vec<u32> },
    /// Free-form shapes
    Objects {
        name: String,
        #[serde(default)]
        objects: Vec<ObjectShape>,
    },
}

impl LayerDescription {
    pub fn name(&self) -> &str {
        match self {
            LayerDescription::Tiles { name, .. } | LayerDescription::Objects { name, .. } => name,
        }
    }
}

/// Level file contents
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapDescription {
    /// Width in cells
    pub width: u32,
    /// Height in cells
    pub height: u32,
    pub tile_width_px: u32,
    pub tile_height_px: u32,
    #[serde(default)]
    pub layers: Vec<LayerDescription>,
}

/// Map data the simulation runs on
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedMap {
    pub grid: TileGrid,
    pub zones: Vec<DamageZone>,
}

impl LoadedMap {
    /// Read and convert a level file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, MapError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let map = Self::from_json(&json)?;
        log::info!(
            "Loaded map {} ({}x{} cells)",
            path.display(),
            map.grid.width,
            map.grid.height
        );
        Ok(map)
    }

    /// Parse and convert a level from JSON
    pub fn from_json(json: &str) -> Result<Self, MapError> {
        let desc: MapDescription = serde_json::from_str(json)?;
        Self::from_description(&desc)
    }

    /// Convert a parsed level into grid layers and hazard zones
    pub fn from_description(desc: &MapDescription) -> Result<Self, MapError> {
        if desc.tile_width_px == 0 || desc.tile_height_px == 0 {
            return Err(MapError::ZeroTileSize);
        }

        let cell_size = Vec2::new(
            desc.tile_width_px as f32 / PIXELS_PER_UNIT,
            desc.tile_height_px as f32 / PIXELS_PER_UNIT,
        );
        let pixels_per_unit = desc.tile_width_px as f32 / cell_size.x;
        let map_height_px = desc.height as f32 * desc.tile_height_px as f32;

        let mut solid = None;
        let mut coins = None;
        let mut zones = Vec::new();

        for layer in &desc.layers {
            let name = layer.name();
            if name.eq_ignore_ascii_case(SOLID_LAYER) {
                solid = Some(tile_layer(desc, layer)?);
            } else if name.eq_ignore_ascii_case(COIN_LAYER) {
                coins = Some(tile_layer(desc, layer)?);
            } else if name.eq_ignore_ascii_case(DAMAGE_LAYER) {
                match layer {
                    LayerDescription::Objects { objects, .. } => {
                        zones.extend(damage_zones(objects, map_height_px, pixels_per_unit));
                    }
                    LayerDescription::Tiles { .. } => {
                        log::warn!("Damage layer `{}` is a tile layer, ignoring it", name);
                    }
                }
            } else {
                log::debug!("Decoration layer `{}`", name);
            }
        }

        let Some(solid) = solid else {
            return Err(MapError::MissingSolidLayer);
        };

        let mut grid = TileGrid::new(desc.width, desc.height, cell_size).with_solid(solid);
        match coins {
            Some(coins) => grid = grid.with_coins(coins),
            None => log::warn!("Map has no coin layer"),
        }
        if zones.is_empty() {
            log::info!("Map has no damage zones");
        }

        Ok(Self { grid, zones })
    }

    /// Map extent in world units
    pub fn world_size(&self) -> Vec2 {
        self.grid.world_size()
    }
}

/// Convert a tile layer, flipping rows so row 0 is the bottom of the map
fn tile_layer(desc: &MapDescription, layer: &LayerDescription) -> Result<TileLayer, MapError> {
    let LayerDescription::Tiles { name, data } = layer else {
        return Err(MapError::WrongLayerKind {
            name: layer.name().to_string(),
        });
    };

    let expected = desc.width as usize * desc.height as usize;
    if data.len() != expected {
        return Err(MapError::LayerSize {
            name: name.clone(),
            expected,
            actual: data.len(),
        });
    }

    let mut out = TileLayer::new(desc.width, desc.height);
    for (i, &id) in data.iter().enumerate() {
        if id == 0 {
            continue;
        }
        let col = (i % desc.width as usize) as i32;
        let row_from_top = (i / desc.width as usize) as i32;
        out.set(col, desc.height as i32 - 1 - row_from_top, true);
    }
    Ok(out)
}

/// Rectangles become hazard zones; any other shape is skipped
fn damage_zones(objects: &[ObjectShape], map_height_px: f32, pixels_per_unit: f32) -> Vec<DamageZone> {
    objects
        .iter()
        .filter_map(|obj| match *obj {
            ObjectShape::Rectangle {
                x,
                y,
                width,
                height,
            } => {
                let flipped = Rect::new(x, map_height_px - y - height, width, height);
                Some(DamageZone::from_pixels(flipped, pixels_per_unit))
            }
            ref other => {
                log::warn!("Unsupported damage shape {:?}, ignoring it", other);
                None
            }
        })
        .collect()
}
