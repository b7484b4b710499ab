//! Tile occupancy grid
//!
//! Cells are addressed `(col, row)` with row 0 at the bottom of the map, so
//! cell `(c, r)` covers world rectangle `[c*w, (c+1)*w) x [r*h, (r+1)*h)`.
//! Queries outside the grid are never an error; they report "unoccupied".

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// One occupancy layer, stored row-major: index = row * width + col
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileLayer {
    width: u32,
    height: u32,
    cells: Vec<bool>,
}

impl TileLayer {
    /// Create an empty layer
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            cells: vec![false; width as usize * height as usize],
        }
    }

    /// Build a layer from row-major cells (row 0 = bottom).
    ///
    /// Returns `None` when `cells` does not hold exactly `width * height` entries.
    pub fn from_cells(width: u32, height: u32, cells: Vec<bool>) -> Option<Self> {
        if cells.len() != width as usize * height as usize {
            return None;
        }
        Some(Self {
            width,
            height,
            cells,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    fn index(&self, col: i32, row: i32) -> Option<usize> {
        if col < 0 || row < 0 {
            return None;
        }
        let (col, row) = (col as u32, row as u32);
        if col >= self.width || row >= self.height {
            return None;
        }
        Some(row as usize * self.width as usize + col as usize)
    }

    /// Whether the cell is occupied; out-of-range cells are unoccupied
    pub fn occupied(&self, col: i32, row: i32) -> bool {
        self.index(col, row).is_some_and(|i| self.cells[i])
    }

    /// Mark a cell occupied or empty (ignored out of range)
    pub fn set(&mut self, col: i32, row: i32, occupied: bool) {
        if let Some(i) = self.index(col, row) {
            self.cells[i] = occupied;
        }
    }

    /// Empty a cell. Returns true if it was occupied.
    pub fn clear(&mut self, col: i32, row: i32) -> bool {
        match self.index(col, row) {
            Some(i) => std::mem::replace(&mut self.cells[i], false),
            None => false,
        }
    }

    /// Number of occupied cells
    pub fn count(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }
}

/// Solid and coin layers over a grid of fixed-size cells
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TileGrid {
    /// Width in cells
    pub width: u32,
    /// Height in cells
    pub height: u32,
    /// Cell size in world units (both components > 0)
    pub cell_size: Vec2,
    solid: Option<TileLayer>,
    coins: Option<TileLayer>,
}

impl TileGrid {
    /// Create a grid with no layers
    pub fn new(width: u32, height: u32, cell_size: Vec2) -> Self {
        Self {
            width,
            height,
            cell_size,
            solid: None,
            coins: None,
        }
    }

    /// Attach the solid ("foreground") layer. Must match the grid's size.
    pub fn with_solid(mut self, layer: TileLayer) -> Self {
        self.debug_check_fits(&layer);
        self.solid = Some(layer);
        self
    }

    /// Attach the coin layer. Must match the grid's size.
    pub fn with_coins(mut self, layer: TileLayer) -> Self {
        self.debug_check_fits(&layer);
        self.coins = Some(layer);
        self
    }

    fn debug_check_fits(&self, layer: &TileLayer) {
        debug_assert_eq!(
            (layer.width(), layer.height()),
            (self.width, self.height),
            "layer size must match the grid"
        );
    }

    pub fn solid(&self) -> Option<&TileLayer> {
        self.solid.as_ref()
    }

    pub fn coins(&self) -> Option<&TileLayer> {
        self.coins.as_ref()
    }

    /// Solid occupancy; a missing solid layer is empty everywhere
    pub fn is_solid(&self, col: i32, row: i32) -> bool {
        self.solid.as_ref().is_some_and(|l| l.occupied(col, row))
    }

    /// Coin occupancy; a missing coin layer is empty everywhere
    pub fn has_coin(&self, col: i32, row: i32) -> bool {
        self.coins.as_ref().is_some_and(|l| l.occupied(col, row))
    }

    /// Consume a coin. Returns true only if a coin was present.
    pub fn clear_coin(&mut self, col: i32, row: i32) -> bool {
        self.coins.as_mut().is_some_and(|l| l.clear(col, row))
    }

    /// Cell containing a world-space point (may lie outside the grid)
    pub fn cell_at(&self, point: Vec2) -> (i32, i32) {
        (
            (point.x / self.cell_size.x).floor() as i32,
            (point.y / self.cell_size.y).floor() as i32,
        )
    }

    /// Map extent in world units
    pub fn world_size(&self) -> Vec2 {
        Vec2::new(
            self.width as f32 * self.cell_size.x,
            self.height as f32 * self.cell_size.y,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layer_with(width: u32, height: u32, cells: &[(i32, i32)]) -> TileLayer {
        let mut layer = TileLayer::new(width, height);
        for &(c, r) in cells {
            layer.set(c, r, true);
        }
        layer
    }

    #[test]
    fn test_out_of_range_is_unoccupied() {
        let layer = layer_with(4, 4, &[(0, 0), (3, 3)]);
        assert!(layer.occupied(0, 0));
        assert!(layer.occupied(3, 3));
        assert!(!layer.occupied(-1, 0));
        assert!(!layer.occupied(0, -1));
        assert!(!layer.occupied(4, 0));
        assert!(!layer.occupied(0, 4));
        assert!(!layer.occupied(i32::MAX, i32::MIN));
    }

    #[test]
    fn test_from_cells_rejects_wrong_length() {
        assert!(TileLayer::from_cells(2, 2, vec![false; 3]).is_none());
        let layer = TileLayer::from_cells(2, 2, vec![false, true, false, false]).unwrap();
        assert!(layer.occupied(1, 0));
        assert_eq!(layer.count(), 1);
    }

    #[test]
    fn test_clear_coin_once() {
        let mut grid =
            TileGrid::new(4, 4, Vec2::ONE).with_coins(layer_with(4, 4, &[(2, 2)]));
        assert!(grid.has_coin(2, 2));
        assert!(grid.clear_coin(2, 2));
        assert!(!grid.has_coin(2, 2));
        assert!(!grid.clear_coin(2, 2));
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "layer size must match the grid")]
    fn test_mismatched_layer_rejected() {
        let _ = TileGrid::new(4, 4, Vec2::ONE).with_solid(TileLayer::new(5, 4));
    }

    #[test]
    fn test_missing_layers_are_empty() {
        let mut grid = TileGrid::new(4, 4, Vec2::ONE);
        assert!(!grid.is_solid(1, 1));
        assert!(!grid.has_coin(1, 1));
        assert!(!grid.clear_coin(1, 1));
    }

    #[test]
    fn test_cell_at_and_world_size() {
        let grid = TileGrid::new(10, 5, Vec2::new(0.5, 2.0));
        assert_eq!(grid.cell_at(Vec2::new(1.2, 3.9)), (2, 1));
        assert_eq!(grid.cell_at(Vec2::new(-0.1, 0.0)), (-1, 0));
        assert_eq!(grid.world_size(), Vec2::new(5.0, 10.0));
    }
}
