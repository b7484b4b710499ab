//! Rectangle vs. tile grid collision
//!
//! A box is converted to the inclusive range of cells it touches and every
//! cell in that range is checked against the solid layer. Motion is resolved
//! one axis at a time by the tick, so a single overlap query is all the
//! resolver needs.

use super::grid::TileGrid;
use super::zone::Rect;
use crate::consts::COLLISION_EPSILON;

/// Inclusive cell index range covered by `[start, start + size)` on one axis.
///
/// The low end is clamped to 0; the high end is left as computed so the caller
/// can skip indices past the grid. A non-positive size yields `hi < lo`.
fn cell_span(start: f32, size: f32, cell: f32) -> (i64, i64) {
    let lo = (start / cell).floor() as i64;
    let hi = ((start + size - COLLISION_EPSILON) / cell).floor() as i64;
    (lo.max(0), hi)
}

/// Whether the rectangle `[x, x+w) x [y, y+h)` overlaps any solid cell.
///
/// Never fails: a missing solid layer, a degenerate rectangle, a NaN
/// coordinate or a rectangle entirely off the grid all report no collision.
pub fn collides(grid: &TileGrid, x: f32, y: f32, w: f32, h: f32) -> bool {
    let Some(solid) = grid.solid() else {
        return false;
    };
    if !(x.is_finite() && y.is_finite() && w.is_finite() && h.is_finite()) {
        return false;
    }

    let (left, right) = cell_span(x, w, grid.cell_size.x);
    let (bottom, top) = cell_span(y, h, grid.cell_size.y);

    // Indices ascend, so the first one past the grid ends the axis
    let cols = i64::from(solid.width());
    let rows = i64::from(solid.height());
    for row in (bottom..=top).take_while(|&r| r < rows) {
        for col in (left..=right).take_while(|&c| c < cols) {
            if solid.occupied(col as i32, row as i32) {
                return true;
            }
        }
    }
    false
}

/// [`collides`] for a [`Rect`]
#[inline]
pub fn collides_rect(grid: &TileGrid, rect: &Rect) -> bool {
    collides(grid, rect.x, rect.y, rect.w, rect.h)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::grid::TileLayer;
    use glam::Vec2;
    use proptest::prelude::*;

    fn grid_with_solid(width: u32, height: u32, cells: &[(i32, i32)]) -> TileGrid {
        let mut layer = TileLayer::new(width, height);
        for &(c, r) in cells {
            layer.set(c, r, true);
        }
        TileGrid::new(width, height, Vec2::ONE).with_solid(layer)
    }

    #[test]
    fn test_single_tile_hit_and_miss() {
        let grid = grid_with_solid(10, 10, &[(3, 3)]);
        assert!(collides(&grid, 2.5, 2.5, 1.0, 1.0));
        assert!(!collides(&grid, 4.0, 2.5, 1.0, 1.0));
    }

    #[test]
    fn test_far_edge_on_boundary_does_not_claim_next_tile() {
        let grid = grid_with_solid(10, 10, &[(5, 5)]);
        assert!(collides(&grid, 5.9999, 5.0, 1.0, 1.0));
        assert!(!collides(&grid, 6.0, 5.0, 1.0, 1.0));
        // Box ending exactly at x = 5 touches tile 4 only
        assert!(!collides(&grid, 4.0, 5.0, 1.0, 1.0));
    }

    #[test]
    fn test_missing_solid_layer_never_collides() {
        let grid = TileGrid::new(10, 10, Vec2::ONE);
        assert!(!collides(&grid, 0.0, 0.0, 10.0, 10.0));
    }

    #[test]
    fn test_degenerate_rectangles() {
        let grid = grid_with_solid(10, 10, &[(3, 3)]);
        assert!(!collides(&grid, 3.5, 3.5, -1.0, 1.0));
        assert!(!collides(&grid, 3.5, 3.5, 1.0, -1.0));
        assert!(!collides(&grid, f32::NAN, 3.5, 1.0, 1.0));
    }

    #[test]
    fn test_negative_indices_clamped_to_zero() {
        let grid = grid_with_solid(10, 10, &[(0, 0)]);
        assert!(collides(&grid, -3.0, -3.0, 3.5, 3.5));
        // Entirely left of the grid
        assert!(!collides(&grid, -3.0, 0.0, 2.0, 1.0));
    }

    #[test]
    fn test_beyond_upper_extent_skipped() {
        let grid = grid_with_solid(4, 4, &[(3, 3)]);
        assert!(collides(&grid, 3.5, 3.5, 100.0, 100.0));
        assert!(!collides(&grid, 4.0, 0.0, 100.0, 100.0));
    }

    #[test]
    fn test_non_unit_cell_size() {
        let mut layer = TileLayer::new(4, 4);
        layer.set(1, 0, true);
        let grid = TileGrid::new(4, 4, Vec2::new(0.5, 2.0)).with_solid(layer);
        // Cell (1, 0) spans x in [0.5, 1.0), y in [0, 2)
        assert!(collides(&grid, 0.9, 1.5, 0.2, 0.2));
        assert!(!collides(&grid, 1.0, 1.5, 0.2, 0.2));
        assert!(!collides(&grid, 0.6, 2.0, 0.2, 0.2));
    }

    #[test]
    fn test_collides_rect() {
        let grid = grid_with_solid(10, 10, &[(3, 3)]);
        assert!(collides_rect(&grid, &Rect::new(2.5, 2.5, 1.0, 1.0)));
    }

    /// Quarter-unit coordinates are exact in f32, so the epsilon never
    /// changes which cells a rectangle covers.
    fn quarter(lo: i32, hi: i32) -> impl Strategy<Value = f32> {
        (lo * 4..hi * 4).prop_map(|q| q as f32 * 0.25)
    }

    proptest! {
        #[test]
        fn prop_collides_iff_overlapping_cell_is_solid(
            cells in proptest::collection::vec(any::<bool>(), 144),
            x in quarter(-8, 20),
            y in quarter(-8, 20),
            w in quarter(0, 10).prop_filter("positive", |w| *w > 0.0),
            h in quarter(0, 10).prop_filter("positive", |h| *h > 0.0),
        ) {
            let layer = TileLayer::from_cells(12, 12, cells.clone()).unwrap();
            let grid = TileGrid::new(12, 12, Vec2::ONE).with_solid(layer);

            let mut expected = false;
            for row in 0..12 {
                for col in 0..12 {
                    if !cells[row * 12 + col] {
                        continue;
                    }
                    let (cx, cy) = (col as f32, row as f32);
                    if cx < x + w && cx + 1.0 > x && cy < y + h && cy + 1.0 > y {
                        expected = true;
                    }
                }
            }
            prop_assert_eq!(collides(&grid, x, y, w, h), expected);
        }

        #[test]
        fn prop_empty_grid_never_collides(
            x in -50.0f32..50.0,
            y in -50.0f32..50.0,
            w in -5.0f32..30.0,
            h in -5.0f32..30.0,
        ) {
            let grid = grid_with_solid(12, 12, &[]);
            prop_assert!(!collides(&grid, x, y, w, h));
        }
    }
}
