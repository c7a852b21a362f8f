//! Uniform acceleration grid for minimum-distance queries.
//!
//! The cell size is `radius / √2`, so a cell's diagonal equals `radius` and two points
//! sharing a cell always violate the minimum distance. Each cell therefore stores at most
//! one point index, and every point within `radius` of a query lies in the 5×5 block
//! around the query's cell.
use std::f32::consts::SQRT_2;

use glam::Vec2;

use crate::sampling::poisson_disc::Point;

/// Half-width of the neighborhood scanned by [`SpatialGrid::has_neighbor_within`].
const NEIGHBORHOOD: usize = 2;

/// Cell grid over `[0, width) × [0, height)` mapping cells to point indices.
#[derive(Debug, Clone)]
pub struct SpatialGrid {
    cell_size: f32,
    width: usize,
    height: usize,
    cells: Vec<Option<usize>>,
}

impl SpatialGrid {
    /// Create an empty grid sized for `radius` over `bounds`.
    ///
    /// Both inputs must already be validated (finite and positive).
    pub fn for_radius(radius: f32, bounds: Vec2) -> Self {
        debug_assert!(radius > 0.0 && bounds.x > 0.0 && bounds.y > 0.0);
        let cell_size = radius / SQRT_2;
        let (width, height) = Self::dimensions_for(cell_size, bounds);

        Self {
            cell_size,
            width,
            height,
            cells: vec![None; width * height],
        }
    }

    /// Number of cells along each axis for the given cell size and bounds.
    pub(crate) fn dimensions_for(cell_size: f32, bounds: Vec2) -> (usize, usize) {
        let width = ((bounds.x / cell_size).ceil() as usize).max(1);
        let height = ((bounds.y / cell_size).ceil() as usize).max(1);
        (width, height)
    }

    pub fn cell_size(&self) -> f32 {
        self.cell_size
    }

    /// Grid dimensions as `(columns, rows)`.
    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Cell coordinates for a position inside the bounds.
    ///
    /// Positions just below the far edge can round onto the edge itself; those are
    /// clamped into the last column or row.
    #[inline]
    pub fn cell_of(&self, point: Vec2) -> (usize, usize) {
        let cx = ((point.x / self.cell_size).floor().max(0.0) as usize).min(self.width - 1);
        let cy = ((point.y / self.cell_size).floor().max(0.0) as usize).min(self.height - 1);
        (cx, cy)
    }

    /// Point index stored at a cell, if any.
    pub fn get(&self, cx: usize, cy: usize) -> Option<usize> {
        if cx >= self.width || cy >= self.height {
            return None;
        }
        self.cells[self.index(cx, cy)]
    }

    /// Number of occupied cells.
    pub fn occupied(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Record `index` in the cell containing `point`.
    ///
    /// The caller rejects out-of-bounds points beforehand.
    pub fn insert(&mut self, index: usize, point: Vec2) {
        debug_assert!(point.x >= 0.0 && point.y >= 0.0);
        let (cx, cy) = self.cell_of(point);
        let idx = self.index(cx, cy);
        debug_assert!(self.cells[idx].is_none(), "cell ({cx}, {cy}) already occupied");
        self.cells[idx] = Some(index);
    }

    /// Returns true if any point in `points` referenced by the grid lies strictly closer
    /// than `radius` to `candidate`.
    pub fn has_neighbor_within(&self, candidate: Vec2, radius: f32, points: &[Point]) -> bool {
        let radius_squared = radius * radius;
        let (gx, gy) = self.cell_of(candidate);
        let start_x = gx.saturating_sub(NEIGHBORHOOD);
        let end_x = (gx + NEIGHBORHOOD + 1).min(self.width);
        let start_y = gy.saturating_sub(NEIGHBORHOOD);
        let end_y = (gy + NEIGHBORHOOD + 1).min(self.height);

        for y in start_y..end_y {
            for x in start_x..end_x {
                let Some(existing) = self.cells[self.index(x, y)] else {
                    continue;
                };
                if points[existing].position().distance_squared(candidate) < radius_squared {
                    return true;
                }
            }
        }

        false
    }

    #[inline]
    fn index(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(x: f32, y: f32) -> Point {
        Point::new(x, y)
    }

    #[test]
    fn dimensions_follow_cell_size() {
        let grid = SpatialGrid::for_radius(5.0, Vec2::new(800.0, 600.0));
        let cell = 5.0 / SQRT_2;
        assert_eq!(grid.cell_size(), cell);
        assert_eq!(
            grid.dimensions(),
            (
                (800.0_f32 / cell).ceil() as usize,
                (600.0_f32 / cell).ceil() as usize
            )
        );
    }

    #[test]
    fn cell_of_uses_floor_and_clamps_far_edge() {
        let grid = SpatialGrid::for_radius(SQRT_2, Vec2::new(4.0, 3.0));
        assert_eq!(grid.dimensions(), (4, 3));
        assert_eq!(grid.cell_of(Vec2::new(0.0, 0.0)), (0, 0));
        assert_eq!(grid.cell_of(Vec2::new(1.99, 2.5)), (1, 2));
        assert_eq!(grid.cell_of(Vec2::new(4.0, 3.0)), (3, 2));
    }

    #[test]
    fn insert_records_index_in_its_cell() {
        let mut grid = SpatialGrid::for_radius(SQRT_2, Vec2::new(4.0, 4.0));
        grid.insert(7, Vec2::new(2.5, 1.5));
        assert_eq!(grid.get(2, 1), Some(7));
        assert_eq!(grid.get(1, 2), None);
        assert_eq!(grid.get(10, 10), None);
        assert_eq!(grid.occupied(), 1);
    }

    #[test]
    fn neighbor_query_rejects_close_and_accepts_far() {
        let mut grid = SpatialGrid::for_radius(1.0, Vec2::new(10.0, 10.0));
        let points = vec![point(5.0, 5.0)];
        grid.insert(0, points[0].position());

        assert!(grid.has_neighbor_within(Vec2::new(5.5, 5.0), 1.0, &points));
        assert!(grid.has_neighbor_within(Vec2::new(5.6, 5.6), 1.0, &points));
        assert!(!grid.has_neighbor_within(Vec2::new(6.0, 5.0), 1.0, &points));
        assert!(!grid.has_neighbor_within(Vec2::new(7.5, 7.5), 1.0, &points));
    }

    #[test]
    fn neighbor_query_reaches_two_cells_away() {
        // Cell size ~0.707: a neighbor 0.99 away along an axis sits two columns off.
        let mut grid = SpatialGrid::for_radius(1.0, Vec2::new(10.0, 10.0));
        let points = vec![point(2.01, 2.01)];
        grid.insert(0, points[0].position());

        let candidate = Vec2::new(2.01 + 0.99, 2.01);
        let (cx, _) = grid.cell_of(candidate);
        let (px, _) = grid.cell_of(points[0].position());
        assert_eq!(cx - px, 2);
        assert!(grid.has_neighbor_within(candidate, 1.0, &points));

        let candidate = Vec2::new(2.01 + 0.7, 2.01 + 0.7);
        assert!(grid.has_neighbor_within(candidate, 1.0, &points));
    }

    #[test]
    fn neighbor_query_clips_at_grid_edges() {
        let mut grid = SpatialGrid::for_radius(1.0, Vec2::new(3.0, 3.0));
        let points = vec![point(0.1, 0.1)];
        grid.insert(0, points[0].position());

        assert!(grid.has_neighbor_within(Vec2::new(0.0, 0.0), 1.0, &points));
        assert!(!grid.has_neighbor_within(Vec2::new(2.9, 2.9), 1.0, &points));
    }
}
