use grid_util::grid::{BoolGrid, ValueGrid};
use grid_util::point::Point;

use crate::grid::Grid;

/// Cells whose shortest-path cost is final, stored as a dense bitmap the size of the grid.
#[derive(Clone, Debug)]
pub struct ClosedSet {
    closed: BoolGrid,
    len: usize,
}

impl ClosedSet {
    pub fn new(width: usize, height: usize) -> ClosedSet {
        ClosedSet {
            closed: BoolGrid::new(width, height, false),
            len: 0,
        }
    }

    pub fn for_grid(grid: &Grid) -> ClosedSet {
        ClosedSet::new(grid.cols(), grid.rows())
    }

    /// Marks a cell as closed. Returns [false] if it already was.
    pub fn add(&mut self, point: Point) -> bool {
        if self.contains(&point) {
            return false;
        }
        self.closed.set(point.x, point.y, true);
        self.len += 1;
        true
    }

    /// Out-of-bounds cells are never closed.
    pub fn contains(&self, point: &Point) -> bool {
        point.x >= 0
            && point.y >= 0
            && (point.x as usize) < self.closed.width()
            && (point.y as usize) < self.closed.height()
            && self.closed.get(point.x, point.y)
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}
