use grid_util::point::Point;

/// Estimates the remaining cost from a cell to the goal. Implementations must be admissible and
/// consistent for unit-cost 4-connected moves, so the first time the goal is popped its cost is
/// optimal.
pub trait Heuristic {
    fn estimate(&self, cell: &Point, goal: &Point) -> u32;
}

/// [Manhattan distance](https://en.wikipedia.org/wiki/Taxicab_geometry), the tightest
/// admissible estimate on a 4-connected grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Manhattan;

impl Heuristic for Manhattan {
    fn estimate(&self, cell: &Point, goal: &Point) -> u32 {
        manhattan(cell, goal)
    }
}

/// Always estimates zero, turning the search into Dijkstra's algorithm.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Dijkstra;

impl Heuristic for Dijkstra {
    fn estimate(&self, _: &Point, _: &Point) -> u32 {
        0
    }
}

pub fn manhattan(a: &Point, b: &Point) -> u32 {
    a.x.abs_diff(b.x) + a.y.abs_diff(b.y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::cell;

    #[test]
    fn manhattan_distance() {
        assert_eq!(Manhattan.estimate(&cell(2, 0), &cell(2, 2)), 2);
        assert_eq!(Manhattan.estimate(&cell(0, 0), &cell(3, 4)), 7);
        assert_eq!(Manhattan.estimate(&cell(5, 5), &cell(5, 5)), 0);
        assert_eq!(Dijkstra.estimate(&cell(0, 0), &cell(3, 4)), 0);
    }

    /// h(u) <= 1 + h(v) for every unit move from u to v.
    #[test]
    fn manhattan_is_consistent() {
        let goal = cell(3, 3);
        for row in 1..6 {
            for col in 1..6 {
                let u = cell(row, col);
                for v in [
                    cell(row + 1, col),
                    cell(row - 1, col),
                    cell(row, col + 1),
                    cell(row, col - 1),
                ] {
                    assert!(manhattan(&u, &goal) <= 1 + manhattan(&v, &goal));
                }
            }
        }
    }
}
