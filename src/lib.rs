//! # grid_astar
//!
//! Shortest paths on 4-connected occupancy grids using
//! [A*](https://en.wikipedia.org/wiki/A*_search_algorithm) with the
//! [Manhattan distance](https://en.wikipedia.org/wiki/Taxicab_geometry) as heuristic.
//! A [Grid] is built once from a matrix of [CellTag]s holding exactly one start and one goal,
//! and is never modified by a search. Pre-computes
//! [connected components](https://en.wikipedia.org/wiki/Component_(graph_theory))
//! to avoid flood-filling behaviour if no path exists.
//!
//! ```
//! use grid_astar::{grid::cell, AstarSearch, Grid};
//!
//! let grid = Grid::parse("...\n.#.\nS#G").unwrap();
//! let result = AstarSearch::new().search(&grid);
//! assert!(result.found);
//! assert_eq!(result.length, 6);
//! assert_eq!(result.path.first(), Some(&cell(2, 0)));
//! ```
pub mod error;
pub mod grid;
pub mod heuristic;
pub mod search;

use grid_util::point::Point;
use itertools::Itertools;

pub use error::{DimensionFault, GridError};
pub use grid::{CellTag, Grid};
pub use heuristic::{Dijkstra, Heuristic, Manhattan};
pub use search::{AstarSearch, SearchConfig, SearchFailure, SearchResult};

/// Searches a grid from its start to its goal with the default configuration.
pub fn find_path(grid: &Grid) -> SearchResult {
    AstarSearch::new().search(grid)
}

/// Checks that every consecutive pair of cells differs by one step along exactly one axis.
pub fn is_contiguous(path: &[Point]) -> bool {
    path.iter()
        .tuple_windows()
        .all(|(a, b)| heuristic::manhattan(a, b) == 1)
}

/// Checks that no cell appears twice on the path.
pub fn is_simple(path: &[Point]) -> bool {
    path.iter().all_unique()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::cell;

    #[test]
    fn path_shape_checks() {
        let path = [cell(0, 0), cell(0, 1), cell(1, 1)];
        assert!(is_contiguous(&path));
        assert!(is_simple(&path));
        assert!(!is_contiguous(&[cell(0, 0), cell(1, 1)]));
        assert!(!is_simple(&[cell(0, 0), cell(0, 1), cell(0, 0)]));
        assert!(is_contiguous(&[]));
    }

    #[test]
    fn find_path_uses_grid_markers() {
        let grid = Grid::parse("S.G").unwrap();
        let result = find_path(&grid);
        assert_eq!(result.path, vec![cell(0, 0), cell(0, 1), cell(0, 2)]);
        assert_eq!(result.length, 2);
    }
}
