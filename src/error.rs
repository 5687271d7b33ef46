use grid_util::point::Point;
use thiserror::Error;

use crate::grid::CellTag;

/// Shape problems found while building a [Grid](crate::grid::Grid).
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum DimensionFault {
    #[error("the grid has no cells")]
    Empty,
    #[error("row {row} has {found} cells, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("{rows}x{cols} does not fit in i32 coordinates")]
    TooLarge { rows: usize, cols: usize },
}

/// Errors reported before any search step runs.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("invalid grid dimensions: {0}")]
    InvalidGridDimensions(DimensionFault),
    #[error("no cell is tagged as start")]
    MissingStart,
    #[error("no cell is tagged as goal")]
    MissingGoal,
    /// More than one cell carries the same marker. All offending cells are
    /// listed in scan order.
    #[error("{} cells tagged {marker:?}: {positions:?}", .positions.len())]
    AmbiguousMarker {
        marker: CellTag,
        positions: Vec<Point>,
    },
    #[error("unknown cell tag {symbol:?} at row {row}, column {col}")]
    UnknownTag {
        symbol: String,
        row: usize,
        col: usize,
    },
    #[error("{point} is out of bounds or blocked")]
    InvalidEndpoint { point: Point },
}
